//! Tolerant decoding of list-valued settings fields
//!
//! Hand-edited settings documents frequently spell a one-element access
//! list as a bare value (`allowed-hostnames = "any"`). Every list-valued
//! field goes through the same normalization: a sequence is kept in order
//! with duplicates retained, a bare scalar becomes a one-element list.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SettingsError};

/// A settings value with a canonical string form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum ScalarValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl ScalarValue {
    fn into_string(self) -> String {
        match self {
            ScalarValue::Text(s) => s,
            ScalarValue::Integer(n) => n.to_string(),
            ScalarValue::Float(x) => x.to_string(),
            ScalarValue::Boolean(b) => b.to_string(),
        }
    }
}

/// Raw shape of a list-valued field: a bare value or a sequence of values
///
/// Values with no scalar string form (null, nested sequences, maps) match
/// neither arm and are rejected at decode time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum StringOrList {
    One(ScalarValue),
    Many(Vec<ScalarValue>),
}

impl StringOrList {
    /// Normalize to the canonical list form
    pub(crate) fn into_strings(self) -> Vec<String> {
        match self {
            StringOrList::One(value) => vec![value.into_string()],
            StringOrList::Many(values) => {
                values.into_iter().map(ScalarValue::into_string).collect()
            }
        }
    }

    /// Canonical list form, used when re-encoding settings
    pub(crate) fn from_strings(values: Vec<String>) -> Self {
        StringOrList::Many(values.into_iter().map(ScalarValue::Text).collect())
    }
}

/// Coerce a raw decoded value into the canonical list-of-strings form.
///
/// The raw value is whatever an external parser produced for the field:
/// a sequence keeps its order and duplicates, a bare scalar becomes a
/// one-element list. Values that cannot be stringified fail with
/// [`SettingsError::InputFormat`] and produce no partial output.
pub fn coerce_string_list(raw: serde_json::Value) -> Result<Vec<String>> {
    let shape: StringOrList = serde_json::from_value(raw).map_err(|e| {
        SettingsError::input_format(format!("expected a value or a list of values: {e}"))
    })?;
    Ok(shape.into_strings())
}
