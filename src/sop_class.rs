//! SOP class entries and default transfer syntax resolution

use serde::{Deserialize, Serialize};

use crate::error::{Result, SettingsError};

/// UID spelling that marks an entry as the shared default
///
/// The empty string is accepted on input for the same purpose.
pub const DEFAULT_ENTRY_UID: &str = "default";

/// A supported SOP class together with the transfer syntaxes accepted for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SopClass {
    /// SOP class UID
    pub uid: String,

    /// Transfer syntax UIDs accepted for this class
    #[serde(
        rename = "transfer-syntaxes",
        alias = "ts",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub transfer_syntaxes: Vec<String>,
}

impl SopClass {
    /// Create an entry with no transfer syntaxes of its own
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            transfer_syntaxes: Vec::new(),
        }
    }

    /// Replace the transfer syntax list
    pub fn with_transfer_syntaxes<I, S>(mut self, transfer_syntaxes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.transfer_syntaxes = transfer_syntaxes.into_iter().map(Into::into).collect();
        self
    }
}

/// Raw form of one `sop-classes` element: a bare UID or a full entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SopClassEntry {
    /// Bare SOP class UID, no transfer syntaxes of its own
    Uid(String),
    /// Full entry
    Spec(SopClass),
}

/// Outcome of resolving the raw `sop-classes` sequence
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedSopClasses {
    /// Explicit entries, in input order
    pub classes: Vec<SopClass>,

    /// Transfer syntaxes extracted from the default entry, if one was present
    pub default_transfer_syntaxes: Option<Vec<String>>,
}

/// Decode a raw `sop-classes` value as produced by an external parser.
///
/// Elements that are neither a bare UID string nor a full entry fail with
/// [`SettingsError::InputFormat`] rather than being dropped.
pub fn entries_from_value(raw: serde_json::Value) -> Result<Vec<SopClassEntry>> {
    serde_json::from_value(raw)
        .map_err(|e| SettingsError::input_format(format!("expected a list of SOP classes: {e}")))
}

/// Resolve the raw `sop-classes` sequence into explicit entries and the
/// extracted default transfer syntax list.
///
/// Entries whose UID is empty or `"default"` are never stored as classes;
/// their transfer syntaxes become the shared default, and when several are
/// present the last one in input order wins. Bare UID strings become
/// entries with an empty transfer syntax list. After the whole sequence
/// has been walked, the default is copied onto every entry that declared
/// no transfer syntaxes of its own; entries with an explicit list keep it.
pub fn resolve_sop_classes(raw: Option<Vec<SopClassEntry>>) -> ResolvedSopClasses {
    let Some(entries) = raw else {
        return ResolvedSopClasses::default();
    };

    let mut default_transfer_syntaxes: Option<Vec<String>> = None;
    let mut classes = Vec::with_capacity(entries.len());

    for entry in entries {
        match entry {
            SopClassEntry::Uid(uid) => classes.push(SopClass::new(uid)),
            SopClassEntry::Spec(spec) if is_default_uid(&spec.uid) => {
                if default_transfer_syntaxes.is_some() {
                    tracing::debug!("multiple default transfer syntax entries, keeping the last");
                }
                default_transfer_syntaxes = Some(spec.transfer_syntaxes);
            }
            SopClassEntry::Spec(spec) => classes.push(spec),
        }
    }

    if let Some(default_ts) = &default_transfer_syntaxes {
        for class in classes.iter_mut() {
            if class.transfer_syntaxes.is_empty() {
                class.transfer_syntaxes = default_ts.clone();
            }
        }
    }

    ResolvedSopClasses {
        classes,
        default_transfer_syntaxes,
    }
}

fn is_default_uid(uid: &str) -> bool {
    uid.is_empty() || uid == DEFAULT_ENTRY_UID
}
