//! The DICOM services settings aggregate

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::coerce::StringOrList;
use crate::error::Result;
use crate::move_destination::MoveDestination;
use crate::query_retrieve::QueryRetrieveConfig;
use crate::sop_class::{resolve_sop_classes, SopClass, SopClassEntry, DEFAULT_ENTRY_UID};
use crate::storage_service::StorageServiceConfig;
use crate::DEFAULT_AE_TITLE;

/// Network service settings of a DICOM storage node
///
/// Decoding runs each list-valued field through the scalar-or-list
/// normalization and the `sop-classes` sequence through default transfer
/// syntax resolution, so a decoded value always holds canonical lists and
/// explicit SOP class entries only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawDicomServices", into = "RawDicomServices")]
pub struct DicomServicesConfig {
    /// This node's Application Entity title
    pub aetitle: String,

    /// Operator-facing device description
    pub device_description: Option<String>,

    /// AE titles permitted to open associations; empty means none are
    pub allowed_aetitles: Vec<String>,

    /// AE titles given priority scheduling
    pub priority_aetitles: Vec<String>,

    /// Local interfaces the services bind to; `"any"` is plain data here,
    /// its meaning belongs to the network service
    pub allowed_local_interfaces: Vec<String>,

    /// Hostnames permitted to connect; `"any"` is plain data here
    pub allowed_hostnames: Vec<String>,

    sop_classes: Vec<SopClass>,
    default_transfer_syntaxes: Vec<String>,
    move_destinations: Vec<MoveDestination>,

    /// Storage subsystem settings, owned by the storage service
    pub storage: StorageServiceConfig,

    /// Query/retrieve subsystem settings, owned by the query/retrieve service
    pub query_retrieve: QueryRetrieveConfig,
}

impl Default for DicomServicesConfig {
    fn default() -> Self {
        Self {
            aetitle: DEFAULT_AE_TITLE.to_string(),
            device_description: None,
            allowed_aetitles: Vec::new(),
            priority_aetitles: Vec::new(),
            allowed_local_interfaces: vec!["any".to_string()],
            allowed_hostnames: vec!["any".to_string()],
            sop_classes: Vec::new(),
            default_transfer_syntaxes: Vec::new(),
            move_destinations: Vec::new(),
            storage: StorageServiceConfig::default(),
            query_retrieve: QueryRetrieveConfig::default(),
        }
    }
}

impl DicomServicesConfig {
    /// Resolved SOP classes, explicit entries only
    ///
    /// When a default transfer syntax entry was present at resolution,
    /// every entry here carries at least one transfer syntax.
    pub fn sop_classes(&self) -> &[SopClass] {
        &self.sop_classes
    }

    /// Transfer syntaxes extracted from the default entry, empty when the
    /// last resolution saw none
    pub fn default_transfer_syntaxes(&self) -> &[String] {
        &self.default_transfer_syntaxes
    }

    /// Replace the SOP class set from raw entries, re-running resolution.
    ///
    /// The explicit entries and the extracted default are replaced in one
    /// step; previous values never mix with the new ones.
    pub fn set_sop_classes<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = SopClassEntry>,
    {
        let resolved = resolve_sop_classes(Some(entries.into_iter().collect()));
        self.sop_classes = resolved.classes;
        self.default_transfer_syntaxes = resolved.default_transfer_syntaxes.unwrap_or_default();
    }

    /// Configured C-MOVE destinations, in insertion order
    pub fn move_destinations(&self) -> &[MoveDestination] {
        &self.move_destinations
    }

    /// Register a destination. Duplicate AE titles are allowed.
    pub fn add_move_destination(&mut self, destination: MoveDestination) {
        self.move_destinations.push(destination);
    }

    /// Remove every destination whose AE title matches exactly.
    ///
    /// Returns whether at least one entry was removed; the remaining
    /// entries keep their relative order.
    pub fn remove_move_destination(&mut self, ae_title: &str) -> bool {
        let before = self.move_destinations.len();
        self.move_destinations
            .retain(|destination| destination.ae_title != ae_title);
        self.move_destinations.len() != before
    }

    /// Decode settings from a TOML document
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Encode settings as a TOML document
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!("Loaded DICOM service settings from {}", path.display());
        Ok(config)
    }

    /// Save settings to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_toml_string()?)?;
        tracing::debug!("Saved DICOM service settings to {}", path.display());
        Ok(())
    }
}

/// Persisted document shape: tolerant on input, canonical on output
///
/// On output the extracted default transfer syntaxes are re-emitted as a
/// trailing `"default"` pseudo-entry, so a decode of the output resolves
/// to the same aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawDicomServices {
    #[serde(default = "default_aetitle")]
    aetitle: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    device_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    allowed_aetitles: Option<StringOrList>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    priority_aetitles: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    allowed_local_interfaces: Option<StringOrList>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    allowed_hostnames: Option<StringOrList>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    sop_classes: Option<Vec<SopClassEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    move_destinations: Option<Vec<MoveDestination>>,

    #[serde(default)]
    storage: StorageServiceConfig,

    #[serde(default)]
    query_retrieve: QueryRetrieveConfig,
}

fn default_aetitle() -> String {
    DEFAULT_AE_TITLE.to_string()
}

impl From<RawDicomServices> for DicomServicesConfig {
    fn from(raw: RawDicomServices) -> Self {
        let resolved = resolve_sop_classes(raw.sop_classes);

        Self {
            aetitle: raw.aetitle,
            device_description: raw.device_description,
            allowed_aetitles: raw
                .allowed_aetitles
                .map(StringOrList::into_strings)
                .unwrap_or_default(),
            priority_aetitles: raw.priority_aetitles,
            allowed_local_interfaces: raw
                .allowed_local_interfaces
                .map(StringOrList::into_strings)
                .unwrap_or_else(|| vec!["any".to_string()]),
            allowed_hostnames: raw
                .allowed_hostnames
                .map(StringOrList::into_strings)
                .unwrap_or_else(|| vec!["any".to_string()]),
            sop_classes: resolved.classes,
            default_transfer_syntaxes: resolved.default_transfer_syntaxes.unwrap_or_default(),
            move_destinations: raw.move_destinations.unwrap_or_default(),
            storage: raw.storage,
            query_retrieve: raw.query_retrieve,
        }
    }
}

impl From<DicomServicesConfig> for RawDicomServices {
    fn from(config: DicomServicesConfig) -> Self {
        let mut entries: Vec<SopClassEntry> = config
            .sop_classes
            .into_iter()
            .map(SopClassEntry::Spec)
            .collect();
        if !config.default_transfer_syntaxes.is_empty() {
            entries.push(SopClassEntry::Spec(SopClass {
                uid: DEFAULT_ENTRY_UID.to_string(),
                transfer_syntaxes: config.default_transfer_syntaxes,
            }));
        }

        Self {
            aetitle: config.aetitle,
            device_description: config.device_description,
            allowed_aetitles: Some(StringOrList::from_strings(config.allowed_aetitles)),
            priority_aetitles: config.priority_aetitles,
            allowed_local_interfaces: Some(StringOrList::from_strings(
                config.allowed_local_interfaces,
            )),
            allowed_hostnames: Some(StringOrList::from_strings(config.allowed_hostnames)),
            sop_classes: if entries.is_empty() {
                None
            } else {
                Some(entries)
            },
            move_destinations: if config.move_destinations.is_empty() {
                None
            } else {
                Some(config.move_destinations)
            },
            storage: config.storage,
            query_retrieve: config.query_retrieve,
        }
    }
}
