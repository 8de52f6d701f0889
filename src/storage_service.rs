//! Storage service sub-configuration
//!
//! Owned by the storage subsystem; carried here so the settings document
//! keeps a single root. Unknown keys inside it are the owner's business.

use serde::{Deserialize, Serialize};

use crate::DEFAULT_STORAGE_PORT;

/// Settings of the C-STORE service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct StorageServiceConfig {
    /// Start the storage service together with the node
    pub autostart: bool,

    /// Listening port of the storage service
    pub port: u16,
}

impl Default for StorageServiceConfig {
    fn default() -> Self {
        Self {
            autostart: true,
            port: DEFAULT_STORAGE_PORT,
        }
    }
}
