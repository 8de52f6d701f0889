//! Query/retrieve service sub-configuration
//!
//! Owned by the query/retrieve subsystem; carried here so the settings
//! document keeps a single root.

use serde::{Deserialize, Serialize};

use crate::DEFAULT_QUERY_RETRIEVE_PORT;

/// Settings of the C-FIND/C-MOVE service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct QueryRetrieveConfig {
    /// Start the query/retrieve service together with the node
    pub autostart: bool,

    /// Listening port of the query/retrieve service
    pub port: u16,

    /// Artificial delay before each response, in milliseconds
    pub rsp_delay_ms: u64,

    /// Idle association timeout in milliseconds
    pub idle_timeout_ms: u64,

    /// Association accept timeout in milliseconds
    pub accept_timeout_ms: u64,

    /// Connection timeout in milliseconds
    pub connection_timeout_ms: u64,

    /// Maximum number of concurrent client associations
    pub max_associations: u32,
}

impl Default for QueryRetrieveConfig {
    fn default() -> Self {
        Self {
            autostart: true,
            port: DEFAULT_QUERY_RETRIEVE_PORT,
            rsp_delay_ms: 0,
            idle_timeout_ms: 60_000,
            accept_timeout_ms: 60_000,
            connection_timeout_ms: 300_000,
            max_associations: 20,
        }
    }
}
