//! Remote Application Entities eligible to receive forwarded studies

use serde::{Deserialize, Serialize};

/// A remote Application Entity that may be named as a C-MOVE destination
///
/// The AE title is the identity key used for removal; the transport
/// attributes are carried as-is for the network service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MoveDestination {
    /// Remote Application Entity Title
    pub ae_title: String,

    /// Remote host address
    pub ip_address: String,

    /// Remote port
    pub port: u16,

    /// Free-form operator description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether this destination is advertised to peers
    #[serde(default)]
    pub public: bool,
}

impl MoveDestination {
    /// Create a new destination
    pub fn new(ae_title: impl Into<String>, ip_address: impl Into<String>, port: u16) -> Self {
        Self {
            ae_title: ae_title.into(),
            ip_address: ip_address.into(),
            port,
            description: None,
            public: false,
        }
    }

    /// Attach an operator description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the destination as publicly advertised
    pub fn with_public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_builder() {
        let dest = MoveDestination::new("REMOTE1", "10.0.0.2", 104)
            .with_description("offsite archive")
            .with_public(true);

        assert_eq!(dest.ae_title, "REMOTE1");
        assert_eq!(dest.ip_address, "10.0.0.2");
        assert_eq!(dest.port, 104);
        assert_eq!(dest.description.as_deref(), Some("offsite archive"));
        assert!(dest.public);
    }
}
