//! Service settings model for a DICOM storage node
//!
//! This crate models the network-facing configuration of a DICOM storage
//! service: the local Application Entity, peer access lists, the SOP
//! classes accepted with their transfer syntaxes, and the remote nodes
//! eligible to receive C-MOVE forwards.
//!
//! # Features
//! - Tolerant decoding of access lists (a bare value or a list)
//! - SOP class resolution with a shared default transfer syntax entry
//! - Move destination registry with removal by AE title
//! - Round-trip stable TOML persistence

pub mod coerce;
pub mod error;
pub mod move_destination;
pub mod query_retrieve;
pub mod settings;
pub mod sop_class;
pub mod storage_service;

// Re-export commonly used types
pub use coerce::coerce_string_list;
pub use error::{Result, SettingsError};
pub use move_destination::MoveDestination;
pub use query_retrieve::QueryRetrieveConfig;
pub use settings::DicomServicesConfig;
pub use sop_class::{resolve_sop_classes, ResolvedSopClasses, SopClass, SopClassEntry};
pub use storage_service::StorageServiceConfig;

/// Application Entity title of a freshly configured node
pub const DEFAULT_AE_TITLE: &str = "DICOOGLE-STORAGE";

/// Default listening port of the storage service
pub const DEFAULT_STORAGE_PORT: u16 = 6666;

/// Default listening port of the query/retrieve service
pub const DEFAULT_QUERY_RETRIEVE_PORT: u16 = 1045;
