//! Wire Contracts for VaultGuard
//!
//! ## Overview
//!
//! The core never does I/O. Whatever transports its output (websocket
//! broadcast, REST handler, log shipper) speaks the JSON messages defined
//! here, so the shapes live in one place instead of being re-derived by each
//! consumer.
//!
//! ## Messages
//!
//! Every message is a JSON object tagged by `type`:
//!
//! ```json
//! { "type": "tick", "reading": { ... }, "assessment": { ... }, "actions": [ ... ] }
//! { "type": "history", "day": [ ... ], "week": [ ... ] }
//! { "type": "actionLog", "entries": [ ... ] }
//! ```
//!
//! A tick message carries the reading and its assessment together, so a
//! subscriber never sees one without the other.
//!
//! ## Configuration Updates
//!
//! Clients change the artifact type or demo mode with a partial update:
//!
//! ```json
//! { "artifactType": "METALLIC", "demoMode": "remediation" }
//! ```
//!
//! Unknown values are rejected here, before they reach the core. The core
//! itself never sees an invalid key.
//!
//! ## Usage Example
//!
//! ```rust
//! use vaultguard_core::{ArtifactType, DemoMode, MonitorConfig};
//! use vaultguard_schemas::ConfigUpdate;
//!
//! let update = ConfigUpdate::parse(r#"{"demoMode": "atRisk"}"#)?;
//! let config = update.apply(MonitorConfig::default())?;
//!
//! assert_eq!(config.artifact_type, ArtifactType::Paper);
//! assert_eq!(config.demo_mode, DemoMode::AtRisk);
//! # Ok::<(), vaultguard_schemas::SchemaError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod envelopes;
pub mod update;

pub use envelopes::{decode, encode, ActionLogEnvelope, HistoryEnvelope, Message, TickEnvelope};
pub use update::ConfigUpdate;

use vaultguard_core::ConfigError;

/// Wire-level errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum SchemaError {
    /// Malformed JSON or a shape mismatch
    #[error("Invalid message: {0}")]
    Json(#[from] serde_json::Error),

    /// Well-formed message carrying an unknown configuration value
    #[error("Rejected configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias for this crate
pub type SchemaResult<T> = Result<T, SchemaError>;
