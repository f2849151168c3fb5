//! Error Types for Configuration Values
//!
//! The simulator and engine are total: tick, evaluate and apply never fail.
//! The only recoverable errors come from turning strings supplied by an
//! operator or a client into typed configuration:
//!
//! - `UnknownArtifactType`: no standards entry under that key
//! - `UnknownDemoMode`: not one of `normal`, `atRisk`, `remediation`
//! - `UnknownAction`: not one of the remediation action keys
//!
//! The orchestration layer rejects these before anything reaches the core.
//!
//! ```rust
//! use vaultguard_core::{ArtifactType, ConfigError};
//!
//! let parsed: Result<ArtifactType, _> = "PARCHMENT".parse();
//! assert!(matches!(parsed, Err(ConfigError::UnknownArtifactType(_))));
//! ```

use thiserror_no_std::Error;

/// Result type for configuration parsing
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Rejected configuration value, carrying the offending input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Artifact type key not in the standards table
    #[error("Unknown artifact type: {0}")]
    UnknownArtifactType(String),

    /// Demo mode not recognised
    #[error("Unknown demo mode: {0}")]
    UnknownDemoMode(String),

    /// Remediation action key not recognised
    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_input() {
        let err = ConfigError::UnknownDemoMode("panic".into());
        assert_eq!(err.to_string(), "Unknown demo mode: panic");
    }
}
