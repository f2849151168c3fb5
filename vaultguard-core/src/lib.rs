//! Core simulation and decision engine for VaultGuard
//!
//! Simulates the environment inside an artifact-storage enclosure and judges
//! every reading against preservation thresholds for the stored artifact type.
//!
//! The two halves form a closed loop:
//! - [`ReadingSimulator`] produces physically plausible readings under a
//!   chosen demo mode and exposes actuator-like controls.
//! - [`DecisionEngine`] classifies each reading, scores risk with a humidity
//!   trend amplifier, explains itself in plain sentences and picks
//!   remediation actions.
//! - [`FeedbackLoop`] wires them together: tick, evaluate, apply actions, record.
//!
//! ```no_run
//! use vaultguard_core::{FeedbackLoop, MonitorConfig, SeededNoise};
//! use vaultguard_core::time::{SystemTime, TimeSource};
//!
//! let clock = SystemTime;
//! let noise = SeededNoise::from_entropy();
//! let mut monitor = FeedbackLoop::new(MonitorConfig::default(), noise, clock.now());
//!
//! let outcome = monitor.cycle(clock.now());
//! println!("risk {} ({:?})", outcome.assessment.risk_score, outcome.assessment.risk_level);
//! ```
//!
//! Everything here is single-writer: one driver calls `tick`/`evaluate` in
//! sequence. Readers that run concurrently should only ever see the
//! complete `(Reading, Assessment)` pair the loop publishes after a cycle.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod actions;
pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod feedback;
pub mod noise;
pub mod numeric;
pub mod simulator;
pub mod standards;
pub mod time;

// Public API
pub use actions::{ActionContext, ActionType, RemediationAction};
pub use config::{DemoMode, MonitorConfig};
pub use engine::{
    Assessment, DecisionEngine, MetricReport, MetricReports, MetricStatus, RiskLevel, StatusColor,
    TrendWindow,
};
pub use errors::{ConfigError, ConfigResult};
pub use feedback::{ActionLogEntry, CycleOutcome, FeedbackLoop};
pub use noise::{NoiseSource, QuietNoise, ScriptedNoise, SeededNoise};
pub use simulator::{
    Conditions, ControlBiases, DoorState, History, Reading, ReadingSimulator, SimulatorState,
};
pub use standards::{ArtifactType, Band, StandardsEntry, StandardsTable};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
