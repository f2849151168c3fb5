//! Constants for VaultGuard Core
//!
//! Every tuning value of the simulator and the decision engine lives here,
//! named with its unit. Grouped by domain:
//! - **Physics**: physical clamps of the enclosure model
//! - **Simulation**: drift, noise, door and vibration behaviour per tick
//! - **Risk**: scoring weights, amplifiers and action gate
//! - **Time**: unit conversions and window lengths
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Include the unit in the name
//! 3. Per-tick values assume the reference 1 Hz cycle

/// Physical bounds of the simulated enclosure.
pub mod physics;

/// Per-tick simulator parameters.
pub mod simulation;

/// Risk scoring weights, amplifiers and thresholds.
pub mod risk;

/// Time conversions and window lengths.
pub mod time;

// Re-export commonly used constants for convenience
pub use physics::{
    TEMP_MIN_C, TEMP_MAX_C, HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT,
    MOISTURE_MIN_PCT, MOISTURE_MAX_PCT, VIBRATION_MIN, VIBRATION_MAX,
};

pub use risk::{ACTION_GATE_SCORE, RISK_SCORE_MAX};

pub use time::{
    MS_PER_SECOND, MS_PER_MINUTE, MS_PER_HOUR, MS_PER_DAY,
    TREND_WINDOW_MS, ACCESS_WINDOW_MS, ACCESS_LOCK_DURATION_MS,
};
