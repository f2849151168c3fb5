//! Physical Bounds of the Enclosure Model
//!
//! Whatever noise, drift or actuator bias the simulator applies, readings are
//! clamped into these intervals before they leave the simulator.

/// Lowest temperature the enclosure model can reach (°C).
pub const TEMP_MIN_C: f32 = 5.0;

/// Highest temperature the enclosure model can reach (°C).
pub const TEMP_MAX_C: f32 = 35.0;

/// Lowest relative humidity the enclosure model can reach (%).
pub const HUMIDITY_MIN_PCT: f32 = 5.0;

/// Highest relative humidity the enclosure model can reach (%).
///
/// Kept below saturation: the enclosure is sealed and never condenses.
pub const HUMIDITY_MAX_PCT: f32 = 95.0;

/// Lowest material moisture content (%).
pub const MOISTURE_MIN_PCT: f32 = 0.0;

/// Highest material moisture content (%).
pub const MOISTURE_MAX_PCT: f32 = 20.0;

/// Vibration is a normalised level.
pub const VIBRATION_MIN: f32 = 0.0;

/// Upper end of the normalised vibration level.
pub const VIBRATION_MAX: f32 = 1.0;

/// Vibration level of a quiet enclosure right after initialisation.
pub const VIBRATION_IDLE: f32 = 0.05;

/// Baseline moisture as a fraction of the artifact's safe maximum.
///
/// Starts "near but under" the limit, the way real stores drift.
pub const BASELINE_MOISTURE_FRACTION: f32 = 0.8;
