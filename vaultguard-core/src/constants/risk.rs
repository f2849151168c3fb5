//! Risk Scoring Parameters
//!
//! ## Per-metric contribution (0-100)
//!
//! ```text
//!   0 ┤ inside safe band
//!  25 ┤ entering warn buffer ─┐
//!     │                       │ linear across the buffer
//!  60 ┤ leaving warn buffer  ─┘
//!  70 ┤ just past the warn edge ─┐
//!     │                          │ linear over a fixed overshoot span
//! 100 ┤ far past the warn edge  ─┘
//! ```
//!
//! Access and vibration use a plain linear scale instead
//! (`value / warn_max * 60`, clamped).

/// Upper bound of any score.
pub const RISK_SCORE_MAX: f32 = 100.0;

/// Contribution at the edge of the safe band.
pub const WARN_BASE: f32 = 25.0;

/// Contribution added across the full warn buffer.
pub const WARN_SPAN: f32 = 35.0;

/// Contribution just past the warn edge.
pub const DANGER_BASE: f32 = 70.0;

/// Contribution added across the overshoot span.
pub const DANGER_SPAN: f32 = 30.0;

/// Overshoot (°C or %) past the warn edge that saturates band metrics.
pub const BAND_OVERSHOOT_SPAN: f32 = 5.0;

/// Overshoot (%) past `warn_max` that saturates moisture.
pub const MOISTURE_OVERSHOOT_SPAN: f32 = 3.0;

/// Scale of the linear access/vibration contribution at `warn_max`.
pub const LINEAR_SCALE_AT_WARN: f32 = 60.0;

// ===== WEIGHTS (sum to 1.0) =====

/// Weight of temperature in the composite score.
pub const WEIGHT_TEMPERATURE: f32 = 0.22;

/// Weight of humidity in the composite score.
pub const WEIGHT_HUMIDITY: f32 = 0.28;

/// Weight of moisture in the composite score.
pub const WEIGHT_MOISTURE: f32 = 0.22;

/// Weight of access frequency in the composite score.
pub const WEIGHT_ACCESS: f32 = 0.16;

/// Weight of vibration in the composite score.
pub const WEIGHT_VIBRATION: f32 = 0.12;

// ===== AMPLIFIERS =====

/// Humidity slope (%/min) above which the score is amplified.
pub const SLOPE_RISING_PCT_PER_MIN: f32 = 0.08;

/// Amplifier for a rising humidity slope.
pub const SLOPE_RISING_BONUS: f32 = 8.0;

/// Humidity slope (%/min) above which the score is amplified again.
pub const SLOPE_STEEP_PCT_PER_MIN: f32 = 0.15;

/// Additional amplifier for a steep slope, on top of the rising one.
pub const SLOPE_STEEP_BONUS: f32 = 12.0;

/// Amplifier while the door is open.
pub const DOOR_OPEN_BONUS: f32 = 4.0;

/// Reduction while access is locked.
pub const ACCESS_LOCKED_RELIEF: f32 = 3.0;

// ===== LEVELS =====

/// Scores below this are LOW.
pub const LEVEL_MEDIUM_FROM: u8 = 30;

/// Scores below this are MEDIUM.
pub const LEVEL_HIGH_FROM: u8 = 60;

/// Scores below this are HIGH, the rest CRITICAL.
pub const LEVEL_CRITICAL_FROM: u8 = 80;

// ===== INSIGHTS AND ACTIONS =====

/// Composite score required before any action is emitted.
pub const ACTION_GATE_SCORE: u8 = 45;

/// Slope (%/min) that counts as "rising" for the trend insight.
pub const INSIGHT_RISING_SLOPE_PCT_PER_MIN: f32 = 0.05;

/// Humidity (%) from which a danger reading always gets the trend insight.
pub const INSIGHT_MOLD_HUMIDITY_PCT: f32 = 60.0;

/// Look-ahead of the humidity projection (minutes).
pub const INSIGHT_PROJECTION_MINUTES: f32 = 30.0;

/// Readings the trend window can hold (15 minutes at 1 Hz is 901)
pub const TREND_WINDOW_CAPACITY: usize = 1024;
