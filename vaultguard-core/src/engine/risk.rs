//! Risk Scoring
//!
//! ## Per-metric Contribution
//!
//! Band metrics (temperature, humidity):
//!
//! ```text
//! inside safe            → 0
//! inside warn, off safe  → 25 + 35 · (distance from nearest safe bound
//!                                      ÷ width of the warn buffer on that side)
//! outside warn           → 70 + 30 · min(distance past warn edge ÷ 5, 1)
//! ```
//!
//! Moisture follows the same shape with `[safe_max, warn_max]` as the buffer
//! and a 3 % overshoot span. Access and vibration use a plain linear scale,
//! `value ÷ warn_max · 60`, clamped to [0, 100]. That scale only reaches 100
//! at 5/3 of `warn_max`; the clamp, not the formula, bounds it.
//!
//! ## Composite
//!
//! ```text
//! score = 0.22·T + 0.28·H + 0.22·M + 0.16·A + 0.12·V
//!       + 8   if humidity slope > 0.08 %/min
//!       + 12  if humidity slope > 0.15 %/min   (20 total)
//!       + 4   if the door is open
//!       − 3   if access is locked
//! ```
//!
//! rounded to the nearest integer and clamped to [0, 100].

use crate::{
    constants::risk::*,
    numeric::fraction_across,
    standards::{BandThresholds, MaxThresholds},
};

/// Contribution of a band metric
pub fn band_risk(value: f32, thresholds: &BandThresholds) -> f32 {
    let (safe, warn) = (thresholds.safe, thresholds.warn);

    if safe.contains(value) {
        return 0.0;
    }

    if warn.contains(value) {
        let (distance, span) = if value < safe.min {
            (safe.min - value, safe.min - warn.min)
        } else {
            (value - safe.max, warn.max - safe.max)
        };
        return WARN_BASE + WARN_SPAN * fraction_across(distance, span);
    }

    let overshoot = if value < warn.min {
        warn.min - value
    } else {
        value - warn.max
    };
    DANGER_BASE + DANGER_SPAN * fraction_across(overshoot, BAND_OVERSHOOT_SPAN)
}

/// Contribution of moisture
pub fn moisture_risk(value: f32, thresholds: &MaxThresholds) -> f32 {
    if value <= thresholds.safe_max {
        0.0
    } else if value <= thresholds.warn_max {
        let span = thresholds.warn_max - thresholds.safe_max;
        WARN_BASE + WARN_SPAN * fraction_across(value - thresholds.safe_max, span)
    } else {
        DANGER_BASE
            + DANGER_SPAN * fraction_across(value - thresholds.warn_max, MOISTURE_OVERSHOOT_SPAN)
    }
}

/// Linear contribution used for access frequency and vibration
pub fn linear_risk(value: f32, warn_max: f32) -> f32 {
    if warn_max <= 0.0 {
        return if value > 0.0 { RISK_SCORE_MAX } else { 0.0 };
    }
    (value / warn_max * LINEAR_SCALE_AT_WARN).clamp(0.0, RISK_SCORE_MAX)
}

/// Per-metric contributions feeding the composite
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricRisks {
    /// Temperature contribution
    pub temperature: f32,
    /// Humidity contribution
    pub humidity: f32,
    /// Moisture contribution
    pub moisture: f32,
    /// Access contribution
    pub access: f32,
    /// Vibration contribution
    pub vibration: f32,
}

impl MetricRisks {
    /// Weighted sum of the contributions
    pub fn weighted(&self) -> f32 {
        self.temperature * WEIGHT_TEMPERATURE
            + self.humidity * WEIGHT_HUMIDITY
            + self.moisture * WEIGHT_MOISTURE
            + self.access * WEIGHT_ACCESS
            + self.vibration * WEIGHT_VIBRATION
    }
}

/// Situational adjustments on top of the weighted sum
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Amplifiers {
    /// Humidity slope (%/min)
    pub humidity_slope_per_minute: f32,
    /// Door open in the current reading
    pub door_open: bool,
    /// Access lock in force in the current reading
    pub access_locked: bool,
}

impl Amplifiers {
    /// Points added (or removed) by the current situation
    pub fn bonus(&self) -> f32 {
        let mut bonus = 0.0;
        if self.humidity_slope_per_minute > SLOPE_RISING_PCT_PER_MIN {
            bonus += SLOPE_RISING_BONUS;
        }
        if self.humidity_slope_per_minute > SLOPE_STEEP_PCT_PER_MIN {
            bonus += SLOPE_STEEP_BONUS;
        }
        if self.door_open {
            bonus += DOOR_OPEN_BONUS;
        }
        if self.access_locked {
            bonus -= ACCESS_LOCKED_RELIEF;
        }
        bonus
    }
}

/// Composite risk score in [0, 100]
pub fn composite_score(risks: &MetricRisks, amplifiers: &Amplifiers) -> u8 {
    let raw = risks.weighted() + amplifiers.bonus();
    libm::roundf(raw).clamp(0.0, RISK_SCORE_MAX) as u8
}
