//! Three-tier classification against standards
//!
//! Band metrics use closed-interval containment; max-threshold metrics
//! compare against `safe_max` then `warn_max`, both inclusive.

use crate::standards::{AccessThresholds, BandThresholds, MaxThresholds};

use super::MetricStatus;

/// Classify a band metric (temperature, humidity)
pub fn classify_band(value: f32, thresholds: &BandThresholds) -> MetricStatus {
    if thresholds.safe.contains(value) {
        MetricStatus::Safe
    } else if thresholds.warn.contains(value) {
        MetricStatus::Warn
    } else {
        MetricStatus::Danger
    }
}

/// Classify a max-threshold metric (moisture, vibration)
pub fn classify_max(value: f32, thresholds: &MaxThresholds) -> MetricStatus {
    if value <= thresholds.safe_max {
        MetricStatus::Safe
    } else if value <= thresholds.warn_max {
        MetricStatus::Warn
    } else {
        MetricStatus::Danger
    }
}

/// Classify door openings per trailing hour
pub fn classify_access(opens_per_hour: u32, thresholds: &AccessThresholds) -> MetricStatus {
    if opens_per_hour <= thresholds.max_opens_per_hour_safe {
        MetricStatus::Safe
    } else if opens_per_hour <= thresholds.max_opens_per_hour_warn {
        MetricStatus::Warn
    } else {
        MetricStatus::Danger
    }
}
