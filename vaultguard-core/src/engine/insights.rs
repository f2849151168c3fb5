//! Plain-language explanations of an assessment
//!
//! Order is fixed so dashboards can diff successive assessments:
//! 1. humidity trend prediction, when humidity is heading for trouble
//! 2. one sentence per non-safe metric: temperature, humidity, moisture,
//!    access, vibration
//! 3. or, when everything is safe, a single all-clear message

use crate::{
    constants::risk::{
        INSIGHT_MOLD_HUMIDITY_PCT, INSIGHT_PROJECTION_MINUTES, INSIGHT_RISING_SLOPE_PCT_PER_MIN,
    },
    simulator::Reading,
    standards::{Band, StandardsEntry},
};

use super::{MetricReports, MetricStatus};

/// Build the ordered insight list
pub fn build_insights(
    reading: &Reading,
    standards: &StandardsEntry,
    metrics: &MetricReports,
    humidity_slope_per_minute: f32,
) -> Vec<String> {
    let mut insights = Vec::new();

    let trend = humidity_trend(reading, metrics.humidity.status, humidity_slope_per_minute);
    if let Some(trend) = trend {
        insights.push(trend);
    }

    if metrics.temperature.status != MetricStatus::Safe {
        insights.push(band_sentence(
            "Temperature",
            reading.temperature_c,
            "°C",
            &standards.temperature.safe,
            metrics.temperature.status,
        ));
    }

    if metrics.humidity.status != MetricStatus::Safe {
        insights.push(band_sentence(
            "Humidity",
            reading.humidity_pct,
            "%",
            &standards.humidity.safe,
            metrics.humidity.status,
        ));
    }

    if metrics.moisture.status != MetricStatus::Safe {
        insights.push(format!(
            "Material moisture at {:.1}% exceeds the safe limit of {}% ({}).",
            reading.moisture_pct,
            standards.moisture.safe_max,
            metrics.moisture.status.describe()
        ));
    }

    if metrics.access.status != MetricStatus::Safe {
        insights.push(format!(
            "Door opened {} times in the last hour; the safe limit is {} ({}).",
            reading.opens_per_hour,
            standards.access.max_opens_per_hour_safe,
            metrics.access.status.describe()
        ));
    }

    if metrics.vibration.status != MetricStatus::Safe {
        insights.push(format!(
            "Vibration level {:.2} exceeds the safe limit of {} ({}).",
            reading.vibration,
            standards.vibration.safe_max,
            metrics.vibration.status.describe()
        ));
    }

    if insights.is_empty() {
        insights.push(format!(
            "All conditions are within preservation thresholds for {}.",
            standards.label
        ));
    }

    insights
}

fn humidity_trend(reading: &Reading, status: MetricStatus, slope: f32) -> Option<String> {
    let humidity = reading.humidity_pct;
    let mold_zone = status == MetricStatus::Danger && humidity >= INSIGHT_MOLD_HUMIDITY_PCT;
    let rising = status == MetricStatus::Warn && slope > INSIGHT_RISING_SLOPE_PCT_PER_MIN;

    if !(mold_zone || rising) {
        return None;
    }

    if slope > 0.0 {
        let projected = humidity + slope * INSIGHT_PROJECTION_MINUTES;
        Some(format!(
            "Humidity is rising {:.2}%/min; at this rate it reaches {:.1}% within {} minutes, \
             raising mold and corrosion risk.",
            slope, projected, INSIGHT_PROJECTION_MINUTES as u32
        ))
    } else {
        Some(format!(
            "Humidity at {:.1}% can sustain mold growth if it persists.",
            humidity
        ))
    }
}

fn band_sentence(name: &str, value: f32, unit: &str, safe: &Band, status: MetricStatus) -> String {
    let direction = if value > safe.max { "above" } else { "below" };
    format!(
        "{} at {:.1}{} is {} the safe range {}{} ({}).",
        name,
        value,
        unit,
        direction,
        safe,
        unit,
        status.describe()
    )
}
