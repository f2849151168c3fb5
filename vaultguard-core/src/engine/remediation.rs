//! Action selection
//!
//! Proposals come from individual metrics; the composite score decides
//! whether any of them are emitted. A lone warn metric in an otherwise calm
//! enclosure is reported but not acted on.

use crate::{
    actions::{ActionType, RemediationAction},
    constants::risk::ACTION_GATE_SCORE,
    simulator::Reading,
    standards::StandardsEntry,
};

use super::{MetricReports, MetricStatus};

/// Actions the metrics call for, before the risk gate
///
/// - humidity danger, or warn above the safe band: dehumidify and boost airflow
/// - otherwise humidity warn below the safe band: humidify
/// - temperature warn or danger: nudge toward the safe midpoint
/// - access danger: lock the door for ten minutes
pub fn propose_actions(
    reading: &Reading,
    standards: &StandardsEntry,
    metrics: &MetricReports,
) -> Vec<RemediationAction> {
    let mut proposed = Vec::new();

    let humidity = reading.humidity_pct;
    let humidity_safe = standards.humidity.safe;
    match metrics.humidity.status {
        MetricStatus::Danger => {
            let reason = format!(
                "Humidity {:.1}% is outside the tolerable range {}%",
                humidity, standards.humidity.warn
            );
            proposed.push(RemediationAction::new(ActionType::Dehumidify, reason.clone()));
            proposed.push(RemediationAction::new(ActionType::TriggerAirflow, reason));
        }
        MetricStatus::Warn if humidity > humidity_safe.max => {
            let reason = format!(
                "Humidity {:.1}% is above the safe range {}%",
                humidity, humidity_safe
            );
            proposed.push(RemediationAction::new(ActionType::Dehumidify, reason.clone()));
            proposed.push(RemediationAction::new(ActionType::TriggerAirflow, reason));
        }
        MetricStatus::Warn if humidity < humidity_safe.min => {
            proposed.push(RemediationAction::new(
                ActionType::Humidify,
                format!(
                    "Humidity {:.1}% is below the safe range {}%",
                    humidity, humidity_safe
                ),
            ));
        }
        _ => {}
    }

    if metrics.temperature.status != MetricStatus::Safe {
        let temperature = reading.temperature_c;
        let safe = standards.temperature.safe;
        let (action, direction) = if temperature > safe.midpoint() {
            (ActionType::AdjustTempDown, "above")
        } else {
            (ActionType::AdjustTempUp, "below")
        };
        proposed.push(RemediationAction::new(
            action,
            format!(
                "Temperature {:.1}°C is {} the safe range {}°C",
                temperature, direction, safe
            ),
        ));
    }

    if metrics.access.status == MetricStatus::Danger {
        proposed.push(RemediationAction::new(
            ActionType::LockAccess10Min,
            format!(
                "Door opened {} times in the last hour (limit {})",
                reading.opens_per_hour, standards.access.max_opens_per_hour_warn
            ),
        ));
    }

    proposed
}

/// Emit proposals only when the composite score clears the gate
pub fn gate_actions(proposed: Vec<RemediationAction>, risk_score: u8) -> Vec<RemediationAction> {
    if risk_score >= ACTION_GATE_SCORE {
        return proposed;
    }
    if !proposed.is_empty() {
        log::debug!(
            "risk {} below gate {}, holding {} proposed action(s)",
            risk_score,
            ACTION_GATE_SCORE,
            proposed.len()
        );
    }
    Vec::new()
}
