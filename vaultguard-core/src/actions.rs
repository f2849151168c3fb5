//! Remediation Actions
//!
//! The closed set of actuator commands the engine may propose and the
//! simulator understands. Each one nudges the simulator's control biases:
//!
//! | Action | Effect on biases |
//! |--------|------------------|
//! | `ADJUST_TEMP_DOWN` | temperature bias −0.15 °C |
//! | `ADJUST_TEMP_UP` | temperature bias +0.15 °C |
//! | `DEHUMIDIFY` | humidity bias −0.4 %, airflow +0.2 |
//! | `HUMIDIFY` | humidity bias +0.4 % |
//! | `TRIGGER_AIRFLOW` | airflow +0.25 |
//! | `LOCK_ACCESS_10_MIN` | access locked until at least now + 10 min |
//!
//! Effects compound: applying the same action twice doubles the bias.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, ConfigResult};
use crate::simulator::{DoorState, Reading};

/// Actuator command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    /// Lower the temperature setpoint
    AdjustTempDown,
    /// Raise the temperature setpoint
    AdjustTempUp,
    /// Run the dehumidifier
    Dehumidify,
    /// Run the humidifier
    Humidify,
    /// Boost air circulation
    TriggerAirflow,
    /// Keep the door locked for ten minutes
    #[serde(rename = "LOCK_ACCESS_10_MIN")]
    LockAccess10Min,
}

impl ActionType {
    /// Every action type
    pub const ALL: [ActionType; 6] = [
        ActionType::AdjustTempDown,
        ActionType::AdjustTempUp,
        ActionType::Dehumidify,
        ActionType::Humidify,
        ActionType::TriggerAirflow,
        ActionType::LockAccess10Min,
    ];

    /// Wire key, e.g. `TRIGGER_AIRFLOW`
    pub const fn key(&self) -> &'static str {
        match self {
            ActionType::AdjustTempDown => "ADJUST_TEMP_DOWN",
            ActionType::AdjustTempUp => "ADJUST_TEMP_UP",
            ActionType::Dehumidify => "DEHUMIDIFY",
            ActionType::Humidify => "HUMIDIFY",
            ActionType::TriggerAirflow => "TRIGGER_AIRFLOW",
            ActionType::LockAccess10Min => "LOCK_ACCESS_10_MIN",
        }
    }

    /// Display label for operators
    pub const fn label(&self) -> &'static str {
        match self {
            ActionType::AdjustTempDown => "Lower temperature setpoint",
            ActionType::AdjustTempUp => "Raise temperature setpoint",
            ActionType::Dehumidify => "Run dehumidifier",
            ActionType::Humidify => "Run humidifier",
            ActionType::TriggerAirflow => "Boost airflow",
            ActionType::LockAccess10Min => "Lock access for 10 minutes",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ActionType {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        let key = s.trim();
        ActionType::ALL
            .into_iter()
            .find(|a| a.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| ConfigError::UnknownAction(s.to_string()))
    }
}

/// Key fields of the reading that triggered an action
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionContext {
    /// Temperature (°C)
    pub temperature_c: f32,
    /// Relative humidity (%)
    pub humidity_pct: f32,
    /// Material moisture (%)
    pub moisture_pct: f32,
    /// Door openings in the trailing hour
    pub opens_per_hour: u32,
    /// Normalised vibration
    pub vibration: f32,
    /// Door state at the time
    pub door_state: DoorState,
}

impl From<&Reading> for ActionContext {
    fn from(reading: &Reading) -> Self {
        Self {
            temperature_c: reading.temperature_c,
            humidity_pct: reading.humidity_pct,
            moisture_pct: reading.moisture_pct,
            opens_per_hour: reading.opens_per_hour,
            vibration: reading.vibration,
            door_state: reading.door_state,
        }
    }
}

/// An action the engine selected, with its justification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemediationAction {
    /// What to do
    #[serde(rename = "type")]
    pub action: ActionType,
    /// Display label
    pub label: String,
    /// Why the engine chose it
    pub reason: String,
    /// Triggering reading, filled in when the action is logged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ActionContext>,
}

impl RemediationAction {
    /// Action with its standard label
    pub fn new(action: ActionType, reason: impl Into<String>) -> Self {
        Self {
            action,
            label: action.label().to_string(),
            reason: reason.into(),
            context: None,
        }
    }

    /// Attach the triggering reading
    pub fn with_context(mut self, reading: &Reading) -> Self {
        self.context = Some(ActionContext::from(reading));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_parse_back() {
        for action in ActionType::ALL {
            assert_eq!(action.key().parse::<ActionType>(), Ok(action));
        }
        assert!(matches!(
            "OPEN_WINDOW".parse::<ActionType>(),
            Err(ConfigError::UnknownAction(_))
        ));
    }

    #[test]
    fn new_uses_standard_label() {
        let action = RemediationAction::new(ActionType::Dehumidify, "too wet");
        assert_eq!(action.label, "Run dehumidifier");
        assert_eq!(action.reason, "too wet");
        assert!(action.context.is_none());
    }
}
