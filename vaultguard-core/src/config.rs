//! Monitor Configuration
//!
//! Two knobs drive the whole loop: which artifact type is stored (selects the
//! standards) and which demo mode the simulator runs (selects drift, start
//! offsets and event rates). They live in a plain [`MonitorConfig`] value the
//! caller owns and hands to constructors; nothing reads a global.
//!
//! ## Demo Modes
//!
//! | Mode | Start | Drift | Door opens | Vibration bumps |
//! |------|-------|-------|-----------|-----------------|
//! | `normal` | baseline ± small noise | none | 1 % / tick | 1 % / tick |
//! | `atRisk` | moderately toward unsafe | warming, wetting | 3 % / tick | 2 % / tick |
//! | `remediation` | substantially toward unsafe | slowly recovering | 5 % / tick | 3 % / tick |

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::simulation::*;
use crate::errors::{ConfigError, ConfigResult};
use crate::noise::NoiseSource;
use crate::standards::ArtifactType;

/// Scenario selector for the simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DemoMode {
    /// Conditions hover around the baseline
    #[default]
    Normal,
    /// Conditions start off and keep drifting toward unsafe
    AtRisk,
    /// Conditions start well off and slowly recover
    Remediation,
}

/// Starting offsets from baseline drawn at initialisation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialOffsets {
    /// Temperature offset (°C)
    pub temperature_c: f32,
    /// Humidity offset (%)
    pub humidity_pct: f32,
    /// Moisture offset (%)
    pub moisture_pct: f32,
}

impl DemoMode {
    /// Every demo mode
    pub const ALL: [DemoMode; 3] = [DemoMode::Normal, DemoMode::AtRisk, DemoMode::Remediation];

    /// Wire key, e.g. `atRisk`
    pub const fn key(&self) -> &'static str {
        match self {
            DemoMode::Normal => "normal",
            DemoMode::AtRisk => "atRisk",
            DemoMode::Remediation => "remediation",
        }
    }

    /// Temperature and humidity drift applied every tick
    pub const fn drift(&self) -> (f32, f32) {
        match self {
            DemoMode::Normal => (0.0, 0.0),
            DemoMode::AtRisk => (AT_RISK_TEMP_DRIFT_C, AT_RISK_HUMIDITY_DRIFT_PCT),
            DemoMode::Remediation => (REMEDIATION_TEMP_DRIFT_C, REMEDIATION_HUMIDITY_DRIFT_PCT),
        }
    }

    /// Chance per tick that a closed door opens
    pub const fn door_open_chance(&self) -> f32 {
        match self {
            DemoMode::Normal => DOOR_OPEN_CHANCE_NORMAL,
            DemoMode::AtRisk => DOOR_OPEN_CHANCE_AT_RISK,
            DemoMode::Remediation => DOOR_OPEN_CHANCE_REMEDIATION,
        }
    }

    /// Chance per tick of a vibration bump
    pub const fn vibration_bump_chance(&self) -> f32 {
        match self {
            DemoMode::Normal => VIBRATION_BUMP_CHANCE_NORMAL,
            DemoMode::AtRisk => VIBRATION_BUMP_CHANCE_AT_RISK,
            DemoMode::Remediation => VIBRATION_BUMP_CHANCE_REMEDIATION,
        }
    }

    /// Draw starting offsets; every non-normal offset points toward unsafe
    pub fn draw_offsets<N: NoiseSource + ?Sized>(&self, noise: &mut N) -> InitialOffsets {
        match self {
            DemoMode::Normal => InitialOffsets {
                temperature_c: noise.symmetric(NORMAL_TEMP_OFFSET_C),
                humidity_pct: noise.symmetric(NORMAL_HUMIDITY_OFFSET_PCT),
                moisture_pct: noise.symmetric(NORMAL_MOISTURE_OFFSET_PCT),
            },
            DemoMode::AtRisk => InitialOffsets {
                temperature_c: noise.uniform(AT_RISK_TEMP_OFFSET_C.0, AT_RISK_TEMP_OFFSET_C.1),
                humidity_pct: noise
                    .uniform(AT_RISK_HUMIDITY_OFFSET_PCT.0, AT_RISK_HUMIDITY_OFFSET_PCT.1),
                moisture_pct: noise
                    .uniform(AT_RISK_MOISTURE_OFFSET_PCT.0, AT_RISK_MOISTURE_OFFSET_PCT.1),
            },
            DemoMode::Remediation => InitialOffsets {
                temperature_c: noise
                    .uniform(REMEDIATION_TEMP_OFFSET_C.0, REMEDIATION_TEMP_OFFSET_C.1),
                humidity_pct: noise.uniform(
                    REMEDIATION_HUMIDITY_OFFSET_PCT.0,
                    REMEDIATION_HUMIDITY_OFFSET_PCT.1,
                ),
                moisture_pct: noise.uniform(
                    REMEDIATION_MOISTURE_OFFSET_PCT.0,
                    REMEDIATION_MOISTURE_OFFSET_PCT.1,
                ),
            },
        }
    }
}

impl fmt::Display for DemoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DemoMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        let key = s.trim();
        DemoMode::ALL
            .into_iter()
            .find(|m| m.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| ConfigError::UnknownDemoMode(s.to_string()))
    }
}

/// Configuration shared by the simulator and the feedback loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorConfig {
    /// Stored artifact type
    pub artifact_type: ArtifactType,
    /// Simulator scenario
    pub demo_mode: DemoMode,
}

impl MonitorConfig {
    /// Config from both knobs
    pub const fn new(artifact_type: ArtifactType, demo_mode: DemoMode) -> Self {
        Self {
            artifact_type,
            demo_mode,
        }
    }

    /// Same config with another artifact type
    pub const fn with_artifact_type(mut self, artifact_type: ArtifactType) -> Self {
        self.artifact_type = artifact_type;
        self
    }

    /// Same config with another demo mode
    pub const fn with_demo_mode(mut self, demo_mode: DemoMode) -> Self {
        self.demo_mode = demo_mode;
        self
    }
}
