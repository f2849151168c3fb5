//! Partial configuration updates

use serde::{Deserialize, Serialize};
use vaultguard_core::{ArtifactType, DemoMode, MonitorConfig};

use crate::SchemaResult;

/// Client request to change artifact type and/or demo mode
///
/// Values stay strings until [`ConfigUpdate::apply`] so an unknown value is
/// reported verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigUpdate {
    /// New artifact type key, e.g. `METALLIC`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<String>,
    /// New demo mode key, e.g. `atRisk`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_mode: Option<String>,
}

impl ConfigUpdate {
    /// Parse an update body
    pub fn parse(json: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// True when the update changes nothing
    pub fn is_empty(&self) -> bool {
        self.artifact_type.is_none() && self.demo_mode.is_none()
    }

    /// Layer the update over `current`
    ///
    /// Fails on the first unknown value; `current` is returned untouched
    /// for fields the update leaves out.
    pub fn apply(&self, current: MonitorConfig) -> SchemaResult<MonitorConfig> {
        let mut config = current;
        if let Some(key) = &self.artifact_type {
            config.artifact_type = key.parse::<ArtifactType>()?;
        }
        if let Some(key) = &self.demo_mode {
            config.demo_mode = key.parse::<DemoMode>()?;
        }
        Ok(config)
    }
}

impl From<MonitorConfig> for ConfigUpdate {
    fn from(config: MonitorConfig) -> Self {
        Self {
            artifact_type: Some(config.artifact_type.key().to_string()),
            demo_mode: Some(config.demo_mode.key().to_string()),
        }
    }
}
