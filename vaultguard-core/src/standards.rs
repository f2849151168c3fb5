//! Preservation Standards per Artifact Type
//!
//! Static thresholds the decision engine classifies readings against. Each
//! artifact type carries:
//!
//! | Metric | Shape | Meaning |
//! |--------|-------|---------|
//! | temperature (°C) | safe ⊆ warn intervals | band metric |
//! | humidity (%) | safe ⊆ warn intervals | band metric |
//! | moisture (%) | `safe_max ≤ warn_max` | max-threshold metric |
//! | access (opens/hour) | `safe ≤ warn` | max-threshold metric |
//! | vibration (0-1) | `safe_max ≤ warn_max` | max-threshold metric |
//!
//! Values follow common conservation guidance: paper and textiles like
//! moderate humidity, metals and photographic material want it dry, wood is
//! the most humidity tolerant and the most moisture hungry.
//!
//! The table is immutable for the life of the process. An unrecognised key
//! never fails a lookup: [`StandardsTable::lookup_key`] falls back to the
//! default entry (paper) and logs a warning.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, ConfigResult};

/// Closed interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Lower bound, inclusive
    pub min: f32,
    /// Upper bound, inclusive
    pub max: f32,
}

impl Band {
    /// Interval from its bounds
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Closed-interval containment
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Centre of the interval
    pub fn midpoint(&self) -> f32 {
        (self.min + self.max) / 2.0
    }

    /// True when `other` lies entirely inside this interval
    pub fn encloses(&self, other: &Band) -> bool {
        self.min <= other.min && other.max <= self.max
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Safe band nested inside a wider warn band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandThresholds {
    /// Ideal conditions
    pub safe: Band,
    /// Tolerable conditions; outside is danger
    pub warn: Band,
}

/// Upper limits for a metric where lower is always better
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxThresholds {
    /// At or below is safe
    pub safe_max: f32,
    /// At or below is warn; above is danger
    pub warn_max: f32,
}

/// Door-opening limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessThresholds {
    /// At or below is safe
    pub max_opens_per_hour_safe: u32,
    /// At or below is warn; above is danger
    pub max_opens_per_hour_warn: u32,
}

/// All thresholds for one artifact type
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StandardsEntry {
    /// Human-readable name of the artifact type
    pub label: &'static str,
    /// Temperature bands (°C)
    pub temperature: BandThresholds,
    /// Relative humidity bands (%)
    pub humidity: BandThresholds,
    /// Material moisture limits (%)
    pub moisture: MaxThresholds,
    /// Door openings per trailing hour
    pub access: AccessThresholds,
    /// Normalised vibration limits
    pub vibration: MaxThresholds,
}

impl StandardsEntry {
    /// Every safe bound lies within its warn bound
    pub fn is_consistent(&self) -> bool {
        self.temperature.warn.encloses(&self.temperature.safe)
            && self.humidity.warn.encloses(&self.humidity.safe)
            && self.moisture.safe_max <= self.moisture.warn_max
            && self.access.max_opens_per_hour_safe <= self.access.max_opens_per_hour_warn
            && self.vibration.safe_max <= self.vibration.warn_max
    }
}

/// Artifact types with their own standards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArtifactType {
    /// Paper, manuscripts, books
    #[default]
    Paper,
    /// Textiles and costume
    Textile,
    /// Metal objects
    Metallic,
    /// Wooden objects and furniture
    Wood,
    /// Photographs and film
    Photographic,
}

impl ArtifactType {
    /// Every artifact type, in table order
    pub const ALL: [ArtifactType; 5] = [
        ArtifactType::Paper,
        ArtifactType::Textile,
        ArtifactType::Metallic,
        ArtifactType::Wood,
        ArtifactType::Photographic,
    ];

    /// Wire key, e.g. `METALLIC`
    pub const fn key(&self) -> &'static str {
        match self {
            ArtifactType::Paper => "PAPER",
            ArtifactType::Textile => "TEXTILE",
            ArtifactType::Metallic => "METALLIC",
            ArtifactType::Wood => "WOOD",
            ArtifactType::Photographic => "PHOTOGRAPHIC",
        }
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ArtifactType {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        let key = s.trim();
        ArtifactType::ALL
            .into_iter()
            .find(|t| t.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| ConfigError::UnknownArtifactType(s.to_string()))
    }
}

static PAPER: StandardsEntry = StandardsEntry {
    label: "Paper & manuscripts",
    temperature: BandThresholds {
        safe: Band::new(18.0, 22.0),
        warn: Band::new(16.0, 24.0),
    },
    humidity: BandThresholds {
        safe: Band::new(40.0, 55.0),
        warn: Band::new(35.0, 60.0),
    },
    moisture: MaxThresholds {
        safe_max: 8.0,
        warn_max: 10.0,
    },
    access: AccessThresholds {
        max_opens_per_hour_safe: 4,
        max_opens_per_hour_warn: 8,
    },
    vibration: MaxThresholds {
        safe_max: 0.2,
        warn_max: 0.4,
    },
};

static TEXTILE: StandardsEntry = StandardsEntry {
    label: "Textiles",
    temperature: BandThresholds {
        safe: Band::new(18.0, 21.0),
        warn: Band::new(16.0, 23.0),
    },
    humidity: BandThresholds {
        safe: Band::new(45.0, 55.0),
        warn: Band::new(40.0, 60.0),
    },
    moisture: MaxThresholds {
        safe_max: 9.0,
        warn_max: 11.0,
    },
    access: AccessThresholds {
        max_opens_per_hour_safe: 4,
        max_opens_per_hour_warn: 8,
    },
    vibration: MaxThresholds {
        safe_max: 0.25,
        warn_max: 0.45,
    },
};

static METALLIC: StandardsEntry = StandardsEntry {
    label: "Metals",
    temperature: BandThresholds {
        safe: Band::new(15.0, 22.0),
        warn: Band::new(12.0, 25.0),
    },
    humidity: BandThresholds {
        safe: Band::new(30.0, 40.0),
        warn: Band::new(25.0, 45.0),
    },
    moisture: MaxThresholds {
        safe_max: 5.0,
        warn_max: 7.0,
    },
    access: AccessThresholds {
        max_opens_per_hour_safe: 6,
        max_opens_per_hour_warn: 10,
    },
    vibration: MaxThresholds {
        safe_max: 0.3,
        warn_max: 0.5,
    },
};

static WOOD: StandardsEntry = StandardsEntry {
    label: "Wood & furniture",
    temperature: BandThresholds {
        safe: Band::new(18.0, 22.0),
        warn: Band::new(15.0, 25.0),
    },
    humidity: BandThresholds {
        safe: Band::new(45.0, 60.0),
        warn: Band::new(40.0, 65.0),
    },
    moisture: MaxThresholds {
        safe_max: 12.0,
        warn_max: 15.0,
    },
    access: AccessThresholds {
        max_opens_per_hour_safe: 5,
        max_opens_per_hour_warn: 9,
    },
    vibration: MaxThresholds {
        safe_max: 0.25,
        warn_max: 0.45,
    },
};

static PHOTOGRAPHIC: StandardsEntry = StandardsEntry {
    label: "Photographs & film",
    temperature: BandThresholds {
        safe: Band::new(15.0, 20.0),
        warn: Band::new(12.0, 22.0),
    },
    humidity: BandThresholds {
        safe: Band::new(30.0, 40.0),
        warn: Band::new(25.0, 45.0),
    },
    moisture: MaxThresholds {
        safe_max: 6.0,
        warn_max: 8.0,
    },
    access: AccessThresholds {
        max_opens_per_hour_safe: 3,
        max_opens_per_hour_warn: 6,
    },
    vibration: MaxThresholds {
        safe_max: 0.2,
        warn_max: 0.35,
    },
};

/// Lookup of standards by artifact type
pub struct StandardsTable;

impl StandardsTable {
    /// Artifact type used when a key is not recognised
    pub const DEFAULT_TYPE: ArtifactType = ArtifactType::Paper;

    /// Standards for a known artifact type
    pub fn get(artifact: ArtifactType) -> &'static StandardsEntry {
        match artifact {
            ArtifactType::Paper => &PAPER,
            ArtifactType::Textile => &TEXTILE,
            ArtifactType::Metallic => &METALLIC,
            ArtifactType::Wood => &WOOD,
            ArtifactType::Photographic => &PHOTOGRAPHIC,
        }
    }

    /// Standards for a wire key, falling back to the default entry
    pub fn lookup_key(key: &str) -> &'static StandardsEntry {
        match key.parse::<ArtifactType>() {
            Ok(artifact) => Self::get(artifact),
            Err(_) => {
                log::warn!(
                    "unknown artifact type {:?}, using {} standards",
                    key,
                    Self::DEFAULT_TYPE
                );
                Self::get(Self::DEFAULT_TYPE)
            }
        }
    }

    /// Every `(type, entry)` pair
    pub fn entries() -> impl Iterator<Item = (ArtifactType, &'static StandardsEntry)> {
        ArtifactType::ALL.into_iter().map(|t| (t, Self::get(t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_nests_safe_inside_warn() {
        for (artifact, entry) in StandardsTable::entries() {
            assert!(entry.is_consistent(), "{artifact} standards are inconsistent");
        }
    }

    #[test]
    fn keys_round_trip_through_from_str() {
        for artifact in ArtifactType::ALL {
            assert_eq!(artifact.key().parse::<ArtifactType>(), Ok(artifact));
        }
        assert_eq!("metallic".parse::<ArtifactType>(), Ok(ArtifactType::Metallic));
    }

    #[test]
    fn unknown_key_falls_back_to_default() {
        let entry = StandardsTable::lookup_key("PARCHMENT");
        assert_eq!(entry, StandardsTable::get(ArtifactType::Paper));
        assert!("PARCHMENT".parse::<ArtifactType>().is_err());
    }

    #[test]
    fn band_containment_is_closed() {
        let band = Band::new(30.0, 40.0);
        assert!(band.contains(30.0));
        assert!(band.contains(40.0));
        assert!(!band.contains(40.01));
        assert_eq!(band.midpoint(), 35.0);
    }
}
