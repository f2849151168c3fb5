//! Decision Engine
//!
//! ## Overview
//!
//! Turns one [`Reading`] into an [`Assessment`]: per-metric status, a
//! composite risk score, plain-language insights and the remediation
//! actions worth taking.
//!
//! ```text
//! Reading ──► ingest ──► TrendWindow (15 min) ──► humidity slope
//!    │                                                 │
//!    └──────────► evaluate ◄───────────────────────────┘
//!                    │
//!      classify ─► risk ─► level ─► insights ─► actions ─► gate (score ≥ 45)
//! ```
//!
//! ## Call Order
//!
//! Once per tick: [`DecisionEngine::ingest`] then
//! [`DecisionEngine::evaluate`]. Evaluate only reads the window, so calling
//! it twice with the same reading yields the same assessment.
//!
//! ## Layers
//!
//! - [`classify`]: safe / warn / danger per metric
//! - [`risk`]: per-metric contributions and the composite score
//! - [`insights`]: explanatory sentences
//! - [`remediation`]: action proposals and the risk gate

pub mod classify;
pub mod insights;
pub mod remediation;
pub mod risk;

use core::fmt;

use heapless::Deque;
use serde::{Deserialize, Serialize};

use crate::{
    actions::RemediationAction,
    constants::{
        risk::{LEVEL_CRITICAL_FROM, LEVEL_HIGH_FROM, LEVEL_MEDIUM_FROM, TREND_WINDOW_CAPACITY},
        time::{MS_PER_SECOND, SECONDS_PER_MINUTE, TREND_WINDOW_MS},
    },
    numeric::linear_slope,
    simulator::Reading,
    standards::StandardsEntry,
    time::Timestamp,
};

use self::{
    classify::{classify_access, classify_band, classify_max},
    insights::build_insights,
    remediation::{gate_actions, propose_actions},
    risk::{band_risk, composite_score, linear_risk, moisture_risk, Amplifiers, MetricRisks},
};

/// Three-tier classification of a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricStatus {
    /// Inside the safe band
    Safe,
    /// Outside safe, inside warn
    Warn,
    /// Outside warn
    Danger,
}

impl MetricStatus {
    /// Display color for dashboards
    pub const fn color(&self) -> StatusColor {
        match self {
            MetricStatus::Safe => StatusColor::Green,
            MetricStatus::Warn => StatusColor::Amber,
            MetricStatus::Danger => StatusColor::Red,
        }
    }

    /// Word used in insight sentences
    pub const fn describe(&self) -> &'static str {
        match self {
            MetricStatus::Safe => "safe",
            MetricStatus::Warn => "warning",
            MetricStatus::Danger => "danger",
        }
    }
}

/// Display color derived from a status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    /// Safe
    Green,
    /// Warn
    Amber,
    /// Danger
    Red,
}

/// Overall risk band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Score below 30
    Low,
    /// Score 30-59
    Medium,
    /// Score 60-79
    High,
    /// Score 80 and above
    Critical,
}

impl RiskLevel {
    /// Band a composite score
    pub const fn from_score(score: u8) -> Self {
        if score < LEVEL_MEDIUM_FROM {
            RiskLevel::Low
        } else if score < LEVEL_HIGH_FROM {
            RiskLevel::Medium
        } else if score < LEVEL_CRITICAL_FROM {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        })
    }
}

/// Status of one metric with its display color and risk contribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricReport {
    /// Classification
    pub status: MetricStatus,
    /// Display color of `status`
    pub color: StatusColor,
    /// Contribution to the composite score, 0-100
    pub risk: f32,
}

impl MetricReport {
    fn new(status: MetricStatus, risk: f32) -> Self {
        Self {
            status,
            color: status.color(),
            risk,
        }
    }
}

/// Per-metric reports of one assessment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricReports {
    /// Temperature
    pub temperature: MetricReport,
    /// Humidity
    pub humidity: MetricReport,
    /// Moisture
    pub moisture: MetricReport,
    /// Access frequency
    pub access: MetricReport,
    /// Vibration
    pub vibration: MetricReport,
}

impl MetricReports {
    /// True when every metric is safe
    pub fn all_safe(&self) -> bool {
        self.iter().all(|(_, report)| report.status == MetricStatus::Safe)
    }

    /// `(name, report)` pairs in insight order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &MetricReport)> {
        [
            ("temperature", &self.temperature),
            ("humidity", &self.humidity),
            ("moisture", &self.moisture),
            ("access", &self.access),
            ("vibration", &self.vibration),
        ]
        .into_iter()
    }

    fn risks(&self) -> MetricRisks {
        MetricRisks {
            temperature: self.temperature.risk,
            humidity: self.humidity.risk,
            moisture: self.moisture.risk,
            access: self.access.risk,
            vibration: self.vibration.risk,
        }
    }
}

/// Full evaluation of one reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    /// Timestamp of the evaluated reading
    pub timestamp: Timestamp,
    /// Per-metric status
    pub metrics: MetricReports,
    /// Composite score, 0-100
    pub risk_score: u8,
    /// Band of `risk_score`
    pub risk_level: RiskLevel,
    /// Humidity trend over the window (%/min)
    pub humidity_slope_per_minute: f32,
    /// Explanations, in fixed order
    pub insights: Vec<String>,
    /// Actions to take, empty when the score is below the gate
    pub actions: Vec<RemediationAction>,
}

/// Trailing 15 minutes of readings, oldest first
#[derive(Debug, Clone, Default)]
pub struct TrendWindow {
    entries: Deque<(Timestamp, Reading), TREND_WINDOW_CAPACITY>,
}

impl TrendWindow {
    /// Empty window
    pub fn new() -> Self {
        Self {
            entries: Deque::new(),
        }
    }

    /// Append a reading and drop everything older than 15 minutes before it
    pub fn push(&mut self, reading: Reading) {
        if self.entries.is_full() {
            self.entries.pop_front();
        }
        // Cannot fail: a slot was freed above if needed
        let _ = self.entries.push_back((reading.timestamp, reading));

        let horizon = reading.timestamp.saturating_sub(TREND_WINDOW_MS);
        while let Some(&(oldest, _)) = self.entries.front() {
            if oldest >= horizon {
                break;
            }
            self.entries.pop_front();
        }
    }

    /// Number of readings held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been ingested
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every reading
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Readings held, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.entries.iter().map(|(_, reading)| reading)
    }

    /// Least-squares humidity slope in %/min; 0 with fewer than two points
    pub fn humidity_slope_per_minute(&self) -> f32 {
        let Some(&(origin, _)) = self.entries.front() else {
            return 0.0;
        };
        let points = self.entries.iter().map(move |(ts, reading)| {
            let seconds = ts.saturating_sub(origin) as f64 / MS_PER_SECOND as f64;
            (seconds, reading.humidity_pct as f64)
        });
        (linear_slope(points) * SECONDS_PER_MINUTE as f64) as f32
    }
}

/// Classifies readings, scores risk and selects actions
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    window: TrendWindow,
}

impl DecisionEngine {
    /// Engine with an empty trend window
    pub fn new() -> Self {
        Self::default()
    }

    /// Readings currently in the trend window
    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    /// The trend window
    pub fn window(&self) -> &TrendWindow {
        &self.window
    }

    /// Forget the trend window, e.g. after a configuration change
    pub fn reset(&mut self) {
        self.window.clear();
    }

    /// Add a reading to the trend window; call once per tick before evaluate
    pub fn ingest(&mut self, reading: &Reading) {
        self.window.push(*reading);
    }

    /// Evaluate a reading against standards
    ///
    /// Depends only on the arguments and the trend window.
    pub fn evaluate(&self, reading: &Reading, standards: &StandardsEntry) -> Assessment {
        debug_assert!(standards.is_consistent(), "standards entry violates safe ⊆ warn");

        let metrics = MetricReports {
            temperature: MetricReport::new(
                classify_band(reading.temperature_c, &standards.temperature),
                band_risk(reading.temperature_c, &standards.temperature),
            ),
            humidity: MetricReport::new(
                classify_band(reading.humidity_pct, &standards.humidity),
                band_risk(reading.humidity_pct, &standards.humidity),
            ),
            moisture: MetricReport::new(
                classify_max(reading.moisture_pct, &standards.moisture),
                moisture_risk(reading.moisture_pct, &standards.moisture),
            ),
            access: MetricReport::new(
                classify_access(reading.opens_per_hour, &standards.access),
                linear_risk(
                    reading.opens_per_hour as f32,
                    standards.access.max_opens_per_hour_warn as f32,
                ),
            ),
            vibration: MetricReport::new(
                classify_max(reading.vibration, &standards.vibration),
                linear_risk(reading.vibration, standards.vibration.warn_max),
            ),
        };

        let humidity_slope_per_minute = self.window.humidity_slope_per_minute();
        let amplifiers = Amplifiers {
            humidity_slope_per_minute,
            door_open: reading.door_state.is_open(),
            access_locked: reading.access_locked,
        };
        let risk_score = composite_score(&metrics.risks(), &amplifiers);

        let insights = build_insights(reading, standards, &metrics, humidity_slope_per_minute);
        let actions = gate_actions(propose_actions(reading, standards, &metrics), risk_score);

        Assessment {
            timestamp: reading.timestamp,
            metrics,
            risk_score,
            risk_level: RiskLevel::from_score(risk_score),
            humidity_slope_per_minute,
            insights,
            actions,
        }
    }

    /// Ingest then evaluate
    pub fn assess(&mut self, reading: &Reading, standards: &StandardsEntry) -> Assessment {
        self.ingest(reading);
        self.evaluate(reading, standards)
    }
}
