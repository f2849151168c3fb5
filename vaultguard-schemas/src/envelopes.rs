//! Tagged JSON messages produced by the feedback loop

use serde::{Deserialize, Serialize};
use vaultguard_core::{ActionLogEntry, Assessment, CycleOutcome, History, Reading};

use crate::SchemaResult;

/// One complete cycle: reading, assessment and the actions logged for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickEnvelope {
    /// Reading produced by the tick
    pub reading: Reading,
    /// Its assessment
    pub assessment: Assessment,
    /// Actions applied and logged this cycle
    pub actions: Vec<ActionLogEntry>,
}

impl From<&CycleOutcome> for TickEnvelope {
    fn from(outcome: &CycleOutcome) -> Self {
        Self {
            reading: outcome.reading,
            assessment: outcome.assessment.clone(),
            actions: outcome.logged.clone(),
        }
    }
}

/// Bulk day and week series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEnvelope {
    /// 24 h at 1 minute spacing
    pub day: Vec<Reading>,
    /// 7 days at 30 minute spacing
    pub week: Vec<Reading>,
}

impl From<&History> for HistoryEnvelope {
    fn from(history: &History) -> Self {
        Self {
            day: history.day.clone(),
            week: history.week.clone(),
        }
    }
}

/// Recent action log entries, newest last
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionLogEnvelope {
    /// Entries
    pub entries: Vec<ActionLogEntry>,
}

impl ActionLogEnvelope {
    /// Snapshot of log entries
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a ActionLogEntry>) -> Self {
        Self {
            entries: entries.into_iter().cloned().collect(),
        }
    }
}

/// Any message on the wire, discriminated by its `type` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Message {
    /// `"tick"`
    Tick(TickEnvelope),
    /// `"history"`
    History(HistoryEnvelope),
    /// `"actionLog"`
    ActionLog(ActionLogEnvelope),
}

impl Message {
    /// Value of the `type` tag
    pub const fn kind(&self) -> &'static str {
        match self {
            Message::Tick(_) => "tick",
            Message::History(_) => "history",
            Message::ActionLog(_) => "actionLog",
        }
    }
}

impl From<TickEnvelope> for Message {
    fn from(envelope: TickEnvelope) -> Self {
        Message::Tick(envelope)
    }
}

impl From<HistoryEnvelope> for Message {
    fn from(envelope: HistoryEnvelope) -> Self {
        Message::History(envelope)
    }
}

impl From<ActionLogEnvelope> for Message {
    fn from(envelope: ActionLogEnvelope) -> Self {
        Message::ActionLog(envelope)
    }
}

/// Serialize a message to compact JSON
pub fn encode(message: &Message) -> SchemaResult<String> {
    let json = serde_json::to_string(message)?;
    log::trace!("encoded {} message ({} bytes)", message.kind(), json.len());
    Ok(json)
}

/// Parse a message, rejecting unknown `type` tags
pub fn decode(json: &str) -> SchemaResult<Message> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchemaError;
    use vaultguard_core::{
        ArtifactType, Conditions, DemoMode, FeedbackLoop, MonitorConfig, QuietNoise,
        ReadingSimulator,
    };

    const NOW: u64 = 1_700_000_000_000;

    /// First cycle of a METALLIC/remediation loop restarted from the
    /// remediation draw with humidity 10 % above the safe band
    fn excursion_outcome() -> CycleOutcome {
        let config = MonitorConfig::new(ArtifactType::Metallic, DemoMode::Remediation);
        let start = ReadingSimulator::new(config, QuietNoise).state().conditions();
        let mut monitor = FeedbackLoop::new(config, QuietNoise, NOW);
        monitor.simulator_mut().seed_conditions(Conditions {
            humidity_pct: 50.0,
            ..start
        });
        monitor.cycle(NOW + 1000)
    }

    #[test]
    fn tick_message_shape() {
        let outcome = excursion_outcome();
        let json = encode(&TickEnvelope::from(&outcome).into()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["type"], "tick");
        assert_eq!(value["reading"]["doorState"], "closed");
        assert!(value["reading"]["humidityPct"].is_number());
        assert_eq!(value["assessment"]["metrics"]["humidity"]["status"], "danger");
        assert_eq!(value["assessment"]["metrics"]["humidity"]["color"], "red");
        assert_eq!(value["assessment"]["riskLevel"], "MEDIUM");
        assert_eq!(value["assessment"]["actions"][0]["type"], "DEHUMIDIFY");
        assert_eq!(value["actions"][0]["id"], format!("act-{}-1", NOW + 1000));
        assert_eq!(value["actions"][0]["context"]["opensPerHour"], 0);
    }

    #[test]
    fn tick_message_decodes_back() {
        let outcome = excursion_outcome();
        let message: Message = TickEnvelope::from(&outcome).into();
        let decoded = decode(&encode(&message).unwrap()).unwrap();

        match decoded {
            Message::Tick(envelope) => {
                assert_eq!(envelope.reading, outcome.reading);
                assert_eq!(envelope.assessment.risk_score, outcome.assessment.risk_score);
                assert_eq!(envelope.actions.len(), outcome.logged.len());
            }
            other => panic!("expected tick, got {}", other.kind()),
        }
    }

    #[test]
    fn history_and_log_messages() {
        let config = MonitorConfig::default();
        let monitor = FeedbackLoop::new(config, QuietNoise, NOW);

        let history = encode(&HistoryEnvelope::from(monitor.history()).into()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&history).unwrap();
        assert_eq!(value["type"], "history");
        assert_eq!(value["day"].as_array().map(Vec::len), Some(1441));
        assert_eq!(value["week"].as_array().map(Vec::len), Some(337));

        let log = encode(&ActionLogEnvelope::from_entries(monitor.action_log()).into()).unwrap();
        assert_eq!(log, r#"{"type":"actionLog","entries":[]}"#);
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = decode(r#"{"type":"ping"}"#).unwrap_err();
        assert!(matches!(err, SchemaError::Json(_)));
    }
}
