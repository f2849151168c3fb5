//! Closed-loop driver
//!
//! One [`FeedbackLoop::cycle`] per live tick:
//!
//! ```text
//! tick ──► ingest ──► evaluate ──► apply actions ──► record
//! ```
//!
//! Actions chosen for reading *t* shape readings from *t+1* on. The loop
//! owns the simulator and the engine, keeps a bounded rolling history of
//! live readings and a bounded action log, and publishes the last complete
//! `(Reading, Assessment)` pair.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{
    actions::{ActionContext, ActionType, RemediationAction},
    config::MonitorConfig,
    constants::time::{ACTION_LOG_CAPACITY, LIVE_HISTORY_CAPACITY},
    engine::{Assessment, DecisionEngine},
    noise::{NoiseSource, SeededNoise},
    simulator::{History, Reading, ReadingSimulator},
    time::Timestamp,
};

/// A remediation action that was applied, with its trigger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionLogEntry {
    /// `act-<timestamp>-<sequence>`
    pub id: String,
    /// When the action was applied
    pub timestamp: Timestamp,
    /// What was applied
    #[serde(rename = "type")]
    pub action: ActionType,
    /// Display label
    pub label: String,
    /// Why the engine chose it
    pub reason: String,
    /// Reading that triggered it
    pub context: ActionContext,
}

impl ActionLogEntry {
    fn new(sequence: u64, reading: &Reading, action: &RemediationAction) -> Self {
        Self {
            id: format!("act-{}-{}", reading.timestamp, sequence),
            timestamp: reading.timestamp,
            action: action.action,
            label: action.label.clone(),
            reason: action.reason.clone(),
            context: ActionContext::from(reading),
        }
    }
}

/// Result of one cycle
#[derive(Debug, Clone, PartialEq)]
pub struct CycleOutcome {
    /// Reading produced by the tick
    pub reading: Reading,
    /// Its assessment, actions carrying their triggering context
    pub assessment: Assessment,
    /// Log entries for the actions applied this cycle
    pub logged: Vec<ActionLogEntry>,
}

/// Simulator and engine wired into a closed loop
pub struct FeedbackLoop<N: NoiseSource = SeededNoise> {
    simulator: ReadingSimulator<N>,
    engine: DecisionEngine,
    history: History,
    live: VecDeque<Reading>,
    action_log: VecDeque<ActionLogEntry>,
    sequence: u64,
    latest: Option<(Reading, Assessment)>,
}

impl<N: NoiseSource> FeedbackLoop<N> {
    /// Build the loop and generate bulk history ending at `now`
    pub fn new(config: MonitorConfig, noise: N, now: Timestamp) -> Self {
        let mut simulator = ReadingSimulator::new(config, noise);
        let history = simulator.generate_history(now);

        Self {
            simulator,
            engine: DecisionEngine::new(),
            history,
            live: VecDeque::new(),
            action_log: VecDeque::new(),
            sequence: 0,
            latest: None,
        }
    }

    /// Run one tick, evaluate it and feed the chosen actions back
    pub fn cycle(&mut self, now: Timestamp) -> CycleOutcome {
        let reading = self.simulator.tick(now);
        self.engine.ingest(&reading);
        let mut assessment = self.engine.evaluate(&reading, self.simulator.standards());

        assessment.actions = core::mem::take(&mut assessment.actions)
            .into_iter()
            .map(|action| action.with_context(&reading))
            .collect();

        let mut logged = Vec::with_capacity(assessment.actions.len());
        for action in &assessment.actions {
            self.simulator.apply_action(action.action, now);
            self.sequence += 1;
            let entry = ActionLogEntry::new(self.sequence, &reading, action);
            log::info!(
                "applied {} at {} (risk {}): {}",
                entry.action,
                now,
                assessment.risk_score,
                entry.reason
            );
            push_bounded(&mut self.action_log, entry.clone(), ACTION_LOG_CAPACITY);
            logged.push(entry);
        }

        push_bounded(&mut self.live, reading, LIVE_HISTORY_CAPACITY);
        self.latest = Some((reading, assessment.clone()));

        CycleOutcome {
            reading,
            assessment,
            logged,
        }
    }

    /// Switch artifact type or demo mode
    ///
    /// Resets the simulator and the trend window, clears live history and
    /// regenerates bulk history ending at `now`. The action log is kept.
    pub fn reconfigure(&mut self, config: MonitorConfig, now: Timestamp) {
        log::info!(
            "reconfigure: {} / {} -> {} / {}",
            self.simulator.config().artifact_type,
            self.simulator.config().demo_mode,
            config.artifact_type,
            config.demo_mode
        );
        self.simulator.reconfigure(config);
        self.engine.reset();
        self.live.clear();
        self.latest = None;
        self.history = self.simulator.generate_history(now);
    }

    /// Current configuration
    pub fn config(&self) -> MonitorConfig {
        self.simulator.config()
    }

    /// Last complete reading and assessment
    pub fn latest(&self) -> Option<&(Reading, Assessment)> {
        self.latest.as_ref()
    }

    /// Bulk history from the last (re)configuration
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Live readings, oldest first, at most 24 h worth
    pub fn live_history(&self) -> &VecDeque<Reading> {
        &self.live
    }

    /// Applied actions, newest last, at most 200
    pub fn action_log(&self) -> &VecDeque<ActionLogEntry> {
        &self.action_log
    }

    /// The simulator
    pub fn simulator(&self) -> &ReadingSimulator<N> {
        &self.simulator
    }

    /// Mutable simulator access, for seeding scenarios
    pub fn simulator_mut(&mut self) -> &mut ReadingSimulator<N> {
        &mut self.simulator
    }

    /// The decision engine
    pub fn engine(&self) -> &DecisionEngine {
        &self.engine
    }
}

fn push_bounded<T>(queue: &mut VecDeque<T>, item: T, capacity: usize) {
    while queue.len() >= capacity {
        queue.pop_front();
    }
    queue.push_back(item);
}
