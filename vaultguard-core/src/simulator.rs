//! Reading Simulator for an Artifact Enclosure
//!
//! ## Physical Model
//!
//! The simulator owns a small lumped model of the enclosure and advances it
//! one step per [`ReadingSimulator::tick`]:
//!
//! ```text
//!              drift(mode) + noise + bias·gain
//! temperature ──────────────────────────────────► clamp [5, 35] °C
//!
//!              drift(mode) + noise + bias·gain − airflow·gain
//! humidity    ──────────────────────────────────► clamp [5, 95] %
//!                    │
//!                    │ deviation from safe midpoint × 0.04
//!                    ▼
//! moisture    ── relaxes 2 %/tick toward target ─► clamp [0, 20] %
//!
//! door        ── random toggles (≥10 s apart), forced shut while locked
//! vibration   ── decays ×0.85/tick, occasional bumps, clamp [0, 1]
//! ```
//!
//! Moisture follows humidity slowly: materials take up water long after the
//! air around them changed.
//!
//! ## Control Biases
//!
//! Remediation actions never touch the physical state directly. They move
//! [`ControlBiases`], which every subsequent tick feeds in through small
//! gains. Biases survive ticks and only reset when the configuration changes.
//!
//! ## Determinism
//!
//! All randomness goes through the injected [`NoiseSource`]. With
//! [`QuietNoise`](crate::noise::QuietNoise) a trajectory is an exact function
//! of configuration, biases and timestamps.

use core::fmt;

use heapless::Deque;
use serde::{Deserialize, Serialize};

use crate::{
    actions::ActionType,
    config::{DemoMode, MonitorConfig},
    constants::{
        physics::*,
        simulation::*,
        time::{
            ACCESS_LOCK_DURATION_MS, ACCESS_WINDOW_MS, DAY_HISTORY_SPAN_MS, DAY_HISTORY_STEP_MS,
            DOOR_MIN_TOGGLE_INTERVAL_MS, WEEK_HISTORY_SPAN_MS, WEEK_HISTORY_STEP_MS,
        },
    },
    noise::{NoiseSource, SeededNoise},
    numeric::round_to,
    standards::{ArtifactType, StandardsEntry, StandardsTable},
    time::Timestamp,
};

/// Enclosure door position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorState {
    /// Door open
    Open,
    /// Door shut
    #[default]
    Closed,
}

impl DoorState {
    /// True when open
    pub const fn is_open(&self) -> bool {
        matches!(self, DoorState::Open)
    }

    const fn toggled(&self) -> Self {
        match self {
            DoorState::Open => DoorState::Closed,
            DoorState::Closed => DoorState::Open,
        }
    }
}

/// Door-open timestamps of the trailing hour, oldest first
pub type OpenWindow = Deque<Timestamp, DOOR_OPEN_WINDOW_CAPACITY>;

/// Physical state of the enclosure
///
/// Continuous values are kept unrounded; rounding happens only when a
/// [`Reading`] is emitted.
#[derive(Debug, Clone)]
pub struct SimulatorState {
    /// Air temperature (°C)
    pub temperature_c: f32,
    /// Relative humidity (%)
    pub humidity_pct: f32,
    /// Material moisture content (%)
    pub moisture_pct: f32,
    /// Door position
    pub door_state: DoorState,
    /// When the door last changed position
    pub last_door_toggle: Timestamp,
    /// Normalised vibration level
    pub vibration: f32,
    door_opens: OpenWindow,
}

impl SimulatorState {
    fn initial(temperature_c: f32, humidity_pct: f32, moisture_pct: f32) -> Self {
        Self {
            temperature_c: temperature_c.clamp(TEMP_MIN_C, TEMP_MAX_C),
            humidity_pct: humidity_pct.clamp(HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT),
            moisture_pct: moisture_pct.clamp(MOISTURE_MIN_PCT, MOISTURE_MAX_PCT),
            door_state: DoorState::Closed,
            last_door_toggle: 0,
            vibration: VIBRATION_IDLE,
            door_opens: Deque::new(),
        }
    }

    /// Current continuous conditions
    ///
    /// Pair with [`ReadingSimulator::seed_conditions`] to move a single
    /// metric while the others keep their drawn values.
    pub fn conditions(&self) -> Conditions {
        Conditions {
            temperature_c: self.temperature_c,
            humidity_pct: self.humidity_pct,
            moisture_pct: self.moisture_pct,
            vibration: self.vibration,
        }
    }

    /// Door openings still inside the trailing hour, oldest first
    pub fn door_opens(&self) -> impl Iterator<Item = &Timestamp> {
        self.door_opens.iter()
    }

    fn record_open(&mut self, now: Timestamp) {
        if self.door_opens.is_full() {
            self.door_opens.pop_front();
        }
        // Cannot fail: a slot was freed above if needed
        let _ = self.door_opens.push_back(now);
    }

    fn prune_opens(&mut self, now: Timestamp) -> u32 {
        let horizon = now.saturating_sub(ACCESS_WINDOW_MS);
        while let Some(&oldest) = self.door_opens.front() {
            if oldest > horizon || now < ACCESS_WINDOW_MS {
                break;
            }
            self.door_opens.pop_front();
        }
        self.door_opens.len() as u32
    }
}

/// Actuator effects accumulated from remediation actions
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlBiases {
    /// Temperature bias (°C), fed in at 2 % per tick
    pub temp_bias_c: f32,
    /// Humidity bias (%), fed in at 3 % per tick
    pub humidity_bias_pct: f32,
    /// Airflow boost in [0, 1]
    pub airflow_boost: f32,
    /// Door stays shut until this timestamp
    pub access_locked_until: Timestamp,
}

impl ControlBiases {
    /// True while an access lock is in force
    pub fn is_locked(&self, now: Timestamp) -> bool {
        self.access_locked_until > now
    }
}

/// One simulated sensor snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// When the snapshot was taken
    pub timestamp: Timestamp,
    /// Air temperature (°C, 2 decimals)
    pub temperature_c: f32,
    /// Relative humidity (%, 2 decimals)
    pub humidity_pct: f32,
    /// Material moisture (%, 2 decimals)
    pub moisture_pct: f32,
    /// Door position
    pub door_state: DoorState,
    /// Door openings in the trailing hour
    pub opens_per_hour: u32,
    /// Normalised vibration (3 decimals)
    pub vibration: f32,
    /// Access lock in force at `timestamp`
    pub access_locked: bool,
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t={} {:.2}°C {:.2}%RH moisture {:.2}% door {:?} opens/h {} vib {:.3}{}",
            self.timestamp,
            self.temperature_c,
            self.humidity_pct,
            self.moisture_pct,
            self.door_state,
            self.opens_per_hour,
            self.vibration,
            if self.access_locked { " locked" } else { "" }
        )
    }
}

/// Continuous conditions to start a scenario from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    /// Air temperature (°C)
    pub temperature_c: f32,
    /// Relative humidity (%)
    pub humidity_pct: f32,
    /// Material moisture (%)
    pub moisture_pct: f32,
    /// Normalised vibration
    pub vibration: f32,
}

/// Bulk history produced by [`ReadingSimulator::generate_history`]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct History {
    /// Trailing 24 hours at 1 minute spacing (1441 readings)
    pub day: Vec<Reading>,
    /// Trailing 7 days at 30 minute spacing (337 readings)
    pub week: Vec<Reading>,
}

/// Where conditions settle without drift, noise or actuators
#[derive(Debug, Clone, Copy, PartialEq)]
struct Baseline {
    temperature_c: f32,
    humidity_pct: f32,
    moisture_pct: f32,
}

impl Baseline {
    fn from_standards(standards: &StandardsEntry) -> Self {
        Self {
            temperature_c: standards.temperature.safe.midpoint(),
            humidity_pct: standards.humidity.safe.midpoint(),
            moisture_pct: standards.moisture.safe_max * BASELINE_MOISTURE_FRACTION,
        }
    }
}

/// Enclosure simulator with actuator-like controls
pub struct ReadingSimulator<N: NoiseSource = SeededNoise> {
    config: MonitorConfig,
    standards: &'static StandardsEntry,
    baseline: Baseline,
    state: SimulatorState,
    biases: ControlBiases,
    noise: N,
}

impl<N: NoiseSource> ReadingSimulator<N> {
    /// Simulator for `config`, starting from a demo-mode offset
    pub fn new(config: MonitorConfig, mut noise: N) -> Self {
        let standards = StandardsTable::get(config.artifact_type);
        let baseline = Baseline::from_standards(standards);
        let state = Self::initial_state(config.demo_mode, baseline, &mut noise);

        log::debug!(
            "simulator init: {} / {}, start {:.2}°C {:.2}% moisture {:.2}%",
            config.artifact_type,
            config.demo_mode,
            state.temperature_c,
            state.humidity_pct,
            state.moisture_pct
        );

        Self {
            config,
            standards,
            baseline,
            state,
            biases: ControlBiases::default(),
            noise,
        }
    }

    fn initial_state(mode: DemoMode, baseline: Baseline, noise: &mut N) -> SimulatorState {
        let offsets = mode.draw_offsets(noise);
        SimulatorState::initial(
            baseline.temperature_c + offsets.temperature_c,
            baseline.humidity_pct + offsets.humidity_pct,
            baseline.moisture_pct + offsets.moisture_pct,
        )
    }

    /// Current configuration
    pub fn config(&self) -> MonitorConfig {
        self.config
    }

    /// Standards of the configured artifact type
    pub fn standards(&self) -> &'static StandardsEntry {
        self.standards
    }

    /// Physical state
    pub fn state(&self) -> &SimulatorState {
        &self.state
    }

    /// Actuator biases
    pub fn biases(&self) -> &ControlBiases {
        &self.biases
    }

    /// Switch artifact type and start over; demo mode is kept
    pub fn set_artifact_type(&mut self, artifact_type: ArtifactType) {
        self.reconfigure(self.config.with_artifact_type(artifact_type));
    }

    /// Switch demo mode and start over; artifact type is kept
    pub fn set_demo_mode(&mut self, demo_mode: DemoMode) {
        self.reconfigure(self.config.with_demo_mode(demo_mode));
    }

    /// Apply a new configuration
    ///
    /// Equivalent to constructing a fresh simulator with the same noise
    /// source: physical state is reinitialised and control biases are
    /// cleared, so actuator effects tuned for the old artifact type do not
    /// leak into the new one.
    pub fn reconfigure(&mut self, config: MonitorConfig) {
        self.config = config;
        self.standards = StandardsTable::get(config.artifact_type);
        self.baseline = Baseline::from_standards(self.standards);
        self.biases = ControlBiases::default();
        self.reset_physical_state();

        log::debug!(
            "simulator reset: {} / {}, start {:.2}°C {:.2}% moisture {:.2}%",
            config.artifact_type,
            config.demo_mode,
            self.state.temperature_c,
            self.state.humidity_pct,
            self.state.moisture_pct
        );
    }

    fn reset_physical_state(&mut self) {
        self.state = Self::initial_state(self.config.demo_mode, self.baseline, &mut self.noise);
    }

    /// Overwrite the continuous conditions, keeping door and biases
    ///
    /// Lets a scenario start from an exact point instead of a random offset.
    pub fn seed_conditions(&mut self, conditions: Conditions) {
        self.state.temperature_c = conditions.temperature_c.clamp(TEMP_MIN_C, TEMP_MAX_C);
        self.state.humidity_pct = conditions.humidity_pct.clamp(HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT);
        self.state.moisture_pct = conditions.moisture_pct.clamp(MOISTURE_MIN_PCT, MOISTURE_MAX_PCT);
        self.state.vibration = conditions.vibration.clamp(VIBRATION_MIN, VIBRATION_MAX);
    }

    /// Feed a remediation action into the control biases
    ///
    /// Never produces a reading. The effect shows up from the next tick on.
    pub fn apply_action(&mut self, action: ActionType, now: Timestamp) {
        let biases = &mut self.biases;
        match action {
            ActionType::AdjustTempDown => biases.temp_bias_c -= TEMP_ACTION_STEP_C,
            ActionType::AdjustTempUp => biases.temp_bias_c += TEMP_ACTION_STEP_C,
            ActionType::Dehumidify => {
                biases.humidity_bias_pct -= HUMIDITY_ACTION_STEP_PCT;
                biases.airflow_boost =
                    (biases.airflow_boost + DEHUMIDIFY_AIRFLOW_STEP).clamp(0.0, 1.0);
            }
            ActionType::Humidify => biases.humidity_bias_pct += HUMIDITY_ACTION_STEP_PCT,
            ActionType::TriggerAirflow => {
                biases.airflow_boost = (biases.airflow_boost + AIRFLOW_ACTION_STEP).clamp(0.0, 1.0);
            }
            ActionType::LockAccess10Min => {
                // Extending never shortens a lock already in force
                let until = now.saturating_add(ACCESS_LOCK_DURATION_MS);
                biases.access_locked_until = biases.access_locked_until.max(until);
            }
        }
    }

    /// Apply an action given by its wire key; unknown keys are ignored
    pub fn apply_action_key(&mut self, key: &str, now: Timestamp) {
        match key.parse::<ActionType>() {
            Ok(action) => self.apply_action(action, now),
            Err(err) => log::warn!("ignoring action: {}", err),
        }
    }

    /// Advance the model by one step and emit a reading
    pub fn tick(&mut self, now: Timestamp) -> Reading {
        let mode = self.config.demo_mode;
        let (temp_drift, humidity_drift) = mode.drift();
        let biases = self.biases;

        let temp_noise = self.noise.gaussian() * TEMP_NOISE_C;
        self.state.temperature_c += temp_noise + temp_drift + biases.temp_bias_c * TEMP_BIAS_GAIN;

        let humidity_noise = self.noise.gaussian() * HUMIDITY_NOISE_PCT;
        self.state.humidity_pct += humidity_noise
            + humidity_drift
            + biases.humidity_bias_pct * HUMIDITY_BIAS_GAIN
            + biases.airflow_boost * AIRFLOW_HUMIDITY_GAIN;

        let humidity_deviation = self.state.humidity_pct - self.standards.humidity.safe.midpoint();
        let moisture_target = self.baseline.moisture_pct
            + humidity_deviation * MOISTURE_HUMIDITY_COUPLING
            + self.noise.gaussian() * MOISTURE_NOISE_PCT;
        self.state.moisture_pct +=
            (moisture_target - self.state.moisture_pct) * MOISTURE_RELAXATION_RATE;

        self.state.temperature_c = self.state.temperature_c.clamp(TEMP_MIN_C, TEMP_MAX_C);
        self.state.humidity_pct = self.state.humidity_pct.clamp(HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT);
        self.state.moisture_pct = self.state.moisture_pct.clamp(MOISTURE_MIN_PCT, MOISTURE_MAX_PCT);

        let locked = biases.is_locked(now);
        self.step_door(now, locked);
        let opens_per_hour = self.state.prune_opens(now);

        let mut vibration = self.state.vibration * VIBRATION_DECAY;
        if self.noise.chance(mode.vibration_bump_chance()) {
            vibration += self.noise.uniform(VIBRATION_BUMP_MIN, VIBRATION_BUMP_MAX);
        }
        vibration += self.noise.gaussian() * VIBRATION_NOISE;
        self.state.vibration = vibration.clamp(VIBRATION_MIN, VIBRATION_MAX);

        let reading = Reading {
            timestamp: now,
            temperature_c: round_to(self.state.temperature_c, TEMP_DECIMALS),
            humidity_pct: round_to(self.state.humidity_pct, HUMIDITY_DECIMALS),
            moisture_pct: round_to(self.state.moisture_pct, MOISTURE_DECIMALS),
            door_state: self.state.door_state,
            opens_per_hour,
            vibration: round_to(self.state.vibration, VIBRATION_DECIMALS),
            access_locked: locked,
        };
        log::trace!("tick {}", reading);
        reading
    }

    fn step_door(&mut self, now: Timestamp, locked: bool) {
        let state = &mut self.state;

        if locked {
            if state.door_state.is_open() {
                state.door_state = DoorState::Closed;
                state.last_door_toggle = now;
                log::trace!("door forced shut by access lock at {}", now);
            }
            return;
        }

        if now.saturating_sub(state.last_door_toggle) < DOOR_MIN_TOGGLE_INTERVAL_MS {
            return;
        }

        let chance = match state.door_state {
            DoorState::Closed => self.config.demo_mode.door_open_chance(),
            DoorState::Open => DOOR_CLOSE_CHANCE,
        };
        if self.noise.chance(chance) {
            state.door_state = state.door_state.toggled();
            state.last_door_toggle = now;
            if state.door_state.is_open() {
                state.record_open(now);
            }
            log::trace!("door {:?} at {}", state.door_state, now);
        }
    }

    /// Produce the bulk day and week series
    ///
    /// Drives the same state live ticking uses, so call it before live
    /// ticking starts or right after a configuration change. Each series
    /// starts from freshly initialised physical state (biases are kept). The
    /// week series runs first; live ticking continues where the day series,
    /// which ends at `now`, left off.
    pub fn generate_history(&mut self, now: Timestamp) -> History {
        let week = self.run_series(now, WEEK_HISTORY_SPAN_MS, WEEK_HISTORY_STEP_MS);
        let day = self.run_series(now, DAY_HISTORY_SPAN_MS, DAY_HISTORY_STEP_MS);

        log::debug!(
            "generated history: {} day points, {} week points",
            day.len(),
            week.len()
        );
        History { day, week }
    }

    fn run_series(&mut self, now: Timestamp, span_ms: u64, step_ms: u64) -> Vec<Reading> {
        self.reset_physical_state();

        // Anchored on `now`; near the epoch the earliest points pile up at 0
        let steps = span_ms / step_ms;
        let mut series = Vec::with_capacity(steps as usize + 1);
        for back in (0..=steps).rev() {
            series.push(self.tick(now.saturating_sub(back * step_ms)));
        }
        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::time::MS_PER_MINUTE;
    use crate::noise::{QuietNoise, ScriptedNoise};

    const NOW: Timestamp = 1_700_000_000_000;

    fn quiet(artifact: ArtifactType, mode: DemoMode) -> ReadingSimulator<QuietNoise> {
        ReadingSimulator::new(MonitorConfig::new(artifact, mode), QuietNoise)
    }

    #[test]
    fn normal_mode_starts_at_baseline() {
        let sim = quiet(ArtifactType::Paper, DemoMode::Normal);
        // Paper safe bands: 18-22 °C, 40-55 %, moisture max 8
        assert_eq!(sim.state().temperature_c, 20.0);
        assert_eq!(sim.state().humidity_pct, 47.5);
        assert_eq!(sim.state().moisture_pct, 6.4);
        assert_eq!(sim.state().door_state, DoorState::Closed);
        assert_eq!(sim.biases(), &ControlBiases::default());
    }

    #[test]
    fn remediation_starts_toward_unsafe() {
        let sim = quiet(ArtifactType::Metallic, DemoMode::Remediation);
        // Metallic safe bands: 15-22 °C midpoint 18.5, 30-40 % midpoint 35
        assert_eq!(sim.state().humidity_pct, 46.0);
        assert_eq!(sim.state().temperature_c, 18.5 + 5.25);
        // Warn buffers: above 22 °C and above moisture 5
        assert!(sim.state().temperature_c > 22.0);
        assert!((sim.state().moisture_pct - 7.0).abs() < 1e-4);
    }

    #[test]
    fn quiet_normal_tick_holds_still() {
        let mut sim = quiet(ArtifactType::Paper, DemoMode::Normal);
        let reading = sim.tick(NOW);
        assert_eq!(reading.temperature_c, 20.0);
        assert_eq!(reading.humidity_pct, 47.5);
        assert_eq!(reading.door_state, DoorState::Closed);
        assert_eq!(reading.opens_per_hour, 0);
        assert!(!reading.access_locked);
        // Idle vibration decays
        assert_eq!(reading.vibration, round_to(VIBRATION_IDLE * VIBRATION_DECAY, 3));
    }

    #[test]
    fn at_risk_drifts_upward() {
        let mut sim = quiet(ArtifactType::Paper, DemoMode::AtRisk);
        let first = sim.tick(NOW);
        let mut last = first;
        for i in 1..=100 {
            last = sim.tick(NOW + i * 1000);
        }
        assert!(last.temperature_c > first.temperature_c);
        assert!(last.humidity_pct > first.humidity_pct);
    }

    #[test]
    fn actions_compound_and_clamp() {
        let mut sim = quiet(ArtifactType::Paper, DemoMode::Normal);
        sim.apply_action(ActionType::Dehumidify, NOW);
        sim.apply_action(ActionType::Dehumidify, NOW);
        assert!((sim.biases().humidity_bias_pct + 0.8).abs() < 1e-6);
        assert!((sim.biases().airflow_boost - 0.4).abs() < 1e-6);

        for _ in 0..10 {
            sim.apply_action(ActionType::TriggerAirflow, NOW);
        }
        assert_eq!(sim.biases().airflow_boost, 1.0);

        sim.apply_action(ActionType::AdjustTempUp, NOW);
        sim.apply_action(ActionType::AdjustTempUp, NOW);
        sim.apply_action(ActionType::AdjustTempDown, NOW);
        assert!((sim.biases().temp_bias_c - 0.15).abs() < 1e-6);

        sim.apply_action(ActionType::Humidify, NOW);
        assert!((sim.biases().humidity_bias_pct + 0.4).abs() < 1e-6);
    }

    #[test]
    fn unknown_action_key_is_a_no_op() {
        let mut sim = quiet(ArtifactType::Paper, DemoMode::Normal);
        sim.apply_action_key("OPEN_WINDOW", NOW);
        assert_eq!(sim.biases(), &ControlBiases::default());

        sim.apply_action_key("dehumidify", NOW);
        assert!(sim.biases().humidity_bias_pct < 0.0);
    }

    #[test]
    fn lock_forces_door_shut() {
        // Door opens on the first tick, then the lock shuts it
        let mut sim = ReadingSimulator::new(MonitorConfig::default(), ScriptedNoise::new([true]));
        assert_eq!(sim.tick(NOW).door_state, DoorState::Open);

        sim.apply_action(ActionType::LockAccess10Min, NOW + 1000);
        let reading = sim.tick(NOW + 2000);
        assert_eq!(reading.door_state, DoorState::Closed);
        assert!(reading.access_locked);

        let after = sim.tick(NOW + 1000 + ACCESS_LOCK_DURATION_MS);
        assert!(!after.access_locked);
    }

    #[test]
    fn anti_flicker_blocks_fast_toggles() {
        // Script: door opens, no bump, no bump (door not asked at 5 s), door closes
        let mut sim = ReadingSimulator::new(
            MonitorConfig::default(),
            ScriptedNoise::new([true, false, false, true]),
        );
        assert_eq!(sim.tick(NOW).door_state, DoorState::Open);
        assert_eq!(sim.tick(NOW + 5_000).door_state, DoorState::Open);
        assert_eq!(sim.tick(NOW + 10_000).door_state, DoorState::Closed);
    }

    #[test]
    fn busiest_hour_fits_open_window() {
        // A toggle every 10 s: open, close, open, ... for a full hour
        let ticks = 361u64;
        let script = (0..ticks).flat_map(|_| [true, false]);
        let mut sim = ReadingSimulator::new(MonitorConfig::default(), ScriptedNoise::new(script));

        let mut last = sim.tick(NOW);
        for k in 1..ticks {
            last = sim.tick(NOW + k * DOOR_MIN_TOGGLE_INTERVAL_MS);
        }

        assert_eq!(last.door_state, DoorState::Open);
        assert_eq!(last.opens_per_hour, 180);
    }

    #[test]
    fn reconfigure_resets_state_and_biases() {
        let mut sim = quiet(ArtifactType::Paper, DemoMode::Normal);
        sim.apply_action(ActionType::Dehumidify, NOW);
        sim.set_artifact_type(ArtifactType::Metallic);

        assert_eq!(sim.config().demo_mode, DemoMode::Normal);
        assert_eq!(sim.standards().label, "Metals");
        assert_eq!(sim.state().humidity_pct, 35.0);
        assert_eq!(sim.biases(), &ControlBiases::default());

        sim.set_demo_mode(DemoMode::AtRisk);
        assert_eq!(sim.config().artifact_type, ArtifactType::Metallic);
        assert_eq!(sim.state().humidity_pct, 41.0);
    }

    #[test]
    fn seeded_conditions_are_clamped() {
        let mut sim = quiet(ArtifactType::Paper, DemoMode::Normal);
        sim.seed_conditions(Conditions {
            temperature_c: 50.0,
            humidity_pct: 1.0,
            moisture_pct: 7.0,
            vibration: 2.0,
        });
        assert_eq!(sim.state().temperature_c, TEMP_MAX_C);
        assert_eq!(sim.state().humidity_pct, HUMIDITY_MIN_PCT);
        assert_eq!(sim.state().moisture_pct, 7.0);
        assert_eq!(sim.state().vibration, VIBRATION_MAX);
    }

    #[test]
    fn history_has_fixed_lengths_in_order() {
        let mut sim = ReadingSimulator::new(MonitorConfig::default(), SeededNoise::new(3));
        let history = sim.generate_history(NOW);

        assert_eq!(history.day.len(), 1441);
        assert_eq!(history.week.len(), 337);
        assert!(history.day.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        assert!(history.week.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        assert_eq!(history.day.last().map(|r| r.timestamp), Some(NOW));
        assert_eq!(history.week.first().map(|r| r.timestamp), Some(NOW - WEEK_HISTORY_SPAN_MS));
    }

    #[test]
    fn history_near_epoch_never_passes_now() {
        let now = 90 * MS_PER_MINUTE;
        let mut sim = quiet(ArtifactType::Paper, DemoMode::Normal);
        let history = sim.generate_history(now);

        assert_eq!(history.day.len(), 1441);
        assert_eq!(history.week.len(), 337);
        for series in [&history.day, &history.week] {
            assert!(series.iter().all(|r| r.timestamp <= now));
            assert!(series.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
            assert_eq!(series.first().map(|r| r.timestamp), Some(0));
            assert_eq!(series.last().map(|r| r.timestamp), Some(now));
        }
        // Only the points older than the epoch collapse onto it
        assert_eq!(history.day.iter().filter(|r| r.timestamp == 0).count(), 1441 - 90);
        assert_eq!(history.day[1441 - 90].timestamp, MS_PER_MINUTE);
    }

    #[test]
    fn conditions_round_trip_through_seed() {
        let mut sim = quiet(ArtifactType::Metallic, DemoMode::Remediation);
        let before = sim.state().conditions();
        sim.seed_conditions(Conditions {
            humidity_pct: 50.0,
            ..before
        });

        let after = sim.state().conditions();
        assert_eq!(after.humidity_pct, 50.0);
        assert_eq!(after.temperature_c, before.temperature_c);
        assert_eq!(after.moisture_pct, before.moisture_pct);
        assert_eq!(after.vibration, before.vibration);
    }
}
