//! Shared fixtures for integration tests
//!
//! - quiet and scripted simulators with deterministic trajectories
//! - reading builders anchored on a standards entry
//! - door scripts for the access-frequency scenarios

#![allow(dead_code)]

use vaultguard_core::{
    time::Timestamp, ArtifactType, Conditions, DemoMode, DoorState, MonitorConfig, NoiseSource,
    QuietNoise, Reading, ReadingSimulator, ScriptedNoise, StandardsEntry, StandardsTable,
};

/// Fixed origin for every scenario
pub const T0: Timestamp = 1_700_000_000_000;

/// Simulator with randomness disabled
pub fn quiet_simulator(artifact: ArtifactType, mode: DemoMode) -> ReadingSimulator<QuietNoise> {
    ReadingSimulator::new(MonitorConfig::new(artifact, mode), QuietNoise)
}

/// Script for a sequence of door decisions, one per tick
///
/// Every tick asks for the door decision first, then for a vibration bump.
/// Each door decision is paired with a failed bump so the two never mix.
/// Only valid for ticks where the door is eligible to toggle.
pub fn door_script(decisions: &[bool]) -> ScriptedNoise {
    ScriptedNoise::new(decisions.iter().flat_map(|&toggle| [toggle, false]))
}

/// Quiet PAPER/normal simulator driven by a door script
pub fn scripted_simulator(decisions: &[bool]) -> ReadingSimulator<ScriptedNoise> {
    ReadingSimulator::new(MonitorConfig::default(), door_script(decisions))
}

/// The standards entry for `artifact`
pub fn standards(artifact: ArtifactType) -> &'static StandardsEntry {
    StandardsTable::get(artifact)
}

/// Builder for hand-made readings
#[derive(Debug, Clone, Copy)]
pub struct ReadingBuilder {
    reading: Reading,
}

impl ReadingBuilder {
    /// Reading at the safe midpoint of every metric of `standards`
    pub fn calm(standards: &StandardsEntry, timestamp: Timestamp) -> Self {
        Self {
            reading: Reading {
                timestamp,
                temperature_c: standards.temperature.safe.midpoint(),
                humidity_pct: standards.humidity.safe.midpoint(),
                moisture_pct: standards.moisture.safe_max / 2.0,
                door_state: DoorState::Closed,
                opens_per_hour: 0,
                vibration: 0.0,
                access_locked: false,
            },
        }
    }

    pub fn temperature(mut self, value: f32) -> Self {
        self.reading.temperature_c = value;
        self
    }

    pub fn humidity(mut self, value: f32) -> Self {
        self.reading.humidity_pct = value;
        self
    }

    pub fn moisture(mut self, value: f32) -> Self {
        self.reading.moisture_pct = value;
        self
    }

    pub fn opens(mut self, count: u32) -> Self {
        self.reading.opens_per_hour = count;
        self
    }

    pub fn vibration(mut self, value: f32) -> Self {
        self.reading.vibration = value;
        self
    }

    pub fn door_open(mut self) -> Self {
        self.reading.door_state = DoorState::Open;
        self
    }

    pub fn build(self) -> Reading {
        self.reading
    }
}

/// Push humidity 10 % above the METALLIC safe band
///
/// Every other condition keeps the value the demo mode drew for it.
pub fn seed_humidity_excursion<N: NoiseSource>(sim: &mut ReadingSimulator<N>) {
    let conditions = sim.state().conditions();
    sim.seed_conditions(Conditions {
        humidity_pct: excursion_humidity(),
        ..conditions
    });
}

/// Quiet METALLIC/remediation start with humidity 10 % above the safe band
///
/// For feedback loops: history generation has already drifted their live
/// state, so they restart from the remediation draw.
pub fn metallic_remediation_start() -> Conditions {
    let fresh = quiet_simulator(ArtifactType::Metallic, DemoMode::Remediation);
    Conditions {
        humidity_pct: excursion_humidity(),
        ..fresh.state().conditions()
    }
}

fn excursion_humidity() -> f32 {
    standards(ArtifactType::Metallic).humidity.safe.max + 10.0
}

/// Every reading field within its physical clamp range
pub fn assert_clamped(reading: &Reading) {
    assert!((5.0..=35.0).contains(&reading.temperature_c), "temperature {}", reading);
    assert!((5.0..=95.0).contains(&reading.humidity_pct), "humidity {}", reading);
    assert!((0.0..=20.0).contains(&reading.moisture_pct), "moisture {}", reading);
    assert!((0.0..=1.0).contains(&reading.vibration), "vibration {}", reading);
}
