//! Property tests for the simulator clamps and the risk score

mod common;

use proptest::prelude::*;
use vaultguard_core::{
    constants::{ACTION_GATE_SCORE, MS_PER_SECOND},
    ActionType, ArtifactType, Conditions, DecisionEngine, DemoMode, MonitorConfig,
    ReadingSimulator, RiskLevel, SeededNoise,
};

use common::{assert_clamped, standards, ReadingBuilder, T0};

fn artifact() -> impl Strategy<Value = ArtifactType> {
    prop::sample::select(ArtifactType::ALL.to_vec())
}

fn mode() -> impl Strategy<Value = DemoMode> {
    prop::sample::select(DemoMode::ALL.to_vec())
}

fn action() -> impl Strategy<Value = Option<ActionType>> {
    prop::option::of(prop::sample::select(ActionType::ALL.to_vec()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn readings_stay_clamped(
        seed in any::<u64>(),
        artifact in artifact(),
        mode in mode(),
        actions in prop::collection::vec(action(), 1..200),
        start in (0.0f32..50.0, 0.0f32..100.0, 0.0f32..25.0, 0.0f32..2.0),
    ) {
        let config = MonitorConfig::new(artifact, mode);
        let mut sim = ReadingSimulator::new(config, SeededNoise::new(seed));
        sim.seed_conditions(Conditions {
            temperature_c: start.0,
            humidity_pct: start.1,
            moisture_pct: start.2,
            vibration: start.3,
        });

        for (i, action) in actions.into_iter().enumerate() {
            let now = T0 + i as u64 * MS_PER_SECOND;
            let reading = sim.tick(now);
            assert_clamped(&reading);
            if let Some(action) = action {
                sim.apply_action(action, now);
            }
        }
    }

    #[test]
    fn score_is_bounded_and_gated(
        artifact in artifact(),
        temperature in 5.0f32..=35.0,
        humidity in 5.0f32..=95.0,
        moisture in 0.0f32..=20.0,
        opens in 0u32..30,
        vibration in 0.0f32..=1.0,
        door_open in any::<bool>(),
    ) {
        let entry = standards(artifact);
        let mut builder = ReadingBuilder::calm(entry, T0)
            .temperature(temperature)
            .humidity(humidity)
            .moisture(moisture)
            .opens(opens)
            .vibration(vibration);
        if door_open {
            builder = builder.door_open();
        }
        let assessment = DecisionEngine::new().evaluate(&builder.build(), entry);

        prop_assert!(assessment.risk_score <= 100);
        prop_assert_eq!(assessment.risk_level, RiskLevel::from_score(assessment.risk_score));
        if assessment.risk_score < ACTION_GATE_SCORE {
            prop_assert!(assessment.actions.is_empty());
        }
        prop_assert!(!assessment.insights.is_empty());
    }

    #[test]
    fn score_rises_with_humidity_excursion(
        artifact in artifact(),
        near in 0.0f32..30.0,
        extra in 0.0f32..30.0,
    ) {
        let entry = standards(artifact);
        let engine = DecisionEngine::new();
        let top = entry.humidity.safe.max;
        let score = |h: f32| {
            let reading = ReadingBuilder::calm(entry, T0).humidity(h.min(95.0)).build();
            engine.evaluate(&reading, entry).risk_score
        };
        prop_assert!(score(top + near) <= score(top + near + extra));
    }

    #[test]
    fn score_rises_with_dry_air(
        artifact in artifact(),
        near in 0.0f32..30.0,
        extra in 0.0f32..30.0,
    ) {
        let entry = standards(artifact);
        let engine = DecisionEngine::new();
        let bottom = entry.humidity.safe.min;
        let score = |h: f32| {
            let reading = ReadingBuilder::calm(entry, T0).humidity(h.max(5.0)).build();
            engine.evaluate(&reading, entry).risk_score
        };
        prop_assert!(score(bottom - near) <= score(bottom - near - extra));
    }

    #[test]
    fn score_rises_with_heat(
        artifact in artifact(),
        near in 0.0f32..10.0,
        extra in 0.0f32..10.0,
    ) {
        let entry = standards(artifact);
        let engine = DecisionEngine::new();
        let top = entry.temperature.safe.max;
        let score = |t: f32| {
            let reading = ReadingBuilder::calm(entry, T0).temperature(t.min(35.0)).build();
            engine.evaluate(&reading, entry).risk_score
        };
        prop_assert!(score(top + near) <= score(top + near + extra));
    }

    #[test]
    fn score_rises_with_door_traffic(
        artifact in artifact(),
        opens in 0u32..40,
        extra in 0u32..40,
        door_open in any::<bool>(),
    ) {
        let entry = standards(artifact);
        let engine = DecisionEngine::new();
        let score = |count: u32| {
            let mut builder = ReadingBuilder::calm(entry, T0).opens(count);
            if door_open {
                builder = builder.door_open();
            }
            engine.evaluate(&builder.build(), entry).risk_score
        };
        prop_assert!(score(opens) <= score(opens + extra));
    }

    #[test]
    fn score_rises_with_cold(
        artifact in artifact(),
        near in 0.0f32..10.0,
        extra in 0.0f32..10.0,
    ) {
        let entry = standards(artifact);
        let engine = DecisionEngine::new();
        let bottom = entry.temperature.safe.min;
        let score = |t: f32| {
            let reading = ReadingBuilder::calm(entry, T0).temperature(t.max(5.0)).build();
            engine.evaluate(&reading, entry).risk_score
        };
        prop_assert!(score(bottom - near) <= score(bottom - near - extra));
    }

    #[test]
    fn score_rises_with_moisture_and_vibration(
        artifact in artifact(),
        low in 0.0f32..20.0,
        extra in 0.0f32..20.0,
        vib_low in 0.0f32..1.0,
        vib_extra in 0.0f32..1.0,
    ) {
        let entry = standards(artifact);
        let engine = DecisionEngine::new();
        let eval = |m: f32, v: f32| {
            let reading = ReadingBuilder::calm(entry, T0)
                .moisture(m.min(20.0))
                .vibration(v.min(1.0))
                .build();
            engine.evaluate(&reading, entry).risk_score
        };
        prop_assert!(eval(low, 0.0) <= eval(low + extra, 0.0));
        prop_assert!(eval(0.0, vib_low) <= eval(0.0, vib_low + vib_extra));
    }
}
