//! Injectable Randomness for the Simulator
//!
//! Every random decision the simulator makes goes through [`NoiseSource`]:
//! small measurement noise, uniform initial offsets, door toggles and
//! vibration bumps. Swapping the source changes how reproducible a run is:
//!
//! | Source | Behaviour |
//! |--------|-----------|
//! | [`SeededNoise`] | `StdRng`, reproducible from a `u64` seed or seeded from OS entropy |
//! | [`QuietNoise`] | randomness disabled: no noise, midpoint draws, no random events |
//! | [`ScriptedNoise`] | quiet, except random events follow a scripted sequence |
//!
//! ## Gaussian-like Noise
//!
//! The sum of three uniform draws on [-1, 1], divided by three. Bounded (never
//! outside [-1, 1]) yet bell-shaped, which keeps clamps rarely engaged.

use std::collections::VecDeque;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of randomness for the simulator
pub trait NoiseSource {
    /// Uniform draw from `[min, max)`; returns `min` when the range is empty
    fn uniform(&mut self, min: f32, max: f32) -> f32;

    /// True with probability `p`
    fn chance(&mut self, p: f32) -> bool;

    /// Bell-shaped noise in [-1, 1] centred on 0
    fn gaussian(&mut self) -> f32 {
        (self.uniform(-1.0, 1.0) + self.uniform(-1.0, 1.0) + self.uniform(-1.0, 1.0)) / 3.0
    }

    /// Symmetric uniform draw in `[-half_width, half_width)`
    fn symmetric(&mut self, half_width: f32) -> f32 {
        self.uniform(-half_width, half_width)
    }
}

/// Reproducible pseudo-random source backed by `StdRng`
#[derive(Debug, Clone)]
pub struct SeededNoise {
    rng: StdRng,
}

impl SeededNoise {
    /// Same seed, same trajectory
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded from operating system entropy, for live runs
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl NoiseSource for SeededNoise {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    fn chance(&mut self, p: f32) -> bool {
        if p <= 0.0 {
            return false;
        }
        self.rng.gen::<f32>() < p
    }
}

/// Randomness disabled
///
/// Uniform draws return the midpoint of their range, Gaussian noise is zero
/// and random events never fire. Trajectories become exact and are
/// driven only by drift and actuator biases.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuietNoise;

impl NoiseSource for QuietNoise {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        (min + max) / 2.0
    }

    fn chance(&mut self, _p: f32) -> bool {
        false
    }
}

/// Quiet source whose random events follow a script
///
/// Each call to [`NoiseSource::chance`] consumes the next scripted outcome,
/// regardless of the probability asked for. Once the script runs out every
/// event fails, like [`QuietNoise`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedNoise {
    outcomes: VecDeque<bool>,
}

impl ScriptedNoise {
    /// Script the outcomes of successive `chance` calls
    pub fn new(outcomes: impl IntoIterator<Item = bool>) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
        }
    }

    /// Outcomes not consumed yet
    pub fn remaining(&self) -> usize {
        self.outcomes.len()
    }
}

impl NoiseSource for ScriptedNoise {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        QuietNoise.uniform(min, max)
    }

    fn chance(&mut self, _p: f32) -> bool {
        self.outcomes.pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_is_reproducible() {
        let mut a = SeededNoise::new(7);
        let mut b = SeededNoise::new(7);
        for _ in 0..32 {
            assert_eq!(a.uniform(0.0, 10.0), b.uniform(0.0, 10.0));
            assert_eq!(a.chance(0.5), b.chance(0.5));
        }
    }

    #[test]
    fn seeded_respects_range() {
        let mut noise = SeededNoise::new(1);
        for _ in 0..1000 {
            let v = noise.uniform(2.5, 4.0);
            assert!((2.5..4.0).contains(&v));
            let g = noise.gaussian();
            assert!((-1.0..=1.0).contains(&g));
        }
        assert!(!noise.chance(0.0));
        assert_eq!(noise.uniform(3.0, 3.0), 3.0);
    }

    #[test]
    fn quiet_is_flat() {
        let mut noise = QuietNoise;
        assert_eq!(noise.gaussian(), 0.0);
        assert_eq!(noise.uniform(8.0, 14.0), 11.0);
        assert_eq!(noise.symmetric(0.3), 0.0);
        assert!(!noise.chance(1.0));
    }

    #[test]
    fn scripted_plays_back_then_goes_quiet() {
        let mut noise = ScriptedNoise::new([true, false, true]);
        assert!(noise.chance(0.0));
        assert!(!noise.chance(1.0));
        assert_eq!(noise.remaining(), 1);
        assert!(noise.chance(0.5));
        assert!(!noise.chance(1.0));
        assert_eq!(noise.gaussian(), 0.0);
    }
}
