//! Random number generation for floor generation
//!
//! Every generation step draws from an explicit [`RandomSource`] so a run is
//! a pure function of the configuration and the random stream. [`LevelRng`]
//! is the seeded ChaCha implementation used everywhere outside of tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniform random numbers for the generator.
///
/// Implementations must be deterministic for a given starting state: the
/// generator relies on the exact sequence of draws to reproduce a floor.
pub trait RandomSource {
    /// Uniform integer in `[low, high)`.
    ///
    /// Returns `low` if the range is empty. Callers that treat an empty range
    /// as an error check it before drawing.
    fn range_i32(&mut self, low: i32, high: i32) -> i32;

    /// Uniform float in `[low, high]`.
    fn range_f32(&mut self, low: f32, high: f32) -> f32;

    /// Returns true with probability `probability`
    fn chance(&mut self, probability: f32) -> bool {
        self.range_f32(0.0, 1.0) < probability
    }

    /// Uniform index into a collection of `len` items
    fn index(&mut self, len: usize) -> usize {
        self.range_i32(0, len as i32) as usize
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn range_i32(&mut self, low: i32, high: i32) -> i32 {
        (**self).range_i32(low, high)
    }

    fn range_f32(&mut self, low: f32, high: f32) -> f32 {
        (**self).range_f32(low, high)
    }
}

/// Level random number generator
///
/// Wraps ChaCha8Rng for reproducible random number generation.
/// Only the seed is serialized; deserializing restarts the stream from it.
#[derive(Debug, Clone)]
pub struct LevelRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl Serialize for LevelRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LevelRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(LevelRng::new(seed))
    }
}

impl LevelRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for LevelRng {
    fn range_i32(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..high)
    }

    fn range_f32(&mut self, low: f32, high: f32) -> f32 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}

impl Default for LevelRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Replays queued draws, for tests that need to force a particular layout.
#[cfg(test)]
pub(crate) struct ScriptedRng {
    ints: std::collections::VecDeque<i32>,
    floats: std::collections::VecDeque<f32>,
}

#[cfg(test)]
impl ScriptedRng {
    pub(crate) fn new(ints: &[i32], floats: &[f32]) -> Self {
        Self {
            ints: ints.iter().copied().collect(),
            floats: floats.iter().copied().collect(),
        }
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.ints.is_empty() && self.floats.is_empty()
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRng {
    fn range_i32(&mut self, low: i32, high: i32) -> i32 {
        let value = self.ints.pop_front().expect("scripted int draws exhausted");
        assert!(
            value >= low && (value < high || high <= low),
            "scripted draw {value} outside [{low}, {high})"
        );
        value
    }

    fn range_f32(&mut self, low: f32, high: f32) -> f32 {
        let value = self.floats.pop_front().expect("scripted float draws exhausted");
        assert!(
            (low..=high).contains(&value),
            "scripted draw {value} outside [{low}, {high}]"
        );
        value
    }
}
