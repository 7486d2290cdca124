//! Multi-octave stack over [`ImprovedNoise`].

use crate::noise::ImprovedNoise;
use crate::random::{Random, RandomSplitter};

/// Coordinates are wrapped modulo 2^25 before sampling so precision stays
/// uniform far from the origin.
const WRAP_PERIOD: f64 = 33_554_432.0;

/// One frequency band of the stack, with its factors precomputed.
#[derive(Debug, Clone)]
struct Octave {
    noise: ImprovedNoise,
    amplitude: f64,
    input_factor: f64,
    value_factor: f64,
}

/// Weighted multi-octave gradient noise.
///
/// Octave `n` (counted from `first_octave`) samples at frequency `2^n`; each
/// octave is seeded independently via `with_hash_of("octave_{n}")` so stacks
/// sharing a splitter stay decorrelated. Zero-amplitude octaves are dropped
/// at construction but still occupy their name slot.
#[derive(Debug, Clone)]
pub struct OctaveNoise {
    octaves: Vec<Octave>,
    max_value: f64,
}

impl OctaveNoise {
    /// Build a stack from a positional splitter.
    ///
    /// `amplitudes[i]` weights octave `first_octave + i`.
    #[must_use]
    pub fn create(splitter: &RandomSplitter, first_octave: i32, amplitudes: &[f64]) -> Self {
        let count = amplitudes.len() as i32;
        // value factor for the lowest-frequency octave: 2^(n-1) / (2^n - 1)
        let mut value_factor = 2.0_f64.powi(count - 1) / (2.0_f64.powi(count) - 1.0);
        let mut input_factor = 2.0_f64.powi(first_octave);

        let mut octaves = Vec::with_capacity(amplitudes.len());
        let mut max_value = 0.0;
        for (i, &amplitude) in amplitudes.iter().enumerate() {
            if amplitude != 0.0 {
                let octave = first_octave + i as i32;
                let mut random = splitter.with_hash_of(&format!("octave_{octave}"));
                octaves.push(Octave {
                    noise: ImprovedNoise::new(&mut random),
                    amplitude,
                    input_factor,
                    value_factor,
                });
                max_value += amplitude * 2.0 * value_factor;
            }
            input_factor *= 2.0;
            value_factor /= 2.0;
        }

        Self { octaves, max_value }
    }

    /// Build a stack from a sequential random source.
    ///
    /// Forks a positional splitter off the source (two raw draws), then seeds
    /// octaves by name from it. Two stacks created back to back from the same
    /// source therefore differ.
    #[must_use]
    pub fn create_from_random<R: Random>(
        random: &mut R,
        first_octave: i32,
        amplitudes: &[f64],
    ) -> Self {
        let splitter = random.next_positional();
        Self::create(&splitter, first_octave, amplitudes)
    }

    /// Sample the stack at the given point.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let mut value = 0.0;
        for octave in &self.octaves {
            let v = octave.noise.sample(
                wrap(x * octave.input_factor),
                wrap(y * octave.input_factor),
                wrap(z * octave.input_factor),
            );
            value += octave.amplitude * octave.value_factor * v;
        }
        value
    }

    /// The largest value the stack can produce.
    #[inline]
    #[must_use]
    pub const fn max_value(&self) -> f64 {
        self.max_value
    }
}

/// Wrap a scaled coordinate into `[-WRAP_PERIOD / 2, WRAP_PERIOD / 2)`.
#[inline]
fn wrap(v: f64) -> f64 {
    v - (v / WRAP_PERIOD + 0.5).floor() * WRAP_PERIOD
}
