//! Paired octave noise matching vanilla's `NormalNoise`.

use crate::noise::OctaveNoise;
use crate::random::{Random, RandomSplitter};

/// Input scale for the second stack, the exact vanilla constant.
#[allow(clippy::unreadable_literal)]
const INPUT_FACTOR: f64 = 1.0181268882175227;

/// Target standard deviation the value factor normalizes toward (1/6).
const TARGET_DEVIATION: f64 = 1.0 / 6.0;

/// Two [`OctaveNoise`] stacks sampled at slightly different input scales and
/// summed. The offset second stack breaks up the axis-aligned artifacts a
/// single stack shows at low frequencies.
#[derive(Debug, Clone)]
pub struct NormalNoise {
    first: OctaveNoise,
    second: OctaveNoise,
    value_factor: f64,
    max_value: f64,
}

impl NormalNoise {
    /// Create a noise keyed by `noise_id` under the given splitter.
    ///
    /// The id seeds a sequential stream from which both stacks are built in
    /// order, so the two stacks always differ.
    #[must_use]
    pub fn create(
        splitter: &RandomSplitter,
        noise_id: &str,
        first_octave: i32,
        amplitudes: &[f64],
    ) -> Self {
        let mut random = splitter.with_hash_of(noise_id);
        let first = OctaveNoise::create_from_random(&mut random, first_octave, amplitudes);
        let second = OctaveNoise::create_from_random(&mut random, first_octave, amplitudes);

        let mut min_octave = i32::MAX;
        let mut max_octave = i32::MIN;
        for (i, &amplitude) in amplitudes.iter().enumerate() {
            if amplitude != 0.0 {
                min_octave = min_octave.min(i as i32);
                max_octave = max_octave.max(i as i32);
            }
        }
        let value_factor = TARGET_DEVIATION / expected_deviation(max_octave - min_octave);
        let max_value = (first.max_value() + second.max_value()) * value_factor;

        Self {
            first,
            second,
            value_factor,
            max_value,
        }
    }

    /// Sample the paired noise at the given point.
    #[inline]
    #[must_use]
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let a = self.first.sample(x, y, z);
        let b = self
            .second
            .sample(x * INPUT_FACTOR, y * INPUT_FACTOR, z * INPUT_FACTOR);
        (a + b) * self.value_factor
    }

    /// The largest value the noise can produce.
    #[inline]
    #[must_use]
    pub const fn max_value(&self) -> f64 {
        self.max_value
    }
}

/// Expected deviation of a stack spanning `octave_span + 1` octaves:
/// `0.1 * (1 + 1 / (span + 1))`.
#[inline]
fn expected_deviation(octave_span: i32) -> f64 {
    0.1 * (1.0 + 1.0 / f64::from(octave_span + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Xoroshiro;

    fn splitter(seed: u64) -> RandomSplitter {
        Xoroshiro::from_seed(seed).next_positional()
    }

    #[test]
    fn deterministic_per_id() {
        let s = splitter(12345);
        let a = NormalNoise::create(&s, "lode:ore_veininess", -3, &[1.0, 1.0, 1.0]);
        let b = NormalNoise::create(&s, "lode:ore_veininess", -3, &[1.0, 1.0, 1.0]);
        assert!((a.sample(100.0, 64.0, 100.0) - b.sample(100.0, 64.0, 100.0)).abs() < 1e-15);
    }

    #[test]
    fn different_ids_differ() {
        let s = splitter(12345);
        let a = NormalNoise::create(&s, "lode:ore_vein_a", -3, &[1.0, 1.0]);
        let b = NormalNoise::create(&s, "lode:ore_vein_b", -3, &[1.0, 1.0]);
        assert!((a.sample(100.0, 64.0, 100.0) - b.sample(100.0, 64.0, 100.0)).abs() > 1e-9);
    }

    #[test]
    fn samples_within_max_value() {
        let noise = NormalNoise::create(&splitter(42), "test", -4, &[1.0, 1.0, 1.0, 1.0]);
        let bound = noise.max_value();
        for i in 0..500 {
            let c = f64::from(i) * 13.1;
            assert!(noise.sample(c, 32.0, -c).abs() <= bound);
        }
    }

    #[test]
    fn has_spatial_variation() {
        let noise = NormalNoise::create(&splitter(42), "test", -4, &[1.0, 1.0, 1.0, 1.0]);
        let values: Vec<f64> = (0..10)
            .map(|i| noise.sample(f64::from(i) * 50.0, 64.0, f64::from(i) * 50.0))
            .collect();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!(max - min > 0.01);
    }

    #[test]
    fn expected_deviation_values() {
        assert!((expected_deviation(0) - 0.2).abs() < 1e-12);
        assert!((expected_deviation(1) - 0.15).abs() < 1e-12);
    }
}
