//! Single-octave improved Perlin noise.

use crate::math::{floor, lerp3, smoothstep};
use crate::random::Random;

/// The 16 gradient vectors of improved Perlin noise.
const GRADIENT: [[i32; 3]; 16] = [
    [1, 1, 0],
    [-1, 1, 0],
    [1, -1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, 1],
    [1, 0, -1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, -1, 1],
    [0, 1, -1],
    [0, -1, -1],
    [1, 1, 0],
    [0, -1, 1],
    [-1, 1, 0],
    [0, -1, -1],
];

/// A single 3D gradient noise.
///
/// Construction consumes 3 `f64` draws for the domain offset plus 256
/// bounded draws for the permutation shuffle.
#[derive(Debug, Clone)]
pub struct ImprovedNoise {
    perm: [u8; 256],
    ox: f64,
    oy: f64,
    oz: f64,
}

impl ImprovedNoise {
    /// Create a noise instance from a random stream.
    pub fn new<R: Random>(random: &mut R) -> Self {
        let ox = random.next_f64() * 256.0;
        let oy = random.next_f64() * 256.0;
        let oz = random.next_f64() * 256.0;

        let mut perm = [0u8; 256];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = i as u8;
        }
        // Fisher-Yates, consuming one bounded draw per slot
        for i in 0..256usize {
            let j = random.next_i32_bounded((256 - i) as i32) as usize;
            perm.swap(i, i + j);
        }

        Self { perm, ox, oy, oz }
    }

    /// Sample the noise at the given point. Output is roughly in `[-1, 1]`.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let x = x + self.ox;
        let y = y + self.oy;
        let z = z + self.oz;

        let cx = floor(x);
        let cy = floor(y);
        let cz = floor(z);
        let fx = x - f64::from(cx);
        let fy = y - f64::from(cy);
        let fz = z - f64::from(cz);

        let p = |i: i32| -> i32 { i32::from(self.perm[(i & 255) as usize]) };

        let x0 = p(cx);
        let x1 = p(cx + 1);
        let y00 = p(x0 + cy);
        let y01 = p(x0 + cy + 1);
        let y10 = p(x1 + cy);
        let y11 = p(x1 + cy + 1);

        let d000 = grad_dot(p(y00 + cz), fx, fy, fz);
        let d100 = grad_dot(p(y10 + cz), fx - 1.0, fy, fz);
        let d010 = grad_dot(p(y01 + cz), fx, fy - 1.0, fz);
        let d110 = grad_dot(p(y11 + cz), fx - 1.0, fy - 1.0, fz);
        let d001 = grad_dot(p(y00 + cz + 1), fx, fy, fz - 1.0);
        let d101 = grad_dot(p(y10 + cz + 1), fx - 1.0, fy, fz - 1.0);
        let d011 = grad_dot(p(y01 + cz + 1), fx, fy - 1.0, fz - 1.0);
        let d111 = grad_dot(p(y11 + cz + 1), fx - 1.0, fy - 1.0, fz - 1.0);

        lerp3(
            smoothstep(fx),
            smoothstep(fy),
            smoothstep(fz),
            d000,
            d100,
            d010,
            d110,
            d001,
            d101,
            d011,
            d111,
        )
    }
}

/// Dot product of a hashed gradient vector with the offset vector.
#[inline]
fn grad_dot(hash: i32, x: f64, y: f64, z: f64) -> f64 {
    let g = &GRADIENT[(hash & 15) as usize];
    f64::from(g[0]) * x + f64::from(g[1]) * y + f64::from(g[2]) * z
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Xoroshiro;

    #[test]
    fn deterministic_for_seed() {
        let noise1 = ImprovedNoise::new(&mut Xoroshiro::from_seed(12345));
        let noise2 = ImprovedNoise::new(&mut Xoroshiro::from_seed(12345));

        for i in 0..50 {
            let c = f64::from(i) * 3.7;
            let v1 = noise1.sample(c, 64.0, -c);
            let v2 = noise2.sample(c, 64.0, -c);
            assert!((v1 - v2).abs() < 1e-15);
        }
    }

    #[test]
    fn output_bounded() {
        let noise = ImprovedNoise::new(&mut Xoroshiro::from_seed(42));
        for x in -20..20 {
            for z in -20..20 {
                let v = noise.sample(f64::from(x) * 2.3, 10.5, f64::from(z) * 2.3);
                assert!((-1.5..=1.5).contains(&v), "sample {v} out of range");
            }
        }
    }

    #[test]
    fn varies_spatially() {
        let noise = ImprovedNoise::new(&mut Xoroshiro::from_seed(42));
        let v1 = noise.sample(0.5, 0.5, 0.5);
        let v2 = noise.sample(100.5, 0.5, 0.5);
        let v3 = noise.sample(0.5, 100.5, 0.5);
        assert!((v1 - v2).abs() > 1e-9 || (v2 - v3).abs() > 1e-9);
    }
}
