//! Gradient noise stack used by density functions.
//!
//! [`ImprovedNoise`] is a single 3D gradient noise, [`OctaveNoise`] stacks it
//! across frequencies, and [`NormalNoise`] pairs two octave stacks the way
//! vanilla's `NormalNoise` does to smooth out directional artifacts.

mod improved_noise;
mod normal_noise;
mod octave_noise;

pub use improved_noise::ImprovedNoise;
pub use normal_noise::NormalNoise;
pub use octave_noise::OctaveNoise;
