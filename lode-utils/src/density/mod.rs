//! Density function system.
//!
//! Density functions are composed as an [`DensityFunction`] tree referencing
//! noises by id, then bound against a [`NoiseState`] exactly once to produce
//! a [`BoundDensityFunction`] whose noise nodes hold live samplers. Sampling
//! a bound tree is pure: the position travels as a plain [`NoiseContext`]
//! value, never a per-cell allocation.

mod bound;
mod noise_state;
mod types;

pub use bound::{BoundDensityFunction, NoiseContext};
pub use noise_state::{NoiseParameters, NoiseState};
pub use types::DensityFunction;

use thiserror::Error;

use crate::types::Identifier;

/// Fatal density configuration errors, surfaced at bind/startup time.
#[derive(Debug, Error)]
pub enum DensityError {
    /// A density function references a noise with no registered parameters.
    #[error("no noise parameters registered for `{0}`")]
    UnknownNoise(Identifier),
}
