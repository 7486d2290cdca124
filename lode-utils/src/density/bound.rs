//! The bound density function tree.

use std::sync::Arc;

use crate::density::{DensityError, DensityFunction, NoiseState};
use crate::math::{clamp, clamped_map};
use crate::noise::NormalNoise;

/// The coordinate a density function is sampled at.
///
/// Callers apply any jitter before constructing the context; sampling itself
/// is pure and allocation-free.
#[derive(Debug, Clone, Copy)]
pub struct NoiseContext {
    /// Block X.
    pub x: i32,
    /// Block Y.
    pub y: i32,
    /// Block Z.
    pub z: i32,
}

impl NoiseContext {
    /// Create a sample context.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// A density function whose noise references have been resolved.
///
/// Produced by [`DensityFunction::bind`]; holds `Arc` handles to the live
/// samplers, so sampling never consults the noise registry again.
#[derive(Debug, Clone)]
pub enum BoundDensityFunction {
    /// A constant value.
    Constant(f64),
    /// A resolved noise node.
    Noise {
        /// The live sampler.
        sampler: Arc<NormalNoise>,
        /// Horizontal coordinate scale.
        xz_scale: f64,
        /// Vertical coordinate scale.
        y_scale: f64,
    },
    /// Sum of two functions.
    Add(Box<BoundDensityFunction>, Box<BoundDensityFunction>),
    /// Product of two functions.
    Mul(Box<BoundDensityFunction>, Box<BoundDensityFunction>),
    /// Pointwise minimum.
    Min(Box<BoundDensityFunction>, Box<BoundDensityFunction>),
    /// Pointwise maximum.
    Max(Box<BoundDensityFunction>, Box<BoundDensityFunction>),
    /// Absolute value.
    Abs(Box<BoundDensityFunction>),
    /// Input clamped into `[min, max]`.
    Clamp {
        /// The clamped function.
        input: Box<BoundDensityFunction>,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// Linear gradient over Y, clamped outside `[from_y, to_y]`.
    YClampedGradient {
        /// Y where the gradient starts.
        from_y: i32,
        /// Y where the gradient ends.
        to_y: i32,
        /// Value at `from_y`.
        from_value: f64,
        /// Value at `to_y`.
        to_value: f64,
    },
}

impl DensityFunction {
    /// Resolve every noise reference in this tree against `state`.
    ///
    /// This is the single point where noise lookups happen; it is called at
    /// startup and an unknown noise id fails here, never during generation.
    pub fn bind(&self, state: &NoiseState) -> Result<BoundDensityFunction, DensityError> {
        Ok(match self {
            Self::Constant(v) => BoundDensityFunction::Constant(*v),
            Self::Noise {
                noise,
                xz_scale,
                y_scale,
            } => BoundDensityFunction::Noise {
                sampler: state.get_or_create_noise(noise)?,
                xz_scale: *xz_scale,
                y_scale: *y_scale,
            },
            Self::Add(a, b) => {
                BoundDensityFunction::Add(Box::new(a.bind(state)?), Box::new(b.bind(state)?))
            }
            Self::Mul(a, b) => {
                BoundDensityFunction::Mul(Box::new(a.bind(state)?), Box::new(b.bind(state)?))
            }
            Self::Min(a, b) => {
                BoundDensityFunction::Min(Box::new(a.bind(state)?), Box::new(b.bind(state)?))
            }
            Self::Max(a, b) => {
                BoundDensityFunction::Max(Box::new(a.bind(state)?), Box::new(b.bind(state)?))
            }
            Self::Abs(input) => BoundDensityFunction::Abs(Box::new(input.bind(state)?)),
            Self::Clamp { input, min, max } => BoundDensityFunction::Clamp {
                input: Box::new(input.bind(state)?),
                min: *min,
                max: *max,
            },
            Self::YClampedGradient {
                from_y,
                to_y,
                from_value,
                to_value,
            } => BoundDensityFunction::YClampedGradient {
                from_y: *from_y,
                to_y: *to_y,
                from_value: *from_value,
                to_value: *to_value,
            },
        })
    }
}

impl BoundDensityFunction {
    /// Evaluate the function at `ctx`.
    #[must_use]
    pub fn sample(&self, ctx: &NoiseContext) -> f64 {
        match self {
            Self::Constant(v) => *v,
            Self::Noise {
                sampler,
                xz_scale,
                y_scale,
            } => sampler.sample(
                f64::from(ctx.x) * xz_scale,
                f64::from(ctx.y) * y_scale,
                f64::from(ctx.z) * xz_scale,
            ),
            Self::Add(a, b) => a.sample(ctx) + b.sample(ctx),
            Self::Mul(a, b) => a.sample(ctx) * b.sample(ctx),
            Self::Min(a, b) => a.sample(ctx).min(b.sample(ctx)),
            Self::Max(a, b) => a.sample(ctx).max(b.sample(ctx)),
            Self::Abs(input) => input.sample(ctx).abs(),
            Self::Clamp { input, min, max } => clamp(input.sample(ctx), *min, *max),
            Self::YClampedGradient {
                from_y,
                to_y,
                from_value,
                to_value,
            } => clamped_map(
                f64::from(ctx.y),
                f64::from(*from_y),
                f64::from(*to_y),
                *from_value,
                *to_value,
            ),
        }
    }
}
