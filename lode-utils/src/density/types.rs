//! The unbound density function tree.

use std::sync::Arc;

use crate::types::Identifier;

/// A density function before noise resolution.
///
/// Trees are built once (in code or from data) and shared; children are
/// reference-counted so common subtrees can be reused.
#[derive(Debug, Clone)]
pub enum DensityFunction {
    /// A constant value.
    Constant(f64),

    /// Sample a noise by id at scaled coordinates.
    Noise {
        /// Id of the noise parameters to sample.
        noise: Identifier,
        /// Horizontal coordinate scale.
        xz_scale: f64,
        /// Vertical coordinate scale.
        y_scale: f64,
    },

    /// Sum of two functions.
    Add(Arc<DensityFunction>, Arc<DensityFunction>),

    /// Product of two functions.
    Mul(Arc<DensityFunction>, Arc<DensityFunction>),

    /// Pointwise minimum of two functions.
    Min(Arc<DensityFunction>, Arc<DensityFunction>),

    /// Pointwise maximum of two functions.
    Max(Arc<DensityFunction>, Arc<DensityFunction>),

    /// Absolute value of the input.
    Abs(Arc<DensityFunction>),

    /// Input clamped into `[min, max]`.
    Clamp {
        /// The clamped function.
        input: Arc<DensityFunction>,
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
    /// Shorthand for a noise node.
    #[must_use]
    pub fn noise(noise: Identifier, xz_scale: f64, y_scale: f64) -> Self {
        Self::Noise {
            noise,
            xz_scale,
            y_scale,
        }
    }
}
