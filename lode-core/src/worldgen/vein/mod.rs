//! Noise-carved ore vein generation.
//!
//! A vein is carved by two density functions: a low-frequency toggle that
//! decides where vein material exists at all, and a ridged gate that cuts
//! the interior into sheets. The toggle value doubles as the richness
//! control, so thick vein cores place more ore than the fringes.

mod config;
mod definition;
mod generator;
mod shape;

pub use config::{
    CandidateBlocksConfig, CandidateConfig, RuleTestConfig, TargetStateConfig, VeinConfig,
};
pub use definition::{CandidateBlocks, TargetState, VeinCandidate, VeinDefinition};
pub use generator::{PlacementRequest, VeinedGenerator};

use lode_utils::density::DensityError;
use lode_utils::Identifier;
use thiserror::Error;

/// Fatal vein configuration errors, surfaced before any generation runs.
#[derive(Debug, Error)]
pub enum VeinError {
    /// A vein references a density function with no registry entry.
    #[error("no density function registered for `{0}`")]
    UnknownFunction(Identifier),

    /// A vein config names a block the registry does not know.
    #[error("unknown block `{0}`")]
    UnknownBlock(Identifier),

    /// A vein has no ore candidates to place.
    #[error("vein has an empty ore candidate list")]
    EmptyOreBlocks,

    /// A candidate has weight zero, so it can never be picked.
    #[error("vein candidate has zero weight")]
    ZeroWeight,

    /// The vein's vertical band is inverted.
    #[error("vein min_y {min_y} exceeds max_y {max_y}")]
    InvertedYBounds {
        /// Configured lower bound.
        min_y: i32,
        /// Configured upper bound.
        max_y: i32,
    },

    /// A noise referenced by the vein's functions is unregistered.
    #[error(transparent)]
    Density(#[from] DensityError),
}
