//! World generation features.

pub mod noise;
pub mod rule;
pub mod vein;

pub use noise::DensityFunctions;
pub use rule::RuleTest;
pub use vein::{PlacementRequest, VeinDefinition, VeinError, VeinedGenerator};
