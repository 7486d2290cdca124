//! Worldgen plumbing for Lode.
//!
//! This crate carries everything the vein generator in `lode-core` needs that
//! is not tied to a concrete world: namespaced identifiers and position
//! types, vanilla-compatible math helpers, the deterministic random stack,
//! gradient/octave noise, and the density function system.

pub mod density;
pub mod math;
pub mod noise;
pub mod random;
pub mod types;

pub use types::{BlockPos, BlockStateId, Identifier, SectionPos};
