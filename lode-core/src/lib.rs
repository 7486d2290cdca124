//! Chunked voxel storage and the Lode vein generator.
//!
//! The `chunk` module provides section-based block storage with scoped bulk
//! access, `registry` provides block and ore-material lookups, and `worldgen`
//! hosts the noise-shaped vein generator that mutates that storage.

pub mod chunk;
pub mod registry;
pub mod worldgen;
