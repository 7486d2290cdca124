//! Ore-material classification.
//!
//! Material-reference vein candidates do not carry a block directly: the
//! block to place depends on what the vein is carving through. The current
//! state is classified into an [`OrePrefix`] (which host rock family it is),
//! and the prefix plus the candidate's material resolves to the concrete ore
//! block.

use lode_utils::{BlockStateId, Identifier};
use rustc_hash::FxHashMap;

/// A chemical material, e.g. `lode:cassiterite`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MaterialId(pub Identifier);

/// An ore host classification, e.g. `lode:ores/deepslate`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrePrefix(pub Identifier);

/// Bidirectional ore lookups: state → prefix, (prefix, material) → state.
#[derive(Debug, Default)]
pub struct ChemicalRegistry {
    ores_inverse: FxHashMap<BlockStateId, OrePrefix>,
    ore_blocks: FxHashMap<(OrePrefix, MaterialId), BlockStateId>,
}

impl ChemicalRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare that `state` belongs to the host family `prefix`.
    pub fn register_host(&mut self, state: BlockStateId, prefix: OrePrefix) {
        self.ores_inverse.insert(state, prefix);
    }

    /// Declare the ore block for a material in a host family.
    pub fn register_ore(&mut self, prefix: OrePrefix, material: MaterialId, state: BlockStateId) {
        self.ore_blocks.insert((prefix, material), state);
    }

    /// Classify a state into its host prefix, if it has one.
    #[must_use]
    pub fn classify(&self, state: BlockStateId) -> Option<&OrePrefix> {
        self.ores_inverse.get(&state)
    }

    /// Resolve the ore block for a prefix/material pair.
    #[must_use]
    pub fn resolve_block(&self, prefix: &OrePrefix, material: &MaterialId) -> Option<BlockStateId> {
        self.ore_blocks
            .get(&(prefix.clone(), material.clone()))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(s: &str) -> OrePrefix {
        OrePrefix(Identifier::of(s))
    }

    fn material(s: &str) -> MaterialId {
        MaterialId(Identifier::of(s))
    }

    #[test]
    fn classify_known_host() {
        let mut registry = ChemicalRegistry::new();
        registry.register_host(BlockStateId(1), prefix("lode:ores/stone"));

        assert_eq!(registry.classify(BlockStateId(1)), Some(&prefix("lode:ores/stone")));
        assert_eq!(registry.classify(BlockStateId(2)), None);
    }

    #[test]
    fn resolve_registered_ore() {
        let mut registry = ChemicalRegistry::new();
        registry.register_ore(prefix("lode:ores/stone"), material("lode:tin"), BlockStateId(5));

        assert_eq!(
            registry.resolve_block(&prefix("lode:ores/stone"), &material("lode:tin")),
            Some(BlockStateId(5))
        );
        assert_eq!(
            registry.resolve_block(&prefix("lode:ores/deepslate"), &material("lode:tin")),
            None
        );
    }
}
