//! Block and material registries.

pub mod chemical;

pub use chemical::{ChemicalRegistry, MaterialId, OrePrefix};

use lode_utils::{BlockStateId, Identifier};
use rustc_hash::FxHashMap;

/// Maps block identifiers to their default block state.
///
/// State 0 is always `minecraft:air`. Configuration resolution goes through
/// this registry so unknown block ids fail at startup.
#[derive(Debug)]
pub struct BlockRegistry {
    by_id: FxHashMap<Identifier, BlockStateId>,
    next: u16,
}

impl BlockRegistry {
    /// A registry containing only air.
    #[must_use]
    pub fn new() -> Self {
        let mut by_id = FxHashMap::default();
        by_id.insert(Identifier::of("minecraft:air"), BlockStateId::AIR);
        Self { by_id, next: 1 }
    }

    /// Register a block, returning its default state.
    ///
    /// Registering the same id twice returns the existing state.
    pub fn register(&mut self, id: Identifier) -> BlockStateId {
        if let Some(&state) = self.by_id.get(&id) {
            return state;
        }
        let state = BlockStateId(self.next);
        self.next += 1;
        self.by_id.insert(id, state);
        state
    }

    /// Look up a block's default state.
    #[must_use]
    pub fn state_of(&self, id: &Identifier) -> Option<BlockStateId> {
        self.by_id.get(id).copied()
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}
