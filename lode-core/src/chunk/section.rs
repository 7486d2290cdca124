//! 16x16x16 block state storage.

use lode_utils::BlockStateId;

const SECTION_VOLUME: usize = 16 * 16 * 16;

/// One cubic section of block states.
///
/// Carries a use count so bulk accessors can assert balanced
/// acquire/release, mirroring the section accounting of the host storage.
#[derive(Debug, Clone)]
pub struct ChunkSection {
    states: Box<[BlockStateId]>,
    non_air_count: u16,
    users: u32,
}

impl ChunkSection {
    /// An all-air section.
    #[must_use]
    pub fn new_empty() -> Self {
        Self {
            states: vec![BlockStateId::AIR; SECTION_VOLUME].into_boxed_slice(),
            non_air_count: 0,
            users: 0,
        }
    }

    /// A section filled with one state.
    #[must_use]
    pub fn filled(state: BlockStateId) -> Self {
        let mut section = Self::new_empty();
        if !state.is_air() {
            section.states.fill(state);
            section.non_air_count = SECTION_VOLUME as u16;
        }
        section
    }

    /// The state at section-local coordinates.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize, z: usize) -> BlockStateId {
        self.states[index(x, y, z)]
    }

    /// Set the state at section-local coordinates.
    ///
    /// Bulk writes never notify neighbors; the generator relies on that.
    pub fn set(&mut self, x: usize, y: usize, z: usize, state: BlockStateId) {
        let slot = &mut self.states[index(x, y, z)];
        match (slot.is_air(), state.is_air()) {
            (true, false) => self.non_air_count += 1,
            (false, true) => self.non_air_count -= 1,
            _ => {}
        }
        *slot = state;
    }

    /// Whether the section contains only air.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.non_air_count == 0
    }

    /// Mark the section as held by a bulk accessor.
    pub fn acquire(&mut self) {
        self.users += 1;
    }

    /// Release one bulk-accessor hold.
    pub fn release(&mut self) {
        debug_assert!(self.users > 0, "unbalanced section release");
        self.users = self.users.saturating_sub(1);
    }

    /// Whether any bulk accessor currently holds the section.
    #[inline]
    #[must_use]
    pub const fn in_use(&self) -> bool {
        self.users > 0
    }

    /// Raw state slice, for hashing in tests and tools.
    #[must_use]
    pub fn states(&self) -> &[BlockStateId] {
        &self.states
    }
}

#[inline]
const fn index(x: usize, y: usize, z: usize) -> usize {
    debug_assert!(x < 16 && y < 16 && z < 16);
    (y << 8) | (z << 4) | x
}
