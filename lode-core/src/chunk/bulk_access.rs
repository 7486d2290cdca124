//! Scoped multi-section access.

use lode_utils::{BlockPos, BlockStateId, SectionPos};

use super::WorldGenLevel;

/// Scoped accessor over the sections a generation pass touches.
///
/// Sections are acquired on first touch and every acquired section is
/// released in `Drop`, so release is guaranteed on all exit paths of the
/// generator, early returns included. Writes go straight to section storage
/// and never trigger neighbor updates.
pub struct BulkSectionAccess<'a, L: WorldGenLevel> {
    level: &'a mut L,
    acquired: Vec<SectionPos>,
}

impl<'a, L: WorldGenLevel> BulkSectionAccess<'a, L> {
    /// Open a bulk access scope over `level`.
    pub fn new(level: &'a mut L) -> Self {
        Self {
            level,
            acquired: Vec::new(),
        }
    }

    /// Acquire the section containing `pos` on first touch.
    ///
    /// Returns `false` if the section is not loaded.
    fn touch(&mut self, pos: SectionPos) -> bool {
        if self.acquired.contains(&pos) {
            return true;
        }
        if self.level.section_mut(pos).is_none() {
            return false;
        }
        self.level.acquire_section(pos);
        self.acquired.push(pos);
        true
    }

    /// Whether the section containing `pos` is available for writing.
    pub fn has_section(&mut self, pos: BlockPos) -> bool {
        self.touch(SectionPos::containing(pos))
    }

    /// Whether the level permits mutating `pos`.
    pub fn ensure_writable(&mut self, pos: BlockPos) -> bool {
        self.level.ensure_writable(pos)
    }

    /// The state at `pos`, falling back to the level when no section exists.
    pub fn get_block_state(&mut self, pos: BlockPos) -> BlockStateId {
        let section_pos = SectionPos::containing(pos);
        if self.touch(section_pos) {
            if let Some(section) = self.level.section_mut(section_pos) {
                return section.get(
                    SectionPos::section_relative(pos.x),
                    SectionPos::section_relative(pos.y),
                    SectionPos::section_relative(pos.z),
                );
            }
        }
        self.level.get_block_state(pos)
    }

    /// Write `state` at `pos` without neighbor notifications.
    ///
    /// Silently ignored when the section is not loaded; callers gate on
    /// [`has_section`](Self::has_section) first.
    pub fn set_block_state(&mut self, pos: BlockPos, state: BlockStateId) {
        let section_pos = SectionPos::containing(pos);
        if !self.touch(section_pos) {
            return;
        }
        if let Some(section) = self.level.section_mut(section_pos) {
            section.set(
                SectionPos::section_relative(pos.x),
                SectionPos::section_relative(pos.y),
                SectionPos::section_relative(pos.z),
                state,
            );
        }
    }
}

impl<L: WorldGenLevel> Drop for BulkSectionAccess<'_, L> {
    fn drop(&mut self) {
        for pos in self.acquired.drain(..) {
            self.level.release_section(pos);
        }
    }
}
