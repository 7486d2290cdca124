//! Chunked block storage for world generation.

pub mod bulk_access;
pub mod section;

pub use bulk_access::BulkSectionAccess;
pub use section::ChunkSection;

use lode_utils::{BlockPos, BlockStateId, SectionPos};
use rustc_hash::FxHashMap;

/// The storage a generator writes into.
///
/// Generation is single-threaded by contract: the caller owns the region
/// exclusively for the duration of a call, so access is plain `&mut`.
pub trait WorldGenLevel {
    /// The state at an absolute position (air outside loaded sections).
    fn get_block_state(&self, pos: BlockPos) -> BlockStateId;

    /// Whether the generator is allowed to mutate this position.
    fn ensure_writable(&mut self, pos: BlockPos) -> bool;

    /// Mutable access to a section, if it is loaded.
    fn section_mut(&mut self, pos: SectionPos) -> Option<&mut ChunkSection>;

    /// Record that a bulk accessor took hold of a section.
    fn acquire_section(&mut self, pos: SectionPos);

    /// Record that a bulk accessor let go of a section.
    fn release_section(&mut self, pos: SectionPos);
}

/// An in-memory generation region backed by a sparse section map.
#[derive(Debug, Default)]
pub struct GenRegion {
    sections: FxHashMap<SectionPos, ChunkSection>,
    writable: Option<(BlockPos, BlockPos)>,
}

impl GenRegion {
    /// An empty region with no sections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A region whose sections cover the inclusive section-coordinate box
    /// `[min, max]`, each filled with `state`.
    #[must_use]
    pub fn filled(min: SectionPos, max: SectionPos, state: BlockStateId) -> Self {
        let mut sections = FxHashMap::default();
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    sections.insert(SectionPos { x, y, z }, ChunkSection::filled(state));
                }
            }
        }
        Self {
            sections,
            writable: None,
        }
    }

    /// Insert one section at the given section position.
    pub fn insert_section(&mut self, pos: SectionPos, section: ChunkSection) {
        self.sections.insert(pos, section);
    }

    /// Restrict writes to the inclusive block box `[min, max]`.
    pub fn set_writable_bounds(&mut self, min: BlockPos, max: BlockPos) {
        self.writable = Some((min, max));
    }

    /// Set a block directly, bypassing bulk access (test setup).
    pub fn set_block_state(&mut self, pos: BlockPos, state: BlockStateId) {
        if let Some(section) = self.sections.get_mut(&SectionPos::containing(pos)) {
            section.set(
                SectionPos::section_relative(pos.x),
                SectionPos::section_relative(pos.y),
                SectionPos::section_relative(pos.z),
                state,
            );
        }
    }

    /// Iterate all sections.
    pub fn sections(&self) -> impl Iterator<Item = (&SectionPos, &ChunkSection)> {
        self.sections.iter()
    }

    /// Whether any section is still held by a bulk accessor.
    #[must_use]
    pub fn any_section_in_use(&self) -> bool {
        self.sections.values().any(ChunkSection::in_use)
    }
}

impl WorldGenLevel for GenRegion {
    fn get_block_state(&self, pos: BlockPos) -> BlockStateId {
        self.sections
            .get(&SectionPos::containing(pos))
            .map_or(BlockStateId::AIR, |section| {
                section.get(
                    SectionPos::section_relative(pos.x),
                    SectionPos::section_relative(pos.y),
                    SectionPos::section_relative(pos.z),
                )
            })
    }

    fn ensure_writable(&mut self, pos: BlockPos) -> bool {
        if let Some((min, max)) = self.writable {
            if pos.x < min.x
                || pos.y < min.y
                || pos.z < min.z
                || pos.x > max.x
                || pos.y > max.y
                || pos.z > max.z
            {
                return false;
            }
        }
        self.sections.contains_key(&SectionPos::containing(pos))
    }

    fn section_mut(&mut self, pos: SectionPos) -> Option<&mut ChunkSection> {
        self.sections.get_mut(&pos)
    }

    fn acquire_section(&mut self, pos: SectionPos) {
        if let Some(section) = self.sections.get_mut(&pos) {
            section.acquire();
        }
    }

    fn release_section(&mut self, pos: SectionPos) {
        if let Some(section) = self.sections.get_mut(&pos) {
            section.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_region_reads_back() {
        let region = GenRegion::filled(
            SectionPos { x: -1, y: 0, z: -1 },
            SectionPos { x: 1, y: 1, z: 1 },
            BlockStateId(3),
        );
        assert_eq!(region.get_block_state(BlockPos::new(-5, 20, 9)), BlockStateId(3));
        // outside the section box
        assert_eq!(region.get_block_state(BlockPos::new(0, -1, 0)), BlockStateId::AIR);
    }

    #[test]
    fn writable_requires_section() {
        let mut region = GenRegion::new();
        assert!(!region.ensure_writable(BlockPos::new(0, 0, 0)));
        region.insert_section(SectionPos { x: 0, y: 0, z: 0 }, ChunkSection::new_empty());
        assert!(region.ensure_writable(BlockPos::new(5, 5, 5)));
    }

    #[test]
    fn writable_bounds_enforced() {
        let mut region = GenRegion::filled(
            SectionPos { x: 0, y: 0, z: 0 },
            SectionPos { x: 0, y: 0, z: 0 },
            BlockStateId(1),
        );
        region.set_writable_bounds(BlockPos::new(0, 0, 0), BlockPos::new(7, 7, 7));
        assert!(region.ensure_writable(BlockPos::new(7, 7, 7)));
        assert!(!region.ensure_writable(BlockPos::new(8, 0, 0)));
    }
}
