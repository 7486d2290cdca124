//! Resolved vein definitions.

use lode_utils::BlockStateId;

use crate::registry::MaterialId;
use crate::worldgen::rule::RuleTest;

use super::VeinError;

/// One placeable state gated by a rule test.
#[derive(Debug, Clone)]
pub struct TargetState {
    /// Predicate over the state currently at the position.
    pub target: RuleTest,
    /// The state to place when the predicate passes.
    pub state: BlockStateId,
}

/// What a vein candidate places.
#[derive(Debug, Clone)]
pub enum CandidateBlocks {
    /// An ordered list of rule-gated states; the first passing entry wins.
    States(Vec<TargetState>),
    /// A material resolved against the host rock at placement time.
    Material(MaterialId),
}

/// A weighted vein candidate.
#[derive(Debug, Clone)]
pub struct VeinCandidate {
    /// What to place.
    pub blocks: CandidateBlocks,
    /// Selection weight relative to the other candidates of its table.
    pub weight: u32,
}

/// A fully resolved ore vein.
///
/// Thresholds keep the widths they are configured with; widening to f64
/// happens at the comparison sites so the carving math is reproducible.
#[derive(Debug, Clone)]
pub struct VeinDefinition {
    /// Common ore candidates.
    pub ore_blocks: Vec<VeinCandidate>,
    /// Rare ore candidates; empty means the vein has no rare path.
    pub rare_blocks: Vec<VeinCandidate>,
    /// Indicator block for rejected cells; air disables the filler path.
    pub filler_block: BlockStateId,
    /// Lowest Y the vein may occupy.
    pub min_y: i32,
    /// Highest Y the vein may occupy.
    pub max_y: i32,
    /// Minimum |toggle| + edge roundoff for a cell to be part of the vein.
    pub veininess_threshold: f32,
    /// Distance from the band edges over which the roundoff fades out.
    pub edge_roundoff_begin: i32,
    /// Largest roundoff penalty, applied right at the band edges.
    pub max_edge_roundoff: f64,
    /// Ore chance at the veininess threshold.
    pub min_richness: f32,
    /// Ore chance at and above the richness saturation point.
    pub max_richness: f32,
    /// |toggle| at which richness saturates.
    pub max_richness_threshold: f32,
    /// Chance that a passing cell rolls on the rare table instead.
    pub rare_block_chance: f32,
    /// Extra predicate a position must pass before any write.
    pub placement_rule: RuleTest,
}

impl VeinDefinition {
    /// A vein over `[min_y, max_y]` with the default carving thresholds and
    /// no candidates.
    #[must_use]
    pub fn new(min_y: i32, max_y: i32) -> Self {
        Self {
            ore_blocks: Vec::new(),
            rare_blocks: Vec::new(),
            filler_block: BlockStateId::AIR,
            min_y,
            max_y,
            veininess_threshold: 0.4,
            edge_roundoff_begin: 20,
            max_edge_roundoff: 0.2,
            min_richness: 0.1,
            max_richness: 0.3,
            max_richness_threshold: 0.6,
            rare_block_chance: 0.02,
            placement_rule: RuleTest::AlwaysTrue,
        }
    }

    /// Add a common candidate placing `state` unconditionally.
    #[must_use]
    pub fn with_ore_block(mut self, state: BlockStateId, weight: u32) -> Self {
        self.ore_blocks.push(VeinCandidate {
            blocks: CandidateBlocks::States(vec![TargetState {
                target: RuleTest::AlwaysTrue,
                state,
            }]),
            weight,
        });
        self
    }

    /// Add a rare candidate placing `state` unconditionally.
    #[must_use]
    pub fn with_rare_block(mut self, state: BlockStateId, weight: u32) -> Self {
        self.rare_blocks.push(VeinCandidate {
            blocks: CandidateBlocks::States(vec![TargetState {
                target: RuleTest::AlwaysTrue,
                state,
            }]),
            weight,
        });
        self
    }

    /// Set the filler indicator block.
    #[must_use]
    pub fn with_filler(mut self, state: BlockStateId) -> Self {
        self.filler_block = state;
        self
    }

    /// Every candidate of both tables with its weight, common first.
    pub fn all_entries(&self) -> impl Iterator<Item = (&CandidateBlocks, u32)> {
        self.ore_blocks
            .iter()
            .chain(self.rare_blocks.iter())
            .map(|candidate| (&candidate.blocks, candidate.weight))
    }

    /// Reject definitions that can never place anything sensible.
    pub fn validate(&self) -> Result<(), VeinError> {
        if self.min_y > self.max_y {
            return Err(VeinError::InvertedYBounds {
                min_y: self.min_y,
                max_y: self.max_y,
            });
        }
        if self.ore_blocks.is_empty() {
            return Err(VeinError::EmptyOreBlocks);
        }
        validate_table(&self.ore_blocks)?;
        if !self.rare_blocks.is_empty() {
            validate_table(&self.rare_blocks)?;
        }
        Ok(())
    }
}

fn validate_table(table: &[VeinCandidate]) -> Result<(), VeinError> {
    for candidate in table {
        if candidate.weight == 0 {
            return Err(VeinError::ZeroWeight);
        }
        if let CandidateBlocks::States(states) = &candidate.blocks {
            if states.is_empty() {
                return Err(VeinError::EmptyOreBlocks);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_expected_thresholds() {
        let vein = VeinDefinition::new(-64, 64);
        assert!((vein.veininess_threshold - 0.4).abs() < f32::EPSILON);
        assert_eq!(vein.edge_roundoff_begin, 20);
        assert!((vein.max_edge_roundoff - 0.2).abs() < f64::EPSILON);
        assert!((vein.min_richness - 0.1).abs() < f32::EPSILON);
        assert!((vein.max_richness - 0.3).abs() < f32::EPSILON);
        assert!((vein.max_richness_threshold - 0.6).abs() < f32::EPSILON);
        assert!((vein.rare_block_chance - 0.02).abs() < f32::EPSILON);
        assert!(vein.filler_block.is_air());
        assert!(vein.rare_blocks.is_empty());
    }

    #[test]
    fn validate_rejects_empty_ores() {
        let vein = VeinDefinition::new(0, 10);
        assert!(matches!(vein.validate(), Err(VeinError::EmptyOreBlocks)));
    }

    #[test]
    fn validate_rejects_zero_weight() {
        let vein = VeinDefinition::new(0, 10).with_ore_block(BlockStateId(1), 0);
        assert!(matches!(vein.validate(), Err(VeinError::ZeroWeight)));
    }

    #[test]
    fn validate_rejects_zero_weight_among_positive() {
        let vein = VeinDefinition::new(0, 10)
            .with_ore_block(BlockStateId(1), 3)
            .with_ore_block(BlockStateId(2), 0);
        assert!(matches!(vein.validate(), Err(VeinError::ZeroWeight)));

        let rare = VeinDefinition::new(0, 10)
            .with_ore_block(BlockStateId(1), 3)
            .with_rare_block(BlockStateId(2), 0);
        assert!(matches!(rare.validate(), Err(VeinError::ZeroWeight)));
    }

    #[test]
    fn validate_rejects_inverted_band() {
        let vein = VeinDefinition::new(10, 0).with_ore_block(BlockStateId(1), 1);
        assert!(matches!(
            vein.validate(),
            Err(VeinError::InvertedYBounds { .. })
        ));
    }

    #[test]
    fn validate_rejects_empty_state_list() {
        let mut vein = VeinDefinition::new(0, 10);
        vein.ore_blocks.push(VeinCandidate {
            blocks: CandidateBlocks::States(Vec::new()),
            weight: 1,
        });
        assert!(matches!(vein.validate(), Err(VeinError::EmptyOreBlocks)));
    }

    #[test]
    fn all_entries_spans_both_tables() {
        let vein = VeinDefinition::new(0, 10)
            .with_ore_block(BlockStateId(1), 3)
            .with_ore_block(BlockStateId(2), 2)
            .with_rare_block(BlockStateId(3), 1);
        let weights: Vec<u32> = vein.all_entries().map(|(_, w)| w).collect();
        assert_eq!(weights, vec![3, 2, 1]);
    }

    #[test]
    fn validate_accepts_well_formed() {
        let vein = VeinDefinition::new(-30, 30)
            .with_ore_block(BlockStateId(1), 3)
            .with_rare_block(BlockStateId(2), 1)
            .with_filler(BlockStateId(9));
        assert!(vein.validate().is_ok());
    }
}
