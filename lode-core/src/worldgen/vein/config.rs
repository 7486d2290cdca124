//! Data-driven vein configuration.
//!
//! The on-disk form references blocks by id; [`VeinConfig::resolve`] turns
//! it into a [`VeinDefinition`] against a block registry, so every unknown
//! id fails at load time instead of mid-generation.

use lode_utils::Identifier;
use serde::{Deserialize, Serialize};

use crate::registry::{BlockRegistry, MaterialId};
use crate::worldgen::rule::RuleTest;

use super::definition::{CandidateBlocks, TargetState, VeinCandidate, VeinDefinition};
use super::VeinError;

/// A rule test in configuration form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleTestConfig {
    /// Matches any state.
    AlwaysTrue,
    /// Matches one block.
    BlockMatch {
        /// The block to match.
        block: Identifier,
    },
    /// Matches one block with the given probability.
    RandomBlockMatch {
        /// The block to match.
        block: Identifier,
        /// Pass chance in `[0, 1]`.
        probability: f32,
    },
}

impl RuleTestConfig {
    fn resolve(&self, blocks: &BlockRegistry) -> Result<RuleTest, VeinError> {
        Ok(match self {
            Self::AlwaysTrue => RuleTest::AlwaysTrue,
            Self::BlockMatch { block } => RuleTest::BlockMatch(lookup(blocks, block)?),
            Self::RandomBlockMatch { block, probability } => RuleTest::RandomBlockMatch {
                state: lookup(blocks, block)?,
                probability: *probability,
            },
        })
    }
}

/// One rule-gated state in configuration form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetStateConfig {
    /// Predicate over the current state.
    pub target: RuleTestConfig,
    /// Block to place when the predicate passes.
    pub state: Identifier,
}

/// What a candidate places, in configuration form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CandidateBlocksConfig {
    /// An ordered list of rule-gated states.
    States(Vec<TargetStateConfig>),
    /// A material resolved against the host rock at placement time.
    Material(Identifier),
}

/// A weighted candidate in configuration form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateConfig {
    /// What to place.
    pub block: CandidateBlocksConfig,
    /// Selection weight.
    pub weight: u32,
}

/// An ore vein as loaded from data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VeinConfig {
    /// Common ore candidates.
    pub ore_blocks: Vec<CandidateConfig>,
    /// Rare ore candidates.
    #[serde(default)]
    pub rare_blocks: Vec<CandidateConfig>,
    /// Indicator block for rejected cells.
    #[serde(default = "default_filler")]
    pub filler_block: Identifier,
    /// Lowest Y the vein may occupy.
    pub min_y: i32,
    /// Highest Y the vein may occupy.
    pub max_y: i32,
    /// Minimum |toggle| for vein membership.
    #[serde(default = "default_veininess_threshold")]
    pub veininess_threshold: f32,
    /// Distance from the band edges over which the roundoff fades out.
    #[serde(default = "default_edge_roundoff_begin")]
    pub edge_roundoff_begin: i32,
    /// Largest roundoff penalty.
    #[serde(default = "default_max_edge_roundoff")]
    pub max_edge_roundoff: f64,
    /// Ore chance at the veininess threshold.
    #[serde(default = "default_min_richness")]
    pub min_richness: f32,
    /// Ore chance at saturation.
    #[serde(default = "default_max_richness")]
    pub max_richness: f32,
    /// |toggle| at which richness saturates.
    #[serde(default = "default_max_richness_threshold")]
    pub max_richness_threshold: f32,
    /// Chance of rolling on the rare table.
    #[serde(default = "default_rare_block_chance")]
    pub rare_block_chance: f32,
    /// Extra predicate before any write.
    #[serde(default)]
    pub placement_rule: Option<RuleTestConfig>,
}

fn default_filler() -> Identifier {
    Identifier::of("minecraft:air")
}

fn default_veininess_threshold() -> f32 {
    0.4
}

fn default_edge_roundoff_begin() -> i32 {
    20
}

fn default_max_edge_roundoff() -> f64 {
    0.2
}

fn default_min_richness() -> f32 {
    0.1
}

fn default_max_richness() -> f32 {
    0.3
}

fn default_max_richness_threshold() -> f32 {
    0.6
}

fn default_rare_block_chance() -> f32 {
    0.02
}

impl VeinConfig {
    /// Resolve every block reference and validate the result.
    pub fn resolve(&self, blocks: &BlockRegistry) -> Result<VeinDefinition, VeinError> {
        let mut definition = VeinDefinition::new(self.min_y, self.max_y);
        definition.ore_blocks = resolve_table(&self.ore_blocks, blocks)?;
        definition.rare_blocks = resolve_table(&self.rare_blocks, blocks)?;
        definition.filler_block = lookup(blocks, &self.filler_block)?;
        definition.veininess_threshold = self.veininess_threshold;
        definition.edge_roundoff_begin = self.edge_roundoff_begin;
        definition.max_edge_roundoff = self.max_edge_roundoff;
        definition.min_richness = self.min_richness;
        definition.max_richness = self.max_richness;
        definition.max_richness_threshold = self.max_richness_threshold;
        definition.rare_block_chance = self.rare_block_chance;
        if let Some(rule) = &self.placement_rule {
            definition.placement_rule = rule.resolve(blocks)?;
        }
        definition.validate()?;
        Ok(definition)
    }
}

fn resolve_table(
    table: &[CandidateConfig],
    blocks: &BlockRegistry,
) -> Result<Vec<VeinCandidate>, VeinError> {
    table
        .iter()
        .map(|candidate| {
            let blocks = match &candidate.block {
                CandidateBlocksConfig::States(states) => CandidateBlocks::States(
                    states
                        .iter()
                        .map(|entry| {
                            Ok(TargetState {
                                target: entry.target.resolve(blocks)?,
                                state: lookup(blocks, &entry.state)?,
                            })
                        })
                        .collect::<Result<Vec<_>, VeinError>>()?,
                ),
                CandidateBlocksConfig::Material(material) => {
                    CandidateBlocks::Material(MaterialId(material.clone()))
                }
            };
            Ok(VeinCandidate {
                blocks,
                weight: candidate.weight,
            })
        })
        .collect()
}

fn lookup(
    blocks: &BlockRegistry,
    id: &Identifier,
) -> Result<lode_utils::BlockStateId, VeinError> {
    blocks
        .state_of(id)
        .ok_or_else(|| VeinError::UnknownBlock(id.clone()))
}
