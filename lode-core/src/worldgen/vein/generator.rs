//! The vein carving pass.

use std::sync::Arc;

use lode_utils::density::{BoundDensityFunction, NoiseContext, NoiseState};
use lode_utils::random::Random;
use lode_utils::{BlockPos, BlockStateId, Identifier};

use crate::chunk::{BulkSectionAccess, WorldGenLevel};
use crate::registry::ChemicalRegistry;
use crate::worldgen::noise::DensityFunctions;

use super::definition::{CandidateBlocks, VeinCandidate, VeinDefinition};
use super::{shape, VeinError};

/// Id of the vein toggle function.
pub const TOGGLE_FUNCTION: &str = "lode:ore_vein_toggle";
/// Id of the vein ridged gate function.
pub const RIDGED_FUNCTION: &str = "lode:ore_vein_ridged";

/// Largest scan radius a cluster may request.
const MAX_RADIUS: i32 = 22;

/// Per-placement parameters chosen by the caller.
#[derive(Debug, Clone, Copy)]
pub struct PlacementRequest {
    /// Cluster diameter in blocks; the scan radius is half of it.
    pub cluster_size: i32,
    /// Fraction of vein cells that survive the density rolls.
    pub density: f32,
}

/// A vein definition bound to a world's noises, ready to generate.
#[derive(Debug)]
pub struct VeinedGenerator {
    definition: VeinDefinition,
    toggle: BoundDensityFunction,
    ridged: BoundDensityFunction,
    chemicals: Arc<ChemicalRegistry>,
}

impl VeinedGenerator {
    /// Validate `definition` and bind its density functions.
    ///
    /// Binding consumes no randomness, so building all generators up front
    /// at world load never disturbs generation streams. Unknown function or
    /// noise ids fail here.
    pub fn new(
        definition: VeinDefinition,
        functions: &DensityFunctions,
        state: &NoiseState,
        chemicals: Arc<ChemicalRegistry>,
    ) -> Result<Self, VeinError> {
        definition.validate()?;
        let toggle = bind(functions, state, TOGGLE_FUNCTION)?;
        let ridged = bind(functions, state, RIDGED_FUNCTION)?;
        log::debug!(
            "bound vein generator: y=[{}, {}], {} ore / {} rare candidates",
            definition.min_y,
            definition.max_y,
            definition.ore_blocks.len(),
            definition.rare_blocks.len(),
        );
        Ok(Self {
            definition,
            toggle,
            ridged,
            chemicals,
        })
    }

    /// Carve one vein around `origin`, returning whether anything changed.
    ///
    /// The scan visits the inclusive cube of half `cluster_size` around the
    /// origin, capped at radius 22. All noise samples share one jitter
    /// offset of up to 15 blocks per axis, drawn before the scan. Every
    /// random draw below is ordered and conditional exactly as documented,
    /// since any extra or missing draw changes the rest of the world.
    pub fn generate<L: WorldGenLevel>(
        &self,
        level: &mut L,
        random: &mut impl Random,
        request: &PlacementRequest,
        origin: BlockPos,
    ) -> bool {
        let radius = ((request.cluster_size as f32 / 2.0).ceil() as i32).min(MAX_RADIUS);
        let mut access = BulkSectionAccess::new(level);
        let jitter_x = random.next_i32_bounded(16);
        let jitter_y = random.next_i32_bounded(16);
        let jitter_z = random.next_i32_bounded(16);

        let mut placed = 0u32;
        for dx in -radius..=radius {
            for dy in -radius..=radius {
                for dz in -radius..=radius {
                    let pos = BlockPos::new(origin.x + dx, origin.y + dy, origin.z + dz);
                    let ctx =
                        NoiseContext::new(pos.x + jitter_x, pos.y + jitter_y, pos.z + jitter_z);

                    let toggle = self.toggle.sample(&ctx);
                    let Some(chance) = shape::evaluate(&self.definition, origin.y, toggle) else {
                        continue;
                    };
                    if random.next_f32() > request.density {
                        continue;
                    }
                    if self.ridged.sample(&ctx) >= 0.0 {
                        continue;
                    }
                    if !access.has_section(pos) {
                        continue;
                    }
                    if !access.ensure_writable(pos) {
                        continue;
                    }

                    let current = access.get_block_state(pos);
                    // second density gate; failing it abandons the cell
                    // without touching the filler path
                    if random.next_f32() > request.density {
                        continue;
                    }
                    if f64::from(random.next_f32()) < chance {
                        let candidate = if !self.definition.rare_blocks.is_empty()
                            && random.next_f32() < self.definition.rare_block_chance
                        {
                            pick_weighted(&self.definition.rare_blocks, random)
                        } else {
                            pick_weighted(&self.definition.ore_blocks, random)
                        };
                        if self.place_ore(&mut access, pos, current, candidate, random) {
                            placed += 1;
                        }
                    } else {
                        if self.definition.filler_block.is_air() {
                            continue;
                        }
                        if !self.definition.placement_rule.test(current, random) {
                            continue;
                        }
                        access.set_block_state(pos, self.definition.filler_block);
                        if access.get_block_state(pos) != current {
                            placed += 1;
                        }
                    }
                }
            }
        }

        log::trace!("vein at {origin:?} placed {placed} blocks");
        placed > 0
    }

    /// Place one candidate at `pos`, returning whether a write happened.
    fn place_ore<L: WorldGenLevel>(
        &self,
        access: &mut BulkSectionAccess<'_, L>,
        pos: BlockPos,
        current: BlockStateId,
        candidate: &VeinCandidate,
        random: &mut impl Random,
    ) -> bool {
        match &candidate.blocks {
            CandidateBlocks::States(states) => {
                for entry in states {
                    // the rule may consume randomness, so it runs even for
                    // entries that turn out to be air
                    if !entry.target.test(current, random) {
                        continue;
                    }
                    if entry.state.is_air() {
                        continue;
                    }
                    access.set_block_state(pos, entry.state);
                    return true;
                }
                false
            }
            CandidateBlocks::Material(material) => {
                if !self.definition.placement_rule.test(current, random) {
                    return false;
                }
                let Some(prefix) = self.chemicals.classify(current) else {
                    return false;
                };
                let Some(ore) = self.chemicals.resolve_block(prefix, material) else {
                    return false;
                };
                if ore.is_air() {
                    return false;
                }
                access.set_block_state(pos, ore);
                true
            }
        }
    }
}

fn bind(
    functions: &DensityFunctions,
    state: &NoiseState,
    id: &str,
) -> Result<BoundDensityFunction, VeinError> {
    let id = Identifier::of(id);
    let function = functions
        .get(&id)
        .ok_or_else(|| VeinError::UnknownFunction(id.clone()))?;
    Ok(function.bind(state)?)
}

/// Pick a candidate proportionally to its weight, consuming one bounded draw.
fn pick_weighted<'a>(table: &'a [VeinCandidate], random: &mut impl Random) -> &'a VeinCandidate {
    let total: i64 = table.iter().map(|c| i64::from(c.weight)).sum();
    debug_assert!(
        (1..=i64::from(i32::MAX)).contains(&total),
        "candidate weights must sum into (0, i32::MAX]"
    );
    let mut roll = i64::from(random.next_i32_bounded(total as i32));
    for candidate in table {
        roll -= i64::from(candidate.weight);
        if roll < 0 {
            return candidate;
        }
    }
    &table[table.len() - 1]
}
