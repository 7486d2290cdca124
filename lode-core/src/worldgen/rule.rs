//! Block predicates used to gate ore placement.

use lode_utils::random::Random;
use lode_utils::BlockStateId;

/// A predicate over the block state currently at a position.
///
/// `RandomBlockMatch` consumes exactly one float from the stream every time
/// it runs, pass or fail. Skipping the draw on a state mismatch would shift
/// every later draw and change the generated world.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleTest {
    /// Matches any state.
    AlwaysTrue,
    /// Matches one exact state.
    BlockMatch(BlockStateId),
    /// Matches one exact state with the given probability.
    RandomBlockMatch {
        /// The state to match.
        state: BlockStateId,
        /// Pass chance in `[0, 1]`.
        probability: f32,
    },
}

impl RuleTest {
    /// Evaluate the predicate against `state`.
    pub fn test(&self, state: BlockStateId, random: &mut impl Random) -> bool {
        match self {
            Self::AlwaysTrue => true,
            Self::BlockMatch(expected) => state == *expected,
            Self::RandomBlockMatch {
                state: expected,
                probability,
            } => {
                let roll = random.next_f32();
                state == *expected && roll < *probability
            }
        }
    }
}
