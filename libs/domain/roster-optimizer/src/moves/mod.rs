// [libs/domain/roster-optimizer/src/moves/mod.rs]
/*!
 * APARATO: NEIGHBORHOOD OPERATORS (ESTRATO L2)
 * RESPONSABILIDAD: SEIS GENERADORES DE MOVIMIENTOS PARA EL RECOCIDO (§4.4)
 *
 * Each operator clones the current `Assignment` and returns a mutated
 * candidate, or `None` if it found nothing to do (an empty neighborhood for
 * that operator at this state). `AnnealingEngine` is responsible for the
 * re-roll-up-to-30-times policy around `IsValidSolution`; these functions
 * just propose.
 */

mod fill_uncovered_sectors;
mod move_break;
mod swap_controllers_in_slot;
mod swap_positions;
mod swap_time_block;
mod switch_position_on_same_sector;

use rand::rngs::StdRng;
use roster_models::Assignment;

use crate::oracle::ConstraintOracle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    SwapControllersInSlot,
    MoveBreak,
    SwapPositions,
    SwapTimeBlock,
    FillUncoveredSectors,
    SwitchPositionOnSameSector,
}

pub const ALL_MOVES: [MoveKind; 6] = [
    MoveKind::SwapControllersInSlot,
    MoveKind::MoveBreak,
    MoveKind::SwapPositions,
    MoveKind::SwapTimeBlock,
    MoveKind::FillUncoveredSectors,
    MoveKind::SwitchPositionOnSameSector,
];

/// Dispatches to the chosen operator. Returns `None` when that operator has
/// no legal move available from `assignment`.
pub fn propose(
    kind: MoveKind,
    assignment: &Assignment,
    oracle: &ConstraintOracle,
    rng: &mut StdRng,
) -> Option<Assignment> {
    match kind {
        MoveKind::SwapControllersInSlot => swap_controllers_in_slot::propose(assignment, oracle, rng),
        MoveKind::MoveBreak => move_break::propose(assignment, oracle, rng),
        MoveKind::SwapPositions => swap_positions::propose(assignment, oracle, rng),
        MoveKind::SwapTimeBlock => swap_time_block::propose(assignment, oracle, rng),
        MoveKind::FillUncoveredSectors => fill_uncovered_sectors::propose(assignment, oracle, rng),
        MoveKind::SwitchPositionOnSameSector => {
            switch_position_on_same_sector::propose(assignment, oracle, rng)
        }
    }
}
