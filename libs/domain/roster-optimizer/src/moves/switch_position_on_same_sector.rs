// [libs/domain/roster-optimizer/src/moves/switch_position_on_same_sector.rs]
//! Move 6 (§4.4.6): within one contiguous same-sector run for a controller,
//! flip the position letter (E <-> P) of a single slot.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use roster_models::{Assignment, Cell, Position};

use crate::oracle::ConstraintOracle;

pub fn propose(assignment: &Assignment, _oracle: &ConstraintOracle, rng: &mut StdRng) -> Option<Assignment> {
    let num_controllers = assignment.num_controllers();
    if num_controllers == 0 {
        return None;
    }
    let mut controllers: Vec<usize> = (0..num_controllers).collect();
    controllers.shuffle(rng);

    let controller = *controllers.iter().find(|&&c| {
        (0..assignment.num_slots()).any(|t| !assignment.get(c, t).is_break())
    })?;

    let working_slots: Vec<usize> = (0..assignment.num_slots())
        .filter(|&t| !assignment.get(controller, t).is_break())
        .collect();
    let slot = *working_slots.choose(rng)?;

    let sp = assignment.get(controller, slot).sector_position()?;
    let flipped = match sp.position {
        Position::Executive => Position::Planner,
        Position::Planner => Position::Executive,
    };

    let mut candidate = assignment.clone();
    candidate.set(
        controller,
        slot,
        Cell::from(roster_models::SectorPosition { base: sp.base, position: flipped }),
    );
    Some(candidate)
}
