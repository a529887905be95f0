// [libs/domain/roster-optimizer/src/moves/swap_time_block.rs]
//! Move 4 (§4.4.4): swap a contiguous window `[t, t+L)`, `1 <= L <= 3`, of
//! assignments between two distinct controllers, requiring both to be
//! eligible throughout the window.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use roster_models::Assignment;

use crate::oracle::ConstraintOracle;

const MAX_BLOCK_LENGTH: usize = 3;

pub fn propose(assignment: &Assignment, oracle: &ConstraintOracle, rng: &mut StdRng) -> Option<Assignment> {
    let num_controllers = assignment.num_controllers();
    let num_slots = assignment.num_slots();
    if num_controllers < 2 || num_slots == 0 {
        return None;
    }

    let mut controllers: Vec<usize> = (0..num_controllers).collect();
    controllers.shuffle(rng);
    let (c1, c2) = (controllers[0], controllers[1]);

    let max_length = MAX_BLOCK_LENGTH.min(num_slots);
    let length = rng.gen_range(1..=max_length);
    if num_slots < length {
        return None;
    }
    let start = rng.gen_range(0..=num_slots - length);
    let window = start..start + length;

    let both_eligible = window
        .clone()
        .all(|t| oracle.is_eligible(c1, t) && oracle.is_eligible(c2, t));
    if !both_eligible {
        return None;
    }

    let mut candidate = assignment.clone();
    for t in window {
        let cell1 = assignment.get(c1, t);
        let cell2 = assignment.get(c2, t);
        candidate.set(c1, t, cell2);
        candidate.set(c2, t, cell1);
    }
    Some(candidate)
}
