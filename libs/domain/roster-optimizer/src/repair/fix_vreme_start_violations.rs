// [libs/domain/roster-optimizer/src/repair/fix_vreme_start_violations.rs]
//! `FixVremeStartViolations` (§4.7.6): clears any cell where the controller
//! is not yet within their personal shift-start timestamp, or is past the
//! `M`-shift end-of-shift cutoff (Invariant 2).

use roster_models::{Assignment, Cell};

use crate::oracle::ConstraintOracle;

pub fn run(mut assignment: Assignment, oracle: &ConstraintOracle) -> Assignment {
    for controller in 0..assignment.num_controllers() {
        for slot in 0..assignment.num_slots() {
            if !assignment.get(controller, slot).is_break() && !oracle.is_eligible(controller, slot) {
                assignment.set(controller, slot, Cell::Break);
            }
        }
    }
    assignment
}
