// [libs/domain/roster-optimizer/src/repair/enforce_break_rules.rs]
//! Repair pass 4 (§4.7.4): per controller, after 4 consecutive work slots,
//! force the next 2 slots (if still within the shift) to break.

use roster_models::{Assignment, Cell};

use crate::oracle::ConstraintOracle;

const MAX_WORK_BLOCK: usize = 4;
const FORCED_BREAK_SLOTS: usize = 2;

pub fn run(mut assignment: Assignment, _oracle: &ConstraintOracle) -> Assignment {
    for controller in 0..assignment.num_controllers() {
        let mut run_length = 0usize;
        let mut slot = 0usize;
        while slot < assignment.num_slots() {
            if assignment.get(controller, slot).is_break() {
                run_length = 0;
                slot += 1;
                continue;
            }
            run_length += 1;
            if run_length == MAX_WORK_BLOCK {
                for forced in slot + 1..(slot + 1 + FORCED_BREAK_SLOTS).min(assignment.num_slots()) {
                    assignment.set(controller, forced, Cell::Break);
                }
                run_length = 0;
                slot += 1 + FORCED_BREAK_SLOTS;
                continue;
            }
            slot += 1;
        }
    }
    assignment
}
