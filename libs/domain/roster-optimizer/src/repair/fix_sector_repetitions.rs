// [libs/domain/roster-optimizer/src/repair/fix_sector_repetitions.rs]
//! Repair pass 1 (§4.7.1): for each slot, collapse duplicate sector
//! positions to their first occurrence, demote cells violating
//! eligibility/validity, then try to reassign newly idle eligible
//! controllers to whatever in `Req(t)` is still uncovered.

use roster_models::{Assignment, Cell};

use crate::oracle::ConstraintOracle;

pub fn run(mut assignment: Assignment, oracle: &ConstraintOracle) -> Assignment {
    let domain = oracle.domain();

    for slot in 0..assignment.num_slots() {
        let mut seen = std::collections::HashSet::new();
        for controller in 0..assignment.num_controllers() {
            let cell = assignment.get(controller, slot);
            let Some(sp) = cell.sector_position() else {
                continue;
            };
            let demote = !seen.insert(sp)
                || !oracle.is_assignable(controller, slot)
                || !oracle.is_valid_sector(sp, slot);
            if demote {
                assignment.set(controller, slot, Cell::Break);
            }
        }

        let covered: std::collections::HashSet<_> = assignment
            .working_in_slot(slot)
            .filter_map(|(_, cell)| cell.sector_position())
            .collect();
        let mut idle: Vec<usize> = (0..assignment.num_controllers())
            .filter(|&c| assignment.get(c, slot).is_break())
            .filter(|&c| oracle.is_assignable(c, slot))
            .collect();

        for &required in domain.requirement(slot) {
            if covered.contains(&required) {
                continue;
            }
            let Some(pos) = idle.iter().position(|&c| {
                !oracle.would_break_continuity(&assignment, c, slot, required)
                    && !oracle.would_violate_ss_sup(&assignment, slot, c)
            }) else {
                continue;
            };
            let controller = idle.remove(pos);
            assignment.set(controller, slot, Cell::from(required));
        }
    }

    assignment
}
