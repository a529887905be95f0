// [libs/domain/roster-optimizer/src/repair/fix_ss_sup_violations.rs]
//! `FixSsSupViolations` (§3.6, §8 property 5, Invariant 6): for each slot
//! where both an SS and a SUP controller are working, keep the first
//! occurrence (by controller index) and demote the other to break, then
//! try to reassign the freed requirement to another idle eligible
//! controller, mirroring `FixSectorRepetitions`.

use roster_models::{Assignment, Cell, OperativeWorkplace};

use crate::oracle::ConstraintOracle;

pub fn run(mut assignment: Assignment, oracle: &ConstraintOracle) -> Assignment {
    let domain = oracle.domain();

    for slot in 0..assignment.num_slots() {
        let mut ss_controller: Option<usize> = None;
        let mut sup_controller: Option<usize> = None;
        for (controller, _) in assignment.working_in_slot(slot) {
            match domain.controller(controller).workplace {
                OperativeWorkplace::Ss if ss_controller.is_none() => ss_controller = Some(controller),
                OperativeWorkplace::Sup if sup_controller.is_none() => sup_controller = Some(controller),
                _ => {}
            }
        }

        let (Some(ss), Some(sup)) = (ss_controller, sup_controller) else {
            continue;
        };
        let demoted = ss.max(sup);
        let freed = assignment.get(demoted, slot).sector_position();
        assignment.set(demoted, slot, Cell::Break);

        let Some(freed) = freed else { continue };
        let replacement = (0..assignment.num_controllers())
            .filter(|&c| c != demoted)
            .filter(|&c| assignment.get(c, slot).is_break())
            .filter(|&c| oracle.is_assignable(c, slot))
            .filter(|&c| !oracle.would_violate_ss_sup(&assignment, slot, c))
            .find(|&c| !oracle.would_break_continuity(&assignment, c, slot, freed));
        if let Some(replacement) = replacement {
            assignment.set(replacement, slot, Cell::from(freed));
        }
    }

    assignment
}
