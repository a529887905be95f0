// [libs/domain/roster-optimizer/src/repair/fix_sector_continuity_violations.rs]
//! Repair pass 2 (§4.7.2): walk each controller's timeline; whenever the
//! sector base changes across adjacent non-break slots, break the
//! continuity by clearing the second slot, then try `TryReassignSector`
//! with another eligible idle controller so the requirement isn't simply
//! dropped.

use roster_models::{Assignment, Cell};

use crate::oracle::ConstraintOracle;

pub fn run(mut assignment: Assignment, oracle: &ConstraintOracle) -> Assignment {
    for controller in 0..assignment.num_controllers() {
        let mut previous_base = None;
        for slot in 0..assignment.num_slots() {
            let cell = assignment.get(controller, slot);
            match cell.sector_base() {
                Some(base) => {
                    if let Some(prev) = previous_base {
                        if prev != base {
                            let freed = cell.sector_position().expect("working cell has a sector");
                            assignment.set(controller, slot, Cell::Break);
                            try_reassign_sector(&mut assignment, oracle, slot, freed);
                            previous_base = assignment.get(controller, slot).sector_base();
                            continue;
                        }
                    }
                    previous_base = Some(base);
                }
                None => previous_base = None,
            }
        }
    }
    assignment
}

/// Looks for another idle, eligible, continuity-safe controller to cover
/// `freed` at `slot` now that it was vacated.
fn try_reassign_sector(
    assignment: &mut Assignment,
    oracle: &ConstraintOracle,
    slot: usize,
    freed: roster_models::SectorPosition,
) {
    if !oracle.is_valid_sector(freed, slot) {
        return;
    }
    let already_covered = assignment
        .working_in_slot(slot)
        .any(|(_, cell)| cell.sector_position() == Some(freed));
    if already_covered {
        return;
    }
    let replacement = (0..assignment.num_controllers())
        .filter(|&c| assignment.get(c, slot).is_break())
        .filter(|&c| oracle.is_assignable(c, slot))
        .filter(|&c| !oracle.would_violate_ss_sup(assignment, slot, c))
        .find(|&c| !oracle.would_break_continuity(assignment, c, slot, freed));
    if let Some(controller) = replacement {
        assignment.set(controller, slot, Cell::from(freed));
    }
}
