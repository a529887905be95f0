// [libs/domain/roster-optimizer/src/repair/ensure_all_controllers_assigned.rs]
//! Repair pass 3 (§4.7.3): any controller whose entire row is still break
//! is given a first eligible slot mapped to an uncovered requirement; if
//! none exists, it preempts a slot from the most-loaded other controller
//! (>= 2 assignments); as a last resort it joins an already-covered sector,
//! a documented deviation from Invariant 1 that must be logged (§7
//! `RepairGiveUp`).

use roster_models::{Assignment, Cell};
use tracing::warn;

use crate::oracle::ConstraintOracle;

pub struct Outcome {
    pub assignment: Assignment,
    /// Set when the last-resort duplicate-sector fallback fired for at
    /// least one controller.
    pub invariant_one_relaxed: bool,
}

pub fn run(mut assignment: Assignment, oracle: &ConstraintOracle) -> Outcome {
    let domain = oracle.domain();
    let mut invariant_one_relaxed = false;

    let unassigned: Vec<usize> = (0..assignment.num_controllers())
        .filter(|&c| assignment.workload(c) == 0)
        .collect();

    for controller in unassigned {
        if assign_to_uncovered_requirement(&mut assignment, oracle, controller) {
            continue;
        }
        if preempt_from_most_loaded(&mut assignment, oracle, controller) {
            continue;
        }
        if join_already_covered_sector(&mut assignment, oracle, controller) {
            invariant_one_relaxed = true;
            warn!(
                controller_index = controller,
                controller_id = %domain.controller(controller).id,
                "RepairGiveUp: EnsureAllControllersAssigned violated Invariant 1 for this controller"
            );
        }
    }

    Outcome { assignment, invariant_one_relaxed }
}

fn assign_to_uncovered_requirement(assignment: &mut Assignment, oracle: &ConstraintOracle, controller: usize) -> bool {
    let domain = oracle.domain();
    for slot in 0..assignment.num_slots() {
        if !oracle.is_assignable(controller, slot) {
            continue;
        }
        let covered: std::collections::HashSet<_> = assignment
            .working_in_slot(slot)
            .filter_map(|(_, cell)| cell.sector_position())
            .collect();
        let candidate = domain.requirement(slot).iter().copied().find(|sp| {
            !covered.contains(sp)
                && !oracle.would_break_continuity(assignment, controller, slot, *sp)
                && !oracle.would_violate_ss_sup(assignment, slot, controller)
        });
        if let Some(sp) = candidate {
            assignment.set(controller, slot, Cell::from(sp));
            return true;
        }
    }
    false
}

fn preempt_from_most_loaded(assignment: &mut Assignment, oracle: &ConstraintOracle, controller: usize) -> bool {
    let mut loaded: Vec<usize> = (0..assignment.num_controllers())
        .filter(|&c| c != controller && assignment.workload(c) >= 2)
        .collect();
    loaded.sort_by_key(|&c| std::cmp::Reverse(assignment.workload(c)));

    for other in loaded {
        for slot in 0..assignment.num_slots() {
            let Some(sp) = assignment.get(other, slot).sector_position() else {
                continue;
            };
            if !oracle.is_assignable(controller, slot) {
                continue;
            }
            if oracle.would_break_continuity(assignment, controller, slot, sp) {
                continue;
            }
            // Clear `other` first so the SS/SUP check no longer counts it.
            assignment.set(other, slot, Cell::Break);
            if oracle.would_violate_ss_sup(assignment, slot, controller) {
                assignment.set(other, slot, Cell::from(sp));
                continue;
            }
            assignment.set(controller, slot, Cell::from(sp));
            return true;
        }
    }
    false
}

fn join_already_covered_sector(assignment: &mut Assignment, oracle: &ConstraintOracle, controller: usize) -> bool {
    let domain = oracle.domain();
    for slot in 0..assignment.num_slots() {
        if !oracle.is_assignable(controller, slot) {
            continue;
        }
        if oracle.would_violate_ss_sup(assignment, slot, controller) {
            continue;
        }
        if let Some(sp) = domain.requirement(slot).first().copied() {
            assignment.set(controller, slot, Cell::from(sp));
            return true;
        }
    }
    false
}
