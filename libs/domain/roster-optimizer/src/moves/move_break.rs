// [libs/domain/roster-optimizer/src/moves/move_break.rs]
//! Move 2 (§4.4.2): relocate one of a controller's existing break runs to
//! a new start position that still fits entirely within their shift
//! window, restoring plausible work values at the vacated slots.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use roster_models::{Assignment, Cell, SectorPosition};

use crate::oracle::ConstraintOracle;

/// Maximal break runs in `controller`'s row, as `(start, length)` pairs.
fn break_runs(assignment: &Assignment, controller: usize) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut run_start = None;
    for slot in 0..assignment.num_slots() {
        if assignment.get(controller, slot).is_break() {
            run_start.get_or_insert(slot);
        } else if let Some(start) = run_start.take() {
            runs.push((start, slot - start));
        }
    }
    if let Some(start) = run_start {
        runs.push((start, assignment.num_slots() - start));
    }
    runs
}

/// The sector base adjacent to a break run, preferring the slot right
/// before the run, falling back to the slot right after.
fn adjacent_sector(assignment: &Assignment, controller: usize, start: usize, length: usize) -> Option<SectorPosition> {
    if start > 0 {
        if let Some(sp) = assignment.get(controller, start - 1).sector_position() {
            return Some(sp);
        }
    }
    let after = start + length;
    if after < assignment.num_slots() {
        if let Some(sp) = assignment.get(controller, after).sector_position() {
            return Some(sp);
        }
    }
    None
}

pub fn propose(assignment: &Assignment, oracle: &ConstraintOracle, rng: &mut StdRng) -> Option<Assignment> {
    let num_controllers = assignment.num_controllers();
    if num_controllers == 0 {
        return None;
    }
    let controller = rng.gen_range(0..num_controllers);
    let runs = break_runs(assignment, controller);
    if runs.is_empty() {
        return None;
    }
    let (old_start, length) = *runs.choose(rng)?;

    let num_slots = assignment.num_slots();
    if length > num_slots {
        return None;
    }
    let candidates: Vec<usize> = (0..=num_slots - length)
        .filter(|&s| s != old_start)
        .filter(|&s| (s..s + length).all(|t| oracle.is_assignable(controller, t)))
        .collect();
    let new_start = *candidates.choose(rng)?;

    let mut candidate = assignment.clone();
    if let Some(fill) = adjacent_sector(assignment, controller, old_start, length) {
        for t in old_start..old_start + length {
            if oracle.is_assignable(controller, t) {
                candidate.set(controller, t, Cell::from(fill));
            }
        }
    }
    for t in new_start..new_start + length {
        candidate.set(controller, t, Cell::Break);
    }
    Some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_maximal_break_runs() {
        use roster_models::{Position, SectorBaseId, SectorPosition};
        let sp = SectorPosition { base: SectorBaseId(0), position: Position::Executive };
        let mut assignment = Assignment::new(1, 6);
        // default grid is all-break; carve out work at 0, 1 and 4 so that
        // slots {2,3} and {5} remain as the only break runs.
        assignment.set(0, 0, Cell::from(sp));
        assignment.set(0, 1, Cell::from(sp));
        assignment.set(0, 4, Cell::from(sp));
        assert_eq!(break_runs(&assignment, 0), vec![(2, 2), (5, 1)]);
    }
}
