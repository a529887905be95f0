// [libs/domain/roster-optimizer/src/repair/maximize_utilization_between_flag_s.rs]
//! Repair pass 5 (§4.7.5): for each controller, compute the gaps between
//! (and around) its Flag-S windows; wherever utilization is below 75%,
//! greedily assign the idle slots to still-uncovered sectors, respecting
//! continuity and the 4-slot work cap.

use roster_models::{Assignment, Cell};

use crate::oracle::ConstraintOracle;

const UTILIZATION_TARGET: f64 = 0.75;

pub fn run(mut assignment: Assignment, oracle: &ConstraintOracle) -> Assignment {
    let domain = oracle.domain();

    for controller in 0..assignment.num_controllers() {
        let c = domain.controller(controller);
        if c.flag_s_intervals.is_empty() {
            continue;
        }

        let slot_index_at = |instant: chrono::DateTime<chrono::Utc>| -> usize {
            domain
                .slots()
                .iter()
                .position(|slot| slot.start >= instant)
                .unwrap_or(domain.num_slots())
        };

        let mut gaps: Vec<(usize, usize)> = Vec::new();
        let mut cursor = 0usize;
        for window in &c.flag_s_intervals {
            let window_start_slot = slot_index_at(window.start);
            if window_start_slot > cursor {
                gaps.push((cursor, window_start_slot));
            }
            cursor = slot_index_at(window.end).max(window_start_slot);
        }
        if cursor < domain.num_slots() {
            gaps.push((cursor, domain.num_slots()));
        }

        for (start, end) in gaps {
            if end <= start {
                continue;
            }
            let total = end - start;
            let working = (start..end).filter(|&t| !assignment.get(controller, t).is_break()).count();
            if working as f64 / total as f64 >= UTILIZATION_TARGET {
                continue;
            }

            for slot in start..end {
                if !assignment.get(controller, slot).is_break() {
                    continue;
                }
                if !oracle.is_assignable(controller, slot) {
                    continue;
                }
                if !oracle.can_run_longer(&assignment, controller, slot) {
                    continue;
                }
                let covered: std::collections::HashSet<_> = assignment
                    .working_in_slot(slot)
                    .filter_map(|(_, cell)| cell.sector_position())
                    .collect();
                let candidate = domain.requirement(slot).iter().copied().find(|sp| {
                    !covered.contains(sp)
                        && !oracle.would_break_continuity(&assignment, controller, slot, *sp)
                        && !oracle.would_violate_ss_sup(&assignment, slot, controller)
                });
                if let Some(sp) = candidate {
                    assignment.set(controller, slot, Cell::from(sp));
                }
            }
        }
    }

    assignment
}
