// [libs/domain/roster-optimizer/src/energy.rs]
/*!
 * APARATO: ENERGY FUNCTION (ESTRATO L2)
 * RESPONSABILIDAD: FUNCIÓN OBJETIVO PONDERADA PARA EL RECOCIDO SIMULADO (§4.3)
 *
 * Lower energy is better. Weights below are the authoritative specification
 * (§4.3): order of magnitude matters because acceptance behaves very
 * differently depending on whether a violation is "hard" (1e5-1e6, the
 * search should essentially never accept it) or "soft" (1e2-1e4, a
 * tradeoff the annealing schedule is meant to explore).
 */

use roster_models::{Assignment, OperativeWorkplace};

use crate::oracle::ConstraintOracle;

pub const WEIGHT_DUPLICATE_SECTOR: f64 = 1e6;
pub const WEIGHT_UNCOVERED_REQUIREMENT: f64 = 1e4;
pub const WEIGHT_SECTOR_CHANGE_WITHOUT_BREAK: f64 = 1e5;
pub const WEIGHT_SHORT_BLOCK: f64 = 1e3;
pub const WEIGHT_LONG_BLOCK: f64 = 1e2;
pub const WEIGHT_STABILITY_REWARD_PER_PAIR: f64 = -50.0;
pub const WEIGHT_ELIGIBILITY_VIOLATION: f64 = 1e6;
pub const WEIGHT_START_TIME_VIOLATION: f64 = 1e6;
pub const WEIGHT_FLAG_S_VIOLATION: f64 = 1e6;
pub const WEIGHT_SS_AND_SUP: f64 = 5e5;
pub const WEIGHT_SS_WORKING: f64 = 1e2;
pub const WEIGHT_UTILIZATION_REWARD: f64 = -2000.0;

const MIN_STABLE_BLOCK: usize = 2;
const MAX_WORK_BLOCK: usize = 4;

/// Computes the scalar energy of an `Assignment` against a `DomainModel`
/// (via `ConstraintOracle`). Stateless and idempotent: scoring the same
/// `Assignment` twice always yields the same value (§8 property 6).
pub struct EnergyFunction<'a> {
    oracle: &'a ConstraintOracle<'a>,
}

impl<'a> EnergyFunction<'a> {
    pub fn new(oracle: &'a ConstraintOracle<'a>) -> Self {
        Self { oracle }
    }

    pub fn score(&self, assignment: &Assignment) -> f64 {
        let domain = self.oracle.domain();
        let mut energy = 0.0;

        for slot in 0..assignment.num_slots() {
            energy += self.score_slot(assignment, slot);
        }
        for controller in 0..assignment.num_controllers() {
            energy += self.score_controller_blocks(assignment, controller);
            energy += self.score_utilization_between_flag_s(assignment, controller);
        }
        energy += self.workload_balance_penalty(assignment);

        let _ = domain;
        energy
    }

    fn score_slot(&self, assignment: &Assignment, slot: usize) -> f64 {
        let domain = self.oracle.domain();
        let mut energy = 0.0;
        let mut seen = std::collections::HashSet::new();
        let mut covered = std::collections::HashSet::new();

        for (controller, cell) in assignment.working_in_slot(slot) {
            let sp = cell.sector_position().expect("working cell has a sector");
            if !seen.insert(sp) {
                energy += WEIGHT_DUPLICATE_SECTOR;
            }
            covered.insert(sp);

            if !self.oracle.is_eligible(controller, slot) {
                energy += WEIGHT_ELIGIBILITY_VIOLATION;
            }
            let t = domain.slot(slot);
            if t.start < domain.controller(controller).shift_start {
                energy += WEIGHT_START_TIME_VIOLATION;
            }
            if self.oracle.has_flag_s(controller, slot) {
                energy += WEIGHT_FLAG_S_VIOLATION;
            }
            if domain.controller(controller).workplace == OperativeWorkplace::Ss {
                energy += WEIGHT_SS_WORKING;
            }
        }

        let required = domain.requirement(slot);
        let uncovered = required.iter().filter(|sp| !covered.contains(sp)).count();
        energy += uncovered as f64 * WEIGHT_UNCOVERED_REQUIREMENT;

        if self.oracle.ss_and_sup_both_working(assignment, slot) {
            energy += WEIGHT_SS_AND_SUP;
        }

        energy
    }

    /// Walks one controller's timeline scoring sector-continuity and
    /// block-length penalties/rewards over every maximal non-break run.
    fn score_controller_blocks(&self, assignment: &Assignment, controller: usize) -> f64 {
        let mut energy = 0.0;
        let mut previous_base = None;
        let mut run_length = 0usize;

        let flush_run = |run_length: usize, energy: &mut f64| {
            if run_length == 0 {
                return;
            }
            if run_length < MIN_STABLE_BLOCK {
                *energy += WEIGHT_SHORT_BLOCK;
            } else {
                *energy += WEIGHT_STABILITY_REWARD_PER_PAIR * (run_length / 2) as f64;
            }
            if run_length > MAX_WORK_BLOCK {
                *energy += (run_length - MAX_WORK_BLOCK) as f64 * WEIGHT_LONG_BLOCK;
            }
        };

        for slot in 0..assignment.num_slots() {
            let cell = assignment.get(controller, slot);
            match cell.sector_base() {
                Some(base) => {
                    if previous_base == Some(base) || previous_base.is_none() {
                        run_length += 1;
                    } else {
                        energy += WEIGHT_SECTOR_CHANGE_WITHOUT_BREAK;
                        flush_run(run_length, &mut energy);
                        run_length = 1;
                    }
                    previous_base = Some(base);
                }
                None => {
                    flush_run(run_length, &mut energy);
                    run_length = 0;
                    previous_base = None;
                }
            }
        }
        flush_run(run_length, &mut energy);
        energy
    }

    /// Rewards high utilization of the gaps between (and around) a
    /// controller's Flag-S windows: pre-first, each inter-window gap, and
    /// post-last.
    fn score_utilization_between_flag_s(&self, assignment: &Assignment, controller: usize) -> f64 {
        let domain = self.oracle.domain();
        let c = domain.controller(controller);
        if c.flag_s_intervals.is_empty() {
            return 0.0;
        }

        let mut gap_bounds: Vec<(usize, usize)> = Vec::new();
        let slot_index_at = |instant: chrono::DateTime<chrono::Utc>| -> usize {
            domain
                .slots()
                .iter()
                .position(|slot| slot.start >= instant)
                .unwrap_or(domain.num_slots())
        };

        let mut cursor = 0usize;
        for window in &c.flag_s_intervals {
            let window_start_slot = slot_index_at(window.start);
            if window_start_slot > cursor {
                gap_bounds.push((cursor, window_start_slot));
            }
            cursor = slot_index_at(window.end).max(window_start_slot);
        }
        if cursor < domain.num_slots() {
            gap_bounds.push((cursor, domain.num_slots()));
        }

        let mut energy = 0.0;
        for (start, end) in gap_bounds {
            if end <= start {
                continue;
            }
            let total = end - start;
            let working = (start..end)
                .filter(|&t| !assignment.get(controller, t).is_break())
                .count();
            let utilization = working as f64 / total as f64;
            energy += WEIGHT_UTILIZATION_REWARD * utilization;
        }
        energy
    }

    /// `sqrt(var(workload))` across controllers.
    fn workload_balance_penalty(&self, assignment: &Assignment) -> f64 {
        let n = assignment.num_controllers();
        if n == 0 {
            return 0.0;
        }
        let workloads: Vec<f64> = (0..n).map(|c| assignment.workload(c) as f64).collect();
        let mean = workloads.iter().sum::<f64>() / n as f64;
        let variance = workloads.iter().map(|w| (w - mean).powi(2)).sum::<f64>() / n as f64;
        variance.sqrt()
    }
}
