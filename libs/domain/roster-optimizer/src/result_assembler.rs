// [libs/domain/roster-optimizer/src/result_assembler.rs]
/*!
 * APARATO: RESULT ASSEMBLER (ESTRATO L2)
 * RESPONSABILIDAD: PROYECCIÓN FINAL Y ESTADÍSTICAS (§4.8)
 *
 * Consumes the immutable, post-repair `Assignment` and produces the
 * response payload. Nothing here mutates the Assignment further; its
 * lifecycle ends the moment it reaches this module (§3 Lifecycle).
 */

use std::collections::HashMap;

use roster_models::{Assignment, DomainModel, Position, ScheduleRow};
use serde::Serialize;

use crate::oracle::ConstraintOracle;

const BREAK_COMPLIANCE_TARGET: f64 = 0.25;
const ROTATION_COMPLIANCE_LOW: f64 = 0.40;
const ROTATION_COMPLIANCE_HIGH: f64 = 0.60;
const UNDER_UTILIZATION_THRESHOLD: f64 = 0.50;

#[derive(Debug, Clone, Serialize)]
pub enum SolutionStatus {
    Optimal,
    Feasible,
    Error,
}

/// One record per `(controller, slot)` within that controller's shift
/// window; break cells emit a record with `sector: None`.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizedResult {
    pub controller_id: String,
    pub slot_key: String,
    pub sector: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Statistics {
    pub solution_status: SolutionStatus,
    /// covered / required across all slots.
    pub success_rate: f64,
    pub slots_with_shortage: usize,
    pub slots_with_excess: usize,
    pub workload_gap_hours: f64,
    /// actual-rest-% / target 25%.
    pub break_compliance: f64,
    /// Fraction of (working) controllers whose Executive time is 40-60% of
    /// their total workload.
    pub rotation_compliance: f64,
    pub under_utilized_controllers: usize,
    /// Largest number of uncovered Executive positions in any single slot.
    pub missing_executor_peak: usize,
    /// §7 `RepairGiveUp`: `EnsureAllControllersAssigned` had to violate
    /// Invariant 1 for at least one controller.
    pub invariant_one_relaxed: bool,
}

pub struct OptimizedResults {
    pub optimized_results: Vec<OptimizedResult>,
    pub statistics: Statistics,
    pub slot_shortages: HashMap<String, usize>,
    pub configuration_labels: HashMap<String, String>,
    /// Verbatim projection of the `initialSchedule` input rows, unrelated to
    /// the search result (§4.8 `InitialAssignments`).
    pub initial_assignments: Vec<ScheduleRow>,
}

pub struct ResultAssembler;

impl ResultAssembler {
    pub fn assemble(domain: &DomainModel, assignment: &Assignment, invariant_one_relaxed: bool) -> OptimizedResults {
        let oracle = ConstraintOracle::new(domain);
        let optimized_results = Self::project_results(domain, assignment, &oracle);
        let slot_shortages = Self::slot_shortages(domain, assignment);
        let configuration_labels = Self::configuration_labels(domain);
        let statistics = Self::statistics(domain, assignment, &slot_shortages, invariant_one_relaxed);
        let initial_assignments = domain.schedule_rows().to_vec();

        OptimizedResults {
            optimized_results,
            statistics,
            slot_shortages,
            configuration_labels,
            initial_assignments,
        }
    }

    /// One record per `(controller, slot)` where `slot` is within that
    /// controller's shift window (§4.8); slots before `VremeStart` or past
    /// an `M`-shift's end-of-shift cutoff are not emitted at all.
    fn project_results(domain: &DomainModel, assignment: &Assignment, oracle: &ConstraintOracle) -> Vec<OptimizedResult> {
        let interner = domain.interner();
        let mut results = Vec::new();
        for controller in 0..assignment.num_controllers() {
            let controller_id = domain.controller(controller).id.clone();
            for slot in 0..assignment.num_slots() {
                if !oracle.is_eligible(controller, slot) {
                    continue;
                }
                let slot_key = domain.slot(slot).key();
                let sector = assignment
                    .get(controller, slot)
                    .sector_position()
                    .map(|sp| interner.format_sector_position(sp));
                results.push(OptimizedResult { controller_id: controller_id.clone(), slot_key, sector });
            }
        }
        results
    }

    fn slot_shortages(domain: &DomainModel, assignment: &Assignment) -> HashMap<String, usize> {
        let mut shortages = HashMap::new();
        for slot in 0..assignment.num_slots() {
            let covered: std::collections::HashSet<_> = assignment
                .working_in_slot(slot)
                .filter_map(|(_, cell)| cell.sector_position())
                .collect();
            let uncovered = domain.requirement(slot).iter().filter(|sp| !covered.contains(sp)).count();
            if uncovered > 0 {
                shortages.insert(domain.slot(slot).key(), uncovered);
            }
        }
        shortages
    }

    fn configuration_labels(domain: &DomainModel) -> HashMap<String, String> {
        (0..domain.num_slots())
            .map(|slot| (domain.slot(slot).key(), domain.configuration_label(slot).to_string()))
            .collect()
    }

    fn statistics(
        domain: &DomainModel,
        assignment: &Assignment,
        slot_shortages: &HashMap<String, usize>,
        invariant_one_relaxed: bool,
    ) -> Statistics {
        let mut required_total = 0usize;
        let mut covered_total = 0usize;
        let mut slots_with_excess = 0usize;
        let mut missing_executor_peak = 0usize;

        for slot in 0..assignment.num_slots() {
            let required = domain.requirement(slot);
            let covered: std::collections::HashSet<_> = assignment
                .working_in_slot(slot)
                .filter_map(|(_, cell)| cell.sector_position())
                .collect();
            required_total += required.len();
            covered_total += required.iter().filter(|sp| covered.contains(sp)).count();

            let excess = covered.len().saturating_sub(required.len());
            if excess > 0 {
                slots_with_excess += 1;
            }
            let missing_executors = required
                .iter()
                .filter(|sp| sp.position == Position::Executive && !covered.contains(sp))
                .count();
            missing_executor_peak = missing_executor_peak.max(missing_executors);
        }

        let success_rate = if required_total == 0 { 1.0 } else { covered_total as f64 / required_total as f64 };
        let solution_status = if slot_shortages.is_empty() {
            SolutionStatus::Optimal
        } else {
            SolutionStatus::Feasible
        };

        let workloads: Vec<usize> = (0..assignment.num_controllers()).map(|c| assignment.workload(c)).collect();
        let slot_hours = if assignment.num_slots() == 0 {
            0.0
        } else {
            let slot = domain.slot(0);
            (slot.end - slot.start).num_seconds() as f64 / 3600.0
        };
        let workload_gap_hours = match (workloads.iter().max(), workloads.iter().min()) {
            (Some(&max), Some(&min)) => (max - min) as f64 * slot_hours,
            _ => 0.0,
        };

        let total_cells = (assignment.num_controllers() * assignment.num_slots()).max(1);
        let break_cells = (0..assignment.num_controllers())
            .map(|c| assignment.num_slots() - assignment.workload(c))
            .sum::<usize>();
        let actual_rest_percentage = break_cells as f64 / total_cells as f64;
        let break_compliance = actual_rest_percentage / BREAK_COMPLIANCE_TARGET;

        let mut rotation_compliant = 0usize;
        let mut rotation_eligible = 0usize;
        let mut under_utilized_controllers = 0usize;
        for controller in 0..assignment.num_controllers() {
            let workload = assignment.workload(controller);
            if workload == 0 {
                continue;
            }
            rotation_eligible += 1;
            let executive_time = (0..assignment.num_slots())
                .filter(|&t| assignment.get(controller, t).sector_position().map(|sp| sp.position) == Some(Position::Executive))
                .count();
            let executive_share = executive_time as f64 / workload as f64;
            if (ROTATION_COMPLIANCE_LOW..=ROTATION_COMPLIANCE_HIGH).contains(&executive_share) {
                rotation_compliant += 1;
            }
            if (workload as f64 / assignment.num_slots().max(1) as f64) < UNDER_UTILIZATION_THRESHOLD {
                under_utilized_controllers += 1;
            }
        }
        let rotation_compliance = if rotation_eligible == 0 { 1.0 } else { rotation_compliant as f64 / rotation_eligible as f64 };

        Statistics {
            solution_status,
            success_rate,
            slots_with_shortage: slot_shortages.len(),
            slots_with_excess,
            workload_gap_hours,
            break_compliance,
            rotation_compliance,
            under_utilized_controllers,
            missing_executor_peak,
            invariant_one_relaxed,
        }
    }
}
