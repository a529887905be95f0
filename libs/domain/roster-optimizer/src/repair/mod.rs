// [libs/domain/roster-optimizer/src/repair/mod.rs]
/*!
 * APARATO: REPAIR PASSES (ESTRATO L2)
 * RESPONSABILIDAD: CORRECCIONES DETERMINISTAS POST-RECOCIDO (§4.7)
 *
 * Passes run in a fixed, contractual order (§9 open question: the ordering
 * of `MaximizeUtilizationBetweenFlagSPeriods` relative to the other passes
 * is deliberate and must be preserved). Slot/controller iteration within
 * every pass is strictly left-to-right; no randomness is involved here.
 */

mod enforce_break_rules;
mod ensure_all_controllers_assigned;
mod fix_flag_s_violations;
mod fix_sector_continuity_violations;
mod fix_sector_repetitions;
mod fix_ss_sup_violations;
mod fix_vreme_start_violations;
mod maximize_utilization_between_flag_s;

use roster_models::Assignment;
use tracing::instrument;

use crate::oracle::ConstraintOracle;

/// The quick, two-pass cleanup `AnnealingEngine` runs on every candidate
/// before scoring (§4.6), kept separate from the full post-search sequence.
pub fn fix_sector_repetitions(assignment: Assignment, oracle: &ConstraintOracle) -> Assignment {
    fix_sector_repetitions::run(assignment, oracle)
}

pub fn fix_flag_s_violations(assignment: Assignment, oracle: &ConstraintOracle) -> Assignment {
    fix_flag_s_violations::run(assignment, oracle)
}

pub struct RepairOutcome {
    pub assignment: Assignment,
    /// Set if `EnsureAllControllersAssigned` had to fall back to its
    /// last-resort, Invariant-1-violating placement for at least one
    /// controller (§7 `RepairGiveUp`).
    pub invariant_one_relaxed: bool,
}

/// Runs the full post-annealing repair sequence (§4.7, steps 1-6) in order.
#[instrument(skip(assignment, oracle), fields(controllers = oracle.domain().num_controllers(), slots = oracle.domain().num_slots()))]
pub fn run_all(assignment: Assignment, oracle: &ConstraintOracle) -> RepairOutcome {
    let assignment = fix_sector_repetitions::run(assignment, oracle);
    let assignment = fix_ss_sup_violations::run(assignment, oracle);
    let assignment = fix_sector_continuity_violations::run(assignment, oracle);

    let ensure_outcome = ensure_all_controllers_assigned::run(assignment, oracle);
    let assignment = ensure_outcome.assignment;

    let assignment = enforce_break_rules::run(assignment, oracle);
    let assignment = maximize_utilization_between_flag_s::run(assignment, oracle);

    let assignment = fix_sector_continuity_violations::run(assignment, oracle);
    let assignment = fix_vreme_start_violations::run(assignment, oracle);
    let assignment = fix_ss_sup_violations::run(assignment, oracle);
    let assignment = fix_flag_s_violations::run(assignment, oracle);

    if !fix_flag_s_violations::holds(&assignment, oracle) {
        tracing::warn!("TestFlagSRules failed after ApplyFlagSRules; this should be unreachable");
    }

    RepairOutcome {
        assignment,
        invariant_one_relaxed: ensure_outcome.invariant_one_relaxed,
    }
}
