// [libs/infra/roster-service/src/response.rs]
//! `OptimizationResponse` (§6): the outer envelope `RosterService` returns.
//! The optimizer never throws across its own boundary (§7); this crate adds
//! the one layer above it that can still fail before reaching the
//! optimizer at all (a missing shift, an unreadable CSV file), and encodes
//! that failure the same way: empty result lists, `SolutionStatus::Error`.
//!
//! `NonOptimizedResults` is always produced by running `CpScheduleOptimizer`
//! (InitialBuilder + RepairPasses, no search) alongside whichever optimizer
//! the request actually asked for, giving a baseline-vs-optimized comparison
//! independent of which backend was selected. `AllResults` is the
//! concatenation of the two partitions (§6).

use std::collections::HashMap;

use roster_models::RosterError;
use roster_optimizer::{OptimizedResult, OptimizedResults, SolutionStatus, Statistics};

use crate::error_class::ErrorClass;

pub struct OptimizationResponse {
    pub results: OptimizedResults,
    pub non_optimized_results: Vec<OptimizedResult>,
    pub all_results: Vec<OptimizedResult>,
    /// `Some` only when the failure happened before the optimizer ran, i.e.
    /// ingestion or domain construction, not the search itself.
    pub error_class: Option<ErrorClass>,
}

impl OptimizationResponse {
    pub(crate) fn from_input_error(err: &RosterError) -> Self {
        tracing::warn!(%err, "optimization request failed before the optimizer ran");
        Self {
            results: OptimizedResults {
                optimized_results: Vec::new(),
                statistics: Statistics {
                    solution_status: SolutionStatus::Error,
                    success_rate: 0.0,
                    slots_with_shortage: 0,
                    slots_with_excess: 0,
                    workload_gap_hours: 0.0,
                    break_compliance: 0.0,
                    rotation_compliance: 0.0,
                    under_utilized_controllers: 0,
                    missing_executor_peak: 0,
                    invariant_one_relaxed: false,
                },
                slot_shortages: HashMap::new(),
                configuration_labels: HashMap::new(),
                initial_assignments: Vec::new(),
            },
            non_optimized_results: Vec::new(),
            all_results: Vec::new(),
            error_class: Some(ErrorClass::from(err)),
        }
    }

    pub(crate) fn from_results(results: OptimizedResults, non_optimized_results: Vec<OptimizedResult>) -> Self {
        let all_results = results
            .optimized_results
            .iter()
            .cloned()
            .chain(non_optimized_results.iter().cloned())
            .collect();
        Self { results, non_optimized_results, all_results, error_class: None }
    }
}
