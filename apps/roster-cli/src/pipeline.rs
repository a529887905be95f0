// [apps/roster-cli/src/pipeline.rs]
/*!
 * APARATO: ROSTER CLI PIPELINE (ESTRATO L6)
 * RESPONSABILIDAD: INVOCACIÓN DE RosterService CONTRA FIXTURES CSV
 *
 * Thin orchestrator: resolve settings, build the CSV `DataSource`, run one
 * optimization, serialize the response. No algorithmic logic lives here —
 * that is `roster-optimizer`'s job.
 */

use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use roster_ingest::CsvDataSource;
use roster_optimizer::{AnnealingScheduleOptimizer, CpScheduleOptimizer, OptimizationRequest};
use roster_service::{InProcessRosterService, OptimizationResponse, RosterService, RunOptimizationRequest};
use serde::Serialize;
use tracing::instrument;

use crate::settings::OptimizationSettings;

pub struct PipelineArguments {
    pub configurations_path: PathBuf,
    pub schedule_path: PathBuf,
    pub shift: String,
    pub date: DateTime<Utc>,
    pub shift_start: DateTime<Utc>,
    pub shift_end: DateTime<Utc>,
    pub settings: OptimizationSettings,
    pub max_exec_seconds: u64,
    pub random_seed: Option<u64>,
    pub use_cp_backend: bool,
}

#[derive(Debug, Serialize)]
pub struct PipelineReport {
    pub error_class: Option<String>,
    pub solution_status: String,
    pub success_rate: f64,
    pub slots_with_shortage: usize,
    pub invariant_one_relaxed: bool,
}

#[instrument(skip(arguments), fields(shift = %arguments.shift))]
pub fn run_pipeline(arguments: PipelineArguments) -> Result<PipelineReport> {
    let data_source = CsvDataSource::new(&arguments.configurations_path, &arguments.schedule_path);
    let optimization = OptimizationRequest {
        max_exec_seconds: arguments.max_exec_seconds,
        random_seed: arguments.random_seed,
        use_simulated_annealing: !arguments.use_cp_backend,
    };

    let request = RunOptimizationRequest {
        shift: arguments.shift,
        date: arguments.date,
        shift_start: arguments.shift_start,
        shift_end: arguments.shift_end,
        slot_duration_minutes: arguments.settings.slot_duration_minutes as i64,
        optimization,
    };

    let response = if arguments.use_cp_backend {
        InProcessRosterService::new(data_source, CpScheduleOptimizer).run_optimization(request)
    } else {
        InProcessRosterService::new(data_source, AnnealingScheduleOptimizer).run_optimization(request)
    };

    Ok(summarize(response))
}

fn summarize(response: OptimizationResponse) -> PipelineReport {
    let solution_status = format!("{:?}", response.results.statistics.solution_status);
    PipelineReport {
        error_class: response.error_class.map(|class| format!("{class:?}")),
        solution_status,
        success_rate: response.results.statistics.success_rate,
        slots_with_shortage: response.results.statistics.slots_with_shortage,
        invariant_one_relaxed: response.results.statistics.invariant_one_relaxed,
    }
}
