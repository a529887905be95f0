// [libs/infra/roster-service/src/service.rs]
/*!
 * APARATO: ROSTER SERVICE (ESTRATO L4)
 * RESPONSABILIDAD: ENSAMBLAJE DataSource -> SlotBuilder -> DomainModel ->
 * ScheduleOptimizer (§4.10)
 *
 * No HTTP or session layer lives here; this is the seam a web handler
 * would sit behind, taking one request struct and returning one response
 * envelope, with every failure encoded rather than thrown.
 */

use chrono::{DateTime, Utc};
use roster_ingest::DataSource;
use roster_models::{DomainModel, SlotBuilder};
use roster_optimizer::{CpScheduleOptimizer, OptimizationRequest, ScheduleOptimizer};
use tracing::instrument;

use crate::response::OptimizationResponse;

/// One call into the service: the shift/date to fetch inputs for, the slot
/// grid to build, and the optimizer's own request fields (§6).
pub struct RunOptimizationRequest {
    pub shift: String,
    pub date: DateTime<Utc>,
    pub shift_start: DateTime<Utc>,
    pub shift_end: DateTime<Utc>,
    pub slot_duration_minutes: i64,
    pub optimization: OptimizationRequest,
}

pub trait RosterService {
    fn run_optimization(&self, request: RunOptimizationRequest) -> OptimizationResponse;
}

/// The in-process implementation: one `DataSource` and one
/// `ScheduleOptimizer`, wired together with no I/O of its own beyond what
/// the `DataSource` performs.
pub struct InProcessRosterService<D, O> {
    data_source: D,
    optimizer: O,
}

impl<D, O> InProcessRosterService<D, O>
where
    D: DataSource,
    O: ScheduleOptimizer,
{
    pub fn new(data_source: D, optimizer: O) -> Self {
        Self { data_source, optimizer }
    }
}

impl<D, O> RosterService for InProcessRosterService<D, O>
where
    D: DataSource,
    O: ScheduleOptimizer,
{
    #[instrument(skip(self, request), fields(shift = %request.shift))]
    fn run_optimization(&self, request: RunOptimizationRequest) -> OptimizationResponse {
        let slots = SlotBuilder::build(request.shift_start, request.shift_end, request.slot_duration_minutes);

        let configurations = match self.data_source.configurations(&request.shift, request.date) {
            Ok(rows) => rows,
            Err(err) => return OptimizationResponse::from_input_error(&err),
        };
        let schedule_rows = match self.data_source.initial_schedule(&request.shift, request.date) {
            Ok(rows) => rows,
            Err(err) => return OptimizationResponse::from_input_error(&err),
        };

        let domain = match DomainModel::build(&schedule_rows, &configurations, slots) {
            Ok(domain) => domain,
            Err(err) => return OptimizationResponse::from_input_error(&err),
        };

        tracing::info!(controllers = domain.num_controllers(), slots = domain.num_slots(), "running optimization");
        let results = self.optimizer.optimize(&domain, &request.optimization);
        let non_optimized_results = CpScheduleOptimizer.optimize(&domain, &request.optimization).optimized_results;
        OptimizationResponse::from_results(results, non_optimized_results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use roster_ingest::CsvDataSource;
    use roster_optimizer::CpScheduleOptimizer;
    use std::io::Write;

    #[test]
    fn surfaces_an_error_class_when_the_csv_files_are_missing() {
        let service = InProcessRosterService::new(
            CsvDataSource::new("/nonexistent/configurations.csv", "/nonexistent/schedule.csv"),
            CpScheduleOptimizer,
        );
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap();
        let response = service.run_optimization(RunOptimizationRequest {
            shift: "J".into(),
            date: start,
            shift_start: start,
            shift_end: start + chrono::Duration::hours(2),
            slot_duration_minutes: 30,
            optimization: OptimizationRequest::default(),
        });
        assert!(response.error_class.is_some());
        assert!(response.results.optimized_results.is_empty());
        assert!(response.non_optimized_results.is_empty());
        assert!(response.all_results.is_empty());
    }

    #[test]
    fn runs_the_full_pipeline_against_csv_fixtures() {
        let mut configurations_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(configurations_file, "datumOd,datumDo,ConfigType,Konfiguracija,sektor").unwrap();
        writeln!(configurations_file, "2026-01-01T08:00:00Z,2026-01-01T10:00:00Z,TX,A1,7").unwrap();

        let mut schedule_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            schedule_file,
            "sifra,PrezimeIme,smena,ORM,Redosled,Par,Datum,VremeStart,datumOd,datumDo,sektor,Flag"
        )
        .unwrap();
        writeln!(
            schedule_file,
            "C1,C1,J,regular,1,,2026-01-01T08:00:00Z,2026-01-01T08:00:00Z,2026-01-01T08:00:00Z,2026-01-01T08:00:00Z,,"
        )
        .unwrap();
        writeln!(
            schedule_file,
            "C2,C2,J,regular,1,,2026-01-01T08:00:00Z,2026-01-01T08:00:00Z,2026-01-01T08:00:00Z,2026-01-01T08:00:00Z,,"
        )
        .unwrap();

        let service = InProcessRosterService::new(
            CsvDataSource::new(configurations_file.path(), schedule_file.path()),
            CpScheduleOptimizer,
        );
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap();
        let response = service.run_optimization(RunOptimizationRequest {
            shift: "J".into(),
            date: start,
            shift_start: start,
            shift_end: start + chrono::Duration::hours(1),
            slot_duration_minutes: 30,
            optimization: OptimizationRequest { random_seed: Some(1), ..Default::default() },
        });
        assert!(response.error_class.is_none());
        assert!(!response.results.optimized_results.is_empty());
        assert!(!response.non_optimized_results.is_empty());
        assert_eq!(
            response.all_results.len(),
            response.results.optimized_results.len() + response.non_optimized_results.len()
        );
        assert_eq!(response.results.initial_assignments.len(), 2, "one row per input controller");
    }
}
