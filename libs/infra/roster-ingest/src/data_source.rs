// [libs/infra/roster-ingest/src/data_source.rs]
//! The `DataSource` seam (§4.10, out of scope per §1): persistent storage
//! of shifts/configurations/history sits behind this trait. Only the CSV
//! reference adapter lives in this crate; a SQL- or object-storage-backed
//! implementation is a surrounding service's concern.

use chrono::{DateTime, Utc};
use roster_models::{ConfigurationRow, RosterResult, ScheduleRow};

pub trait DataSource {
    fn configurations(&self, shift: &str, date: DateTime<Utc>) -> RosterResult<Vec<ConfigurationRow>>;
    fn initial_schedule(&self, shift: &str, date: DateTime<Utc>) -> RosterResult<Vec<ScheduleRow>>;
}
