// [libs/infra/roster-ingest/src/csv_data_source.rs]
/*!
 * APARATO: CSV DATA SOURCE (ESTRATO L5)
 * RESPONSABILIDAD: ADAPTADOR DE REFERENCIA PARA LOS INSUMOS TABULARES (§6)
 *
 * Reads the `configurations` and `initialSchedule` tables from two CSV
 * files whose headers match the source column names verbatim (`datumOd`,
 * `ORM`, `VremeStart`, ...), then converts each row into the typed DTOs
 * `roster-models` exposes. Each CSV file is treated as already scoped to
 * one shift/date, the way a pre-filtered export or materialized view would
 * be; `initial_schedule` additionally filters defensively on `smena`,
 * because `configurations` carries no shift-discriminating column to
 * filter by.
 */

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use roster_models::{ConfigType, ConfigurationRow, RosterError, RosterResult, ScheduleRow};
use serde::Deserialize;
use tracing::instrument;

use crate::data_source::DataSource;

#[derive(Debug, Deserialize)]
struct RawConfigurationRow {
    #[serde(rename = "datumOd")]
    datum_od: DateTime<Utc>,
    #[serde(rename = "datumDo")]
    datum_do: DateTime<Utc>,
    #[serde(rename = "ConfigType")]
    config_type: String,
    #[serde(rename = "Konfiguracija")]
    konfiguracija: String,
    sektor: String,
}

#[derive(Debug, Deserialize)]
struct RawScheduleRow {
    sifra: String,
    #[serde(rename = "PrezimeIme")]
    prezime_ime: String,
    smena: String,
    #[serde(rename = "ORM")]
    orm: String,
    #[serde(rename = "Redosled")]
    redosled: i64,
    #[serde(rename = "Par")]
    par: Option<String>,
    #[serde(rename = "Datum")]
    datum: DateTime<Utc>,
    #[serde(rename = "VremeStart")]
    vreme_start: DateTime<Utc>,
    #[serde(rename = "datumOd")]
    datum_od: DateTime<Utc>,
    #[serde(rename = "datumDo")]
    datum_do: DateTime<Utc>,
    sektor: Option<String>,
    #[serde(rename = "Flag")]
    flag: Option<String>,
}

/// The reference `DataSource` implementation: two flat CSV files on disk.
pub struct CsvDataSource {
    configurations_path: PathBuf,
    schedule_path: PathBuf,
}

impl CsvDataSource {
    pub fn new(configurations_path: impl AsRef<Path>, schedule_path: impl AsRef<Path>) -> Self {
        Self {
            configurations_path: configurations_path.as_ref().to_path_buf(),
            schedule_path: schedule_path.as_ref().to_path_buf(),
        }
    }
}

impl DataSource for CsvDataSource {
    #[instrument(skip(self), fields(path = %self.configurations_path.display()))]
    fn configurations(&self, _shift: &str, _date: DateTime<Utc>) -> RosterResult<Vec<ConfigurationRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.configurations_path)
            .map_err(|err| RosterError::InvalidInput(format!("cannot open configurations CSV: {err}")))?;

        let mut rows = Vec::new();
        for record in reader.deserialize::<RawConfigurationRow>() {
            let raw = record.map_err(|err| RosterError::InvalidInput(format!("malformed configurations row: {err}")))?;
            let config_type = ConfigType::parse(&raw.config_type).ok_or_else(|| {
                RosterError::InvalidInput(format!("unrecognized ConfigType {:?}", raw.config_type))
            })?;
            rows.push(ConfigurationRow {
                datum_od: raw.datum_od,
                datum_do: raw.datum_do,
                config_type,
                konfiguracija: raw.konfiguracija,
                sektor: raw.sektor,
            });
        }
        tracing::debug!(rows = rows.len(), "read configurations CSV");
        Ok(rows)
    }

    #[instrument(skip(self), fields(path = %self.schedule_path.display()))]
    fn initial_schedule(&self, shift: &str, _date: DateTime<Utc>) -> RosterResult<Vec<ScheduleRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.schedule_path)
            .map_err(|err| RosterError::InvalidInput(format!("cannot open initialSchedule CSV: {err}")))?;

        let mut rows = Vec::new();
        for record in reader.deserialize::<RawScheduleRow>() {
            let raw = record.map_err(|err| RosterError::InvalidInput(format!("malformed initialSchedule row: {err}")))?;
            if raw.smena != shift {
                continue;
            }
            rows.push(ScheduleRow {
                sifra: raw.sifra,
                prezime_ime: raw.prezime_ime,
                smena: raw.smena,
                orm: raw.orm,
                redosled: raw.redosled,
                par: raw.par,
                datum: raw.datum,
                vreme_start: raw.vreme_start,
                datum_od: raw.datum_od,
                datum_do: raw.datum_do,
                sektor: raw.sektor,
                flag: raw.flag,
            });
        }
        tracing::debug!(rows = rows.len(), %shift, "read initialSchedule CSV");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_and_converts_both_tables() {
        let mut configurations_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(configurations_file, "datumOd,datumDo,ConfigType,Konfiguracija,sektor").unwrap();
        writeln!(
            configurations_file,
            "2026-01-01T08:00:00Z,2026-01-01T10:00:00Z,TX,A1,7"
        )
        .unwrap();

        let mut schedule_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            schedule_file,
            "sifra,PrezimeIme,smena,ORM,Redosled,Par,Datum,VremeStart,datumOd,datumDo,sektor,Flag"
        )
        .unwrap();
        writeln!(
            schedule_file,
            "C1,\"Doe, J.\",J,regular,1,,2026-01-01T08:00:00Z,2026-01-01T08:00:00Z,2026-01-01T08:00:00Z,2026-01-01T08:00:00Z,,"
        )
        .unwrap();

        let source = CsvDataSource::new(configurations_file.path(), schedule_file.path());
        let date = DateTime::parse_from_rfc3339("2026-01-01T08:00:00Z").unwrap().with_timezone(&Utc);

        let configurations = source.configurations("J", date).unwrap();
        assert_eq!(configurations.len(), 1);
        assert_eq!(configurations[0].config_type, ConfigType::Tx);

        let schedule = source.initial_schedule("J", date).unwrap();
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].sifra, "C1");
    }
}
