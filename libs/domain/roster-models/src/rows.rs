// [libs/domain/roster-models/src/rows.rs]
//! Tabular row shapes matching the `configurations` and `initialSchedule`
//! inputs in §6 of the specification. These are the wire-shape DTOs a
//! `DataSource` implementation (see `roster-ingest`) hands to
//! [`crate::domain_model::DomainModel::build`]; they carry the exact source
//! column names (`VremeStart`, `ORM`, …) because that is the external
//! contract, not an internal naming choice.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the `configurations` table: a time-bounded declaration that a
/// sector is active under either the `TX` or `LU` requirement family.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigurationRow {
    pub datum_od: DateTime<Utc>,
    pub datum_do: DateTime<Utc>,
    pub config_type: ConfigType,
    pub konfiguracija: String,
    pub sektor: String,
}

/// The two independent requirement families a configuration row may belong
/// to. Independent means a slot's required sectors are the union of the
/// currently active rows from *both* families, not a join between them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ConfigType {
    Tx,
    Lu,
}

impl ConfigType {
    /// Parses the `"TX"`/`"LU"` tokens used by the tabular `configurations`
    /// input (§6). Unlike `ShiftType`/`OperativeWorkplace`, there is no
    /// fallback variant: an unrecognized token is a malformed input row.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "TX" => Some(ConfigType::Tx),
            "LU" => Some(ConfigType::Lu),
            _ => None,
        }
    }
}

/// One row of the `initialSchedule` table. A controller with N Flag-S
/// windows appears as N rows sharing `sifra`/`prezime_ime`/`smena`/`orm`/
/// `vreme_start`; `datum_od`/`datum_do` and `flag` describe one interval
/// each. `redosled`, `par` and `sektor` are carried verbatim for
/// `InitialAssignments` but do not feed the optimizer's constraint model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleRow {
    pub sifra: String,
    pub prezime_ime: String,
    pub smena: String,
    pub orm: String,
    pub redosled: i64,
    pub par: Option<String>,
    pub datum: DateTime<Utc>,
    pub vreme_start: DateTime<Utc>,
    pub datum_od: DateTime<Utc>,
    pub datum_do: DateTime<Utc>,
    pub sektor: Option<String>,
    pub flag: Option<String>,
}
