// [libs/domain/roster-models/src/domain_model.rs]
//! DomainModel (§4.1): the controller list, precomputed per-controller
//! lookups, and the slot-indexed requirement materialization. Read-only
//! once built; construction fails with `RosterError::InvalidInput` if a
//! required column is missing or the controller pool is empty.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::controller::{Controller, FlagSInterval, OperativeWorkplace, ShiftType};
use crate::error::{RosterError, RosterResult};
use crate::rows::{ConfigType, ConfigurationRow, ScheduleRow};
use crate::sector::{SectorInterner, SectorPosition};
use crate::slot::TimeSlot;

/// Read-only materialization of everything the optimizer needs to query in
/// O(1)/O(|C|): the controller list, the slot list, and `Req(t)` per slot.
#[derive(Debug, Clone)]
pub struct DomainModel {
    controllers: Vec<Controller>,
    slots: Vec<TimeSlot>,
    /// `Req(t)` for each slot, in the same order as `slots`.
    requirements: Vec<Vec<SectorPosition>>,
    /// `"TX:<code> | LU:<code>"` per slot (§4.8 ConfigurationLabels).
    configuration_labels: Vec<String>,
    interner: SectorInterner,
    /// Verbatim input rows, retained for §4.8 `InitialAssignments`.
    schedule_rows: Vec<ScheduleRow>,
}

impl DomainModel {
    pub fn build(
        schedule_rows: &[ScheduleRow],
        configuration_rows: &[ConfigurationRow],
        slots: Vec<TimeSlot>,
    ) -> RosterResult<Self> {
        if schedule_rows.is_empty() {
            return Err(RosterError::InvalidInput(
                "initialSchedule has no rows: empty controller pool".to_string(),
            ));
        }
        if slots.is_empty() {
            return Err(RosterError::InvalidInput(
                "no time slots were generated for this shift".to_string(),
            ));
        }

        let controllers = Self::build_controllers(schedule_rows)?;

        let mut interner = SectorInterner::new();
        let mut requirements = Vec::with_capacity(slots.len());
        let mut configuration_labels = Vec::with_capacity(slots.len());

        for slot in &slots {
            let (required, label) =
                Self::requirement_for_slot(slot.start, configuration_rows, &mut interner);
            requirements.push(required);
            configuration_labels.push(label);
        }

        Ok(Self {
            controllers,
            slots,
            requirements,
            configuration_labels,
            interner,
            schedule_rows: schedule_rows.to_vec(),
        })
    }

    fn build_controllers(schedule_rows: &[ScheduleRow]) -> RosterResult<Vec<Controller>> {
        let mut order: Vec<String> = Vec::new();
        let mut by_id: HashMap<String, Controller> = HashMap::new();

        for row in schedule_rows {
            if row.sifra.trim().is_empty() {
                return Err(RosterError::InvalidInput(
                    "initialSchedule row has an empty `sifra`".to_string(),
                ));
            }

            let entry = by_id.entry(row.sifra.clone()).or_insert_with(|| {
                order.push(row.sifra.clone());
                Controller {
                    id: row.sifra.clone(),
                    name: row.prezime_ime.clone(),
                    shift_type: ShiftType::parse(&row.smena),
                    shift_start: row.vreme_start,
                    workplace: OperativeWorkplace::parse(&row.orm),
                    flag_s_intervals: Vec::new(),
                }
            });

            if row.flag.as_deref().map(str::trim) == Some("S") {
                entry.flag_s_intervals.push(FlagSInterval {
                    start: row.datum_od,
                    end: row.datum_do,
                });
            }
        }

        let mut controllers: Vec<Controller> = order
            .into_iter()
            .map(|id| by_id.remove(&id).expect("just inserted"))
            .collect();

        for controller in &mut controllers {
            controller
                .flag_s_intervals
                .sort_by_key(|interval| interval.start);
        }

        Ok(controllers)
    }

    fn requirement_for_slot(
        slot_start: DateTime<Utc>,
        configuration_rows: &[ConfigurationRow],
        interner: &mut SectorInterner,
    ) -> (Vec<SectorPosition>, String) {
        let mut tx_code: Option<&str> = None;
        let mut lu_code: Option<&str> = None;
        let mut required = Vec::new();

        for row in configuration_rows {
            if slot_start < row.datum_od || slot_start >= row.datum_do {
                continue;
            }
            match row.config_type {
                ConfigType::Tx => tx_code.get_or_insert(row.konfiguracija.as_str()),
                ConfigType::Lu => lu_code.get_or_insert(row.konfiguracija.as_str()),
            };
            let base = interner.intern(&row.sektor);
            required.push(SectorPosition {
                base,
                position: crate::sector::Position::Executive,
            });
            required.push(SectorPosition {
                base,
                position: crate::sector::Position::Planner,
            });
        }

        required.sort_by_key(|sp| (sp.base, sp.position == crate::sector::Position::Planner));
        required.dedup();

        let label = format!(
            "TX:{} | LU:{}",
            tx_code.unwrap_or("-"),
            lu_code.unwrap_or("-")
        );
        (required, label)
    }

    pub fn num_controllers(&self) -> usize {
        self.controllers.len()
    }

    pub fn num_slots(&self) -> usize {
        self.slots.len()
    }

    pub fn controller(&self, index: usize) -> &Controller {
        &self.controllers[index]
    }

    pub fn controllers(&self) -> &[Controller] {
        &self.controllers
    }

    pub fn controller_index(&self, id: &str) -> Option<usize> {
        self.controllers.iter().position(|c| c.id == id)
    }

    pub fn slot(&self, index: usize) -> &TimeSlot {
        &self.slots[index]
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn requirement(&self, slot: usize) -> &[SectorPosition] {
        &self.requirements[slot]
    }

    pub fn configuration_label(&self, slot: usize) -> &str {
        &self.configuration_labels[slot]
    }

    pub fn interner(&self) -> &SectorInterner {
        &self.interner
    }

    /// Verbatim `initialSchedule` input rows (§4.8 `InitialAssignments`).
    pub fn schedule_rows(&self) -> &[ScheduleRow] {
        &self.schedule_rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, hour, minute, 0).unwrap()
    }

    #[test]
    fn rejects_an_empty_controller_pool() {
        let slots = vec![TimeSlot {
            start: ts(8, 0),
            end: ts(8, 30),
        }];
        let err = DomainModel::build(&[], &[], slots).unwrap_err();
        assert!(matches!(err, RosterError::InvalidInput(_)));
    }

    #[test]
    fn groups_rows_by_sifra_and_collects_flag_s_windows() {
        let rows = vec![
            ScheduleRow {
                sifra: "C1".into(),
                prezime_ime: "Doe, J.".into(),
                smena: "J".into(),
                orm: "regular".into(),
                redosled: 1,
                par: None,
                datum: ts(8, 0),
                vreme_start: ts(8, 0),
                datum_od: ts(9, 0),
                datum_do: ts(10, 0),
                sektor: Some("7".into()),
                flag: Some("S".into()),
            },
            ScheduleRow {
                sifra: "C1".into(),
                prezime_ime: "Doe, J.".into(),
                smena: "J".into(),
                orm: "regular".into(),
                redosled: 2,
                par: None,
                datum: ts(8, 0),
                vreme_start: ts(8, 0),
                datum_od: ts(11, 0),
                datum_do: ts(11, 30),
                sektor: None,
                flag: None,
            },
        ];
        let slots = vec![TimeSlot {
            start: ts(8, 0),
            end: ts(8, 30),
        }];
        let model = DomainModel::build(&rows, &[], slots).unwrap();
        assert_eq!(model.num_controllers(), 1);
        assert_eq!(model.controller(0).flag_s_intervals.len(), 1);
        assert!(model.controller(0).has_flag_s_at(ts(9, 30)));
        assert!(!model.controller(0).has_flag_s_at(ts(11, 0)));
    }

    #[test]
    fn requirement_is_the_union_of_active_tx_and_lu_rows() {
        let schedule = vec![ScheduleRow {
            sifra: "C1".into(),
            prezime_ime: "Doe, J.".into(),
            smena: "J".into(),
            orm: "regular".into(),
            redosled: 1,
            par: None,
            datum: ts(8, 0),
            vreme_start: ts(8, 0),
            datum_od: ts(8, 0),
            datum_do: ts(9, 0),
            sektor: None,
            flag: None,
        }];
        let configurations = vec![
            ConfigurationRow {
                datum_od: ts(8, 0),
                datum_do: ts(12, 0),
                config_type: ConfigType::Tx,
                konfiguracija: "A1".into(),
                sektor: "7".into(),
            },
            ConfigurationRow {
                datum_od: ts(8, 0),
                datum_do: ts(12, 0),
                config_type: ConfigType::Lu,
                konfiguracija: "B2".into(),
                sektor: "9".into(),
            },
        ];
        let slots = vec![TimeSlot {
            start: ts(8, 0),
            end: ts(8, 30),
        }];
        let model = DomainModel::build(&schedule, &configurations, slots).unwrap();
        assert_eq!(model.requirement(0).len(), 4);
        assert_eq!(model.configuration_label(0), "TX:A1 | LU:B2");
    }
}
