// [libs/domain/roster-optimizer/src/repair/fix_flag_s_violations.rs]
//! `ApplyFlagSRules` / `FixFlagSViolations` (§4.7.6, §4.6): force every cell
//! under a Flag-S restriction back to break. Idempotent: re-running on an
//! already-compliant Assignment is a no-op.

use roster_models::{Assignment, Cell};

use crate::oracle::ConstraintOracle;

pub fn run(mut assignment: Assignment, oracle: &ConstraintOracle) -> Assignment {
    for controller in 0..assignment.num_controllers() {
        for slot in 0..assignment.num_slots() {
            if oracle.has_flag_s(controller, slot) && !assignment.get(controller, slot).is_break() {
                assignment.set(controller, slot, Cell::Break);
            }
        }
    }
    assignment
}

/// `TestFlagSRules`: verifies property 3 (§8) holds over the whole grid.
pub fn holds(assignment: &Assignment, oracle: &ConstraintOracle) -> bool {
    for controller in 0..assignment.num_controllers() {
        for slot in 0..assignment.num_slots() {
            if oracle.has_flag_s(controller, slot) && !assignment.get(controller, slot).is_break() {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use roster_models::{ConfigurationRow, DomainModel, Position, ScheduleRow, SectorBaseId, SectorPosition, SlotBuilder};

    #[test]
    fn forces_break_under_a_flag_s_window() {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap();
        let slots = SlotBuilder::build(start, start + chrono::Duration::minutes(30), 30);
        let row = ScheduleRow {
            sifra: "C1".into(),
            prezime_ime: "C1".into(),
            smena: "J".into(),
            orm: "regular".into(),
            redosled: 1,
            par: None,
            datum: start,
            vreme_start: start,
            datum_od: start,
            datum_do: start + chrono::Duration::minutes(30),
            sektor: None,
            flag: Some("S".into()),
        };
        let domain = DomainModel::build(&[row], &Vec::<ConfigurationRow>::new(), slots).unwrap();
        let oracle = ConstraintOracle::new(&domain);

        let mut assignment = Assignment::new(1, 1);
        let sp = SectorPosition { base: SectorBaseId(0), position: Position::Executive };
        assignment.set(0, 0, Cell::from(sp));

        let repaired = run(assignment, &oracle);
        assert!(repaired.get(0, 0).is_break());
        assert!(holds(&repaired, &oracle));
    }
}
