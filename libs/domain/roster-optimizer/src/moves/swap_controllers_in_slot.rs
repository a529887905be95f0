// [libs/domain/roster-optimizer/src/moves/swap_controllers_in_slot.rs]
//! Move 1 (§4.4.1): pick a random slot, pick two distinct working
//! controllers both eligible at that slot, exchange their cell values.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use roster_models::Assignment;

use crate::oracle::ConstraintOracle;

pub fn propose(assignment: &Assignment, oracle: &ConstraintOracle, rng: &mut StdRng) -> Option<Assignment> {
    let num_slots = assignment.num_slots();
    if num_slots == 0 {
        return None;
    }
    let slot = rng.gen_range(0..num_slots);

    let mut working: Vec<usize> = assignment
        .working_in_slot(slot)
        .map(|(c, _)| c)
        .filter(|&c| oracle.is_eligible(c, slot))
        .collect();
    if working.len() < 2 {
        return None;
    }
    working.shuffle(rng);
    let (c1, c2) = (working[0], working[1]);

    let mut candidate = assignment.clone();
    let cell1 = assignment.get(c1, slot);
    let cell2 = assignment.get(c2, slot);
    candidate.set(c1, slot, cell2);
    candidate.set(c2, slot, cell1);
    Some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_models::{Cell, ConfigurationRow, DomainModel, Position, ScheduleRow, SectorBaseId, SectorPosition, SlotBuilder};
    use chrono::{TimeZone, Utc};

    #[test]
    fn exchanges_two_working_controllers() {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap();
        let slots = SlotBuilder::build(start, start + chrono::Duration::minutes(30), 30);
        let row = |id: &str| ScheduleRow {
            sifra: id.into(),
            prezime_ime: id.into(),
            smena: "J".into(),
            orm: "regular".into(),
            redosled: 1,
            par: None,
            datum: start,
            vreme_start: start,
            datum_od: start,
            datum_do: start,
            sektor: None,
            flag: None,
        };
        let rows = vec![row("C1"), row("C2")];
        let domain = DomainModel::build(&rows, &Vec::<ConfigurationRow>::new(), slots).unwrap();
        let oracle = ConstraintOracle::new(&domain);

        let mut assignment = Assignment::new(2, 1);
        let sp_a = SectorPosition { base: SectorBaseId(0), position: Position::Executive };
        let sp_b = SectorPosition { base: SectorBaseId(1), position: Position::Executive };
        assignment.set(0, 0, Cell::from(sp_a));
        assignment.set(1, 0, Cell::from(sp_b));

        let mut rng = rand::SeedableRng::seed_from_u64(1);
        let candidate = propose(&assignment, &oracle, &mut rng).unwrap();
        assert_eq!(candidate.get(0, 0).sector_position(), Some(sp_b));
        assert_eq!(candidate.get(1, 0).sector_position(), Some(sp_a));
    }
}
