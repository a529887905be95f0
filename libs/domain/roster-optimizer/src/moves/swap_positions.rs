// [libs/domain/roster-optimizer/src/moves/swap_positions.rs]
//! Move 3 (§4.4.3): find an (E, P) pair on the same sector base within one
//! slot and swap their position letters, rejecting the move if it would
//! break continuity for either controller in the adjacent slots.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use roster_models::{Assignment, Cell, Position};

use crate::oracle::ConstraintOracle;

pub fn propose(assignment: &Assignment, oracle: &ConstraintOracle, rng: &mut StdRng) -> Option<Assignment> {
    let num_slots = assignment.num_slots();
    if num_slots == 0 {
        return None;
    }
    let slot = rng.gen_range(0..num_slots);

    let working: Vec<(usize, roster_models::SectorPosition)> = assignment
        .working_in_slot(slot)
        .filter_map(|(c, cell)| cell.sector_position().map(|sp| (c, sp)))
        .collect();

    let mut pairs: Vec<(usize, usize, roster_models::SectorBaseId)> = Vec::new();
    for &(c_e, sp_e) in working.iter().filter(|(_, sp)| sp.position == Position::Executive) {
        for &(c_p, sp_p) in working.iter().filter(|(_, sp)| sp.position == Position::Planner) {
            if sp_e.base == sp_p.base {
                pairs.push((c_e, c_p, sp_e.base));
            }
        }
    }
    let &(c_e, c_p, base) = pairs.choose(rng)?;

    let new_sp_for_e = roster_models::SectorPosition { base, position: Position::Planner };
    let new_sp_for_p = roster_models::SectorPosition { base, position: Position::Executive };

    if oracle.would_break_continuity(assignment, c_e, slot, new_sp_for_e)
        || oracle.would_break_continuity(assignment, c_p, slot, new_sp_for_p)
    {
        return None;
    }

    let mut candidate = assignment.clone();
    candidate.set(c_e, slot, Cell::from(new_sp_for_e));
    candidate.set(c_p, slot, Cell::from(new_sp_for_p));
    Some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use roster_models::{ConfigurationRow, DomainModel, ScheduleRow, SectorBaseId, SlotBuilder};

    #[test]
    fn flips_position_letters_for_a_matching_pair() {
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
        let base = SectorBaseId(0);
        let sp_e = SectorPosition { base, position: Position::Executive };
        let sp_p = SectorPosition { base, position: Position::Planner };
        assignment.set(0, 0, Cell::from(sp_e));
        assignment.set(1, 0, Cell::from(sp_p));

        let mut rng = rand::SeedableRng::seed_from_u64(3);
        let candidate = propose(&assignment, &oracle, &mut rng).expect("one E/P pair shares a base");
        assert_eq!(candidate.get(0, 0).sector_position(), Some(sp_p));
        assert_eq!(candidate.get(1, 0).sector_position(), Some(sp_e));
    }
}
