// [libs/domain/roster-optimizer/src/moves/fill_uncovered_sectors.rs]
//! Move 5 (§4.4.5): for each slot `t`, attempt to assign currently-idle
//! eligible controllers to uncovered members of `Req(t)`. Regular
//! controllers are preferred over SS; SS is used only if no SUP is
//! currently working that slot.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use roster_models::{Assignment, Cell, OperativeWorkplace};

use crate::oracle::ConstraintOracle;

pub fn propose(assignment: &Assignment, oracle: &ConstraintOracle, rng: &mut StdRng) -> Option<Assignment> {
    let domain = oracle.domain();
    let mut candidate = assignment.clone();
    let mut changed = false;

    for slot in 0..assignment.num_slots() {
        let covered: std::collections::HashSet<_> = candidate
            .working_in_slot(slot)
            .filter_map(|(_, cell)| cell.sector_position())
            .collect();
        let uncovered: Vec<_> = domain
            .requirement(slot)
            .iter()
            .copied()
            .filter(|sp| !covered.contains(sp))
            .collect();
        if uncovered.is_empty() {
            continue;
        }

        let sup_working = candidate.working_in_slot(slot).any(|(c, _)| {
            domain.controller(c).workplace == OperativeWorkplace::Sup
        });

        let mut idle: Vec<usize> = (0..candidate.num_controllers())
            .filter(|&c| candidate.get(c, slot).is_break())
            .filter(|&c| oracle.is_assignable(c, slot))
            .collect();
        idle.shuffle(rng);

        let mut regulars: Vec<usize> = Vec::new();
        let mut ss: Vec<usize> = Vec::new();
        for c in idle {
            match domain.controller(c).workplace {
                OperativeWorkplace::Regular => regulars.push(c),
                OperativeWorkplace::Ss if !sup_working => ss.push(c),
                _ => {}
            }
        }
        let mut candidates_by_preference = regulars;
        candidates_by_preference.extend(ss);

        for req in uncovered {
            let Some(pos) = candidates_by_preference
                .iter()
                .position(|&c| !oracle.would_break_continuity(&candidate, c, slot, req))
            else {
                continue;
            };
            let controller = candidates_by_preference.remove(pos);
            candidate.set(controller, slot, Cell::from(req));
            changed = true;
        }
    }

    changed.then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use roster_models::{ConfigType, ConfigurationRow, DomainModel, ScheduleRow, SlotBuilder};

    #[test]
    fn fills_an_uncovered_requirement_from_an_idle_controller() {
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
        let rows = vec![row("C1")];
        let configurations = vec![ConfigurationRow {
            datum_od: start,
            datum_do: start + chrono::Duration::hours(1),
            config_type: ConfigType::Tx,
            konfiguracija: "A1".into(),
            sektor: "7".into(),
        }];
        let domain = DomainModel::build(&rows, &configurations, slots).unwrap();
        let oracle = ConstraintOracle::new(&domain);

        let assignment = Assignment::new(1, 1);
        let mut rng = rand::SeedableRng::seed_from_u64(1);
        let candidate = propose(&assignment, &oracle, &mut rng).expect("idle controller fills the gap");
        assert!(!candidate.get(0, 0).is_break());
    }
}
