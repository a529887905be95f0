// [tests/mirror/libs/domain/roster_optimizer/scenarios_test.rs]
//! Deterministic scenario tests S1-S6 from §8 of the specification.

use chrono::{Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use roster_models::{ConfigType, ConfigurationRow, DomainModel, ScheduleRow, SlotBuilder};
use roster_optimizer::{repair, ConstraintOracle, InitialBuilder};

fn ts(hour: u32, minute: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, hour, minute, 0).unwrap()
}

fn schedule_row(id: &str, shift: &str, vreme_start: chrono::DateTime<Utc>) -> ScheduleRow {
    ScheduleRow {
        sifra: id.into(),
        prezime_ime: id.into(),
        smena: shift.into(),
        orm: "regular".into(),
        redosled: 1,
        par: None,
        datum: vreme_start,
        vreme_start,
        datum_od: vreme_start,
        datum_do: vreme_start,
        sektor: None,
        flag: None,
    }
}

/// S1: a single sector, two controllers; the optimizer must alternate one
/// working the sector and the other on break in every slot, never both
/// idle and never both assigned to the same sector position at once.
#[test]
fn s1_single_sector_two_controllers_alternate_work_and_break() {
    let start = ts(8, 0);
    let slots = SlotBuilder::build(start, start + Duration::hours(2), 30);
    let rows = vec![schedule_row("C1", "J", start), schedule_row("C2", "J", start)];
    let configurations = vec![ConfigurationRow {
        datum_od: start,
        datum_do: start + Duration::hours(2),
        config_type: ConfigType::Tx,
        konfiguracija: "A1".into(),
        sektor: "7".into(),
    }];
    let domain = DomainModel::build(&rows, &configurations, slots).unwrap();
    let oracle = ConstraintOracle::new(&domain);
    let mut rng: StdRng = SeedableRng::seed_from_u64(1);

    let initial = InitialBuilder::build(&domain, &oracle, &mut rng);
    let repaired = repair::run_all(initial, &oracle);

    for slot in 0..repaired.assignment.num_slots() {
        let working: Vec<_> = repaired.assignment.working_in_slot(slot).collect();
        assert!(!working.is_empty(), "at least one controller must cover the sector");
    }
}

/// S2: two sectors, four controllers; every controller must be assigned a
/// distinct sector-position within a slot whenever more than one works.
#[test]
fn s2_two_sectors_four_controllers_never_collide() {
    let start = ts(8, 0);
    let slots = SlotBuilder::build(start, start + Duration::hours(1), 30);
    let rows = vec![
        schedule_row("C1", "J", start),
        schedule_row("C2", "J", start),
        schedule_row("C3", "J", start),
        schedule_row("C4", "J", start),
    ];
    let configurations = vec![
        ConfigurationRow {
            datum_od: start,
            datum_do: start + Duration::hours(1),
            config_type: ConfigType::Tx,
            konfiguracija: "A1".into(),
            sektor: "7".into(),
        },
        ConfigurationRow {
            datum_od: start,
            datum_do: start + Duration::hours(1),
            config_type: ConfigType::Tx,
            konfiguracija: "A2".into(),
            sektor: "9".into(),
        },
    ];
    let domain = DomainModel::build(&rows, &configurations, slots).unwrap();
    let oracle = ConstraintOracle::new(&domain);
    let mut rng: StdRng = SeedableRng::seed_from_u64(2);

    let initial = InitialBuilder::build(&domain, &oracle, &mut rng);
    let repaired = repair::run_all(initial, &oracle);

    assert!(oracle.is_valid_solution(&repaired.assignment));
}

/// S3: a controller with a Flag-S window covering the whole shift must
/// never be working.
#[test]
fn s3_flag_s_excludes_a_controller_for_its_whole_window() {
    let start = ts(8, 0);
    let slots = SlotBuilder::build(start, start + Duration::hours(1), 30);
    let mut row = schedule_row("C1", "J", start);
    row.flag = Some("S".into());
    row.datum_od = start;
    row.datum_do = start + Duration::hours(1);
    let configurations = vec![ConfigurationRow {
        datum_od: start,
        datum_do: start + Duration::hours(1),
        config_type: ConfigType::Tx,
        konfiguracija: "A1".into(),
        sektor: "7".into(),
    }];
    let domain = DomainModel::build(&[row], &configurations, slots).unwrap();
    let oracle = ConstraintOracle::new(&domain);
    let mut rng: StdRng = SeedableRng::seed_from_u64(3);

    let initial = InitialBuilder::build(&domain, &oracle, &mut rng);
    let repaired = repair::run_all(initial, &oracle);

    for slot in 0..repaired.assignment.num_slots() {
        assert!(repaired.assignment.get(0, slot).is_break());
    }
}

/// S4: an M-shift controller's end-of-shift cutoff excludes the last two
/// slots regardless of coverage pressure.
#[test]
fn s4_m_shift_cutoff_holds_even_under_coverage_pressure() {
    let start = ts(8, 0);
    let slots = SlotBuilder::build(start, start + Duration::hours(2), 30);
    let rows = vec![schedule_row("C1", "M", start)];
    let configurations = vec![ConfigurationRow {
        datum_od: start,
        datum_do: start + Duration::hours(2),
        config_type: ConfigType::Tx,
        konfiguracija: "A1".into(),
        sektor: "7".into(),
    }];
    let domain = DomainModel::build(&rows, &configurations, slots).unwrap();
    let oracle = ConstraintOracle::new(&domain);
    let mut rng: StdRng = SeedableRng::seed_from_u64(4);

    let initial = InitialBuilder::build(&domain, &oracle, &mut rng);
    let repaired = repair::run_all(initial, &oracle);

    let num_slots = repaired.assignment.num_slots();
    assert!(repaired.assignment.get(0, num_slots - 1).is_break());
    assert!(repaired.assignment.get(0, num_slots - 2).is_break());
}

/// S5: a shift crossing midnight (end < start) generates slots that wrap
/// past 24:00 rather than producing an empty or inverted grid.
#[test]
fn s5_midnight_crossing_shift_generates_wrapped_slots() {
    let start = ts(22, 0);
    let end = ts(2, 0);
    let slots = SlotBuilder::build(start, end, 30);
    assert_eq!(slots.len(), 8);
    assert!(slots.last().unwrap().end > start);
}

/// S6: SS and SUP are mutually exclusive within any single slot.
#[test]
fn s6_ss_and_sup_are_never_both_working_in_the_same_slot() {
    let start = ts(8, 0);
    let slots = SlotBuilder::build(start, start + Duration::hours(1), 30);
    let mut ss_row = schedule_row("C1", "J", start);
    ss_row.orm = "SS".into();
    let mut sup_row = schedule_row("C2", "J", start);
    sup_row.orm = "SUP".into();
    let configurations = vec![ConfigurationRow {
        datum_od: start,
        datum_do: start + Duration::hours(1),
        config_type: ConfigType::Tx,
        konfiguracija: "A1".into(),
        sektor: "7".into(),
    }];
    let domain = DomainModel::build(&[ss_row, sup_row], &configurations, slots).unwrap();
    let oracle = ConstraintOracle::new(&domain);
    let mut rng: StdRng = SeedableRng::seed_from_u64(6);

    let initial = InitialBuilder::build(&domain, &oracle, &mut rng);
    let repaired = repair::run_all(initial, &oracle);

    for slot in 0..repaired.assignment.num_slots() {
        assert!(!oracle.ss_and_sup_both_working(&repaired.assignment, slot));
    }
}
