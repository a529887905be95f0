// [tests/mirror/libs/domain/roster_optimizer/invariants_test.rs]
//! Property tests for the invariants enumerated in §8 of the specification.
//! Builds small synthetic domains, runs the deterministic CP pipeline
//! (InitialBuilder + full repair sequence, no stochastic search) against
//! them, and checks the resulting Assignment against a fresh
//! ConstraintOracle.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use roster_models::{ConfigType, ConfigurationRow, DomainModel, ScheduleRow, ShiftType, SlotBuilder};
use roster_optimizer::{repair, ConstraintOracle, InitialBuilder};

fn build_domain(num_controllers: usize, num_slots: usize, m_shift_controller: Option<usize>) -> DomainModel {
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap();
    let slots = SlotBuilder::build(start, start + Duration::minutes(30 * num_slots as i64), 30);

    let rows: Vec<ScheduleRow> = (0..num_controllers)
        .map(|i| {
            let is_m = m_shift_controller == Some(i);
            ScheduleRow {
                sifra: format!("C{i}"),
                prezime_ime: format!("C{i}"),
                smena: if is_m { "M".into() } else { "J".into() },
                orm: "regular".into(),
                redosled: 1,
                par: None,
                datum: start,
                vreme_start: start,
                datum_od: start,
                datum_do: start,
                sektor: None,
                flag: None,
            }
        })
        .collect();

    let configurations = vec![ConfigurationRow {
        datum_od: start,
        datum_do: start + Duration::minutes(30 * num_slots as i64),
        config_type: ConfigType::Tx,
        konfiguracija: "A1".into(),
        sektor: "7".into(),
    }];

    DomainModel::build(&rows, &configurations, slots).unwrap()
}

proptest! {
    /// Invariants 1, 2, 3, 4, 5, 6 over a freshly repaired assignment,
    /// across a range of small controller-pool / slot-grid shapes.
    #[test]
    fn repaired_assignment_satisfies_the_structural_invariants(
        num_controllers in 1usize..=4,
        num_slots in 2usize..=6,
        seed in any::<u64>(),
    ) {
        let domain = build_domain(num_controllers, num_slots, None);
        let oracle = ConstraintOracle::new(&domain);
        let mut rng: StdRng = SeedableRng::seed_from_u64(seed);

        let initial = InitialBuilder::build(&domain, &oracle, &mut rng);
        let repaired = repair::run_all(initial, &oracle);

        // Invariants 1, 4, 5, 6.
        prop_assert!(oracle.is_valid_solution(&repaired.assignment));

        // Invariant 2: eligibility, including the M-shift end-of-shift cutoff.
        // Invariant 3: Flag-S exclusion (no Flag-S windows in this domain,
        // checked vacuously alongside eligibility).
        for controller in 0..repaired.assignment.num_controllers() {
            for slot in 0..repaired.assignment.num_slots() {
                if !repaired.assignment.get(controller, slot).is_break() {
                    prop_assert!(oracle.is_assignable(controller, slot));
                }
            }
        }
    }

    /// Invariant 2's M-shift clause specifically: an M-shift controller must
    /// never be working in the last two slots.
    #[test]
    fn m_shift_controller_is_idle_in_the_final_two_slots(
        num_controllers in 1usize..=3,
        num_slots in 4usize..=6,
        seed in any::<u64>(),
    ) {
        let domain = build_domain(num_controllers, num_slots, Some(0));
        let oracle = ConstraintOracle::new(&domain);
        let mut rng: StdRng = SeedableRng::seed_from_u64(seed);

        let initial = InitialBuilder::build(&domain, &oracle, &mut rng);
        let repaired = repair::run_all(initial, &oracle);

        prop_assert_eq!(domain.controller(0).shift_type, ShiftType::M);
        for slot in (num_slots - 2)..num_slots {
            prop_assert!(repaired.assignment.get(0, slot).is_break());
        }
    }

    /// Invariant 7: identical seed and inputs yield identical projected
    /// results through the full annealing pipeline.
    #[test]
    fn same_seed_is_deterministic_through_the_full_pipeline(
        num_controllers in 1usize..=3,
        num_slots in 2usize..=5,
        seed in any::<u64>(),
    ) {
        use roster_optimizer::{AnnealingScheduleOptimizer, OptimizationRequest, ScheduleOptimizer};

        let domain = build_domain(num_controllers, num_slots, None);
        let optimizer = AnnealingScheduleOptimizer;
        let request = OptimizationRequest {
            max_exec_seconds: 0,
            random_seed: Some(seed),
            use_simulated_annealing: true,
        };

        let first = optimizer.optimize(&domain, &request);
        let second = optimizer.optimize(&domain, &request);

        let first_sectors: Vec<_> = first.optimized_results.iter().map(|r| r.sector.clone()).collect();
        let second_sectors: Vec<_> = second.optimized_results.iter().map(|r| r.sector.clone()).collect();
        prop_assert_eq!(first_sectors, second_sectors);
    }
}

/// Invariant 6 (energy idempotence): scoring the same Assignment twice, and
/// scoring a clone of it, all yield identical energies.
#[test]
fn energy_function_is_idempotent_under_cloning() {
    let domain = build_domain(2, 4, None);
    let oracle = ConstraintOracle::new(&domain);
    let mut rng: StdRng = SeedableRng::seed_from_u64(7);
    let assignment = InitialBuilder::build(&domain, &oracle, &mut rng);

    let energy_fn = roster_optimizer::EnergyFunction::new(&oracle);
    let first_score = energy_fn.score(&assignment);
    let clone = assignment.clone();
    let second_score = energy_fn.score(&assignment);
    let clone_score = energy_fn.score(&clone);

    assert_eq!(first_score, second_score);
    assert_eq!(first_score, clone_score);
}
