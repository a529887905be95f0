// [libs/domain/roster-optimizer/src/annealing.rs]
/*!
 * APARATO: ANNEALING ENGINE (ESTRATO L2)
 * RESPONSABILIDAD: BUCLE DE TEMPERATURA Y ACEPTACIÓN METROPOLIS (§4.6)
 *
 * The *current* Assignment is mutated in place by accepting candidates; the
 * *best-so-far* Assignment is an independent clone, only replaced when a
 * strictly lower energy is found. Every candidate is passed through
 * `FixSectorRepetitions` and `FixFlagSViolations` before scoring so the
 * search never gets trapped rewarding an obviously-infeasible state.
 */

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::Rng;
use roster_models::Assignment;
use tracing::{debug, info, instrument};

use crate::energy::EnergyFunction;
use crate::moves::{self, ALL_MOVES};
use crate::oracle::ConstraintOracle;
use crate::repair;

pub const INITIAL_TEMPERATURE: f64 = 1000.0;
pub const COOLING_FACTOR: f64 = 0.95;
pub const OUTER_ITERATION_CAP: u32 = 10_000;
pub const INNER_ITERATIONS_PER_TEMPERATURE: u32 = 100;
pub const MINIMUM_TEMPERATURE: f64 = 0.01;
pub const STALL_LIMIT: u32 = 100;
const MAX_MOVE_REROLLS: u32 = 30;

/// Why the annealing loop stopped. `DeadlineHit` and `StallLimitReached` are
/// not errors (§7): the best Assignment found so far is still returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    OuterIterationCapReached,
    DeadlineHit,
    TemperatureFloor,
    StallLimitReached,
}

pub struct AnnealingOutcome {
    pub best: Assignment,
    pub best_energy: f64,
    pub termination: TerminationReason,
    pub outer_iterations: u32,
}

pub struct AnnealingEngine;

impl AnnealingEngine {
    #[instrument(skip(domain, oracle, initial, rng), fields(controllers = domain.num_controllers(), slots = domain.num_slots()))]
    pub fn run(
        domain: &roster_models::DomainModel,
        oracle: &ConstraintOracle,
        initial: Assignment,
        max_exec: Duration,
        rng: &mut StdRng,
    ) -> AnnealingOutcome {
        let energy_fn = EnergyFunction::new(oracle);
        let deadline = Instant::now() + max_exec;

        let mut current = initial;
        let mut current_energy = energy_fn.score(&current);
        let mut best = current.clone();
        let mut best_energy = current_energy;

        let mut temperature = INITIAL_TEMPERATURE;
        let mut outer = 0u32;
        let mut stall = 0u32;

        let termination = loop {
            if outer >= OUTER_ITERATION_CAP {
                break TerminationReason::OuterIterationCapReached;
            }
            if Instant::now() >= deadline {
                break TerminationReason::DeadlineHit;
            }
            if temperature < MINIMUM_TEMPERATURE {
                break TerminationReason::TemperatureFloor;
            }
            if stall >= STALL_LIMIT {
                break TerminationReason::StallLimitReached;
            }

            for _ in 0..INNER_ITERATIONS_PER_TEMPERATURE {
                if let Some(candidate) = Self::propose_valid_candidate(&current, oracle, rng) {
                    let repaired = repair::fix_flag_s_violations(
                        repair::fix_sector_repetitions(candidate, oracle),
                        oracle,
                    );
                    let candidate_energy = energy_fn.score(&repaired);
                    let delta = candidate_energy - current_energy;

                    let accept = delta < 0.0 || rng.gen::<f64>() < (-delta / temperature).exp();
                    if accept {
                        current = repaired;
                        current_energy = candidate_energy;
                        if current_energy < best_energy {
                            best = current.clone();
                            best_energy = current_energy;
                            stall = 0;
                        }
                    }
                }
            }

            temperature *= COOLING_FACTOR;
            outer += 1;
            stall += 1;
            debug!(outer, temperature, best_energy, "cooled one annealing step");
        };

        info!(?termination, outer_iterations = outer, best_energy, "annealing finished");
        AnnealingOutcome {
            best,
            best_energy,
            termination,
            outer_iterations: outer,
        }
    }

    /// Picks a uniformly random move operator and re-rolls (different
    /// operator each time) up to [`MAX_MOVE_REROLLS`] times until it
    /// produces a structurally valid candidate.
    fn propose_valid_candidate(
        current: &Assignment,
        oracle: &ConstraintOracle,
        rng: &mut StdRng,
    ) -> Option<Assignment> {
        for _ in 0..MAX_MOVE_REROLLS {
            let kind = ALL_MOVES[rng.gen_range(0..ALL_MOVES.len())];
            if let Some(candidate) = moves::propose(kind, current, oracle, rng) {
                if oracle.is_valid_solution(&candidate) {
                    return Some(candidate);
                }
            }
        }
        None
    }
}
