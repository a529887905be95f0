// [libs/domain/roster-optimizer/src/optimizer.rs]
/*!
 * APARATO: SCHEDULE OPTIMIZER CONTRACT (ESTRATO L2)
 * RESPONSABILIDAD: FRONTERA INTERCAMBIABLE RECOCIDO/CP (§4.10)
 *
 * `ScheduleOptimizer` is the seam a constraint-programming backend (e.g.
 * OR-Tools) would sit behind. `AnnealingScheduleOptimizer` is the engine
 * specified in §4.5-§4.8; `CpScheduleOptimizer` is an interface-only stub
 * proving the contract is backend-agnostic — it runs InitialBuilder and
 * RepairPasses only, with no stochastic search, and documents that a real
 * CP-backed implementation lives outside this crate.
 */

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use roster_models::DomainModel;
use tracing::instrument;

use crate::annealing::AnnealingEngine;
use crate::initial_builder::InitialBuilder;
use crate::oracle::ConstraintOracle;
use crate::repair;
use crate::result_assembler::{OptimizedResults, ResultAssembler};

/// One optimization call (§6 `maxExecTime`, `randomSeed`). Fields not yet
/// load-bearing for the core engine (`useLNS`, `maxOptimalSolutions`, ...)
/// are carried for contract completeness and ignored by
/// `AnnealingScheduleOptimizer`.
pub struct OptimizationRequest {
    pub max_exec_seconds: u64,
    pub random_seed: Option<u64>,
    pub use_simulated_annealing: bool,
}

impl Default for OptimizationRequest {
    fn default() -> Self {
        Self {
            max_exec_seconds: 10,
            random_seed: None,
            use_simulated_annealing: true,
        }
    }
}

pub trait ScheduleOptimizer {
    fn optimize(&self, domain: &DomainModel, request: &OptimizationRequest) -> OptimizedResults;
}

pub struct AnnealingScheduleOptimizer;

impl ScheduleOptimizer for AnnealingScheduleOptimizer {
    #[instrument(skip(self, domain, request), fields(controllers = domain.num_controllers(), slots = domain.num_slots()))]
    fn optimize(&self, domain: &DomainModel, request: &OptimizationRequest) -> OptimizedResults {
        let oracle = ConstraintOracle::new(domain);
        let mut rng: StdRng = match request.random_seed {
            Some(seed) => SeedableRng::seed_from_u64(seed),
            None => SeedableRng::from_entropy(),
        };

        let initial = InitialBuilder::build(domain, &oracle, &mut rng);

        let searched = if request.use_simulated_annealing {
            let outcome = AnnealingEngine::run(
                domain,
                &oracle,
                initial,
                Duration::from_secs(request.max_exec_seconds),
                &mut rng,
            );
            tracing::info!(?outcome.termination, outer_iterations = outcome.outer_iterations, "search phase complete");
            outcome.best
        } else {
            initial
        };

        let repaired = repair::run_all(searched, &oracle);
        ResultAssembler::assemble(domain, &repaired.assignment, repaired.invariant_one_relaxed)
    }
}

/// Feasibility-only stand-in for a real constraint-programming backend:
/// greedy seed plus deterministic repair, no probabilistic search. Kept
/// here to prove `ScheduleOptimizer` is a genuine seam, not to compete with
/// `AnnealingScheduleOptimizer` on solution quality.
pub struct CpScheduleOptimizer;

impl ScheduleOptimizer for CpScheduleOptimizer {
    #[instrument(skip(self, domain, request), fields(controllers = domain.num_controllers(), slots = domain.num_slots()))]
    fn optimize(&self, domain: &DomainModel, request: &OptimizationRequest) -> OptimizedResults {
        let oracle = ConstraintOracle::new(domain);
        let mut rng: StdRng = match request.random_seed {
            Some(seed) => SeedableRng::seed_from_u64(seed),
            None => SeedableRng::from_entropy(),
        };
        let initial = InitialBuilder::build(domain, &oracle, &mut rng);
        let repaired = repair::run_all(initial, &oracle);
        ResultAssembler::assemble(domain, &repaired.assignment, repaired.invariant_one_relaxed)
    }
}
