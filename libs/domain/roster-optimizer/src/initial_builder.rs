// [libs/domain/roster-optimizer/src/initial_builder.rs]
/*!
 * APARATO: INITIAL BUILDER (ESTRATO L2)
 * RESPONSABILIDAD: SEMILLA GREEDY PARA EL RECOCIDO (§4.5)
 *
 * Deterministic slot order, randomized controller order within a slot.
 * Never over-assigns: `Req(t)` may remain partially uncovered once the
 * eligible pool for that slot is exhausted, left for `AnnealingEngine` and
 * `RepairPasses` to close.
 */

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use roster_models::{Assignment, Cell, DomainModel};
use tracing::instrument;

use crate::oracle::ConstraintOracle;

pub struct InitialBuilder;

impl InitialBuilder {
    /// Builds a greedy seed assignment, slot by slot, left to right.
    #[instrument(skip(domain, oracle, rng), fields(controllers = domain.num_controllers(), slots = domain.num_slots()))]
    pub fn build(domain: &DomainModel, oracle: &ConstraintOracle, rng: &mut StdRng) -> Assignment {
        let mut assignment = Assignment::new(domain.num_controllers(), domain.num_slots());

        for slot in 0..domain.num_slots() {
            let mut eligible: Vec<usize> = (0..domain.num_controllers())
                .filter(|&c| oracle.is_assignable(c, slot))
                .collect();
            eligible.shuffle(rng);

            for &required in domain.requirement(slot) {
                if assignment
                    .working_in_slot(slot)
                    .any(|(_, cell)| cell.sector_position() == Some(required))
                {
                    continue;
                }
                let Some(pos) = eligible.iter().position(|&c| {
                    oracle.is_valid_sector(required, slot)
                        && !oracle.would_break_continuity(&assignment, c, slot, required)
                        && !oracle.would_violate_ss_sup(&assignment, slot, c)
                }) else {
                    continue;
                };
                let controller = eligible.remove(pos);
                assignment.set(controller, slot, Cell::from(required));
            }
        }

        assignment
    }
}
