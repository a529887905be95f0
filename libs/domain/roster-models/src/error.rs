// [libs/domain/roster-models/src/error.rs]
// =================================================================
// APARATO: ROSTER ERROR CATALOG
// RESPONSABILIDAD: TAXONOMÍA DE FALLOS COMPARTIDA POR TODO EL WORKSPACE
// =================================================================

use thiserror::Error;

/// Error taxonomy shared by `roster-models`, `roster-optimizer` and
/// `roster-ingest`. The optimizer's public contract never returns this type
/// across its own boundary (see `OptimizationResponse::SolutionStatus`); it
/// is how the ingestion/domain-construction layer underneath it reports
/// failure to its caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A required tabular column was missing, a timestamp could not be
    /// parsed, or the controller pool was empty.
    #[error("[ROSTER_INPUT_FAULT]: {0}")]
    InvalidInput(String),

    /// No required sector-position exists in any slot, or no controller is
    /// eligible in any slot: there is nothing for the optimizer to do.
    #[error("[ROSTER_INFEASIBLE_FAULT]: {0}")]
    InfeasibleShift(String),
}

pub type RosterResult<T> = Result<T, RosterError>;
