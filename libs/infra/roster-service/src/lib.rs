// [libs/infra/roster-service/src/lib.rs]
/*!
 * APARATO: ROSTER SERVICE (ESTRATO L4)
 * RESPONSABILIDAD: FRONTERA DE ENSAMBLAJE SIN CAPA HTTP (§4.10)
 */

pub mod error_class;
pub mod response;
pub mod service;

pub use error_class::ErrorClass;
pub use response::OptimizationResponse;
pub use service::{InProcessRosterService, RosterService, RunOptimizationRequest};
