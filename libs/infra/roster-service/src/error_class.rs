// [libs/infra/roster-service/src/error_class.rs]
//! The three-way fault classification a web layer maps to HTTP status
//! classes (§7): `InvalidInput` -> 400, `Unavailable` -> 503, `Internal` ->
//! 500. `RosterService` exposes this enum so that mapping does not have to
//! be re-derived above the optimizer boundary.

use roster_models::RosterError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Malformed or missing tabular data, or an otherwise unusable request.
    InvalidInput,
    /// The backing `DataSource` could not be reached. The CSV adapter never
    /// produces this variant; it exists for a future DB-backed source.
    Unavailable,
    /// Anything else, including `RosterError::InfeasibleShift`.
    Internal,
}

impl From<&RosterError> for ErrorClass {
    fn from(err: &RosterError) -> Self {
        match err {
            RosterError::InvalidInput(_) => ErrorClass::InvalidInput,
            RosterError::InfeasibleShift(_) => ErrorClass::Internal,
        }
    }
}
