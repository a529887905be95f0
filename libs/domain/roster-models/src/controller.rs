// [libs/domain/roster-models/src/controller.rs]
//! Controller entity and its shift metadata (§3 Controller).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shift type, drives the end-of-shift eligibility rule in Invariant 2:
/// an `M`-shift controller is never eligible in the last two slots.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ShiftType {
    J,
    M,
    Other,
}

impl ShiftType {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "J" => ShiftType::J,
            "M" => ShiftType::M,
            _ => ShiftType::Other,
        }
    }
}

/// Operative workplace tag. Only `Ss` and `Sup` are load-bearing (Invariant
/// 6); every other tag is folded into `Regular`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OperativeWorkplace {
    Ss,
    Sup,
    Regular,
}

impl OperativeWorkplace {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "SS" => OperativeWorkplace::Ss,
            "SUP" => OperativeWorkplace::Sup,
            _ => OperativeWorkplace::Regular,
        }
    }
}

/// A half-open interval `[start, end)` during which Flag `S` forces the
/// controller idle (Invariant 3).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlagSInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl FlagSInterval {
    pub fn covers(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }
}

/// A staff member available for the shift.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Controller {
    /// Stable identifier (`sifra`), unique within a shift.
    pub id: String,
    pub name: String,
    pub shift_type: ShiftType,
    /// Personal shift-start timestamp (`VremeStart`). A controller is never
    /// eligible before this instant.
    pub shift_start: DateTime<Utc>,
    pub workplace: OperativeWorkplace,
    /// Flag-S windows, sorted by `start` ascending.
    pub flag_s_intervals: Vec<FlagSInterval>,
}

impl Controller {
    pub fn has_flag_s_at(&self, instant: DateTime<Utc>) -> bool {
        self.flag_s_intervals.iter().any(|w| w.covers(instant))
    }
}
