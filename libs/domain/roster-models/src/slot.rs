// [libs/domain/roster-models/src/slot.rs]
//! Time-slot index (§3 TimeSlot) and the `SlotBuilder` utility (§4.9).

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A half-open interval `[start, end)`, one fixed-length subdivision of the
/// shift. Slot indices into a `Vec<TimeSlot>` are `0..|T|-1`, ordered by
/// `start` ascending.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeSlot {
    /// Stable `"yyyy-MM-dd HH:mm:ss|yyyy-MM-dd HH:mm:ss"` key used by
    /// `SlotShortages` and `ConfigurationLabels` (§4.8).
    pub fn key(&self) -> String {
        format!(
            "{}|{}",
            self.start.format("%Y-%m-%d %H:%M:%S"),
            self.end.format("%Y-%m-%d %H:%M:%S"),
        )
    }
}

/// Builds the ordered `TimeSlot` sequence from raw shift bounds. If
/// `shift_end < shift_start` the shift is treated as crossing midnight: 24h
/// is added to `shift_end` before slicing (S5), matching the rollover rule
/// carried over from the original timestamp-list input in §6.
pub struct SlotBuilder;

impl SlotBuilder {
    pub fn build(
        shift_start: DateTime<Utc>,
        shift_end: DateTime<Utc>,
        slot_duration_minutes: i64,
    ) -> Vec<TimeSlot> {
        let normalized_end = if shift_end < shift_start {
            shift_end + Duration::hours(24)
        } else {
            shift_end
        };

        let step = Duration::minutes(slot_duration_minutes);
        let mut slots = Vec::new();
        let mut cursor = shift_start;

        while cursor < normalized_end {
            let slot_end = std::cmp::min(cursor + step, normalized_end);
            slots.push(TimeSlot {
                start: cursor,
                end: slot_end,
            });
            cursor = slot_end;
        }

        slots
    }

    /// Builds the slot sequence directly from an explicit timestamp list
    /// (the `timeSlots: [timestamp]` input in §6), one `TimeSlot` per
    /// consecutive pair, plus a final slot of `slot_duration_minutes`
    /// starting at the last timestamp.
    pub fn from_timestamps(timestamps: &[DateTime<Utc>], slot_duration_minutes: i64) -> Vec<TimeSlot> {
        if timestamps.is_empty() {
            return Vec::new();
        }
        let step = Duration::minutes(slot_duration_minutes);
        let mut slots = Vec::with_capacity(timestamps.len());
        for window in timestamps.windows(2) {
            slots.push(TimeSlot {
                start: window[0],
                end: window[1],
            });
        }
        let last = *timestamps.last().unwrap();
        slots.push(TimeSlot {
            start: last,
            end: last + step,
        });
        slots
    }
}
