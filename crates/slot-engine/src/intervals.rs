//! Convert clock-time bookings into sorted minute intervals.
//!
//! Bookings are converted and sorted, nothing more. They are NOT merged and
//! overlap is NOT detected: the caller guarantees that one practitioner's
//! bookings for a day do not overlap.

use serde::{Deserialize, Serialize};

use crate::clock;
use crate::error::Result;

/// An existing booking, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Start time, "HH:MM".
    pub start: String,
    /// End time, "HH:MM".
    pub end: String,
}

impl Booking {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// A half-open `[start, end)` span of minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn duration_minutes(&self) -> i64 {
        self.end - self.start
    }
}

/// Convert bookings to minute intervals, sorted by start then end.
///
/// Fails on the first booking whose start or end is not valid "HH:MM".
pub fn bookings_to_intervals(bookings: &[Booking]) -> Result<Vec<Interval>> {
    let mut intervals = bookings
        .iter()
        .map(|b| Ok(Interval::new(clock::to_minutes(&b.start)?, clock::to_minutes(&b.end)?)))
        .collect::<Result<Vec<_>>>()?;

    intervals.sort();
    Ok(intervals)
}
