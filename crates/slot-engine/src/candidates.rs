//! Sliding-window candidate generation over free intervals.

use crate::intervals::Interval;

/// A possible appointment, tagged with the free interval it sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub slot: Interval,
    pub free: Interval,
}

impl Candidate {
    /// Minutes between the start of the free interval and the slot.
    pub fn gap_before(&self) -> i64 {
        self.slot.start - self.free.start
    }

    /// Minutes between the end of the slot and the end of the free interval.
    pub fn gap_after(&self) -> i64 {
        self.free.end - self.slot.end
    }
}

/// Slide a `duration`-minute window across every free interval in `step`
/// increments, keeping each position that fits entirely inside the interval.
///
/// Candidates come out in free-interval order, ascending within each interval.
/// Both `duration` and `step` must be positive; the aggregator validates this.
/// A window or step that would run past `i64::MAX` ends the interval.
pub fn generate_candidates(free: &[Interval], duration: i64, step: i64) -> Vec<Candidate> {
    debug_assert!(duration > 0 && step > 0);

    let mut candidates = Vec::new();
    for &interval in free {
        let mut start = interval.start;
        while let Some(end) = start.checked_add(duration).filter(|&end| end <= interval.end) {
            candidates.push(Candidate {
                slot: Interval::new(start, end),
                free: interval,
            });
            match start.checked_add(step) {
                Some(next) => start = next,
                None => break,
            }
        }
    }
    candidates
}
