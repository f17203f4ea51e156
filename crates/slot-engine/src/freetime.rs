//! Compute free intervals as the complement of bookings within the day window.

use crate::config::DayWindow;
use crate::intervals::Interval;

/// Find the free intervals within `window`, given sorted occupied intervals.
///
/// Occupied intervals are clipped to the window first; those entirely outside
/// it, and inverted ones (`end <= start`), are discarded. The result is
/// ascending, pairwise disjoint, and every interval has positive length.
pub fn free_intervals(occupied: &[Interval], window: DayWindow) -> Vec<Interval> {
    let mut free = Vec::new();
    let mut cursor = window.start();

    let clipped = occupied
        .iter()
        .filter(|iv| iv.start < iv.end && iv.start < window.end() && iv.end > window.start())
        .map(|iv| Interval::new(iv.start.max(window.start()), iv.end.min(window.end())));

    for busy in clipped {
        if cursor < busy.start {
            free.push(Interval::new(cursor, busy.start));
        }
        cursor = cursor.max(busy.end);
    }

    // Trailing free time after the last booking.
    if cursor < window.end() {
        free.push(Interval::new(cursor, window.end()));
    }

    free
}
