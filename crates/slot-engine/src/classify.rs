//! Classification policy for a single candidate slot.
//!
//! A slot is judged by the remainder it leaves in its free interval. Touching
//! either edge of the interval, or leaving a remainder that is a whole number
//! of canonical sessions, makes the slot `Strict`. Anything else strands time
//! that is hard to rebook and is `Bad`, with a reason naming both gap sizes.

use serde::{Deserialize, Serialize};

use crate::candidates::Candidate;
use crate::config::SlotOptions;

/// How desirable a candidate slot is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    /// Fills the free interval from one edge or leaves a clean remainder.
    Strict,
    /// Usable, but leaves a remainder shorter than the minimum gap.
    Soft,
    /// Leaves leftover time that cannot hold a canonical session.
    Bad,
}

/// The verdict for one candidate. `reason` is set only for `Bad`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: SlotKind,
    pub reason: Option<String>,
}

/// A remainder is aligned when it is zero or a whole multiple of any session length.
pub fn is_aligned(gap: i64, session_lengths: &[i64]) -> bool {
    gap == 0 || session_lengths.iter().any(|&len| len > 0 && gap % len == 0)
}

/// Classify `candidate` against its enclosing free interval.
pub fn classify_slot(candidate: &Candidate, options: &SlotOptions) -> Classification {
    let gap_before = candidate.gap_before();
    let gap_after = candidate.gap_after();
    let fills_start = gap_before == 0;
    let fills_end = gap_after == 0;
    let aligned_before = is_aligned(gap_before, &options.session_lengths);
    let aligned_after = is_aligned(gap_after, &options.session_lengths);

    if fills_start || fills_end || aligned_before || aligned_after {
        return Classification {
            kind: SlotKind::Strict,
            reason: None,
        };
    }

    // Every case this rule describes is already Strict above, so with the
    // current policy it never fires.
    if (aligned_before || aligned_after)
        && ((gap_before < options.min_gap && fills_start)
            || (gap_after < options.min_gap && fills_end))
    {
        return Classification {
            kind: SlotKind::Soft,
            reason: None,
        };
    }

    Classification {
        kind: SlotKind::Bad,
        reason: Some(format!(
            "Leaves unusable gaps: {} min before, {} min after.",
            gap_before, gap_after
        )),
    }
}
