//! Tests for the single-candidate classification policy.

use slot_engine::candidates::Candidate;
use slot_engine::classify::is_aligned;
use slot_engine::{classify_slot, Interval, SlotKind, SlotOptions};

// ── Helpers ─────────────────────────────────────────────────────────────────

/// Candidate of `duration` minutes at `gap_before` into a free interval.
fn candidate(free_start: i64, free_end: i64, gap_before: i64, duration: i64) -> Candidate {
    let start = free_start + gap_before;
    Candidate {
        slot: Interval::new(start, start + duration),
        free: Interval::new(free_start, free_end),
    }
}

fn kind(c: &Candidate) -> SlotKind {
    classify_slot(c, &SlotOptions::default()).kind
}

// ── Alignment ───────────────────────────────────────────────────────────────

#[test]
fn zero_gap_is_aligned() {
    assert!(is_aligned(0, &[60, 90]));
}

#[test]
fn multiples_of_session_lengths_are_aligned() {
    for gap in [60, 90, 120, 180, 270, 300] {
        assert!(is_aligned(gap, &[60, 90]), "{} should be aligned", gap);
    }
}

#[test]
fn other_gaps_are_not_aligned() {
    for gap in [15, 30, 45, 75, 105, 150, 165] {
        assert!(!is_aligned(gap, &[60, 90]), "{} should not be aligned", gap);
    }
}

#[test]
fn alignment_follows_configured_session_lengths() {
    assert!(is_aligned(45, &[45]));
    assert!(!is_aligned(60, &[45]));
}

// ── Strict ──────────────────────────────────────────────────────────────────

#[test]
fn slot_at_free_interval_start_is_strict() {
    assert_eq!(kind(&candidate(660, 1080, 0, 60)), SlotKind::Strict);
}

#[test]
fn slot_at_free_interval_end_is_strict() {
    // 11:00-18:00, slot 17:00-18:00: gap before 360, gap after 0.
    assert_eq!(kind(&candidate(660, 1080, 360, 60)), SlotKind::Strict);
    // Free interval whose length is not on the step grid, slot flush right.
    assert_eq!(kind(&candidate(480, 605, 65, 60)), SlotKind::Strict);
}

#[test]
fn aligned_gap_before_is_strict() {
    // 08:00-10:00, slot 09:00-10:00: 60 before.
    assert_eq!(kind(&candidate(480, 600, 60, 60)), SlotKind::Strict);
}

#[test]
fn aligned_gap_after_is_strict() {
    // 45 before is not aligned, 90 after is.
    assert_eq!(kind(&candidate(600, 795, 45, 60)), SlotKind::Strict);
}

#[test]
fn strict_carries_no_reason() {
    let verdict = classify_slot(&candidate(480, 600, 0, 60), &SlotOptions::default());
    assert_eq!(verdict.reason, None);
}

// ── Bad ─────────────────────────────────────────────────────────────────────

#[test]
fn forty_five_minutes_on_both_sides_is_bad() {
    // 11:00-13:30, slot 11:45-12:45.
    let verdict = classify_slot(&candidate(660, 810, 45, 60), &SlotOptions::default());
    assert_eq!(verdict.kind, SlotKind::Bad);
    assert_eq!(
        verdict.reason.as_deref(),
        Some("Leaves unusable gaps: 45 min before, 45 min after.")
    );
}

#[test]
fn bad_reason_reports_both_gap_sizes() {
    // 11:00-18:00, slot 11:45-12:45.
    let verdict = classify_slot(&candidate(660, 1080, 45, 60), &SlotOptions::default());
    assert_eq!(verdict.kind, SlotKind::Bad);
    assert_eq!(
        verdict.reason.as_deref(),
        Some("Leaves unusable gaps: 45 min before, 315 min after.")
    );
}

#[test]
fn unaligned_gaps_longer_than_min_gap_are_still_bad() {
    // 75 before, 105 after: both usable by length, neither aligned.
    assert_eq!(kind(&candidate(600, 840, 75, 60)), SlotKind::Bad);
}

// ── Soft ────────────────────────────────────────────────────────────────────

#[test]
fn soft_never_fires_under_the_default_policy() {
    // Every on-grid position in intervals of 1-10 hours, several durations.
    let opts = SlotOptions::default();
    for len in (60..=600).step_by(15) {
        for duration in [30, 45, 60, 90] {
            let mut gap = 0;
            while gap + duration <= len {
                let c = candidate(480, 480 + len, gap, duration);
                assert_ne!(classify_slot(&c, &opts).kind, SlotKind::Soft);
                gap += 15;
            }
        }
    }
}

#[test]
fn soft_never_fires_even_with_a_large_min_gap() {
    let opts = SlotOptions {
        min_gap: 600,
        ..SlotOptions::default()
    };
    for gap in (0..=540).step_by(15) {
        let c = candidate(480, 1080, gap, 60);
        assert_ne!(classify_slot(&c, &opts).kind, SlotKind::Soft);
    }
}

// ── Policy knobs ────────────────────────────────────────────────────────────

#[test]
fn custom_session_lengths_change_the_verdict() {
    let c = candidate(600, 840, 75, 60);
    let opts = SlotOptions {
        session_lengths: vec![75],
        ..SlotOptions::default()
    };
    assert_eq!(classify_slot(&c, &opts).kind, SlotKind::Strict);
}

#[test]
fn classification_is_deterministic() {
    let c = candidate(660, 1080, 45, 60);
    let opts = SlotOptions::default();
    assert_eq!(classify_slot(&c, &opts), classify_slot(&c, &opts));
}
