//! Tests for sliding-window candidate generation.

use slot_engine::candidates::generate_candidates;
use slot_engine::Interval;

fn iv(start: i64, end: i64) -> Interval {
    Interval::new(start, end)
}

#[test]
fn whole_day_sixty_minutes_yields_37_candidates() {
    let candidates = generate_candidates(&[iv(480, 1080)], 60, 15);
    assert_eq!(candidates.len(), 37);
    assert_eq!(candidates[0].slot, iv(480, 540));
    assert_eq!(candidates[36].slot, iv(1020, 1080));
}

#[test]
fn candidates_start_on_step_offsets_from_interval_start() {
    let candidates = generate_candidates(&[iv(485, 600)], 30, 15);
    let starts: Vec<i64> = candidates.iter().map(|c| c.slot.start).collect();
    assert_eq!(starts, vec![485, 500, 515, 530, 545, 560]);
}

#[test]
fn exact_fit_yields_one_candidate() {
    let candidates = generate_candidates(&[iv(600, 690)], 90, 15);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].gap_before(), 0);
    assert_eq!(candidates[0].gap_after(), 0);
}

#[test]
fn duration_longer_than_interval_yields_nothing() {
    assert!(generate_candidates(&[iv(600, 645), iv(700, 720)], 60, 15).is_empty());
}

#[test]
fn candidates_are_tagged_with_their_free_interval() {
    let free = vec![iv(480, 600), iv(660, 780)];
    let candidates = generate_candidates(&free, 60, 30);

    assert_eq!(candidates.len(), 6);
    for c in &candidates[..3] {
        assert_eq!(c.free, free[0]);
    }
    for c in &candidates[3..] {
        assert_eq!(c.free, free[1]);
    }
}

#[test]
fn every_candidate_fits_inside_its_interval() {
    let free = vec![iv(480, 555), iv(600, 1000), iv(1010, 1080)];
    for c in generate_candidates(&free, 45, 15) {
        assert!(c.slot.start >= c.free.start);
        assert!(c.slot.end <= c.free.end);
        assert_eq!(c.slot.duration_minutes(), 45);
    }
}

#[test]
fn gaps_are_measured_from_interval_edges() {
    let candidates = generate_candidates(&[iv(660, 1080)], 60, 15);
    let c = candidates[3];
    assert_eq!(c.slot.start, 705);
    assert_eq!(c.gap_before(), 45);
    assert_eq!(c.gap_after(), 315);
}

#[test]
fn huge_duration_yields_nothing() {
    assert!(generate_candidates(&[iv(480, 1080)], i64::MAX, 15).is_empty());
}

#[test]
fn huge_step_stops_after_the_first_candidate_of_each_interval() {
    let candidates = generate_candidates(&[iv(480, 600), iv(660, 1080)], 60, i64::MAX);
    let starts: Vec<i64> = candidates.iter().map(|c| c.slot.start).collect();
    assert_eq!(starts, vec![480, 660]);
}
