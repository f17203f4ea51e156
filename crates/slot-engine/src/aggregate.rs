//! Run the slot pipeline per practitioner and group the results.
//!
//! bookings -> occupied intervals -> free intervals -> candidates -> classified
//! slots. Each practitioner is computed independently from its own bookings;
//! the response is assembled by mapping ids to results, never by sharing an
//! accumulator between practitioners.

use tracing::{debug, debug_span, trace};

use crate::candidates::generate_candidates;
use crate::classify::{classify_slot, SlotKind};
use crate::clock;
use crate::config::{DayWindow, SlotOptions};
use crate::error::{Result, SlotError};
use crate::freetime::free_intervals;
use crate::intervals::{bookings_to_intervals, Booking};
use crate::types::{
    BestSlots, BestSlotsRequest, ClassifyRequest, ClassifyResponse, FreeInterval,
    PractitionerBooking, PractitionerMap, PractitionerRef, SlotClassification,
};

/// Validate the duration and options, returning the resolved day window.
fn validate(duration: i64, options: &SlotOptions) -> Result<DayWindow> {
    if duration <= 0 {
        return Err(SlotError::InvalidDuration(duration));
    }
    options.window()
}

fn classify_in_window(
    duration: i64,
    bookings: &[Booking],
    window: DayWindow,
    options: &SlotOptions,
) -> Result<SlotClassification> {
    let occupied = bookings_to_intervals(bookings)?;
    let free = free_intervals(&occupied, window);
    let candidates = generate_candidates(&free, duration, options.step);
    debug!(
        bookings = bookings.len(),
        free_intervals = free.len(),
        candidates = candidates.len(),
        "generated candidates"
    );

    let mut result = SlotClassification::default();
    for candidate in &candidates {
        let verdict = classify_slot(candidate, options);
        let start = clock::to_text(candidate.slot.start);
        trace!(slot = %start, kind = ?verdict.kind, "classified slot");

        match verdict.kind {
            SlotKind::Strict => result.strict.push(start),
            SlotKind::Soft => result.soft.push(start),
            SlotKind::Bad => {
                if let Some(reason) = verdict.reason {
                    result.bad_reasons.insert(start.clone(), reason);
                }
                result.bad.push(start);
            }
        }
    }
    Ok(result)
}

/// Classify every possible start time of a `duration`-minute appointment
/// against one practitioner's bookings for the day.
///
/// Bookings must not overlap one another; this is assumed, not checked.
pub fn classify_slots(
    duration: i64,
    bookings: &[Booking],
    options: &SlotOptions,
) -> Result<SlotClassification> {
    let window = validate(duration, options)?;
    classify_in_window(duration, bookings, window, options)
}

/// Classify slots for every practitioner in the request.
///
/// The response lists practitioners in the order they appear in the request.
/// The first invalid booking time fails the whole request.
pub fn classify_practitioners(request: &ClassifyRequest) -> Result<ClassifyResponse> {
    let window = validate(request.duration, &request.options)?;

    request
        .bookings_by_practitioner
        .iter()
        .map(|(id, bookings)| -> Result<(String, SlotClassification)> {
            let _span = debug_span!("practitioner", id = %id).entered();
            let result = classify_in_window(request.duration, bookings, window, &request.options)?;
            Ok((id.to_string(), result))
        })
        .collect()
}

/// The free intervals for one practitioner's day, as clock text.
pub fn free_intervals_for(bookings: &[Booking], options: &SlotOptions) -> Result<Vec<FreeInterval>> {
    let window = options.window()?;
    let occupied = bookings_to_intervals(bookings)?;

    Ok(free_intervals(&occupied, window)
        .into_iter()
        .map(|iv| FreeInterval {
            start: clock::to_text(iv.start),
            end: clock::to_text(iv.end),
            duration_minutes: iv.duration_minutes(),
        })
        .collect())
}

/// Group a flat booking list by practitioner, in order of first appearance.
pub fn group_by_practitioner(bookings: &[PractitionerBooking]) -> PractitionerMap<Vec<Booking>> {
    let mut grouped: PractitionerMap<Vec<Booking>> = PractitionerMap::new();
    for b in bookings {
        grouped
            .entry_or_default(&b.practitioner_id)
            .push(Booking::new(b.start.clone(), b.end.clone()));
    }
    grouped
}

/// Group a flat booking list and classify each practitioner with default options.
pub fn find_best_slots(request: &BestSlotsRequest) -> Result<Vec<BestSlots>> {
    let classify = ClassifyRequest {
        duration: request.duration,
        bookings_by_practitioner: group_by_practitioner(&request.bookings),
        options: SlotOptions::default(),
    };

    Ok(classify_practitioners(&classify)?
        .into_iter()
        .map(|(id, best_slots)| BestSlots {
            practitioner: PractitionerRef {
                practitioner_id: id,
            },
            best_slots,
        })
        .collect())
}
