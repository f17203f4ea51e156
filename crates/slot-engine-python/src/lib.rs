//! # slot-engine-python
//!
//! Python bindings for slot-engine, built with PyO3.
//!
//! Exposes the following functions to Python as the `slotfinder` module:
//!
//! - `classify_slots(duration, bookings_json, ...)` -- one practitioner's day -> JSON classification
//! - `classify_request(request_json)` -- `{duration, bookingsByPractitioner}` -> JSON response
//! - `find_best_slots(request_json)` -- flat store bookings -> JSON list per practitioner

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use slot_engine::{BestSlotsRequest, Booking, ClassifyRequest, SlotOptions};

fn value_error(e: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Classify every candidate start time for one practitioner's day.
///
/// Args:
///     duration: Requested appointment length in minutes.
///     bookings_json: JSON array of `{"start": "HH:MM", "end": "HH:MM"}` objects.
///     min_gap: Minimum bookable remainder in minutes (default 60).
///     day_start: Start of the bookable day (default "08:00").
///     day_end: End of the bookable day (default "18:00").
///     step: Minutes between candidate starts (default 15).
///
/// Returns:
///     A JSON string `{"strict": [...], "soft": [...], "bad": [...], "badReasons": {...}}`.
///
/// Raises:
///     ValueError: If the JSON, a clock time, the duration, or the window is invalid.
#[pyfunction]
#[pyo3(signature = (duration, bookings_json, min_gap=None, day_start=None, day_end=None, step=None))]
fn classify_slots(
    duration: i64,
    bookings_json: &str,
    min_gap: Option<i64>,
    day_start: Option<String>,
    day_end: Option<String>,
    step: Option<i64>,
) -> PyResult<String> {
    let bookings: Vec<Booking> = serde_json::from_str(bookings_json).map_err(value_error)?;

    let defaults = SlotOptions::default();
    let options = SlotOptions {
        min_gap: min_gap.unwrap_or(defaults.min_gap),
        day_start: day_start.unwrap_or(defaults.day_start),
        day_end: day_end.unwrap_or(defaults.day_end),
        step: step.unwrap_or(defaults.step),
        session_lengths: defaults.session_lengths,
    };

    let result = slot_engine::classify_slots(duration, &bookings, &options).map_err(value_error)?;
    serde_json::to_string(&result).map_err(value_error)
}

/// Classify slots for every practitioner in a JSON request.
///
/// Args:
///     request_json: `{"duration": n, "bookingsByPractitioner": {id: [...]}}` plus
///         optional `minGap`, `dayStart`, `dayEnd`, `step`, `sessionLengths`.
///
/// Returns:
///     A JSON object keyed by practitioner id, in request order.
///
/// Raises:
///     ValueError: If the request is malformed or fails validation.
#[pyfunction]
fn classify_request(request_json: &str) -> PyResult<String> {
    let request: ClassifyRequest = serde_json::from_str(request_json).map_err(value_error)?;
    let response = slot_engine::classify_practitioners(&request).map_err(value_error)?;
    serde_json::to_string(&response).map_err(value_error)
}

/// Group store bookings by `therapistId` and classify each practitioner.
///
/// Args:
///     request_json: `{"duration": n, "bookings": [{"therapistId", "start", "end"}]}`.
///
/// Returns:
///     A JSON array of `{"therapist": {"therapistId"}, "bestSlots": {...}}`.
///
/// Raises:
///     ValueError: If the request is malformed or fails validation.
#[pyfunction]
fn find_best_slots(request_json: &str) -> PyResult<String> {
    let request: BestSlotsRequest = serde_json::from_str(request_json).map_err(value_error)?;
    let response = slot_engine::find_best_slots(&request).map_err(value_error)?;
    serde_json::to_string(&response).map_err(value_error)
}

/// The `slotfinder` Python module, implemented in Rust via PyO3.
#[pymodule]
fn slotfinder(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(classify_slots, m)?)?;
    m.add_function(wrap_pyfunction!(classify_request, m)?)?;
    m.add_function(wrap_pyfunction!(find_best_slots, m)?)?;
    Ok(())
}
