//! WASM bindings for slot-engine.
//!
//! Exposes slot classification and free-interval computation to JavaScript via
//! `wasm-bindgen`. Requests and responses cross the boundary as JSON strings in
//! the same camelCase shape the engine uses everywhere else.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use slot_engine::{BestSlotsRequest, Booking, ClassifyRequest, SlotOptions};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// JSON helpers
// ---------------------------------------------------------------------------

fn parse_json<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid {} JSON: {}", what, e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn engine_error(e: slot_engine::SlotError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Classify candidate slots for every practitioner in a request.
///
/// `request_json` is `{duration, bookingsByPractitioner, minGap?, dayStart?,
/// dayEnd?, step?, sessionLengths?}`. Returns a JSON object keyed by
/// practitioner id, each value holding `strict`, `soft`, `bad`, and `badReasons`.
#[wasm_bindgen(js_name = "classifySlots")]
pub fn classify_slots(request_json: &str) -> Result<String, JsValue> {
    let request: ClassifyRequest = parse_json(request_json, "request")?;
    let response = slot_engine::classify_practitioners(&request).map_err(engine_error)?;
    to_json(&response)
}

/// Group a flat booking list by `therapistId` and classify each practitioner.
///
/// Returns a JSON array of `{therapist: {therapistId}, bestSlots}` in order of
/// first appearance.
#[wasm_bindgen(js_name = "findBestSlots")]
pub fn find_best_slots(request_json: &str) -> Result<String, JsValue> {
    let request: BestSlotsRequest = parse_json(request_json, "request")?;
    let response = slot_engine::find_best_slots(&request).map_err(engine_error)?;
    to_json(&response)
}

/// Free intervals left by a JSON array of `{start, end}` bookings.
///
/// `day_start` and `day_end` default to the engine's business day when omitted.
/// Returns a JSON array of `{start, end, durationMinutes}`.
#[wasm_bindgen(js_name = "findFreeIntervals")]
pub fn find_free_intervals(
    bookings_json: &str,
    day_start: Option<String>,
    day_end: Option<String>,
) -> Result<String, JsValue> {
    let bookings: Vec<Booking> = parse_json(bookings_json, "bookings")?;
    let mut options = SlotOptions::default();
    if let Some(start) = day_start {
        options.day_start = start;
    }
    if let Some(end) = day_end {
        options.day_end = end;
    }

    let free = slot_engine::free_intervals_for(&bookings, &options).map_err(engine_error)?;
    to_json(&free)
}
