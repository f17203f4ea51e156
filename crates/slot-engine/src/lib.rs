//! # slot-engine
//!
//! Deterministic appointment-slot classification for a practitioner's day.
//!
//! Given a practitioner's bookings for one day and a requested appointment
//! duration, the engine lists every time a new appointment could start and
//! classifies each one by the remainder it leaves in its free interval:
//! `strict` (fills an edge or leaves a whole number of sessions), `soft`
//! (usable but short remainder), or `bad` (strands unusable time, with a
//! reason).
//!
//! ## Quick start
//!
//! ```rust
//! use slot_engine::{classify_slots, Booking, SlotOptions};
//!
//! let bookings = vec![Booking::new("10:00", "11:00")];
//! let result = classify_slots(60, &bookings, &SlotOptions::default()).unwrap();
//!
//! assert_eq!(result.strict.first().map(String::as_str), Some("08:00"));
//! assert!(result.bad.iter().all(|s| result.bad_reasons.contains_key(s)));
//! ```
//!
//! ## Modules
//!
//! - [`clock`] — "HH:MM" text <-> minute-of-day
//! - [`intervals`] — bookings -> sorted occupied intervals
//! - [`freetime`] — occupied intervals -> free intervals within the day window
//! - [`candidates`] — sliding-window candidate slots
//! - [`classify`] — strict/soft/bad policy for one candidate
//! - [`aggregate`] — per-practitioner pipeline and grouping
//! - [`config`] — defaults and per-call options
//! - [`types`] — request/response shapes
//! - [`error`] — Error types

pub mod aggregate;
pub mod candidates;
pub mod classify;
pub mod clock;
pub mod config;
pub mod error;
pub mod freetime;
pub mod intervals;
pub mod types;

pub use aggregate::{
    classify_practitioners, classify_slots, find_best_slots, free_intervals_for,
    group_by_practitioner,
};
pub use classify::{classify_slot, Classification, SlotKind};
pub use config::{DayWindow, SlotOptions};
pub use error::SlotError;
pub use intervals::{Booking, Interval};
pub use types::{
    BestSlots, BestSlotsRequest, ClassifyRequest, ClassifyResponse, FreeInterval,
    PractitionerBooking, PractitionerMap, SlotClassification,
};
