//! Default scheduling policy values and the per-call option set.
//!
//! The constants encode assumptions about how sessions are booked in practice:
//! sessions run 60 or 90 minutes, the grid advances in quarter hours, and a
//! leftover shorter than an hour is hard to sell.

use serde::{Deserialize, Serialize};

use crate::clock;
use crate::error::{Result, SlotError};

/// Minimum remainder, in minutes, considered long enough to book.
pub const DEFAULT_MIN_GAP: i64 = 60;

/// Distance between consecutive candidate start times.
pub const DEFAULT_STEP: i64 = 15;

/// Canonical session lengths; a remainder that is a multiple of one is "aligned".
pub const DEFAULT_SESSION_LENGTHS: [i64; 2] = [60, 90];

pub const DEFAULT_DAY_START: &str = "08:00";
pub const DEFAULT_DAY_END: &str = "18:00";

/// Tunable knobs for one classification call.
///
/// Every field has a default, so callers can override any subset. On the wire
/// the fields are camelCase (`minGap`, `dayStart`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlotOptions {
    pub min_gap: i64,
    pub day_start: String,
    pub day_end: String,
    pub step: i64,
    pub session_lengths: Vec<i64>,
}

impl Default for SlotOptions {
    fn default() -> Self {
        Self {
            min_gap: DEFAULT_MIN_GAP,
            day_start: DEFAULT_DAY_START.to_string(),
            day_end: DEFAULT_DAY_END.to_string(),
            step: DEFAULT_STEP,
            session_lengths: DEFAULT_SESSION_LENGTHS.to_vec(),
        }
    }
}

/// The bounds of the bookable day in minutes, with `start < end` guaranteed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    start: i64,
    end: i64,
}

impl DayWindow {
    pub fn new(start: i64, end: i64) -> Result<Self> {
        if start >= end {
            return Err(SlotError::InvalidWindow {
                start: clock::to_text(start),
                end: clock::to_text(end),
            });
        }
        Ok(Self { start, end })
    }

    /// Parse both bounds from "HH:MM" text.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(clock::to_minutes(start)?, clock::to_minutes(end)?)
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }
}

impl SlotOptions {
    /// Validate the options and resolve the day window.
    ///
    /// Checked before any candidate is generated: a zero step would never
    /// advance, and a zero session length has no multiples to align to.
    pub fn window(&self) -> Result<DayWindow> {
        if self.step <= 0 {
            return Err(SlotError::InvalidStep(self.step));
        }
        if let Some(&bad) = self.session_lengths.iter().find(|&&len| len <= 0) {
            return Err(SlotError::InvalidSessionLength(bad));
        }
        DayWindow::parse(&self.day_start, &self.day_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_policy() {
        let opts = SlotOptions::default();
        assert_eq!(opts.min_gap, 60);
        assert_eq!(opts.step, 15);
        assert_eq!(opts.session_lengths, vec![60, 90]);
        assert_eq!(opts.day_start, "08:00");
        assert_eq!(opts.day_end, "18:00");
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let opts: SlotOptions = serde_json::from_str(r#"{"minGap":30,"dayEnd":"17:00"}"#).unwrap();
        assert_eq!(opts.min_gap, 30);
        assert_eq!(opts.day_end, "17:00");
        assert_eq!(opts.day_start, "08:00");
        assert_eq!(opts.step, 15);
    }

    #[test]
    fn inverted_window_is_rejected() {
        let err = DayWindow::parse("18:00", "08:00").unwrap_err();
        assert_eq!(
            err,
            SlotError::InvalidWindow {
                start: "18:00".to_string(),
                end: "08:00".to_string()
            }
        );
    }

    #[test]
    fn empty_window_is_rejected() {
        assert!(DayWindow::parse("09:00", "09:00").is_err());
    }

    #[test]
    fn zero_step_is_rejected() {
        let opts = SlotOptions {
            step: 0,
            ..SlotOptions::default()
        };
        assert_eq!(opts.window().unwrap_err(), SlotError::InvalidStep(0));
    }

    #[test]
    fn non_positive_session_length_is_rejected() {
        let opts = SlotOptions {
            session_lengths: vec![60, -30],
            ..SlotOptions::default()
        };
        assert_eq!(
            opts.window().unwrap_err(),
            SlotError::InvalidSessionLength(-30)
        );
    }
}
