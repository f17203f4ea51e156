//! Conversion between "HH:MM" clock text and minute-of-day integers.

use chrono::{NaiveTime, Timelike};

use crate::error::{Result, SlotError};

/// Parse "HH:MM" into minutes since midnight (`0..=1439`).
///
/// Both fields must be exactly two digits; `"8:05"` and `" 08:05"` are rejected.
pub fn to_minutes(text: &str) -> Result<i64> {
    if !is_zero_padded(text) {
        return Err(SlotError::Parse {
            input: text.to_string(),
            reason: "expected zero-padded HH:MM".to_string(),
        });
    }
    let time = NaiveTime::parse_from_str(text, "%H:%M").map_err(|e| SlotError::Parse {
        input: text.to_string(),
        reason: e.to_string(),
    })?;
    Ok(i64::from(time.hour() * 60 + time.minute()))
}

/// Format minutes since midnight as zero-padded "HH:MM".
pub fn to_text(minutes: i64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn is_zero_padded(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 5
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}
