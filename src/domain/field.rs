//! Numeric input fields: parsing, bounds and blur normalisation.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::domain::clock::pad_two;

/// The three numeric fields of the timer form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum FieldRole {
    Hours,
    Minutes,
    Seconds,
}

/// Inclusive bounds of a numeric field. `max: None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldBounds {
    #[serde(default)]
    pub min: u64,
    #[serde(default)]
    pub max: Option<u64>,
}

impl FieldBounds {
    pub fn new(min: u64, max: Option<u64>) -> Self {
        Self { min, max }
    }

    /// Whether the bounds describe a non-empty range.
    pub fn is_valid(&self) -> bool {
        self.max.map_or(true, |max| max >= self.min)
    }

    pub fn clamp(&self, value: i64) -> u64 {
        let value = u64::try_from(value).unwrap_or(0).max(self.min);
        match self.max {
            Some(max) => value.min(max),
            None => value,
        }
    }
}

/// Parse the leading integer of a field value.
///
/// Leading whitespace is skipped, an optional sign is accepted, and digits are
/// read up to the first non-digit: `"12abc"` is 12, `" -3"` is -3. Returns
/// `None` when no digit follows. Values too large for `i64` saturate.
pub fn parse_field(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for digit in digits.chars().map_while(|c| c.to_digit(10)) {
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(digit));
    }

    seen_digit.then_some(if negative { -value } else { value })
}

/// Value of a field at start time: unparseable or negative input counts as 0.
pub fn field_value(text: &str) -> u64 {
    parse_field(text)
        .and_then(|value| u64::try_from(value).ok())
        .unwrap_or(0)
}

/// Normalise a field value when it loses focus.
///
/// The value is parsed, clamped to `bounds`, replaced by `bounds.min` when
/// unparseable, and rewritten zero-padded to two digits.
pub fn pad_input(text: &str, bounds: FieldBounds) -> String {
    let value = match parse_field(text) {
        Some(value) => bounds.clamp(value),
        None => bounds.min,
    };
    pad_two(value)
}
