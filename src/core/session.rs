//! State of one interactive calculator session.
use crate::core::conversion::{ConversionDirection, ConversionResult, convert};
use crate::core::history::ConversionHistory;
use tracing::debug;

/// Parses free-text user input into an amount.
///
/// Surrounding whitespace is ignored and the longest leading run that forms a
/// decimal number is used, so `"12.5 лв"` gives `12.5`. Input without any
/// numeric prefix gives NaN, which the engine reports as invalid.
pub fn parse_amount(text: &str) -> f64 {
    let text = text.trim();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

/// Amount text, selected direction, last result and history of a session.
#[derive(Debug, Default)]
pub struct Session {
    amount: String,
    direction: ConversionDirection,
    last_result: Option<ConversionResult>,
    history: ConversionHistory,
}

impl Session {
    pub fn new(direction: ConversionDirection) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn set_amount(&mut self, text: &str) {
        self.amount = text.to_string();
    }

    pub fn direction(&self) -> ConversionDirection {
        self.direction
    }

    /// Selects a direction. Any displayed result belongs to the previous
    /// direction and is discarded.
    pub fn set_direction(&mut self, direction: ConversionDirection) {
        if direction != self.direction {
            debug!(?direction, "Direction changed");
        }
        self.direction = direction;
        self.last_result = None;
    }

    pub fn swap_direction(&mut self) {
        self.set_direction(self.direction.reversed());
    }

    pub fn last_result(&self) -> Option<&ConversionResult> {
        self.last_result.as_ref()
    }

    pub fn history(&self) -> &ConversionHistory {
        &self.history
    }

    /// Converts the current amount text. Only valid results enter history.
    pub fn submit(&mut self) -> &ConversionResult {
        let result = convert(parse_amount(&self.amount), self.direction);
        if result.is_valid() {
            self.history.push(result.clone());
        }
        self.last_result.insert(result)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
