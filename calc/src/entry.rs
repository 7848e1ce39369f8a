//! The entry buffer holds the number the user is typing, as text.
//!
//! The text only ever contains ASCII digits and at most one decimal
//! point.  The sign is kept separately in a flag, so toggling it
//! never changes the text.  Edits happen at the cursor, which may be
//! anywhere between the start and the end of the text (the
//! presentation layer moves it, for example in response to a click).
use core::time::Duration;

use tracing::{event, Level};

use base::prelude::*;

use super::command::Digit;

#[cfg(test)]
mod tests;

/// The maximum number of characters (digits plus the decimal point)
/// in the entry buffer.
pub const ENTRY_CAPACITY: usize = 18;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryBuffer {
    text: String,
    cursor: usize,
    period: Option<usize>,
    negative: bool,
    last_edit: Duration,
}

impl EntryBuffer {
    #[must_use]
    pub fn new() -> EntryBuffer {
        EntryBuffer::default()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.text.len() >= ENTRY_CAPACITY
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn has_period(&self) -> bool {
        self.period.is_some()
    }

    /// The index of the decimal point within the text, if there is one.
    #[must_use]
    pub fn period_position(&self) -> Option<usize> {
        self.period
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[must_use]
    pub fn last_edit(&self) -> Duration {
        self.last_edit
    }

    pub(crate) fn touch(&mut self, now: Duration) {
        self.last_edit = now;
    }

    fn fraction_digits(&self) -> usize {
        match self.period {
            Some(pos) => self.text.len() - pos - 1,
            None => 0,
        }
    }

    /// Inserts a digit at the cursor.  Returns `false` (and changes
    /// nothing) if the buffer is full, or if the digit would be a
    /// seventh digit after the decimal point.
    pub fn append_digit(&mut self, digit: Digit) -> bool {
        if self.is_full() {
            return false;
        }
        match self.period {
            Some(pos) if self.cursor > pos => {
                if self.fraction_digits() >= DECIMAL_DIGITS as usize {
                    event!(
                        Level::TRACE,
                        "ignoring digit {digit}: no more than {DECIMAL_DIGITS} fractional digits are kept"
                    );
                    return false;
                }
            }
            Some(pos) => {
                // The insertion is before the decimal point, which moves right.
                self.period = Some(pos + 1);
            }
            None => (),
        }
        self.text.insert(self.cursor, digit.as_ascii());
        self.cursor += 1;
        true
    }

    /// Inserts a decimal point at the cursor, unless there already is
    /// one or the buffer is full.
    pub fn append_period(&mut self) -> bool {
        if self.period.is_some() || self.is_full() {
            return false;
        }
        self.text.insert(self.cursor, '.');
        self.period = Some(self.cursor);
        self.cursor += 1;
        true
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let removed = self.text.remove(self.cursor);
        match self.period {
            Some(_) if removed == '.' => {
                self.period = None;
            }
            Some(pos) if pos > self.cursor => {
                self.period = Some(pos - 1);
            }
            _ => (),
        }
        true
    }

    pub fn toggle_sign(&mut self) {
        self.negative = !self.negative;
    }

    pub fn clear(&mut self) {
        *self = EntryBuffer::default();
    }

    /// Moves the cursor.  Positions beyond the end of the text are
    /// moved back to the end.  Returns `true` if the cursor moved.
    pub fn set_cursor(&mut self, position: usize) -> bool {
        let position = position.min(self.text.len());
        let moved = position != self.cursor;
        self.cursor = position;
        moved
    }

    /// Converts the text to a number.  Digits after the sixth
    /// fractional digit are ignored, and a value too large to
    /// represent becomes the infinity of the appropriate sign.
    /// Returns `None` if the buffer is empty.
    ///
    /// # Panics
    ///
    /// Panics if the text contains anything other than digits and a
    /// single decimal point, which would mean that the editing
    /// operations failed to maintain their invariants.
    #[must_use]
    pub fn to_number(&self) -> Option<FixedPoint> {
        if self.text.is_empty() {
            return None;
        }
        let mut whole: u64 = 0;
        let mut millionths: u32 = 0;
        let mut fraction_digits: u32 = 0;
        let mut seen_period = false;
        for ch in self.text.chars() {
            match (ch, ch.to_digit(10)) {
                ('.', _) if !seen_period => {
                    seen_period = true;
                }
                (_, Some(d)) if !seen_period => {
                    // At most ENTRY_CAPACITY digits, so this cannot overflow.
                    whole = whole * 10 + u64::from(d);
                }
                (_, Some(d)) => {
                    if fraction_digits < DECIMAL_DIGITS {
                        millionths = millionths * 10 + d;
                        fraction_digits += 1;
                    }
                }
                (other, None) => {
                    unreachable!("entry buffer contains unexpected character {other:?}")
                }
            }
        }
        millionths *= 10_u32.pow(DECIMAL_DIGITS - fraction_digits);
        Some(FixedPoint::from_parts(self.negative, whole, millionths))
    }

    /// Replaces the contents of the buffer with the text of a number,
    /// with the cursor at the end.  Digits are dropped from the end of
    /// the fraction if the text would not otherwise fit.  Returns
    /// `false` (leaving the buffer unchanged) if the value is one of
    /// the infinities, since those have no editable form.
    pub fn load(&mut self, n: FixedPoint) -> bool {
        let Value::Finite(n) = n.value() else {
            return false;
        };
        let rendered = n.to_string();
        let (negative, digits) = match rendered.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, rendered.as_str()),
        };
        // The whole part of any finite value has at most 13 digits,
        // so truncation only ever removes fractional digits.
        let mut text: &str = &digits[..digits.len().min(ENTRY_CAPACITY)];
        if text.contains('.') {
            text = text.trim_end_matches('0').trim_end_matches('.');
        }

        self.clear();
        self.text.push_str(text);
        self.cursor = self.text.len();
        self.period = self.text.find('.');
        self.negative = negative;
        true
    }
}
