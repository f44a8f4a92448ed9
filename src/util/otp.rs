//! Four-slot OTP entry model backing the verification form.
//!
//! Each slot holds one digit or nothing. The model is UI-local and is
//! discarded after every submission attempt.

#[cfg(test)]
#[path = "otp_test.rs"]
mod otp_test;

use super::validate::OTP_LEN;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OtpEntry {
    slots: [Option<u8>; OTP_LEN],
}

impl OtpEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply raw input for one slot.
    ///
    /// Empty input clears the slot; otherwise the last typed character wins
    /// when it is a digit. Returns `true` when the slot now holds a digit, so
    /// the caller can move focus forward.
    pub fn set_slot(&mut self, index: usize, input: &str) -> bool {
        let Some(slot) = self.slots.get_mut(index) else {
            return false;
        };
        match input.chars().last() {
            None => {
                *slot = None;
                false
            }
            Some(c) => match c.to_digit(10) {
                Some(d) => {
                    *slot = u8::try_from(d).ok();
                    slot.is_some()
                }
                None => false,
            },
        }
    }

    /// Apply raw input typed or pasted into slot `index`.
    ///
    /// Input holding a whole code is spread from the first slot, since a
    /// paste lands in a single input. Returns the slot that should take
    /// focus next, if any.
    pub fn apply_input(&mut self, index: usize, raw: &str) -> Option<usize> {
        if raw.chars().filter(char::is_ascii_digit).count() >= OTP_LEN {
            self.fill(raw);
            return Some(OTP_LEN - 1);
        }
        let advanced = self.set_slot(index, raw);
        (advanced && index + 1 < OTP_LEN).then_some(index + 1)
    }

    /// Distribute pasted text across the slots from the first one.
    pub fn fill(&mut self, text: &str) {
        let digits = text.chars().filter_map(|c| c.to_digit(10)).filter_map(|d| u8::try_from(d).ok());
        for (slot, digit) in self.slots.iter_mut().zip(digits) {
            *slot = Some(digit);
        }
    }

    pub fn slot(&self, index: usize) -> Option<u8> {
        self.slots.get(index).copied().flatten()
    }

    /// Display text for one slot input.
    pub fn slot_text(&self, index: usize) -> String {
        self.slot(index).map(|d| d.to_string()).unwrap_or_default()
    }

    /// Whatever has been typed so far, skipping blanks.
    pub fn partial(&self) -> String {
        self.slots.iter().flatten().map(u8::to_string).collect()
    }

    /// The full code, only once every slot holds a digit.
    pub fn code(&self) -> Option<String> {
        if self.slots.iter().all(Option::is_some) {
            Some(self.partial())
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.slots = [None; OTP_LEN];
    }
}
