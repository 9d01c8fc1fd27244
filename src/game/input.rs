//! Guess entry buffer
//!
//! Digits are typed one at a time into fixed slots. The cursor ranges over
//! `0..=len`, where `len` means every slot has been filled.

use crate::core::{Code, Difficulty, Digit};
use std::fmt;

/// Rejected keypad input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    DuplicateDigit(Digit),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateDigit(_) => write!(f, "Duplicate digits not allowed in Hard mode!"),
        }
    }
}

impl std::error::Error for InputError {}

/// A guess under construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessInput {
    difficulty: Difficulty,
    slots: Vec<Option<Digit>>,
    cursor: usize,
}

impl GuessInput {
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            slots: vec![None; difficulty.code_length()],
            cursor: 0,
        }
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<Digit>] {
        &self.slots
    }

    /// Cursor position; equals `len()` once the last slot is filled
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Slot that currently has focus (the last one when all are filled)
    #[must_use]
    pub fn focused(&self) -> usize {
        self.cursor.min(self.len().saturating_sub(1))
    }

    /// Put a digit in the slot under the cursor and advance
    ///
    /// Does nothing once the cursor is past the last slot.
    ///
    /// # Errors
    /// In Hard mode, returns `InputError::DuplicateDigit` if the digit already
    /// sits in a different slot, even when every slot is filled.
    pub fn enter(&mut self, digit: Digit) -> Result<(), InputError> {
        if !self.difficulty.allows_duplicates() {
            let elsewhere = self
                .slots
                .iter()
                .enumerate()
                .any(|(i, slot)| i != self.cursor && *slot == Some(digit));
            if elsewhere {
                return Err(InputError::DuplicateDigit(digit));
            }
        }

        if self.cursor >= self.len() {
            return Ok(());
        }

        self.slots[self.cursor] = Some(digit);
        self.cursor += 1;
        Ok(())
    }

    /// Clear the focused slot, or step back and clear the previous one if it is empty
    pub fn backspace(&mut self) {
        let focus = self.focused();

        if self.slots[focus].is_some() {
            self.slots[focus] = None;
            self.cursor = focus;
        } else if focus > 0 {
            self.cursor = focus - 1;
            self.slots[self.cursor] = None;
        } else {
            self.cursor = 0;
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.focused().saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor + 1 < self.len() {
            self.cursor += 1;
        }
    }

    /// Move the cursor to `index`; out-of-range indices are ignored
    pub fn focus(&mut self, index: usize) {
        if index < self.len() {
            self.cursor = index;
        }
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.cursor = 0;
    }

    /// The finished guess, or `None` while any slot is empty
    #[must_use]
    pub fn to_code(&self) -> Option<Code> {
        self.slots
            .iter()
            .copied()
            .collect::<Option<Vec<_>>>()
            .map(Code::new)
    }

    /// Text form with `_` for empty slots
    #[must_use]
    pub fn render(&self) -> String {
        self.slots
            .iter()
            .map(|slot| slot.map_or('_', Digit::to_char))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    fn typed(difficulty: Difficulty, digits: &[u8]) -> GuessInput {
        let mut input = GuessInput::new(difficulty);
        for &value in digits {
            input.enter(d(value)).unwrap();
        }
        input
    }

    #[test]
    fn new_input_is_empty() {
        let input = GuessInput::new(Difficulty::Hard);
        assert_eq!(input.len(), 4);
        assert_eq!(input.cursor(), 0);
        assert!(input.is_empty());
        assert!(!input.is_complete());
        assert_eq!(input.render(), "____");
        assert!(input.to_code().is_none());
    }

    #[test]
    fn enter_fills_and_advances() {
        let input = typed(Difficulty::Hard, &[1, 2, 3, 4]);
        assert_eq!(input.cursor(), 4);
        assert!(input.is_complete());
        assert_eq!(input.render(), "1234");
        assert_eq!(input.to_code(), Some(Code::parse("1234").unwrap()));
        assert_eq!(input.focused(), 3);
    }

    #[test]
    fn enter_past_end_is_ignored() {
        let mut input = typed(Difficulty::Easy, &[1, 2, 3]);
        input.enter(d(9)).unwrap();
        assert_eq!(input.render(), "123");
    }

    #[test]
    fn hard_rejects_duplicate_elsewhere() {
        let mut input = typed(Difficulty::Hard, &[1, 2]);
        assert_eq!(input.enter(d(1)), Err(InputError::DuplicateDigit(d(1))));
        assert_eq!(input.render(), "12__");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn hard_reports_duplicate_when_full() {
        let mut input = typed(Difficulty::Hard, &[1, 2, 3, 4]);
        assert_eq!(input.enter(d(2)), Err(InputError::DuplicateDigit(d(2))));
        assert_eq!(input.enter(d(9)), Ok(()));
        assert_eq!(input.render(), "1234");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn hard_allows_rewriting_same_slot() {
        let mut input = typed(Difficulty::Hard, &[1, 2, 3]);
        input.focus(1);
        input.enter(d(2)).unwrap();
        assert_eq!(input.render(), "123_");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn easy_allows_duplicates() {
        let input = typed(Difficulty::Easy, &[5, 5, 5]);
        assert_eq!(input.render(), "555");
    }

    #[test]
    fn backspace_when_full_clears_last() {
        let mut input = typed(Difficulty::Hard, &[1, 2, 3, 4]);
        input.backspace();
        assert_eq!(input.render(), "123_");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn backspace_on_empty_slot_steps_back() {
        let mut input = typed(Difficulty::Hard, &[1, 2]);
        input.backspace();
        assert_eq!(input.render(), "1___");
        assert_eq!(input.cursor(), 1);
        input.backspace();
        assert_eq!(input.render(), "____");
        assert_eq!(input.cursor(), 0);
        input.backspace();
        assert_eq!(input.render(), "____");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn backspace_on_filled_focus_stays() {
        let mut input = typed(Difficulty::Hard, &[1, 2, 3]);
        input.focus(1);
        input.backspace();
        assert_eq!(input.render(), "1_3_");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn cursor_moves_are_clamped() {
        let mut input = GuessInput::new(Difficulty::Hard);
        input.move_left();
        assert_eq!(input.cursor(), 0);
        for _ in 0..10 {
            input.move_right();
        }
        assert_eq!(input.cursor(), 3);
        input.move_left();
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn move_left_from_full_goes_to_second_last() {
        let mut input = typed(Difficulty::Easy, &[1, 2, 3]);
        input.move_left();
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn focus_out_of_range_is_ignored() {
        let mut input = GuessInput::new(Difficulty::Easy);
        input.focus(2);
        assert_eq!(input.cursor(), 2);
        input.focus(3);
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn clear_resets() {
        let mut input = typed(Difficulty::Hard, &[4, 3, 2, 1]);
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn partial_input_with_gap_is_not_complete() {
        let mut input = typed(Difficulty::Hard, &[1, 2, 3, 4]);
        input.focus(1);
        input.backspace();
        assert!(!input.is_complete());
        assert!(input.to_code().is_none());
    }
}
