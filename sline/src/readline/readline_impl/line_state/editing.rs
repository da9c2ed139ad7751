// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

use super::{core::LineState, render::redraw_tail};
use crate::{BACKSPACE, CLEAR_TO_EOL};
use std::io::{self, Write};

impl LineState {
    /// Inserts `byte` at the cursor and advances past it. Dropped when the buffer is
    /// full.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn insert(&mut self, byte: u8, term: &mut dyn Write) -> io::Result<()> {
        if self.is_full() {
            return Ok(());
        }

        // Within the reserved capacity, so this only shifts the suffix.
        self.line.insert(self.cursor, byte);
        self.cursor += 1;
        self.debug_check_invariants();

        term.write_all(&[byte])?;
        let suffix = &self.line[self.cursor..];
        if suffix.is_empty() {
            return Ok(());
        }
        redraw_tail(term, suffix)
    }

    /// Removes the byte left of the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn delete_backward(&mut self, term: &mut dyn Write) -> io::Result<()> {
        if self.cursor == 0 {
            return Ok(());
        }
        self.cursor -= 1;
        term.write_all(BACKSPACE)?;
        self.delete_forward(term)
    }

    /// Removes the byte under the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn delete_forward(&mut self, term: &mut dyn Write) -> io::Result<()> {
        if self.cursor == self.line.len() {
            return Ok(());
        }
        self.line.remove(self.cursor);
        self.debug_check_invariants();
        redraw_tail(term, &self.line[self.cursor..])
    }

    /// Replaces the whole line with `text`, truncated to capacity, and leaves the cursor
    /// at its end. Used to recall history.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn replace_with(&mut self, text: &[u8], term: &mut dyn Write) -> io::Result<()> {
        self.move_home(term)?;
        self.line.clear();
        let kept = text.len().min(self.capacity);
        self.line.extend_from_slice(&text[..kept]);
        self.cursor = self.line.len();
        self.debug_check_invariants();

        term.write_all(CLEAR_TO_EOL)?;
        term.write_all(&self.line)
    }

    /// Empties the line and erases it from the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn clear(&mut self, term: &mut dyn Write) -> io::Result<()> {
        self.move_home(term)?;
        self.line.clear();
        term.write_all(CLEAR_TO_EOL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StdoutMock;
    use pretty_assertions::assert_eq;

    fn type_bytes(line_state: &mut LineState, term: &mut dyn Write, bytes: &[u8]) {
        for &byte in bytes {
            line_state.insert(byte, term).unwrap();
        }
    }

    #[test]
    fn test_insert_at_end_only_echoes() {
        let mut stdout_mock = StdoutMock::default();
        let mut line_state = LineState::try_new(64, 0).unwrap();
        type_bytes(&mut line_state, &mut stdout_mock, b"1 2 +");
        assert_eq!(line_state.line(), b"1 2 +");
        assert_eq!(line_state.cursor(), 5);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "1 2 +");
    }

    #[test]
    fn test_insert_in_middle_redraws_suffix() {
        let mut stdout_mock = StdoutMock::default();
        let mut line_state = LineState::try_new(64, 0).unwrap();
        type_bytes(&mut line_state, &mut stdout_mock, b"abc");
        line_state.move_left(&mut stdout_mock).unwrap();
        line_state.move_left(&mut stdout_mock).unwrap();
        stdout_mock.clear();

        line_state.insert(b'X', &mut stdout_mock).unwrap();

        assert_eq!(line_state.line(), b"aXbc");
        assert_eq!(line_state.cursor(), 2);
        assert_eq!(
            stdout_mock.get_copy_of_buffer(),
            b"X\x1b[0K\x1b7bc\x1b8".to_vec()
        );
    }

    #[test]
    fn test_insert_when_full_is_dropped() {
        let mut stdout_mock = StdoutMock::default();
        let mut line_state = LineState::try_new(3, 0).unwrap();
        type_bytes(&mut line_state, &mut stdout_mock, b"12345");
        assert_eq!(line_state.line(), b"123");
        assert_eq!(line_state.cursor(), 3);

        // Full with the cursor in the middle is also a no-op.
        line_state.move_home(&mut stdout_mock).unwrap();
        stdout_mock.clear();
        line_state.insert(b'9', &mut stdout_mock).unwrap();
        assert_eq!(line_state.line(), b"123");
        assert_eq!(line_state.cursor(), 0);
        assert_eq!(stdout_mock.get_copy_of_buffer(), b"".to_vec());
    }

    #[test]
    fn test_delete_forward_in_middle() {
        let mut stdout_mock = StdoutMock::default();
        let mut line_state = LineState::try_new(64, 0).unwrap();
        type_bytes(&mut line_state, &mut stdout_mock, b"abc");
        line_state.move_home(&mut stdout_mock).unwrap();
        line_state.move_right(&mut stdout_mock).unwrap();
        stdout_mock.clear();

        line_state.delete_forward(&mut stdout_mock).unwrap();

        assert_eq!(line_state.line(), b"ac");
        assert_eq!(line_state.cursor(), 1);
        assert_eq!(stdout_mock.get_copy_of_buffer(), b"\x1b[0K\x1b7c\x1b8".to_vec());
    }

    #[test]
    fn test_delete_forward_at_end_is_noop() {
        let mut stdout_mock = StdoutMock::default();
        let mut line_state = LineState::try_new(64, 0).unwrap();
        type_bytes(&mut line_state, &mut stdout_mock, b"ab");
        stdout_mock.clear();
        line_state.delete_forward(&mut stdout_mock).unwrap();
        assert_eq!(line_state.line(), b"ab");
        assert_eq!(stdout_mock.get_copy_of_buffer(), b"".to_vec());
    }

    #[test]
    fn test_delete_backward_at_end() {
        let mut stdout_mock = StdoutMock::default();
        let mut line_state = LineState::try_new(64, 0).unwrap();
        type_bytes(&mut line_state, &mut stdout_mock, b"12");
        stdout_mock.clear();

        line_state.delete_backward(&mut stdout_mock).unwrap();

        assert_eq!(line_state.line(), b"1");
        assert_eq!(line_state.cursor(), 1);
        assert_eq!(stdout_mock.get_copy_of_buffer(), b"\x08\x1b[0K".to_vec());
    }

    #[test]
    fn test_delete_backward_at_start_is_noop() {
        let mut stdout_mock = StdoutMock::default();
        let mut line_state = LineState::try_new(64, 0).unwrap();
        type_bytes(&mut line_state, &mut stdout_mock, b"12");
        line_state.move_home(&mut stdout_mock).unwrap();
        stdout_mock.clear();
        line_state.delete_backward(&mut stdout_mock).unwrap();
        assert_eq!(line_state.line(), b"12");
        assert_eq!(stdout_mock.get_copy_of_buffer(), b"".to_vec());
    }

    #[test]
    fn test_insert_then_delete_backward_restores_line() {
        let mut stdout_mock = StdoutMock::default();
        let mut line_state = LineState::try_new(64, 0).unwrap();
        type_bytes(&mut line_state, &mut stdout_mock, b"3 4 *");
        line_state.move_left(&mut stdout_mock).unwrap();
        line_state.move_left(&mut stdout_mock).unwrap();
        let before = line_state.clone();

        line_state.insert(b'5', &mut stdout_mock).unwrap();
        line_state.delete_backward(&mut stdout_mock).unwrap();

        assert_eq!(line_state, before);
    }

    #[test]
    fn test_replace_with_truncates_to_capacity() {
        let mut stdout_mock = StdoutMock::default();
        let mut line_state = LineState::try_new(4, 0).unwrap();
        type_bytes(&mut line_state, &mut stdout_mock, b"ab");
        stdout_mock.clear();

        line_state.replace_with(b"123456", &mut stdout_mock).unwrap();

        assert_eq!(line_state.line(), b"1234");
        assert_eq!(line_state.cursor(), 4);
        assert_eq!(
            stdout_mock.get_copy_of_buffer(),
            b"\x1b[2D\x1b[0K1234".to_vec()
        );
    }

    #[test]
    fn test_clear_erases_line() {
        let mut stdout_mock = StdoutMock::default();
        let mut line_state = LineState::try_new(64, 0).unwrap();
        type_bytes(&mut line_state, &mut stdout_mock, b"9 sqrt");
        line_state.move_left(&mut stdout_mock).unwrap();
        stdout_mock.clear();

        line_state.clear(&mut stdout_mock).unwrap();

        assert!(line_state.is_empty());
        assert_eq!(line_state.cursor(), 0);
        assert_eq!(stdout_mock.get_copy_of_buffer(), b"\x1b[5D\x1b[0K".to_vec());
    }
}
