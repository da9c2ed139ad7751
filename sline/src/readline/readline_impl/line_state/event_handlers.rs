// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

use super::core::LineState;
use crate::{History, KeyEvent, NEWLINE};
use std::io::{self, Write};

/// A key that ends the line read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadlineEvent {
    /// Enter. The line is complete.
    Submit,
    /// Ctrl+D or Ctrl+C.
    EndOfInput,
}

impl LineState {
    /// Applies `key` to the line and writes the matching terminal output. The writer is
    /// not flushed.
    ///
    /// Returns `Some` for a key that ends the line read. Both print a newline first, so
    /// whatever is written next starts on a fresh row.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn apply_key_event<const N: usize>(
        &mut self,
        key: KeyEvent,
        term: &mut dyn Write,
        history: &History<N>,
    ) -> io::Result<Option<ReadlineEvent>> {
        match key {
            KeyEvent::Char(byte) => handle_char(self, byte, term, history),
            KeyEvent::Backspace => handle_backspace(self, term, history),
            KeyEvent::Delete => handle_delete(self, term, history),
            KeyEvent::Up => handle_up(self, term, history),
            KeyEvent::Down => handle_down(self, term, history),
            KeyEvent::Left => self.move_left(term).map(|()| None),
            KeyEvent::Right => self.move_right(term).map(|()| None),
            KeyEvent::Home => self.move_home(term).map(|()| None),
            KeyEvent::End => self.move_end(term).map(|()| None),
            KeyEvent::Submit => handle_line_end(term, ReadlineEvent::Submit),
            KeyEvent::EndOfInput => handle_line_end(term, ReadlineEvent::EndOfInput),
            KeyEvent::Unrecognized => Ok(None),
        }
    }
}

// Editing keys leave history navigation, so the next Up recalls the newest entry.
fn handle_char<const N: usize>(
    line_state: &mut LineState,
    byte: u8,
    term: &mut dyn Write,
    history: &History<N>,
) -> io::Result<Option<ReadlineEvent>> {
    line_state.insert(byte, term)?;
    line_state.history_nav = history.len();
    Ok(None)
}

fn handle_backspace<const N: usize>(
    line_state: &mut LineState,
    term: &mut dyn Write,
    history: &History<N>,
) -> io::Result<Option<ReadlineEvent>> {
    line_state.delete_backward(term)?;
    line_state.history_nav = history.len();
    Ok(None)
}

fn handle_delete<const N: usize>(
    line_state: &mut LineState,
    term: &mut dyn Write,
    history: &History<N>,
) -> io::Result<Option<ReadlineEvent>> {
    line_state.delete_forward(term)?;
    line_state.history_nav = history.len();
    Ok(None)
}

// Navigate to older history entry. Stays on the oldest once there.
fn handle_up<const N: usize>(
    line_state: &mut LineState,
    term: &mut dyn Write,
    history: &History<N>,
) -> io::Result<Option<ReadlineEvent>> {
    line_state.history_nav = line_state.history_nav.saturating_sub(1);
    if let Some(entry) = history.get(line_state.history_nav) {
        line_state.replace_with(entry.as_bytes(), term)?;
    }
    Ok(None)
}

// Navigate to newer history entry. Past the newest, the prompt is blank.
fn handle_down<const N: usize>(
    line_state: &mut LineState,
    term: &mut dyn Write,
    history: &History<N>,
) -> io::Result<Option<ReadlineEvent>> {
    line_state.history_nav += 1;
    if line_state.history_nav >= history.len() {
        line_state.history_nav = history.len();
        return line_state.clear(term).map(|()| None);
    }
    if let Some(entry) = history.get(line_state.history_nav) {
        line_state.replace_with(entry.as_bytes(), term)?;
    }
    Ok(None)
}

fn handle_line_end(
    term: &mut dyn Write,
    event: ReadlineEvent,
) -> io::Result<Option<ReadlineEvent>> {
    term.write_all(NEWLINE)?;
    Ok(Some(event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StdoutMock;
    use pretty_assertions::assert_eq;

    fn history_of(lines: &[&str]) -> History<3> {
        let mut history = History::<3>::new();
        for line in lines {
            history.append(line.as_bytes()).unwrap();
        }
        history
    }

    fn apply_all<const N: usize>(
        line_state: &mut LineState,
        keys: &[KeyEvent],
        term: &mut dyn Write,
        history: &History<N>,
    ) -> Option<ReadlineEvent> {
        let mut last = None;
        for &key in keys {
            last = line_state.apply_key_event(key, term, history).unwrap();
        }
        last
    }

    #[test]
    fn test_add_char() {
        let mut stdout_mock = StdoutMock::default();
        let history = history_of(&[]);
        let mut line_state = LineState::try_new(64, history.len()).unwrap();

        let it = line_state.apply_key_event(KeyEvent::Char(b'7'), &mut stdout_mock, &history);

        assert!(matches!(it, Ok(None)));
        assert_eq!(line_state.line(), b"7");
    }

    #[test]
    fn test_edit_in_the_middle() {
        let mut stdout_mock = StdoutMock::default();
        let history = history_of(&[]);
        let mut line_state = LineState::try_new(64, history.len()).unwrap();

        apply_all(
            &mut line_state,
            &[
                KeyEvent::Char(b'a'),
                KeyEvent::Char(b'b'),
                KeyEvent::Char(b'c'),
                KeyEvent::Left,
                KeyEvent::Left,
                KeyEvent::Char(b'X'),
            ],
            &mut stdout_mock,
            &history,
        );

        assert_eq!(line_state.line(), b"aXbc");
        assert_eq!(line_state.cursor(), 2);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string_strip_ansi(), "abcXbc");
    }

    #[test]
    fn test_submit_and_end_of_input_write_newline() {
        let mut stdout_mock = StdoutMock::default();
        let history = history_of(&[]);
        let mut line_state = LineState::try_new(64, history.len()).unwrap();

        let submit = apply_all(
            &mut line_state,
            &[KeyEvent::Char(b'1'), KeyEvent::Submit],
            &mut stdout_mock,
            &history,
        );
        assert_eq!(submit, Some(ReadlineEvent::Submit));
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "1\n");

        stdout_mock.clear();
        let eof = line_state
            .apply_key_event(KeyEvent::EndOfInput, &mut stdout_mock, &history)
            .unwrap();
        assert_eq!(eof, Some(ReadlineEvent::EndOfInput));
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "\n");
    }

    #[test]
    fn test_unrecognized_is_ignored() {
        let mut stdout_mock = StdoutMock::default();
        let history = history_of(&["1 1 +"]);
        let mut line_state = LineState::try_new(64, history.len()).unwrap();
        let before = line_state.clone();

        let it = line_state
            .apply_key_event(KeyEvent::Unrecognized, &mut stdout_mock, &history)
            .unwrap();

        assert_eq!(it, None);
        assert_eq!(line_state, before);
        assert_eq!(stdout_mock.get_copy_of_buffer(), b"".to_vec());
    }

    #[test]
    fn test_up_walks_back_and_stops_at_oldest() {
        let mut stdout_mock = StdoutMock::default();
        let history = history_of(&["first", "second"]);
        let mut line_state = LineState::try_new(64, history.len()).unwrap();

        line_state.apply_key_event(KeyEvent::Up, &mut stdout_mock, &history).unwrap();
        assert_eq!(line_state.line(), b"second");
        assert_eq!(line_state.cursor(), 6);

        line_state.apply_key_event(KeyEvent::Up, &mut stdout_mock, &history).unwrap();
        assert_eq!(line_state.line(), b"first");

        line_state.apply_key_event(KeyEvent::Up, &mut stdout_mock, &history).unwrap();
        assert_eq!(line_state.line(), b"first");
        assert_eq!(line_state.history_nav(), 0);
    }

    #[test]
    fn test_up_with_empty_history_writes_nothing() {
        let mut stdout_mock = StdoutMock::default();
        let history = history_of(&[]);
        let mut line_state = LineState::try_new(64, history.len()).unwrap();

        line_state.apply_key_event(KeyEvent::Up, &mut stdout_mock, &history).unwrap();

        assert!(line_state.is_empty());
        assert_eq!(stdout_mock.get_copy_of_buffer(), b"".to_vec());
    }

    #[test]
    fn test_down_arrow_history_next() {
        let mut stdout_mock = StdoutMock::default();
        let history = history_of(&["first", "second"]);
        let mut line_state = LineState::try_new(64, history.len()).unwrap();

        apply_all(
            &mut line_state,
            &[KeyEvent::Up, KeyEvent::Up],
            &mut stdout_mock,
            &history,
        );
        assert_eq!(line_state.line(), b"first");

        line_state.apply_key_event(KeyEvent::Down, &mut stdout_mock, &history).unwrap();
        assert_eq!(line_state.line(), b"second");

        // Past the newest entry the prompt goes blank.
        line_state.apply_key_event(KeyEvent::Down, &mut stdout_mock, &history).unwrap();
        assert!(line_state.is_empty());
        assert_eq!(line_state.cursor(), 0);
        assert_eq!(line_state.history_nav(), history.len());

        line_state.apply_key_event(KeyEvent::Down, &mut stdout_mock, &history).unwrap();
        assert!(line_state.is_empty());
        assert_eq!(line_state.history_nav(), history.len());
    }

    #[test]
    fn test_up_k_then_down_k_returns_to_blank() {
        let mut stdout_mock = StdoutMock::default();
        let history = history_of(&["2 2 *", "3 3 -", "4 4 /"]);

        for k in 1..=history.len() {
            let mut line_state = LineState::try_new(64, history.len()).unwrap();
            for _ in 0..k {
                line_state.apply_key_event(KeyEvent::Up, &mut stdout_mock, &history).unwrap();
            }
            assert_eq!(
                line_state.line(),
                history.get(history.len() - k).unwrap().as_bytes()
            );
            for _ in 0..k {
                line_state.apply_key_event(KeyEvent::Down, &mut stdout_mock, &history).unwrap();
            }
            assert!(line_state.is_empty());
        }
    }

    #[test]
    fn test_editing_resets_history_navigation() {
        let mut stdout_mock = StdoutMock::default();
        let history = history_of(&["1", "2", "3"]);
        let mut line_state = LineState::try_new(64, history.len()).unwrap();

        apply_all(
            &mut line_state,
            &[KeyEvent::Up, KeyEvent::Up, KeyEvent::Char(b'0')],
            &mut stdout_mock,
            &history,
        );
        assert_eq!(line_state.line(), b"20");
        assert_eq!(line_state.history_nav(), 3);

        line_state.apply_key_event(KeyEvent::Up, &mut stdout_mock, &history).unwrap();
        assert_eq!(line_state.line(), b"3");
    }

    #[test]
    fn test_recall_wire_output() {
        let mut stdout_mock = StdoutMock::default();
        let history = history_of(&["5 !"]);
        let mut line_state = LineState::try_new(64, history.len()).unwrap();
        apply_all(
            &mut line_state,
            &[KeyEvent::Char(b'1'), KeyEvent::Char(b'2')],
            &mut stdout_mock,
            &history,
        );
        stdout_mock.clear();

        line_state.apply_key_event(KeyEvent::Up, &mut stdout_mock, &history).unwrap();

        assert_eq!(stdout_mock.get_copy_of_buffer(), b"\x1b[2D\x1b[0K5 !".to_vec());
    }

    #[test]
    fn test_cursor_invariant_holds_for_mixed_keys() {
        let mut stdout_mock = StdoutMock::default();
        let history = history_of(&["10 20 30", "ln"]);
        let mut line_state = LineState::try_new(5, history.len()).unwrap();
        let keys = [
            KeyEvent::Char(b'1'),
            KeyEvent::Home,
            KeyEvent::Delete,
            KeyEvent::Delete,
            KeyEvent::Up,
            KeyEvent::Up,
            KeyEvent::Left,
            KeyEvent::Backspace,
            KeyEvent::Char(b'9'),
            KeyEvent::Char(b'9'),
            KeyEvent::End,
            KeyEvent::Right,
            KeyEvent::Down,
            KeyEvent::Backspace,
        ];
        for key in keys {
            line_state.apply_key_event(key, &mut stdout_mock, &history).unwrap();
            assert!(line_state.cursor() <= line_state.len());
            assert!(line_state.len() <= line_state.capacity());
        }
    }
}
