// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

use super::core::LineState;
use crate::{CURSOR_LEFT, CURSOR_RIGHT, write_cursor_backward, write_cursor_forward};
use std::io::{self, Write};

impl LineState {
    /// One cell left. Nothing is written at the start of the line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn move_left(&mut self, term: &mut dyn Write) -> io::Result<()> {
        if self.cursor == 0 {
            return Ok(());
        }
        self.cursor -= 1;
        term.write_all(CURSOR_LEFT)
    }

    /// One cell right. Nothing is written at the end of the line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn move_right(&mut self, term: &mut dyn Write) -> io::Result<()> {
        if self.cursor == self.line.len() {
            return Ok(());
        }
        self.cursor += 1;
        term.write_all(CURSOR_RIGHT)
    }

    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn move_home(&mut self, term: &mut dyn Write) -> io::Result<()> {
        let delta = self.cursor;
        self.cursor = 0;
        write_cursor_backward(term, delta)
    }

    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn move_end(&mut self, term: &mut dyn Write) -> io::Result<()> {
        let delta = self.line.len() - self.cursor;
        self.cursor = self.line.len();
        write_cursor_forward(term, delta)
    }
}
