// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

use crate::{HISTORY_SIZE_MAX, History, InputDevice, LineError, LineErrorKind, LineState,
            OutputDevice, ReadlineEvent, TerminalMode, TerminalRestorer, TermiosError,
            decode_key, lock_output_device_as_mut};
use std::io::{self, Write};

/// # Mental model and overview
///
/// This is a replacement for [`std::io::BufRead::read_line`] on an interactive
/// terminal. It is synchronous: [`Self::read_line`] blocks until the user presses
/// Enter, Ctrl+D, or Ctrl+C, and nothing else runs in the background.
///
/// One `Sline` is one session. It owns:
/// 1. the [`TerminalMode`], which holds the attributes the terminal had before
///    [`Self::setup`] and puts them back on [`Self::teardown`] or when dropped,
/// 2. the [`History`] of submitted lines, which lives until teardown,
/// 3. the [`InputDevice`] and [`OutputDevice`] it reads keys from and draws on.
///
/// # Inputs and dependency injection
///
/// [`Self::new`] reads stdin and draws on stdout. [`Self::new_with`] takes any
/// [`InputDevice`] and [`OutputDevice`], which is how tests drive a session from a
/// scripted byte stream and capture what would have been drawn.
///
/// # Errors are sticky
///
/// Every failure is recorded, and [`Self::error_message`] describes the most recent one.
/// That includes failures that were recovered from and never returned, such as a
/// history entry that couldn't be stored.
#[derive(Debug)]
pub struct Sline<const N: usize = HISTORY_SIZE_MAX> {
    terminal_mode: TerminalMode,
    pub input_device: InputDevice,
    pub output_device: OutputDevice,
    history: History<N>,
    last_error: LineErrorKind,
}

impl Default for Sline {
    fn default() -> Self { Self::new() }
}

impl Sline {
    /// A session on stdin / stdout with room for [`HISTORY_SIZE_MAX`] lines of history.
    #[must_use]
    pub fn new() -> Self {
        Self::new_with(
            TerminalMode::new_stdin(),
            InputDevice::new_stdin(),
            OutputDevice::new_stdout(),
        )
    }
}

impl<const N: usize> Sline<N> {
    #[must_use]
    pub fn new_with(
        terminal_mode: TerminalMode,
        input_device: InputDevice,
        output_device: OutputDevice,
    ) -> Self {
        Self {
            terminal_mode,
            input_device,
            output_device,
            history: History::new(),
            last_error: LineErrorKind::default(),
        }
    }

    /// Puts the terminal in raw mode. Must be called before [`Self::read_line`] on a
    /// real terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal attributes can't be read or changed. The session
    /// can't be used in that case.
    pub fn setup(&mut self) -> Result<(), TermiosError> {
        match self.terminal_mode.setup() {
            Ok(()) => {
                tracing::info!(message = "sline session started", history_capacity = N);
                Ok(())
            }
            Err(err) => {
                self.last_error = LineErrorKind::from(&err);
                Err(err)
            }
        }
    }

    /// Reads one line into `buffer`, replacing its contents, and returns its length in
    /// bytes. The line terminator is not included. At most `max_size` bytes are
    /// accepted; further keystrokes are dropped until the line is submitted or edited.
    ///
    /// Non-empty lines are added to the history.
    ///
    /// # Errors
    ///
    /// - [`LineError::EndOfInput`] when Ctrl+D or Ctrl+C is pressed.
    /// - [`LineError::Io`] when reading or drawing fails, or the line buffer can't be
    ///   allocated.
    pub fn read_line(
        &mut self,
        buffer: &mut Vec<u8>,
        max_size: usize,
    ) -> Result<usize, LineError> {
        let result = self.read_line_impl(max_size);
        match result {
            Ok(line) => {
                *buffer = line;
                Ok(buffer.len())
            }
            Err(err) => {
                self.last_error = err.kind();
                tracing::debug!(message = "read_line ended without a line", error = %err);
                Err(err)
            }
        }
    }

    /// Like [`Self::read_line`], but returns the line as text. Invalid UTF-8 is
    /// replaced with `U+FFFD`.
    ///
    /// # Errors
    ///
    /// See [`Self::read_line`].
    pub fn read_line_string(&mut self, max_size: usize) -> Result<String, LineError> {
        let mut buffer = Vec::new();
        self.read_line(&mut buffer, max_size)?;
        Ok(match String::from_utf8(buffer) {
            Ok(it) => it,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        })
    }

    fn read_line_impl(&mut self, max_size: usize) -> Result<Vec<u8>, LineError> {
        let mut line_state = LineState::try_new(max_size, self.history.len())
            .map_err(|_| io::Error::from(io::ErrorKind::OutOfMemory))?;

        loop {
            let key = decode_key(&mut self.input_device)?;

            let maybe_event = {
                let term = lock_output_device_as_mut!(self.output_device);
                let it = line_state.apply_key_event(key, term, &self.history)?;
                term.flush()?;
                it
            };

            match maybe_event {
                None => {}
                Some(ReadlineEvent::EndOfInput) => return Err(LineError::EndOfInput),
                Some(ReadlineEvent::Submit) => break,
            }
        }

        let line = line_state.into_line();
        if let Err(err) = self.history.append(&line) {
            // The line itself is still returned.
            tracing::warn!(message = "could not store history entry", error = %err);
            self.last_error = LineErrorKind::AllocationFailure;
        }
        Ok(line)
    }

    /// Restores the terminal and forgets the history. Safe to call more than once, or
    /// without [`Self::setup`]. Dropping the session restores the terminal too.
    pub fn teardown(&mut self) {
        self.history.clear();
        if let Err(err) = self.terminal_mode.teardown() {
            tracing::warn!(message = "could not restore terminal", error = %err);
            self.last_error = LineErrorKind::from(&err);
        }
    }

    /// Describes the most recent failure, e.g. `"EOF caught."`. Returns
    /// `"unknown error."` if nothing has failed yet.
    #[must_use]
    pub fn error_message(&self) -> &str { self.last_error.as_ref() }

    #[must_use]
    pub fn last_error(&self) -> LineErrorKind { self.last_error }

    /// The history entry at `index`, oldest first.
    #[must_use]
    pub fn history_get(&self, index: usize) -> Option<&str> { self.history.get(index) }

    #[must_use]
    pub fn history(&self) -> &History<N> { &self.history }

    /// A handle that restores the terminal from another thread, e.g. a signal handler
    /// that exits the process without running destructors. `None` before
    /// [`Self::setup`].
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal file descriptor can't be duplicated.
    pub fn restorer(&self) -> io::Result<Option<TerminalRestorer>> {
        self.terminal_mode.restorer()
    }

    #[must_use]
    pub fn is_raw(&self) -> bool { self.terminal_mode.is_raw() }
}
