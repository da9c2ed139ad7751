// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

use crate::{HistorySource, SCALC_EXPR_SIZE};
use miette::{IntoDiagnostic, miette};
use sline::{LineError, Sline, TerminalRestorer};
use std::{fmt::{Debug, Formatter},
          fs::File,
          io::{self, BufRead, BufReader, Write}};

/// Where the next line of input comes from.
///
/// - [`InputSource::Prompt`] is used when standard input is a terminal. It edits lines
///   with [`Sline`] and remembers them for `:dmp`.
/// - [`InputSource::Lines`] reads a file or a pipe, with no editing and no history.
#[derive(Debug)]
pub enum InputSource {
    Prompt(Box<Sline>),
    Lines(LineReader),
}

impl InputSource {
    /// Standard input, with the prompt if it is a terminal.
    ///
    /// # Errors
    ///
    /// Returns `"Terminal error: {message}"` if raw mode can't be set up.
    pub fn stdin() -> miette::Result<Self> {
        let stdin = io::stdin();
        if !rustix::termios::isatty(&stdin) {
            return Ok(InputSource::Lines(LineReader::new(stdin.lock(), "stdin")));
        }

        let mut sline = Box::new(Sline::new());
        if sline.setup().is_err() {
            return Err(miette!("Terminal error: {}", sline.error_message()));
        }
        Ok(InputSource::Prompt(sline))
    }

    /// # Errors
    ///
    /// Returns `"Could not open {path}: {reason}"` if the file can't be opened.
    pub fn open_file(path: &str) -> miette::Result<Self> {
        let file = File::open(path).map_err(|err| miette!("Could not open {path}: {err}"))?;
        Ok(InputSource::Lines(LineReader::new(BufReader::new(file), path)))
    }

    /// The next line without its terminator, or `None` once input is exhausted. Ctrl+D
    /// or Ctrl+C at the prompt also counts as exhausted.
    ///
    /// Lines longer than [`SCALC_EXPR_SIZE`] bytes are cut at the prompt as they are
    /// typed. From a file they are truncated, with a warning written to `err`.
    ///
    /// # Errors
    ///
    /// Returns `"sline: {message}"` if the prompt fails, or the read error of a file.
    pub fn next_line(&mut self, err: &mut dyn Write) -> miette::Result<Option<String>> {
        match self {
            InputSource::Prompt(sline) => match sline.read_line_string(SCALC_EXPR_SIZE) {
                Ok(line) => Ok(Some(line)),
                Err(LineError::EndOfInput) => Ok(None),
                Err(_) => Err(miette!("sline: {}", sline.error_message())),
            },
            InputSource::Lines(reader) => reader.next_line(err),
        }
    }

    #[must_use]
    pub fn is_prompt(&self) -> bool { matches!(self, InputSource::Prompt(_)) }

    /// A handle that puts the terminal back from another thread, if this is a prompt.
    #[must_use]
    pub fn restorer(&self) -> Option<TerminalRestorer> {
        match self {
            InputSource::Prompt(sline) => match sline.restorer() {
                Ok(restorer) => restorer,
                Err(err) => {
                    tracing::warn!(message = "can't duplicate terminal handle", error = %err);
                    None
                }
            },
            InputSource::Lines(_) => None,
        }
    }

    /// Restores the terminal if this is a prompt. Safe to call more than once.
    pub fn teardown(&mut self) {
        if let InputSource::Prompt(sline) = self {
            sline.teardown();
        }
    }
}

impl HistorySource for InputSource {
    fn history_entry(&self, index: usize) -> Option<&str> {
        match self {
            InputSource::Prompt(sline) => sline.history_get(index),
            InputSource::Lines(_) => None,
        }
    }
}

/// Reads `\n` terminated lines from any [`BufRead`], counting them for warnings.
pub struct LineReader {
    reader: Box<dyn BufRead>,
    name: String,
    line_number: usize,
    buffer: Vec<u8>,
}

impl Debug for LineReader {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineReader")
            .field("name", &self.name)
            .field("line_number", &self.line_number)
            .finish_non_exhaustive()
    }
}

impl LineReader {
    /// `name` is what truncation warnings call this input, e.g. `stdin` or a path.
    #[must_use]
    pub fn new(reader: impl BufRead + 'static, name: impl Into<String>) -> Self {
        Self {
            reader: Box::new(reader),
            name: name.into(),
            line_number: 0,
            buffer: Vec::with_capacity(SCALC_EXPR_SIZE + 1),
        }
    }

    /// See [`InputSource::next_line`].
    ///
    /// # Errors
    ///
    /// Returns the underlying read error.
    pub fn next_line(&mut self, err: &mut dyn Write) -> miette::Result<Option<String>> {
        self.buffer.clear();
        let read = self.reader.read_until(b'\n', &mut self.buffer).into_diagnostic()?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
        }
        if self.buffer.len() > SCALC_EXPR_SIZE {
            self.buffer.truncate(SCALC_EXPR_SIZE);
            writeln!(
                err,
                "Warn: {}: line {} truncated (too long).",
                self.name, self.line_number
            )
            .into_diagnostic()?;
        }

        Ok(Some(String::from_utf8_lossy(&self.buffer).into_owned()))
    }
}
