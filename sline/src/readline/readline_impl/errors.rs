// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

use crate::TermiosError;
use miette::Diagnostic;
use std::io;
use strum_macros::AsRefStr;

/// Why [`crate::Sline::read_line`] didn't return a line.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum LineError {
    /// Ctrl+D or Ctrl+C was pressed. This is how a session normally ends.
    #[error("EOF caught.")]
    #[diagnostic(code(sline::read_line::end_of_input))]
    EndOfInput,

    /// Reading the terminal failed for a reason other than a timeout, or the output
    /// could not be written.
    #[error("I/O error.")]
    #[diagnostic(code(sline::read_line::io))]
    Io(#[from] io::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Termios(#[from] TermiosError),
}

impl LineError {
    #[must_use]
    pub fn kind(&self) -> LineErrorKind {
        match self {
            LineError::EndOfInput => LineErrorKind::EndOfInput,
            LineError::Io(err) if err.kind() == io::ErrorKind::OutOfMemory => {
                LineErrorKind::AllocationFailure
            }
            LineError::Io(_) => LineErrorKind::Io,
            LineError::Termios(err) => err.into(),
        }
    }
}

/// The last thing that went wrong in a session, as reported by
/// [`crate::Sline::error_message`]. Unlike [`LineError`] this includes failures that
/// were recovered from, such as a history entry that couldn't be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr)]
pub enum LineErrorKind {
    #[default]
    #[strum(to_string = "unknown error.")]
    Unknown,
    #[strum(to_string = "EOF caught.")]
    EndOfInput,
    #[strum(to_string = "I/O error.")]
    Io,
    #[strum(to_string = "could not allocate internal memory.")]
    AllocationFailure,
    #[strum(to_string = "could not read attributes.")]
    TermiosGet,
    #[strum(to_string = "could not set attributes.")]
    TermiosSet,
}

impl From<&TermiosError> for LineErrorKind {
    fn from(err: &TermiosError) -> Self {
        match err {
            TermiosError::Get(_) => LineErrorKind::TermiosGet,
            TermiosError::Set(_) => LineErrorKind::TermiosSet,
        }
    }
}
