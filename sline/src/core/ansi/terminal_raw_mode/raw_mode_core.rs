// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

//! [`TerminalMode`], the owner of the original attribute snapshot, and the RAII
//! teardown around it.

use super::raw_mode_unix::{self, TerminalFd};
use miette::Diagnostic;
use rustix::{fd::{AsFd, OwnedFd},
             termios::Termios};
use std::{fmt::{Debug, Formatter},
          fs::File,
          io};

/// Terminal attributes could not be read or installed. Both are fatal for an
/// interactive session.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum TermiosError {
    #[error("could not read attributes.")]
    #[diagnostic(
        code(sline::termios::get),
        help("Is standard input connected to a terminal?")
    )]
    Get(#[source] io::Error),

    #[error("could not set attributes.")]
    #[diagnostic(code(sline::termios::set))]
    Set(#[source] io::Error),
}

/// Raw mode for one terminal. See the [module docs] for what "raw" means here.
///
/// [module docs]: mod@crate::core::ansi::terminal_raw_mode
pub struct TerminalMode {
    fd: TerminalFd,
    /// Captured by the first successful [`Self::setup`], consumed by
    /// [`Self::teardown`].
    original: Option<Termios>,
}

impl Debug for TerminalMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalMode")
            .field("fd", &self.fd)
            .field("is_raw", &self.is_raw())
            .finish()
    }
}

impl TerminalMode {
    #[must_use]
    pub fn new_stdin() -> Self { Self::new(TerminalFd::Stdin(io::stdin())) }

    #[must_use]
    pub fn new_tty(file: File) -> Self { Self::new(TerminalFd::Tty(file)) }

    #[must_use]
    pub fn new(fd: TerminalFd) -> Self { Self { fd, original: None } }

    /// Whether a snapshot is held, i.e. setup succeeded and teardown hasn't run yet.
    #[must_use]
    pub fn is_raw(&self) -> bool { self.original.is_some() }

    /// Captures the current attributes and installs the line-raw set.
    ///
    /// Calling this again while already raw re-applies the raw set but keeps the first
    /// snapshot, so teardown always goes back to what the user had.
    ///
    /// # Errors
    ///
    /// - [`TermiosError::Get`] if the fd is not a terminal.
    /// - [`TermiosError::Set`] if the raw set can't be applied. The snapshot is kept in
    ///   this case, since `tcsetattr` may have applied part of the change.
    pub fn setup(&mut self) -> Result<(), TermiosError> {
        let current = raw_mode_unix::get_attributes(&self.fd)?;
        let mut raw = current.clone();
        raw_mode_unix::make_line_raw(&mut raw);

        let original = self.original.get_or_insert(current);
        tracing::debug!(
            message = "terminal mode: setup",
            original_local_modes = ?original.local_modes
        );

        raw_mode_unix::set_attributes(&self.fd, &raw)
    }

    /// Restores the snapshot taken by [`Self::setup`]. No-op if setup never succeeded
    /// or teardown already ran.
    ///
    /// # Errors
    ///
    /// [`TermiosError::Set`] if the original attributes can't be re-applied. The
    /// snapshot is dropped either way; there is nothing useful to retry with.
    pub fn teardown(&mut self) -> Result<(), TermiosError> {
        match self.original.take() {
            Some(original) => {
                tracing::debug!(message = "terminal mode: teardown");
                raw_mode_unix::set_attributes(&self.fd, &original)
            }
            None => Ok(()),
        }
    }

    /// A detached handle that can restore the original attributes from another thread,
    /// e.g. a signal watcher. Returns `None` before setup.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fd can't be duplicated.
    pub fn restorer(&self) -> io::Result<Option<TerminalRestorer>> {
        let Some(original) = &self.original else {
            return Ok(None);
        };
        Ok(Some(TerminalRestorer {
            fd: self.fd.as_fd().try_clone_to_owned()?,
            original: original.clone(),
        }))
    }
}

impl Drop for TerminalMode {
    fn drop(&mut self) { drop(self.teardown()); }
}

/// A copy of the original attributes plus a duplicate of the terminal fd. It is
/// [`Send`], so it can be moved into a signal handling thread to put the terminal back
/// before the process exits without running destructors.
pub struct TerminalRestorer {
    fd: OwnedFd,
    original: Termios,
}

impl Debug for TerminalRestorer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalRestorer").field("fd", &self.fd).finish()
    }
}

impl TerminalRestorer {
    /// # Errors
    ///
    /// [`TermiosError::Set`] if the attributes can't be applied.
    pub fn restore(&self) -> Result<(), TermiosError> {
        raw_mode_unix::set_attributes(&self.fd, &self.original)
    }
}
