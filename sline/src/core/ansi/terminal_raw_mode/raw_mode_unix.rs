// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

//! Unix implementation using rustix's safe termios API.

use super::TermiosError;
use rustix::{fd::{AsFd, BorrowedFd},
             termios::{self, LocalModes, OptionalActions, SpecialCodeIndex, Termios}};
use std::{fs::File, io};

/// Read timeout installed in raw mode, in tenths of a second.
pub const RAW_READ_TIMEOUT_DECISECONDS: u8 = 1;

/// The terminal whose attributes are changed.
///
/// This is normally standard input. Tests pass the follower side of a PTY pair instead,
/// so that raw mode can be checked without a controlling terminal.
#[derive(Debug)]
pub enum TerminalFd {
    /// Standard input.
    Stdin(io::Stdin),
    /// Any other terminal device, e.g. `/dev/tty` or a PTY.
    Tty(File),
}

impl AsFd for TerminalFd {
    fn as_fd(&self) -> BorrowedFd<'_> {
        match self {
            TerminalFd::Stdin(stdin) => stdin.as_fd(),
            TerminalFd::Tty(file) => file.as_fd(),
        }
    }
}

/// `tcgetattr`.
///
/// # Errors
///
/// [`TermiosError::Get`] if the fd is not a terminal or the call fails.
pub fn get_attributes(fd: impl AsFd) -> Result<Termios, TermiosError> {
    termios::tcgetattr(fd).map_err(|errno| TermiosError::Get(errno.into()))
}

/// `tcsetattr` with `TCSAFLUSH`: waits for pending output, and discards input that was
/// typed before the mode change.
///
/// # Errors
///
/// [`TermiosError::Set`] if the attributes can't be applied.
pub fn set_attributes(fd: impl AsFd, termios: &Termios) -> Result<(), TermiosError> {
    termios::tcsetattr(fd, OptionalActions::Flush, termios)
        .map_err(|errno| TermiosError::Set(errno.into()))
}

/// Turns a copy of the current attributes into the line editor's raw set. Only the
/// local modes and the read timing change; see the [module docs](super) for why.
pub fn make_line_raw(termios: &mut Termios) {
    termios
        .local_modes
        .remove(LocalModes::ICANON | LocalModes::ECHO | LocalModes::ISIG);
    termios.special_codes[SpecialCodeIndex::VMIN] = 0;
    termios.special_codes[SpecialCodeIndex::VTIME] = RAW_READ_TIMEOUT_DECISECONDS;
}
