// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

use rustix::{fd::AsFd, io::Errno};
use std::{fmt::{Debug, Formatter},
          fs::File,
          io};

/// Result of one attempt to read a byte. A timeout is not an error: in raw mode with
/// `VTIME` set, `read(2)` returns 0 after the idle period and the caller is expected to
/// try again.
#[derive(Debug)]
pub enum ReadOutcome {
    Byte(u8),
    Timeout,
    Error(io::Error),
}

/// Source of input bytes for the key decoder.
pub trait ByteSource {
    fn read_byte(&mut self) -> ReadOutcome;
}

/// Reads one byte at a time straight from a file descriptor. This bypasses
/// [`std::io::Stdin`]'s internal buffer, which would otherwise swallow bytes that the
/// next poll expects to see.
#[derive(Debug)]
pub struct FdByteSource<F: AsFd> {
    fd: F,
}

impl<F: AsFd> FdByteSource<F> {
    pub fn new(fd: F) -> Self { Self { fd } }
}

impl<F: AsFd> ByteSource for FdByteSource<F> {
    fn read_byte(&mut self) -> ReadOutcome {
        let mut buf = [0_u8; 1];
        match rustix::io::read(&self.fd, &mut buf[..]) {
            Ok(0) => ReadOutcome::Timeout,
            Ok(_) => ReadOutcome::Byte(buf[0]),
            // Interrupted by a signal, or a non-blocking fd with nothing to read.
            Err(Errno::INTR | Errno::AGAIN) => ReadOutcome::Timeout,
            Err(errno) => ReadOutcome::Error(errno.into()),
        }
    }
}

/// The input side of a line editing session. Swap in a mock with
/// [`crate::InputDeviceExtMock::new_mock`] to drive the editor from a script.
pub struct InputDevice {
    pub resource: Box<dyn ByteSource + Send>,
    pub is_mock: bool,
}

impl Debug for InputDevice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputDevice")
            .field("is_mock", &self.is_mock)
            .finish_non_exhaustive()
    }
}

impl Default for InputDevice {
    fn default() -> Self { Self::new_stdin() }
}

impl InputDevice {
    #[must_use]
    pub fn new_stdin() -> Self {
        Self {
            resource: Box::new(FdByteSource::new(io::stdin())),
            is_mock: false,
        }
    }

    #[must_use]
    pub fn new_tty(file: File) -> Self {
        Self {
            resource: Box::new(FdByteSource::new(file)),
            is_mock: false,
        }
    }
}

impl ByteSource for InputDevice {
    fn read_byte(&mut self) -> ReadOutcome { self.resource.read_byte() }
}
