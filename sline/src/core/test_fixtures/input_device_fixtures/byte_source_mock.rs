// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

use crate::{ByteSource, ReadOutcome};
use std::{collections::VecDeque, io};

/// One scripted read result. [`ReadOutcome`] holds an [`io::Error`], which isn't
/// `Clone`, so scripts are written with this instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptedRead {
    Byte(u8),
    Timeout,
    Error(io::ErrorKind),
}

/// A [`ByteSource`] that replays a script, then fails with
/// [`io::ErrorKind::UnexpectedEof`] forever, so a test that forgets to submit a line
/// ends with an error rather than spinning.
#[derive(Debug, Clone, Default)]
pub struct ByteSourceMock {
    script: VecDeque<ScriptedRead>,
}

impl ByteSourceMock {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = ScriptedRead>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Every byte of `bytes`, with no timeouts in between.
    #[must_use]
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Self {
        Self::new(bytes.as_ref().iter().copied().map(ScriptedRead::Byte))
    }

    /// Reads left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize { self.script.len() }
}

impl ByteSource for ByteSourceMock {
    fn read_byte(&mut self) -> ReadOutcome {
        match self.script.pop_front() {
            Some(ScriptedRead::Byte(byte)) => ReadOutcome::Byte(byte),
            Some(ScriptedRead::Timeout) => ReadOutcome::Timeout,
            Some(ScriptedRead::Error(kind)) => ReadOutcome::Error(kind.into()),
            None => ReadOutcome::Error(io::ErrorKind::UnexpectedEof.into()),
        }
    }
}
