// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

use std::collections::TryReserveError;

/// Buffer, cursor, and history position for one line read.
///
/// `capacity` bytes are reserved up front, so inserting never reallocates. When the
/// buffer is full further input is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineState {
    pub(super) line: Vec<u8>,
    pub(super) capacity: usize,
    /// Byte offset of the terminal cursor within `line`.
    pub(super) cursor: usize,
    /// Which history entry Up / Down will recall next. Starts one past the newest.
    pub(super) history_nav: usize,
}

impl LineState {
    /// # Errors
    ///
    /// Returns an error if `capacity` bytes can't be reserved.
    pub fn try_new(capacity: usize, history_len: usize) -> Result<Self, TryReserveError> {
        let mut line = Vec::new();
        line.try_reserve_exact(capacity)?;
        Ok(Self {
            line,
            capacity,
            cursor: 0,
            history_nav: history_len,
        })
    }

    #[must_use]
    pub fn line(&self) -> &[u8] { &self.line }

    #[must_use]
    pub fn len(&self) -> usize { self.line.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.line.is_empty() }

    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    #[must_use]
    pub fn history_nav(&self) -> usize { self.history_nav }

    #[must_use]
    pub fn is_full(&self) -> bool { self.line.len() >= self.capacity }

    #[must_use]
    pub fn into_line(self) -> Vec<u8> { self.line }

    pub(super) fn debug_check_invariants(&self) {
        debug_assert!(self.cursor <= self.line.len());
        debug_assert!(self.line.len() <= self.capacity);
    }
}
