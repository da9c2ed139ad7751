// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

use sline::Sline;

/// Previously entered lines, oldest first, as read by `:dmp`.
pub trait HistorySource {
    fn history_entry(&self, index: usize) -> Option<&str>;
}

impl<const N: usize> HistorySource for Sline<N> {
    fn history_entry(&self, index: usize) -> Option<&str> { self.history_get(index) }
}

impl HistorySource for Vec<String> {
    fn history_entry(&self, index: usize) -> Option<&str> {
        self.get(index).map(String::as_str)
    }
}

/// Batch input keeps no history, so a `:dmp` from a file writes an empty dump.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl HistorySource for NoHistory {
    fn history_entry(&self, _index: usize) -> Option<&str> { None }
}
