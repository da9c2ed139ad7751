// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

use crate::{RingBuffer, RingBufferHeap, RingBufferHeapIterator};
use std::collections::TryReserveError;

/// Number of submitted lines a session remembers.
pub const HISTORY_SIZE_MAX: usize = 50;

/// Submitted lines, oldest first. Index `0` is the oldest remembered line. When a line
/// is added to a full history the oldest is dropped, so every index shifts down by one.
///
/// Lines are stored as text; bytes that aren't valid UTF-8 are replaced with
/// `U+FFFD`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct History<const N: usize = HISTORY_SIZE_MAX> {
    entries: RingBufferHeap<String, N>,
}

impl<const N: usize> History<N> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RingBufferHeap::new(),
        }
    }

    /// Stores a copy of `line`. Empty lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if memory for the copy can't be allocated. The history is left
    /// unchanged in that case.
    pub fn append(&mut self, line: &[u8]) -> Result<(), TryReserveError> {
        if line.is_empty() {
            return Ok(());
        }

        let text = String::from_utf8_lossy(line);
        let mut entry = String::new();
        entry.try_reserve_exact(text.len())?;
        entry.push_str(&text);

        if let Some(evicted) = self.entries.try_add(entry)? {
            tracing::debug!(message = "history full, evicted oldest", evicted);
        }
        Ok(())
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    #[must_use]
    pub fn capacity(&self) -> usize { N }

    pub fn clear(&mut self) { self.entries.clear(); }

    /// Oldest to newest.
    #[must_use]
    pub fn iter(&self) -> RingBufferHeapIterator<'_, String, N> { self.entries.iter() }
}

impl<'a, const N: usize> IntoIterator for &'a History<N> {
    type Item = &'a String;
    type IntoIter = RingBufferHeapIterator<'a, String, N>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entries<const N: usize>(history: &History<N>) -> Vec<&str> {
        history.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut history = History::<HISTORY_SIZE_MAX>::new();
        history.append(b"1 2 +").unwrap();
        history.append(b":p").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.get(0), Some("1 2 +"));
        assert_eq!(history.get(1), Some(":p"));
        assert_eq!(history.get(2), None);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut history = History::<4>::new();
        history.append(b"dup").unwrap();
        history.append(b"dup").unwrap();
        assert_eq!(entries(&history), vec!["dup", "dup"]);
    }

    #[test]
    fn test_empty_line_is_ignored() {
        let mut history = History::<3>::new();
        history.append(b"1").unwrap();
        history.append(b"").unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(1), None);
    }

    #[test]
    fn test_capacity_three_evicts_oldest() {
        let mut history = History::<3>::new();
        for line in ["1 1 +", "2 2 *", "3 3 -", "4 4 /"] {
            history.append(line.as_bytes()).unwrap();
        }
        assert_eq!(history.len(), 3);
        assert_eq!(entries(&history), vec!["2 2 *", "3 3 -", "4 4 /"]);
    }

    #[test]
    fn test_n_plus_one_appends_shift_index_zero() {
        let mut history = History::<HISTORY_SIZE_MAX>::new();
        for it in 0..=HISTORY_SIZE_MAX {
            history.append(format!("line {it}").as_bytes()).unwrap();
        }
        assert_eq!(history.len(), HISTORY_SIZE_MAX);
        assert_eq!(history.get(0), Some("line 1"));
        assert_eq!(
            history.get(HISTORY_SIZE_MAX - 1),
            Some(format!("line {HISTORY_SIZE_MAX}").as_str())
        );
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut history = History::<2>::new();
        history.append(b"a\xffb").unwrap();
        assert_eq!(history.get(0), Some("a\u{fffd}b"));
    }

    #[test]
    fn test_clear() {
        let mut history = History::<2>::new();
        history.append(b"x").unwrap();
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.get(0), None);
        assert_eq!(history.capacity(), 2);
    }

    #[test]
    fn test_append_after_clear() {
        let mut history = History::<HISTORY_SIZE_MAX>::new();
        history.append(b"1 2 +").unwrap();
        history.clear();
        history.append(b"3 4 *").unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(0), Some("3 4 *"));
        assert_eq!(entries(&history), vec!["3 4 *"]);
    }
}
