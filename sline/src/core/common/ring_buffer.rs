// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

use std::collections::TryReserveError;

/// A fixed capacity FIFO. Indices are logical: `0` is always the oldest item and
/// `len() - 1` the newest, no matter where the items sit in storage. Adding to a full
/// buffer evicts the oldest item, which shifts every logical index down by one.
///
/// The implementation is [`super::RingBufferHeap`].
pub trait RingBuffer<T, const N: usize> {
    fn len(&self) -> usize;

    fn is_full(&self) -> bool { self.len() == N }

    fn is_empty(&self) -> bool { self.len() == 0 }

    fn clear(&mut self);

    /// Item at logical `index`, or `None` if `index >= len()`.
    fn get(&self, index: usize) -> Option<&T>;

    /// Insert as the newest item. Returns the evicted oldest item when full. Growing the
    /// storage is fallible; on error, nothing changes and `value` is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage needs to grow and the allocation fails.
    fn try_add(&mut self, value: T) -> Result<Option<T>, TryReserveError>;

    /// Remove the oldest item.
    fn remove(&mut self) -> Option<T>;
}
