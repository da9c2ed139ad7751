// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

//! A fixed-size ring buffer with heap storage. Storage grows lazily up to `N` slots and
//! is emptied by `clear`; once full, every add overwrites the slot of the oldest item.

use super::RingBuffer;
use std::collections::TryReserveError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RingBufferHeap<T, const N: usize> {
    internal_storage: Vec<Option<T>>,
    /// Slot that the next add writes to.
    head: usize,
    /// Slot of the oldest item.
    tail: usize,
    count: usize,
}

impl<T, const N: usize> Default for RingBufferHeap<T, N> {
    fn default() -> Self { Self::new() }
}

impl<T, const N: usize> RingBufferHeap<T, N> {
    /// Doesn't allocate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            internal_storage: Vec::new(),
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Writes `value` into the head slot. Caller guarantees `N > 0` and that the slot
    /// exists or can be pushed without reallocating. Until storage has grown to `N`
    /// slots, `head` equals its length.
    fn store_at_head(&mut self, value: T) -> Option<T> {
        let evicted = if self.count == N { self.remove() } else { None };
        if self.head == self.internal_storage.len() {
            self.internal_storage.push(Some(value));
        } else {
            self.internal_storage[self.head] = Some(value);
        }
        self.head = (self.head + 1) % N;
        self.count += 1;
        evicted
    }
}

impl<T, const N: usize> RingBuffer<T, N> for RingBufferHeap<T, N> {
    fn len(&self) -> usize { self.count }

    fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.count = 0;
        self.internal_storage.clear();
    }

    fn get(&self, index: usize) -> Option<&T> {
        if index >= self.count {
            return None;
        }
        let actual_index = (self.tail + index) % N;
        self.internal_storage
            .get(actual_index)
            .and_then(|it| it.as_ref())
    }

    fn try_add(&mut self, value: T) -> Result<Option<T>, TryReserveError> {
        if N == 0 {
            return Ok(Some(value));
        }
        if self.head == self.internal_storage.len() {
            self.internal_storage.try_reserve(1)?;
        }
        Ok(self.store_at_head(value))
    }

    fn remove(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let value = self.internal_storage[self.tail].take();
        self.tail = (self.tail + 1) % N;
        self.count -= 1;
        value
    }
}

impl<T, const N: usize> RingBufferHeap<T, N> {
    /// Oldest to newest.
    #[must_use]
    pub fn iter(&self) -> RingBufferHeapIterator<'_, T, N> {
        RingBufferHeapIterator {
            ring_buffer: self,
            iterator_index: 0,
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a RingBufferHeap<T, N> {
    type Item = &'a T;
    type IntoIter = RingBufferHeapIterator<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

#[derive(Debug)]
pub struct RingBufferHeapIterator<'a, T, const N: usize> {
    ring_buffer: &'a RingBufferHeap<T, N>,
    iterator_index: usize,
}

impl<'a, T, const N: usize> Iterator for RingBufferHeapIterator<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let it = self.ring_buffer.get(self.iterator_index)?;
        self.iterator_index += 1;
        Some(it)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn collect<const N: usize>(ring_buffer: &RingBufferHeap<String, N>) -> Vec<&str> {
        ring_buffer.iter().map(String::as_str).collect()
    }

    fn add<const N: usize>(
        ring_buffer: &mut RingBufferHeap<String, N>,
        value: &str,
    ) -> Option<String> {
        ring_buffer.try_add(value.into()).unwrap()
    }

    #[test]
    fn test_empty_ring_buffer_heap() {
        let ring_buffer: RingBufferHeap<String, 3> = RingBufferHeap::new();
        assert_eq!(ring_buffer.len(), 0);
        assert!(ring_buffer.is_empty());
        assert!(!ring_buffer.is_full());
        assert_eq!(ring_buffer.iter().next(), None);
        assert_eq!(ring_buffer.get(0), None);
    }

    #[test]
    fn test_multiple_inserts_heap() {
        let mut ring_buffer: RingBufferHeap<String, 3> = RingBufferHeap::new();
        assert_eq!(add(&mut ring_buffer, "1 1 +"), None);
        assert_eq!(add(&mut ring_buffer, "2 2 *"), None);
        assert_eq!(add(&mut ring_buffer, "3 3 -"), None);

        assert!(ring_buffer.is_full());
        assert_eq!(ring_buffer.head, 0);
        assert_eq!(ring_buffer.tail, 0);
        assert_eq!(collect(&ring_buffer), vec!["1 1 +", "2 2 *", "3 3 -"]);
        assert_eq!(ring_buffer.get(3), None);
    }

    #[test]
    fn test_wrap_around_insert_evicts_oldest() {
        let mut ring_buffer: RingBufferHeap<String, 3> = RingBufferHeap::new();
        add(&mut ring_buffer, "1 1 +");
        add(&mut ring_buffer, "2 2 *");
        add(&mut ring_buffer, "3 3 -");
        let evicted = add(&mut ring_buffer, "4 4 /");

        assert_eq!(evicted.as_deref(), Some("1 1 +"));
        assert_eq!(ring_buffer.len(), 3);
        assert_eq!(ring_buffer.head, 1);
        assert_eq!(ring_buffer.tail, 1);
        assert_eq!(collect(&ring_buffer), vec!["2 2 *", "3 3 -", "4 4 /"]);
        assert_eq!(ring_buffer.get(0).unwrap(), "2 2 *");
        assert_eq!(ring_buffer.get(2).unwrap(), "4 4 /");
        assert_eq!(ring_buffer.get(3), None);
    }

    #[test]
    fn test_wrap_around_remove_heap() {
        let mut ring_buffer: RingBufferHeap<String, 3> = RingBufferHeap::new();
        for it in ["a", "b", "c", "d"] {
            add(&mut ring_buffer, it);
        }
        assert_eq!(ring_buffer.remove().as_deref(), Some("b"));
        assert_eq!(ring_buffer.tail, 2);
        assert_eq!(collect(&ring_buffer), vec!["c", "d"]);

        // The freed slot is reused by the next add.
        assert_eq!(add(&mut ring_buffer, "e"), None);
        assert_eq!(collect(&ring_buffer), vec!["c", "d", "e"]);
    }

    #[test]
    fn test_many_wraps_keep_fifo_order() {
        let mut ring_buffer: RingBufferHeap<String, 4> = RingBufferHeap::new();
        for it in 0..23 {
            add(&mut ring_buffer, &it.to_string());
        }
        assert_eq!(collect(&ring_buffer), vec!["19", "20", "21", "22"]);
    }

    #[test]
    fn test_clear_heap() {
        let mut ring_buffer: RingBufferHeap<String, 3> = RingBufferHeap::new();
        add(&mut ring_buffer, "a");
        add(&mut ring_buffer, "b");
        ring_buffer.clear();
        assert!(ring_buffer.is_empty());
        assert_eq!(ring_buffer.get(0), None);
        assert_eq!(ring_buffer.iter().next(), None);

        // Usable after clear.
        add(&mut ring_buffer, "c");
        assert_eq!(ring_buffer.get(0).map(String::as_str), Some("c"));
        assert_eq!(collect(&ring_buffer), vec!["c"]);
    }

    #[test]
    fn test_clear_after_wrap_then_refill() {
        let mut ring_buffer: RingBufferHeap<String, 3> = RingBufferHeap::new();
        for it in ["a", "b", "c", "d", "e"] {
            add(&mut ring_buffer, it);
        }
        ring_buffer.clear();

        for it in ["f", "g", "h", "i"] {
            add(&mut ring_buffer, it);
        }
        assert_eq!(collect(&ring_buffer), vec!["g", "h", "i"]);
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let mut ring_buffer: RingBufferHeap<String, 0> = RingBufferHeap::new();
        assert_eq!(add(&mut ring_buffer, "a").as_deref(), Some("a"));
        assert!(ring_buffer.is_empty());
        assert_eq!(ring_buffer.remove(), None);
    }
}
