//! A decrease-key priority queue over unique keys.
//!
//! The queue is a binary min-heap (`Vec` of entries) paired with a
//! key→slot side table, kept in lockstep on every swap so that lowering an
//! existing key's priority is O(log n) instead of a linear scan. Search
//! code relies on [`update`](PriorityQueue::update)'s return value to tell
//! a fresh-or-improved entry from a rejected one.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Error returned when popping an empty queue.
///
/// Searches check emptiness before popping, so seeing this means a caller
/// bypassed that check — a bug, not an expected outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyQueueError;

impl fmt::Display for EmptyQueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("pop from an empty priority queue")
    }
}

impl std::error::Error for EmptyQueueError {}

type TieBreak<K> = Box<dyn Fn(K, K) -> Ordering>;

/// A mutable min-priority queue with at most one entry per key.
///
/// Priorities can be lowered any number of times via
/// [`update`](Self::update) but never raised. An optional tie-break
/// comparator orders entries of *equal* priority; it is consulted nowhere
/// else, so it can never override the strict priority ordering.
pub struct PriorityQueue<K> {
    heap: Vec<(K, i32)>,
    slots: HashMap<K, usize>,
    tie_break: Option<TieBreak<K>>,
}

impl<K: Copy + Eq + Hash> PriorityQueue<K> {
    /// Create an empty queue with no tie-break comparator.
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            slots: HashMap::new(),
            tie_break: None,
        }
    }

    /// Create an empty queue that orders equal-priority entries with `cmp`.
    pub fn with_tie_break(cmp: impl Fn(K, K) -> Ordering + 'static) -> Self {
        Self {
            heap: Vec::new(),
            slots: HashMap::new(),
            tie_break: Some(Box::new(cmp)),
        }
    }

    /// Number of queued keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `key` is currently queued.
    #[inline]
    pub fn contains(&self, key: K) -> bool {
        self.slots.contains_key(&key)
    }

    /// Insert `key`, or lower its priority.
    ///
    /// If `key` is absent it is inserted at `priority`. If it is present and
    /// `priority` is strictly lower than the stored one, the entry moves to
    /// the new priority. Equal or higher priorities leave the queue
    /// untouched. Returns whether the entry changed.
    pub fn update(&mut self, key: K, priority: i32) -> bool {
        match self.slots.get(&key) {
            Some(&i) => {
                if priority >= self.heap[i].1 {
                    return false;
                }
                self.heap[i].1 = priority;
                self.sift_up(i);
                true
            }
            None => {
                self.heap.push((key, priority));
                let i = self.heap.len() - 1;
                self.slots.insert(key, i);
                self.sift_up(i);
                true
            }
        }
    }

    /// Remove and return the minimum-priority entry.
    pub fn pop_min(&mut self) -> Result<(K, i32), EmptyQueueError> {
        if self.heap.is_empty() {
            return Err(EmptyQueueError);
        }

        // Move the last entry into the root slot, then drop the minimum.
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (key, priority) = self.heap.pop().ok_or(EmptyQueueError)?;
        self.slots.remove(&key);

        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok((key, priority))
    }

    /// Whether the entry at `i` sorts strictly before the entry at `j`.
    fn before(&self, i: usize, j: usize) -> bool {
        let (ka, pa) = self.heap[i];
        let (kb, pb) = self.heap[j];
        match pa.cmp(&pb) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => match &self.tie_break {
                Some(cmp) => cmp(ka, kb) == Ordering::Less,
                None => false,
            },
        }
    }

    /// Swap two heap slots and their side-table entries together.
    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.slots.insert(self.heap[i].0, i);
        self.slots.insert(self.heap[j].0, j);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.before(i, parent) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            if left >= self.heap.len() {
                break;
            }
            let mut child = left;
            if right < self.heap.len() && self.before(right, left) {
                child = right;
            }
            if !self.before(child, i) {
                break;
            }
            self.swap(child, i);
            i = child;
        }
    }
}

impl<K: Copy + Eq + Hash> Default for PriorityQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngExt;

    #[test]
    fn update_and_pop_sequence() {
        let mut q: PriorityQueue<&str> = PriorityQueue::new();
        assert!(q.is_empty());
        assert!(q.update("thing", 5));
        assert!(!q.is_empty());
        assert!(q.update("another thing", 2));
        assert_eq!(q.pop_min().unwrap(), ("another thing", 2));
        // Raising an existing key is rejected.
        assert!(!q.update("thing", 100));
        assert!(q.update("something else", 110));
        // Lowering it is not.
        assert!(q.update("something else", 8));
        assert!(q.contains("thing"));
        assert!(!q.contains("nothing"));
        assert_eq!(q.len(), 2);
        assert_eq!(q.pop_min().unwrap(), ("thing", 5));
        assert_eq!(q.pop_min().unwrap(), ("something else", 8));
        assert!(q.is_empty());
    }

    #[test]
    fn equal_priority_update_is_noop() {
        let mut q = PriorityQueue::new();
        assert!(q.update(7, 3));
        assert!(!q.update(7, 3));
        assert_eq!(q.len(), 1);
        assert_eq!(q.pop_min().unwrap(), (7, 3));
    }

    #[test]
    fn heapsort() {
        let values = [1, 6, 2, 8, 9, 14, 4, 7];
        let mut q = PriorityQueue::new();
        for (i, &v) in values.iter().enumerate() {
            q.update(i, v);
        }
        let mut out = Vec::new();
        while let Ok((_, p)) = q.pop_min() {
            out.push(p);
        }
        assert_eq!(out, vec![1, 2, 4, 6, 7, 8, 9, 14]);
    }

    #[test]
    fn pop_empty_fails() {
        let mut q: PriorityQueue<i32> = PriorityQueue::new();
        assert_eq!(q.pop_min(), Err(EmptyQueueError));
        q.update(1, 1);
        q.pop_min().unwrap();
        assert!(q.pop_min().is_err());
    }

    #[test]
    fn pops_non_decreasing_after_random_updates() {
        let mut rng = rand::rng();
        let mut q = PriorityQueue::new();
        for key in 0..500i32 {
            q.update(key, rng.random_range(0..100));
        }
        // Random decrease attempts; raises are silently rejected.
        for _ in 0..2000 {
            let key = rng.random_range(0..500i32);
            q.update(key, rng.random_range(0..100));
        }
        assert_eq!(q.len(), 500);
        let mut prev = i32::MIN;
        while let Ok((_, p)) = q.pop_min() {
            assert!(p >= prev);
            prev = p;
        }
    }

    #[test]
    fn tie_break_orders_equal_priorities() {
        // Prefer the larger key among equal priorities.
        let mut q = PriorityQueue::with_tie_break(|a: i32, b: i32| b.cmp(&a));
        q.update(1, 7);
        q.update(2, 7);
        q.update(3, 7);
        q.update(4, 2);
        assert_eq!(q.pop_min().unwrap(), (4, 2));
        assert_eq!(q.pop_min().unwrap().0, 3);
        assert_eq!(q.pop_min().unwrap().0, 2);
        assert_eq!(q.pop_min().unwrap().0, 1);
    }

    #[test]
    fn tie_break_never_overrides_strict_order() {
        // A comparator that always prefers the smaller key must not make a
        // higher-priority entry pop first.
        let mut q = PriorityQueue::with_tie_break(|a: i32, b: i32| a.cmp(&b));
        q.update(1, 10);
        q.update(2, 5);
        assert_eq!(q.pop_min().unwrap(), (2, 5));
        assert_eq!(q.pop_min().unwrap(), (1, 10));
    }

    #[test]
    fn len_tracks_inserts_minus_pops() {
        let mut q = PriorityQueue::new();
        for key in 0..10i32 {
            q.update(key, key * 3 % 7);
        }
        assert_eq!(q.len(), 10);
        // Re-updating existing keys never duplicates.
        for key in 0..10i32 {
            q.update(key, 0);
        }
        assert_eq!(q.len(), 10);
        q.pop_min().unwrap();
        q.pop_min().unwrap();
        assert_eq!(q.len(), 8);
    }
}
