//! Binary-heap min-priority queue with an injected ordering.
//!
//! The heap mechanics know nothing about scheduling. Whatever decides which
//! element is "smallest" is supplied as a [`Comparator`] when the queue is
//! built and stays bound for the queue's lifetime, so the same engine serves
//! the wait queue (arrival order) and the ready queue (priority order).
//!
//! Layout is the usual implicit complete tree: the element at index `i` has
//! its parent at `(i - 1) / 2` and children at `2i + 1` and `2i + 2`.

use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

/// Errors raised by queue accessors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("priority queue is empty")]
    Empty,
}

/// A total order over `T` used to arrange the heap.
///
/// Implementations must be consistent and transitive. A comparator that is
/// not leaves the heap in an unspecified (but memory-safe) order.
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Min-priority queue backed by a `Vec` heap.
pub struct PriorityQueue<T, C> {
    tree: Vec<T>,
    cmp: C,
}

impl<T, C: Comparator<T>> PriorityQueue<T, C> {
    /// Create an empty queue ordered by `cmp`.
    pub fn new(cmp: C) -> Self {
        Self {
            tree: Vec::new(),
            cmp,
        }
    }

    /// Create an empty queue with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self {
            tree: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Insert an element, sifting it up towards the root. O(log n).
    pub fn insert(&mut self, item: T) {
        self.tree.push(item);
        self.sift_up(self.tree.len() - 1);
    }

    /// Borrow the minimum element without removing it.
    pub fn peek(&self) -> Result<&T, QueueError> {
        self.tree.first().ok_or(QueueError::Empty)
    }

    /// Remove and return the minimum element. O(log n).
    pub fn remove(&mut self) -> Result<T, QueueError> {
        if self.tree.is_empty() {
            return Err(QueueError::Empty);
        }
        let min = self.tree.swap_remove(0);
        if !self.tree.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.tree.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Heap contents in storage order (root first). Not sorted.
    pub fn as_slice(&self) -> &[T] {
        &self.tree
    }

    /// Borrow the comparator the queue was built with.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    fn sift_up(&mut self, mut place: usize) {
        while place > 0 {
            let parent = (place - 1) / 2;
            if self.cmp.compare(&self.tree[place], &self.tree[parent]) != Ordering::Less {
                break;
            }
            self.tree.swap(place, parent);
            place = parent;
        }
    }

    fn sift_down(&mut self, mut place: usize) {
        let len = self.tree.len();
        loop {
            let left = 2 * place + 1;
            let right = left + 1;
            let mut min = place;

            if left < len && self.cmp.compare(&self.tree[left], &self.tree[min]) == Ordering::Less {
                min = left;
            }
            if right < len && self.cmp.compare(&self.tree[right], &self.tree[min]) == Ordering::Less
            {
                min = right;
            }
            if min == place {
                break;
            }
            self.tree.swap(place, min);
            place = min;
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("tree", &self.tree)
            .finish()
    }
}
