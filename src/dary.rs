//! D-ary Heap implementation
//!
//! An array-backed heap where every node has up to `d` children (the *arity*).
//! The tree is complete and stored level by level in a `Vec`, so parent and
//! child positions are pure index arithmetic:
//!
//! - children of `i`: `i * d + 1 ..= i * d + d`
//! - parent of `i` (for `i > 0`): `(i - 1) / d`
//!
//! The ordering is supplied by a [`Compare`] implementation, so the same type
//! serves as a min-heap ([`Less`], the default), a max-heap ([`Greater`]) or
//! any other strict weak ordering.
//!
//! # Time Complexity
//!
//! | Operation | Complexity   |
//! |-----------|--------------|
//! | `push`    | O(log_d n)   |
//! | `pop`     | O(d log_d n) |
//! | `top`     | O(1)         |
//! | `len`     | O(1)         |
//! | heapify   | O(n)         |
//!
//! A larger arity makes the tree shallower, which speeds up `push`, at the
//! price of scanning more children per level in `pop`.
//!
//! # Example
//!
//! ```rust
//! use dary_heaps::{DaryHeap, Greater, PriorityHeap};
//!
//! let mut heap = DaryHeap::with_comparator(3, Greater);
//! for value in [5, 3, 8, 1, 9, 2] {
//!     heap.push(value);
//! }
//!
//! assert_eq!(heap.top(), Ok(&9));
//! assert_eq!(heap.into_ordered_vec(), vec![9, 8, 5, 3, 2, 1]);
//! ```

use std::fmt;
use std::mem;

use tracing::{debug, trace};

use crate::compare::{Compare, Greater, Less};
use crate::traits::{HeapError, PriorityHeap};

/// Arity used by [`DaryHeap::new`] and [`Default`]
pub const DEFAULT_ARITY: usize = 2;

/// A d-ary heap ordered by a [`Compare`] implementation
///
/// The element for which the comparator reports priority over every other
/// element sits at the root and is returned by `top` and `pop`. Elements that
/// compare as equal keep whatever relative positions the sift operations leave
/// them in; ties never cause extra swaps.
#[derive(Clone)]
pub struct DaryHeap<T, C = Less> {
    /// The complete d-ary tree, stored level by level
    data: Vec<T>,
    arity: usize,
    comparator: C,
}

/// A d-ary heap that returns the smallest element first
pub type MinHeap<T> = DaryHeap<T, Less>;

/// A d-ary heap that returns the largest element first
pub type MaxHeap<T> = DaryHeap<T, Greater>;

impl<T> DaryHeap<T, Less> {
    /// Creates an empty binary min-heap
    pub fn new() -> Self {
        Self::with_comparator(DEFAULT_ARITY, Less)
    }

    /// Creates an empty min-heap with the given arity
    ///
    /// # Panics
    /// Panics if `arity` is zero.
    pub fn with_arity(arity: usize) -> Self {
        Self::with_comparator(arity, Less)
    }
}

impl<T, C> DaryHeap<T, C> {
    /// Creates an empty heap with the given arity and comparator
    ///
    /// # Panics
    /// Panics if `arity` is zero.
    pub fn with_comparator(arity: usize, comparator: C) -> Self {
        Self::with_capacity(arity, 0, comparator)
    }

    /// Creates an empty heap with room for `capacity` elements
    ///
    /// # Panics
    /// Panics if `arity` is zero.
    pub fn with_capacity(arity: usize, capacity: usize, comparator: C) -> Self {
        assert!(arity >= 1, "heap arity must be at least 1, got {arity}");
        trace!(arity, capacity, "created d-ary heap");
        Self {
            data: Vec::with_capacity(capacity),
            arity,
            comparator,
        }
    }

    /// Number of children each node may have
    #[inline]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// The comparator deciding which element has priority
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Removes every element, keeping arity and comparator
    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[inline]
    fn parent(&self, index: usize) -> usize {
        (index - 1) / self.arity
    }

    /// Index of the leftmost child, saturating for trees too deep to address
    #[inline]
    fn first_child(&self, index: usize) -> usize {
        index.saturating_mul(self.arity).saturating_add(1)
    }
}

impl<T, C: Compare<T>> DaryHeap<T, C> {
    /// Builds a heap from an unordered vector in O(n)
    ///
    /// # Panics
    /// Panics if `arity` is zero.
    pub fn from_vec_with(data: Vec<T>, arity: usize, comparator: C) -> Self {
        let mut heap = Self::with_comparator(arity, comparator);
        heap.data = data;
        heap.heapify();
        heap
    }

    /// Consumes the heap, returning its elements in the order `pop` yields them
    pub fn into_ordered_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.pop() {
            out.push(item);
        }
        out
    }

    /// Restores the heap property over the whole backing vector
    fn heapify(&mut self) {
        let len = self.data.len();
        if len > 1 {
            for index in (0..=self.parent(len - 1)).rev() {
                self.sift_down(index);
            }
        }
        debug!(len, arity = self.arity, "heapified");
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = self.parent(index);
            if self
                .comparator
                .has_priority(&self.data[index], &self.data[parent])
            {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    ///
    /// Among siblings the leftmost of equally ranked children wins; the
    /// parent only moves when that child strictly outranks it.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let first = self.first_child(index);
            if first >= len {
                break;
            }
            let end = first.saturating_add(self.arity).min(len);

            let mut best = first;
            for child in first + 1..end {
                if self
                    .comparator
                    .has_priority(&self.data[child], &self.data[best])
                {
                    best = child;
                }
            }

            if !self
                .comparator
                .has_priority(&self.data[best], &self.data[index])
            {
                break;
            }
            self.data.swap(index, best);
            index = best;
        }
    }

    /// Checks that no element outranks its parent
    #[cfg(test)]
    fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|index| {
            !self
                .comparator
                .has_priority(&self.data[index], &self.data[self.parent(index)])
        })
    }
}

impl<T> DaryHeap<T, Less>
where
    Less: Compare<T>,
{
    /// Builds a min-heap from an unordered vector in O(n)
    ///
    /// # Panics
    /// Panics if `arity` is zero.
    pub fn from_vec(data: Vec<T>, arity: usize) -> Self {
        Self::from_vec_with(data, arity, Less)
    }
}

impl<T, C: Compare<T>> PriorityHeap<T> for DaryHeap<T, C> {
    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    fn top(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        let mut item = self.data.pop().ok_or(HeapError::Empty)?;
        if let Some(root) = self.data.first_mut() {
            mem::swap(&mut item, root);
            self.sift_down(0);
        }
        Ok(item)
    }
}

impl<T, C: Default> Default for DaryHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(DEFAULT_ARITY, C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for DaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for DaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec_with(iter.into_iter().collect(), DEFAULT_ARITY, C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for DaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DaryHeap")
            .field("arity", &self.arity)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}
