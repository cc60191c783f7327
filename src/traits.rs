//! Common traits for priority heaps
//!
//! This module provides the [`PriorityHeap`] trait implemented by
//! [`DaryHeap`](crate::dary::DaryHeap) and the [`HeapError`] returned when the
//! top of an empty heap is requested.
//!
//! Unlike `std::collections::BinaryHeap`, which signals an empty heap with
//! `None`, the operations here report [`HeapError::Empty`] so that an empty
//! access is an explicit error the caller has to handle.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `top` or `pop` was called on a heap holding no elements
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for priority heaps
///
/// The element with the highest priority, as decided by the heap's comparator,
/// is always the one returned by `top` and removed by `pop`.
///
/// # Example
///
/// ```rust
/// use dary_heaps::{DaryHeap, HeapError, PriorityHeap};
///
/// fn drain<H: PriorityHeap<i32>>(heap: &mut H) -> Vec<i32> {
///     let mut out = Vec::new();
///     while let Ok(value) = heap.pop() {
///         out.push(value);
///     }
///     out
/// }
///
/// let mut heap = DaryHeap::with_arity(4);
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.top(), Ok(&1));
/// assert_eq!(drain(&mut heap), vec![1, 2, 3]);
/// assert_eq!(heap.pop(), Err(HeapError::Empty));
/// ```
pub trait PriorityHeap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) for tree-shaped heaps.
    fn push(&mut self, item: T);

    /// Returns the highest priority element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no elements.
    ///
    /// # Time Complexity
    /// O(1)
    fn top(&self) -> Result<&T, HeapError>;

    /// Removes and returns the highest priority element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no elements.
    ///
    /// # Time Complexity
    /// O(log n) for tree-shaped heaps.
    fn pop(&mut self) -> Result<T, HeapError>;
}
