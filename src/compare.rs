//! Priority comparators
//!
//! A heap decides which element belongs closer to the root through a
//! [`Compare`] implementation. `has_priority(a, b)` must be a strict weak
//! ordering: irreflexive, asymmetric and transitive. Passing `<=` instead of
//! `<` breaks the heap's guarantees (it stays memory safe and terminates, but
//! the pop order is unspecified).
//!
//! Closures of the form `Fn(&T, &T) -> bool` implement [`Compare`] directly:
//!
//! ```rust
//! use dary_heaps::{DaryHeap, PriorityHeap};
//!
//! // Longest string first
//! let mut heap = DaryHeap::with_comparator(3, |a: &String, b: &String| a.len() > b.len());
//! heap.push("ab".to_string());
//! heap.push("abcd".to_string());
//! heap.push("a".to_string());
//! assert_eq!(heap.pop().as_deref(), Ok("abcd"));
//! ```

/// "Has priority over" predicate used to order a heap
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` must be strictly closer to the root than `b`
    fn has_priority(&self, a: &T, b: &T) -> bool;
}

/// Smaller values first, producing a min-heap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Less;

/// Larger values first, producing a max-heap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greater;

impl<T: PartialOrd + ?Sized> Compare<T> for Less {
    #[inline]
    fn has_priority(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: PartialOrd + ?Sized> Compare<T> for Greater {
    #[inline]
    fn has_priority(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn has_priority(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
