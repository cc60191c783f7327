//! D-ary Heaps and List Partitioning for Rust
//!
//! This crate provides two small, independent data-structure components:
//!
//! - **D-ary Heap** ([`DaryHeap`]): an array-backed priority heap with a
//!   configurable branching factor and a pluggable "has priority over"
//!   comparator. O(log_d n) push and pop; O(1) top.
//! - **Pivot Partition** ([`linked_list::partition`]): splits a singly linked
//!   list into the nodes `<= pivot` and the nodes `> pivot`, moving the
//!   original nodes and keeping their relative order.
//!
//! Accessing the top of an empty heap is reported as [`HeapError::Empty`]
//! rather than `None`.
//!
//! # Example
//!
//! ```rust
//! use dary_heaps::{DaryHeap, Greater, HeapError, PriorityHeap};
//!
//! let mut heap = DaryHeap::with_comparator(4, Greater);
//! heap.push(5);
//! heap.push(3);
//! heap.push(8);
//!
//! assert_eq!(heap.top(), Ok(&8));
//! assert_eq!(heap.pop(), Ok(8));
//! assert_eq!(heap.len(), 2);
//!
//! heap.clear();
//! assert_eq!(heap.pop(), Err(HeapError::Empty));
//! ```

pub mod compare;
pub mod dary;
pub mod linked_list;
pub mod traits;

// Re-export the main types for convenience
pub use compare::{Compare, Greater, Less};
pub use dary::{DaryHeap, MaxHeap, MinHeap};
pub use traits::{HeapError, PriorityHeap};
