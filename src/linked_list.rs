//! Singly linked list with a destructive pivot partition
//!
//! Nodes are owned through `Option<Box<Node<T>>>` links. [`partition`]
//! consumes a list and hands every node over to exactly one of two output
//! lists: values `<= pivot` and values `> pivot`. No node is copied or
//! reallocated, and the relative order inside each output is the input order.
//!
//! The split recurses once per node, so stack depth grows linearly with the
//! list length. That is fine for the list sizes this module is meant for; it
//! is not a general-purpose list library.
//!
//! # Example
//!
//! ```rust
//! use dary_heaps::linked_list::List;
//!
//! let mut list: List<i32> = [5, 1, 8, 2, 9, 3].into_iter().collect();
//! let (smaller, larger) = list.partition(&4);
//!
//! assert!(list.is_empty());
//! assert_eq!(Vec::from(smaller), vec![1, 2, 3]);
//! assert_eq!(Vec::from(larger), vec![5, 8, 9]);
//! ```

use std::fmt;

use tracing::trace;

/// An owning link to the next node, `None` at the end of the list
pub type Link<T> = Option<Box<Node<T>>>;

/// A list node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    /// The stored value
    pub val: T,
    /// The rest of the list
    pub next: Link<T>,
}

impl<T> Node<T> {
    /// Creates a node in front of `next`
    pub fn new(val: T, next: Link<T>) -> Self {
        Self { val, next }
    }
}

/// Splits the list in `head` around `pivot`
///
/// Returns `(smaller, larger)`: the nodes whose value is `<= pivot` and the
/// nodes whose value is `> pivot`, each in their original order. `head` is
/// left as `None`.
pub fn partition<T: PartialOrd>(head: &mut Link<T>, pivot: &T) -> (Link<T>, Link<T>) {
    let mut smaller = None;
    let mut larger = None;
    split(head.take(), &mut smaller, &mut larger, pivot);
    trace!(
        smaller = count(&smaller),
        larger = count(&larger),
        "partitioned list"
    );
    (smaller, larger)
}

/// Moves the front node of `list` into the slot for its class, then
/// continues with that node's `next` as the class's new tail slot.
fn split<T: PartialOrd>(
    list: Link<T>,
    smaller: &mut Link<T>,
    larger: &mut Link<T>,
    pivot: &T,
) {
    let Some(mut node) = list else {
        return;
    };
    let rest = node.next.take();

    if node.val <= *pivot {
        let tail = smaller.insert(node);
        split(rest, &mut tail.next, larger, pivot);
    } else {
        let tail = larger.insert(node);
        split(rest, smaller, &mut tail.next, pivot);
    }
}

fn count<T>(mut link: &Link<T>) -> usize {
    let mut n = 0;
    while let Some(node) = link {
        n += 1;
        link = &node.next;
    }
    n
}

/// An owning singly linked list
///
/// A thin wrapper around a [`Link`] head that adds construction, iteration
/// and a drop that does not recurse through the nodes.
pub struct List<T> {
    head: Link<T>,
}

impl<T> List<T> {
    /// Creates an empty list
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Takes ownership of an existing chain of nodes
    pub fn from_link(head: Link<T>) -> Self {
        Self { head }
    }

    /// Releases the chain of nodes, leaving the list empty
    pub fn into_link(mut self) -> Link<T> {
        self.head.take()
    }

    /// Returns true if the list has no nodes
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// O(n)
    pub fn len(&self) -> usize {
        count(&self.head)
    }

    /// Inserts a value before the current head
    pub fn push_front(&mut self, val: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node::new(val, next)));
    }

    /// Removes and returns the first value
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            node.val
        })
    }

    /// Returns the first value without removing it
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.val)
    }

    /// The head link
    pub fn head(&self) -> &Link<T> {
        &self.head
    }

    /// Mutable access to the head link, e.g. to pass it to [`partition`]
    pub fn head_mut(&mut self) -> &mut Link<T> {
        &mut self.head
    }

    /// Iterates over the values front to back
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T: PartialOrd> List<T> {
    /// Splits this list around `pivot`, leaving it empty
    ///
    /// See [`partition`] for the ordering guarantees.
    pub fn partition(&mut self, pivot: &T) -> (List<T>, List<T>) {
        let (smaller, larger) = partition(&mut self.head, pivot);
        (List::from_link(smaller), List::from_link(larger))
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        let mut tail = &mut list.head;
        for val in iter {
            tail = &mut tail.insert(Box::new(Node::new(val, None))).next;
        }
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T> From<List<T>> for Vec<T> {
    fn from(list: List<T>) -> Self {
        list.into_iter().collect()
    }
}

/// Borrowing iterator over a [`List`]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.val
        })
    }
}

/// Owning iterator over a [`List`]
pub struct IntoIter<T>(List<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
