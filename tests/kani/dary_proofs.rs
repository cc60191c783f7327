//! Kani proofs for the d-ary heap
//!
//! Bounded checks over symbolic values and arities: length bookkeeping, the
//! empty error, and that pops come out in comparator order.
//!
//! To run these proofs:
//!   cargo kani

#[cfg(kani)]
use dary_heaps::{DaryHeap, Greater, HeapError, PriorityHeap};

/// Proof that push always increments the length
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_push_increments_len() {
    let arity: usize = kani::any();
    kani::assume(arity >= 1 && arity <= 4);
    let mut heap: DaryHeap<u32> = DaryHeap::with_arity(arity);

    for _ in 0..3 {
        let before = heap.len();
        heap.push(kani::any());
        assert!(heap.len() == before + 1);
        assert!(!heap.is_empty());
    }
}

/// Proof that an empty heap reports the empty error from top and pop
#[cfg(kani)]
#[kani::proof]
fn verify_empty_heap_errors() {
    let arity: usize = kani::any();
    kani::assume(arity >= 1 && arity <= 8);
    let mut heap: DaryHeap<u32> = DaryHeap::with_arity(arity);

    assert!(heap.top() == Err(HeapError::Empty));
    assert!(heap.pop() == Err(HeapError::Empty));
    assert!(heap.len() == 0);
}

/// Proof that the top after pushes is the minimum pushed
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_top_is_minimum() {
    let arity: usize = kani::any();
    kani::assume(arity >= 1 && arity <= 3);
    let mut heap: DaryHeap<u8> = DaryHeap::with_arity(arity);

    let a: u8 = kani::any();
    let b: u8 = kani::any();
    let c: u8 = kani::any();
    heap.push(a);
    heap.push(b);
    heap.push(c);

    assert!(heap.top() == Ok(&a.min(b).min(c)));
}

/// Proof that four pops from a max-heap are non-increasing
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_max_heap_pop_order() {
    let arity: usize = kani::any();
    kani::assume(arity >= 1 && arity <= 3);
    let mut heap = DaryHeap::with_comparator(arity, Greater);

    for _ in 0..4 {
        heap.push(kani::any::<u8>());
    }

    let mut last = u8::MAX;
    for _ in 0..4 {
        match heap.pop() {
            Ok(value) => {
                assert!(value <= last);
                last = value;
            }
            Err(_) => panic!("heap emptied early"),
        }
    }
    assert!(heap.is_empty());
}
