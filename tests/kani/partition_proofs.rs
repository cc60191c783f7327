//! Kani proofs for the linked-list partition
//!
//! To run these proofs:
//!   cargo kani

#[cfg(kani)]
use dary_heaps::linked_list::List;

/// Proof that partition neither drops nor duplicates nodes and splits on the pivot
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_partition_conserves_nodes() {
    let values: [i8; 4] = kani::any();
    let pivot: i8 = kani::any();

    let mut list: List<i8> = values.into_iter().collect();
    let (smaller, larger) = list.partition(&pivot);

    assert!(list.is_empty());
    assert!(smaller.len() + larger.len() == values.len());
    assert!(smaller.iter().all(|v| *v <= pivot));
    assert!(larger.iter().all(|v| *v > pivot));
}

/// Proof that the smaller output keeps input order
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_partition_keeps_order() {
    let values: [i8; 3] = kani::any();
    let pivot: i8 = kani::any();
    kani::assume(values.iter().all(|v| *v <= pivot));

    let mut list: List<i8> = values.into_iter().collect();
    let (smaller, larger) = list.partition(&pivot);

    assert!(larger.is_empty());
    let mut iter = smaller.iter();
    assert!(iter.next() == Some(&values[0]));
    assert!(iter.next() == Some(&values[1]));
    assert!(iter.next() == Some(&values[2]));
    assert!(iter.next().is_none());
}
