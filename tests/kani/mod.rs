//! Kani proof harnesses
//!
//! The files are organized by component:
//!
//! - `dary_proofs.rs`: push/top/pop contracts of the d-ary heap
//! - `partition_proofs.rs`: node conservation and ordering of the list partition

#[cfg(kani)]
#[path = "dary_proofs.rs"]
mod dary_proofs;
#[cfg(kani)]
#[path = "partition_proofs.rs"]
mod partition_proofs;
