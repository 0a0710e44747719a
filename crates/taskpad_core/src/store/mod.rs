//! Canonical task collection and its mutation contract.
//!
//! # Responsibility
//! - Route every mutation through one owner of the collection.
//! - Mirror each successful mutation to the persistence collaborator.
//!
//! # Invariants
//! - The collection never holds two tasks with the same id.
//! - A mutation that changes nothing writes nothing.

pub mod task_store;
