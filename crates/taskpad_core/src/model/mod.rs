//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record and its priority enum.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - `created_at` is captured once at creation and never changes.

pub mod task;
