//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store and edit-session state into intent-level APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod task_service;
