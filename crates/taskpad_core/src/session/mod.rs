//! Transient edit state.

pub mod edit_session;
