//! Core domain logic for Taskpad, a single-list task manager.
//! This crate is the single source of truth for business invariants.

pub mod display;
pub mod logging;
pub mod model;
pub mod persist;
pub mod service;
pub mod session;
pub mod store;
pub mod view;

pub use display::{escape_title, format_timestamp};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Priority, Task, TaskId};
pub use persist::{
    decode_tasks, encode_tasks, MemoryStateStore, PersistError, PersistResult, SqliteStateStore,
    StateStore, TASKS_KEY,
};
pub use service::task_service::{ServiceError, ServiceResult, TaskService};
pub use session::edit_session::EditSession;
pub use store::task_store::{StoreError, StoreResult, TaskPatch, TaskStore};
pub use view::task_view::{project, FilterStatus, SortCriterion};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
