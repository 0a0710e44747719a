//! Derived read views over the task collection.

pub mod task_view;
