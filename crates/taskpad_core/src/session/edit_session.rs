//! In-flight edit of exactly one task.
//!
//! The session references its task by id, never by ownership, and carries
//! draft fields that stay out of the store until committed. At most one
//! session exists at a time; `TaskService` owns it as an `Option` rather
//! than as scattered flags.

use crate::model::task::{Priority, Task, TaskId};

/// Draft state for one task being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// Id of the task under edit.
    pub task_id: TaskId,
    /// Working copy of the title.
    pub draft_title: String,
    /// Working copy of the priority.
    pub draft_priority: Priority,
}

impl EditSession {
    /// Starts a session seeded from the task's current fields.
    pub fn for_task(task: &Task) -> Self {
        Self {
            task_id: task.id,
            draft_title: task.title.clone(),
            draft_priority: task.priority,
        }
    }

    /// Returns whether the draft title is empty or whitespace-only.
    ///
    /// A blank draft blocks save; the session stays alive for correction.
    pub fn has_blank_title(&self) -> bool {
        self.draft_title.trim().is_empty()
    }
}
