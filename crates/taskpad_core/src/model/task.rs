//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical record for one to-do item.
//! - Provide constructors that stamp identity and creation time.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `created_at` never changes after construction.
//! - A blank title is never committed to a store (enforced by the store
//!   layer; the model only exposes the blank check).

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for every task in the collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Display priority of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Needs attention first.
    High,
    /// Everyday work.
    #[default]
    Normal,
    /// Can wait.
    Low,
}

impl Priority {
    /// Sort rank used by the priority sort criterion. Lower sorts first.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Normal => 1,
            Self::Low => 2,
        }
    }

    /// Wire/display name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Normal => "normal",
            Self::Low => "low",
        }
    }

    /// Parses a presentation-supplied value.
    ///
    /// Unknown values fall back to `Normal` rather than failing, so a
    /// stale or malformed selection can never block task creation.
    pub fn from_param(value: &str) -> Self {
        match value {
            "high" => Self::High,
            "low" => Self::Low,
            _ => Self::Normal,
        }
    }
}

/// One to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable ID, generated at creation, never reused.
    pub id: TaskId,
    /// User-entered title, stored exactly as typed.
    pub title: String,
    /// Completion flag toggled by the user.
    pub completed: bool,
    /// Creation time in Unix epoch milliseconds. Immutable.
    pub created_at: i64,
    /// Display priority.
    pub priority: Priority,
}

impl Task {
    /// Creates a new task with a generated ID and the current wall-clock
    /// time as `created_at`.
    pub fn new(title: impl Into<String>, priority: Priority) -> Self {
        Self::with_id(Uuid::new_v4(), title, priority, now_epoch_ms())
    }

    /// Creates a task with caller-provided identity and creation time.
    ///
    /// Used by load/restore paths where both already exist.
    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
        priority: Priority,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
            created_at,
            priority,
        }
    }

    /// Returns whether the title is empty or whitespace-only.
    pub fn has_blank_title(&self) -> bool {
        self.title.trim().is_empty()
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
///
/// A clock before the epoch degrades to 0 instead of failing; task creation
/// must never be blocked by a misconfigured clock.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
