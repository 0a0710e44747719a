//! Task store: source of truth for the collection.
//!
//! # Responsibility
//! - Own the ordered task collection and all CRUD mutations on it.
//! - Persist the full serialized collection after every change.
//!
//! # Invariants
//! - Blank titles are never committed, on create or on update.
//! - Mutations targeting a missing id leave the collection and its
//!   persisted form untouched.
//! - A failed persistence write does not roll back the in-memory change;
//!   in-memory state stays authoritative for the session.

use crate::model::task::{Priority, Task, TaskId};
use crate::persist::{decode_tasks, encode_tasks, PersistError, StateStore, TASKS_KEY};
use log::warn;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by task collection mutations.
#[derive(Debug)]
pub enum StoreError {
    /// The (draft) title was empty or whitespace-only.
    EmptyTitle,
    /// No task with this id exists. Benign for most callers: the task was
    /// typically deleted by an earlier event.
    NotFound(TaskId),
    /// The in-memory mutation succeeded but the state write failed.
    Persist(PersistError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be blank"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::Persist(err) => write!(f, "task state not persisted: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Persist(err) => Some(err),
            Self::EmptyTitle | Self::NotFound(_) => None,
        }
    }
}

impl From<PersistError> for StoreError {
    fn from(value: PersistError) -> Self {
        Self::Persist(value)
    }
}

/// Partial update applied to an existing task. Absent fields keep their
/// current value.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub priority: Option<Priority>,
}

/// Owner of the canonical task collection, insertion-ordered.
pub struct TaskStore<S: StateStore> {
    tasks: Vec<Task>,
    state: S,
}

impl<S: StateStore> TaskStore<S> {
    /// Restores the collection from the state store.
    ///
    /// An absent key, a read failure or an undecodable payload all yield an
    /// empty collection; startup must never fail on bad persisted state.
    pub fn load(state: S) -> Self {
        let tasks = match state.load(TASKS_KEY) {
            Ok(Some(payload)) => match decode_tasks(&payload) {
                Ok(tasks) => drop_duplicate_ids(tasks),
                Err(err) => {
                    warn!("event=state_load module=store status=warn reason=undecodable error={err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("event=state_load module=store status=warn reason=read_failed error={err}");
                Vec::new()
            }
        };

        Self { tasks, state }
    }

    /// Creates a task and appends it to the collection.
    ///
    /// The title is stored exactly as typed; only the blank check trims.
    pub fn create(&mut self, title: &str, priority: Priority) -> StoreResult<Task> {
        if title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        let task = Task::new(title, priority);
        self.tasks.push(task.clone());
        self.persist()?;
        Ok(task)
    }

    /// Replaces only the fields provided in `patch` on the matching task.
    pub fn update(&mut self, id: TaskId, patch: TaskPatch) -> StoreResult<Task> {
        if let Some(title) = patch.title.as_deref() {
            if title.trim().is_empty() {
                return Err(StoreError::EmptyTitle);
            }
        }

        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))?;

        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }

        let updated = task.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Flips the completion flag on the matching task.
    pub fn toggle_completed(&mut self, id: TaskId) -> StoreResult<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))?;

        task.completed = !task.completed;

        let toggled = task.clone();
        self.persist()?;
        Ok(toggled)
    }

    /// Removes the matching task if present.
    ///
    /// Deleting an absent id is an idempotent no-op and writes nothing.
    /// Returns whether a task was actually removed, so the caller can drop
    /// an edit session that referenced it.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }

        self.persist()?;
        Ok(true)
    }

    /// Read-only snapshot of the collection, insertion order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    fn persist(&self) -> StoreResult<()> {
        let payload = encode_tasks(&self.tasks)?;
        if let Err(err) = self.state.save(TASKS_KEY, &payload) {
            warn!("event=state_save module=store status=warn error={err}");
            return Err(err.into());
        }
        Ok(())
    }
}

/// Keeps the first task for each id, dropping later duplicates.
///
/// Duplicate ids can only come from a corrupted or hand-edited payload;
/// read paths reject invalid persisted state instead of masking it.
fn drop_duplicate_ids(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(tasks.len());
    for task in tasks {
        if seen.insert(task.id) {
            unique.push(task);
        } else {
            warn!(
                "event=state_load module=store status=warn reason=duplicate_id id={}",
                task.id
            );
        }
    }
    unique
}
