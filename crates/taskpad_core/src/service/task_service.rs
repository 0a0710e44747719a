//! Task use-case service.
//!
//! # Responsibility
//! - Translate presentation intents into store and session mutations.
//! - Own the single optional `EditSession`.
//!
//! # Invariants
//! - At most one edit session exists; beginning a new one discards the old
//!   draft without saving it.
//! - Deleting the task under edit cancels the session, even when the id was
//!   already gone from the store.
//! - A blank draft title blocks save and keeps the session active.

use crate::model::task::{Priority, Task, TaskId};
use crate::persist::StateStore;
use crate::session::edit_session::EditSession;
use crate::store::task_store::{StoreError, TaskPatch, TaskStore};
use crate::view::task_view::{project, FilterStatus, SortCriterion};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors raised by intent handling.
#[derive(Debug)]
pub enum ServiceError {
    /// Save or draft intent arrived with no edit in progress.
    NoActiveSession,
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoActiveSession => write!(f, "no edit session is active"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::NoActiveSession => None,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Intent-level facade over the store and the single edit session.
pub struct TaskService<S: StateStore> {
    store: TaskStore<S>,
    session: Option<EditSession>,
}

impl<S: StateStore> TaskService<S> {
    pub fn new(store: TaskStore<S>) -> Self {
        Self {
            store,
            session: None,
        }
    }

    /// Adds a new task. Blank titles are rejected with the collection
    /// untouched, so the presentation can keep the input for correction.
    pub fn add_task(&mut self, title: &str, priority: Priority) -> ServiceResult<Task> {
        Ok(self.store.create(title, priority)?)
    }

    /// Starts editing the given task, seeding drafts from its current
    /// fields. Any session already in progress is discarded unsaved.
    pub fn begin_edit(&mut self, id: TaskId) -> ServiceResult<&EditSession> {
        let task = self
            .store
            .list()
            .iter()
            .find(|task| task.id == id)
            .ok_or(ServiceError::Store(StoreError::NotFound(id)))?;

        Ok(self.session.insert(EditSession::for_task(task)))
    }

    /// Updates the draft title of the active session; no-op without one.
    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        if let Some(session) = self.session.as_mut() {
            session.draft_title = title.into();
        }
    }

    /// Updates the draft priority of the active session; no-op without one.
    pub fn set_draft_priority(&mut self, priority: Priority) {
        if let Some(session) = self.session.as_mut() {
            session.draft_priority = priority;
        }
    }

    /// Commits the active session's drafts into the store.
    ///
    /// A blank draft title keeps the session alive for correction; every
    /// other outcome (success, missing task, persist failure after the
    /// in-memory commit) ends the session.
    pub fn save_edit(&mut self) -> ServiceResult<Task> {
        let session = self.session.as_ref().ok_or(ServiceError::NoActiveSession)?;
        if session.has_blank_title() {
            return Err(StoreError::EmptyTitle.into());
        }

        let id = session.task_id;
        let patch = TaskPatch {
            title: Some(session.draft_title.clone()),
            priority: Some(session.draft_priority),
        };

        match self.store.update(id, patch) {
            Ok(task) => {
                self.session = None;
                Ok(task)
            }
            Err(err @ StoreError::EmptyTitle) => Err(err.into()),
            Err(err) => {
                self.session = None;
                Err(err.into())
            }
        }
    }

    /// Drops the active session, discarding its drafts.
    pub fn cancel_edit(&mut self) {
        self.session = None;
    }

    /// Deletes a task; idempotent for absent ids. A session referencing the
    /// id is cancelled either way.
    pub fn delete_task(&mut self, id: TaskId) -> ServiceResult<()> {
        if self
            .session
            .as_ref()
            .is_some_and(|session| session.task_id == id)
        {
            self.session = None;
        }

        self.store.delete(id)?;
        Ok(())
    }

    /// Flips a task's completion flag.
    pub fn toggle_task(&mut self, id: TaskId) -> ServiceResult<Task> {
        Ok(self.store.toggle_completed(id)?)
    }

    /// Projection of the collection for display.
    pub fn visible_tasks(&self, filter: FilterStatus, sort: Option<SortCriterion>) -> Vec<Task> {
        project(self.store.list(), filter, sort)
    }

    /// The raw collection, insertion order.
    pub fn tasks(&self) -> &[Task] {
        self.store.list()
    }

    /// The edit in progress, if any.
    pub fn edit_session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }
}
