//! Filtered and sorted projection of the task collection.
//!
//! # Responsibility
//! - Compute the display order for a given filter and sort criterion.
//!
//! # Invariants
//! - `project` is pure: it never mutates its input and identical inputs
//!   yield identical output.
//! - Sorting is stable, so ties keep insertion order.

use crate::model::task::Task;

/// Which completion states pass the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterStatus {
    #[default]
    All,
    Completed,
    Uncompleted,
}

impl FilterStatus {
    /// Parses a presentation-supplied value; unknown input passes everything.
    pub fn from_param(value: &str) -> Self {
        match value {
            "completed" => Self::Completed,
            "uncompleted" => Self::Uncompleted,
            _ => Self::All,
        }
    }

    fn keeps(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::Uncompleted => !task.completed,
        }
    }
}

/// How the filtered tasks are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriterion {
    /// Most recent first.
    Date,
    /// High before normal before low.
    Priority,
    /// Case-insensitive title order.
    Name,
}

impl SortCriterion {
    /// Parses a presentation-supplied value.
    ///
    /// Unknown input yields `None`, which [`project`] treats as "leave the
    /// filtered order unchanged".
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "date" => Some(Self::Date),
            "priority" => Some(Self::Priority),
            "name" => Some(Self::Name),
            _ => None,
        }
    }
}

/// Computes the display projection of `tasks`.
///
/// The input stays untouched; the returned tasks are clones in display
/// order. `sort = None` keeps the filtered sequence in input order.
pub fn project(tasks: &[Task], filter: FilterStatus, sort: Option<SortCriterion>) -> Vec<Task> {
    let mut visible: Vec<Task> = tasks
        .iter()
        .filter(|task| filter.keeps(task))
        .cloned()
        .collect();

    match sort {
        Some(SortCriterion::Date) => {
            visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        Some(SortCriterion::Priority) => {
            visible.sort_by(|a, b| a.priority.rank().cmp(&b.priority.rank()));
        }
        Some(SortCriterion::Name) => {
            // Unicode lowercase fold stands in for the locale collator,
            // which lives outside the core.
            visible.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
        None => {}
    }

    visible
}
