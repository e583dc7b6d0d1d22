//! Task records and their classification.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::TaskError;

/// Task identifier. Allocated from 1 upward and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u32);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Board column. Declaration order is display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    ToDo,
    InProgress,
    Done,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Column; 3] = [Column::ToDo, Column::InProgress, Column::Done];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Column::ToDo => "To Do",
            Column::InProgress => "In Progress",
            Column::Done => "Done",
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Column {
    type Err = TaskError;

    /// Accepts labels and identifier spellings, ignoring case:
    /// "To Do", "todo", "to_do", "in-progress", "Done", ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "todo" => Ok(Column::ToDo),
            "inprogress" => Ok(Column::InProgress),
            "done" => Ok(Column::Done),
            _ => Err(TaskError::UnknownColumn(s.to_string())),
        }
    }
}

/// Task priority. Declaration order is sort order: urgent work first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Urgent,
    Emergent,
    Necessary,
    Delegable,
}

impl Priority {
    /// All priorities, most pressing first.
    pub const ALL: [Priority; 4] = [
        Priority::Urgent,
        Priority::Emergent,
        Priority::Necessary,
        Priority::Delegable,
    ];

    /// Sort rank; lower sorts first.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::Emergent => "emergent",
            Priority::Necessary => "necessary",
            Priority::Delegable => "delegable",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Priority::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TaskError::UnknownPriority(s.to_string()))
    }
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub column: Column,
    pub priority: Priority,
    /// Free-form date text, as entered.
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub notes: String,
}

/// Fields for a new task. New tasks always start in `Column::ToDo`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub priority: Priority,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub notes: String,
}

impl NewTask {
    /// Create a new task with just a title and priority.
    pub fn new(title: impl Into<String>, priority: Priority) -> Self {
        Self {
            title: title.into(),
            priority,
            start_date: None,
            end_date: None,
            notes: String::new(),
        }
    }

    /// Set the start and end dates.
    #[must_use]
    pub fn with_dates(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self.end_date = Some(end.into());
        self
    }

    /// Set the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// Partial edit. `None` keeps the current value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub column: Option<Column>,
    pub priority: Option<Priority>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub notes: Option<String>,
}
