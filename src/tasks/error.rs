//! Task board errors.

use super::task::TaskId;
use crate::store::StoreError;

#[derive(Debug, derive_more::Display)]
pub enum TaskError {
    /// Title missing or blank.
    #[display("task title must not be empty")]
    EmptyTitle,

    #[display("task {_0} not found")]
    NotFound(TaskId),

    #[display("unknown column {_0:?}")]
    UnknownColumn(String),

    #[display("unknown priority {_0:?}")]
    UnknownPriority(String),

    /// Backing file could not be read or written.
    #[display("{_0}")]
    Store(StoreError),
}

impl std::error::Error for TaskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TaskError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for TaskError {
    fn from(e: StoreError) -> Self {
        TaskError::Store(e)
    }
}
