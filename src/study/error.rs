//! Study log errors.

use super::session::SessionId;
use crate::store::StoreError;

#[derive(Debug, derive_more::Display)]
pub enum StudyError {
    /// A required field is blank.
    #[display("field {_0:?} is required")]
    MissingField(&'static str),

    #[display("study session {_0} not found")]
    NotFound(SessionId),

    #[display("{_0}")]
    Store(StoreError),
}

impl std::error::Error for StudyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StudyError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for StudyError {
    fn from(e: StoreError) -> Self {
        StudyError::Store(e)
    }
}
