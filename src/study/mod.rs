//! Study-session log.
//!
//! Records when a study session started and ended, the subject, and free
//! notes. Sessions can be recorded, listed, fetched, and edited; the
//! log never deletes.

mod error;
mod session;

pub use error::StudyError;
pub use session::{NewSession, SessionId, StudyLog, StudySession};
