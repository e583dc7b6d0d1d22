use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::StudyError;
use crate::store::{Backend, StoreConfig};

/// Session identifier, allocated from 1 upward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub u32);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One logged study session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    pub id: SessionId,
    /// Start time text, as entered.
    pub start: String,
    pub end: String,
    pub subject: String,
    pub notes: String,
}

/// Fields for recording or replacing a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSession {
    pub start: String,
    pub end: String,
    pub subject: String,
    pub notes: String,
}

impl NewSession {
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            subject: subject.into(),
            notes: String::new(),
        }
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    fn validate(&self) -> Result<(), StudyError> {
        for (field, value) in [
            ("start", &self.start),
            ("end", &self.end),
            ("subject", &self.subject),
        ] {
            if value.trim().is_empty() {
                return Err(StudyError::MissingField(field));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct LogData {
    next_id: u32,
    sessions: Vec<StudySession>,
}

impl Default for LogData {
    fn default() -> Self {
        Self {
            next_id: 1,
            sessions: Vec::new(),
        }
    }
}

/// The session log. Starts empty; `seed_examples` has no effect here.
#[derive(Debug)]
pub struct StudyLog {
    data: LogData,
    backend: Backend,
}

impl StudyLog {
    /// Open a log, loading the backing file if there is one.
    pub fn open(config: &StoreConfig) -> Result<Self, StudyError> {
        let backend = Backend::new(config);
        let data = match backend.load::<LogData>()? {
            Some(data) => data,
            None => {
                let data = LogData::default();
                backend.save(&data)?;
                data
            }
        };
        info!(sessions = data.sessions.len(), "study log opened");
        Ok(Self { data, backend })
    }

    /// Record a session.
    ///
    /// The log is unchanged unless the save succeeds.
    pub fn record(&mut self, new: NewSession) -> Result<SessionId, StudyError> {
        new.validate()?;
        let mut next = self.data.clone();
        let id = SessionId(next.next_id);
        next.next_id += 1;
        next.sessions.push(StudySession {
            id,
            start: new.start,
            end: new.end,
            subject: new.subject,
            notes: new.notes,
        });
        self.backend.save(&next)?;
        self.data = next;
        info!(%id, "study session recorded");
        Ok(id)
    }

    /// All sessions in id order.
    #[must_use]
    pub fn list(&self) -> &[StudySession] {
        &self.data.sessions
    }

    #[must_use]
    pub fn get(&self, id: SessionId) -> Option<&StudySession> {
        self.data.sessions.iter().find(|s| s.id == id)
    }

    /// Replace every field of a session.
    pub fn update(&mut self, id: SessionId, new: NewSession) -> Result<&StudySession, StudyError> {
        new.validate()?;
        let index = self
            .data
            .sessions
            .iter()
            .position(|s| s.id == id)
            .ok_or(StudyError::NotFound(id))?;

        let mut next = self.data.clone();
        next.sessions[index] = StudySession {
            id,
            start: new.start,
            end: new.end,
            subject: new.subject,
            notes: new.notes,
        };
        self.backend.save(&next)?;
        self.data = next;
        info!(%id, "study session updated");
        Ok(&self.data.sessions[index])
    }

    /// Total number of sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log() -> StudyLog {
        StudyLog::open(&StoreConfig::in_memory()).unwrap()
    }

    #[test]
    fn test_starts_empty() {
        let log = log();
        assert!(log.is_empty());
        assert!(log.list().is_empty());
    }

    #[test]
    fn test_record_and_list() {
        let mut log = log();
        let a = log
            .record(NewSession::new("2025-01-10T09:00", "2025-01-10T10:30", "Algebra"))
            .unwrap();
        let b = log
            .record(
                NewSession::new("2025-01-11T14:00", "2025-01-11T15:00", "History")
                    .with_notes("chapter 3"),
            )
            .unwrap();

        assert_eq!(a, SessionId(1));
        assert_eq!(b, SessionId(2));
        let subjects: Vec<_> = log.list().iter().map(|s| s.subject.as_str()).collect();
        assert_eq!(subjects, vec!["Algebra", "History"]);
        assert_eq!(log.get(b).unwrap().notes, "chapter 3");
    }

    #[test]
    fn test_missing_fields_rejected() {
        let mut log = log();
        let err = log.record(NewSession::new("", "10:00", "Math")).unwrap_err();
        assert!(matches!(err, StudyError::MissingField("start")));

        let err = log.record(NewSession::new("09:00", "10:00", "  ")).unwrap_err();
        assert_eq!(err.to_string(), "field \"subject\" is required");
        assert!(log.is_empty());
    }

    #[test]
    fn test_update_replaces_all_fields() {
        let mut log = log();
        let id = log
            .record(NewSession::new("09:00", "10:00", "Math").with_notes("old"))
            .unwrap();

        let updated = log.update(id, NewSession::new("11:00", "12:00", "Physics")).unwrap();
        assert_eq!(updated.subject, "Physics");
        assert_eq!(updated.start, "11:00");
        assert_eq!(updated.notes, "");
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut log = log();
        let err = log
            .update(SessionId(7), NewSession::new("09:00", "10:00", "Math"))
            .unwrap_err();
        assert!(matches!(err, StudyError::NotFound(SessionId(7))));
        assert_eq!(err.to_string(), "study session #7 not found");
    }
}
