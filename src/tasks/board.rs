//! The task board store.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::TaskError;
use super::task::{Column, NewTask, Priority, Task, TaskId, TaskUpdate};
use crate::store::{Backend, StoreConfig};

/// Everything persisted for a board.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct BoardData {
    next_id: u32,
    tasks: Vec<Task>,
}

impl Default for BoardData {
    fn default() -> Self {
        Self {
            next_id: 1,
            tasks: Vec::new(),
        }
    }
}

impl BoardData {
    fn insert(&mut self, new: NewTask) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            title: new.title,
            column: Column::ToDo,
            priority: new.priority,
            start_date: new.start_date,
            end_date: new.end_date,
            notes: new.notes,
        });
        id
    }

    fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    fn seed(&mut self) {
        let examples = [
            (
                NewTask::new("Set up development environment", Priority::Urgent)
                    .with_dates("2025-12-03", "2025-12-04")
                    .with_notes("Install the toolchain and dependencies."),
                Column::ToDo,
            ),
            (
                NewTask::new("Create initial layout", Priority::Emergent)
                    .with_dates("2025-12-04", "2025-12-05")
                    .with_notes("Basic page structure."),
                Column::InProgress,
            ),
            (
                NewTask::new("Implement back end", Priority::Necessary)
                    .with_dates("2025-12-05", "2025-12-06")
                    .with_notes("Request handling and storage."),
                Column::Done,
            ),
        ];
        for (new, column) in examples {
            let id = self.insert(new);
            if let Some(task) = self.find_mut(id) {
                task.column = column;
            }
        }
        debug!(tasks = self.tasks.len(), "seeded example tasks");
    }
}

/// Kanban board: tasks in three columns.
///
/// Tasks are kept in insertion order. `by_column` groups them for display
/// and orders the to-do column by priority.
///
/// Every mutation is saved before it becomes visible: if the save fails the
/// board is left exactly as it was.
///
/// ## Example
///
/// ```
/// use rust_ttt::store::StoreConfig;
/// use rust_ttt::tasks::{Column, NewTask, Priority, TaskBoard};
///
/// let config = StoreConfig::in_memory().with_seed_examples(false);
/// let mut board = TaskBoard::open(&config).unwrap();
///
/// let later = board.add(NewTask::new("Tidy up", Priority::Delegable)).unwrap();
/// let now = board.add(NewTask::new("Fix outage", Priority::Urgent)).unwrap();
///
/// let columns = board.by_column();
/// let todo: Vec<_> = columns[0].1.iter().map(|t| t.id).collect();
/// assert_eq!(columns[0].0, Column::ToDo);
/// assert_eq!(todo, vec![now, later]);
/// ```
#[derive(Debug)]
pub struct TaskBoard {
    data: BoardData,
    backend: Backend,
}

impl TaskBoard {
    /// Open a board.
    ///
    /// File-backed boards load their file if it exists. A board that starts
    /// empty (new file, or memory) gets the example tasks when
    /// `seed_examples` is set.
    pub fn open(config: &StoreConfig) -> Result<Self, TaskError> {
        let backend = Backend::new(config);
        let mut data = match backend.load::<BoardData>()? {
            Some(data) => {
                info!(tasks = data.tasks.len(), "task board loaded");
                data
            }
            None => {
                let mut data = BoardData::default();
                if config.seed_examples {
                    data.seed();
                }
                backend.save(&data)?;
                data
            }
        };
        data.tasks.sort_by_key(|t| t.id);
        Ok(Self { data, backend })
    }

    /// Run `f` against a copy of the data and keep the copy only once it
    /// has been saved.
    fn commit<R>(
        &mut self,
        f: impl FnOnce(&mut BoardData) -> Result<R, TaskError>,
    ) -> Result<R, TaskError> {
        let mut next = self.data.clone();
        let out = f(&mut next)?;
        self.backend.save(&next)?;
        self.data = next;
        Ok(out)
    }

    /// Add a task to the to-do column.
    ///
    /// Blank titles are rejected and allocate no id.
    pub fn add(&mut self, new: NewTask) -> Result<TaskId, TaskError> {
        if new.title.trim().is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        let id = self.commit(|data| Ok(data.insert(new)))?;
        info!(%id, "task added");
        Ok(id)
    }

    /// Get a task.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.data.tasks.iter().find(|t| t.id == id)
    }

    /// Apply a partial edit. Fields left `None` keep their value.
    pub fn update(&mut self, id: TaskId, update: TaskUpdate) -> Result<&Task, TaskError> {
        if update.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(TaskError::EmptyTitle);
        }
        self.commit(|data| {
            let task = data.find_mut(id).ok_or(TaskError::NotFound(id))?;
            if let Some(title) = update.title {
                task.title = title;
            }
            if let Some(column) = update.column {
                task.column = column;
            }
            if let Some(priority) = update.priority {
                task.priority = priority;
            }
            if let Some(start) = update.start_date {
                task.start_date = Some(start);
            }
            if let Some(end) = update.end_date {
                task.end_date = Some(end);
            }
            if let Some(notes) = update.notes {
                task.notes = notes;
            }
            Ok(())
        })?;
        info!(%id, "task updated");
        self.get(id).ok_or(TaskError::NotFound(id))
    }

    /// Move a task to another column.
    pub fn move_to(&mut self, id: TaskId, column: Column) -> Result<(), TaskError> {
        self.commit(|data| {
            let task = data.find_mut(id).ok_or(TaskError::NotFound(id))?;
            task.column = column;
            Ok(())
        })?;
        info!(%id, %column, "task moved");
        Ok(())
    }

    /// Delete a task. Returns whether it existed; a missing id is not an error.
    pub fn delete(&mut self, id: TaskId) -> Result<bool, TaskError> {
        if self.get(id).is_none() {
            return Ok(false);
        }
        self.commit(|data| {
            data.tasks.retain(|t| t.id != id);
            Ok(())
        })?;
        info!(%id, "task deleted");
        Ok(true)
    }

    /// All tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.data.tasks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.tasks.is_empty()
    }

    /// Tasks grouped by column, columns in display order.
    ///
    /// The to-do column is sorted by priority (stable, so equal priorities
    /// keep insertion order). Other columns keep insertion order. Every
    /// column is present, even when empty.
    #[must_use]
    pub fn by_column(&self) -> Vec<(Column, Vec<&Task>)> {
        Column::ALL
            .into_iter()
            .map(|column| {
                let mut tasks: Vec<&Task> =
                    self.data.tasks.iter().filter(|t| t.column == column).collect();
                if column == Column::ToDo {
                    tasks.sort_by_key(|t| t.priority.rank());
                }
                (column, tasks)
            })
            .collect()
    }
}
