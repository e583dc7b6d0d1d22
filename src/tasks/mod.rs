//! Kanban-style task board.
//!
//! Three fixed columns (to do, in progress, done), four priorities, and
//! plain create/read/update/delete on tasks. The same `TaskBoard` serves
//! both the memory-only and the file-backed variants; `StoreConfig`
//! picks which.

mod board;
mod error;
mod task;

pub use board::TaskBoard;
pub use error::TaskError;
pub use task::{Column, NewTask, Priority, Task, TaskId, TaskUpdate};
