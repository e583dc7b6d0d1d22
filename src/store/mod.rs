//! Record persistence shared by the task board and the study log.
//!
//! Both stores keep their full record set in memory. A `Storage::File`
//! config adds a bincode file that is loaded on open and rewritten after
//! every change.

mod backend;
mod config;
mod error;

pub use backend::Backend;
pub use config::{Storage, StoreConfig};
pub use error::StoreError;
