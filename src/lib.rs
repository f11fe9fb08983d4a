//! Task list core: tasks, sort orders, an activity log and JSON persistence.
//!
//! A front end drives everything through [`TaskList`] and the functions in
//! [`io`], passing an [`ActivityLog`] to each mutating call.

pub mod config;
pub mod error;
pub mod io;
pub mod model;

pub use config::Settings;
pub use error::{DeadlineParseError, StoreError};
pub use io::ListStore;
pub use model::{ActivityLog, Event, SortOrder, Task, TaskList};
