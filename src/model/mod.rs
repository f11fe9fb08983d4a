pub mod activity;
pub mod deadline;
pub mod document;
pub mod ordering;
pub mod task;
pub mod todo_list;

pub use activity::{ActivityLog, Event};
pub use deadline::{format_deadline, parse_deadline, parse_deadline_input};
pub use document::{TaskListDocument, TaskRecord};
pub use ordering::SortOrder;
pub use task::{Task, TaskEditor};
pub use todo_list::TaskList;
