use std::fmt;
use std::ops::Deref;

use chrono::NaiveDateTime;

use super::activity::ActivityLog;
use super::deadline::format_deadline;
use super::document::TaskRecord;

/// Highest allowed priority.
pub const MAX_PRIORITY: u8 = 5;

fn priority_in_range(priority: i64) -> Option<u8> {
    u8::try_from(priority).ok().filter(|p| *p <= MAX_PRIORITY)
}

/// A single to-do item, identified within its list by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    name: String,
    description: String,
    /// `None` means no deadline.
    deadline: Option<NaiveDateTime>,
    /// Always within `0..=MAX_PRIORITY`.
    priority: u8,
    completed: bool,
}

impl Task {
    /// Create an incomplete task with no deadline and priority 0.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            deadline: None,
            priority: 0,
            completed: false,
        }
    }

    pub fn with_deadline(mut self, deadline: Option<NaiveDateTime>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Set the initial priority. Values outside `0..=5` become 0.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority_in_range(priority).unwrap_or(0);
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    // ── Getters ─────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn deadline(&self) -> Option<&NaiveDateTime> {
        self.deadline.as_ref()
    }

    pub fn has_deadline(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// True when the task has a deadline strictly before `now`.
    pub fn is_overdue_at(&self, now: NaiveDateTime) -> bool {
        self.deadline.is_some_and(|d| d < now)
    }

    // ── Setters ─────────────────────────────────────────────────

    pub fn set_name(&mut self, name: impl Into<String>, log: &mut ActivityLog) {
        let name = name.into();
        log.record(format!("Task name changed: {} -> {}", self.name, name));
        self.name = name;
    }

    pub fn set_description(&mut self, description: impl Into<String>, log: &mut ActivityLog) {
        let description = description.into();
        log.record(format!(
            "Task \"{}\" description changed: {} -> {}",
            self.name, self.description, description
        ));
        self.description = description;
    }

    pub fn set_deadline(&mut self, deadline: Option<NaiveDateTime>, log: &mut ActivityLog) {
        log.record(format!(
            "Task \"{}\" deadline changed: {} -> {}",
            self.name,
            format_deadline(self.deadline.as_ref()),
            format_deadline(deadline.as_ref())
        ));
        self.deadline = deadline;
    }

    /// Change the priority if it is within `0..=5`.
    ///
    /// Out-of-range values leave the task untouched and are not logged.
    /// Returns whether the new value was applied.
    pub fn set_priority(&mut self, priority: i64, log: &mut ActivityLog) -> bool {
        let Some(priority) = priority_in_range(priority) else {
            return false;
        };
        log.record(format!(
            "Task \"{}\" priority changed: {} -> {}",
            self.name, self.priority, priority
        ));
        self.priority = priority;
        true
    }

    pub fn set_completed(&mut self, completed: bool, log: &mut ActivityLog) {
        log.record(format!(
            "Task \"{}\" completed status changed: {} -> {}",
            self.name, self.completed, completed
        ));
        self.completed = completed;
    }

    // ── Views ───────────────────────────────────────────────────

    /// Multi-line human-readable summary.
    pub fn display_block(&self) -> String {
        self.to_string()
    }

    /// The task as it appears in a to-do list file.
    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            task_name: self.name.clone(),
            task_description: self.description.clone(),
            deadline: self.deadline,
            priority: i64::from(self.priority),
            completed: self.completed,
        }
    }
}

/// Mutable access to a task inside a list.
///
/// Every setter except `set_name` is available. Renames go through
/// `TaskList::rename_task`, which keeps names unique.
#[derive(Debug)]
pub struct TaskEditor<'a> {
    task: &'a mut Task,
}

impl<'a> TaskEditor<'a> {
    pub(crate) fn new(task: &'a mut Task) -> Self {
        Self { task }
    }

    pub fn set_description(&mut self, description: impl Into<String>, log: &mut ActivityLog) {
        self.task.set_description(description, log);
    }

    pub fn set_deadline(&mut self, deadline: Option<NaiveDateTime>, log: &mut ActivityLog) {
        self.task.set_deadline(deadline, log);
    }

    pub fn set_priority(&mut self, priority: i64, log: &mut ActivityLog) -> bool {
        self.task.set_priority(priority, log)
    }

    pub fn set_completed(&mut self, completed: bool, log: &mut ActivityLog) {
        self.task.set_completed(completed, log);
    }
}

impl Deref for TaskEditor<'_> {
    type Target = Task;

    fn deref(&self) -> &Task {
        self.task
    }
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        Task::new(record.task_name, record.task_description)
            .with_deadline(record.deadline)
            .with_priority(record.priority)
            .with_completed(record.completed)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Task Name: {}", self.name)?;
        writeln!(f, "\tDescription: {}", self.description)?;
        writeln!(f, "\tDeadline: {}", format_deadline(self.deadline.as_ref()))?;
        writeln!(f, "\tPriority: {}", self.priority)?;
        writeln!(f, "\tCompleted: {}", self.completed)
    }
}
