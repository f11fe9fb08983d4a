use std::fmt;

use chrono::{Local, NaiveDateTime};

use super::activity::ActivityLog;
use super::document::TaskListDocument;
use super::ordering::SortOrder;
use super::task::{Task, TaskEditor};

/// A named, ordered collection of tasks with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    name: String,
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>, log: &mut ActivityLog) {
        self.name = name.into();
        log.record(format!("List name set to: {}", self.name));
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    // ── Adding ──────────────────────────────────────────────────

    /// Append a task. Returns false, leaving the list untouched, if a task
    /// with the same name is already present.
    pub fn add_task(&mut self, task: Task, log: &mut ActivityLog) -> bool {
        if self.contains_task(task.name()) {
            return false;
        }
        log.record(format!("Added task: {}", task.name()));
        self.tasks.push(task);
        true
    }

    /// Rename a task. Returns false, leaving the list untouched, if no task
    /// is called `old` or another task is already called `new`.
    pub fn rename_task(
        &mut self,
        old: &str,
        new: impl Into<String>,
        log: &mut ActivityLog,
    ) -> bool {
        let new = new.into();
        let Some(index) = self.task_index(old) else {
            return false;
        };
        if new != old && self.contains_task(&new) {
            return false;
        }
        self.tasks[index].set_name(new, log);
        true
    }

    // ── Removing ────────────────────────────────────────────────

    /// Remove the task with this name. Returns the removed positions.
    pub fn remove_task(&mut self, name: &str, log: &mut ActivityLog) -> Vec<usize> {
        self.remove_where(|t| t.name() == name, "Removed task", log)
    }

    pub fn remove_all_completed_tasks(&mut self, log: &mut ActivityLog) -> Vec<usize> {
        self.remove_where(Task::is_completed, "Removed completed task", log)
    }

    /// Remove every task whose deadline has passed, as of the local time
    /// when the call starts.
    pub fn remove_all_overdue_tasks(&mut self, log: &mut ActivityLog) -> Vec<usize> {
        self.remove_all_overdue_tasks_at(Local::now().naive_local(), log)
    }

    pub fn remove_all_overdue_tasks_at(
        &mut self,
        now: NaiveDateTime,
        log: &mut ActivityLog,
    ) -> Vec<usize> {
        self.remove_where(|t| t.is_overdue_at(now), "Removed overdue task", log)
    }

    pub fn remove_all_tasks(&mut self, log: &mut ActivityLog) {
        self.tasks.clear();
        log.record("Removed all tasks");
    }

    /// Split off every task matching `pred` in one pass. Positions refer to
    /// the list as it was before the call.
    fn remove_where<F>(&mut self, pred: F, action: &str, log: &mut ActivityLog) -> Vec<usize>
    where
        F: Fn(&Task) -> bool,
    {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.tasks.len());
        for (index, task) in std::mem::take(&mut self.tasks).into_iter().enumerate() {
            if pred(&task) {
                log.record(format!("{action}: {}", task.name()));
                removed.push(index);
            } else {
                kept.push(task);
            }
        }
        self.tasks = kept;
        removed
    }

    // ── Lookup ──────────────────────────────────────────────────

    pub fn contains_task(&self, name: &str) -> bool {
        self.task_index(name).is_some()
    }

    pub fn get_task(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name() == name)
    }

    pub fn get_task_mut(&mut self, name: &str) -> Option<TaskEditor<'_>> {
        self.tasks
            .iter_mut()
            .find(|t| t.name() == name)
            .map(TaskEditor::new)
    }

    pub fn task_at(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn task_at_mut(&mut self, index: usize) -> Option<TaskEditor<'_>> {
        self.tasks.get_mut(index).map(TaskEditor::new)
    }

    pub fn task_index(&self, name: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.name() == name)
    }

    // ── Sorting ─────────────────────────────────────────────────

    /// Stable in-place sort.
    pub fn sort(&mut self, order: SortOrder, log: &mut ActivityLog) {
        self.tasks.sort_by(order.comparator());
        log.record(format!("Sorted tasks by {}", order.label()));
    }

    pub fn sort_by_name(&mut self, log: &mut ActivityLog) {
        self.sort(SortOrder::Name, log);
    }

    pub fn sort_by_deadline(&mut self, log: &mut ActivityLog) {
        self.sort(SortOrder::Deadline, log);
    }

    pub fn sort_by_priority(&mut self, log: &mut ActivityLog) {
        self.sort(SortOrder::Priority, log);
    }

    pub fn sort_by_is_completed(&mut self, log: &mut ActivityLog) {
        self.sort(SortOrder::Completion, log);
    }

    // ── Persistence ─────────────────────────────────────────────

    /// Snapshot the list in its file shape. Records a save event.
    pub fn to_document(&self, log: &mut ActivityLog) -> TaskListDocument {
        let document = TaskListDocument {
            list_name: self.name.clone(),
            tasks: self.tasks.iter().map(Task::to_record).collect(),
        };
        log.record("To-do list saved");
        document
    }

    /// Rebuild a list from its file shape. Tasks go through `add_task`, so
    /// later duplicates of a name are dropped.
    pub fn from_document(document: TaskListDocument, log: &mut ActivityLog) -> Self {
        let mut list = TaskList::new(document.list_name);
        for record in document.tasks {
            list.add_task(Task::from(record), log);
        }
        list
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tasks.is_empty() {
            return f.write_str("To-Do List is empty");
        }
        for task in &self.tasks {
            writeln!(f, "{task}")?;
        }
        Ok(())
    }
}
