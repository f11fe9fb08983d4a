use std::fmt;
use std::io::{self, Write};

use chrono::{DateTime, Local};

/// A single recorded mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub description: String,
    pub timestamp: DateTime<Local>,
}

impl Event {
    /// Create an event stamped with the current local time.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            timestamp: Local::now(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}",
            self.timestamp.format("%a %b %d %H:%M:%S %Z %Y"),
            self.description
        )
    }
}

/// Append-only record of mutations made to tasks and lists.
///
/// Mutators take the log as `&mut ActivityLog`, so the owner decides how
/// long it lives and when it is shown.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    events: Vec<Event>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn record(&mut self, description: impl Into<String>) {
        let event = Event::new(description);
        log::debug!(target: "todo_list::activity", "{}", event.description);
        self.events.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Description of the most recent event, if any.
    pub fn last_description(&self) -> Option<&str> {
        self.events.last().map(|e| e.description.as_str())
    }

    /// Dump every event, oldest first, separated by blank lines.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for event in &self.events {
            writeln!(out, "{event}\n")?;
        }
        out.flush()
    }
}

impl<'a> IntoIterator for &'a ActivityLog {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
