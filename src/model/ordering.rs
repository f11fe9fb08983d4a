//! Sort orders for tasks. All comparators are total and meant for stable
//! sorting, so full ties keep their insertion order.

use std::cmp::Ordering;

use chrono::NaiveDateTime;

use super::task::Task;

/// Which comparator a list sort uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Name,
    Deadline,
    Priority,
    Completion,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Name,
        SortOrder::Deadline,
        SortOrder::Priority,
        SortOrder::Completion,
    ];

    pub fn comparator(self) -> fn(&Task, &Task) -> Ordering {
        match self {
            SortOrder::Name => by_name,
            SortOrder::Deadline => by_deadline,
            SortOrder::Priority => by_priority,
            SortOrder::Completion => by_completion_then_deadline,
        }
    }

    /// Human-readable label, as used in activity messages.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Name => "name",
            SortOrder::Deadline => "deadline",
            SortOrder::Priority => "priority",
            SortOrder::Completion => "completed status",
        }
    }
}

/// Missing deadlines sort after every real one.
fn cmp_deadline(a: Option<&NaiveDateTime>, b: Option<&NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn by_name(a: &Task, b: &Task) -> Ordering {
    a.name().cmp(b.name())
}

pub fn by_deadline(a: &Task, b: &Task) -> Ordering {
    cmp_deadline(a.deadline(), b.deadline())
}

/// Higher priority first.
pub fn by_priority(a: &Task, b: &Task) -> Ordering {
    b.priority().cmp(&a.priority())
}

/// Incomplete before complete, then by deadline.
pub fn by_completion_then_deadline(a: &Task, b: &Task) -> Ordering {
    a.is_completed()
        .cmp(&b.is_completed())
        .then_with(|| by_deadline(a, b))
}
