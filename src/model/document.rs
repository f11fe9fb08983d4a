use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::deadline::deadline_serde;

/// One task as stored in a to-do list file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub task_name: String,
    pub task_description: String,
    /// Written as `"None"` or `yyyy-MM-dd HH:mm`.
    #[serde(with = "deadline_serde")]
    pub deadline: Option<NaiveDateTime>,
    /// Kept wide so out-of-range values reach the task constructor.
    #[serde(deserialize_with = "stored_priority::deserialize")]
    pub priority: i64,
    pub completed: bool,
}

/// A whole to-do list file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListDocument {
    pub list_name: String,
    pub tasks: Vec<TaskRecord>,
}

/// Accepts any JSON integer. Values beyond `i64` saturate, which the task
/// constructor then coerces to 0.
mod stored_priority {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Integer {
        Signed(i64),
        Unsigned(u64),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Integer::deserialize(deserializer)? {
            Integer::Signed(v) => v,
            Integer::Unsigned(v) => i64::try_from(v).unwrap_or(i64::MAX),
        })
    }
}
