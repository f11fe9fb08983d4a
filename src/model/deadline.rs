//! Deadline text conventions shared by display, logging and the JSON file.
//!
//! A task without a deadline is `None` in memory and the literal `"None"`
//! on disk and on screen.

use chrono::NaiveDateTime;

use crate::error::DeadlineParseError;

/// Fixed deadline format, e.g. `2022-08-08 23:59`.
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Text used for a task with no deadline.
pub const NO_DEADLINE: &str = "None";

/// Render a deadline as `None` or `yyyy-MM-dd HH:mm`.
pub fn format_deadline(deadline: Option<&NaiveDateTime>) -> String {
    match deadline {
        Some(dt) => dt.format(DEADLINE_FORMAT).to_string(),
        None => NO_DEADLINE.to_string(),
    }
}

/// Parse a deadline as stored in a to-do list file.
pub fn parse_deadline(s: &str) -> Result<Option<NaiveDateTime>, DeadlineParseError> {
    if s == NO_DEADLINE {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(s, DEADLINE_FORMAT)
        .map(Some)
        .map_err(|_| DeadlineParseError {
            input: s.to_string(),
        })
}

/// Parse a deadline typed by a user. Surrounding whitespace is ignored and
/// `none` in any case means no deadline.
pub fn parse_deadline_input(s: &str) -> Result<Option<NaiveDateTime>, DeadlineParseError> {
    let s = s.trim();
    if s.eq_ignore_ascii_case(NO_DEADLINE) {
        return Ok(None);
    }
    parse_deadline(s)
}

/// Serde helper for `Option<NaiveDateTime>` deadlines.
pub(crate) mod deadline_serde {
    use chrono::NaiveDateTime;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(deadline: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_deadline(deadline.as_ref()))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_deadline(&s).map_err(D::Error::custom)
    }
}
