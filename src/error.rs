use std::path::PathBuf;

/// A deadline string that is neither `"None"` nor `yyyy-MM-dd HH:mm`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid deadline {input:?}: expected \"None\" or yyyy-MM-dd HH:mm")]
pub struct DeadlineParseError {
    pub input: String,
}

/// Error type for saving and loading task lists.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse to-do list: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not encode to-do list: {0}")]
    Encode(serde_json::Error),
}

impl StoreError {
    /// True for errors caused by the document contents rather than the filesystem.
    pub fn is_parse(&self) -> bool {
        matches!(self, StoreError::Parse(_))
    }
}
