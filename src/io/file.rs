use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::StoreError;
use crate::model::document::TaskListDocument;
use crate::model::{ActivityLog, TaskList};

const INDENT: &[u8] = b"    ";

/// Render a list as pretty JSON with a four-space indent.
pub fn to_json(list: &TaskList, log: &mut ActivityLog) -> Result<String, StoreError> {
    let document = list.to_document(log);
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut ser).map_err(StoreError::Encode)?;
    String::from_utf8(buf).map_err(|e| StoreError::Encode(serde_json::Error::custom(e)))
}

/// Parse a list from JSON text.
pub fn from_json(json: &str, log: &mut ActivityLog) -> Result<TaskList, StoreError> {
    let document: TaskListDocument = serde_json::from_str(json)?;
    Ok(TaskList::from_document(document, log))
}

/// Save a list to a JSON file, replacing any existing contents.
///
/// The destination is opened first, so a list that cannot be written records
/// no save event.
pub fn save_list(list: &TaskList, path: &Path, log: &mut ActivityLog) -> Result<(), StoreError> {
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_err)?;
    let json = to_json(list, log)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(json.as_bytes()).map_err(write_err)?;
    writer.flush().map_err(write_err)?;
    log::info!("saved list {:?} ({} tasks) to {}", list.name(), list.len(), path.display());
    Ok(())
}

/// Load a list from a JSON file.
pub fn load_list(path: &Path, log: &mut ActivityLog) -> Result<TaskList, StoreError> {
    let file = File::open(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document: TaskListDocument =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            if e.is_io() {
                StoreError::Read {
                    path: path.to_path_buf(),
                    source: e.into(),
                }
            } else {
                StoreError::Parse(e)
            }
        })?;
    let list = TaskList::from_document(document, log);
    log::info!("loaded list {:?} ({} tasks) from {}", list.name(), list.len(), path.display());
    Ok(list)
}
