//! Directory of saved lists, one `<listName>ToDoList.json` file per list.

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::StoreError;
use crate::io::file::{load_list, save_list};
use crate::model::{ActivityLog, TaskList};

const FILE_SUFFIX: &str = "ToDoList.json";

#[derive(Debug, Clone)]
pub struct ListStore {
    dir: PathBuf,
}

impl ListStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.data_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing the list called `list_name`.
    pub fn path_for(&self, list_name: &str) -> PathBuf {
        self.dir.join(format!("{list_name}{FILE_SUFFIX}"))
    }

    pub fn exists(&self, list_name: &str) -> bool {
        self.path_for(list_name).is_file()
    }

    /// Save under the list's own name, creating the directory if needed.
    pub fn save(&self, list: &TaskList, log: &mut ActivityLog) -> Result<PathBuf, StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StoreError::Write {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.path_for(list.name());
        save_list(list, &path, log)?;
        Ok(path)
    }

    pub fn load(&self, list_name: &str, log: &mut ActivityLog) -> Result<TaskList, StoreError> {
        load_list(&self.path_for(list_name), log)
    }

    /// Names of all saved lists, sorted. A missing directory has none.
    pub fn list_names(&self) -> Result<Vec<String>, StoreError> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.dir.clone(),
                    source,
                })
            }
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("skipping unreadable entry in {}: {}", self.dir.display(), e);
                    continue;
                }
            };
            if !entry.path().is_file() {
                continue;
            }
            let file_name = entry.file_name();
            if let Some(name) = file_name.to_str().and_then(|f| f.strip_suffix(FILE_SUFFIX)) {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
