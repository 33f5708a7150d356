//! Persistence of the last announced tag

use crate::error::{Error, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Storage for the last processed tag of each project
pub trait StateStore: Send + Sync {
    /// Last processed tag, or `None` if the project was never processed
    fn load(&self, project: &str) -> Result<Option<String>>;

    /// Record `tag` as processed
    fn save(&self, project: &str, tag: &str) -> Result<()>;
}

/// One single-line file per project under a state directory
#[derive(Debug, Clone)]
pub struct FileStateStore {
    dir: PathBuf,
}

impl FileStateStore {
    /// Store state files under `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the state file for `project`
    pub fn path_for(&self, project: &str) -> PathBuf {
        // Keep project names from escaping the state directory
        let file: String = project
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{file}.tag"))
    }

    /// Directory holding the state files
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

fn state_error(path: &Path, source: std::io::Error) -> Error {
    Error::State {
        path: path.display().to_string(),
        source,
    }
}

impl StateStore for FileStateStore {
    fn load(&self, project: &str) -> Result<Option<String>> {
        let path = self.path_for(project);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let tag = content.lines().next().unwrap_or_default().trim();
                debug!(path = %path.display(), tag, "loaded state");
                Ok((!tag.is_empty()).then(|| tag.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no state file");
                Ok(None)
            }
            Err(e) => Err(state_error(&path, e)),
        }
    }

    fn save(&self, project: &str, tag: &str) -> Result<()> {
        let path = self.path_for(project);
        std::fs::create_dir_all(&self.dir).map_err(|e| state_error(&self.dir, e))?;
        std::fs::write(&path, format!("{tag}\n")).map_err(|e| state_error(&path, e))?;
        debug!(path = %path.display(), tag, "saved state");
        Ok(())
    }
}
