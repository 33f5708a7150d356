//! In-memory state store

use release_herald::error::Result;
use release_herald::state::StateStore;
use std::collections::HashMap;
use std::sync::Mutex;

/// State store backed by a map
#[derive(Default)]
pub struct MemoryStateStore {
    tags: Mutex<HashMap<String, String>>,
}

#[allow(dead_code)]
impl MemoryStateStore {
    /// Store that already knows `tag` for `project`
    pub fn with(project: &str, tag: &str) -> Self {
        let store = Self::default();
        store
            .tags
            .lock()
            .unwrap()
            .insert(project.to_string(), tag.to_string());
        store
    }

    /// Current tag for `project`
    pub fn get(&self, project: &str) -> Option<String> {
        self.tags.lock().unwrap().get(project).cloned()
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self, project: &str) -> Result<Option<String>> {
        Ok(self.get(project))
    }

    fn save(&self, project: &str, tag: &str) -> Result<()> {
        self.tags
            .lock()
            .unwrap()
            .insert(project.to_string(), tag.to_string());
        Ok(())
    }
}
