//! In-memory release source

use async_trait::async_trait;
use release_herald::error::{Error, Result};
use release_herald::source::ReleaseSource;
use release_herald::types::Tag;
use std::sync::Mutex;

/// Release source returning canned answers and recording compare calls
pub struct MockReleaseSource {
    /// Tags newest first; `None` makes `list_tags` fail
    pub tags: Option<Vec<String>>,
    /// Commit list; `Err` makes `compare` fail
    pub commits: std::result::Result<Option<Vec<String>>, String>,
    /// `(base, head)` of every compare call
    pub compares: Mutex<Vec<(String, String)>>,
}

#[allow(dead_code)]
impl MockReleaseSource {
    /// Source with the given tags and commit messages
    pub fn new(tags: &[&str], commits: &[&str]) -> Self {
        Self {
            tags: Some(tags.iter().map(ToString::to_string).collect()),
            commits: Ok(Some(commits.iter().map(ToString::to_string).collect())),
            compares: Mutex::new(Vec::new()),
        }
    }

    /// Source whose tag listing fails
    pub fn unavailable() -> Self {
        Self {
            tags: None,
            commits: Ok(None),
            compares: Mutex::new(Vec::new()),
        }
    }

    /// Recorded compare ranges
    pub fn compare_calls(&self) -> Vec<(String, String)> {
        self.compares.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReleaseSource for MockReleaseSource {
    async fn list_tags(&self, _project: &str) -> Result<Vec<Tag>> {
        self.tags
            .as_ref()
            .map(|tags| tags.iter().map(|t| Tag::new(t.as_str())).collect())
            .ok_or_else(|| Error::GitHubApi("503 Service Unavailable".to_string()))
    }

    async fn compare(
        &self,
        _project: &str,
        base: &str,
        head: &str,
    ) -> Result<Option<Vec<String>>> {
        self.compares
            .lock()
            .unwrap()
            .push((base.to_string(), head.to_string()));
        self.commits.clone().map_err(Error::GitHubApi)
    }
}
