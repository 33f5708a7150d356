//! Release sources
//!
//! Provides tag listings and tag-to-tag commit diffs for tracked projects.

mod github;

pub use github::GitHubSource;

use crate::error::Result;
use crate::types::Tag;
use async_trait::async_trait;

/// Release source trait
///
/// Abstracts the hosting API so the run pipeline can be exercised against
/// in-memory sources.
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// List tags of `project`, newest first
    async fn list_tags(&self, project: &str) -> Result<Vec<Tag>>;

    /// Commit messages between two tags, oldest first.
    ///
    /// `None` means the response carried no commit list at all.
    async fn compare(&self, project: &str, base: &str, head: &str)
    -> Result<Option<Vec<String>>>;
}
