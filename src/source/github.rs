//! GitHub release source implementation

use crate::error::{Error, Result};
use crate::source::ReleaseSource;
use crate::types::Tag;
use async_trait::async_trait;
use octocrab::Octocrab;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::debug;

/// Tags requested per listing; only the newest two matter
const TAGS_PER_PAGE: &str = "100";

/// Media type of the REST v3 API
const GITHUB_V3_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

#[derive(Deserialize)]
struct TagResponse {
    name: String,
}

#[derive(Deserialize)]
struct CompareResponse {
    #[serde(default)]
    commits: Option<Vec<CompareCommit>>,
}

#[derive(Deserialize)]
struct CompareCommit {
    commit: CommitDetail,
}

#[derive(Deserialize)]
struct CommitDetail {
    message: Option<String>,
}

/// GitHub source using octocrab
pub struct GitHubSource {
    client: Octocrab,
    owner: String,
}

impl GitHubSource {
    /// Create a new GitHub source
    ///
    /// `api_base` overrides `https://api.github.com`, e.g. for GitHub
    /// Enterprise.
    pub fn new(token: Option<&str>, owner: String, api_base: Option<&str>) -> Result<Self> {
        let mut builder =
            Octocrab::builder().add_header(ACCEPT, GITHUB_V3_MEDIA_TYPE.to_string());

        if let Some(token) = token {
            builder = builder.personal_token(token.to_string());
        }

        if let Some(base) = api_base {
            builder = builder
                .base_uri(base)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        }

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self { client, owner })
    }
}

#[async_trait]
impl ReleaseSource for GitHubSource {
    async fn list_tags(&self, project: &str) -> Result<Vec<Tag>> {
        debug!(owner = %self.owner, project, "listing tags");
        let route = format!(
            "/repos/{}/{}/tags",
            urlencoding::encode(&self.owner),
            urlencoding::encode(project)
        );

        let tags: Vec<TagResponse> = self
            .client
            .get(route, Some(&[("per_page", TAGS_PER_PAGE)]))
            .await?;

        let result: Vec<Tag> = tags.into_iter().map(|t| Tag::new(t.name)).collect();
        debug!(project, count = result.len(), "listed tags");
        Ok(result)
    }

    async fn compare(
        &self,
        project: &str,
        base: &str,
        head: &str,
    ) -> Result<Option<Vec<String>>> {
        debug!(project, base, head, "comparing tags");
        let route = format!(
            "/repos/{}/{}/compare/{}...{}",
            urlencoding::encode(&self.owner),
            urlencoding::encode(project),
            urlencoding::encode(base),
            urlencoding::encode(head)
        );

        let response: CompareResponse = self.client.get(route, None::<&()>).await?;

        let Some(commits) = response.commits else {
            debug!(project, "compare response has no commit list");
            return Ok(None);
        };

        let messages: Vec<String> = commits
            .into_iter()
            .filter_map(|c| c.commit.message)
            .collect();
        debug!(project, count = messages.len(), "compared tags");
        Ok(Some(messages))
    }
}
