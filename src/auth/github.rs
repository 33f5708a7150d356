//! GitHub authentication

use crate::auth::AuthSource;
use std::env;
use tokio::process::Command;
use tracing::debug;

/// Environment variables checked for a token, in priority order
const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// GitHub authentication configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubAuthConfig {
    /// Authentication token
    pub token: String,
    /// Where the token was obtained from
    pub source: AuthSource,
}

/// Resolve a token from the config value or an environment lookup.
///
/// Blank values are skipped.
pub fn github_auth_from<F>(configured: Option<&str>, lookup: F) -> Option<GitHubAuthConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(token) = configured.map(str::trim).filter(|t| !t.is_empty()) {
        debug!("using GitHub token from config");
        return Some(GitHubAuthConfig {
            token: token.to_string(),
            source: AuthSource::Config,
        });
    }

    for var in TOKEN_ENV_VARS {
        debug!(var, "checking env var");
        if let Some(token) = lookup(var) {
            let token = token.trim();
            if !token.is_empty() {
                debug!(var, "obtained GitHub token from env var");
                return Some(GitHubAuthConfig {
                    token: token.to_string(),
                    source: AuthSource::EnvVar,
                });
            }
        }
    }

    None
}

/// Get GitHub authentication
///
/// Priority:
/// 1. `auth_token` from the config file
/// 2. `GITHUB_TOKEN` environment variable
/// 3. `GH_TOKEN` environment variable
/// 4. `gh auth token`
///
/// Returns `None` when nothing is available; public repositories can still
/// be read anonymously.
pub async fn get_github_auth(configured: Option<&str>) -> Option<GitHubAuthConfig> {
    if let Some(auth) = github_auth_from(configured, |var| env::var(var).ok()) {
        return Some(auth);
    }

    debug!("attempting to get GitHub token via gh CLI");
    if let Some(token) = get_gh_cli_token().await {
        debug!("obtained GitHub token from gh CLI");
        return Some(GitHubAuthConfig {
            token,
            source: AuthSource::Cli,
        });
    }

    debug!("no GitHub authentication found, continuing anonymously");
    None
}

async fn get_gh_cli_token() -> Option<String> {
    let output = Command::new("gh")
        .args(["auth", "token"])
        .output()
        .await
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!token.is_empty()).then_some(token)
}
