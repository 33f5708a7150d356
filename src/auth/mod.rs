//! Authentication for the GitHub API
//!
//! Supports a configured token, environment variables and the `gh` CLI.

mod github;

pub use github::{GitHubAuthConfig, get_github_auth, github_auth_from};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from the config file
    Config,
    /// Token from environment variable
    EnvVar,
    /// Token from CLI tool (gh)
    Cli,
}
