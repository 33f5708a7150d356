//! Error types for release-herald

use thiserror::Error;

/// Errors produced by release-herald
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or missing configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// GitHub API error (non-success status or undecodable body)
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Webhook rejected a delivery
    #[error("webhook returned {status}: {body}")]
    Delivery {
        /// HTTP status code returned by the webhook
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// State file could not be read or written
    #[error("state error at {path}: {source}")]
    State {
        /// Path of the state file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Config file parse error
    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Self::GitHubApi(err.to_string())
    }
}

/// Result alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
