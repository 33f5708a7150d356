//! Runtime configuration
//!
//! Loaded once at startup from a TOML file and passed by reference to the
//! components that need it.

use crate::announce::AnnouncementStyle;
use crate::error::{Error, Result};
use crate::types::Color;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Project processed when none is given on the command line
pub const DEFAULT_PROJECT: &str = "Core";

/// Repository owner used when the config does not name one
pub const DEFAULT_OWNER: &str = "PlayCity-altV";

/// Public GitHub REST endpoint
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Environment variable overriding `webhook_url`
pub const WEBHOOK_ENV_VAR: &str = "HERALD_WEBHOOK_URL";

const APP_DIR: &str = "release-herald";

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Webhook receiving announcements
    pub webhook_url: Option<String>,
    /// GitHub token; falls back to the environment and `gh`
    pub auth_token: Option<String>,
    /// GitHub REST base URL
    pub api_base: String,
    /// Owner (user or organization) of the tracked repositories
    pub owner: String,
    /// Project processed when `--project` is absent
    pub default_project: String,
    /// Directory holding last-processed tag files
    pub state_dir: Option<PathBuf>,
    /// Announcement presentation
    pub announcement: AnnouncementConfig,
    /// Per-project overrides
    pub projects: BTreeMap<String, ProjectConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webhook_url: None,
            auth_token: None,
            api_base: DEFAULT_API_BASE.to_string(),
            owner: DEFAULT_OWNER.to_string(),
            default_project: DEFAULT_PROJECT.to_string(),
            state_dir: None,
            announcement: AnnouncementConfig::default(),
            projects: BTreeMap::new(),
        }
    }
}

/// Presentation of announcements
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AnnouncementConfig {
    /// Embed color as `#rrggbb`
    pub color: String,
    /// Thumbnail image shown on every page
    pub thumbnail_url: Option<String>,
    /// Stamp pages with the time of the run
    pub timestamp: bool,
}

impl Default for AnnouncementConfig {
    fn default() -> Self {
        Self {
            color: "#f27f30".to_string(),
            thumbnail_url: None,
            timestamp: true,
        }
    }
}

/// Overrides for a single tracked project
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Name shown in the announcement title
    pub display_name: Option<String>,
    /// Thumbnail overriding the global one
    pub thumbnail_url: Option<String>,
}

impl Config {
    /// Default config file location (`<config dir>/release-herald/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one the default location is
    /// used if present, otherwise built-in defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::default_path().filter(|p| p.is_file()),
        };

        let mut config = match path {
            Some(p) => {
                debug!(path = %p.display(), "loading config");
                let content = std::fs::read_to_string(&p).map_err(|e| {
                    Error::Config(format!("cannot read {}: {e}", p.display()))
                })?;
                Self::from_toml(&content)?
            }
            None => {
                debug!("no config file, using defaults");
                Self::default()
            }
        };

        config.apply_env(|var| std::env::var(var).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply environment overrides using `lookup`
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(WEBHOOK_ENV_VAR).filter(|u| !u.trim().is_empty()) {
            debug!("webhook URL overridden from environment");
            self.webhook_url = Some(url.trim().to_string());
        }
    }

    /// Check URLs and the color
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.api_base)
            .map_err(|e| Error::Config(format!("invalid api_base '{}': {e}", self.api_base)))?;

        if let Some(ref hook) = self.webhook_url {
            url::Url::parse(hook)
                .map_err(|e| Error::Config(format!("invalid webhook_url: {e}")))?;
        }

        if self.owner.trim().is_empty() {
            return Err(Error::Config("owner must not be empty".to_string()));
        }

        parse_color(&self.announcement.color)?;
        Ok(())
    }

    /// Webhook URL, required for real deliveries
    pub fn webhook_url(&self) -> Result<&str> {
        self.webhook_url.as_deref().ok_or_else(|| {
            Error::Config(format!(
                "no webhook configured; set webhook_url or {WEBHOOK_ENV_VAR}"
            ))
        })
    }

    /// API base to hand to the source, `None` for the public endpoint
    pub fn api_base_override(&self) -> Option<&str> {
        (self.api_base.trim_end_matches('/') != DEFAULT_API_BASE).then_some(self.api_base.as_str())
    }

    /// Directory for state files
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir.clone().unwrap_or_else(|| {
            dirs::data_dir().map_or_else(|| PathBuf::from(".release-herald"), |d| d.join(APP_DIR))
        })
    }

    /// Name shown in announcements for `project`
    pub fn display_name<'a>(&'a self, project: &'a str) -> &'a str {
        self.projects
            .get(project)
            .and_then(|p| p.display_name.as_deref())
            .unwrap_or(project)
    }

    /// Presentation for `project`; `now` is stamped when timestamps are on
    pub fn style_for(&self, project: &str, now: DateTime<Utc>) -> Result<AnnouncementStyle> {
        let thumbnail = self
            .projects
            .get(project)
            .and_then(|p| p.thumbnail_url.clone())
            .or_else(|| self.announcement.thumbnail_url.clone());

        Ok(AnnouncementStyle {
            color: parse_color(&self.announcement.color)?,
            thumbnail,
            timestamp: self.announcement.timestamp.then_some(now),
        })
    }
}

/// Parse `#rrggbb` (the `#` is optional)
pub fn parse_color(value: &str) -> Result<Color> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return Err(Error::Config(format!("invalid color '{value}'")));
    }
    u32::from_str_radix(hex, 16)
        .map(Color)
        .map_err(|_| Error::Config(format!("invalid color '{value}'")))
}
