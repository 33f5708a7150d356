//! release-herald - release announcements from conventional commits
//!
//! Polls a hosting API for new tags of a tracked project, groups the commits
//! since the last announced tag by conventional-commit type and posts paged
//! release notes to a chat webhook.

pub mod announce;
pub mod auth;
pub mod config;
pub mod error;
pub mod release;
pub mod run;
pub mod source;
pub mod state;
pub mod types;
