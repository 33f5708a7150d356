//! Core types shared across release-herald

use chrono::{DateTime, Utc};

/// A release tag as reported by the tag source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Tag name, e.g. `v1.4.0`
    pub name: String,
}

impl Tag {
    /// Create a tag from its name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The release being announced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseContext {
    /// Human-readable project name used in the announcement title
    pub project_name: String,
    /// Tag the diff starts from
    pub previous_tag: String,
    /// Newest tag, the one being announced
    pub current_tag: String,
}

/// RGB color of an announcement embed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    /// Build a color from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(242, 127, 48)
    }
}

/// One outbound unit handed to a delivery channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    /// Title, present only on the first page of a release
    pub title: Option<String>,
    /// Body text
    pub description: String,
    /// Embed color
    pub color: Color,
    /// Optional thumbnail image URL
    pub thumbnail: Option<String>,
    /// Optional timestamp shown by the chat client
    pub timestamp: Option<DateTime<Utc>>,
}
