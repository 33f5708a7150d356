//! Release announcements
//!
//! Turns paged release notes into announcements and hands them, in order, to
//! a delivery channel.

mod discord;

pub use discord::DiscordWebhook;

use crate::error::Result;
use crate::release::Page;
use crate::types::{Announcement, Color, ReleaseContext};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Embed description limit of the chat platform, in characters
pub const MAX_DESCRIPTION_CHARS: usize = 4096;

/// Body used when no category survived grouping
pub const NO_CHANGES: &str = "No changes";

/// Delivery channel trait
///
/// One call per announcement. Implementations report failures through the
/// returned `Result`; the announcer decides what to do with them.
#[async_trait]
pub trait DeliveryChannel: Send + Sync {
    /// Deliver one announcement
    async fn deliver(&self, announcement: &Announcement) -> Result<()>;
}

/// Presentation settings applied to every page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnouncementStyle {
    /// Embed color
    pub color: Color,
    /// Optional thumbnail image URL
    pub thumbnail: Option<String>,
    /// Timestamp stamped on every page, if any
    pub timestamp: Option<DateTime<Utc>>,
}

/// Outcome of announcing a release
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnounceReport {
    /// Pages accepted by the channel
    pub delivered: usize,
    /// Pages the channel rejected
    pub failed: usize,
}

/// Title of the first page
pub fn release_title(ctx: &ReleaseContext) -> String {
    format!(
        "Released new {} version {}",
        ctx.project_name, ctx.current_tag
    )
}

/// Build one announcement per page.
///
/// Only the first announcement carries the title and the version range line.
pub fn build_announcements(
    pages: &[Page],
    ctx: &ReleaseContext,
    style: &AnnouncementStyle,
) -> Vec<Announcement> {
    let make = |title: Option<String>, description: String| Announcement {
        title,
        description,
        color: style.color,
        thumbnail: style.thumbnail.clone(),
        timestamp: style.timestamp,
    };

    let mut announcements = Vec::with_capacity(pages.len().max(1));

    let first = pages.first().map(Page::to_text).unwrap_or_default();
    let body = if first.is_empty() {
        NO_CHANGES.to_string()
    } else {
        first
    };
    announcements.push(make(
        Some(release_title(ctx)),
        format!(
            "Updates between {} -> {}:\n{body}",
            ctx.previous_tag, ctx.current_tag
        ),
    ));

    for page in pages.iter().skip(1) {
        announcements.push(make(None, page.to_text()));
    }

    announcements
}

/// Announce a release page by page.
///
/// Delivery is best-effort: a failed page is logged and the remaining pages
/// are still sent. Nothing is retried.
pub async fn announce(
    pages: &[Page],
    ctx: &ReleaseContext,
    style: &AnnouncementStyle,
    channel: &dyn DeliveryChannel,
) -> AnnounceReport {
    let announcements = build_announcements(pages, ctx, style);
    let total = announcements.len();
    let mut report = AnnounceReport::default();

    for (index, announcement) in announcements.iter().enumerate() {
        debug!(page = index, total, "delivering page");
        match channel.deliver(announcement).await {
            Ok(()) => report.delivered += 1,
            Err(e) => {
                warn!(page = index, total, error = %e, "failed to deliver page");
                report.failed += 1;
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::release::{DisplayLine, build_release_notes};
    use std::sync::Mutex;

    /// Records deliveries and fails the pages listed in `fail_on`
    #[derive(Default)]
    struct RecordingChannel {
        sent: Mutex<Vec<Announcement>>,
        fail_on: Vec<usize>,
    }

    #[async_trait]
    impl DeliveryChannel for RecordingChannel {
        async fn deliver(&self, announcement: &Announcement) -> Result<()> {
            let mut sent = self.sent.lock().unwrap();
            let index = sent.len();
            sent.push(announcement.clone());
            if self.fail_on.contains(&index) {
                return Err(Error::Delivery {
                    status: 500,
                    body: "boom".to_string(),
                });
            }
            Ok(())
        }
    }

    fn ctx() -> ReleaseContext {
        ReleaseContext {
            project_name: "Core".to_string(),
            previous_tag: "v1.0.0".to_string(),
            current_tag: "v1.1.0".to_string(),
        }
    }

    fn lines(n: usize) -> Page {
        Page {
            lines: (0..n).map(|i| DisplayLine::Entry(format!("l{i}"))).collect(),
        }
    }

    #[test]
    fn test_first_page_carries_title_and_range() {
        let pages = build_release_notes([
            "feat(auth): add login",
            "feat(auth): add logout",
            "fix(ui): correct spacing",
            "Merge branch 'x'",
        ]);
        let out = build_announcements(&pages, &ctx(), &AnnouncementStyle::default());

        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0].title.as_deref(),
            Some("Released new Core version v1.1.0")
        );
        let body = &out[0].description;
        assert!(body.starts_with("Updates between v1.0.0 -> v1.1.0:\n"));
        assert!(body.contains("**Features**"));
        assert!(body.contains("auth: add login"));
        assert!(body.contains("auth: add logout"));
        assert!(!body.contains("spacing"));
        assert!(!body.contains("Merge"));
    }

    #[test]
    fn test_empty_notes_read_no_changes() {
        let pages = build_release_notes(["fix(ui): lonely"]);
        let out = build_announcements(&pages, &ctx(), &AnnouncementStyle::default());

        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0].description,
            "Updates between v1.0.0 -> v1.1.0:\nNo changes"
        );
    }

    #[test]
    fn test_follow_up_pages_have_no_title() {
        let pages = vec![lines(20), lines(20), lines(5)];
        let style = AnnouncementStyle {
            color: Color::rgb(1, 2, 3),
            thumbnail: Some("https://example.com/t.png".to_string()),
            timestamp: None,
        };
        let out = build_announcements(&pages, &ctx(), &style);

        assert_eq!(out.len(), 3);
        assert!(out[0].title.is_some());
        assert!(out[1].title.is_none());
        assert!(out[2].title.is_none());
        assert_eq!(out[2].description.lines().count(), 5);
        assert!(out.iter().all(|a| a.color == Color::rgb(1, 2, 3)));
        assert!(out.iter().all(|a| a.thumbnail == style.thumbnail));
    }

    #[test]
    fn test_long_subjects_stay_within_description_limit() {
        let messages: Vec<String> = (0..60)
            .map(|i| format!("feat(core): {} {i}", "x".repeat(300)))
            .chain((0..30).map(|i| format!("{} unscoped {i}", "y".repeat(500))))
            .collect();
        let pages = build_release_notes(&messages);
        let ctx = ReleaseContext {
            project_name: "A Very Long Project Name".repeat(4),
            previous_tag: "v".repeat(100),
            current_tag: "w".repeat(100),
        };
        let out = build_announcements(&pages, &ctx, &AnnouncementStyle::default());

        assert!(out.len() > 1);
        for announcement in &out {
            let chars = announcement.description.chars().count();
            assert!(chars <= MAX_DESCRIPTION_CHARS, "{chars} chars");
        }
    }

    #[tokio::test]
    async fn test_announce_continues_after_failure() {
        let channel = RecordingChannel {
            fail_on: vec![1],
            ..Default::default()
        };
        let pages = vec![lines(20), lines(20), lines(5)];

        let report = announce(&pages, &ctx(), &AnnouncementStyle::default(), &channel).await;

        assert_eq!(
            report,
            AnnounceReport {
                delivered: 2,
                failed: 1
            }
        );
        let sent = channel.sent.lock().unwrap();
        assert_eq!(sent.len(), 3);
        assert!(sent[0].title.is_some());
        assert_eq!(sent[2].description.lines().count(), 5);
    }
}
