//! One announcement run for a tracked project
//!
//! Fetches tags, picks the range to announce, builds release notes, delivers
//! them and records the announced tag.

use crate::announce::{AnnounceReport, AnnouncementStyle, DeliveryChannel, announce};
use crate::error::Result;
use crate::release::{Page, build_release_notes};
use crate::source::ReleaseSource;
use crate::state::StateStore;
use crate::types::{ReleaseContext, Tag};
use tracing::{debug, info, warn};

/// What a run ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Release notes were handed to the delivery channel
    Announced {
        /// Release that was announced
        context: ReleaseContext,
        /// Number of pages built
        pages: usize,
        /// Per-page delivery results
        report: AnnounceReport,
    },
    /// Newest tag was already announced
    UpToDate {
        /// The newest tag
        tag: String,
    },
    /// The hosting API could not be reached or answered garbage
    SourceUnavailable {
        /// Error description
        reason: String,
    },
    /// Not enough tags or commits to announce anything
    InsufficientHistory {
        /// What was missing
        reason: String,
    },
}

/// Tag range chosen for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeSelection {
    /// Announce commits between the two tags
    Range {
        /// Start of the range
        previous: String,
        /// Tag being announced
        current: String,
    },
    /// Stored tag equals the newest tag
    UpToDate(String),
    /// Fewer than two tags
    InsufficientHistory,
}

/// Pick the range to announce.
///
/// `tags` is newest first. Without a stored tag the second-newest tag is used
/// as the start of the range.
pub fn select_range(tags: &[Tag], stored: Option<&str>) -> RangeSelection {
    let [current, second, ..] = tags else {
        return RangeSelection::InsufficientHistory;
    };

    match stored {
        Some(last) if last == current.name => RangeSelection::UpToDate(last.to_string()),
        Some(last) => RangeSelection::Range {
            previous: last.to_string(),
            current: current.name.clone(),
        },
        None => RangeSelection::Range {
            previous: second.name.clone(),
            current: current.name.clone(),
        },
    }
}

/// Parameters of a single run
#[derive(Debug, Clone)]
pub struct RunRequest<'a> {
    /// Repository name at the source
    pub project: &'a str,
    /// Name shown in the announcement title
    pub display_name: &'a str,
    /// Presentation of every page
    pub style: AnnouncementStyle,
    /// Record the announced tag afterwards
    pub persist: bool,
}

/// Wires a source, a delivery channel and a state store together
pub struct Herald<'a> {
    source: &'a dyn ReleaseSource,
    channel: &'a dyn DeliveryChannel,
    store: &'a dyn StateStore,
}

impl<'a> Herald<'a> {
    /// Create a herald from its collaborators
    pub fn new(
        source: &'a dyn ReleaseSource,
        channel: &'a dyn DeliveryChannel,
        store: &'a dyn StateStore,
    ) -> Self {
        Self {
            source,
            channel,
            store,
        }
    }

    /// Run once for `request.project`.
    ///
    /// Source failures and missing history are reported as outcomes, not
    /// errors. Only state-store failures are returned as `Err`.
    pub async fn run(&self, request: &RunRequest<'_>) -> Result<RunOutcome> {
        let project = request.project;

        let tags = match self.source.list_tags(project).await {
            Ok(tags) => tags,
            Err(e) => {
                warn!(project, error = %e, "tag source unavailable");
                return Ok(RunOutcome::SourceUnavailable {
                    reason: e.to_string(),
                });
            }
        };
        debug!(project, count = tags.len(), "fetched tags");

        let stored = self.store.load(project)?;

        let (previous, current) = match select_range(&tags, stored.as_deref()) {
            RangeSelection::Range { previous, current } => (previous, current),
            RangeSelection::UpToDate(tag) => {
                info!(project, tag = %tag, "already announced");
                return Ok(RunOutcome::UpToDate { tag });
            }
            RangeSelection::InsufficientHistory => {
                info!(project, count = tags.len(), "need at least two tags");
                return Ok(RunOutcome::InsufficientHistory {
                    reason: format!("{} tag(s) found", tags.len()),
                });
            }
        };

        let messages = match self.source.compare(project, &previous, &current).await {
            Ok(Some(messages)) if !messages.is_empty() => messages,
            Ok(_) => {
                info!(project, %previous, %current, "no commits between tags");
                return Ok(RunOutcome::InsufficientHistory {
                    reason: format!("no commits between {previous} and {current}"),
                });
            }
            Err(e) => {
                warn!(project, error = %e, "diff source unavailable");
                return Ok(RunOutcome::SourceUnavailable {
                    reason: e.to_string(),
                });
            }
        };
        debug!(project, commits = messages.len(), "fetched commits");

        let pages: Vec<Page> = build_release_notes(&messages);
        let context = ReleaseContext {
            project_name: request.display_name.to_string(),
            previous_tag: previous,
            current_tag: current,
        };

        info!(
            project,
            previous = %context.previous_tag,
            current = %context.current_tag,
            pages = pages.len(),
            "announcing release"
        );
        let report = announce(&pages, &context, &request.style, self.channel).await;

        if report.failed > 0 {
            warn!(
                project,
                delivered = report.delivered,
                failed = report.failed,
                "some pages were not delivered"
            );
        }

        // A run where no page went out is retried next time
        if request.persist && report.delivered > 0 {
            self.store.save(project, &context.current_tag)?;
        } else if request.persist {
            warn!(project, tag = %context.current_tag, "nothing delivered, state left unchanged");
        }

        Ok(RunOutcome::Announced {
            context,
            pages: pages.len(),
            report,
        })
    }
}
