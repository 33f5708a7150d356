//! Announce command - announce the newest release of a project

use crate::cli::PreviewChannel;
use chrono::Utc;
use release_herald::announce::{DeliveryChannel, DiscordWebhook};
use release_herald::auth::get_github_auth;
use release_herald::config::Config;
use release_herald::error::Result;
use release_herald::run::{Herald, RunOutcome, RunRequest};
use release_herald::source::GitHubSource;
use release_herald::state::FileStateStore;
use tracing::{debug, info};

/// Options for the announce command
#[derive(Debug, Clone, Copy)]
pub struct AnnounceOptions<'a> {
    /// Project to process
    pub project: &'a str,
    /// Print instead of delivering, and leave state untouched
    pub dry_run: bool,
}

/// Run the announce command
pub async fn run_announce(config: &Config, options: AnnounceOptions<'_>) -> Result<RunOutcome> {
    let project = options.project;

    let auth = get_github_auth(config.auth_token.as_deref()).await;
    if let Some(ref auth) = auth {
        debug!(source = ?auth.source, "using GitHub token");
    }

    let source = GitHubSource::new(
        auth.as_ref().map(|a| a.token.as_str()),
        config.owner.clone(),
        config.api_base_override(),
    )?;

    let channel: Box<dyn DeliveryChannel> = if options.dry_run {
        Box::new(PreviewChannel)
    } else {
        Box::new(DiscordWebhook::new(config.webhook_url()?)?)
    };

    let store = FileStateStore::new(config.state_dir());
    debug!(dir = %store.dir().display(), "using state directory");

    let request = RunRequest {
        project,
        display_name: config.display_name(project),
        style: config.style_for(project, Utc::now())?,
        persist: !options.dry_run,
    };

    let outcome = Herald::new(&source, channel.as_ref(), &store)
        .run(&request)
        .await?;

    match &outcome {
        RunOutcome::Announced {
            context, report, ..
        } => info!(
            project,
            tag = %context.current_tag,
            delivered = report.delivered,
            failed = report.failed,
            "run complete"
        ),
        RunOutcome::UpToDate { tag } => info!(project, %tag, "nothing new to announce"),
        RunOutcome::SourceUnavailable { reason } => {
            info!(project, %reason, "skipped run, source unavailable");
        }
        RunOutcome::InsufficientHistory { reason } => {
            info!(project, %reason, "skipped run, nothing to compare");
        }
    }

    Ok(outcome)
}
