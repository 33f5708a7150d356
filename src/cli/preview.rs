//! Dry-run delivery channel that prints announcements

use anstream::println;
use async_trait::async_trait;
use owo_colors::OwoColorize;
use release_herald::announce::DeliveryChannel;
use release_herald::error::Result;
use release_herald::types::Announcement;

/// Prints each announcement to stdout instead of posting it
pub struct PreviewChannel;

#[async_trait]
impl DeliveryChannel for PreviewChannel {
    async fn deliver(&self, announcement: &Announcement) -> Result<()> {
        if let Some(ref title) = announcement.title {
            println!("{}", title.bold());
        } else {
            println!("{}", "(continued)".dimmed());
        }
        if let Some(ref thumbnail) = announcement.thumbnail {
            println!("{} {}", "thumbnail:".dimmed(), thumbnail.cyan());
        }
        println!("{}", announcement.description);
        println!("{}", "─".repeat(40).dimmed());
        Ok(())
    }
}
