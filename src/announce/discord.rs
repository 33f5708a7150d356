//! Discord-compatible webhook delivery

use crate::announce::DeliveryChannel;
use crate::error::{Error, Result};
use crate::types::Announcement;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

#[derive(Serialize)]
struct WebhookPayload<'a> {
    embeds: [Embed<'a>; 1],
}

#[derive(Serialize)]
struct Embed<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    description: &'a str,
    color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    thumbnail: Option<Thumbnail<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
}

#[derive(Serialize)]
struct Thumbnail<'a> {
    url: &'a str,
}

impl<'a> From<&'a Announcement> for WebhookPayload<'a> {
    fn from(a: &'a Announcement) -> Self {
        Self {
            embeds: [Embed {
                title: a.title.as_deref(),
                description: &a.description,
                color: a.color.0,
                thumbnail: a.thumbnail.as_deref().map(|url| Thumbnail { url }),
                timestamp: a.timestamp.map(|t| t.to_rfc3339()),
            }],
        }
    }
}

/// Webhook delivery channel using reqwest
pub struct DiscordWebhook {
    client: Client,
    url: String,
}

impl DiscordWebhook {
    /// Create a webhook channel posting to `url`
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("release-herald/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl DeliveryChannel for DiscordWebhook {
    async fn deliver(&self, announcement: &Announcement) -> Result<()> {
        debug!(
            title = announcement.title.as_deref().unwrap_or_default(),
            len = announcement.description.len(),
            "posting webhook message"
        );

        let response = self
            .client
            .post(&self.url)
            .json(&WebhookPayload::from(announcement))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Delivery {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), "webhook accepted message");
        Ok(())
    }
}
