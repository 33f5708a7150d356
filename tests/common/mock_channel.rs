//! Recording delivery channel

use async_trait::async_trait;
use release_herald::announce::DeliveryChannel;
use release_herald::error::{Error, Result};
use release_herald::types::Announcement;
use std::sync::Mutex;

/// Delivery channel that records every announcement it receives
#[derive(Default)]
pub struct RecordingChannel {
    sent: Mutex<Vec<Announcement>>,
    /// Zero-based delivery indices that fail
    pub fail_on: Vec<usize>,
}

#[allow(dead_code)]
impl RecordingChannel {
    /// Channel failing the given deliveries
    pub fn failing_on(indices: &[usize]) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_on: indices.to_vec(),
        }
    }

    /// Everything delivered so far, failures included
    pub fn sent(&self) -> Vec<Announcement> {
        self.sent.lock().unwrap().clone()
    }
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
                body: String::new(),
            });
        }
        Ok(())
    }
}
