//! CLI command implementations

mod announce;
mod preview;

pub use announce::{AnnounceOptions, run_announce};
pub use preview::PreviewChannel;
