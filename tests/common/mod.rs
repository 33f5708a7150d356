//! Common test utilities for release-herald tests

pub mod mock_channel;
pub mod mock_source;
pub mod memory_store;

// Re-exports for convenience - not all test binaries use all exports
#[allow(unused_imports)]
pub use memory_store::MemoryStateStore;
#[allow(unused_imports)]
pub use mock_channel::RecordingChannel;
#[allow(unused_imports)]
pub use mock_source::MockReleaseSource;
