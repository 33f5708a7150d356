//! Release-notes pipeline
//!
//! Turns raw commit messages into paged release notes:
//! 1. Classify - parse conventional-commit messages
//! 2. Group - bucket commits into fixed categories
//! 3. Chunk - flatten into display lines and split into pages

mod chunk;
mod commit;
mod group;

pub use chunk::{CHUNK_SIZE, DisplayLine, MAX_ENTRY_CHARS, Page, paginate, render, render_pages};
pub use commit::{ClassifiedCommit, classify, classify_all};
pub use group::{Category, CategoryKind, Entry, MIN_CATEGORY_COMMITS, group};

/// Build paged release notes straight from raw commit messages
pub fn build_release_notes<I, S>(messages: I) -> Vec<Page>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let classified = classify_all(messages);
    let categories = group(&classified);
    render_pages(&categories)
}
