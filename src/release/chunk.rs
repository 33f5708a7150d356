//! Flattening categories into display lines and paging them

use crate::release::group::Category;
use std::fmt;

/// Maximum number of display lines in one page
pub const CHUNK_SIZE: usize = 20;

/// Maximum characters of one commit line, ellipsis included.
///
/// With [`CHUNK_SIZE`] lines per page this keeps a page under the 4096
/// character embed description limit.
pub const MAX_ENTRY_CHARS: usize = 180;

/// One line of rendered release notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayLine {
    /// Category heading, already bolded
    Heading(String),
    /// A formatted commit
    Entry(String),
    /// Blank line closing a category
    Separator,
}

impl fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Headings are followed by an empty line
            Self::Heading(text) => writeln!(f, "{text}"),
            Self::Entry(text) => write!(f, "{text}"),
            Self::Separator => Ok(()),
        }
    }
}

/// A bounded run of display lines sent as one message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Lines in display order
    pub lines: Vec<DisplayLine>,
}

impl Page {
    /// Whether the page has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines on the page
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Render the page as newline-joined text
    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Flatten categories into display lines
pub fn render(categories: &[Category]) -> Vec<DisplayLine> {
    let mut lines = Vec::new();

    for category in categories {
        lines.push(DisplayLine::Heading(format!("**{}**", category.title())));

        for entry in category.renderable() {
            let text = if entry.scope.is_empty() {
                entry.subject.clone()
            } else {
                format!("{}: {}", entry.scope, entry.subject)
            };
            lines.push(DisplayLine::Entry(clip(text)));
        }

        lines.push(DisplayLine::Separator);
    }

    lines
}

fn clip(text: String) -> String {
    if text.chars().count() <= MAX_ENTRY_CHARS {
        return text;
    }
    let mut clipped: String = text.chars().take(MAX_ENTRY_CHARS - 1).collect();
    clipped.push('…');
    clipped
}

/// Split lines into consecutive pages of at most `size` lines.
///
/// Always returns at least one page; with no lines that page is empty.
pub fn paginate(lines: Vec<DisplayLine>, size: usize) -> Vec<Page> {
    let size = size.max(1);

    if lines.is_empty() {
        return vec![Page::default()];
    }

    let mut pages = Vec::with_capacity(lines.len().div_ceil(size));
    let mut current = Vec::with_capacity(size);

    for line in lines {
        current.push(line);
        if current.len() == size {
            pages.push(Page {
                lines: std::mem::replace(&mut current, Vec::with_capacity(size)),
            });
        }
    }

    if !current.is_empty() {
        pages.push(Page { lines: current });
    }

    pages
}

/// Render and paginate with [`CHUNK_SIZE`]
pub fn render_pages(categories: &[Category]) -> Vec<Page> {
    paginate(render(categories), CHUNK_SIZE)
}
