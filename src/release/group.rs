//! Grouping of classified commits into release-note categories

use crate::release::commit::ClassifiedCommit;

/// Release-note category, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryKind {
    /// `feat`
    Feat,
    /// `fix`
    Fix,
    /// `chore`
    Chore,
    /// `build`
    Build,
    /// `ci`
    Ci,
    /// `refactor`
    Refactor,
    /// Unknown types and unclassified messages
    Other,
}

impl CategoryKind {
    /// All categories in display order
    pub const ALL: [Self; 7] = [
        Self::Feat,
        Self::Fix,
        Self::Chore,
        Self::Build,
        Self::Ci,
        Self::Refactor,
        Self::Other,
    ];

    /// Conventional-commit type key
    pub const fn key(self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Chore => "chore",
            Self::Build => "build",
            Self::Ci => "ci",
            Self::Refactor => "refactor",
            Self::Other => "other",
        }
    }

    /// Section title shown in the announcement
    pub const fn title(self) -> &'static str {
        match self {
            Self::Feat => "Features",
            Self::Fix => "Bug Fixes",
            Self::Chore => "Chores",
            Self::Build => "Build",
            Self::Ci => "Continuous integration (CI)",
            Self::Refactor => "Refactor",
            Self::Other => "Commits",
        }
    }

    /// Map a commit type onto one of the six typed categories.
    ///
    /// `other` is not a commit type, so `"other"` maps to `None` like any
    /// unknown type does.
    pub fn from_commit_type(kind: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .filter(|c| *c != Self::Other)
            .find(|c| c.key() == kind)
    }
}

/// One commit line inside a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Scope, empty for the `other` category
    pub scope: String,
    /// Subject or full unclassified message
    pub subject: String,
}

impl Entry {
    /// Entries with neither scope nor subject are never rendered
    pub fn is_blank(&self) -> bool {
        self.scope.is_empty() && self.subject.is_empty()
    }
}

/// A category together with the commits it accumulated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Which category this is
    pub kind: CategoryKind,
    /// Commits in encounter order
    pub commits: Vec<Entry>,
}

impl Category {
    /// Section title
    pub const fn title(&self) -> &'static str {
        self.kind.title()
    }

    /// Entries that will actually be rendered
    pub fn renderable(&self) -> impl Iterator<Item = &Entry> {
        self.commits.iter().filter(|e| !e.is_blank())
    }
}

/// Minimum accumulated commits for a category to get its own section
pub const MIN_CATEGORY_COMMITS: usize = 2;

/// Bucket classified commits into categories.
///
/// Categories come back in [`CategoryKind::ALL`] order. Categories that
/// accumulated fewer than [`MIN_CATEGORY_COMMITS`] commits are left out.
pub fn group(commits: &[ClassifiedCommit]) -> Vec<Category> {
    let mut buckets: Vec<Category> = CategoryKind::ALL
        .into_iter()
        .map(|kind| Category {
            kind,
            commits: Vec::new(),
        })
        .collect();

    for commit in commits {
        let (kind, entry) = match commit {
            ClassifiedCommit::Conventional {
                kind,
                scope,
                subject,
            } => match CategoryKind::from_commit_type(kind) {
                Some(category) => (
                    category,
                    Entry {
                        scope: scope.clone(),
                        subject: subject.clone(),
                    },
                ),
                None => (
                    CategoryKind::Other,
                    Entry {
                        scope: String::new(),
                        subject: format!("{kind}({scope}): {subject}"),
                    },
                ),
            },
            ClassifiedCommit::Unclassified { text } => (
                CategoryKind::Other,
                Entry {
                    scope: String::new(),
                    subject: text.clone(),
                },
            ),
        };

        if let Some(bucket) = buckets.iter_mut().find(|c| c.kind == kind) {
            bucket.commits.push(entry);
        }
    }

    buckets
        .into_iter()
        .filter(|c| c.commits.len() >= MIN_CATEGORY_COMMITS)
        .collect()
}
