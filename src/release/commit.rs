//! Conventional-commit classification

use regex::Regex;
use std::sync::LazyLock;

/// Housekeeping commits that never appear in release notes
static RE_IGNORED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:Merge|Revert|Apply|Conflicts)\b").unwrap());

/// `type(scope): subject`
static RE_CONVENTIONAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\((\w+)\): (.*)$").unwrap());

/// A commit message after classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedCommit {
    /// Message follows `type(scope): subject`
    Conventional {
        /// Commit type, e.g. `feat`
        kind: String,
        /// Scope inside the parentheses
        scope: String,
        /// Everything after `": "`
        subject: String,
    },
    /// Anything else
    Unclassified {
        /// The original message
        text: String,
    },
}

/// Classify a raw commit message.
///
/// Returns `None` for merge/revert/apply/conflict commits. Only the summary
/// line of a multi-line message is considered.
pub fn classify(message: &str) -> Option<ClassifiedCommit> {
    let summary = message.lines().next().unwrap_or_default();

    if RE_IGNORED.is_match(summary) {
        return None;
    }

    let classified = RE_CONVENTIONAL.captures(summary).map_or_else(
        || ClassifiedCommit::Unclassified {
            text: summary.to_string(),
        },
        |caps| ClassifiedCommit::Conventional {
            kind: caps[1].to_string(),
            scope: caps[2].to_string(),
            subject: caps[3].to_string(),
        },
    );

    Some(classified)
}

/// Classify a batch of messages, dropping ignored ones and keeping order
pub fn classify_all<I, S>(messages: I) -> Vec<ClassifiedCommit>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    messages
        .into_iter()
        .filter_map(|m| classify(m.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conventional(kind: &str, scope: &str, subject: &str) -> ClassifiedCommit {
        ClassifiedCommit::Conventional {
            kind: kind.to_string(),
            scope: scope.to_string(),
            subject: subject.to_string(),
        }
    }

    #[test]
    fn test_classify_conventional() {
        assert_eq!(
            classify("feat(auth): add token refresh"),
            Some(conventional("feat", "auth", "add token refresh"))
        );
    }

    #[test]
    fn test_classify_keeps_colons_in_subject() {
        assert_eq!(
            classify("fix(api_v2): handle a: b"),
            Some(conventional("fix", "api_v2", "handle a: b"))
        );
    }

    #[test]
    fn test_ignored_prefixes_are_dropped() {
        for msg in [
            "Merge branch 'x'",
            "Revert \"feat(a): b\"",
            "Apply suggestions from code review",
            "Conflicts resolved",
        ] {
            assert_eq!(classify(msg), None, "{msg}");
        }
    }

    #[test]
    fn test_ignore_requires_whole_word() {
        assert_eq!(
            classify("Mergeable check added"),
            Some(ClassifiedCommit::Unclassified {
                text: "Mergeable check added".to_string()
            })
        );
    }

    #[test]
    fn test_ignore_is_case_sensitive() {
        assert!(matches!(
            classify("merge things"),
            Some(ClassifiedCommit::Unclassified { .. })
        ));
    }

    #[test]
    fn test_missing_scope_is_unclassified() {
        assert_eq!(
            classify("feat: no scope"),
            Some(ClassifiedCommit::Unclassified {
                text: "feat: no scope".to_string()
            })
        );
    }

    #[test]
    fn test_non_word_scope_is_unclassified() {
        assert!(matches!(
            classify("feat(ui-kit): buttons"),
            Some(ClassifiedCommit::Unclassified { .. })
        ));
    }

    #[test]
    fn test_only_summary_line_is_classified() {
        assert_eq!(
            classify("fix(db): close pool\n\nLonger body here"),
            Some(conventional("fix", "db", "close pool"))
        );
    }

    #[test]
    fn test_classify_all_preserves_order() {
        let out = classify_all(["b", "Merge x", "a"]);
        assert_eq!(
            out,
            vec![
                ClassifiedCommit::Unclassified {
                    text: "b".to_string()
                },
                ClassifiedCommit::Unclassified {
                    text: "a".to_string()
                },
            ]
        );
    }
}
