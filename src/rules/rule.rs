//! A single classification rule: a named, case-insensitive pattern.

use regex::{Match, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{PriznakError, Result};

/// Which signal a rule detects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    /// The text expresses active job-search intent.
    #[serde(rename = "job_search")]
    JobSearch,
    /// The text expresses readiness to start work.
    #[serde(rename = "ready_to_start")]
    Readiness,
}

impl RuleKind {
    /// Stable identifier used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::JobSearch => "job_search",
            RuleKind::Readiness => "ready_to_start",
        }
    }
}

/// A single pattern-matching rule over free text.
///
/// Rules are plain data: a kind plus a compiled pattern. Matching is
/// case-insensitive (Unicode case folding, so Cyrillic folds too) and
/// unanchored, with standard leftmost-first alternation semantics.
#[derive(Debug, Clone)]
pub struct ClassificationRule {
    kind: RuleKind,
    pattern: Regex,
}

impl ClassificationRule {
    /// Compile a rule from a pattern string.
    ///
    /// Pattern compilation is the only fallible step; a rule that compiles
    /// never fails to evaluate.
    pub fn new(kind: RuleKind, pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                PriznakError::pattern(format!("invalid pattern for {}: {e}", kind.name()))
            })?;

        Ok(ClassificationRule {
            kind,
            pattern: regex,
        })
    }

    /// The signal this rule detects.
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Source text of the pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Find the leftmost match in `text`, if any.
    pub(crate) fn find<'t>(&self, text: &'t str) -> Option<Match<'t>> {
        self.pattern.find(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_compiles() {
        let rule = ClassificationRule::new(RuleKind::JobSearch, r"ищ[уы]\s+работу").unwrap();
        assert_eq!(rule.kind(), RuleKind::JobSearch);
        assert_eq!(rule.pattern(), r"ищ[уы]\s+работу");
    }

    #[test]
    fn test_invalid_pattern_is_a_construction_error() {
        let err = ClassificationRule::new(RuleKind::Readiness, r"готов\s+(").unwrap_err();
        assert!(err.to_string().starts_with("Pattern error:"));
        assert!(err.to_string().contains("ready_to_start"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let rule = ClassificationRule::new(RuleKind::JobSearch, r"ищ[уы]\s+работу").unwrap();
        assert!(rule.find("ИЩУ РАБОТУ").is_some());
        assert!(rule.find("Ищу Работу").is_some());
        assert!(rule.find("ищет работу").is_none());
    }

    #[test]
    fn test_find_reports_leftmost_match() {
        let rule = ClassificationRule::new(RuleKind::Readiness, r"готов").unwrap();
        let m = rule.find("не готов, но готов").unwrap();
        assert_eq!(m.start(), "не ".len());
        assert_eq!(m.as_str(), "готов");
    }

    #[test]
    fn test_rule_kind_names() {
        assert_eq!(RuleKind::JobSearch.name(), "job_search");
        assert_eq!(RuleKind::Readiness.name(), "ready_to_start");
    }
}
