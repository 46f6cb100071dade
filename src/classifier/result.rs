//! Classification result types.

use serde::{Deserialize, Serialize};

use crate::rules::RuleKind;

/// Outcome of evaluating one rule against one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Which rule produced this result.
    pub rule: RuleKind,
    /// Whether the rule matched anywhere in the text.
    pub matched: bool,
    /// Leftmost matched substring, present only when matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_text: Option<String>,
    /// Byte offset of the match start, present only when matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_offset: Option<usize>,
    /// Byte offset one past the match end, present only when matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_offset: Option<usize>,
}

impl ClassificationResult {
    /// Result for a rule that matched `text[start..end]`.
    pub fn matched(rule: RuleKind, matched_text: &str, start: usize, end: usize) -> Self {
        ClassificationResult {
            rule,
            matched: true,
            matched_text: Some(matched_text.to_string()),
            start_offset: Some(start),
            end_offset: Some(end),
        }
    }

    /// Result for a rule that matched nothing.
    pub fn unmatched(rule: RuleKind) -> Self {
        ClassificationResult {
            rule,
            matched: false,
            matched_text: None,
            start_offset: None,
            end_offset: None,
        }
    }
}

/// Combined candidate status derived from the two rule outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    /// Job-search intent only.
    ActivelySearching,
    /// Readiness to start only.
    ReadyToStart,
    /// Both signals present.
    SearchingAndReady,
    /// Neither signal present.
    Unknown,
}

impl CandidateStatus {
    /// Derive the status quadrant from the two independent results.
    pub fn from_results(
        job_search: &ClassificationResult,
        ready_to_start: &ClassificationResult,
    ) -> Self {
        match (job_search.matched, ready_to_start.matched) {
            (true, true) => CandidateStatus::SearchingAndReady,
            (true, false) => CandidateStatus::ActivelySearching,
            (false, true) => CandidateStatus::ReadyToStart,
            (false, false) => CandidateStatus::Unknown,
        }
    }
}

/// Both rule outcomes for one text under one rule-set version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextClassification {
    /// The input text.
    pub text: String,
    /// Version tag of the rule-set that produced this classification.
    pub rule_set: String,
    /// Derived status quadrant.
    pub status: CandidateStatus,
    /// Job-search intent result.
    pub job_search: ClassificationResult,
    /// Readiness-to-start result.
    pub ready_to_start: ClassificationResult,
}

impl TextClassification {
    /// Assemble a classification; the status quadrant is derived here.
    pub fn new(
        text: &str,
        rule_set: &str,
        job_search: ClassificationResult,
        ready_to_start: ClassificationResult,
    ) -> Self {
        let status = CandidateStatus::from_results(&job_search, &ready_to_start);
        TextClassification {
            text: text.to_string(),
            rule_set: rule_set.to_string(),
            status,
            job_search,
            ready_to_start,
        }
    }

    /// True if either rule matched.
    pub fn matched_any(&self) -> bool {
        self.job_search.matched || self.ready_to_start.matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_quadrants() {
        let hit = ClassificationResult::matched(RuleKind::JobSearch, "ищу работу", 0, 19);
        let miss = ClassificationResult::unmatched(RuleKind::Readiness);

        assert_eq!(
            CandidateStatus::from_results(&hit, &miss),
            CandidateStatus::ActivelySearching
        );
        assert_eq!(
            CandidateStatus::from_results(&miss, &hit),
            CandidateStatus::ReadyToStart
        );
        assert_eq!(
            CandidateStatus::from_results(&hit, &hit),
            CandidateStatus::SearchingAndReady
        );
        assert_eq!(
            CandidateStatus::from_results(&miss, &miss),
            CandidateStatus::Unknown
        );
    }

    #[test]
    fn test_unmatched_result_has_no_span() {
        let result = ClassificationResult::unmatched(RuleKind::JobSearch);
        assert!(!result.matched);
        assert_eq!(result.matched_text, None);
        assert_eq!(result.start_offset, None);
        assert_eq!(result.end_offset, None);
    }

    #[test]
    fn test_serialized_shape() {
        let classification = TextClassification::new(
            "ищу работу",
            "baseline",
            ClassificationResult::matched(RuleKind::JobSearch, "ищу работу", 0, 19),
            ClassificationResult::unmatched(RuleKind::Readiness),
        );

        let value = serde_json::to_value(&classification).unwrap();
        assert_eq!(value["rule_set"], "baseline");
        assert_eq!(value["status"], "actively_searching");
        assert_eq!(value["job_search"]["rule"], "job_search");
        assert_eq!(value["job_search"]["matched_text"], "ищу работу");
        assert_eq!(value["ready_to_start"]["rule"], "ready_to_start");
        // Unmatched results carry no span fields.
        assert!(value["ready_to_start"].get("matched_text").is_none());
    }
}
