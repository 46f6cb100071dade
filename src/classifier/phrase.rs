//! The phrase classifier.

use crate::classifier::result::{ClassificationResult, TextClassification};
use crate::rules::{ClassificationRule, RuleSet};

/// Stateless classifier over one immutable rule-set.
///
/// Each call evaluates the job-search and readiness rules independently;
/// neither result ever depends on the other pattern. Classification is pure:
/// the same text and rule-set always produce the same result.
#[derive(Debug, Clone)]
pub struct PhraseClassifier {
    rule_set: RuleSet,
}

impl PhraseClassifier {
    /// Create a classifier over `rule_set`.
    pub fn new(rule_set: RuleSet) -> Self {
        PhraseClassifier { rule_set }
    }

    /// The rule-set this classifier evaluates.
    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    /// Classify one text.
    ///
    /// Never fails: empty or unmatchable text yields two unmatched results.
    /// When a rule matches, the leftmost matching substring is recorded with
    /// its byte span.
    pub fn classify(&self, text: &str) -> TextClassification {
        let job_search = evaluate(self.rule_set.job_search(), text);
        let ready_to_start = evaluate(self.rule_set.readiness(), text);

        TextClassification::new(text, self.rule_set.version(), job_search, ready_to_start)
    }
}

fn evaluate(rule: &ClassificationRule, text: &str) -> ClassificationResult {
    match rule.find(text) {
        Some(m) => ClassificationResult::matched(rule.kind(), m.as_str(), m.start(), m.end()),
        None => ClassificationResult::unmatched(rule.kind()),
    }
}
