//! A rule-set: the job-search and readiness rules under one version tag.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rules::builtin;
use crate::rules::rule::{ClassificationRule, RuleKind};

/// Identifier for a built-in rule-set revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSetVersion {
    /// First revision of the phrase rules.
    Baseline,
    /// Widened revision: broader verb endings, optional intervening words,
    /// extra trigger phrases.
    Improved,
}

impl RuleSetVersion {
    /// Stable identifier used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            RuleSetVersion::Baseline => "baseline",
            RuleSetVersion::Improved => "improved",
        }
    }
}

/// An ordered pair of rules (job-search, readiness) under one version tag.
///
/// Rule-sets are immutable once constructed and safely shareable across
/// threads; classification never mutates them.
#[derive(Debug, Clone)]
pub struct RuleSet {
    version: String,
    job_search: ClassificationRule,
    readiness: ClassificationRule,
}

impl RuleSet {
    /// The built-in baseline rules.
    pub fn baseline() -> Result<Self> {
        Self::custom(
            RuleSetVersion::Baseline.name(),
            builtin::BASELINE_JOB_SEARCH,
            builtin::BASELINE_READY_TO_START,
        )
    }

    /// The built-in improved rules.
    ///
    /// Wider than baseline by design of the rules themselves: verb endings
    /// beyond `[уы]`, optional words between verb and day-word, extra
    /// trigger phrases. Note that the bare `начн[уы]` readiness alternative
    /// fires with no day-word at all.
    pub fn improved() -> Result<Self> {
        Self::custom(
            RuleSetVersion::Improved.name(),
            builtin::IMPROVED_JOB_SEARCH,
            builtin::IMPROVED_READY_TO_START,
        )
    }

    /// The built-in rule-set for `version`.
    pub fn for_version(version: RuleSetVersion) -> Result<Self> {
        match version {
            RuleSetVersion::Baseline => Self::baseline(),
            RuleSetVersion::Improved => Self::improved(),
        }
    }

    /// Build a rule-set from caller-supplied patterns.
    ///
    /// Fails if either pattern does not compile; a constructed rule-set
    /// never fails afterwards.
    pub fn custom(version: &str, job_search: &str, readiness: &str) -> Result<Self> {
        Ok(RuleSet {
            version: version.to_string(),
            job_search: ClassificationRule::new(RuleKind::JobSearch, job_search)?,
            readiness: ClassificationRule::new(RuleKind::Readiness, readiness)?,
        })
    }

    /// Version tag of this rule-set.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The job-search intent rule.
    pub fn job_search(&self) -> &ClassificationRule {
        &self.job_search
    }

    /// The readiness-to-start rule.
    pub fn readiness(&self) -> &ClassificationRule {
        &self.readiness
    }

    /// Both rules in declaration order.
    pub fn rules(&self) -> [&ClassificationRule; 2] {
        [&self.job_search, &self.readiness]
    }
}
