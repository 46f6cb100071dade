//! Rule model: versioned pattern rules for phrase classification.

mod builtin;
mod rule;
mod rule_set;

pub use rule::{ClassificationRule, RuleKind};
pub use rule_set::{RuleSet, RuleSetVersion};
