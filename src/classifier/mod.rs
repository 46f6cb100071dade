//! Phrase classification over versioned rule-sets.
//!
//! A [`PhraseClassifier`] owns one immutable [`RuleSet`](crate::rules::RuleSet)
//! and evaluates its two rules independently against each text: a text may
//! match neither, either, or both.
//!
//! # Example
//!
//! ```
//! use priznak::classifier::PhraseClassifier;
//! use priznak::rules::RuleSet;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let classifier = PhraseClassifier::new(RuleSet::baseline()?);
//!
//! let result = classifier.classify("Активно ищу работу, готов выйти завтра");
//! assert!(result.job_search.matched);
//! assert!(result.ready_to_start.matched);
//! # Ok(())
//! # }
//! ```

mod parallel;
mod phrase;
mod result;
pub mod text;

pub use phrase::PhraseClassifier;
pub use result::{CandidateStatus, ClassificationResult, TextClassification};
