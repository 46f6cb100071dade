//! Batch classification, sequential and data-parallel.
//!
//! Texts are classified independently against an immutable rule-set, so the
//! parallel path needs no locking and preserves input order.

use rayon::prelude::*;

use crate::classifier::phrase::PhraseClassifier;
use crate::classifier::result::TextClassification;

impl PhraseClassifier {
    /// Classify a slice of texts sequentially, in input order.
    pub fn classify_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<TextClassification> {
        texts.iter().map(|text| self.classify(text.as_ref())).collect()
    }

    /// Classify a slice of texts in parallel.
    ///
    /// Output order matches input order.
    pub fn classify_batch_parallel<S>(&self, texts: &[S]) -> Vec<TextClassification>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.classify(text.as_ref()))
            .collect()
    }
}
