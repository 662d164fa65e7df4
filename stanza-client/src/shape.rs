//! Structural expectations on an [`Analysis`]: how many sentences came back
//! and how many tokens each of them holds.

use crate::models::Analysis;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("unexpected number of sentences: {actual}")]
    SentenceCount { expected: usize, actual: usize },
    #[error("unexpected sentence length: {actual}")]
    TokenCount {
        sentence: usize,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedShape {
    pub sentence_count: usize,
    /// Token counts of the leading sentences, checked in order
    pub token_counts: Vec<usize>,
}

impl ExpectedShape {
    pub fn new(sentence_count: usize, token_counts: Vec<usize>) -> Self {
        Self {
            sentence_count,
            token_counts,
        }
    }

    /// Compare `analysis` against this shape. The first mismatch is returned.
    pub fn check<T>(&self, analysis: &Analysis<T>) -> Result<(), ShapeError> {
        let actual = analysis.sentence_count();
        if actual != self.sentence_count {
            return Err(ShapeError::SentenceCount {
                expected: self.sentence_count,
                actual,
            });
        }

        for (sentence, &expected) in self.token_counts.iter().enumerate() {
            let actual = analysis.token_count(sentence).unwrap_or(0);
            if actual != expected {
                return Err(ShapeError::TokenCount {
                    sentence,
                    expected,
                    actual,
                });
            }
        }

        Ok(())
    }
}
