//! Unigram, bigram and trigram extraction.

use crate::constants::NGRAM_SEPARATOR;

/// The n-grams of a normalized token sequence.
///
/// Each sequence keeps the order of the tokens it was built from, but
/// consumers treat the union as a bag of features.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NGrams {
    pub unigrams: Vec<String>,
    pub bigrams: Vec<String>,
    pub trigrams: Vec<String>,
}

impl NGrams {
    /// Extract all n-grams of order 1 to 3.
    ///
    /// Sequences shorter than a window produce no n-grams of that order.
    pub fn extract<S: AsRef<str>>(tokens: &[S]) -> Self {
        Self {
            unigrams: windows(tokens, 1),
            bigrams: windows(tokens, 2),
            trigrams: windows(tokens, 3),
        }
    }

    /// All n-grams, unigrams first.
    pub fn features(&self) -> impl Iterator<Item = &str> {
        self.unigrams
            .iter()
            .chain(&self.bigrams)
            .chain(&self.trigrams)
            .map(String::as_str)
    }

    /// Total number of n-grams.
    pub fn len(&self) -> usize {
        self.unigrams.len() + self.bigrams.len() + self.trigrams.len()
    }

    /// Returns `true` if no n-gram was extracted.
    pub fn is_empty(&self) -> bool {
        self.unigrams.is_empty()
    }
}

fn windows<S: AsRef<str>>(tokens: &[S], size: usize) -> Vec<String> {
    tokens
        .windows(size)
        .map(|window| {
            window
                .iter()
                .map(|token| token.as_ref())
                .collect::<Vec<&str>>()
                .join(NGRAM_SEPARATOR)
        })
        .collect()
}
