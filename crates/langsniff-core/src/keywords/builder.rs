//! Offline keyword selection from corpus statistics.
//!
//! A token's score is its corpus-wide term frequency multiplied by its
//! document frequency. The highest scoring tokens, plus the two placeholders,
//! form the dictionary.

use std::cmp::Ordering;
use std::collections::HashMap;

use rayon::prelude::*;

use super::KeywordDictionary;
use crate::constants::{NEWLINE_TOKEN, PLACEHOLDERS};
use crate::errors::{FeatureError, FeatureResult};
use crate::tokenizer::Tokenizer;

/// Term and document counts accumulated over a corpus.
#[derive(Debug, Clone, Default)]
pub struct KeywordStatistics {
    /// Token → total occurrences.
    term_counts: HashMap<String, u64>,
    /// Token → number of documents containing it.
    document_counts: HashMap<String, u64>,
    total_terms: u64,
    documents: u64,
}

impl KeywordStatistics {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate statistics over many documents.
    pub fn from_documents<S>(documents: &[S], parallel: bool) -> Self
    where
        S: AsRef<str> + Sync,
    {
        if parallel {
            documents
                .par_iter()
                .fold(Self::new, |mut stats, doc| {
                    stats.add_document(doc.as_ref());
                    stats
                })
                .reduce(Self::new, Self::merge)
        } else {
            let mut stats = Self::new();
            for doc in documents {
                stats.add_document(doc.as_ref());
            }
            stats
        }
    }

    /// Count the tokens of one document.
    ///
    /// Text is lowercased. Newline tokens and multi-digit numbers are ignored.
    pub fn add_document(&mut self, text: &str) {
        let lower = text.to_lowercase();
        let mut seen: HashMap<&str, u64> = HashMap::new();
        for token in Tokenizer::new().tokens(&lower) {
            if token == NEWLINE_TOKEN || is_multi_digit(token) {
                continue;
            }
            *seen.entry(token).or_insert(0) += 1;
        }

        for (token, count) in seen {
            self.total_terms += count;
            *self.term_counts.entry(token.to_string()).or_insert(0) += count;
            *self.document_counts.entry(token.to_string()).or_insert(0) += 1;
        }
        self.documents += 1;
    }

    /// Combine two partial statistics.
    pub fn merge(mut self, other: Self) -> Self {
        for (token, count) in other.term_counts {
            *self.term_counts.entry(token).or_insert(0) += count;
        }
        for (token, count) in other.document_counts {
            *self.document_counts.entry(token).or_insert(0) += count;
        }
        self.total_terms += other.total_terms;
        self.documents += other.documents;
        self
    }

    /// Number of documents seen.
    pub fn document_count(&self) -> u64 {
        self.documents
    }

    /// Number of distinct terms seen.
    pub fn unique_terms(&self) -> usize {
        self.term_counts.len()
    }

    /// Select the `size` most representative keywords.
    ///
    /// The two placeholders always take two of the `size` slots.
    pub fn build(&self, size: usize) -> FeatureResult<KeywordDictionary> {
        if self.documents == 0 {
            return Err(FeatureError::EmptyCorpus);
        }
        if size < PLACEHOLDERS.len() {
            return Err(FeatureError::invalid_configuration(
                format!("keyword count {size} is too small"),
                format!("Use at least {} keywords", PLACEHOLDERS.len()),
            ));
        }

        let ranked = self.ranked_terms();
        let keep = size - PLACEHOLDERS.len();
        tracing::debug!(
            "Selecting {} of {} terms from {} documents",
            keep.min(ranked.len()),
            ranked.len(),
            self.documents
        );

        Ok(ranked
            .into_iter()
            .take(keep)
            .chain(PLACEHOLDERS.iter().copied())
            .collect())
    }

    /// Terms sorted by descending score, ties broken by token.
    fn ranked_terms(&self) -> Vec<&str> {
        if self.total_terms == 0 {
            return Vec::new();
        }
        let total_terms = self.total_terms as f64;
        let documents = self.documents as f64;

        let mut scored: Vec<(&str, f64)> = self
            .term_counts
            .iter()
            .map(|(token, &count)| {
                let doc_count = self.document_counts.get(token).copied().unwrap_or(0);
                let score = (count as f64 / total_terms) * (doc_count as f64 / documents);
                (token.as_str(), score)
            })
            .collect();

        scored.sort_by(|a, b| match b.1.total_cmp(&a.1) {
            Ordering::Equal => a.0.cmp(b.0),
            other => other,
        });
        scored.into_iter().map(|(token, _)| token).collect()
    }
}

fn is_multi_digit(token: &str) -> bool {
    token.len() > 1 && token.bytes().all(|b| b.is_ascii_digit())
}
