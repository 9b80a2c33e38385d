//! Token canonicalization.
//!
//! Rules, in order:
//! 1. Numeric literals longer than the threshold become `<number>`.
//! 2. Other word-shaped tokens missing from the dictionary become `<variable>`.
//! 3. Everything else passes through unchanged.

use crate::constants::{NUMBER_PLACEHOLDER, VARIABLE_PLACEHOLDER};
use crate::keywords::KeywordDictionary;
use crate::tokenizer::is_word;

/// Rewrites tokens to their canonical form.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'d> {
    dictionary: &'d KeywordDictionary,
    number_threshold: usize,
}

impl<'d> Normalizer<'d> {
    /// Create a normalizer over a keyword dictionary.
    ///
    /// Numeric tokens with more than `number_threshold` characters are
    /// abstracted; shorter ones are kept verbatim.
    pub fn new(dictionary: &'d KeywordDictionary, number_threshold: usize) -> Self {
        Self {
            dictionary,
            number_threshold,
        }
    }

    /// Canonical form of a single token.
    pub fn normalize<'t>(&self, token: &'t str) -> &'t str {
        if is_numeric(token) {
            if token.chars().count() > self.number_threshold {
                NUMBER_PLACEHOLDER
            } else {
                token
            }
        } else if is_word(token) && !self.dictionary.contains(token) {
            VARIABLE_PLACEHOLDER
        } else {
            token
        }
    }

    /// Canonical form of every token, in order.
    pub fn normalize_all<'t, I>(&self, tokens: I) -> Vec<&'t str>
    where
        I: IntoIterator<Item = &'t str>,
    {
        tokens.into_iter().map(|token| self.normalize(token)).collect()
    }
}

/// A non-empty run of ASCII digits.
///
/// The tokenizer splits `3.14` into `3`, `.` and `14`, so each digit run of
/// a decimal literal is judged against the threshold on its own.
pub fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
