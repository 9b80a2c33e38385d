//! Immutable keyword set.

use std::collections::HashSet;

/// Tokens considered common enough not to be abstracted to `<variable>`.
///
/// Lookups are case-sensitive and O(1). The dictionary is never mutated
/// after construction; share it with `Arc` across worker threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordDictionary {
    keywords: HashSet<String>,
}

impl KeywordDictionary {
    /// Create a dictionary from any collection of tokens.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if the token is a keyword.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.keywords.contains(token)
    }

    /// Number of keywords.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Returns `true` if the dictionary has no keywords.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Iterate over the keywords in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Keywords sorted lexicographically, for stable serialization.
    pub fn to_sorted_vec(&self) -> Vec<String> {
        let mut keywords: Vec<String> = self.keywords.iter().cloned().collect();
        keywords.sort();
        keywords
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordDictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_case_sensitive() {
        let dict = KeywordDictionary::new(["for", "print"]);
        assert!(dict.contains("for"));
        assert!(!dict.contains("For"));
        assert!(!dict.contains("x"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let dict: KeywordDictionary = ["if", "if", "else"].into_iter().collect();
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_sorted_vec() {
        let dict = KeywordDictionary::new(["while", "def", "int"]);
        assert_eq!(dict.to_sorted_vec(), vec!["def", "int", "while"]);
    }

    #[test]
    fn test_empty() {
        assert!(KeywordDictionary::default().is_empty());
    }
}
