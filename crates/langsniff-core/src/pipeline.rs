//! The vectorization pipeline.
//!
//! ```text
//! text ──► tokens ──► normalized tokens ──► n-grams ──► counts ──► unit vector
//! ```
//!
//! [`Vectorizer`] is a pure function of `(text, feature artifact)`. The only
//! shared state is the immutable keyword dictionary, held behind an `Arc`, so
//! one vectorizer can be used from many threads without locking.

use std::sync::Arc;

use crate::config::{FeatureConfig, PipelineConfig};
use crate::errors::FeatureResult;
use crate::hasher::{FeatureHasher, HashFunction};
use crate::keywords::KeywordDictionary;
use crate::ngram::NGrams;
use crate::normalizer::Normalizer;
use crate::source::decode_lossy;
use crate::tokenizer::{Tokenizer, Tokens};
use crate::vector::{CountVector, FeatureVector};

/// Turns source text into fixed-dimension feature vectors.
#[derive(Debug, Clone)]
pub struct Vectorizer {
    keywords: Arc<KeywordDictionary>,
    number_threshold: usize,
    hasher: FeatureHasher,
    tokenizer: Tokenizer,
    settings: PipelineConfig,
}

impl Vectorizer {
    /// Build a vectorizer from a feature artifact with default settings.
    ///
    /// # Errors
    ///
    /// Fails if the artifact is invalid (empty dictionary, bad dimension,
    /// unsupported version).
    pub fn new(config: &FeatureConfig) -> FeatureResult<Self> {
        for warning in config.validate()? {
            tracing::debug!("Feature artifact warning: {}", warning);
        }

        Ok(Self {
            keywords: Arc::clone(&config.keywords),
            number_threshold: config.number_threshold,
            hasher: FeatureHasher::new(config.hash_function, config.dimension)?,
            tokenizer: Tokenizer::new(),
            settings: PipelineConfig::default(),
        })
    }

    /// Replace the deployment settings.
    ///
    /// # Errors
    ///
    /// Fails if the settings do not pass [`PipelineConfig::validate`].
    pub fn with_settings(mut self, settings: PipelineConfig) -> FeatureResult<Self> {
        for warning in settings.validate()? {
            tracing::debug!("Pipeline config warning: {}", warning);
        }
        self.settings = settings;
        Ok(self)
    }

    /// Output dimension.
    pub fn dimension(&self) -> usize {
        self.hasher.dimension()
    }

    /// Pinned hash function.
    pub fn hash_function(&self) -> HashFunction {
        self.hasher.function()
    }

    pub fn keywords(&self) -> &KeywordDictionary {
        &self.keywords
    }

    pub fn settings(&self) -> &PipelineConfig {
        &self.settings
    }

    /// Normalizer bound to this vectorizer's dictionary.
    pub fn normalizer(&self) -> Normalizer<'_> {
        Normalizer::new(&self.keywords, self.number_threshold)
    }

    /// Lazy raw tokens of `text`, after input limits are applied.
    pub fn tokens<'a>(&self, text: &'a str) -> Tokens<'a> {
        self.tokenizer.tokens(self.settings.limits.apply(text))
    }

    /// Normalized token sequence.
    pub fn normalize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.normalizer().normalize_all(self.tokens(text))
    }

    /// Unigrams, bigrams and trigrams of the normalized sequence.
    pub fn ngrams(&self, text: &str) -> NGrams {
        NGrams::extract(&self.normalize(text))
    }

    /// Hashed n-gram counts.
    pub fn count(&self, text: &str) -> CountVector {
        self.hasher.hash(self.ngrams(text).features())
    }

    /// Unit-length feature vector. Empty text yields the zero vector.
    pub fn vectorize(&self, text: &str) -> FeatureVector {
        FeatureVector::from_counts(&self.count(text))
    }

    /// Vectorize raw bytes, decoding invalid UTF-8 lossily.
    pub fn vectorize_bytes(&self, bytes: &[u8]) -> FeatureVector {
        self.vectorize(&decode_lossy(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{NUMBER_PLACEHOLDER, VARIABLE_PLACEHOLDER};
    use crate::errors::FeatureError;
    use crate::source::InputLimits;

    fn vectorizer() -> Vectorizer {
        let keywords = KeywordDictionary::new([
            "for",
            "in",
            "range",
            "print",
            NUMBER_PLACEHOLDER,
            VARIABLE_PLACEHOLDER,
        ]);
        Vectorizer::new(&FeatureConfig::new(keywords).with_dimension(1024)).unwrap()
    }

    #[test]
    fn test_normalize_python_loop() {
        let v = vectorizer();
        assert_eq!(
            v.normalize("for x in range(10):\n    print(x)"),
            vec![
                "for", "<variable>", "in", "range", "(", "10", ")", ":", "\n", "print", "(",
                "<variable>", ")", "\n"
            ]
        );
        assert_eq!(v.normalize("range(1000)")[2], NUMBER_PLACEHOLDER);
    }

    #[test]
    fn test_count_total_matches_ngram_count() {
        let v = vectorizer();
        let text = "for x in y:\n    print(x)";
        // 11 tokens: 11 unigrams + 10 bigrams + 9 trigrams
        assert_eq!(v.ngrams(text).len(), 30);
        assert_eq!(v.count(text).total(), 30);
    }

    #[test]
    fn test_empty_text_is_zero_vector() {
        let v = vectorizer();
        let vector = v.vectorize("");
        assert_eq!(vector.dimension(), 1024);
        assert!(vector.is_zero());
    }

    #[test]
    fn test_vectorize_is_unit_norm() {
        let v = vectorizer();
        let vector = v.vectorize("int main(void) { return 0; }");
        assert!((vector.norm() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_vectorize_bytes_tolerates_invalid_utf8() {
        let v = vectorizer();
        let vector = v.vectorize_bytes(b"x = \xff\xfe;\n");
        assert_eq!(vector.dimension(), 1024);
        assert!((vector.norm() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_limits_truncate_before_tokenizing() {
        let v = vectorizer()
            .with_settings(PipelineConfig {
                limits: InputLimits::unlimited().with_max_lines(1),
                parallel: false,
            })
            .unwrap();
        assert_eq!(v.normalize("for x\nprint y\n"), vec!["for", "<variable>", "\n"]);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let result = vectorizer().with_settings(PipelineConfig {
            limits: InputLimits::unlimited().with_max_lines(0),
            parallel: true,
        });
        assert!(matches!(
            result,
            Err(FeatureError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_tight_byte_limit_keeps_unit_norm() {
        let v = vectorizer()
            .with_settings(PipelineConfig {
                limits: InputLimits::unlimited().with_max_input_bytes(1),
                parallel: false,
            })
            .unwrap();
        let vector = v.vectorize("é = 1");
        assert!(!vector.is_zero());
        assert!((vector.norm() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_empty_dictionary_rejected() {
        let config = FeatureConfig::new(KeywordDictionary::default());
        assert!(Vectorizer::new(&config).is_err());
    }
}
