//! Language guessing on top of a vectorizer and a classifier.

use langsniff_core::{FeatureVector, Vectorizer};
use serde::Serialize;

use crate::catalog::LanguageCatalog;
use crate::error::{ModelError, ModelResult};
use crate::LanguageClassifier;

/// Probability that a text is written in a given language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageProbability {
    pub language: String,
    pub probability: f32,
}

/// Guess the programming language of source code.
#[derive(Debug)]
pub struct Guess {
    vectorizer: Vectorizer,
    classifier: Box<dyn LanguageClassifier>,
    catalog: LanguageCatalog,
}

impl Guess {
    /// Create a guesser.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnknownLabel`] if a classifier label has no language in
    /// the catalog.
    pub fn new(
        vectorizer: Vectorizer,
        classifier: Box<dyn LanguageClassifier>,
        catalog: LanguageCatalog,
    ) -> ModelResult<Self> {
        if let Some(label) = classifier
            .labels()
            .iter()
            .find(|label| catalog.language_for_label(label).is_none())
        {
            return Err(ModelError::UnknownLabel {
                label: label.clone(),
            });
        }

        tracing::debug!(
            "Guess ready: {} classes, dimension {}",
            classifier.class_count(),
            vectorizer.dimension()
        );
        Ok(Self {
            vectorizer,
            classifier,
            catalog,
        })
    }

    /// Supported language names, sorted.
    pub fn supported_languages(&self) -> Vec<&str> {
        self.catalog.supported_languages()
    }

    pub fn vectorizer(&self) -> &Vectorizer {
        &self.vectorizer
    }

    /// Probability of each language, from the most to the least probable.
    pub fn probabilities(&self, text: &str) -> ModelResult<Vec<LanguageProbability>> {
        self.rank(&self.vectorizer.vectorize(text))
    }

    /// Most probable language, or `None` if no language is detected.
    ///
    /// Blank text and unreliable predictions yield `None`.
    pub fn language_name(&self, text: &str) -> ModelResult<Option<String>> {
        if text.trim().is_empty() {
            tracing::warn!("Empty source code provided");
            return Ok(None);
        }
        self.best(self.probabilities(text)?)
    }

    /// [`Guess::language_name`] for many texts, vectorized in parallel.
    pub fn language_names<S>(&self, texts: &[S]) -> ModelResult<Vec<Option<String>>>
    where
        S: AsRef<str> + Sync,
    {
        let vectors = self.vectorizer.vectorize_batch(texts);
        texts
            .iter()
            .zip(&vectors)
            .map(|(text, vector)| {
                if text.as_ref().trim().is_empty() {
                    return Ok(None);
                }
                self.best(self.rank(vector)?)
            })
            .collect()
    }

    fn rank(&self, vector: &FeatureVector) -> ModelResult<Vec<LanguageProbability>> {
        let labels = self.classifier.labels();
        let values = self.classifier.predict(vector)?;
        if values.len() != labels.len() {
            return Err(ModelError::ClassCountMismatch {
                expected: labels.len(),
                found: values.len(),
            });
        }

        let mut scores = labels
            .iter()
            .zip(values)
            .map(|(label, probability)| {
                let language = self.catalog.language_for_label(label).ok_or_else(|| {
                    ModelError::UnknownLabel {
                        label: label.clone(),
                    }
                })?;
                Ok(LanguageProbability {
                    language: language.to_string(),
                    probability,
                })
            })
            .collect::<ModelResult<Vec<_>>>()?;

        scores.sort_by(|a, b| {
            b.probability
                .total_cmp(&a.probability)
                .then_with(|| a.language.cmp(&b.language))
        });
        Ok(scores)
    }

    fn best(&self, scores: Vec<LanguageProbability>) -> ModelResult<Option<String>> {
        let values: Vec<f32> = scores.iter().map(|s| s.probability).collect();
        if !is_reliable(&values) {
            tracing::warn!("No programming language detected");
            return Ok(None);
        }
        Ok(scores.into_iter().next().map(|s| s.language))
    }
}

/// Whether the top probability stands out from the rest.
///
/// The highest probability must exceed the mean by more than two sample
/// standard deviations. Fewer than two classes is never reliable.
pub fn is_reliable(probabilities: &[f32]) -> bool {
    if probabilities.len() < 2 {
        return false;
    }

    let n = probabilities.len() as f64;
    let mean = probabilities.iter().map(|&p| f64::from(p)).sum::<f64>() / n;
    let variance = probabilities
        .iter()
        .map(|&p| (f64::from(p) - mean).powi(2))
        .sum::<f64>()
        / (n - 1.0);
    let threshold = mean + 2.0 * variance.sqrt();

    let top = probabilities
        .iter()
        .map(|&p| f64::from(p))
        .fold(f64::NEG_INFINITY, f64::max);
    top > threshold
}
