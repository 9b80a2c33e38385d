//! # langsniff-model
//!
//! Language guessing on top of the langsniff feature vectors.
//!
//! This crate is the seam towards a trained classifier. It provides:
//!
//! - **Classifier trait**: [`LanguageClassifier`] maps a feature vector to
//!   one probability per class label
//! - **Language catalog**: language names and their class labels
//! - **Guess**: ranked language probabilities and a reliable best guess
//!
//! Training and running an actual model is left to implementations of
//! [`LanguageClassifier`].
//!
//! ## Usage
//!
//! ```ignore
//! use langsniff_core::{FeatureConfig, Vectorizer};
//! use langsniff_model::{Guess, LanguageCatalog};
//!
//! let vectorizer = Vectorizer::new(&FeatureConfig::load_default()?)?;
//! let guess = Guess::new(vectorizer, Box::new(my_classifier), LanguageCatalog::load_default()?)?;
//!
//! assert_eq!(guess.language_name("fn main() {}\n")?, Some("Rust".to_string()));
//! ```

pub mod catalog;
pub mod error;
pub mod guess;

pub use catalog::LanguageCatalog;
pub use error::{ModelError, ModelResult};
pub use guess::{is_reliable, Guess, LanguageProbability};

use langsniff_core::FeatureVector;

/// File name of the language catalog, next to the feature artifact.
pub const LANGUAGES_FILENAME: &str = "languages.json";

// ============================================================================
// Classifier Trait
// ============================================================================

/// Trait for trained language classifiers.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across threads.
pub trait LanguageClassifier: Send + Sync + std::fmt::Debug {
    /// Class labels, in the order of [`LanguageClassifier::predict`] output.
    fn labels(&self) -> &[String];

    /// Probability of each class label for a feature vector.
    ///
    /// Returns exactly one value per label.
    fn predict(&self, vector: &FeatureVector) -> ModelResult<Vec<f32>>;

    /// Number of classes.
    fn class_count(&self) -> usize {
        self.labels().len()
    }
}
