//! Language catalog: language names and their class labels.
//!
//! The catalog is a JSON object mapping each language name to its file
//! extensions. The first extension is the class label the classifier
//! was trained with:
//!
//! ```json
//! { "Python": ["py", "pyw"], "C": ["c", "h"], "Rust": ["rs"] }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use langsniff_core::ArtifactLocator;

use crate::error::{ModelError, ModelResult};
use crate::LANGUAGES_FILENAME;

/// Bidirectional mapping between language names and class labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCatalog {
    /// Language name → class label.
    labels: BTreeMap<String, String>,
    /// Class label → language name.
    languages: HashMap<String, String>,
}

impl LanguageCatalog {
    /// Load the catalog stored next to the default feature artifact.
    pub fn load_default() -> ModelResult<Self> {
        Self::from_locator(&ArtifactLocator::new())
    }

    /// Load the catalog stored next to the artifact `locator` finds.
    ///
    /// # Errors
    ///
    /// - [`ModelError::Feature`] if no feature artifact is found
    /// - [`ModelError::CatalogIo`] if the catalog file is missing
    pub fn from_locator(locator: &ArtifactLocator) -> ModelResult<Self> {
        let artifact = locator.artifact_path()?;
        Self::from_path(&artifact.with_file_name(LANGUAGES_FILENAME))
    }

    /// Load a catalog from a JSON file.
    pub fn from_path(path: &Path) -> ModelResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ModelError::catalog_io(path, e))?;
        let entries: BTreeMap<String, Vec<String>> = serde_json::from_str(&content)
            .map_err(|e| ModelError::catalog_parse(Some(path), e.to_string()))?;

        let catalog = Self::from_entries(entries)
            .map_err(|message| ModelError::catalog_parse(Some(path), message))?;
        tracing::debug!(
            "Loaded language catalog {} ({} languages)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        let entries: BTreeMap<String, Vec<String>> =
            serde_json::from_str(json).map_err(|e| ModelError::catalog_parse(None, e.to_string()))?;
        Self::from_entries(entries).map_err(|message| ModelError::catalog_parse(None, message))
    }

    /// Build a catalog from `(language, label)` pairs.
    pub fn from_labels<I, N, L>(pairs: I) -> ModelResult<Self>
    where
        I: IntoIterator<Item = (N, L)>,
        N: Into<String>,
        L: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(name, label)| (name.into(), vec![label.into()]))
            .collect();
        Self::from_entries(entries).map_err(|message| ModelError::catalog_parse(None, message))
    }

    fn from_entries(entries: BTreeMap<String, Vec<String>>) -> Result<Self, String> {
        let mut labels = BTreeMap::new();
        let mut languages = HashMap::new();

        for (name, extensions) in entries {
            let Some(label) = extensions.into_iter().next() else {
                return Err(format!("language '{name}' has no extension"));
            };
            if let Some(previous) = languages.insert(label.clone(), name.clone()) {
                return Err(format!(
                    "label '{label}' is used by both '{previous}' and '{name}'"
                ));
            }
            labels.insert(name, label);
        }

        Ok(Self { labels, languages })
    }

    /// Supported language names, sorted.
    pub fn supported_languages(&self) -> Vec<&str> {
        self.labels.keys().map(String::as_str).collect()
    }

    /// Language name of a class label.
    pub fn language_for_label(&self, label: &str) -> Option<&str> {
        self.languages.get(label).map(String::as_str)
    }

    /// Class label of a language name.
    pub fn label_for_language(&self, language: &str) -> Option<&str> {
        self.labels.get(language).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
