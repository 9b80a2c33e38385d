//! Configuration types for langsniff.
//!
//! Two kinds of configuration exist:
//! - [`FeatureConfig`]: the versioned feature artifact (`features.json`). It
//!   holds the keyword dictionary, hash function, dimension and numeric
//!   threshold. A classifier is only valid with the exact artifact it was
//!   trained against, so any load failure is fatal.
//! - [`PipelineConfig`]: deployment settings (`~/.langsniff/config.yaml`),
//!   such as input limits and parallelism. They never change feature values
//!   for inputs within the limits.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ARTIFACT_FORMAT_VERSION, DEFAULT_DIMENSION, DEFAULT_NUMBER_THRESHOLD, LANGSNIFF_HOME_DIR,
    PIPELINE_CONFIG_FILENAME, PLACEHOLDERS,
};
use crate::errors::{FeatureError, FeatureResult};
use crate::hasher::{validate_dimension, HashFunction};
use crate::keywords::KeywordDictionary;
use crate::locator::ArtifactLocator;
use crate::source::InputLimits;

// ============================================================================
// FeatureConfig
// ============================================================================

/// The versioned feature artifact.
///
/// # Example JSON
///
/// ```json
/// {
///   "version": 1,
///   "hash_function": "sha1-32",
///   "dimension": 4096,
///   "number_threshold": 2,
///   "keywords": ["<number>", "<variable>", "def", "for", "import"]
/// }
/// ```
///
/// `keywords` may also be an object whose keys are the keywords; the values
/// are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureConfig {
    /// Artifact format version.
    pub version: u32,
    /// Pinned hash function.
    pub hash_function: HashFunction,
    /// Feature vector dimension (power of two).
    pub dimension: usize,
    /// Numeric tokens longer than this become `<number>`.
    pub number_threshold: usize,
    /// Tokens kept verbatim by the normalizer.
    pub keywords: Arc<KeywordDictionary>,
}

/// On-disk form of [`FeatureConfig`].
///
/// Unknown keys are rejected: a misspelled pinned constant must not fall
/// back to its default.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct FeatureArtifact {
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default = "default_hash_function")]
    hash_function: String,
    #[serde(default = "default_dimension")]
    dimension: usize,
    #[serde(default = "default_number_threshold")]
    number_threshold: usize,
    keywords: KeywordsRepr,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum KeywordsRepr {
    List(Vec<String>),
    Map(BTreeMap<String, serde_json::Value>),
}

fn default_version() -> u32 {
    ARTIFACT_FORMAT_VERSION
}

fn default_hash_function() -> String {
    HashFunction::default().to_string()
}

fn default_dimension() -> usize {
    DEFAULT_DIMENSION
}

fn default_number_threshold() -> usize {
    DEFAULT_NUMBER_THRESHOLD
}

impl FeatureConfig {
    /// Create a config with default parameters around a dictionary.
    pub fn new(keywords: KeywordDictionary) -> Self {
        Self {
            version: ARTIFACT_FORMAT_VERSION,
            hash_function: HashFunction::default(),
            dimension: DEFAULT_DIMENSION,
            number_threshold: DEFAULT_NUMBER_THRESHOLD,
            keywords: Arc::new(keywords),
        }
    }

    /// Set the dimension.
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Set the numeric threshold.
    pub fn with_number_threshold(mut self, number_threshold: usize) -> Self {
        self.number_threshold = number_threshold;
        self
    }

    /// Load the artifact found by the default [`ArtifactLocator`].
    pub fn load_default() -> FeatureResult<Self> {
        let path = ArtifactLocator::new().artifact_path()?;
        Self::from_path(&path)
    }

    /// Load and validate an artifact from a file.
    ///
    /// # Errors
    ///
    /// - [`FeatureError::ArtifactIo`] if the file cannot be read
    /// - [`FeatureError::ArtifactParse`] if it is not a valid artifact
    /// - any validation error from [`FeatureConfig::validate`]
    pub fn from_path(path: &Path) -> FeatureResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| FeatureError::artifact_io(path, e))?;
        let artifact: FeatureArtifact =
            serde_json::from_str(&content).map_err(|e| FeatureError::artifact_parse(path, e))?;

        let config = Self::from_artifact(artifact)?;
        for warning in config.validate()? {
            tracing::warn!("Feature artifact warning: {}", warning);
        }

        tracing::info!(
            "Loaded feature artifact {} ({} keywords, dimension {}, hash {})",
            path.display(),
            config.keywords.len(),
            config.dimension,
            config.hash_function
        );
        Ok(config)
    }

    /// Parse and validate an artifact from a JSON string.
    pub fn from_json(json: &str) -> FeatureResult<Self> {
        let artifact: FeatureArtifact = serde_json::from_str(json)?;
        let config = Self::from_artifact(artifact)?;
        for warning in config.validate()? {
            tracing::warn!("Feature artifact warning: {}", warning);
        }
        Ok(config)
    }

    fn from_artifact(artifact: FeatureArtifact) -> FeatureResult<Self> {
        let keywords = match artifact.keywords {
            KeywordsRepr::List(list) => KeywordDictionary::new(list),
            KeywordsRepr::Map(map) => KeywordDictionary::new(map.into_keys()),
        };

        Ok(Self {
            version: artifact.version,
            hash_function: artifact.hash_function.parse()?,
            dimension: artifact.dimension,
            number_threshold: artifact.number_threshold,
            keywords: Arc::new(keywords),
        })
    }

    /// Serialize the artifact as pretty JSON with sorted keywords.
    pub fn to_json(&self) -> FeatureResult<String> {
        let artifact = FeatureArtifact {
            version: self.version,
            hash_function: self.hash_function.to_string(),
            dimension: self.dimension,
            number_threshold: self.number_threshold,
            keywords: KeywordsRepr::List(self.keywords.to_sorted_vec()),
        };
        Ok(serde_json::to_string_pretty(&artifact)?)
    }

    /// Write the artifact to a file, creating parent directories.
    pub fn save(&self, path: &Path) -> FeatureResult<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| FeatureError::artifact_io(path, e))?;
        }
        fs::write(path, self.to_json()?).map_err(|e| FeatureError::artifact_io(path, e))?;
        tracing::info!(
            "{} keywords written into {}",
            self.keywords.len(),
            path.display()
        );
        Ok(())
    }

    /// Validate the artifact.
    ///
    /// Fatal problems are returned as errors. Non-fatal issues are returned
    /// as warning strings for the caller to log.
    pub fn validate(&self) -> FeatureResult<Vec<String>> {
        let mut warnings = Vec::new();

        if self.version != ARTIFACT_FORMAT_VERSION {
            return Err(FeatureError::UnsupportedArtifactVersion {
                found: self.version,
                supported: ARTIFACT_FORMAT_VERSION,
            });
        }

        validate_dimension(self.dimension)?;

        if self.keywords.is_empty() {
            return Err(FeatureError::EmptyDictionary);
        }

        for placeholder in PLACEHOLDERS {
            if !self.keywords.contains(placeholder) {
                warnings.push(format!(
                    "keyword dictionary does not contain the `{placeholder}` placeholder"
                ));
            }
        }

        if self.dimension < 256 {
            warnings.push(format!(
                "dimension {} is very small; expect many hash collisions",
                self.dimension
            ));
        }

        Ok(warnings)
    }
}

// ============================================================================
// PipelineConfig
// ============================================================================

/// Deployment settings for the vectorization pipeline.
///
/// # Example YAML
///
/// ```yaml
/// limits:
///   maxInputBytes: 1000000
///   maxLines: 100
/// parallel: true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineConfig {
    /// Caps applied to every input before tokenizing.
    #[serde(default)]
    pub limits: InputLimits,

    /// Vectorize batches on the rayon thread pool.
    #[serde(default = "default_true")]
    pub parallel: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            limits: InputLimits::default(),
            parallel: true,
        }
    }
}

impl PipelineConfig {
    /// Load from the default location (`~/.langsniff/config.yaml`).
    ///
    /// Missing files yield the default configuration.
    pub fn load_default() -> FeatureResult<Self> {
        match Self::default_path() {
            Some(path) => Self::from_path(&path),
            None => {
                tracing::debug!("Could not determine home directory, using default config");
                Ok(Self::default())
            }
        }
    }

    /// Load from a specific path.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::InvalidPipelineConfig`] if the file exists but
    /// cannot be parsed, or [`FeatureError::InvalidConfiguration`] if
    /// validation fails.
    pub fn from_path(path: &Path) -> FeatureResult<Self> {
        if !path.exists() {
            tracing::debug!(
                "Pipeline config not found at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            FeatureError::InvalidPipelineConfig(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| {
            FeatureError::InvalidPipelineConfig(format!(
                "Failed to parse {}: {}",
                path.display(),
                e
            ))
        })?;

        for warning in config.validate()? {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok(config)
    }

    /// Default config file path.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(LANGSNIFF_HOME_DIR).join(PIPELINE_CONFIG_FILENAME))
    }

    /// Validate settings.
    pub fn validate(&self) -> FeatureResult<Vec<String>> {
        let mut warnings = Vec::new();

        if self.limits.max_input_bytes == Some(0) {
            return Err(FeatureError::invalid_configuration(
                "limits.maxInputBytes=0",
                "Remove the limit or set it to a positive number of bytes",
            ));
        }
        if self.limits.max_lines == Some(0) {
            return Err(FeatureError::invalid_configuration(
                "limits.maxLines=0",
                "Remove the limit or set it to a positive number of lines",
            ));
        }
        if self.limits.max_input_bytes.is_none() {
            warnings.push(
                "limits.maxInputBytes is unset; very large inputs will be vectorized in full"
                    .to_string(),
            );
        }

        Ok(warnings)
    }
}
