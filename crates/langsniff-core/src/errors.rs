//! Error types for langsniff-core.
//!
//! Vectorization itself never fails: malformed text is decoded lossily and
//! empty text yields the zero vector. Errors come from loading or validating
//! configuration, which is fatal at startup, and from reading source files.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for langsniff-core operations.
pub type FeatureResult<T> = Result<T, FeatureError>;

/// Errors that can occur while loading configuration or reading sources.
#[derive(Debug, Error)]
pub enum FeatureError {
    // ========================================================================
    // Artifact discovery and loading
    // ========================================================================
    /// No feature artifact found in any search location.
    #[error("{}", format_artifact_not_found(.searched))]
    ArtifactNotFound { searched: Vec<PathBuf> },

    /// Failed to read the feature artifact.
    #[error("Feature artifact I/O error at `{}`: {message}", .path.display())]
    ArtifactIo { path: PathBuf, message: String },

    /// Failed to parse the feature artifact.
    #[error("Feature artifact parse error at `{}`: {message}", .path.display())]
    ArtifactParse { path: PathBuf, message: String },

    /// The artifact was written by an unknown format version.
    #[error("Unsupported feature artifact version {found} (supported: {supported}).")]
    UnsupportedArtifactVersion { found: u32, supported: u32 },

    /// The artifact pins a hash function this build does not provide.
    #[error("Hash function mismatch: artifact uses `{found}`, expected `{expected}`. The classifier must be retrained for a different hash function.")]
    HashFunctionMismatch { expected: String, found: String },

    /// The keyword dictionary has no entries.
    #[error("Keyword dictionary is empty. Every identifier would be abstracted; refusing to vectorize.")]
    EmptyDictionary,

    /// The keyword builder was given no documents.
    #[error("No documents provided to build the keyword dictionary.")]
    EmptyCorpus,

    // ========================================================================
    // Configuration
    // ========================================================================
    /// A configuration value is invalid.
    #[error("Invalid configuration: {message}. {hint}")]
    InvalidConfiguration {
        /// Description of the invalid configuration.
        message: String,
        /// Actionable hint on how to fix it.
        hint: String,
    },

    /// Pipeline settings file could not be read or parsed.
    #[error("Pipeline config invalid: {0}")]
    InvalidPipelineConfig(String),

    // ========================================================================
    // Sources
    // ========================================================================
    /// Failed to read a source file.
    #[error("Failed to read source `{}`: {message}", .path.display())]
    SourceIo { path: PathBuf, message: String },

    // ========================================================================
    // Wrapped errors
    // ========================================================================
    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn format_artifact_not_found(searched: &[PathBuf]) -> String {
    let list = searched
        .iter()
        .enumerate()
        .map(|(i, p)| format!("  {}. {}", i + 1, p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Feature artifact not found.\n\n\
        Searched these locations:\n\
        {list}\n\n\
        The artifact ships with the trained classifier. To fix:\n\
        1. Set $LANGSNIFF_DATA_DIR to the directory holding features.json, OR\n\
        2. Copy features.json to ~/.langsniff/data/, OR\n\
        3. Ensure data/features.json exists next to the binary."
    )
}

impl FeatureError {
    /// Create an invalid configuration error.
    pub fn invalid_configuration(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an artifact I/O error.
    pub fn artifact_io(path: &Path, error: impl std::fmt::Display) -> Self {
        Self::ArtifactIo {
            path: path.to_path_buf(),
            message: error.to_string(),
        }
    }

    /// Create an artifact parse error.
    pub fn artifact_parse(path: &Path, error: impl std::fmt::Display) -> Self {
        Self::ArtifactParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        }
    }

    /// Create a source I/O error.
    pub fn source_io(path: &Path, error: impl std::fmt::Display) -> Self {
        Self::SourceIo {
            path: path.to_path_buf(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_not_found_lists_locations() {
        let err = FeatureError::ArtifactNotFound {
            searched: vec![PathBuf::from("/a/data"), PathBuf::from("/b/data")],
        };
        let msg = err.to_string();
        assert!(msg.contains("1. /a/data"));
        assert!(msg.contains("2. /b/data"));
        assert!(msg.contains("LANGSNIFF_DATA_DIR"));
    }

    #[test]
    fn test_invalid_configuration_message() {
        let err = FeatureError::invalid_configuration("dimension=100", "Use a power of two");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: dimension=100. Use a power of two"
        );
    }
}
