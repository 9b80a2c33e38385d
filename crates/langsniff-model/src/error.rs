//! Error types for langsniff-model.

use std::path::{Path, PathBuf};

use langsniff_core::FeatureError;
use thiserror::Error;

/// Result type alias for langsniff-model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while guessing languages.
#[derive(Debug, Error)]
pub enum ModelError {
    // ========================================================================
    // Catalog errors
    // ========================================================================
    /// The language catalog could not be read.
    #[error("Failed to read language catalog {path}: {message}")]
    CatalogIo { path: PathBuf, message: String },

    /// The language catalog is malformed.
    #[error("{}", format_catalog_parse(.path, .message))]
    CatalogParse {
        path: Option<PathBuf>,
        message: String,
    },

    /// A classifier label has no language in the catalog.
    #[error("Unknown class label '{label}'.\n\nThe classifier and the language catalog were not built together.")]
    UnknownLabel { label: String },

    // ========================================================================
    // Classifier errors
    // ========================================================================
    /// The classifier returned a different number of probabilities than labels.
    #[error("Classifier returned {found} probabilities for {expected} labels")]
    ClassCountMismatch { expected: usize, found: usize },

    /// The classifier failed.
    #[error("Classifier failed: {message}")]
    Classifier { message: String },

    // ========================================================================
    // Feature errors
    // ========================================================================
    #[error(transparent)]
    Feature(#[from] FeatureError),
}

fn format_catalog_parse(path: &Option<PathBuf>, message: &str) -> String {
    match path {
        Some(path) => format!(
            "Invalid language catalog {}: {message}\n\n\
            Expected a JSON object mapping each language name to its file extensions,\n\
            e.g. {{\"Python\": [\"py\", \"pyw\"]}}.",
            path.display()
        ),
        None => format!("Invalid language catalog: {message}"),
    }
}

// ============================================================================
// Error constructors
// ============================================================================

impl ModelError {
    /// Create a catalog I/O error.
    pub fn catalog_io(path: &Path, error: impl std::fmt::Display) -> Self {
        Self::CatalogIo {
            path: path.to_path_buf(),
            message: error.to_string(),
        }
    }

    /// Create a catalog parse error.
    pub fn catalog_parse(path: Option<&Path>, message: impl Into<String>) -> Self {
        Self::CatalogParse {
            path: path.map(Path::to_path_buf),
            message: message.into(),
        }
    }

    /// Create a classifier error.
    pub fn classifier(message: impl Into<String>) -> Self {
        Self::Classifier {
            message: message.into(),
        }
    }
}
