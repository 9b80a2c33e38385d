//! Common constants used throughout langsniff-core.
//!
//! This module centralizes placeholder tokens, artifact names, and default
//! configuration values so that training and inference agree on them.

// ============================================================================
// Tokens
// ============================================================================

/// Token emitted at the end of every input line.
pub const NEWLINE_TOKEN: &str = "\n";

/// Placeholder substituted for long numeric literals.
pub const NUMBER_PLACEHOLDER: &str = "<number>";

/// Placeholder substituted for identifiers missing from the keyword dictionary.
pub const VARIABLE_PLACEHOLDER: &str = "<variable>";

/// Both placeholders, in the order they are appended to built dictionaries.
pub const PLACEHOLDERS: &[&str] = &[NUMBER_PLACEHOLDER, VARIABLE_PLACEHOLDER];

/// Separator used to join tokens into bigrams and trigrams.
pub const NGRAM_SEPARATOR: &str = " ";

// ============================================================================
// Versioned feature parameters
// ============================================================================

/// Default feature vector dimension.
pub const DEFAULT_DIMENSION: usize = 4096;

/// Default numeric literal threshold.
///
/// Numeric tokens longer than this many characters become [`NUMBER_PLACEHOLDER`].
pub const DEFAULT_NUMBER_THRESHOLD: usize = 2;

/// Current feature artifact format version.
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Default number of keywords kept by the dictionary builder.
pub const DEFAULT_KEYWORD_COUNT: usize = 10_000;

// ============================================================================
// Input limits
// ============================================================================

/// Default cap on input size, in bytes, before tokenizing.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1_000_000;

/// Number of leading lines per file used when preparing training data.
pub const TRAINING_MAX_LINES: usize = 100;

// ============================================================================
// Paths
// ============================================================================

/// Environment variable overriding the data directory.
pub const LANGSNIFF_DATA_DIR_ENV: &str = "LANGSNIFF_DATA_DIR";

/// Name of the per-user langsniff directory (`~/.langsniff`).
pub const LANGSNIFF_HOME_DIR: &str = ".langsniff";

/// Data subdirectory holding the feature artifact.
pub const DATA_SUBDIR: &str = "data";

/// File name of the feature artifact.
pub const FEATURE_ARTIFACT_FILENAME: &str = "features.json";

/// File name of the pipeline settings.
pub const PIPELINE_CONFIG_FILENAME: &str = "config.yaml";
