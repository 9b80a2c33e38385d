//! # langsniff-core
//!
//! Feature-vectorization pipeline for programming language identification.
//!
//! This crate turns arbitrary source text into a fixed-dimension, unit-length
//! vector that a trained classifier consumes. The transformation is fully
//! deterministic: the same text, keyword dictionary and dimension always
//! produce bit-identical vectors, at training and at inference time.
//!
//! ## Pipeline
//!
//! 1. [`tokenizer`] – lexical tokens, one newline token per line
//! 2. [`keywords`] – immutable dictionary of tokens kept verbatim
//! 3. [`normalizer`] – `<number>` / `<variable>` abstraction
//! 4. [`ngram`] – unigrams, bigrams, trigrams
//! 5. [`hasher`] – SHA-1 feature hashing into `D` counters
//! 6. [`vector`] – L2 normalization
//!
//! ## Example
//!
//! ```ignore
//! use langsniff_core::{FeatureConfig, Vectorizer};
//!
//! let config = FeatureConfig::load_default()?;
//! let vectorizer = Vectorizer::new(&config)?;
//!
//! let vector = vectorizer.vectorize("for x in range(10):\n    print(x)");
//! assert_eq!(vector.dimension(), config.dimension);
//! ```

// Modules
pub mod batch;
pub mod config;
pub mod constants;
pub mod errors;
pub mod hasher;
pub mod keywords;
pub mod locator;
pub mod ngram;
pub mod normalizer;
pub mod pipeline;
pub mod source;
pub mod tokenizer;
pub mod vector;

// Re-exports for convenience
pub use config::{FeatureConfig, PipelineConfig};
pub use constants::{
    ARTIFACT_FORMAT_VERSION, DEFAULT_DIMENSION, DEFAULT_KEYWORD_COUNT, DEFAULT_MAX_INPUT_BYTES,
    DEFAULT_NUMBER_THRESHOLD, FEATURE_ARTIFACT_FILENAME, LANGSNIFF_DATA_DIR_ENV, NEWLINE_TOKEN,
    NUMBER_PLACEHOLDER, TRAINING_MAX_LINES, VARIABLE_PLACEHOLDER,
};
pub use errors::{FeatureError, FeatureResult};
pub use hasher::{FeatureHasher, HashFunction};
pub use keywords::{KeywordDictionary, KeywordStatistics};
pub use locator::ArtifactLocator;
pub use ngram::NGrams;
pub use normalizer::Normalizer;
pub use pipeline::Vectorizer;
pub use source::{decode_lossy, read_source_file, InputLimits};
pub use tokenizer::{Tokenizer, Tokens};
pub use vector::{CountVector, FeatureVector};
