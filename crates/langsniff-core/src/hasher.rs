//! Feature hashing (the hashing trick).
//!
//! Every feature string is digested, a fixed-width prefix of the digest is
//! read as an unsigned integer, and that integer modulo the dimension selects
//! the counter to increment. Distinct features may share a counter; memory is
//! bounded by the dimension, whatever the input size.
//!
//! The hash function is part of the versioned feature artifact. A classifier
//! trained with one `(hash function, dimension)` pair is meaningless with any
//! other.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

use crate::errors::{FeatureError, FeatureResult};
use crate::vector::CountVector;

// ============================================================================
// HashFunction
// ============================================================================

/// Pinned hash functions for feature hashing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashFunction {
    /// SHA-1, first four digest bytes read as a big-endian `u32`.
    #[default]
    #[serde(rename = "sha1-32")]
    Sha1Prefix32,
}

impl HashFunction {
    /// Stable identifier stored in the feature artifact.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha1Prefix32 => "sha1-32",
        }
    }

    /// Hash raw bytes to an unsigned integer.
    pub fn hash(&self, bytes: &[u8]) -> u64 {
        match self {
            Self::Sha1Prefix32 => {
                let digest = Sha1::digest(bytes);
                u64::from(u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]))
            }
        }
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashFunction {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha1-32" => Ok(Self::Sha1Prefix32),
            other => Err(FeatureError::HashFunctionMismatch {
                expected: Self::Sha1Prefix32.to_string(),
                found: other.to_string(),
            }),
        }
    }
}

// ============================================================================
// FeatureHasher
// ============================================================================

/// Folds feature strings into a fixed-dimension count vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureHasher {
    function: HashFunction,
    dimension: usize,
}

impl FeatureHasher {
    /// Create a hasher.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::InvalidConfiguration`] unless `dimension` is a
    /// power of two of at least 2.
    pub fn new(function: HashFunction, dimension: usize) -> FeatureResult<Self> {
        validate_dimension(dimension)?;
        Ok(Self {
            function,
            dimension,
        })
    }

    /// The hash function in use.
    pub fn function(&self) -> HashFunction {
        self.function
    }

    /// Output dimension.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Counter index of a single feature.
    #[inline]
    pub fn index(&self, feature: &str) -> usize {
        (self.function.hash(feature.as_bytes()) % self.dimension as u64) as usize
    }

    /// Count every feature into a new vector.
    pub fn hash<'a, I>(&self, features: I) -> CountVector
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts = CountVector::zeros(self.dimension);
        for feature in features {
            counts.increment(self.index(feature));
        }
        counts
    }
}

/// Check that a dimension is usable for feature hashing.
pub fn validate_dimension(dimension: usize) -> FeatureResult<()> {
    if dimension < 2 || !dimension.is_power_of_two() {
        return Err(FeatureError::invalid_configuration(
            format!("dimension={dimension}"),
            "The feature dimension must be a power of two of at least 2 (e.g. 4096)",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha1_prefix_known_value() {
        // SHA-1("abc") = a9993e36 4706816a ba3e2571 7850c26c 9cd0d89d
        assert_eq!(HashFunction::Sha1Prefix32.hash(b"abc"), 0xa999_3e36);
        // SHA-1("") = da39a3ee ...
        assert_eq!(HashFunction::Sha1Prefix32.hash(b""), 0xda39_a3ee);
    }

    #[test]
    fn test_index_within_dimension() {
        let hasher = FeatureHasher::new(HashFunction::Sha1Prefix32, 16).unwrap();
        for feature in ["a", "b c", "for <variable> in", "\n"] {
            assert!(hasher.index(feature) < 16);
        }
        assert_eq!(hasher.index("abc"), 0xa999_3e36 % 16);
    }

    #[test]
    fn test_hash_counts_occurrences() {
        let hasher = FeatureHasher::new(HashFunction::Sha1Prefix32, 1024).unwrap();
        let counts = hasher.hash(["x", "x", "y"]);
        assert_eq!(counts.dimension(), 1024);
        assert_eq!(counts.total(), 3);
        assert!(counts.as_slice()[hasher.index("x")] >= 2);
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        for dimension in [0, 1, 3, 100, 4095] {
            assert!(FeatureHasher::new(HashFunction::Sha1Prefix32, dimension).is_err());
        }
        assert!(FeatureHasher::new(HashFunction::Sha1Prefix32, 2).is_ok());
    }

    #[test]
    fn test_smaller_dimension_folds_larger() {
        let large = FeatureHasher::new(HashFunction::Sha1Prefix32, 4096).unwrap();
        let small = FeatureHasher::new(HashFunction::Sha1Prefix32, 256).unwrap();
        for feature in ["int", "( <variable> )", "def <variable> (", "\n \n"] {
            assert_eq!(small.index(feature), large.index(feature) % 256);
        }
    }

    #[test]
    fn test_hash_function_serde_name() {
        let json = serde_json::to_string(&HashFunction::Sha1Prefix32).unwrap();
        assert_eq!(json, "\"sha1-32\"");
        assert_eq!(
            "sha1-32".parse::<HashFunction>().unwrap(),
            HashFunction::Sha1Prefix32
        );
        assert!("md5".parse::<HashFunction>().is_err());
    }
}
