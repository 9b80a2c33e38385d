//! Count vectors and unit-length feature vectors.

use serde::{Deserialize, Serialize};

// ============================================================================
// CountVector
// ============================================================================

/// Raw hashed feature counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountVector {
    counts: Vec<u32>,
}

impl CountVector {
    /// An all-zero vector.
    pub fn zeros(dimension: usize) -> Self {
        Self {
            counts: vec![0; dimension],
        }
    }

    /// Add one occurrence at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; indices come from the hasher,
    /// which always reduces them modulo the dimension.
    #[inline]
    pub fn increment(&mut self, index: usize) {
        self.counts[index] = self.counts[index].saturating_add(1);
    }

    /// Number of components.
    pub fn dimension(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Returns `true` if every count is zero.
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Non-zero entries as `(index, count)`.
    pub fn nonzero(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != 0)
            .map(|(i, &c)| (i, c))
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.counts
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.counts
            .iter()
            .map(|&c| {
                let c = f64::from(c);
                c * c
            })
            .sum::<f64>()
            .sqrt()
    }
}

// ============================================================================
// FeatureVector
// ============================================================================

/// Classifier input: a count vector rescaled to unit Euclidean length.
///
/// The zero vector stays zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector {
    values: Vec<f32>,
}

impl FeatureVector {
    /// An all-zero vector.
    pub fn zeros(dimension: usize) -> Self {
        Self {
            values: vec![0.0; dimension],
        }
    }

    /// L2-normalize raw counts.
    pub fn from_counts(counts: &CountVector) -> Self {
        let norm = counts.norm();
        if norm == 0.0 {
            return Self::zeros(counts.dimension());
        }

        let values = counts
            .as_slice()
            .iter()
            .map(|&c| (f64::from(c) / norm) as f32)
            .collect();
        Self { values }
    }

    /// Number of components.
    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f32 {
        self.values.iter().map(|v| v * v).sum::<f32>().sqrt()
    }

    /// Returns `true` if every component is zero.
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }

    /// Indices of non-zero components, ascending.
    pub fn nonzero_indices(&self) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0.0)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.values
    }
}

impl AsRef<[f32]> for FeatureVector {
    fn as_ref(&self) -> &[f32] {
        &self.values
    }
}

impl From<FeatureVector> for Vec<f32> {
    fn from(vector: FeatureVector) -> Self {
        vector.values
    }
}
