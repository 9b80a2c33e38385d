//! Batch vectorization on the rayon thread pool.
//!
//! Output order always matches input order, whatever the completion order
//! of the workers.

use std::path::Path;

use rayon::prelude::*;

use crate::errors::FeatureResult;
use crate::pipeline::Vectorizer;
use crate::source::read_source_file;
use crate::vector::FeatureVector;

impl Vectorizer {
    /// Vectorize many texts; vector `i` belongs to text `i`.
    pub fn vectorize_batch<S>(&self, texts: &[S]) -> Vec<FeatureVector>
    where
        S: AsRef<str> + Sync,
    {
        tracing::debug!(
            "Vectorizing {} texts (parallel: {})",
            texts.len(),
            self.settings().parallel
        );

        if self.settings().parallel {
            texts
                .par_iter()
                .map(|text| self.vectorize(text.as_ref()))
                .collect()
        } else {
            texts
                .iter()
                .map(|text| self.vectorize(text.as_ref()))
                .collect()
        }
    }

    /// Read and vectorize many files.
    ///
    /// A file that cannot be read yields an error in its slot without
    /// aborting the rest of the batch.
    pub fn vectorize_files<P>(&self, paths: &[P]) -> Vec<FeatureResult<FeatureVector>>
    where
        P: AsRef<Path> + Sync,
    {
        let results: Vec<FeatureResult<FeatureVector>> = if self.settings().parallel {
            paths
                .par_iter()
                .map(|path| self.vectorize_file(path.as_ref()))
                .collect()
        } else {
            paths
                .iter()
                .map(|path| self.vectorize_file(path.as_ref()))
                .collect()
        };

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            tracing::warn!("{} of {} files could not be read", failed, paths.len());
        }
        tracing::debug!("Vectorized {} files", paths.len() - failed);

        results
    }

    /// Read and vectorize a single file.
    pub fn vectorize_file(&self, path: &Path) -> FeatureResult<FeatureVector> {
        let text = read_source_file(path, &self.settings().limits)?;
        Ok(self.vectorize(&text))
    }
}
