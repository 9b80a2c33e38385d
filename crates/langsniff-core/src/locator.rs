//! Feature artifact locator for runtime path resolution.
//!
//! The feature artifact (`features.json`) ships with the trained classifier.
//!
//! # Search Order
//!
//! 1. **Environment override**: `$LANGSNIFF_DATA_DIR`
//! 2. **User directory**: `~/.langsniff/data`
//! 3. **Binary-relative**: `{exe_dir}/data`

use std::env;
use std::path::PathBuf;

use crate::constants::{
    DATA_SUBDIR, FEATURE_ARTIFACT_FILENAME, LANGSNIFF_DATA_DIR_ENV, LANGSNIFF_HOME_DIR,
};
use crate::errors::{FeatureError, FeatureResult};

/// Locates the feature artifact using a defined search order.
#[derive(Debug, Clone, Default)]
pub struct ArtifactLocator {
    /// Fixed data directory, bypassing the search.
    data_dir: Option<PathBuf>,
}

impl ArtifactLocator {
    /// Create a locator that searches the default locations.
    pub fn new() -> Self {
        Self { data_dir: None }
    }

    /// Create a locator with a fixed data directory.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
        }
    }

    /// Candidate data directories, in search order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return vec![dir.clone()];
        }

        let mut candidates = Vec::new();
        if let Ok(env_path) = env::var(LANGSNIFF_DATA_DIR_ENV) {
            candidates.push(PathBuf::from(env_path));
        }
        if let Some(home) = dirs::home_dir() {
            candidates.push(home.join(LANGSNIFF_HOME_DIR).join(DATA_SUBDIR));
        }
        if let Ok(exe_path) = env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                candidates.push(exe_dir.join(DATA_SUBDIR));
            }
        }
        candidates
    }

    /// Resolve the path of the feature artifact.
    ///
    /// Returns the first candidate directory that contains `features.json`.
    pub fn artifact_path(&self) -> FeatureResult<PathBuf> {
        let candidates = self.candidates();
        for dir in &candidates {
            let path = dir.join(FEATURE_ARTIFACT_FILENAME);
            if path.is_file() {
                tracing::debug!("Found feature artifact at {}", path.display());
                return Ok(path);
            }
        }

        Err(FeatureError::ArtifactNotFound {
            searched: candidates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_fixed_dir_with_artifact() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(FEATURE_ARTIFACT_FILENAME), "{}").unwrap();

        let locator = ArtifactLocator::with_data_dir(temp.path());
        assert_eq!(
            locator.artifact_path().unwrap(),
            temp.path().join(FEATURE_ARTIFACT_FILENAME)
        );
    }

    #[test]
    fn test_fixed_dir_without_artifact() {
        let temp = TempDir::new().unwrap();
        let locator = ArtifactLocator::with_data_dir(temp.path());

        match locator.artifact_path().unwrap_err() {
            FeatureError::ArtifactNotFound { searched } => {
                assert_eq!(searched, vec![temp.path().to_path_buf()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
