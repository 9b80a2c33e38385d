//! Source text decoding and input limits.
//!
//! Input bytes are decoded as UTF-8; invalid sequences become U+FFFD instead
//! of failing. Pathologically large inputs are truncated before tokenizing.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_INPUT_BYTES, TRAINING_MAX_LINES};
use crate::errors::{FeatureError, FeatureResult};

/// Caps applied to an input before it is tokenized.
///
/// These are deployment parameters; they are not part of the versioned
/// feature artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputLimits {
    /// Maximum number of bytes kept. `None` keeps everything.
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: Option<usize>,

    /// Maximum number of lines kept. `None` keeps everything.
    #[serde(default)]
    pub max_lines: Option<usize>,
}

fn default_max_input_bytes() -> Option<usize> {
    Some(DEFAULT_MAX_INPUT_BYTES)
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_input_bytes: default_max_input_bytes(),
            max_lines: None,
        }
    }
}

impl InputLimits {
    /// No limits at all.
    pub fn unlimited() -> Self {
        Self {
            max_input_bytes: None,
            max_lines: None,
        }
    }

    /// Limits used when preparing training data: only the leading
    /// [`TRAINING_MAX_LINES`] lines of each file.
    pub fn training() -> Self {
        Self::default().with_max_lines(TRAINING_MAX_LINES)
    }

    /// Set the line limit.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = Some(max_lines);
        self
    }

    /// Set the byte limit.
    pub fn with_max_input_bytes(mut self, max_input_bytes: usize) -> Self {
        self.max_input_bytes = Some(max_input_bytes);
        self
    }

    /// Truncate `text` to these limits.
    ///
    /// The byte cut lands on a char boundary at or before the limit; the line
    /// cut keeps the first `max_lines` lines with their terminators. A
    /// non-empty text always keeps at least its first char and first line.
    pub fn apply<'a>(&self, text: &'a str) -> &'a str {
        let mut text = text;

        if let Some(max_bytes) = self.max_input_bytes {
            if text.len() > max_bytes {
                let mut end = max_bytes;
                while !text.is_char_boundary(end) {
                    end -= 1;
                }
                if end == 0 {
                    end = text.chars().next().map_or(0, char::len_utf8);
                }
                tracing::debug!("Truncating input from {} to {} bytes", text.len(), end);
                text = &text[..end];
            }
        }

        if let Some(max_lines) = self.max_lines {
            if let Some((index, _)) = text.match_indices('\n').nth(max_lines.max(1) - 1) {
                text = &text[..=index];
            }
        }

        text
    }
}

/// Decode bytes as UTF-8, replacing invalid sequences with U+FFFD.
pub fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

/// Read a source file as text, applying `limits`.
///
/// # Errors
///
/// Returns [`FeatureError::SourceIo`] if the file cannot be read. Undecodable
/// content is never an error.
pub fn read_source_file(path: &Path, limits: &InputLimits) -> FeatureResult<String> {
    let bytes = fs::read(path).map_err(|e| FeatureError::source_io(path, e))?;
    let text = decode_lossy(&bytes);
    Ok(limits.apply(&text).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_decode_lossy_replaces_invalid_bytes() {
        let text = decode_lossy(b"ab\xffcd");
        assert_eq!(text, "ab\u{FFFD}cd");
    }

    #[test]
    fn test_decode_lossy_borrows_valid_utf8() {
        assert!(matches!(decode_lossy(b"fn main() {}"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_byte_limit_respects_char_boundary() {
        let limits = InputLimits::unlimited().with_max_input_bytes(2);
        // 'é' is two bytes: "aé" would need 3.
        assert_eq!(limits.apply("aé"), "a");
        assert_eq!(limits.apply("ab"), "ab");
    }

    #[test]
    fn test_byte_limit_keeps_first_char() {
        let limits = InputLimits::unlimited().with_max_input_bytes(1);
        assert_eq!(limits.apply("é = 1"), "é");
        assert_eq!(limits.apply("x = 1"), "x");

        let zero = InputLimits::unlimited().with_max_input_bytes(0);
        assert_eq!(zero.apply("é"), "é");
        assert_eq!(zero.apply(""), "");
    }

    #[test]
    fn test_line_limit() {
        let limits = InputLimits::unlimited().with_max_lines(2);
        assert_eq!(limits.apply("a\nb\nc\nd"), "a\nb\n");
        assert_eq!(limits.apply("a\nb"), "a\nb");

        // Zero is rejected by validation; apply still keeps the first line.
        let zero = InputLimits::unlimited().with_max_lines(0);
        assert_eq!(zero.apply("a\nb"), "a\n");
    }

    #[test]
    fn test_training_limits() {
        let limits = InputLimits::training();
        assert_eq!(limits.max_lines, Some(TRAINING_MAX_LINES));
        assert_eq!(limits.max_input_bytes, Some(DEFAULT_MAX_INPUT_BYTES));

        let text = "x\n".repeat(TRAINING_MAX_LINES + 20);
        assert_eq!(limits.apply(&text).lines().count(), TRAINING_MAX_LINES);
    }

    #[test]
    fn test_default_limits() {
        let limits = InputLimits::default();
        assert_eq!(limits.max_input_bytes, Some(DEFAULT_MAX_INPUT_BYTES));
        assert_eq!(limits.max_lines, None);
        assert_eq!(limits.apply("short"), "short");
    }

    #[test]
    fn test_read_source_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("binary.bin");
        fs::write(&path, b"x = 1\n\xfe\xff\ny = 2\n").unwrap();

        let text = read_source_file(&path, &InputLimits::unlimited().with_max_lines(2)).unwrap();
        assert_eq!(text, "x = 1\n\u{FFFD}\u{FFFD}\n");
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_source_file(Path::new("/nonexistent/file.py"), &InputLimits::default());
        assert!(matches!(result, Err(FeatureError::SourceIo { .. })));
    }
}
