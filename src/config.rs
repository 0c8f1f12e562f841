//! Configuration types for the transcript parser.
//!
//! This module provides clean configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::TranscriptConfig;
//! use chatstats::parser::TranscriptParser;
//!
//! let config = TranscriptConfig::new().with_preamble_lines(0);
//! let parser = TranscriptParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Number of leading lines every export starts with (title and encryption notice).
pub const DEFAULT_PREAMBLE_LINES: usize = 2;

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatstats::config::TranscriptConfig;
///
/// let config = TranscriptConfig::new()
///     .with_preamble_lines(1)
///     .with_normalize_line_endings(false);
/// assert_eq!(config.preamble_lines, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptConfig {
    /// Lines skipped unconditionally at the top of the file (default: 2)
    pub preamble_lines: usize,

    /// Translate `\r\n` and lone `\r` to `\n` before splitting lines (default: true)
    pub normalize_line_endings: bool,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            preamble_lines: DEFAULT_PREAMBLE_LINES,
            normalize_line_endings: true,
        }
    }
}

impl TranscriptConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of preamble lines to skip.
    #[must_use]
    pub fn with_preamble_lines(mut self, lines: usize) -> Self {
        self.preamble_lines = lines;
        self
    }

    /// Enables or disables line ending normalization.
    #[must_use]
    pub fn with_normalize_line_endings(mut self, enabled: bool) -> Self {
        self.normalize_line_endings = enabled;
        self
    }
}
