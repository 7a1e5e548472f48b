//! Caller-supplied options for a profiling call.

use serde::{Deserialize, Serialize};

/// Encoding labels accepted for the `encoding` option (case-insensitive).
pub const SUPPORTED_ENCODINGS: &[&str] = &[
    "utf8", "utf-8", "ascii", "utf16le", "ucs2", "base64", "latin1", "binary", "hex",
];

/// Options controlling parsing and inference for a single call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileOptions {
    /// Detect coarse value patterns in string columns.
    pub detect_patterns: bool,
    /// Report per-column uniqueness.
    pub check_uniqueness: bool,
    /// Limit inference to the first N rows. The reported record count
    /// always reflects the full source.
    pub sample_size: Option<usize>,
    /// Source byte encoding; one of [`SUPPORTED_ENCODINGS`].
    pub encoding: Option<String>,
    /// Explicit delimiter for delimited text; overrides detection.
    pub delimiter: Option<char>,
    /// Column widths for fixed-width text; enables the fixed-width path.
    pub fixed_widths: Option<Vec<usize>>,
    /// Run delimiter detection on the first line when no explicit
    /// delimiter is given.
    pub detect_delimiter: bool,
    /// File name label used only in output metadata.
    pub file_name: Option<String>,
}

impl ProfileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patterns(mut self, enable: bool) -> Self {
        self.detect_patterns = enable;
        self
    }

    pub fn with_uniqueness(mut self, enable: bool) -> Self {
        self.check_uniqueness = enable;
        self
    }

    pub fn with_sample_size(mut self, size: usize) -> Self {
        self.sample_size = Some(size);
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    pub fn with_fixed_widths(mut self, widths: Vec<usize>) -> Self {
        self.fixed_widths = Some(widths);
        self
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }
}
