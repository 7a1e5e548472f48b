//! The profile returned to the caller.

use serde::{Deserialize, Serialize};

use crate::FieldMetadata;

/// Version string recorded in every analysis result.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Source format tag as it appears in the output.
///
/// Fixed-width sources are a mode of the text adapter and report as `txt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceFormat {
    #[serde(rename = "csv")]
    Csv,
    #[serde(rename = "excel")]
    Spreadsheet,
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "xml")]
    Xml,
    #[serde(rename = "txt")]
    Text,
}

impl SourceFormat {
    pub fn tag(self) -> &'static str {
        match self {
            SourceFormat::Csv => "csv",
            SourceFormat::Spreadsheet => "excel",
            SourceFormat::Json => "json",
            SourceFormat::Xml => "xml",
            SourceFormat::Text => "txt",
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Run metadata attached to each result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunMetadata {
    /// Caller-supplied label, `"Unknown"` when absent.
    pub file_name: String,
    /// RFC 3339 timestamp of the call.
    pub date_analyzed: String,
    pub version: String,
}

/// Complete profile of one source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub source_type: SourceFormat,
    /// Row count of the full source, before any sampling.
    pub total_records: usize,
    /// One entry per column, in header order.
    pub fields: Vec<FieldMetadata>,
    pub metadata: RunMetadata,
}
