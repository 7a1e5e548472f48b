//! The adapter capability contract and the fixed-order registry.

use dprof_model::{CellValue, ProfileError, ProfileOptions, Result, SourceFormat};

use crate::{CsvAdapter, DelimitedTextAdapter, JsonAdapter, SpreadsheetAdapter, XmlAdapter};

/// Normalized output of one adapter call: a header row plus an aligned
/// record matrix. Transient, consumed by the profiling pipeline.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub format: SourceFormat,
    pub headers: Vec<String>,
    pub records: Vec<Vec<CellValue>>,
}

/// Capability contract consumed by the selection layer.
pub trait FormatAdapter {
    /// Source tag reported in the final profile.
    fn format(&self) -> SourceFormat;

    /// Case-insensitive extension predicate over the file name.
    fn supports(&self, file_name: &str) -> bool;

    /// Normalize the raw source into matrix form.
    fn parse(&self, input: &[u8], options: &ProfileOptions) -> Result<RawTable>;
}

/// Closed set of adapters, consulted in a fixed order.
pub struct AdapterRegistry {
    adapters: Vec<Box<dyn FormatAdapter + Send + Sync>>,
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self {
            adapters: vec![
                Box::new(CsvAdapter),
                Box::new(SpreadsheetAdapter),
                Box::new(JsonAdapter),
                Box::new(XmlAdapter),
                Box::new(DelimitedTextAdapter),
            ],
        }
    }
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// First adapter claiming the file name, if any.
    pub fn select(&self, file_name: &str) -> Option<&(dyn FormatAdapter + Send + Sync)> {
        self.adapters
            .iter()
            .find(|adapter| adapter.supports(file_name))
            .map(|adapter| &**adapter)
    }

    /// Select an adapter and parse, failing with `UnsupportedFormat` when
    /// nothing claims the file.
    pub fn parse(
        &self,
        file_name: &str,
        input: &[u8],
        options: &ProfileOptions,
    ) -> Result<RawTable> {
        let adapter = self
            .select(file_name)
            .ok_or_else(|| ProfileError::UnsupportedFormat(file_name.to_string()))?;
        tracing::debug!(file = file_name, format = %adapter.format(), "adapter selected");
        adapter.parse(input, options)
    }

    /// Supported extensions per adapter, in registry order.
    pub fn supported_extensions(&self) -> Vec<(SourceFormat, &'static [&'static str])> {
        vec![
            (SourceFormat::Csv, CsvAdapter::EXTENSIONS),
            (SourceFormat::Spreadsheet, SpreadsheetAdapter::EXTENSIONS),
            (SourceFormat::Json, JsonAdapter::EXTENSIONS),
            (SourceFormat::Xml, XmlAdapter::EXTENSIONS),
            (SourceFormat::Text, DelimitedTextAdapter::EXTENSIONS),
        ]
    }
}

/// Case-insensitive check that `file_name` ends in one of `extensions`.
pub(crate) fn has_extension(file_name: &str, extensions: &[&str]) -> bool {
    let lowered = file_name.to_lowercase();
    extensions.iter().any(|ext| lowered.ends_with(ext))
}
