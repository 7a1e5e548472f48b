//! CSV adapter built on the `csv` crate's incremental reader.

use dprof_model::{ProfileError, ProfileOptions, Result, SourceFormat};

use crate::coerce::coerce_text;
use crate::encoding::decode_source;
use crate::registry::{FormatAdapter, RawTable, has_extension};

pub struct CsvAdapter;

impl CsvAdapter {
    pub const EXTENSIONS: &'static [&'static str] = &[".csv"];
}

impl FormatAdapter for CsvAdapter {
    fn format(&self) -> SourceFormat {
        SourceFormat::Csv
    }

    fn supports(&self, file_name: &str) -> bool {
        has_extension(file_name, Self::EXTENSIONS)
    }

    fn parse(&self, input: &[u8], options: &ProfileOptions) -> Result<RawTable> {
        let content = decode_source(input, options.encoding.as_deref())?;
        let delimiter = options
            .delimiter
            .and_then(|c| u8::try_from(c).ok())
            .unwrap_or(b',');

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(content.as_bytes());

        let mut headers: Vec<String> = Vec::new();
        let mut records = Vec::new();
        for record in reader.records() {
            let record = record
                .map_err(|error| ProfileError::invalid_format("csv", error.to_string()))?;
            if headers.is_empty() {
                // Headers keep their original casing; lower-casing happens
                // later, during field-name normalization.
                headers = record
                    .iter()
                    .enumerate()
                    .map(|(index, cell)| header_or_fallback(cell, index))
                    .collect();
            } else {
                let row = record
                    .iter()
                    .enumerate()
                    .map(|(index, cell)| {
                        let header = headers.get(index).map_or("", String::as_str);
                        coerce_text(header, cell.trim())
                    })
                    .collect();
                records.push(row);
            }
        }

        if headers.is_empty() {
            return Err(ProfileError::EmptySource(
                "CSV source must contain at least one line".to_string(),
            ));
        }

        tracing::debug!(columns = headers.len(), rows = records.len(), "parsed CSV source");
        Ok(RawTable {
            format: SourceFormat::Csv,
            headers,
            records,
        })
    }
}

/// Trimmed header cell; blank cells fall back to `column{n}`.
fn header_or_fallback(cell: &str, index: usize) -> String {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        format!("column{}", index + 1)
    } else {
        trimmed.to_string()
    }
}
