//! Wiring: adapter output -> validation -> sampling -> inference ->
//! assembled profile.

use chrono::{SecondsFormat, Utc};

use dprof_ingest::{AdapterRegistry, RawTable};
use dprof_model::{
    AnalysisResult, ProfileOptions, Result, RunMetadata, SourceFormat, VERSION,
};

use crate::analysis::infer_fields;

/// Profile an already-normalized table.
///
/// Validation covers the full matrix; sampling then limits which rows
/// reach inference, while the reported record count stays the full row
/// count.
pub fn profile_table(table: &RawTable, options: &ProfileOptions) -> Result<AnalysisResult> {
    dprof_validate::validate_all(options, &table.headers, &table.records)?;

    let total_records = table.records.len();
    let sampled: &[Vec<dprof_model::CellValue>] = match options.sample_size {
        Some(size) => &table.records[..size.min(total_records)],
        None => &table.records,
    };
    tracing::info!(
        format = %table.format,
        total_records,
        analyzed = sampled.len(),
        columns = table.headers.len(),
        "profiling table"
    );

    let fields = infer_fields(&table.headers, sampled, options);
    Ok(assemble(table.format, total_records, fields, options))
}

/// Select an adapter by file name, parse the raw bytes, and profile.
pub fn profile_bytes(
    registry: &AdapterRegistry,
    file_name: &str,
    input: &[u8],
    options: &ProfileOptions,
) -> Result<AnalysisResult> {
    let table = registry.parse(file_name, input, options)?;
    profile_table(&table, options)
}

fn assemble(
    format: SourceFormat,
    total_records: usize,
    fields: Vec<dprof_model::FieldMetadata>,
    options: &ProfileOptions,
) -> AnalysisResult {
    AnalysisResult {
        source_type: format,
        total_records,
        fields,
        metadata: RunMetadata {
            file_name: options
                .file_name
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            date_analyzed: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            version: VERSION.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dprof_model::{CellValue, DataType, ProfileError};

    fn table(headers: &[&str], rows: Vec<Vec<CellValue>>) -> RawTable {
        RawTable {
            format: SourceFormat::Text,
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            records: rows,
        }
    }

    #[test]
    fn total_records_ignores_sampling() {
        let rows = (0..50)
            .map(|i| vec![CellValue::Number(f64::from(i))])
            .collect();
        let options = ProfileOptions::default().with_sample_size(10);
        let result = profile_table(&table(&["n"], rows), &options).unwrap();
        assert_eq!(result.total_records, 50);
        // Length is computed over the sampled rows only: 0..9 are all one
        // digit wide.
        assert_eq!(result.fields[0].length, 1);
    }

    #[test]
    fn sample_larger_than_source_is_harmless() {
        let rows = vec![vec![CellValue::Bool(true)]];
        let options = ProfileOptions::default().with_sample_size(100);
        let result = profile_table(&table(&["flag"], rows), &options).unwrap();
        assert_eq!(result.total_records, 1);
        assert_eq!(result.fields[0].data_type, DataType::Boolean);
    }

    #[test]
    fn validation_failures_abort_the_call() {
        let rows = vec![vec![CellValue::Null]];
        let result = profile_table(&table(&["a", "A"], rows), &ProfileOptions::default());
        assert!(matches!(result, Err(ProfileError::Validation(_))));
    }

    #[test]
    fn metadata_defaults_file_name_to_unknown() {
        let rows = vec![vec![CellValue::Null]];
        let result = profile_table(&table(&["a"], rows), &ProfileOptions::default()).unwrap();
        assert_eq!(result.metadata.file_name, "Unknown");
        assert_eq!(result.metadata.version, VERSION);
        assert!(!result.metadata.date_analyzed.is_empty());
    }
}
