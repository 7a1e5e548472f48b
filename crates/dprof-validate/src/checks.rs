//! The individual validation checks.

use std::collections::BTreeSet;

use dprof_model::{CellValue, ProfileOptions, SUPPORTED_ENCODINGS, ValidationIssue};

/// Check option values that have a constrained domain.
pub fn validate_options(options: &ProfileOptions) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if let Some(size) = options.sample_size
        && size == 0
    {
        issues.push(ValidationIssue::new(
            "sampleSize",
            "sample size must be greater than 0",
        ));
    }

    if let Some(encoding) = &options.encoding {
        let lowered = encoding.to_lowercase();
        if !SUPPORTED_ENCODINGS.contains(&lowered.as_str()) {
            issues.push(ValidationIssue::new(
                "encoding",
                format!(
                    "invalid encoding; supported encodings: {}",
                    SUPPORTED_ENCODINGS.join(", ")
                ),
            ));
        }
    }

    issues
}

/// Check the header row: non-empty, no case-folded duplicates, no blanks.
pub fn validate_headers(headers: &[String]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if headers.is_empty() {
        issues.push(ValidationIssue::new(
            "headers",
            "source must contain at least one header",
        ));
    }

    let lowered: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();
    let mut duplicates: BTreeSet<&str> = BTreeSet::new();
    for (index, header) in lowered.iter().enumerate() {
        if lowered[..index].contains(header) {
            duplicates.insert(header.as_str());
        }
    }
    if !duplicates.is_empty() {
        let names: Vec<&str> = duplicates.into_iter().collect();
        issues.push(ValidationIssue::new(
            "headers",
            format!("duplicate headers found: {}", names.join(", ")),
        ));
    }

    for (index, header) in headers.iter().enumerate() {
        if header.trim().is_empty() {
            issues.push(ValidationIssue::new(
                format!("header[{index}]"),
                "empty or whitespace-only header found",
            ));
        }
    }

    issues
}

/// Check the record matrix: non-empty and rectangular.
pub fn validate_records(records: &[Vec<CellValue>]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if records.is_empty() {
        issues.push(ValidationIssue::new(
            "records",
            "source must contain at least one record",
        ));
        return issues;
    }

    let expected = records[0].len();
    for (index, record) in records.iter().enumerate() {
        if record.len() != expected {
            issues.push(ValidationIssue::new(
                format!("record[{index}]"),
                format!("record has {} fields, expected {expected}", record.len()),
            ));
        }
    }

    issues
}
