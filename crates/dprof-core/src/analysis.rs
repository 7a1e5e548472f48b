//! Column-sample heuristics: name normalization, type detection, pattern
//! classification, length, and uniqueness.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use dprof_model::{CellValue, DataType, FieldMetadata, ProfileOptions, ValuePattern};

static PLAIN_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?\d+(\.\d+)?$").unwrap());
static ISO_DATE_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap());
static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{3}-\d{3}-\d{4}$").unwrap());
static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static ALL_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());
static ALL_ALPHA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").unwrap());
static ALNUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());
static ALNUM_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\s]+$").unwrap());

/// Pattern-sample size: only the first few values vote.
const PATTERN_SAMPLE: usize = 10;
/// Number of example values carried into the metadata.
const EXAMPLE_COUNT: usize = 3;
/// Strings longer than this refine to `string.long`.
const LONG_STRING: usize = 100;

/// Lower-case the header, collapse runs of non-alphanumerics to a single
/// underscore, and strip edge underscores. Idempotent.
pub fn normalize_field_name(header: &str) -> String {
    let mut out = String::with_capacity(header.len());
    let mut pending_separator = false;
    for ch in header.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('_');
            }
            pending_separator = false;
            out.push(ch);
        } else {
            pending_separator = true;
        }
    }
    out
}

/// Classify a column by its first sampled value.
pub fn detect_data_type(first: Option<&CellValue>) -> DataType {
    let Some(value) = first else {
        return DataType::Null;
    };
    match value {
        CellValue::Null => DataType::Null,
        CellValue::Bool(_) => DataType::Boolean,
        CellValue::Number(_) => {
            let rendered = value.render().unwrap_or_default();
            if rendered.contains('.') {
                DataType::NumberFloat
            } else {
                DataType::NumberInteger
            }
        }
        CellValue::Text(s) => detect_text_type(s),
    }
}

fn detect_text_type(s: &str) -> DataType {
    if s.contains('-') && is_date_like(s) {
        return DataType::Date;
    }
    if PLAIN_NUMBER.is_match(s) {
        return if s.contains('.') {
            DataType::NumberFloat
        } else {
            DataType::NumberInteger
        };
    }
    if PHONE.is_match(s) {
        return DataType::StringPhone;
    }
    if EMAIL.is_match(s) {
        return DataType::StringEmail;
    }
    if s.chars().count() > LONG_STRING {
        return DataType::StringLong;
    }
    DataType::String
}

/// ISO-like date shape: a `YYYY-MM-DD` prefix that names a real calendar
/// date.
fn is_date_like(s: &str) -> bool {
    if !ISO_DATE_PREFIX.is_match(s) {
        return false;
    }
    let prefix: String = s.chars().take(10).collect();
    chrono::NaiveDate::parse_from_str(&prefix, "%Y-%m-%d").is_ok()
}

/// Coarse shape of the first few values; recorded only when every sampled
/// value agrees on a defined classification.
pub fn detect_pattern(values: &[&CellValue]) -> Option<ValuePattern> {
    if values.is_empty() {
        return None;
    }
    let mut agreed: Option<ValuePattern> = None;
    for (index, value) in values.iter().take(PATTERN_SAMPLE).enumerate() {
        let pattern = value.as_text().and_then(classify)?;
        if index == 0 {
            agreed = Some(pattern);
        } else if agreed != Some(pattern) {
            return None;
        }
    }
    agreed
}

fn classify(s: &str) -> Option<ValuePattern> {
    if ALL_DIGITS.is_match(s) {
        Some(ValuePattern::Numeric)
    } else if ALL_ALPHA.is_match(s) {
        Some(ValuePattern::Alpha)
    } else if ALNUM.is_match(s) {
        Some(ValuePattern::Alphanumeric)
    } else if ALNUM_SPACE.is_match(s) {
        Some(ValuePattern::AlphanumericSpace)
    } else {
        None
    }
}

/// Maximum rendered length across the column; 0 for an empty column.
pub fn field_length(values: &[&CellValue]) -> usize {
    values.iter().map(|v| v.rendered_len()).max().unwrap_or(0)
}

/// True iff every rendered value is distinct. Nulls all render to one
/// sentinel, so two nulls break uniqueness.
pub fn is_field_unique(values: &[&CellValue]) -> bool {
    let distinct: HashSet<String> = values.iter().map(|v| v.render_for_uniqueness()).collect();
    distinct.len() == values.len()
}

/// Derive one [`FieldMetadata`] per column, in header order, from the
/// (already sampled) record matrix.
pub fn infer_fields(
    headers: &[String],
    records: &[Vec<CellValue>],
    options: &ProfileOptions,
) -> Vec<FieldMetadata> {
    headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let values: Vec<&CellValue> = records
                .iter()
                .map(|record| record.get(index).unwrap_or(&CellValue::Null))
                .collect();

            let normalized_name = normalize_field_name(header);
            // Id-named columns are identifiers regardless of their values.
            let data_type = if normalized_name.contains("id") {
                DataType::String
            } else {
                detect_data_type(values.first().copied())
            };

            FieldMetadata {
                normalized_name,
                original_header: header.clone(),
                data_type,
                length: field_length(&values),
                pattern: options.detect_patterns.then(|| detect_pattern(&values)).flatten(),
                is_unique: options.check_uniqueness.then(|| is_field_unique(&values)),
                examples: values
                    .iter()
                    .filter(|v| !v.is_null())
                    .take(EXAMPLE_COUNT)
                    .map(|&v| v.clone())
                    .collect(),
            }
        })
        .collect()
}
