//! The shared cell-coercion heuristic applied by every adapter.
//!
//! Ambiguous values are decided per column: id-like headers, leading-zero
//! numerics, and alphanumeric identifiers stay strings; plain numeric text
//! becomes a number; ISO-date-shaped text stays a string.

use std::sync::LazyLock;

use regex::Regex;

use dprof_model::CellValue;

static LEADING_ZERO: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^0\d+").unwrap());
static ALPHANUMERIC_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[a-zA-Z0-9]*$").unwrap());
static PLAIN_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?\d+(\.\d+)?$").unwrap());
static ISO_DATE_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap());

fn id_like_header(header: &str) -> bool {
    header.to_lowercase().contains("id")
}

/// Coerce a raw text cell using the column's header.
pub fn coerce_text(header: &str, value: &str) -> CellValue {
    if id_like_header(header) || LEADING_ZERO.is_match(value) || ALPHANUMERIC_ID.is_match(value) {
        return CellValue::Text(value.to_string());
    }
    if PLAIN_NUMBER.is_match(value)
        && let Ok(number) = value.parse::<f64>()
    {
        return CellValue::Number(number);
    }
    if ISO_DATE_PREFIX.is_match(value) {
        return CellValue::Text(value.to_string());
    }
    CellValue::Text(value.to_string())
}

/// Coerce an already-typed cell from a structured source.
///
/// Text cells go through [`coerce_text`]. Non-text scalars keep their type
/// unless the column header is id-like, in which case they are rendered to
/// a string.
pub fn coerce_cell(header: &str, value: CellValue) -> CellValue {
    match value {
        CellValue::Text(s) => coerce_text(header, &s),
        CellValue::Null => CellValue::Null,
        other => {
            if id_like_header(header) {
                match other.render() {
                    Some(rendered) => CellValue::Text(rendered),
                    None => other,
                }
            } else {
                other
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_headers_force_strings() {
        assert_eq!(
            coerce_text("user_id", "42"),
            CellValue::Text("42".to_string())
        );
        assert_eq!(
            coerce_cell("ID", CellValue::Number(42.0)),
            CellValue::Text("42".to_string())
        );
    }

    #[test]
    fn leading_zeros_stay_strings() {
        assert_eq!(coerce_text("code", "007"), CellValue::Text("007".to_string()));
    }

    #[test]
    fn alphanumeric_ids_stay_strings() {
        assert_eq!(
            coerce_text("ref", "123abc"),
            CellValue::Text("123abc".to_string())
        );
        // A bare non-negative integer matches the identifier shape too.
        assert_eq!(coerce_text("count", "42"), CellValue::Text("42".to_string()));
    }

    #[test]
    fn signed_and_decimal_text_becomes_numbers() {
        assert_eq!(coerce_text("delta", "-5"), CellValue::Number(-5.0));
        assert_eq!(coerce_text("price", "19.99"), CellValue::Number(19.99));
    }

    #[test]
    fn date_shaped_text_stays_text() {
        assert_eq!(
            coerce_text("joined", "2024-01-15"),
            CellValue::Text("2024-01-15".to_string())
        );
    }

    #[test]
    fn typed_scalars_pass_through_without_id_header() {
        assert_eq!(
            coerce_cell("age", CellValue::Number(25.0)),
            CellValue::Number(25.0)
        );
        assert_eq!(
            coerce_cell("active", CellValue::Bool(true)),
            CellValue::Bool(true)
        );
        assert_eq!(coerce_cell("note", CellValue::Null), CellValue::Null);
    }
}
