//! Cell values as they appear in a record matrix.

use serde::{Deserialize, Serialize};

/// A single cell in a record matrix.
///
/// Serialized untagged so that numbers stay numbers and strings stay
/// strings on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// String rendering of the value, `None` for null.
    ///
    /// Integral numbers render without a decimal point (`2.0` -> `"2"`),
    /// matching how they are displayed downstream.
    pub fn render(&self) -> Option<String> {
        match self {
            CellValue::Null => None,
            CellValue::Bool(b) => Some(b.to_string()),
            CellValue::Number(n) => Some(render_number(*n)),
            CellValue::Text(s) => Some(s.clone()),
        }
    }

    /// Rendering used for uniqueness counting: null maps to a sentinel so
    /// that two nulls compare equal.
    pub fn render_for_uniqueness(&self) -> String {
        self.render().unwrap_or_else(|| "_NULL_".to_string())
    }

    /// Rendered length; null counts as zero.
    pub fn rendered_len(&self) -> usize {
        self.render().map_or(0, |s| s.chars().count())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

fn render_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_render_without_decimal_point() {
        assert_eq!(CellValue::Number(2.0).render().unwrap(), "2");
        assert_eq!(CellValue::Number(-7.0).render().unwrap(), "-7");
        assert_eq!(CellValue::Number(2.5).render().unwrap(), "2.5");
    }

    #[test]
    fn null_renders_as_none_but_has_uniqueness_sentinel() {
        assert_eq!(CellValue::Null.render(), None);
        assert_eq!(CellValue::Null.render_for_uniqueness(), "_NULL_");
        assert_eq!(CellValue::Null.rendered_len(), 0);
    }

    #[test]
    fn untagged_serde_keeps_scalar_types() {
        let row = vec![
            CellValue::Text("007".to_string()),
            CellValue::Number(42.0),
            CellValue::Bool(true),
            CellValue::Null,
        ];
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, "[\"007\",42.0,true,null]");
        let round: Vec<CellValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(round, row);
    }
}
