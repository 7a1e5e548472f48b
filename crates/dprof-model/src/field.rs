//! Per-column metadata produced by field inference.

use serde::{Deserialize, Serialize};

use crate::CellValue;

/// Inferred semantic type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    #[serde(rename = "null")]
    Null,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "number.integer")]
    NumberInteger,
    #[serde(rename = "number.float")]
    NumberFloat,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "string.phone")]
    StringPhone,
    #[serde(rename = "string.email")]
    StringEmail,
    #[serde(rename = "string.long")]
    StringLong,
}

impl DataType {
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Null => "null",
            DataType::Boolean => "boolean",
            DataType::Date => "date",
            DataType::NumberInteger => "number.integer",
            DataType::NumberFloat => "number.float",
            DataType::String => "string",
            DataType::StringPhone => "string.phone",
            DataType::StringEmail => "string.email",
            DataType::StringLong => "string.long",
        }
    }
}

/// Coarse shape classification assigned when every sampled value agrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValuePattern {
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "alpha")]
    Alpha,
    #[serde(rename = "alphanumeric")]
    Alphanumeric,
    #[serde(rename = "alphanumeric+space")]
    AlphanumericSpace,
}

impl ValuePattern {
    pub fn as_str(self) -> &'static str {
        match self {
            ValuePattern::Numeric => "numeric",
            ValuePattern::Alpha => "alpha",
            ValuePattern::Alphanumeric => "alphanumeric",
            ValuePattern::AlphanumericSpace => "alphanumeric+space",
        }
    }
}

/// Metadata for one column, in header order. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMetadata {
    pub normalized_name: String,
    pub original_header: String,
    pub data_type: DataType,
    /// Maximum rendered length across the column (0 for an empty column).
    pub length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<ValuePattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_unique: Option<bool>,
    /// First few non-null values in row order.
    pub examples: Vec<CellValue>,
}
