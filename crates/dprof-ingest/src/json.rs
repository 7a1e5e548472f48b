//! JSON adapter: an array of objects, or a single object treated as a
//! one-element array.

use serde_json::Value;

use dprof_model::{CellValue, ProfileError, ProfileOptions, Result, SourceFormat};

use crate::coerce::coerce_cell;
use crate::encoding::decode_source;
use crate::registry::{FormatAdapter, RawTable, has_extension};

pub struct JsonAdapter;

impl JsonAdapter {
    pub const EXTENSIONS: &'static [&'static str] = &[".json"];
}

impl FormatAdapter for JsonAdapter {
    fn format(&self) -> SourceFormat {
        SourceFormat::Json
    }

    fn supports(&self, file_name: &str) -> bool {
        has_extension(file_name, Self::EXTENSIONS)
    }

    fn parse(&self, input: &[u8], options: &ProfileOptions) -> Result<RawTable> {
        let content = decode_source(input, options.encoding.as_deref())?;
        let data: Value = serde_json::from_str(&content)
            .map_err(|error| ProfileError::invalid_format("json", error.to_string()))?;

        let records = match data {
            Value::Array(items) => items,
            other => vec![other],
        };
        if records.is_empty() {
            return Err(ProfileError::EmptySource(
                "JSON source must contain at least one record".to_string(),
            ));
        }

        // Header order follows the first record's key order.
        let headers: Vec<String> = match &records[0] {
            Value::Object(map) => map.keys().cloned().collect(),
            _ => Vec::new(),
        };

        let rows = records
            .iter()
            .map(|record| {
                headers
                    .iter()
                    .map(|header| {
                        let value = match record {
                            Value::Object(map) => map.get(header).map_or(CellValue::Null, to_cell),
                            _ => CellValue::Null,
                        };
                        coerce_cell(header, value)
                    })
                    .collect()
            })
            .collect();

        Ok(RawTable {
            format: SourceFormat::Json,
            headers,
            records: rows,
        })
    }
}

fn to_cell(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Null,
        Value::Bool(b) => CellValue::Bool(*b),
        Value::Number(n) => n.as_f64().map_or(CellValue::Null, CellValue::Number),
        Value::String(s) => CellValue::Text(s.clone()),
        nested => CellValue::Text(nested.to_string()),
    }
}
