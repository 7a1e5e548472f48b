pub mod cell;
pub mod error;
pub mod field;
pub mod options;
pub mod result;

pub use cell::CellValue;
pub use error::{ProfileError, Result, ValidationIssue};
pub use field::{DataType, FieldMetadata, ValuePattern};
pub use options::{ProfileOptions, SUPPORTED_ENCODINGS};
pub use result::{AnalysisResult, RunMetadata, SourceFormat, VERSION};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_serializes_camel_case() {
        let result = AnalysisResult {
            source_type: SourceFormat::Json,
            total_records: 2,
            fields: vec![FieldMetadata {
                normalized_name: "age".to_string(),
                original_header: "Age".to_string(),
                data_type: DataType::NumberInteger,
                length: 2,
                pattern: None,
                is_unique: Some(true),
                examples: vec![CellValue::Number(25.0), CellValue::Number(31.0)],
            }],
            metadata: RunMetadata {
                file_name: "people.json".to_string(),
                date_analyzed: "2026-01-01T00:00:00Z".to_string(),
                version: VERSION.to_string(),
            },
        };
        let json = serde_json::to_value(&result).expect("serialize result");
        assert_eq!(json["sourceType"], "json");
        assert_eq!(json["totalRecords"], 2);
        assert_eq!(json["fields"][0]["dataType"], "number.integer");
        assert_eq!(json["fields"][0]["examples"][0], 25.0);
        assert!(json["fields"][0].get("pattern").is_none());
        assert_eq!(json["metadata"]["fileName"], "people.json");
    }

    #[test]
    fn result_round_trips() {
        let result = AnalysisResult {
            source_type: SourceFormat::Csv,
            total_records: 1,
            fields: vec![],
            metadata: RunMetadata {
                file_name: "Unknown".to_string(),
                date_analyzed: "2026-01-01T00:00:00Z".to_string(),
                version: VERSION.to_string(),
            },
        };
        let json = serde_json::to_string(&result).expect("serialize");
        let round: AnalysisResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(round.total_records, 1);
        assert_eq!(round.source_type, SourceFormat::Csv);
    }
}
