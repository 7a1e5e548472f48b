//! End-to-end profiling over raw sources, through the adapter registry.

use dprof_core::{profile_bytes, profile_table};
use dprof_ingest::{AdapterRegistry, RawTable};
use dprof_model::{CellValue, DataType, ProfileError, ProfileOptions, SourceFormat, ValuePattern};

fn registry() -> AdapterRegistry {
    AdapterRegistry::new()
}

#[test]
fn json_array_profiles_with_typed_fields() {
    let payload = br#"[
        {"name": "Alice", "age": 30, "email": "alice@example.com"},
        {"name": "Bob", "age": 25, "email": "bob@example.com"}
    ]"#;
    let result = profile_bytes(
        &registry(),
        "people.json",
        payload,
        &ProfileOptions::default(),
    )
    .unwrap();

    assert_eq!(result.source_type, SourceFormat::Json);
    assert_eq!(result.total_records, 2);
    assert_eq!(result.fields.len(), 3);
    let age = &result.fields[1];
    assert_eq!(age.normalized_name, "age");
    assert_eq!(age.data_type, DataType::NumberInteger);
    let email = &result.fields[2];
    assert_eq!(email.data_type, DataType::StringEmail);
    assert_eq!(email.length, "alice@example.com".len());
}

#[test]
fn detected_pipe_delimiter_yields_three_headers() {
    let options = ProfileOptions {
        detect_delimiter: true,
        ..Default::default()
    };
    let result = profile_bytes(
        &registry(),
        "people.txt",
        b"name|age|email\nalice|30|a@b.com\nbob|41|b@c.com\n",
        &options,
    )
    .unwrap();
    assert_eq!(result.fields.len(), 3);
    assert_eq!(result.total_records, 2);
    let names: Vec<&str> = result
        .fields
        .iter()
        .map(|f| f.original_header.as_str())
        .collect();
    assert_eq!(names, vec!["name", "age", "email"]);
}

#[test]
fn empty_sources_fail_with_descriptive_messages() {
    let json = profile_bytes(&registry(), "x.json", b"[]", &ProfileOptions::default())
        .unwrap_err();
    assert!(json.to_string().contains("at least one record"));

    let text = profile_bytes(&registry(), "x.txt", b"", &ProfileOptions::default()).unwrap_err();
    assert!(text.to_string().contains("at least one line"));
}

#[test]
fn fixed_width_headerless_synthesizes_columns() {
    let options = ProfileOptions::default().with_fixed_widths(vec![4, 10, 4, 14]);
    let result = profile_bytes(
        &registry(),
        "ledger.txt",
        b"1001Smith     ab  2024-01-15    \n1002Brown     cd  2024-02-20    \n",
        &options,
    )
    .unwrap();
    let names: Vec<&str> = result
        .fields
        .iter()
        .map(|f| f.original_header.as_str())
        .collect();
    assert_eq!(names, vec!["column1", "column2", "column3", "column4"]);
    assert_eq!(result.total_records, 2);
}

#[test]
fn uniqueness_and_patterns_are_opt_in() {
    let table = RawTable {
        format: SourceFormat::Csv,
        headers: vec!["code".to_string()],
        records: vec![
            vec![CellValue::Text("A1".to_string())],
            vec![CellValue::Text("B2".to_string())],
            vec![CellValue::Text("A1".to_string())],
        ],
    };

    let plain = profile_table(&table, &ProfileOptions::default()).unwrap();
    assert_eq!(plain.fields[0].is_unique, None);
    assert_eq!(plain.fields[0].pattern, None);

    let options = ProfileOptions::default().with_patterns(true).with_uniqueness(true);
    let full = profile_table(&table, &options).unwrap();
    assert_eq!(full.fields[0].is_unique, Some(false));
    assert_eq!(full.fields[0].pattern, Some(ValuePattern::Alphanumeric));
}

#[test]
fn duplicate_headers_surface_as_one_aggregated_error() {
    let table = RawTable {
        format: SourceFormat::Csv,
        headers: vec!["name".to_string(), "age".to_string(), "Name".to_string()],
        records: vec![vec![
            CellValue::Text("x".to_string()),
            CellValue::Number(1.0),
            CellValue::Text("y".to_string()),
        ]],
    };
    let error = profile_table(&table, &ProfileOptions::default()).unwrap_err();
    let ProfileError::Validation(issues) = error else {
        panic!("expected validation error");
    };
    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.contains("duplicate"));
}

#[test]
fn profile_serializes_to_the_wire_shape() {
    let result = profile_bytes(
        &registry(),
        "people.json",
        br#"[{"user_id": 7, "name": "Ana"}]"#,
        &ProfileOptions::default().with_file_name("people.json"),
    )
    .unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["sourceType"], "json");
    assert_eq!(json["metadata"]["fileName"], "people.json");
    assert_eq!(json["fields"][0]["dataType"], "string");
    assert_eq!(json["fields"][0]["normalizedName"], "user_id");
}
