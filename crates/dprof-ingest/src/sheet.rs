//! Spreadsheet adapter over `calamine`. The first worksheet supplies the
//! grid; its first row is the header row.

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use dprof_model::{CellValue, ProfileError, ProfileOptions, Result, SourceFormat};

use crate::coerce::coerce_cell;
use crate::registry::{FormatAdapter, RawTable, has_extension};

pub struct SpreadsheetAdapter;

impl SpreadsheetAdapter {
    pub const EXTENSIONS: &'static [&'static str] = &[".xlsx", ".xls", ".xlsm"];
}

impl FormatAdapter for SpreadsheetAdapter {
    fn format(&self) -> SourceFormat {
        SourceFormat::Spreadsheet
    }

    fn supports(&self, file_name: &str) -> bool {
        has_extension(file_name, Self::EXTENSIONS)
    }

    fn parse(&self, input: &[u8], _options: &ProfileOptions) -> Result<RawTable> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(input.to_vec()))
            .map_err(|error| ProfileError::invalid_format("spreadsheet", error.to_string()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ProfileError::invalid_format("spreadsheet", "workbook has no sheets"))?
            .map_err(|error| ProfileError::invalid_format("spreadsheet", error.to_string()))?;

        let mut rows = range.rows();
        let header_row = rows.next();
        let headers: Vec<String> = header_row
            .map(|row| {
                row.iter()
                    .map(|cell| to_cell(cell).render().unwrap_or_default())
                    .collect()
            })
            .unwrap_or_default();

        let records: Vec<Vec<CellValue>> = rows
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(index, cell)| {
                        let header = headers.get(index).map_or("", String::as_str);
                        coerce_cell(header, to_cell(cell))
                    })
                    .collect()
            })
            .collect();

        if headers.is_empty() || records.is_empty() {
            return Err(ProfileError::EmptySource(
                "spreadsheet must contain at least headers and one row of data".to_string(),
            ));
        }

        tracing::debug!(columns = headers.len(), rows = records.len(), "parsed spreadsheet");
        Ok(RawTable {
            format: SourceFormat::Spreadsheet,
            headers,
            records,
        })
    }
}

fn to_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        // Serial date numbers keep their numeric form.
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PEOPLE_XLSX: &[u8] = include_bytes!("../tests/fixtures/people.xlsx");
    const HEADERS_ONLY_XLSX: &[u8] = include_bytes!("../tests/fixtures/headers_only.xlsx");

    #[test]
    fn cell_mapping_keeps_scalar_types() {
        assert_eq!(to_cell(&Data::Empty), CellValue::Null);
        assert_eq!(
            to_cell(&Data::String("x".to_string())),
            CellValue::Text("x".to_string())
        );
        assert_eq!(to_cell(&Data::Int(3)), CellValue::Number(3.0));
        assert_eq!(to_cell(&Data::Float(2.5)), CellValue::Number(2.5));
        assert_eq!(to_cell(&Data::Bool(true)), CellValue::Bool(true));
    }

    #[test]
    fn minimal_workbook_parses_headers_and_rows() {
        let table = SpreadsheetAdapter
            .parse(PEOPLE_XLSX, &ProfileOptions::default())
            .unwrap();
        assert_eq!(table.format, SourceFormat::Spreadsheet);
        assert_eq!(table.headers, vec!["Name", "Age"]);
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0][0], CellValue::Text("Alice".to_string()));
        assert_eq!(table.records[0][1], CellValue::Number(30.0));
    }

    #[test]
    fn workbook_with_only_headers_is_an_empty_source() {
        let error = SpreadsheetAdapter
            .parse(HEADERS_ONLY_XLSX, &ProfileOptions::default())
            .unwrap_err();
        assert!(matches!(error, ProfileError::EmptySource(message)
            if message.contains("at least headers and one row")));
    }

    #[test]
    fn extension_predicate_covers_all_workbook_kinds() {
        let adapter = SpreadsheetAdapter;
        assert!(adapter.supports("report.xlsx"));
        assert!(adapter.supports("REPORT.XLS"));
        assert!(adapter.supports("macro.xlsm"));
        assert!(!adapter.supports("report.csv"));
    }

    #[test]
    fn garbage_bytes_are_invalid_format() {
        let error = SpreadsheetAdapter
            .parse(b"not a workbook", &ProfileOptions::default())
            .unwrap_err();
        assert!(matches!(
            error,
            ProfileError::InvalidFormat { format, .. } if format == "spreadsheet"
        ));
    }
}
