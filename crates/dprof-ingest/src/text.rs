//! Delimited-text adapter, with delimiter detection and a fixed-width
//! mode selected by `options.fixed_widths`.

use dprof_model::{CellValue, ProfileError, ProfileOptions, Result, SourceFormat};

use crate::coerce::coerce_text;
use crate::encoding::decode_source;
use crate::fixed_width;
use crate::registry::{FormatAdapter, RawTable, has_extension};

/// Delimiter candidates in priority order; ties resolve to the earliest.
const DELIMITER_CANDIDATES: [char; 4] = ['|', '\t', ';', ','];

pub struct DelimitedTextAdapter;

impl DelimitedTextAdapter {
    pub const EXTENSIONS: &'static [&'static str] = &[".txt"];
}

impl FormatAdapter for DelimitedTextAdapter {
    fn format(&self) -> SourceFormat {
        SourceFormat::Text
    }

    fn supports(&self, file_name: &str) -> bool {
        has_extension(file_name, Self::EXTENSIONS)
    }

    fn parse(&self, input: &[u8], options: &ProfileOptions) -> Result<RawTable> {
        let content = decode_source(input, options.encoding.as_deref())?;
        let lines: Vec<&str> = content
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .collect();

        if lines.is_empty() {
            return Err(ProfileError::EmptySource(
                "text source must contain at least one line".to_string(),
            ));
        }

        let (headers, records) = match &options.fixed_widths {
            Some(widths) => fixed_width::parse_lines(&lines, widths),
            None => {
                let delimiter = resolve_delimiter(lines[0], options);
                tracing::debug!(?delimiter, lines = lines.len(), "parsing delimited text");
                parse_delimited(&lines, delimiter)
            }
        };

        Ok(RawTable {
            format: SourceFormat::Text,
            headers,
            records,
        })
    }
}

fn resolve_delimiter(first_line: &str, options: &ProfileOptions) -> char {
    if let Some(delimiter) = options.delimiter {
        return delimiter;
    }
    if options.detect_delimiter {
        return detect_delimiter(first_line);
    }
    '\t'
}

/// Score each candidate by its occurrence count in the first line, keeping
/// only candidates whose split yields more than one field. Highest score
/// wins; all-zero scores fall back to tab.
pub fn detect_delimiter(first_line: &str) -> char {
    let line = first_line.trim_end_matches(['\r', '\n']);
    let mut best = '\t';
    let mut best_score = 0usize;
    for candidate in DELIMITER_CANDIDATES {
        let fields = line.split(candidate).count();
        let score = if fields > 1 { fields - 1 } else { 0 };
        if score > best_score {
            best_score = score;
            best = candidate;
        }
    }
    best
}

fn parse_delimited(lines: &[&str], delimiter: char) -> (Vec<String>, Vec<Vec<CellValue>>) {
    let headers: Vec<String> = lines[0]
        .split(delimiter)
        .enumerate()
        .map(|(index, cell)| normalize_header(cell, index))
        .collect();

    let records = lines[1..]
        .iter()
        .map(|line| {
            line.split(delimiter)
                .enumerate()
                .map(|(index, cell)| {
                    let header = headers.get(index).map_or("", String::as_str);
                    coerce_text(header, cell.trim())
                })
                .collect()
        })
        .collect();

    (headers, records)
}

/// Lower-cased, trimmed header cell; blank cells fall back to `column{n}`.
pub(crate) fn normalize_header(cell: &str, index: usize) -> String {
    let trimmed = cell.trim().to_lowercase();
    if trimmed.is_empty() {
        format!("column{}", index + 1)
    } else {
        trimmed
    }
}
