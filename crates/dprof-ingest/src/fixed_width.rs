//! Fixed-width text parsing: constant character spans per column.

use dprof_model::CellValue;

use crate::coerce::coerce_text;

/// Parse non-empty lines into a header row and record matrix using the
/// given column widths.
///
/// The first line is treated as a header row iff the substring spanned by
/// the total width contains at least one letter and the trimmed line does
/// not start with a digit; otherwise `column{1..n}` names are synthesized
/// and every line is data.
pub fn parse_lines(lines: &[&str], widths: &[usize]) -> (Vec<String>, Vec<Vec<CellValue>>) {
    let total_width: usize = widths.iter().sum();

    let first_line = lines[0].trim_end();
    let head: String = first_line.chars().take(total_width).collect();
    let has_headers = head.chars().any(char::is_alphabetic)
        && !first_line
            .trim_start()
            .starts_with(|c: char| c.is_ascii_digit());

    let headers: Vec<String> = if has_headers {
        spans(first_line, widths)
            .enumerate()
            .map(|(index, span)| {
                let name = span.trim().to_lowercase();
                if name.is_empty() {
                    format!("column{}", index + 1)
                } else {
                    name
                }
            })
            .collect()
    } else {
        (1..=widths.len()).map(|n| format!("column{n}")).collect()
    };

    let first_data_line = usize::from(has_headers);
    let records = lines[first_data_line..]
        .iter()
        .map(|line| {
            let line = line.trim_end();
            spans(line, widths)
                .enumerate()
                .map(|(index, span)| coerce_text(&headers[index], span.trim()))
                .collect()
        })
        .collect();

    (headers, records)
}

/// Successive character spans of `line`, one per width. Spans beyond the
/// end of the line are empty.
fn spans<'a>(line: &'a str, widths: &'a [usize]) -> impl Iterator<Item = String> + 'a {
    let chars: Vec<char> = line.chars().collect();
    let mut position = 0usize;
    widths.iter().map(move |&width| {
        let start = position.min(chars.len());
        let end = (position + width).min(chars.len());
        position += width;
        chars[start..end].iter().collect()
    })
}
