//! Human-readable field summary rendered after a successful analysis.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use dprof_model::{AnalysisResult, FieldMetadata};

/// Print the summary to stdout.
pub fn print_summary(result: &AnalysisResult) {
    println!("{}", render_summary(result));
}

/// Print the summary to stderr, keeping stdout free for the JSON profile.
pub fn eprint_summary(result: &AnalysisResult) {
    eprintln!("{}", render_summary(result));
}

pub fn render_summary(result: &AnalysisResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("Source: {}\n", result.source_type));
    out.push_str(&format!("Records: {}\n", result.total_records));
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Type"),
        header_cell("Length"),
        header_cell("Pattern"),
        header_cell("Unique"),
        header_cell("Examples"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for field in &result.fields {
        table.add_row(vec![
            Cell::new(&field.normalized_name),
            Cell::new(field.data_type.as_str()),
            Cell::new(field.length),
            Cell::new(field.pattern.map_or("-", |p| p.as_str())),
            Cell::new(match field.is_unique {
                Some(true) => "yes",
                Some(false) => "no",
                None => "-",
            }),
            Cell::new(examples_cell(field)),
        ]);
    }
    out.push_str(&table.to_string());
    out
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn examples_cell(field: &FieldMetadata) -> String {
    field
        .examples
        .iter()
        .filter_map(|value| value.render())
        .collect::<Vec<_>>()
        .join(", ")
}
