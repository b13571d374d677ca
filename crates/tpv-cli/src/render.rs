//! Terminal and JSON rendering of previews.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tpv_model::{DisplayValue, TablePreview};

/// Build a terminal table for a preview.
///
/// Columns whose cells are all numbers are right-aligned.
pub fn preview_table(preview: &TablePreview) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(preview.header.iter().map(|label| header_cell(label)));
    for row in &preview.rows {
        table.add_row(row.values().map(value_cell));
    }
    for index in numeric_columns(preview) {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table
}

/// Serialize a preview as pretty JSON.
pub fn preview_json(preview: &TablePreview) -> serde_json::Result<String> {
    serde_json::to_string_pretty(preview)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

/// Indexes of columns where every row holds a number.
fn numeric_columns(preview: &TablePreview) -> Vec<usize> {
    if preview.rows.is_empty() {
        return Vec::new();
    }
    (0..preview.column_count())
        .filter(|&index| {
            preview
                .rows
                .iter()
                .all(|row| row.values().nth(index).is_some_and(DisplayValue::is_number))
        })
        .collect()
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: &DisplayValue) -> Cell {
    match value {
        DisplayValue::Number(n) => Cell::new(n),
        DisplayValue::Text(s) if s.is_empty() => Cell::new("-").fg(Color::DarkGrey),
        DisplayValue::Text(s) => Cell::new(s),
    }
}
