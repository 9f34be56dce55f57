//! Template rendering for the preview command using outstanding

use console::Style;
use outstanding::Theme;
use querylesslib::{CellValue, ColumnClass, DataAttributes};
use serde::Serialize;

/// Include template at compile time
pub const PREVIEW_TEMPLATE: &str = include_str!("../templates/preview.jinja");

/// One column of the preview, as shown in the header and attribute listing
#[derive(Debug, Serialize)]
pub struct PreviewColumn {
    /// Column name (logical column id)
    pub name: String,
    pub class: ColumnClass,
    pub attributes: DataAttributes,
}

/// Everything the CLI prints for a query
#[derive(Debug, Serialize)]
pub struct Preview {
    pub columns: Vec<PreviewColumn>,
    pub rows: Vec<Vec<CellValue>>,
}

/// Attribute listing line for one column
#[derive(Debug, Serialize)]
struct TemplateAttributes {
    name: String,
    /// Empty when the column has no attributes
    formatted: String,
}

/// Data context for the preview template
#[derive(Debug, Serialize)]
pub struct PreviewContext {
    /// Pre-padded header line
    header: String,
    /// Separator line (dashes)
    separator: String,
    /// Pre-padded data rows
    rows: Vec<String>,
    attributes: Vec<TemplateAttributes>,
    row_count: usize,
    empty: bool,
}

/// Column widths are capped so long placeholder text does not blow up the table.
const MAX_CELL_WIDTH: usize = 40;

/// Truncate a value to fit within max_len, adding ".." suffix if needed
fn truncate(value: &str, max_len: usize) -> String {
    if value.chars().count() > max_len {
        let kept: String = value.chars().take(max_len - 2).collect();
        format!("{}..", kept)
    } else {
        value.to_string()
    }
}

/// Short name for an attribute namespace (`urn:...:numeric` -> `numeric`).
fn namespace_label(namespace: &str) -> &str {
    namespace.rsplit([':', '/']).next().unwrap_or(namespace)
}

fn format_attributes(attributes: &DataAttributes) -> String {
    attributes
        .iter()
        .map(|(namespace, name, value)| format!("{}:{}={}", namespace_label(namespace), name, value))
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_right_aligned(class: ColumnClass) -> bool {
    matches!(class, ColumnClass::Boolean | ColumnClass::Float)
}

/// Create the theme with styles
pub fn create_theme() -> Theme {
    Theme::new()
        .add("header", Style::new().bold())
        .add("muted", Style::new().dim())
}

/// Build the template context: pre-padded table lines plus the attribute listing.
pub fn preview_context(preview: &Preview) -> PreviewContext {
    let headers: Vec<String> = preview
        .columns
        .iter()
        .map(|c| format!("{} ({})", c.name, c.class))
        .collect();

    let cells: Vec<Vec<String>> = preview
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|v| truncate(&v.to_string(), MAX_CELL_WIDTH))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<width$}", h, width = *w))
        .collect::<Vec<_>>()
        .join("  ");

    let separator_len = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);

    let rows = cells
        .iter()
        .map(|row| {
            row.iter()
                .zip(&widths)
                .zip(&preview.columns)
                .map(|((cell, w), column)| {
                    if is_right_aligned(column.class) {
                        format!("{:>width$}", cell, width = *w)
                    } else {
                        format!("{:<width$}", cell, width = *w)
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect();

    let attributes = preview
        .columns
        .iter()
        .map(|column| TemplateAttributes {
            name: column.name.clone(),
            formatted: format_attributes(&column.attributes),
        })
        .collect();

    PreviewContext {
        header: header.trim_end().to_string(),
        separator: "-".repeat(separator_len),
        rows,
        attributes,
        row_count: preview.rows.len(),
        empty: preview.columns.is_empty(),
    }
}
