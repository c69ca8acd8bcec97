//! Plain-text rendering of a [`TableView`].

use std::fmt::Write as _;

use collapsible_table::view::{RowView, TableView};
use unicode_width::UnicodeWidthStr;

const GAP: &str = "  ";

/// Pads `text` with spaces to `width` terminal cells.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

fn marker(row: &RowView) -> &'static str {
    match (row.is_expandable(), row.expanded) {
        (false, _) => "  ",
        (true, false) => "▸ ",
        (true, true) => "▾ ",
    }
}

/// Renders the header, the page rows with their open detail panels, and a
/// footer with sort, search and paging information.
#[must_use]
pub fn render(view: &TableView) -> String {
    let titles: Vec<String> = view.headers.iter().map(|h| h.text()).collect();
    let widths: Vec<usize> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            view.rows
                .iter()
                .map(|row| row.cells.get(i).map_or(0, |c| c.to_string().width()))
                .chain(std::iter::once(title.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header: Vec<String> = titles.iter().zip(&widths).map(|(t, &w)| pad(t, w)).collect();
    let _ = writeln!(out, "  {}", header.join(GAP).trim_end());
    let rule: usize = widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);
    let _ = writeln!(out, "  {}", "─".repeat(rule));

    if view.rows.is_empty() {
        let _ = writeln!(out, "  (no rows)");
    }

    for row in &view.rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| pad(&cell.to_string(), w))
            .collect();
        let _ = writeln!(out, "{}{}", marker(row), cells.join(GAP).trim_end());

        if row.expanded {
            let label_width = row.details.iter().map(|d| d.label.width()).max().unwrap_or(0);
            for detail in &row.details {
                let _ = writeln!(out, "      {}: {}", pad(&detail.label, label_width), detail.value);
            }
        }
    }

    let _ = writeln!(out);
    let pagination = &view.pagination.pagination;
    let _ = write!(
        out,
        "Page {} of {}",
        pagination.current_page, pagination.total_pages
    );
    if let Some(column) = &view.sort.column {
        let _ = write!(out, " · sorted by {column} ({})", view.sort.direction);
    }
    if !view.search_string.is_empty() {
        let _ = write!(out, " · search {:?}", view.search_string);
    }
    if !view.hidden_columns.is_empty() {
        let hidden: Vec<&str> = view.hidden_columns.iter().map(|c| c.label.as_str()).collect();
        let _ = write!(out, " · hidden: {}", hidden.join(", "));
    }
    out.push('\n');
    out
}
