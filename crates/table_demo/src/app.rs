//! Loads the inputs, drives a [`Table`] through the requested events and
//! renders the result.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use collapsible_table::prelude::*;
use crossterm::terminal;
use serde::de::DeserializeOwned;

use crate::cli::Cli;
use crate::render::render;

/// Terminal columns assumed when the terminal size cannot be read.
const FALLBACK_COLUMNS: u16 = 80;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn load_options(path: Option<&Path>) -> Result<TableOptions> {
    let Some(path) = path else {
        return Ok(TableOptions::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    TableOptions::from_toml_str(&text).with_context(|| format!("invalid options in {}", path.display()))
}

/// Viewport width in pixels: the explicit flag, or the terminal width.
fn viewport_width(cli: &Cli) -> u32 {
    cli.width.unwrap_or_else(|| {
        let columns = match terminal::size() {
            Ok((columns, _)) => columns,
            Err(err) => {
                tracing::debug!(error = %err, "terminal size unavailable");
                FALLBACK_COLUMNS
            }
        };
        u32::from(columns).saturating_mul(cli.cell_px)
    })
}

/// Builds the table described by `cli` and returns its rendering.
///
/// # Errors
///
/// Returns an error when an input file cannot be read or parsed, or when the
/// columns or options are invalid.
pub fn run(cli: &Cli) -> Result<String> {
    let columns: Vec<ColumnDef> = read_json(&cli.columns)?;
    let rows: Vec<Record> = match &cli.rows {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };
    let options = load_options(cli.options.as_deref())?;

    let mut table = Table::new(columns, rows, options).context("failed to build table")?;
    tracing::info!(rows = table.state().rows().len(), "table loaded");

    for accessor in &cli.sort {
        table.update(TableEvent::Sort(accessor.clone()));
    }
    if let Some(query) = &cli.search {
        table.update(TableEvent::Search(query.clone()));
    }
    if let Some(page) = cli.page {
        table.update(TableEvent::GoToPage(PageRequest::Select(page)));
    }

    let width = viewport_width(cli);
    let size = match cli.container_width {
        Some(container) => ViewportSize::with_container(width, container),
        None => ViewportSize::window(width),
    };
    table.update(TableEvent::Resize(size));

    for &position in &cli.expand {
        match table.view().rows.get(position) {
            Some(row) => {
                table.update(TableEvent::ExpandRow(row.index));
            }
            None => tracing::warn!(position, "no such row on this page"),
        }
    }

    let view = table.view();
    if cli.json {
        let mut json = serde_json::to_string_pretty(&view).context("failed to encode view")?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(render(&view))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const COLUMNS: &str = r#"[
        { "accessor": "name", "label": "Name", "priorityLevel": 1 },
        { "accessor": "age", "label": "Age", "priorityLevel": 2 }
    ]"#;

    fn file(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    fn rows(n: usize) -> String {
        let items: Vec<String> = (1..=n)
            .map(|i| format!(r#"{{ "name": "N{i:02}", "age": {i} }}"#))
            .collect();
        format!("[{}]", items.join(","))
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("table-demo").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn renders_requested_page_sorted() {
        let columns = file(COLUMNS);
        let rows = file(&rows(25));
        let cli = cli(&[
            "-c",
            columns.path().to_str().unwrap(),
            "-r",
            rows.path().to_str().unwrap(),
            "-w",
            "1000",
            "--sort",
            "age",
            "--sort",
            "age",
            "-p",
            "3",
        ]);
        let out = run(&cli).unwrap();
        assert!(out.contains("Page 3 of 3 · sorted by age (descending)"));
        assert!(out.contains("N05"));
        assert!(!out.contains("N06"));
    }

    #[test]
    fn narrow_width_folds_and_expands() {
        let columns = file(COLUMNS);
        let rows = file(&rows(3));
        let cli = cli(&[
            "-c",
            columns.path().to_str().unwrap(),
            "-r",
            rows.path().to_str().unwrap(),
            "-w",
            "150",
            "--expand",
            "1",
        ]);
        let out = run(&cli).unwrap();
        assert!(out.contains("▾ N02"));
        assert!(out.contains("Age: 2"));
        assert!(out.contains("hidden: Age"));
    }

    #[test]
    fn options_file_is_applied() {
        let columns = file(COLUMNS);
        let rows = file(&rows(10));
        let options = file("row_size = 4\ncollapsible = false\n");
        let cli = cli(&[
            "-c",
            columns.path().to_str().unwrap(),
            "-r",
            rows.path().to_str().unwrap(),
            "-o",
            options.path().to_str().unwrap(),
            "-w",
            "10",
            "--json",
        ]);
        let json: serde_json::Value = serde_json::from_str(&run(&cli).unwrap()).unwrap();
        assert_eq!(json["pagination"]["total_pages"], 3);
        assert_eq!(json["headers"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn reports_bad_columns() {
        let columns = file(r#"[{ "accessor": "a", "priorityLevel": 1 }]"#);
        let cli = cli(&["-c", columns.path().to_str().unwrap(), "-w", "100"]);
        let err = run(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("missing required field `label`"));
    }

    #[test]
    fn reports_missing_file() {
        let cli = cli(&["-c", "/nonexistent/columns.json", "-w", "100"]);
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
