//! Command-line interface for `table-demo`.
//!
//! # Examples
//!
//! ```bash
//! # Render the first page at the current terminal width
//! table-demo --columns columns.json --rows rows.json
//!
//! # Pretend the viewport is 320px wide, sort by age twice, open row 0
//! table-demo --columns columns.json --rows rows.json --width 320 \
//!     --sort age --sort age --expand 0
//! ```

use std::path::PathBuf;

use clap::Parser;

/// Render one page of a collapsible table in the terminal.
#[derive(Parser, Debug, Clone)]
#[command(name = "table-demo", author, version, about)]
pub struct Cli {
    /// JSON file holding the column definitions
    #[arg(long, short = 'c', env = "TABLE_DEMO_COLUMNS")]
    pub columns: PathBuf,

    /// JSON file holding the rows, as an array of objects
    #[arg(long, short = 'r', env = "TABLE_DEMO_ROWS")]
    pub rows: Option<PathBuf>,

    /// TOML file holding table options
    #[arg(long, short = 'o', env = "TABLE_DEMO_OPTIONS")]
    pub options: Option<PathBuf>,

    /// Viewport width in pixels
    ///
    /// Defaults to the terminal width multiplied by --cell-px
    #[arg(long, short = 'w')]
    pub width: Option<u32>,

    /// Width of the table's container in pixels
    ///
    /// Only used when the options enable `use_container_width`
    #[arg(long)]
    pub container_width: Option<u32>,

    /// Pixels per terminal column when deriving the width from the terminal
    #[arg(long, default_value_t = 8)]
    pub cell_px: u32,

    /// Search query to apply
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Click a column header; repeat to cycle the direction
    #[arg(long)]
    pub sort: Vec<String>,

    /// Page to show
    #[arg(long, short = 'p')]
    pub page: Option<usize>,

    /// Open the detail panel of the n-th row on the page
    #[arg(long)]
    pub expand: Vec<usize>,

    /// Print the render projection as JSON instead of a text table
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Log filter directive for the verbosity flag.
    #[must_use]
    pub const fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_requires_columns() {
        assert!(Cli::try_parse_from(["table-demo"]).is_err());
    }

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::try_parse_from(["table-demo", "--columns", "c.json"]).unwrap();
        assert_eq!(cli.columns, PathBuf::from("c.json"));
        assert!(cli.rows.is_none());
        assert!(cli.width.is_none());
        assert_eq!(cli.cell_px, 8);
        assert!(cli.sort.is_empty());
        assert!(!cli.json);
        assert_eq!(cli.log_directive(), "warn");
    }

    #[test]
    fn cli_collects_repeated_flags() {
        let cli = Cli::try_parse_from([
            "table-demo",
            "-c",
            "c.json",
            "--sort",
            "age",
            "--sort",
            "age",
            "--expand",
            "0",
            "--expand",
            "2",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.sort, vec!["age", "age"]);
        assert_eq!(cli.expand, vec![0, 2]);
        assert_eq!(cli.log_directive(), "debug");
    }

    #[test]
    fn cli_parses_viewport() {
        let cli = Cli::try_parse_from([
            "table-demo",
            "-c",
            "c.json",
            "-w",
            "320",
            "--container-width",
            "200",
            "-p",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.width, Some(320));
        assert_eq!(cli.container_width, Some(200));
        assert_eq!(cli.page, Some(3));
    }
}
