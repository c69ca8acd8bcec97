#![forbid(unsafe_code)]

//! # Table Demo
//!
//! Renders one page of a collapsible table in the terminal. Columns and rows
//! come from JSON files, options from an optional TOML file; command-line
//! flags replay sort clicks, a search, a page change and row expansion.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p table_demo -- --columns columns.json --rows rows.json -w 320
//! ```

mod app;
mod cli;
mod render;

use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let output = app::run(&cli)?;
    print!("{output}");
    Ok(())
}
