//! Sort and page a JSON dataset through a `DataTable`.
//!
//! Usage:
//!
//! ```text
//! datatable-demo <rows.json> [--sort FIELD] [--desc] [--page N] [--rows N] [--total N]
//! ```
//!
//! `rows.json` holds an array of objects. The rows of the requested page are
//! printed as JSON lines; state changes are logged to `datatable-demo.log`.

use std::fs::File;
use std::path::{Path, PathBuf};

use clap::Parser;
use datatable::prelude::*;
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid rows file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error(transparent)]
    Table(#[from] TableError),
}

#[derive(Debug, Parser)]
#[command(name = "datatable-demo", about = "Sort and page a JSON dataset")]
struct Args {
    /// JSON file holding an array of objects.
    path: PathBuf,

    /// Field to sort by.
    #[arg(long = "sort", value_name = "FIELD")]
    sort_by: Option<String>,

    /// Sort descending instead of ascending.
    #[arg(long = "desc", requires = "sort_by")]
    descending: bool,

    /// 1-based page to print.
    #[arg(long, value_name = "N")]
    page: Option<usize>,

    /// Rows per page.
    #[arg(long = "rows", value_name = "N")]
    rows_on_page: Option<usize>,

    /// Declared total row count. Defaults to the number of rows loaded.
    #[arg(long, value_name = "N")]
    total: Option<usize>,
}

fn load_rows(path: &Path) -> Result<Vec<Record>, DemoError> {
    let file = File::open(path).map_err(|source| DemoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_reader(file)?)
}

fn run() -> Result<(), DemoError> {
    let args = Args::parse();

    let log_file = File::create("datatable-demo.log").map_err(|source| DemoError::Io {
        path: PathBuf::from("datatable-demo.log"),
        source,
    })?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let rows = load_rows(&args.path)?;
    let total = args.total.unwrap_or(rows.len());
    info!("Loaded {} rows from {}", rows.len(), args.path.display());

    let config = TableConfig::default();
    let config = match args.rows_on_page {
        Some(rows_on_page) => config.with_rows_on_page(rows_on_page),
        None => config,
    };
    config.validate()?;

    let table = DataTable::<Record>::with_config(config);
    let pager = Paginator::new(&table);
    table.on_inputs_changed(InputChanges::new().data(rows).amount_of_rows(total));

    if let Some(field) = args.sort_by {
        let header = Sorter::new(&table, field);
        header.sort();
        if args.descending {
            header.sort();
        }
    }
    if let Some(page) = args.page {
        pager.set_page(page);
    }
    table.refresh();

    let data = table.data();
    let range = pager.row_range();
    let end = range.end.min(data.len());
    let start = range.start.min(end);
    for record in &data[start..end] {
        println!("{}", serde_json::to_string(record)?);
    }
    eprintln!(
        "page {} of {} ({} rows per page, {} total)",
        pager.active_page(),
        pager.last_page(),
        pager.rows_on_page(),
        pager.data_length()
    );
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
