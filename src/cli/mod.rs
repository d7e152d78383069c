//! Command-line interface
//!
//! `sqltab query` prints the result of a SQL statement against a SQLite
//! file; `sqltab view` prints a CSV, JSON Lines or Parquet file.

mod logging;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use logging::init_logging;

use crate::config::{TableConfig, DEFAULT_MAX_COLUMN_WIDTH};
use crate::error::{Error, Result};
use crate::source::RecordBatchSource;
use crate::table::{AsciiTable, TableAdapter};

/// sqltab - Query results as wrapped ASCII tables
#[derive(Debug, Parser)]
#[command(name = "sqltab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    #[allow(missing_docs)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a SQL query against a SQLite database and print the result
    #[cfg(feature = "sqlite")]
    Query {
        /// Path to the SQLite database file
        database: PathBuf,
        /// SQL statement to run
        sql: String,
        /// Maximum column width before wrapping
        #[arg(short, long, default_value_t = DEFAULT_MAX_COLUMN_WIDTH)]
        width: usize,
    },
    /// Print a CSV, JSON Lines or Parquet file as a table
    View {
        /// Path to the data file
        path: PathBuf,
        /// Maximum column width before wrapping
        #[arg(short, long, default_value_t = DEFAULT_MAX_COLUMN_WIDTH)]
        width: usize,
        /// Only show the first N rows
        #[arg(short = 'n', long)]
        rows: Option<usize>,
    },
}

/// Run a parsed command, writing the table to `out`
///
/// # Errors
///
/// Returns an error if the width is zero, the input cannot be read or
/// writing to `out` fails.
pub fn run<W: Write>(command: Commands, out: &mut W) -> Result<()> {
    let adapter = match command {
        #[cfg(feature = "sqlite")]
        Commands::Query {
            database,
            sql,
            width,
        } => cmd_query(&database, &sql, width)?,
        Commands::View { path, width, rows } => cmd_view(&path, width, rows)?,
    };

    AsciiTable::new()
        .print(&adapter, out)
        .map_err(Error::io_no_path)
}

#[cfg(feature = "sqlite")]
fn cmd_query(database: &std::path::Path, sql: &str, width: usize) -> Result<TableAdapter> {
    use rusqlite::OpenFlags;

    let config = TableConfig::new(width)?;
    let conn = rusqlite::Connection::open_with_flags(database, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .map_err(Error::data_access)?;
    TableAdapter::from_query(&conn, sql, &config)
}

fn cmd_view(path: &std::path::Path, width: usize, rows: Option<usize>) -> Result<TableAdapter> {
    let config = TableConfig::new(width)?;
    let mut source = RecordBatchSource::from_path(path)?;
    if let Some(limit) = rows {
        source = source.with_limit(limit);
    }
    TableAdapter::with_config(source, &config)
}
