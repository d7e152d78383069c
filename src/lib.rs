//! sqltab - Query Results as Wrapped ASCII Tables
//!
//! Adapts tabular query results (SQLite statements, Arrow record
//! batches, in-memory rows) into a header list and a matrix of display
//! cells. Multi-line and over-wide values are wrapped across
//! continuation rows, so a renderer can draw every row as one line of
//! fixed-width cells.
//!
//! # Design Principles
//!
//! 1. **One pass** - the result source is drained once at construction
//! 2. **Immutable output** - headers and rows never change afterwards
//! 3. **Newlines win** - embedded newlines are hard breaks, never re-wrapped
//! 4. **Exact numbers** - decimals are formatted from their text, not `f64`
//!
//! # Quick Start
//!
//! ```
//! use sqltab::{AsciiTable, Cell, MemorySource, TableAdapter, TableConfig};
//!
//! let source = MemorySource::new(["name", "age"])
//!     .with_row(vec![Cell::text("alice"), Cell::Integer(42)]);
//! let adapter = TableAdapter::with_config(source, &TableConfig::default()).unwrap();
//!
//! assert_eq!(adapter.headers(), ["NAME", "AGE"]);
//! println!("{}", AsciiTable::new().render(&adapter));
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::too_many_lines
    )
)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod cell;
/// CLI module for command-line interface
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod source;
pub mod table;

// Re-exports for convenience
pub use cell::Cell;
pub use config::TableConfig;
pub use error::{Error, Result};
#[cfg(feature = "sqlite")]
pub use source::SqliteSource;
pub use source::{MemorySource, RecordBatchSource, ResultSource};
pub use table::{AsciiTable, NumberLocale, TableAdapter, TableAware};
