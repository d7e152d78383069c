//! Table Building Module
//!
//! Turns query results into rows an ASCII table renderer can draw one
//! line at a time.
//!
//! # Architecture
//!
//! - `wrap` - Word-boundary wrapping with hard newline breaks
//! - `expand_row` - One logical row to one or more display rows
//! - `TableAdapter` - Drains a result source into headers and display rows
//! - `TableAware` - What a renderer needs from a table
//! - `AsciiTable` - Border-drawing renderer
//!
//! # Example
//!
//! ```
//! use sqltab::table::{AsciiTable, TableAdapter};
//! use sqltab::{Cell, MemorySource, TableConfig};
//!
//! let source = MemorySource::new(["name", "bio"])
//!     .with_row(vec![Cell::text("alice"), Cell::text("hello world foo bar")]);
//! let adapter = TableAdapter::with_config(source, &TableConfig::new(11)?)?;
//!
//! let rendered = AsciiTable::new().render(&adapter);
//! assert!(rendered.contains("| alice | hello world |"));
//! assert!(rendered.contains("|       | foo bar     |"));
//! # Ok::<(), sqltab::Error>(())
//! ```

mod adapter;
mod aware;
mod expand;
mod number;
mod render;
mod wrap;

// Public exports
pub use adapter::TableAdapter;
pub use aware::TableAware;
pub use expand::{expand_row, needs_expansion};
pub use number::{format_decimal, NumberLocale};
pub use render::AsciiTable;
pub use wrap::wrap;
