//! Result sources
//!
//! A [`ResultSource`] is a forward-only cursor over query results with
//! column metadata. Column indices are zero-based everywhere.
//!
//! Implementations:
//! - [`MemorySource`] - rows held in memory
//! - [`RecordBatchSource`] - Arrow record batches
//! - `SqliteSource` - rows of a prepared SQLite statement (feature `sqlite`)

mod batch;
mod file;
mod memory;
#[cfg(feature = "sqlite")]
mod sqlite;

pub use batch::{cell_from_array, RecordBatchSource};
pub use memory::{MemorySource, MemorySourceError};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteSource;

use crate::cell::Cell;

/// Forward-only cursor over a tabular result
///
/// The cursor starts before the first row; [`advance`](Self::advance)
/// moves to the next row and reports whether one exists. Cells of the
/// current row are read with [`value_at`](Self::value_at).
pub trait ResultSource {
    /// Failure raised by the underlying source
    type Error: std::error::Error;

    /// Number of columns in the result
    fn column_count(&self) -> Result<usize, Self::Error>;

    /// Display label of a column
    fn column_label(&self, index: usize) -> Result<String, Self::Error>;

    /// Move to the next row, returning `false` once the result is exhausted
    fn advance(&mut self) -> Result<bool, Self::Error>;

    /// Value of a column in the current row
    fn value_at(&self, index: usize) -> Result<Cell, Self::Error>;
}

impl<S: ResultSource + ?Sized> ResultSource for &mut S {
    type Error = S::Error;

    fn column_count(&self) -> Result<usize, Self::Error> {
        (**self).column_count()
    }

    fn column_label(&self, index: usize) -> Result<String, Self::Error> {
        (**self).column_label(index)
    }

    fn advance(&mut self) -> Result<bool, Self::Error> {
        (**self).advance()
    }

    fn value_at(&self, index: usize) -> Result<Cell, Self::Error> {
        (**self).value_at(index)
    }
}
