//! In-memory result source

use crate::cell::Cell;

use super::ResultSource;

/// Errors raised by [`MemorySource`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemorySourceError {
    /// Column index past the last column
    #[error("Column index {requested} out of bounds (total: {total})")]
    ColumnOutOfBounds {
        /// Requested column index
        requested: usize,
        /// Total column count
        total: usize,
    },
    /// `value_at` called while not positioned on a row
    #[error("Cursor is not positioned on a row")]
    NoCurrentRow,
}

/// Rows and labels held in memory
///
/// Rows shorter than the label list read as `Null` in the missing
/// columns.
///
/// # Example
///
/// ```
/// use sqltab::{Cell, MemorySource, ResultSource};
///
/// let mut source = MemorySource::new(["name", "age"])
///     .with_row(vec![Cell::text("alice"), Cell::Integer(42)]);
///
/// assert_eq!(source.column_count().unwrap(), 2);
/// assert!(source.advance().unwrap());
/// assert_eq!(source.value_at(1).unwrap(), Cell::Integer(42));
/// assert!(!source.advance().unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    labels: Vec<String>,
    rows: Vec<Vec<Cell>>,
    /// Index of the current row; `None` before the first advance
    cursor: Option<usize>,
}

impl MemorySource {
    /// Create a source with the given column labels and no rows
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            cursor: None,
        }
    }

    /// Append a row
    #[must_use]
    pub fn with_row(mut self, row: Vec<Cell>) -> Self {
        self.rows.push(row);
        self
    }

    /// Append several rows
    #[must_use]
    pub fn with_rows(mut self, rows: impl IntoIterator<Item = Vec<Cell>>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Number of rows held
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn check_column(&self, index: usize) -> Result<(), MemorySourceError> {
        if index < self.labels.len() {
            Ok(())
        } else {
            Err(MemorySourceError::ColumnOutOfBounds {
                requested: index,
                total: self.labels.len(),
            })
        }
    }
}

impl ResultSource for MemorySource {
    type Error = MemorySourceError;

    fn column_count(&self) -> Result<usize, Self::Error> {
        Ok(self.labels.len())
    }

    fn column_label(&self, index: usize) -> Result<String, Self::Error> {
        self.check_column(index)?;
        Ok(self.labels[index].clone())
    }

    fn advance(&mut self) -> Result<bool, Self::Error> {
        let next = self.cursor.map_or(0, |c| c + 1);
        if next < self.rows.len() {
            self.cursor = Some(next);
            Ok(true)
        } else {
            self.cursor = Some(self.rows.len());
            Ok(false)
        }
    }

    fn value_at(&self, index: usize) -> Result<Cell, Self::Error> {
        self.check_column(index)?;
        let row = self
            .cursor
            .and_then(|c| self.rows.get(c))
            .ok_or(MemorySourceError::NoCurrentRow)?;
        Ok(row.get(index).cloned().unwrap_or_default())
    }
}
