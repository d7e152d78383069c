//! Consumer-facing table contract

use crate::cell::Cell;

/// Anything that can hand a renderer headers, rows and a cell formatter
///
/// Rows are indexed `[row][column]` and every row is expected to be as
/// wide as the header list.
pub trait TableAware {
    /// Column headers in column order
    fn headers(&self) -> &[String];

    /// Display rows in row-major order
    fn data(&self) -> &[Vec<Cell>];

    /// Custom rendering for a cell, or `None` to use its plain text
    fn format_cell(
        &self,
        _header: &str,
        _row: usize,
        _col: usize,
        _value: &Cell,
    ) -> Option<String> {
        None
    }
}
