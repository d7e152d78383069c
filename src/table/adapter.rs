//! Result-to-table adapter
//!
//! Drains a [`ResultSource`] once, upper-cases the column labels and
//! expands every logical row into display rows.

use std::num::NonZeroUsize;

use crate::cell::Cell;
use crate::config::TableConfig;
use crate::error::{Error, Result};
use crate::source::ResultSource;

use super::aware::TableAware;
use super::expand::expand_row;
use super::number::{format_decimal, NumberLocale};

/// Headers and display rows built from a result source
///
/// Construction reads the source to the end; afterwards the adapter is
/// an immutable value. The source is advanced but never closed, so a
/// caller that passes `&mut source` keeps ownership of it.
///
/// # Example
///
/// ```
/// use std::num::NonZeroUsize;
///
/// use sqltab::{Cell, MemorySource, TableAdapter};
///
/// let source = MemorySource::new(["name", "note"])
///     .with_row(vec![Cell::text("alice"), Cell::text("line1\nline2")]);
/// let adapter = TableAdapter::new(source, NonZeroUsize::new(20).unwrap()).unwrap();
///
/// assert_eq!(adapter.headers(), ["NAME", "NOTE"]);
/// assert_eq!(adapter.data().len(), 2);
/// assert_eq!(adapter.data()[1], vec![Cell::empty(), Cell::text("line2")]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableAdapter {
    /// Upper-cased column labels
    headers: Vec<String>,
    /// Display rows, each `headers.len()` cells wide
    data: Vec<Vec<Cell>>,
    max_column_width: NonZeroUsize,
    locale: NumberLocale,
}

impl TableAdapter {
    /// Build from a source with the given column width and default locale
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataAccess`] if the source fails while reading
    /// metadata, advancing or fetching a cell.
    pub fn new<S: ResultSource>(source: S, max_column_width: NonZeroUsize) -> Result<Self> {
        Self::with_config(
            source,
            &TableConfig::default().with_max_column_width(max_column_width),
        )
    }

    /// Build from a source using `config`
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataAccess`] if the source fails.
    pub fn with_config<S: ResultSource>(mut source: S, config: &TableConfig) -> Result<Self> {
        let width = config.max_column_width.get();

        let column_count = source.column_count().map_err(Error::data_access)?;
        let headers = (0..column_count)
            .map(|i| source.column_label(i).map(|label| label.to_uppercase()))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::data_access)?;

        let mut data = Vec::new();
        let mut logical_rows = 0_usize;
        while source.advance().map_err(Error::data_access)? {
            let row = (0..column_count)
                .map(|i| source.value_at(i))
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(Error::data_access)?;

            let expanded = expand_row(row, width);
            if expanded.len() > 1 {
                tracing::trace!(row = logical_rows, height = expanded.len(), "expanded row");
            }
            data.extend(expanded);
            logical_rows += 1;
        }

        tracing::debug!(
            columns = column_count,
            logical_rows,
            display_rows = data.len(),
            "table data loaded"
        );

        Ok(Self {
            headers,
            data,
            max_column_width: config.max_column_width,
            locale: config.locale,
        })
    }

    /// Upper-cased column labels in column order
    #[inline]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Display rows in row-major order
    #[inline]
    pub fn data(&self) -> &[Vec<Cell>] {
        &self.data
    }

    /// Number of columns
    #[inline]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of display rows
    #[inline]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Check if there are no display rows
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Column width limit the rows were wrapped to
    #[inline]
    pub fn max_column_width(&self) -> NonZeroUsize {
        self.max_column_width
    }

    /// Locale used by [`format_cell`](Self::format_cell)
    #[inline]
    pub fn locale(&self) -> &NumberLocale {
        &self.locale
    }

    /// Locale-formatted decimal text for `value`, if it is a number
    ///
    /// `None` tells the renderer to fall back to the plain textual form.
    pub fn format_cell(
        &self,
        _header: &str,
        _row: usize,
        _col: usize,
        value: &Cell,
    ) -> Option<String> {
        format_decimal(&value.to_string(), &self.locale)
    }

    /// Consume the adapter, returning headers and display rows
    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<Cell>>) {
        (self.headers, self.data)
    }
}

impl TableAware for TableAdapter {
    fn headers(&self) -> &[String] {
        TableAdapter::headers(self)
    }

    fn data(&self) -> &[Vec<Cell>] {
        TableAdapter::data(self)
    }

    fn format_cell(&self, header: &str, row: usize, col: usize, value: &Cell) -> Option<String> {
        TableAdapter::format_cell(self, header, row, col, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{MemorySource, MemorySourceError};

    fn width(w: usize) -> NonZeroUsize {
        NonZeroUsize::new(w).unwrap()
    }

    /// Source that fails at a chosen step
    #[derive(Debug, Default)]
    struct FailingSource {
        fail_count: bool,
        fail_label: bool,
        fail_advance: bool,
        fail_value: bool,
        advanced: bool,
    }

    impl ResultSource for FailingSource {
        type Error = MemorySourceError;

        fn column_count(&self) -> std::result::Result<usize, Self::Error> {
            if self.fail_count {
                return Err(MemorySourceError::NoCurrentRow);
            }
            Ok(1)
        }

        fn column_label(&self, index: usize) -> std::result::Result<String, Self::Error> {
            if self.fail_label {
                return Err(MemorySourceError::ColumnOutOfBounds {
                    requested: index,
                    total: 0,
                });
            }
            Ok("c".into())
        }

        fn advance(&mut self) -> std::result::Result<bool, Self::Error> {
            if self.fail_advance {
                return Err(MemorySourceError::NoCurrentRow);
            }
            let first = !self.advanced;
            self.advanced = true;
            Ok(first)
        }

        fn value_at(&self, _index: usize) -> std::result::Result<Cell, Self::Error> {
            if self.fail_value {
                return Err(MemorySourceError::NoCurrentRow);
            }
            Ok(Cell::text("v"))
        }
    }

    #[test]
    fn f_adapter_headers_upper_cased() {
        let source = MemorySource::new(["name", "Age"]);
        let adapter = TableAdapter::new(source, width(20)).unwrap();
        assert_eq!(adapter.headers(), ["NAME", "AGE"]);
        assert_eq!(adapter.column_count(), 2);
        assert!(adapter.is_empty());
    }

    #[test]
    fn f_adapter_no_wrapping() {
        let source = MemorySource::new(["name", "age"])
            .with_row(vec![Cell::text("alice"), Cell::text("42")]);
        let adapter = TableAdapter::new(source, width(20)).unwrap();
        assert_eq!(
            adapter.data(),
            [vec![Cell::text("alice"), Cell::text("42")]]
        );
    }

    #[test]
    fn f_adapter_row_order_preserved() {
        let source = MemorySource::new(["a", "b"]).with_rows(vec![
            vec![Cell::text("r1\nr1b"), Cell::Integer(1)],
            vec![Cell::text("r2"), Cell::Integer(2)],
        ]);
        let adapter = TableAdapter::new(source, width(10)).unwrap();
        assert_eq!(adapter.row_count(), 3);
        assert_eq!(adapter.data()[0][0], Cell::text("r1"));
        assert_eq!(adapter.data()[1][0], Cell::text("r1b"));
        assert_eq!(adapter.data()[2][0], Cell::text("r2"));
        assert_eq!(adapter.data()[2][1], Cell::Integer(2));
    }

    #[test]
    fn f_adapter_borrowed_source_is_left_exhausted() {
        let mut source = MemorySource::new(["a"]).with_row(vec![Cell::text("x")]);
        let adapter = TableAdapter::new(&mut source, width(5)).unwrap();
        assert_eq!(adapter.row_count(), 1);
        assert!(!source.advance().unwrap());
    }

    #[test]
    fn f_adapter_errors_are_data_access() {
        for source in [
            FailingSource {
                fail_count: true,
                ..Default::default()
            },
            FailingSource {
                fail_label: true,
                ..Default::default()
            },
            FailingSource {
                fail_advance: true,
                ..Default::default()
            },
            FailingSource {
                fail_value: true,
                ..Default::default()
            },
        ] {
            let err = TableAdapter::new(source, width(5)).unwrap_err();
            assert!(err.is_data_access(), "unexpected error: {err}");
            assert!(err.to_string().starts_with("Unable to get table data:"));
        }
    }

    #[test]
    fn f_adapter_format_cell_numeric() {
        let adapter = TableAdapter::new(MemorySource::new(["n"]), width(5)).unwrap();
        assert_eq!(
            adapter.format_cell("N", 0, 0, &Cell::text("1234567.5")),
            Some("1,234,567.5".to_string())
        );
        assert_eq!(
            adapter.format_cell("N", 0, 0, &Cell::Integer(1000)),
            Some("1,000".to_string())
        );
        assert_eq!(adapter.format_cell("N", 0, 0, &Cell::text("abc")), None);
        assert_eq!(adapter.format_cell("N", 0, 0, &Cell::Null), None);
        assert_eq!(adapter.format_cell("N", 0, 0, &Cell::empty()), None);
    }

    #[test]
    fn f_adapter_format_cell_uses_config_locale() {
        let config = TableConfig::default().with_locale(NumberLocale::new('.', ','));
        let adapter = TableAdapter::with_config(MemorySource::new(["n"]), &config).unwrap();
        assert_eq!(
            adapter.format_cell("N", 0, 0, &Cell::Float(1234.5)),
            Some("1.234,5".to_string())
        );
        assert_eq!(adapter.locale(), &NumberLocale::new('.', ','));
    }

    #[test]
    fn f_adapter_into_parts() {
        let source = MemorySource::new(["x"]).with_row(vec![Cell::Bool(true)]);
        let (headers, data) = TableAdapter::new(source, width(8)).unwrap().into_parts();
        assert_eq!(headers, vec!["X"]);
        assert_eq!(data, vec![vec![Cell::Bool(true)]]);
    }
}
