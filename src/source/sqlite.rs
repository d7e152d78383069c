//! SQLite result source (feature `sqlite`)

use rusqlite::types::ValueRef;
use rusqlite::{Connection, Params, Rows, Statement};

use crate::cell::Cell;
use crate::config::TableConfig;
use crate::error::{Error, Result};
use crate::table::TableAdapter;

use super::ResultSource;

/// Cursor over the rows of a prepared SQLite statement
///
/// Each `advance` reads the whole row into memory so that cells can be
/// fetched in any order afterwards.
///
/// # Example
///
/// ```
/// use rusqlite::Connection;
/// use sqltab::{Cell, ResultSource, SqliteSource};
///
/// let conn = Connection::open_in_memory().unwrap();
/// let mut stmt = conn.prepare("SELECT 1 AS one, NULL AS nothing").unwrap();
/// let mut source = SqliteSource::query(&mut stmt, []).unwrap();
///
/// assert_eq!(source.column_label(0).unwrap(), "one");
/// assert!(source.advance().unwrap());
/// assert_eq!(source.value_at(0).unwrap(), Cell::Integer(1));
/// assert_eq!(source.value_at(1).unwrap(), Cell::Null);
/// ```
pub struct SqliteSource<'stmt> {
    labels: Vec<String>,
    rows: Rows<'stmt>,
    current: Option<Vec<Cell>>,
}

impl<'stmt> SqliteSource<'stmt> {
    /// Execute `stmt` with `params` and wrap the resulting rows
    pub fn query<P: Params>(stmt: &'stmt mut Statement<'_>, params: P) -> rusqlite::Result<Self> {
        let labels = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let rows = stmt.query(params)?;
        Ok(Self {
            labels,
            rows,
            current: None,
        })
    }
}

impl std::fmt::Debug for SqliteSource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteSource")
            .field("labels", &self.labels)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl ResultSource for SqliteSource<'_> {
    type Error = rusqlite::Error;

    fn column_count(&self) -> rusqlite::Result<usize> {
        Ok(self.labels.len())
    }

    fn column_label(&self, index: usize) -> rusqlite::Result<String> {
        self.labels
            .get(index)
            .cloned()
            .ok_or(rusqlite::Error::InvalidColumnIndex(index))
    }

    fn advance(&mut self) -> rusqlite::Result<bool> {
        let count = self.labels.len();
        match self.rows.next()? {
            Some(row) => {
                let cells = (0..count)
                    .map(|i| row.get_ref(i).map(cell_from_value))
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                self.current = Some(cells);
                Ok(true)
            }
            None => {
                self.current = None;
                Ok(false)
            }
        }
    }

    fn value_at(&self, index: usize) -> rusqlite::Result<Cell> {
        let row = self
            .current
            .as_ref()
            .ok_or(rusqlite::Error::QueryReturnedNoRows)?;
        row.get(index)
            .cloned()
            .ok_or(rusqlite::Error::InvalidColumnIndex(index))
    }
}

/// Map a SQLite storage class onto a cell
fn cell_from_value(value: ValueRef<'_>) -> Cell {
    match value {
        ValueRef::Null => Cell::Null,
        ValueRef::Integer(v) => Cell::Integer(v),
        ValueRef::Real(v) => Cell::Float(v),
        ValueRef::Text(bytes) => Cell::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => Cell::from_bytes(bytes),
    }
}

impl TableAdapter {
    /// Run `sql` on `conn` and build an adapter from its result
    ///
    /// Preparing or executing the statement fails with
    /// [`Error::DataAccess`], the same as a failure while reading rows.
    pub fn from_query(conn: &Connection, sql: &str, config: &TableConfig) -> Result<Self> {
        tracing::debug!(sql, "running query");
        let mut stmt = conn.prepare(sql).map_err(Error::data_access)?;
        let source = SqliteSource::query(&mut stmt, []).map_err(Error::data_access)?;
        Self::with_config(source, config)
    }
}
