//! Arrow record batch result source
//!
//! Reads Arrow arrays cell by cell and converts each value into a
//! [`Cell`]. Strings, integers, 64-bit floats, booleans and decimals keep
//! their own variants; 32-bit floats keep their shortest text; binary data
//! becomes a hex preview; anything else is rendered with Arrow's display
//! formatting.

use arrow::array::{
    Array, BinaryArray, BooleanArray, Decimal128Array, Float32Array, Float64Array, Int16Array,
    Int32Array, Int64Array, Int8Array, LargeBinaryArray, LargeStringArray, RecordBatch,
    StringArray, UInt16Array, UInt32Array, UInt64Array, UInt8Array,
};
use arrow::datatypes::{DataType, SchemaRef};
use arrow::error::ArrowError;
use arrow::util::display::array_value_to_string;

use crate::cell::Cell;

use super::ResultSource;

/// Convert the value at `row` of an Arrow array into a [`Cell`]
///
/// Null slots and the `Null` type become [`Cell::Null`]. Out-of-range
/// rows also read as `Null`.
pub fn cell_from_array(array: &dyn Array, row: usize) -> Cell {
    if row >= array.len() || array.is_null(row) {
        return Cell::Null;
    }

    let cell = match array.data_type() {
        DataType::Null => Some(Cell::Null),

        // String types
        DataType::Utf8 => downcast::<StringArray>(array).map(|a| Cell::text(a.value(row))),
        DataType::LargeUtf8 => {
            downcast::<LargeStringArray>(array).map(|a| Cell::text(a.value(row)))
        }

        // Integer types
        DataType::Int8 => downcast::<Int8Array>(array).map(|a| Cell::Integer(a.value(row).into())),
        DataType::Int16 => {
            downcast::<Int16Array>(array).map(|a| Cell::Integer(a.value(row).into()))
        }
        DataType::Int32 => {
            downcast::<Int32Array>(array).map(|a| Cell::Integer(a.value(row).into()))
        }
        DataType::Int64 => downcast::<Int64Array>(array).map(|a| Cell::Integer(a.value(row))),
        DataType::UInt8 => {
            downcast::<UInt8Array>(array).map(|a| Cell::Integer(a.value(row).into()))
        }
        DataType::UInt16 => {
            downcast::<UInt16Array>(array).map(|a| Cell::Integer(a.value(row).into()))
        }
        DataType::UInt32 => {
            downcast::<UInt32Array>(array).map(|a| Cell::Integer(a.value(row).into()))
        }
        DataType::UInt64 => downcast::<UInt64Array>(array).map(|a| {
            let v = a.value(row);
            i64::try_from(v).map_or_else(|_| Cell::Decimal(v.to_string()), Cell::Integer)
        }),

        // Float types
        // Widening to f64 would print the binary expansion (0.1 -> 0.10000000149011612)
        DataType::Float32 => {
            downcast::<Float32Array>(array).map(|a| Cell::Other(a.value(row).to_string()))
        }
        DataType::Float64 => downcast::<Float64Array>(array).map(|a| Cell::Float(a.value(row))),

        DataType::Decimal128(_, _) => {
            downcast::<Decimal128Array>(array).map(|a| Cell::Decimal(a.value_as_string(row)))
        }

        DataType::Boolean => downcast::<BooleanArray>(array).map(|a| Cell::Bool(a.value(row))),

        // Binary types
        DataType::Binary => downcast::<BinaryArray>(array).map(|a| Cell::from_bytes(a.value(row))),
        DataType::LargeBinary => {
            downcast::<LargeBinaryArray>(array).map(|a| Cell::from_bytes(a.value(row)))
        }

        // Dates, timestamps, nested types
        _ => array_value_to_string(array, row).ok().map(Cell::Other),
    };

    cell.unwrap_or_else(|| Cell::Other(format!("<{}>", array.data_type())))
}

fn downcast<T: 'static>(array: &dyn Array) -> Option<&T> {
    array.as_any().downcast_ref::<T>()
}

/// Forward-only cursor over a sequence of record batches
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use arrow::array::{Int32Array, RecordBatch, StringArray};
/// use arrow::datatypes::{DataType, Field, Schema};
/// use sqltab::{Cell, RecordBatchSource, ResultSource};
///
/// let schema = Arc::new(Schema::new(vec![
///     Field::new("id", DataType::Int32, false),
///     Field::new("name", DataType::Utf8, true),
/// ]));
/// let batch = RecordBatch::try_new(
///     schema.clone(),
///     vec![
///         Arc::new(Int32Array::from(vec![1])),
///         Arc::new(StringArray::from(vec![Some("alice")])),
///     ],
/// )
/// .unwrap();
///
/// let mut source = RecordBatchSource::new(schema, vec![batch]);
/// assert!(source.advance().unwrap());
/// assert_eq!(source.value_at(1).unwrap(), Cell::text("alice"));
/// ```
#[derive(Debug, Clone)]
pub struct RecordBatchSource {
    schema: SchemaRef,
    batches: Vec<RecordBatch>,
    /// Position as (batch index, row within batch); `None` before the first advance
    position: Option<(usize, usize)>,
}

impl RecordBatchSource {
    /// Create a source over batches sharing `schema`
    pub fn new(schema: SchemaRef, batches: Vec<RecordBatch>) -> Self {
        Self {
            schema,
            batches,
            position: None,
        }
    }

    /// Create a source from a single batch
    pub fn from_batch(batch: RecordBatch) -> Self {
        Self::new(batch.schema(), vec![batch])
    }

    /// Schema of the batches
    #[inline]
    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    /// Keep at most the first `limit` rows
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        let mut remaining = limit;
        self.batches = self
            .batches
            .into_iter()
            .filter_map(|batch| {
                let take = batch.num_rows().min(remaining);
                remaining -= take;
                (take > 0).then(|| batch.slice(0, take))
            })
            .collect();
        self.position = None;
        self
    }

    /// Total number of rows across all batches
    pub fn row_count(&self) -> usize {
        self.batches.iter().map(RecordBatch::num_rows).sum()
    }

    /// First batch at or after `batch_idx` with a row at `row`
    fn seek(&self, mut batch_idx: usize, row: usize) -> Option<(usize, usize)> {
        let mut row = row;
        while let Some(batch) = self.batches.get(batch_idx) {
            if row < batch.num_rows() {
                return Some((batch_idx, row));
            }
            batch_idx += 1;
            row = 0;
        }
        None
    }
}

impl ResultSource for RecordBatchSource {
    type Error = ArrowError;

    fn column_count(&self) -> Result<usize, Self::Error> {
        Ok(self.schema.fields().len())
    }

    fn column_label(&self, index: usize) -> Result<String, Self::Error> {
        self.schema
            .fields()
            .get(index)
            .map(|f| f.name().clone())
            .ok_or_else(|| {
                ArrowError::InvalidArgumentError(format!(
                    "Column index {index} out of bounds (total: {})",
                    self.schema.fields().len()
                ))
            })
    }

    fn advance(&mut self) -> Result<bool, Self::Error> {
        let next = match self.position {
            None => self.seek(0, 0),
            Some((batch, row)) => self.seek(batch, row + 1),
        };
        match next {
            Some(pos) => {
                self.position = Some(pos);
                Ok(true)
            }
            None => {
                self.position = Some((self.batches.len(), 0));
                Ok(false)
            }
        }
    }

    fn value_at(&self, index: usize) -> Result<Cell, Self::Error> {
        let (batch_idx, row) = self.position.ok_or_else(|| {
            ArrowError::InvalidArgumentError("Cursor is not positioned on a row".into())
        })?;
        let batch = self.batches.get(batch_idx).ok_or_else(|| {
            ArrowError::InvalidArgumentError("Cursor is past the last row".into())
        })?;
        if index >= batch.num_columns() {
            return Err(ArrowError::InvalidArgumentError(format!(
                "Column index {index} out of bounds (total: {})",
                batch.num_columns()
            )));
        }
        Ok(cell_from_array(batch.column(index).as_ref(), row))
    }
}
