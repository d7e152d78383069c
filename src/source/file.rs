//! Loading record batches from data files

use std::fs::File;
use std::io::{BufReader, Seek, SeekFrom};
use std::path::Path;
use std::sync::Arc;

use arrow::array::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::{Error, Result};

use super::RecordBatchSource;

/// Rows sampled for schema inference
const INFER_ROWS: usize = 1000;

impl RecordBatchSource {
    /// Load a CSV (with header), JSON Lines or Parquet file, chosen by extension
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is unknown or the file cannot
    /// be read or decoded.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match ext {
            "csv" => Self::from_csv(path),
            "json" | "jsonl" => Self::from_json(path),
            "parquet" => Self::from_parquet(path),
            ext => Err(Error::unsupported_format(ext)),
        }
    }

    /// Load a CSV file with a header row, inferring the schema
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsed.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        use arrow_csv::{reader::Format, ReaderBuilder};

        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(e, path))?;
        let mut buf_reader = BufReader::new(file);

        let format = Format::default().with_header(true);
        let (schema, _) = format
            .infer_schema(&mut buf_reader, Some(INFER_ROWS))
            .map_err(Error::Arrow)?;
        buf_reader
            .seek(SeekFrom::Start(0))
            .map_err(|e| Error::io(e, path))?;

        let schema = Arc::new(schema);
        let reader = ReaderBuilder::new(schema.clone())
            .with_header(true)
            .build(buf_reader)
            .map_err(Error::Arrow)?;
        let batches = reader
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::Arrow)?;

        Ok(Self::new(schema, batches))
    }

    /// Load a JSON Lines file, inferring the schema
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsed.
    pub fn from_json(path: impl AsRef<Path>) -> Result<Self> {
        use arrow_json::ReaderBuilder;

        let path = path.as_ref();
        let infer_file = File::open(path).map_err(|e| Error::io(e, path))?;
        let (schema, _) =
            arrow_json::reader::infer_json_schema(BufReader::new(infer_file), Some(INFER_ROWS))
                .map_err(Error::Arrow)?;

        let file = File::open(path).map_err(|e| Error::io(e, path))?;
        let schema = Arc::new(schema);
        let reader = ReaderBuilder::new(schema.clone())
            .build(BufReader::new(file))
            .map_err(Error::Arrow)?;
        let batches = reader
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::Arrow)?;

        Ok(Self::new(schema, batches))
    }

    /// Load a Parquet file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or decoded.
    pub fn from_parquet(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(e, path))?;

        let builder = ParquetRecordBatchReaderBuilder::try_new(file).map_err(Error::Parquet)?;
        let schema = builder.schema().clone();
        let reader = builder.build().map_err(Error::Parquet)?;
        let batches: Vec<RecordBatch> = reader
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::Arrow)?;

        Ok(Self::new(schema, batches))
    }
}
