//! Runtime-typed cell values.
//!
//! Result sources hand back values whose type is only known at runtime.
//! [`Cell`] keeps the few distinctions the table layer cares about and
//! otherwise behaves as "something with a textual form".

use std::fmt;

/// A single value read from a result source.
///
/// The textual form (via [`fmt::Display`]) is what the row expander
/// measures and wraps. `Null` renders as the literal `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cell {
    /// Absent value
    #[default]
    Null,
    /// Signed integer
    Integer(i64),
    /// Binary floating point
    Float(f64),
    /// Exact decimal kept in its textual form
    Decimal(String),
    /// Character data
    Text(String),
    /// Boolean
    Bool(bool),
    /// Any other value, already rendered (dates, timestamps, binary previews)
    Other(String),
}

impl Cell {
    /// The empty text cell used for padding continuation rows.
    #[inline]
    pub fn empty() -> Self {
        Self::Text(String::new())
    }

    /// Create a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Check if the cell is `Null`
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Build an `Other` cell holding a hex preview of binary data.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::Other(format_bytes_preview(bytes))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Decimal(s) | Self::Text(s) | Self::Other(s) => f.write_str(s),
            Self::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Format binary data as hex preview
fn format_bytes_preview(bytes: &[u8]) -> String {
    if bytes.len() <= 8 {
        format!("0x{}", hex_encode(bytes))
    } else {
        format!("0x{}... ({} bytes)", hex_encode(&bytes[..8]), bytes.len())
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    use std::fmt::Write;
    let mut result = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(result, "{b:02x}");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f_null_displays_as_literal() {
        assert_eq!(Cell::Null.to_string(), "null");
        assert!(Cell::Null.is_null());
    }

    #[test]
    fn f_display_variants() {
        assert_eq!(Cell::Integer(-42).to_string(), "-42");
        assert_eq!(Cell::Float(2.5).to_string(), "2.5");
        assert_eq!(Cell::Decimal("1234.500".into()).to_string(), "1234.500");
        assert_eq!(Cell::text("abc").to_string(), "abc");
        assert_eq!(Cell::Bool(true).to_string(), "true");
        assert_eq!(Cell::Other("date:1".into()).to_string(), "date:1");
    }

    #[test]
    fn f_empty_is_zero_length_text() {
        assert_eq!(Cell::empty(), Cell::Text(String::new()));
        assert_eq!(Cell::empty().to_string(), "");
    }

    #[test]
    fn f_option_conversion() {
        assert_eq!(Cell::from(None::<i64>), Cell::Null);
        assert_eq!(Cell::from(Some("x")), Cell::text("x"));
        assert_eq!(Cell::from(7_i32), Cell::Integer(7));
    }

    #[test]
    fn f_bytes_preview_short() {
        let cell = Cell::from_bytes(&[0x01, 0x02, 0x03]);
        assert_eq!(cell.to_string(), "0x010203");
    }

    #[test]
    fn f_bytes_preview_long() {
        let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a];
        let cell = Cell::from_bytes(&bytes);
        let s = cell.to_string();
        assert!(s.contains("..."));
        assert!(s.contains("10 bytes"));
    }

    #[test]
    fn f_hex_encode_bytes() {
        assert_eq!(hex_encode(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
        assert_eq!(hex_encode(&[]), "");
    }
}
