//! Row expansion
//!
//! Turns one logical row into one or more display rows so that every
//! emitted cell is a single line no wider than the column limit (except
//! for unbreakable words, which stay intact).

use crate::cell::Cell;

use super::wrap::wrap;

/// Minimum number of display rows for a row with any multiline column
const MIN_EXPANDED_HEIGHT: usize = 2;

/// Whether a cell's text needs more than one display line
#[inline]
pub fn needs_expansion(text: &str, max_width: usize) -> bool {
    text.contains('\n') || text.chars().count() > max_width
}

/// Expand a logical row into display rows
///
/// If no cell needs wrapping the row is returned unchanged as a single
/// display row. Otherwise every multiline column is wrapped, the row
/// height `K` is the largest wrapped line count (at least two), and
/// each column is padded to `K`:
///
/// - columns that needed no wrapping keep their original cell in the
///   first row and empty text below it
/// - wrapped columns get one line per row, padded with empty text
///
/// Rows are emitted in row-major order.
///
/// # Example
/// ```
/// use sqltab::{table::expand_row, Cell};
///
/// let rows = expand_row(vec![Cell::text("line1\nline2"), Cell::text("x")], 20);
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0], vec![Cell::text("line1"), Cell::text("x")]);
/// assert_eq!(rows[1], vec![Cell::text("line2"), Cell::empty()]);
/// ```
pub fn expand_row(row: Vec<Cell>, max_width: usize) -> Vec<Vec<Cell>> {
    let wrapped: Vec<Option<Vec<String>>> = row
        .iter()
        .map(|cell| {
            let text = cell.to_string();
            needs_expansion(&text, max_width).then(|| wrap(&text, max_width))
        })
        .collect();

    if wrapped.iter().all(Option::is_none) {
        return vec![row];
    }

    let height = wrapped
        .iter()
        .flatten()
        .map(Vec::len)
        .fold(MIN_EXPANDED_HEIGHT, usize::max);

    let mut columns: Vec<std::vec::IntoIter<Cell>> = row
        .into_iter()
        .zip(wrapped)
        .map(|(cell, lines)| pad_column(cell, lines, height).into_iter())
        .collect();

    (0..height)
        .map(|_| {
            columns
                .iter_mut()
                .map(|column| column.next().unwrap_or_else(Cell::empty))
                .collect()
        })
        .collect()
}

/// Build one column of exactly `height` cells
fn pad_column(cell: Cell, lines: Option<Vec<String>>, height: usize) -> Vec<Cell> {
    let mut column: Vec<Cell> = match lines {
        Some(lines) => lines.into_iter().map(Cell::Text).collect(),
        None => vec![cell],
    };
    column.resize_with(height, Cell::empty);
    column
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(rows: &[Vec<Cell>]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(ToString::to_string).collect())
            .collect()
    }

    #[test]
    fn f_no_expansion_returns_row_unchanged() {
        let row = vec![Cell::text("alice"), Cell::Integer(42)];
        let out = expand_row(row.clone(), 20);
        assert_eq!(out, vec![row]);
    }

    #[test]
    fn f_embedded_newline() {
        let out = expand_row(vec![Cell::text("line1\nline2"), Cell::text("x")], 20);
        assert_eq!(texts(&out), vec![vec!["line1", "x"], vec!["line2", ""]]);
    }

    #[test]
    fn f_width_overflow() {
        let out = expand_row(vec![Cell::text("hello world foo bar"), Cell::text("y")], 11);
        assert_eq!(
            texts(&out),
            vec![vec!["hello world", "y"], vec!["foo bar", ""]]
        );
    }

    #[test]
    fn f_lower_bound_of_two() {
        let out = expand_row(vec![Cell::text("short\n"), Cell::text("other")], 5);
        assert_eq!(texts(&out), vec![vec!["short", "other"], vec!["", ""]]);
    }

    #[test]
    fn f_mixed_multiline_columns() {
        let out = expand_row(
            vec![
                Cell::text("a\nb\nc"),
                Cell::text("long token xyz"),
                Cell::text("k"),
            ],
            10,
        );
        assert_eq!(
            texts(&out),
            vec![
                vec!["a", "long token", "k"],
                vec!["b", "xyz", ""],
                vec!["c", "", ""],
            ]
        );
    }

    #[test]
    fn f_original_cell_kept_in_first_row() {
        let out = expand_row(vec![Cell::text("a\nb"), Cell::Integer(7), Cell::Null], 10);
        assert_eq!(out[0][1], Cell::Integer(7));
        assert_eq!(out[0][2], Cell::Null);
        assert_eq!(out[1][1], Cell::empty());
        assert_eq!(out[1][2], Cell::empty());
    }

    #[test]
    fn f_null_measured_as_literal() {
        // "null" is four characters wide
        let out = expand_row(vec![Cell::Null, Cell::text("b")], 3);
        assert_eq!(texts(&out), vec![vec!["null", "b"], vec!["", ""]]);
        assert_eq!(out[0][0], Cell::text("null"));
    }

    #[test]
    fn f_non_string_with_newline_is_multiline() {
        let out = expand_row(vec![Cell::Other("x\ny".into())], 10);
        assert_eq!(texts(&out), vec![vec!["x"], vec!["y"]]);
    }

    #[test]
    fn f_lone_newline_column() {
        let out = expand_row(vec![Cell::text("\n"), Cell::text("z")], 10);
        assert_eq!(texts(&out), vec![vec!["", "z"], vec!["", ""]]);
    }

    #[test]
    fn f_empty_row() {
        let out = expand_row(Vec::new(), 10);
        assert_eq!(out, vec![Vec::<Cell>::new()]);
    }

    #[test]
    fn f_needs_expansion() {
        assert!(!needs_expansion("abc", 3));
        assert!(needs_expansion("abcd", 3));
        assert!(needs_expansion("a\nb", 10));
        assert!(!needs_expansion("", 1));
    }
}
