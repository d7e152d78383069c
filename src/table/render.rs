//! ASCII border-drawing renderer
//!
//! Draws any [`TableAware`] as a boxed text table. Each display row
//! becomes exactly one output line, so rows must already be wrapped.

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use super::aware::TableAware;

/// Text table renderer
///
/// Cells that [`TableAware::format_cell`] formats are right-aligned;
/// everything else is left-aligned. Headers are centred.
///
/// ```text
/// +-------+-----+
/// | NAME  | AGE |
/// +-------+-----+
/// | alice |  42 |
/// +-------+-----+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiTable {
    /// Spaces on each side of a cell
    padding: usize,
}

impl Default for AsciiTable {
    fn default() -> Self {
        Self { padding: 1 }
    }
}

/// A rendered cell and its alignment
struct RenderedCell {
    text: String,
    right: bool,
}

impl AsciiTable {
    /// Create a renderer with single-space padding
    pub fn new() -> Self {
        Self::default()
    }

    /// Set spaces on each side of a cell
    #[must_use]
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Render the whole table, one line per display row plus borders
    ///
    /// Returns an empty string for a table without columns.
    pub fn render<T: TableAware + ?Sized>(&self, table: &T) -> String {
        self.render_lines(table).join("\n")
    }

    /// Render the table as separate lines
    pub fn render_lines<T: TableAware + ?Sized>(&self, table: &T) -> Vec<String> {
        let headers = table.headers();
        if headers.is_empty() {
            return Vec::new();
        }

        let rows: Vec<Vec<RenderedCell>> = table
            .data()
            .iter()
            .enumerate()
            .map(|(r, row)| {
                headers
                    .iter()
                    .enumerate()
                    .map(|(c, header)| match row.get(c) {
                        Some(cell) => match table.format_cell(header, r, c, cell) {
                            Some(text) => RenderedCell { text, right: true },
                            None => RenderedCell {
                                text: cell.to_string(),
                                right: false,
                            },
                        },
                        None => RenderedCell {
                            text: String::new(),
                            right: false,
                        },
                    })
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(c, header)| {
                rows.iter()
                    .map(|row| row[c].text.width())
                    .fold(header.width(), usize::max)
            })
            .collect();

        let border = self.border_line(&widths);
        let mut lines = Vec::with_capacity(rows.len() + 4);
        lines.push(border.clone());
        lines.push(self.header_line(headers, &widths));
        lines.push(border.clone());
        for row in &rows {
            lines.push(self.row_line(row, &widths));
        }
        if !rows.is_empty() {
            lines.push(border);
        }
        lines
    }

    /// Write the rendered table followed by a newline
    ///
    /// # Errors
    ///
    /// Returns any error raised by `writer`.
    pub fn print<T, W>(&self, table: &T, writer: &mut W) -> io::Result<()>
    where
        T: TableAware + ?Sized,
        W: Write,
    {
        for line in self.render_lines(table) {
            writeln!(writer, "{line}")?;
        }
        writer.flush()
    }

    fn border_line(&self, widths: &[usize]) -> String {
        let mut line = String::from("+");
        for w in widths {
            line.push_str(&"-".repeat(w + self.padding * 2));
            line.push('+');
        }
        line
    }

    fn header_line(&self, headers: &[String], widths: &[usize]) -> String {
        let mut line = String::from("|");
        for (header, &w) in headers.iter().zip(widths) {
            let slack = w.saturating_sub(header.width());
            let left = slack / 2;
            self.push_cell(&mut line, header, left, slack - left);
        }
        line
    }

    fn row_line(&self, row: &[RenderedCell], widths: &[usize]) -> String {
        let mut line = String::from("|");
        for (cell, &w) in row.iter().zip(widths) {
            let slack = w.saturating_sub(cell.text.width());
            if cell.right {
                self.push_cell(&mut line, &cell.text, slack, 0);
            } else {
                self.push_cell(&mut line, &cell.text, 0, slack);
            }
        }
        line
    }

    fn push_cell(&self, line: &mut String, text: &str, left: usize, right: usize) {
        line.push_str(&" ".repeat(self.padding + left));
        line.push_str(text);
        line.push_str(&" ".repeat(self.padding + right));
        line.push('|');
    }
}
