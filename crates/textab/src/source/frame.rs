//! Labeled-table input: a small frame of named columns and row labels,
//! plus its row source.

use crate::cell::{Cell, Formatter};
use crate::error::SourceError;
use crate::source::RowSource;

/// A labeled table: named columns, one label per row, and the cells.
///
/// Rows are width-checked as they are pushed, so a frame can never hold
/// a ragged grid.
///
/// # Example
///
/// ```rust
/// use textab::{Cell, Frame};
///
/// let mut frame = Frame::new(["x", "y"]);
/// frame.push_row("first", [Cell::Int(1), Cell::Int(2)])?;
/// frame.push_row("second", [Cell::Int(3), Cell::Int(4)])?;
/// assert_eq!(frame.nrows(), 2);
/// # Ok::<(), textab::TableError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Frame {
    columns: Vec<String>,
    labels: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Frame {
    /// Create an empty frame with the given column names.
    pub fn new<I>(columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Frame {
            columns: columns.into_iter().map(Into::into).collect(),
            labels: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Append one labeled row. The cell count must match the column
    /// names.
    pub fn push_row<L, I>(&mut self, label: L, cells: I) -> Result<(), SourceError>
    where
        L: Into<String>,
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        let cells: Vec<Cell> = cells.into_iter().map(Into::into).collect();
        if cells.len() != self.columns.len() {
            return Err(SourceError::RowWidth {
                row: self.rows.len(),
                expected: self.columns.len(),
                got: cells.len(),
            });
        }
        self.labels.push(label.into());
        self.rows.push(cells);
        Ok(())
    }

    /// Number of data columns (the index is not counted).
    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// The column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The row labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// Construction options for a frame-backed table.
#[derive(Clone, Debug)]
pub struct FrameOptions {
    pub(crate) include_index: bool,
    pub(crate) include_headers: bool,
    pub(crate) headers: Option<Vec<String>>,
    pub(crate) index_formatter: Formatter,
}

impl Default for FrameOptions {
    fn default() -> Self {
        FrameOptions {
            include_index: true,
            include_headers: true,
            headers: None,
            index_formatter: Formatter::display(),
        }
    }
}

impl FrameOptions {
    /// Prepend the row label as a synthetic first column (on by
    /// default).
    pub fn include_index(mut self, include: bool) -> Self {
        self.include_index = include;
        self
    }

    /// Render the header line (on by default).
    pub fn include_headers(mut self, include: bool) -> Self {
        self.include_headers = include;
        self
    }

    /// Override the derived headers. The list may cover all columns or
    /// just the data columns; with an index column, a missing leading
    /// entry is filled in empty.
    pub fn headers<I>(mut self, headers: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    /// Formatter for the synthetic index cell, independent of the
    /// per-column formatters.
    pub fn index_formatter(mut self, formatter: Formatter) -> Self {
        self.index_formatter = formatter;
        self
    }
}

/// Streams a [`Frame`], optionally prepending the formatted row label.
///
/// The index cell is pre-rendered by the independent index formatter;
/// the engine's column-0 formatter then composes over that text and
/// defaults to identity.
#[derive(Debug)]
pub struct FrameSource {
    labels: std::vec::IntoIter<String>,
    rows: std::vec::IntoIter<Vec<Cell>>,
    include_index: bool,
    index_formatter: Formatter,
}

impl FrameSource {
    /// Consume a frame into a row stream.
    pub fn new(frame: Frame, include_index: bool, index_formatter: Formatter) -> Self {
        FrameSource {
            labels: frame.labels.into_iter(),
            rows: frame.rows.into_iter(),
            include_index,
            index_formatter,
        }
    }
}

impl RowSource for FrameSource {
    fn next_row(&mut self) -> Result<Option<Vec<Cell>>, SourceError> {
        let cells = match self.rows.next() {
            Some(cells) => cells,
            None => return Ok(None),
        };
        if !self.include_index {
            self.labels.next();
            return Ok(Some(cells));
        }
        let label = self.labels.next().unwrap_or_default();
        let mut row = Vec::with_capacity(cells.len() + 1);
        row.push(Cell::Text(
            self.index_formatter.apply(&Cell::Text(label)),
        ));
        row.extend(cells);
        Ok(Some(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Frame {
        let mut frame = Frame::new(["x", "y"]);
        frame.push_row("a", [Cell::Int(1), Cell::Int(2)]).unwrap();
        frame.push_row("b", [Cell::Int(3), Cell::Int(4)]).unwrap();
        frame
    }

    #[test]
    fn push_row_checks_width() {
        let mut frame = Frame::new(["x", "y"]);
        let err = frame.push_row("a", [Cell::Int(1)]).unwrap_err();
        assert!(matches!(
            err,
            SourceError::RowWidth {
                row: 0,
                expected: 2,
                got: 1
            }
        ));
        assert_eq!(frame.nrows(), 0);
    }

    #[test]
    fn index_cell_is_prepended_and_formatted() {
        let mut source = FrameSource::new(sample(), true, Formatter::display().bolded());
        assert_eq!(
            source.next_row().unwrap(),
            Some(vec![
                Cell::Text("\\textbf{a}".to_string()),
                Cell::Int(1),
                Cell::Int(2)
            ])
        );
    }

    #[test]
    fn index_can_be_left_out() {
        let mut source = FrameSource::new(sample(), false, Formatter::display());
        assert_eq!(
            source.next_row().unwrap(),
            Some(vec![Cell::Int(1), Cell::Int(2)])
        );
        assert_eq!(
            source.next_row().unwrap(),
            Some(vec![Cell::Int(3), Cell::Int(4)])
        );
        assert_eq!(source.next_row().unwrap(), None);
    }
}
