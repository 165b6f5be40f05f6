//! Row source over a literal list of rows.

use crate::cell::Cell;
use crate::error::{ConfigError, SourceError};
use crate::source::RowSource;

/// Streams an in-memory list of rows.
///
/// The column count is the width of the widest row, so no cell is ever
/// dropped. Unlike the strict sources, shorter rows are right-padded
/// with [`Cell::Empty`] rather than rejected. The first row can be
/// consumed as a header (stringified and padded like any other row).
#[derive(Debug)]
pub struct RowsSource {
    rows: std::vec::IntoIter<Vec<Cell>>,
    ncols: usize,
    headers: Option<Vec<String>>,
}

impl RowsSource {
    /// Wrap a list of rows, optionally treating the first as a header.
    /// A list with no cells anywhere has no columns and is rejected.
    pub fn new(rows: Vec<Vec<Cell>>, has_header: bool) -> Result<Self, ConfigError> {
        let ncols = rows.iter().map(Vec::len).max().unwrap_or(0);
        if ncols == 0 {
            return Err(ConfigError::NoColumns);
        }
        let mut iter = rows.into_iter();
        let headers = if has_header {
            iter.next().map(|row| {
                let mut headers: Vec<String> =
                    row.iter().map(|cell| cell.to_string()).collect();
                headers.resize(ncols, String::new());
                headers
            })
        } else {
            None
        };
        Ok(RowsSource {
            rows: iter,
            ncols,
            headers,
        })
    }

    /// Column count (the widest row's width).
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Headers consumed from the first row, when requested.
    pub fn headers(&self) -> Option<&[String]> {
        self.headers.as_deref()
    }
}

impl RowSource for RowsSource {
    fn next_row(&mut self) -> Result<Option<Vec<Cell>>, SourceError> {
        match self.rows.next() {
            Some(mut row) => {
                row.resize(self.ncols, Cell::Empty);
                Ok(Some(row))
            }
            None => Ok(None),
        }
    }
}
