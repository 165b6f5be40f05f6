//! Row sources: the four adapters that feed the rendering engine.
//!
//! Each adapter turns one kind of input (a delimited text file, a
//! numeric grid, a labeled table, a literal list of rows) into the
//! single capability the engine consumes: an ordered, finite,
//! single-pass stream of [`Cell`](crate::Cell) rows. Header derivation
//! happens at adapter construction. Width policy is adapter-side:
//! strict sources fail on mismatched rows while streaming, the literal
//! list source pads instead.

mod csv;
mod frame;
mod matrix;
mod rows;

pub use self::csv::{CsvOptions, CsvSource};
pub use self::frame::{Frame, FrameOptions, FrameSource};
pub use self::matrix::MatrixSource;
pub use self::rows::RowsSource;

use crate::cell::Cell;
use crate::error::SourceError;

/// An ordered, finite, single-pass producer of raw rows.
///
/// Rows stream in original order; the engine calls [`next_row`] until
/// it returns `Ok(None)` and never rewinds. A row may carry more cells
/// than the table has columns (extras are ignored); whether a shorter
/// row is an error or gets padded is the producing adapter's policy.
///
/// [`next_row`]: RowSource::next_row
pub trait RowSource {
    /// Produce the next row, `Ok(None)` at the end of input.
    fn next_row(&mut self) -> Result<Option<Vec<Cell>>, SourceError>;
}
