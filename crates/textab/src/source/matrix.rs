//! Row source over an in-memory numeric grid.

use crate::cell::Cell;
use crate::error::{ConfigError, SourceError};
use crate::source::RowSource;

/// Streams a two-dimensional numeric grid.
///
/// The column count is fixed by the first row. The grid is strict: any
/// row whose width differs is a [`SourceError::RowWidth`], raised while
/// streaming.
#[derive(Debug)]
pub struct MatrixSource {
    rows: std::vec::IntoIter<Vec<f64>>,
    ncols: usize,
    row: usize,
}

impl MatrixSource {
    /// Wrap a grid. An empty grid (or an empty first row) has no
    /// columns and is rejected.
    pub fn new(grid: Vec<Vec<f64>>) -> Result<Self, ConfigError> {
        let ncols = grid.first().map(Vec::len).unwrap_or(0);
        if ncols == 0 {
            return Err(ConfigError::NoColumns);
        }
        Ok(MatrixSource {
            rows: grid.into_iter(),
            ncols,
            row: 0,
        })
    }

    /// Column count, known up front.
    pub fn ncols(&self) -> usize {
        self.ncols
    }
}

impl RowSource for MatrixSource {
    fn next_row(&mut self) -> Result<Option<Vec<Cell>>, SourceError> {
        let row = match self.rows.next() {
            Some(row) => row,
            None => return Ok(None),
        };
        if row.len() != self.ncols {
            return Err(SourceError::RowWidth {
                row: self.row,
                expected: self.ncols,
                got: row.len(),
            });
        }
        self.row += 1;
        Ok(Some(row.into_iter().map(Cell::Float).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streams_rows_as_floats() {
        let mut source = MatrixSource::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(
            source.next_row().unwrap(),
            Some(vec![Cell::Float(1.0), Cell::Float(2.0)])
        );
        assert_eq!(
            source.next_row().unwrap(),
            Some(vec![Cell::Float(3.0), Cell::Float(4.0)])
        );
        assert_eq!(source.next_row().unwrap(), None);
    }

    #[test]
    fn empty_grid_has_no_columns() {
        assert!(matches!(
            MatrixSource::new(vec![]),
            Err(ConfigError::NoColumns)
        ));
        assert!(matches!(
            MatrixSource::new(vec![vec![]]),
            Err(ConfigError::NoColumns)
        ));
    }

    #[test]
    fn ragged_row_is_a_width_error() {
        let mut source = MatrixSource::new(vec![vec![1.0, 2.0], vec![3.0]]).unwrap();
        source.next_row().unwrap();
        let err = source.next_row().unwrap_err();
        assert!(matches!(
            err,
            SourceError::RowWidth {
                row: 1,
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn too_wide_row_is_also_a_width_error() {
        let mut source = MatrixSource::new(vec![vec![1.0], vec![2.0, 3.0]]).unwrap();
        source.next_row().unwrap();
        assert!(matches!(
            source.next_row().unwrap_err(),
            SourceError::RowWidth { got: 2, .. }
        ));
    }
}
