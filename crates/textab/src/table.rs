//! The `LatexTable` facade: construction dispatch over the four input
//! kinds, configuration access, and one-shot rendering.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::cell::Cell;
use crate::config::TableConfig;
use crate::error::{Result, SourceError};
use crate::render;
use crate::source::{
    CsvOptions, CsvSource, Frame, FrameOptions, FrameSource, MatrixSource, RowSource, RowsSource,
};

/// The four input kinds a table can be built from.
///
/// This is the tagged union behind [`LatexTable::from_data`]; pick the
/// variant matching your data, or use the per-source constructors when
/// you need non-default options.
#[derive(Clone, Debug)]
pub enum TableData {
    /// Path to a delimited text file.
    CsvPath(PathBuf),
    /// An in-memory numeric grid.
    Matrix(Vec<Vec<f64>>),
    /// A labeled table.
    Frame(Frame),
    /// A literal list of rows.
    Rows(Vec<Vec<Cell>>),
}

#[derive(Debug)]
enum SourceKind {
    Csv(CsvSource),
    Matrix(MatrixSource),
    Frame(FrameSource),
    Rows(RowsSource),
}

impl RowSource for SourceKind {
    fn next_row(&mut self) -> std::result::Result<Option<Vec<Cell>>, SourceError> {
        match self {
            SourceKind::Csv(source) => source.next_row(),
            SourceKind::Matrix(source) => source.next_row(),
            SourceKind::Frame(source) => source.next_row(),
            SourceKind::Rows(source) => source.next_row(),
        }
    }
}

/// One table conversion: a configuration plus the row source feeding it.
///
/// The source is single-pass, so rendering consumes the table.
///
/// # Example
///
/// ```rust
/// use textab::{Cell, LatexTable};
///
/// let rows = vec![
///     vec![Cell::from("a"), Cell::from("b")],
///     vec![Cell::from(1), Cell::from(2)],
/// ];
/// let mut table = LatexTable::from_rows(rows, true)?;
/// table.config_mut().set_header_bold(true);
/// let latex = table.to_latex()?;
/// assert!(latex.starts_with("\\begin{tabular}{cc}\n"));
/// # Ok::<(), textab::TableError>(())
/// ```
#[derive(Debug)]
pub struct LatexTable {
    config: TableConfig,
    source: SourceKind,
}

impl LatexTable {
    /// Construct the adapter matching the input kind, with default
    /// options.
    ///
    /// A delimited file opened this way has no declared width and no
    /// header row, so `CsvPath` fails here with a configuration error;
    /// use [`from_csv`](Self::from_csv) to supply either.
    pub fn from_data(data: TableData) -> Result<Self> {
        match data {
            TableData::CsvPath(path) => Self::from_csv(path, CsvOptions::default()),
            TableData::Matrix(grid) => Self::from_matrix(grid),
            TableData::Frame(frame) => Self::from_frame(frame, FrameOptions::default()),
            TableData::Rows(rows) => Self::from_rows(rows, false),
        }
    }

    /// A table over a delimited text file.
    ///
    /// Headers derived from the file (when `options.has_header`) are
    /// installed on the configuration.
    pub fn from_csv(path: impl AsRef<Path>, options: CsvOptions) -> Result<Self> {
        let source = CsvSource::open(path, options)?;
        let mut config = TableConfig::new(source.ncols())?;
        if let Some(headers) = source.headers() {
            config.set_headers(headers.to_vec())?;
        }
        Ok(LatexTable {
            config,
            source: SourceKind::Csv(source),
        })
    }

    /// A table over an in-memory numeric grid.
    pub fn from_matrix(grid: Vec<Vec<f64>>) -> Result<Self> {
        let source = MatrixSource::new(grid)?;
        let config = TableConfig::new(source.ncols())?;
        Ok(LatexTable {
            config,
            source: SourceKind::Matrix(source),
        })
    }

    /// A table over a labeled frame.
    ///
    /// With `include_index` (the default) the row label becomes a
    /// synthetic first column, rendered by the options' independent
    /// index formatter, and the header list gains a leading empty cell.
    /// Explicit headers may cover all columns or just the data columns.
    pub fn from_frame(frame: Frame, options: FrameOptions) -> Result<Self> {
        let FrameOptions {
            include_index,
            include_headers,
            headers,
            index_formatter,
        } = options;
        let data_cols = frame.ncols();
        let ncols = data_cols + usize::from(include_index);
        let mut config = TableConfig::new(ncols)?;
        let headers = match headers {
            Some(mut given) => {
                if include_index && given.len() == data_cols {
                    given.insert(0, String::new());
                }
                given
            }
            None => {
                let mut derived = frame.columns().to_vec();
                if include_index {
                    derived.insert(0, String::new());
                }
                derived
            }
        };
        config.set_headers(headers)?;
        config.set_include_headers(include_headers);
        let source = FrameSource::new(frame, include_index, index_formatter);
        Ok(LatexTable {
            config,
            source: SourceKind::Frame(source),
        })
    }

    /// A table over a literal list of rows, optionally consuming the
    /// first row as the header.
    pub fn from_rows(rows: Vec<Vec<Cell>>, has_header: bool) -> Result<Self> {
        let source = RowsSource::new(rows, has_header)?;
        let mut config = TableConfig::new(source.ncols())?;
        if let Some(headers) = source.headers() {
            config.set_headers(headers.to_vec())?;
        }
        Ok(LatexTable {
            config,
            source: SourceKind::Rows(source),
        })
    }

    /// The table's configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Mutable access to the configuration. All setters must run before
    /// rendering starts; the render methods take the table by value, so
    /// the type system enforces that.
    pub fn config_mut(&mut self) -> &mut TableConfig {
        &mut self.config
    }

    /// Render into any sink, consuming the table.
    pub fn render<W: Write>(self, sink: &mut W) -> Result<()> {
        let LatexTable { config, source } = self;
        render::render(&config, source, sink)
    }

    /// Render into an owned string, consuming the table.
    pub fn to_latex(self) -> Result<String> {
        let LatexTable { config, source } = self;
        render::render_to_string(&config, source)
    }

    /// Render into a file (buffered), consuming the table.
    pub fn write_to(self, path: impl AsRef<Path>) -> Result<()> {
        let LatexTable { config, source } = self;
        let file = File::create(path)?;
        let mut sink = BufWriter::new(file);
        render::render(&config, source, &mut sink)?;
        sink.flush()?;
        Ok(())
    }
}
