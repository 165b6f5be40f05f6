//! Row source over a delimited text file.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};

use crate::cell::Cell;
use crate::error::{ConfigError, SourceError, TableError};
use crate::source::RowSource;

/// Options for opening a delimited text file.
///
/// The column count must be discoverable: either `has_header` (the
/// first record is the header list and fixes the width) or an explicit
/// `ncols`. Giving both is allowed as long as they agree.
#[derive(Clone, Copy, Debug)]
pub struct CsvOptions {
    delimiter: u8,
    has_header: bool,
    ncols: Option<usize>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions {
            delimiter: b',',
            has_header: false,
            ncols: None,
        }
    }
}

impl CsvOptions {
    /// Field delimiter, `b','` by default.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Treat the first record as the header list.
    pub fn has_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Declare the column count explicitly.
    pub fn ncols(mut self, ncols: usize) -> Self {
        self.ncols = Some(ncols);
        self
    }
}

/// Streams records from a delimited text file.
///
/// The reader owns the underlying [`File`]; dropping the source on any
/// exit path releases the descriptor. Records shorter than the column
/// count are [`SourceError::RowWidth`]; longer records keep their extra
/// fields, which the engine ignores.
pub struct CsvSource {
    records: StringRecordsIntoIter<File>,
    ncols: usize,
    headers: Option<Vec<String>>,
    row: usize,
}

impl std::fmt::Debug for CsvSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsvSource")
            .field("ncols", &self.ncols)
            .field("headers", &self.headers)
            .field("row", &self.row)
            .finish_non_exhaustive()
    }
}

impl CsvSource {
    /// Open a delimited text file.
    ///
    /// With `has_header`, the header list is read immediately and a
    /// single leading `#` comment marker is stripped from its first
    /// field. Fails with a [`ConfigError`] when the width cannot be
    /// established (or is declared inconsistently) and with an I/O
    /// error when the file cannot be opened.
    pub fn open(path: impl AsRef<Path>, options: CsvOptions) -> Result<Self, TableError> {
        if !options.has_header && options.ncols.is_none() {
            return Err(ConfigError::UnknownWidth.into());
        }
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(options.delimiter)
            .from_reader(file);

        let (ncols, headers) = if options.has_header {
            let mut record = StringRecord::new();
            let got = reader.read_record(&mut record).map_err(SourceError::from)?;
            if !got {
                return Err(SourceError::MissingHeader.into());
            }
            let mut headers: Vec<String> = record.iter().map(str::to_string).collect();
            if let Some(first) = headers.first_mut() {
                if let Some(stripped) = first.strip_prefix('#') {
                    *first = stripped.to_string();
                }
            }
            let derived = headers.len();
            if let Some(declared) = options.ncols {
                if declared != derived {
                    return Err(ConfigError::WidthDisagreement { declared, derived }.into());
                }
            }
            (derived, Some(headers))
        } else {
            // Checked above: without a header row, ncols is present.
            match options.ncols {
                Some(ncols) => (ncols, None),
                None => return Err(ConfigError::UnknownWidth.into()),
            }
        };

        Ok(CsvSource {
            records: reader.into_records(),
            ncols,
            headers,
            row: 0,
        })
    }

    /// Column count, derived from the header or declared up front.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Headers derived from the first record, when requested.
    pub fn headers(&self) -> Option<&[String]> {
        self.headers.as_deref()
    }
}

impl RowSource for CsvSource {
    fn next_row(&mut self) -> Result<Option<Vec<Cell>>, SourceError> {
        let record = match self.records.next() {
            Some(record) => record?,
            None => return Ok(None),
        };
        if record.len() < self.ncols {
            return Err(SourceError::RowWidth {
                row: self.row,
                expected: self.ncols,
                got: record.len(),
            });
        }
        self.row += 1;
        Ok(Some(
            record.iter().map(|field| Cell::Text(field.to_string())).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn width_must_be_discoverable() {
        let file = write_csv("1,2\n");
        let err = CsvSource::open(file.path(), CsvOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            TableError::Config(ConfigError::UnknownWidth)
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = CsvSource::open(
            "/definitely/not/here.csv",
            CsvOptions::default().ncols(2),
        )
        .unwrap_err();
        assert!(matches!(err, TableError::Io(_)));
    }

    #[test]
    fn header_row_fixes_the_width() {
        let file = write_csv("a,b,c\n1,2,3\n");
        let source = CsvSource::open(file.path(), CsvOptions::default().has_header(true)).unwrap();
        assert_eq!(source.ncols(), 3);
        assert_eq!(source.headers().unwrap(), ["a", "b", "c"]);
    }

    #[test]
    fn leading_comment_marker_is_stripped_from_the_first_header() {
        let file = write_csv("#a,b\n1,2\n");
        let source = CsvSource::open(file.path(), CsvOptions::default().has_header(true)).unwrap();
        assert_eq!(source.headers().unwrap(), ["a", "b"]);
    }

    #[test]
    fn declared_and_derived_widths_must_agree() {
        let file = write_csv("a,b\n1,2\n");
        let err = CsvSource::open(
            file.path(),
            CsvOptions::default().has_header(true).ncols(3),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TableError::Config(ConfigError::WidthDisagreement {
                declared: 3,
                derived: 2
            })
        ));
    }

    #[test]
    fn empty_file_cannot_supply_a_header() {
        let file = write_csv("");
        let err = CsvSource::open(file.path(), CsvOptions::default().has_header(true)).unwrap_err();
        assert!(matches!(
            err,
            TableError::Source(SourceError::MissingHeader)
        ));
    }

    #[test]
    fn rows_stream_as_text_cells() {
        let file = write_csv("1,2\n3,4\n");
        let mut source =
            CsvSource::open(file.path(), CsvOptions::default().ncols(2)).unwrap();
        assert_eq!(
            source.next_row().unwrap(),
            Some(vec![Cell::from("1"), Cell::from("2")])
        );
        assert_eq!(
            source.next_row().unwrap(),
            Some(vec![Cell::from("3"), Cell::from("4")])
        );
        assert_eq!(source.next_row().unwrap(), None);
    }

    #[test]
    fn short_record_is_a_width_error() {
        let file = write_csv("1,2\n3\n");
        let mut source =
            CsvSource::open(file.path(), CsvOptions::default().ncols(2)).unwrap();
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
    fn long_record_keeps_its_extra_fields() {
        let file = write_csv("1,2,3\n");
        let mut source =
            CsvSource::open(file.path(), CsvOptions::default().ncols(2)).unwrap();
        let row = source.next_row().unwrap().unwrap();
        assert_eq!(row.len(), 3);
    }

    #[test]
    fn alternate_delimiter() {
        let file = write_csv("a;b\n1;2\n");
        let source = CsvSource::open(
            file.path(),
            CsvOptions::default().has_header(true).delimiter(b';'),
        )
        .unwrap();
        assert_eq!(source.headers().unwrap(), ["a", "b"]);
    }
}
