//! Error types for table configuration and rendering.

use thiserror::Error;

/// Errors raised eagerly by configuration setters and source constructors.
///
/// Every variant is reported at the offending call, never deferred to
/// render time.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A table must have at least one column.
    #[error("table has no columns")]
    NoColumns,

    /// Per-column spec list does not match the column count.
    #[error("number of column specs ({got}) does not match number of columns ({expected})")]
    ColumnCount { expected: usize, got: usize },

    /// Header list does not match the column count.
    #[error("number of headers ({got}) does not match number of columns ({expected})")]
    HeaderCount { expected: usize, got: usize },

    /// Formatter list does not match the column count.
    #[error("number of formatters ({got}) does not match number of columns ({expected})")]
    FormatterCount { expected: usize, got: usize },

    /// Single-column formatter index out of range.
    #[error("formatter index {index} is out of range for {ncols} columns")]
    FormatterIndex { index: usize, ncols: usize },

    /// Explicit vertical rule list must cover ncols + 1 positions.
    #[error("expected {expected} column rules, got {got}")]
    RuleCount { expected: usize, got: usize },

    /// Vertical rule position outside 0..=ncols (after index resolution).
    #[error("column rule index {index} is out of range for {ncols} columns")]
    RuleIndex { index: isize, ncols: usize },

    /// Header rule spec literal was not one of "above", "below", "both".
    #[error("unknown header rule spec '{0}', expected 'above', 'below', or 'both'")]
    UnknownHeaderRules(String),

    /// Delimited input needs either a header row or an explicit column count.
    #[error("either a header row or an explicit column count is required")]
    UnknownWidth,

    /// Declared column count and header-derived count disagree.
    #[error("declared column count ({declared}) does not match number of headers ({derived})")]
    WidthDisagreement { declared: usize, derived: usize },
}

/// Errors raised while streaming rows out of a source.
///
/// By the time one of these surfaces, partial output may already have been
/// written to the sink; there is no rollback.
#[derive(Debug, Error)]
pub enum SourceError {
    /// A strict-width source produced a row of the wrong width.
    #[error("row {row} has {got} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// A header row was requested but the input has no records.
    #[error("header row requested but the input has no records")]
    MissingHeader,

    /// The underlying delimited-text reader failed.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Top-level error for a table conversion.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("invalid table configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("table source failed: {0}")]
    Source(#[from] SourceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
