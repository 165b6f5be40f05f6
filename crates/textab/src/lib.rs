//! # textab: LaTeX table rendering from tabular data sources
//!
//! `textab` converts tabular data into `tabular`/`longtable` LaTeX
//! markup: delimited text files, in-memory numeric grids, labeled
//! tables, and literal row lists all stream through one rendering
//! engine, so the markup is byte-identical regardless of where the rows
//! came from.
//!
//! ## Core Concepts
//!
//! - [`TableConfig`]: per-table settings (column layout, vertical and
//!   horizontal rules, headers, per-column [`Formatter`]s, environment).
//! - [`RowSource`]: the capability the engine consumes; implemented by
//!   [`CsvSource`], [`MatrixSource`], [`FrameSource`], [`RowsSource`].
//! - [`LatexTable`]: the facade tying a configuration to a source, with
//!   [`TableData`] as the construction dispatch union.
//! - [`render`] / [`render_to_string`]: the engine itself, usable
//!   directly with any `RowSource` implementation.
//!
//! ## Quick Start
//!
//! ```rust
//! use textab::{Align, Cell, ColumnRules, LatexTable, RowRule, RowRules};
//!
//! let rows = vec![
//!     vec![Cell::from("A"), Cell::from("B"), Cell::from("C")],
//!     vec![Cell::from(1), Cell::from(2), Cell::from(3)],
//!     vec![Cell::from(4), Cell::from(5), Cell::from(6)],
//! ];
//! let mut table = LatexTable::from_rows(rows, true)?;
//! let config = table.config_mut();
//! config.set_columns([Align::Left, Align::Center, Align::Right])?;
//! config.set_column_rules(ColumnRules::All)?;
//! config.set_header_bold(true);
//! config.set_row_rules(RowRules::At(vec![RowRule::End]));
//!
//! let latex = table.to_latex()?;
//! assert!(latex.starts_with("\\begin{tabular}{|l|c|r|}\n"));
//! assert!(latex.ends_with("\\hline\n\\end{tabular}"));
//! # Ok::<(), textab::TableError>(())
//! ```
//!
//! ## Separator semantics
//!
//! Vertical rules occupy `ncols + 1` positions, position 0 left of the
//! first column. Horizontal rules around the header and between data
//! rows are configured independently; repeating a position doubles the
//! rule, and the [`RowRule::End`] sentinel draws one rule after the
//! final row no matter how many rows the source turns out to produce.

pub mod cell;
pub mod config;
pub mod error;
mod markup;
pub mod render;
pub mod source;
pub mod table;

pub use cell::{Cell, Formatter};
pub use config::{
    Align, ColumnLayout, ColumnRules, ColumnSpec, Environment, HeaderRule, HeaderRules, RowRule,
    RowRules, TableConfig, VerticalRule,
};
pub use error::{ConfigError, Result, SourceError, TableError};
pub use render::{render, render_to_string};
pub use source::{
    CsvOptions, CsvSource, Frame, FrameOptions, FrameSource, MatrixSource, RowSource, RowsSource,
};
pub use table::{LatexTable, TableData};
