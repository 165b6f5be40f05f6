//! Cell values and per-column formatters.
//!
//! The four row sources produce differently-typed raw cells: delimited
//! text yields strings, numeric grids yield floats, labeled tables and
//! row lists carry a mix. [`Cell`] is the common currency they all hand
//! to the rendering engine, and [`Formatter`] turns one cell into the
//! text that lands in the output.

use std::fmt;
use std::sync::Arc;

use crate::markup;

/// One raw value occupying one column of one row.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    /// Text content, emitted verbatim by the default formatter.
    Text(String),
    /// Integer content.
    Int(i64),
    /// Floating-point content.
    Float(f64),
    /// A padding cell; renders as the empty string.
    Empty,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Int(v) => write!(f, "{}", v),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Empty => Ok(()),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Float(v)
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Int(v)
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Cell::Int(v.into())
    }
}

impl From<usize> for Cell {
    fn from(v: usize) -> Self {
        Cell::Int(v as i64)
    }
}

/// A unary cell-to-text function applied to one column's values.
///
/// Formatters are cheap to clone and share. The default formatter is
/// plain [`Display`](fmt::Display) conversion.
///
/// # Example
///
/// ```rust
/// use textab::{Cell, Formatter};
///
/// let two_places = Formatter::fixed(2);
/// assert_eq!(two_places.apply(&Cell::Float(3.14159)), "3.14");
///
/// let bold = Formatter::fixed(2).bolded();
/// assert_eq!(bold.apply(&Cell::Float(1.0)), "\\textbf{1.00}");
/// ```
#[derive(Clone)]
pub struct Formatter(Arc<dyn Fn(&Cell) -> String + Send + Sync>);

impl Formatter {
    /// Wrap an arbitrary cell-to-text function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Cell) -> String + Send + Sync + 'static,
    {
        Formatter(Arc::new(f))
    }

    /// Plain `Display` conversion, the default for every column.
    pub fn display() -> Self {
        Formatter::new(|cell| cell.to_string())
    }

    /// Fixed-point numeric rendering with the given number of decimals.
    ///
    /// Text cells are parsed as `f64` when possible and passed through
    /// unchanged otherwise; empty cells stay empty.
    pub fn fixed(precision: usize) -> Self {
        Formatter::new(move |cell| match cell {
            Cell::Float(v) => format!("{:.*}", precision, v),
            Cell::Int(v) => format!("{:.*}", precision, *v as f64),
            Cell::Text(s) => match s.trim().parse::<f64>() {
                Ok(v) => format!("{:.*}", precision, v),
                Err(_) => s.clone(),
            },
            Cell::Empty => String::new(),
        })
    }

    /// Wrap this formatter's output in `\textbf{...}`.
    pub fn bolded(self) -> Self {
        Formatter::new(move |cell| markup::bold(&(self.0)(cell)))
    }

    /// Apply the formatter to one cell.
    pub fn apply(&self, cell: &Cell) -> String {
        (self.0)(cell)
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::display()
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Formatter(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_display() {
        assert_eq!(Cell::Text("abc".into()).to_string(), "abc");
        assert_eq!(Cell::Int(-7).to_string(), "-7");
        assert_eq!(Cell::Float(2.5).to_string(), "2.5");
        assert_eq!(Cell::Empty.to_string(), "");
    }

    #[test]
    fn cell_from_impls() {
        assert_eq!(Cell::from("x"), Cell::Text("x".into()));
        assert_eq!(Cell::from(3i32), Cell::Int(3));
        assert_eq!(Cell::from(4usize), Cell::Int(4));
        assert_eq!(Cell::from(1.5f64), Cell::Float(1.5));
    }

    #[test]
    fn display_formatter_is_default() {
        let fmt = Formatter::default();
        assert_eq!(fmt.apply(&Cell::Int(42)), "42");
    }

    #[test]
    fn fixed_formatter_rounds_floats() {
        let fmt = Formatter::fixed(2);
        assert_eq!(fmt.apply(&Cell::Float(3.14159)), "3.14");
        assert_eq!(fmt.apply(&Cell::Int(5)), "5.00");
    }

    #[test]
    fn fixed_formatter_parses_text() {
        let fmt = Formatter::fixed(1);
        assert_eq!(fmt.apply(&Cell::Text(" 2.75 ".into())), "2.8");
        assert_eq!(fmt.apply(&Cell::Text("n/a".into())), "n/a");
        assert_eq!(fmt.apply(&Cell::Empty), "");
    }

    #[test]
    fn bolded_wraps_inner_output() {
        let fmt = Formatter::display().bolded();
        assert_eq!(fmt.apply(&Cell::Text("a".into())), "\\textbf{a}");
    }

    #[test]
    fn formatters_clone_and_share() {
        let fmt = Formatter::fixed(0);
        let copy = fmt.clone();
        assert_eq!(fmt.apply(&Cell::Float(9.9)), copy.apply(&Cell::Float(9.9)));
    }
}
