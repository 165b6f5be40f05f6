//! Per-table configuration: column layout, separator rules, headers,
//! and formatters.
//!
//! A [`TableConfig`] is built once per conversion, mutated through its
//! setters before rendering begins, and read-only while the engine runs.
//! Every setter validates eagerly; a bad length or index fails at the
//! call site, never at render time.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cell::Formatter;
use crate::error::ConfigError;

/// Text alignment for one column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// `l` in the column spec.
    Left,
    /// `c` in the column spec.
    #[default]
    Center,
    /// `r` in the column spec.
    Right,
}

impl Align {
    fn token(&self) -> &'static str {
        match self {
            Align::Left => "l",
            Align::Center => "c",
            Align::Right => "r",
        }
    }
}

/// One column's spec token: an alignment, or a raw LaTeX column type
/// such as `p{3cm}` passed through verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnSpec {
    Align(Align),
    Literal(String),
}

impl ColumnSpec {
    fn token(&self) -> &str {
        match self {
            ColumnSpec::Align(align) => align.token(),
            ColumnSpec::Literal(s) => s,
        }
    }
}

impl From<Align> for ColumnSpec {
    fn from(align: Align) -> Self {
        ColumnSpec::Align(align)
    }
}

impl From<&str> for ColumnSpec {
    fn from(s: &str) -> Self {
        match s {
            "left" => ColumnSpec::Align(Align::Left),
            "center" => ColumnSpec::Align(Align::Center),
            "right" => ColumnSpec::Align(Align::Right),
            other => ColumnSpec::Literal(other.to_string()),
        }
    }
}

/// The table's column layout: either one literal spec string used
/// verbatim, or one [`ColumnSpec`] per column.
///
/// A literal layout bypasses per-column vertical rule rendering
/// entirely; the string is emitted as given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnLayout {
    Literal(String),
    Columns(Vec<ColumnSpec>),
}

/// A vertical rule between (or outside) columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalRule {
    /// No rule.
    #[default]
    None,
    /// A single line, `|`.
    Single,
    /// A double line, `||`.
    Double,
}

impl VerticalRule {
    fn as_str(&self) -> &'static str {
        match self {
            VerticalRule::None => "",
            VerticalRule::Single => "|",
            VerticalRule::Double => "||",
        }
    }
}

/// Spec for the full set of `ncols + 1` vertical rule positions.
///
/// Position 0 sits left of the first column and position `ncols` right
/// of the last. `At` positions may be negative to address from the
/// right, `-1` being the outermost right rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnRules {
    /// A single rule at every position.
    All,
    /// No rules anywhere.
    None,
    /// Single rules at the listed positions, all others cleared.
    At(Vec<isize>),
    /// The full rule list, one entry per position.
    Explicit(Vec<VerticalRule>),
}

/// A horizontal rule position relative to the header line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderRule {
    Above,
    Below,
}

/// Where horizontal rules go around the header line.
///
/// `Lines` lists positions explicitly; repeating a position doubles the
/// rule, so `[Above, Below, Below]` draws one line above the header and
/// two below it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HeaderRules {
    Above,
    Below,
    #[default]
    Both,
    Lines(Vec<HeaderRule>),
}

impl HeaderRules {
    /// Rule counts as `(above, below)`.
    pub fn counts(&self) -> (usize, usize) {
        match self {
            HeaderRules::Above => (1, 0),
            HeaderRules::Below => (0, 1),
            HeaderRules::Both => (1, 1),
            HeaderRules::Lines(lines) => {
                let above = lines.iter().filter(|r| **r == HeaderRule::Above).count();
                (above, lines.len() - above)
            }
        }
    }
}

impl FromStr for HeaderRules {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "above" => Ok(HeaderRules::Above),
            "below" => Ok(HeaderRules::Below),
            "both" => Ok(HeaderRules::Both),
            other => Err(ConfigError::UnknownHeaderRules(other.to_string())),
        }
    }
}

/// A horizontal rule position relative to the data rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowRule {
    /// After the data row with this zero-based index.
    After(usize),
    /// After the final data row, whatever its index turns out to be.
    End,
}

/// Where horizontal rules go between data rows.
///
/// The engine resolves this lazily against the actual row count.
/// Within `At`, numeric positions honor list multiplicity (`After(2)`
/// twice draws a double rule after row 2), while `End` fires exactly
/// once no matter how often it is listed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RowRules {
    /// A rule after every data row, the last included.
    All,
    /// No rules between or after rows, ever.
    #[default]
    None,
    /// Rules at the listed positions only.
    At(Vec<RowRule>),
}

/// The table environment emitted around the rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Single-page `tabular`.
    #[default]
    Tabular,
    /// Page-breaking `longtable`.
    Longtable,
}

impl Environment {
    /// The environment name as it appears in `\begin{...}`.
    pub fn name(&self) -> &'static str {
        match self {
            Environment::Tabular => "tabular",
            Environment::Longtable => "longtable",
        }
    }
}

/// All per-table settings, shared by every source variant.
///
/// # Example
///
/// ```rust
/// use textab::{Align, ColumnRules, TableConfig};
///
/// let mut config = TableConfig::new(3)?;
/// config.set_columns([Align::Left, Align::Center, Align::Right])?;
/// config.set_column_rules(ColumnRules::All)?;
/// assert_eq!(config.column_spec_string(), "|l|c|r|");
/// # Ok::<(), textab::TableError>(())
/// ```
#[derive(Clone, Debug)]
pub struct TableConfig {
    ncols: usize,
    layout: Option<ColumnLayout>,
    column_rules: Option<Vec<VerticalRule>>,
    row_rules: RowRules,
    header_rules: HeaderRules,
    headers: Option<Vec<String>>,
    include_headers: bool,
    header_bold: bool,
    formatters: Vec<Formatter>,
    environment: Environment,
}

impl TableConfig {
    /// Create a configuration for a table with `ncols` columns.
    ///
    /// The column count is immutable afterwards; every length-checked
    /// setter validates against it.
    pub fn new(ncols: usize) -> Result<Self, ConfigError> {
        if ncols == 0 {
            return Err(ConfigError::NoColumns);
        }
        Ok(TableConfig {
            ncols,
            layout: None,
            column_rules: None,
            row_rules: RowRules::default(),
            header_rules: HeaderRules::default(),
            headers: None,
            include_headers: false,
            header_bold: false,
            formatters: vec![Formatter::display(); ncols],
            environment: Environment::default(),
        })
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Set one spec token per column. The sequence length must equal
    /// the column count.
    pub fn set_columns<I>(&mut self, columns: I) -> Result<(), ConfigError>
    where
        I: IntoIterator,
        I::Item: Into<ColumnSpec>,
    {
        let columns: Vec<ColumnSpec> = columns.into_iter().map(Into::into).collect();
        if columns.len() != self.ncols {
            return Err(ConfigError::ColumnCount {
                expected: self.ncols,
                got: columns.len(),
            });
        }
        self.layout = Some(ColumnLayout::Columns(columns));
        Ok(())
    }

    /// Use a literal alignment string verbatim, bypassing per-column
    /// vertical rule rendering.
    pub fn set_layout_literal(&mut self, spec: impl Into<String>) {
        self.layout = Some(ColumnLayout::Literal(spec.into()));
    }

    /// Set all `ncols + 1` vertical rule positions at once.
    pub fn set_column_rules(&mut self, rules: ColumnRules) -> Result<(), ConfigError> {
        let positions = self.ncols + 1;
        let resolved = match rules {
            ColumnRules::All => vec![VerticalRule::Single; positions],
            ColumnRules::None => vec![VerticalRule::None; positions],
            ColumnRules::At(indices) => {
                let mut list = vec![VerticalRule::None; positions];
                for index in indices {
                    list[self.resolve_rule_index(index)?] = VerticalRule::Single;
                }
                list
            }
            ColumnRules::Explicit(list) => {
                if list.len() != positions {
                    return Err(ConfigError::RuleCount {
                        expected: positions,
                        got: list.len(),
                    });
                }
                list
            }
        };
        self.column_rules = Some(resolved);
        Ok(())
    }

    /// Set a single vertical rule position. Negative indices address
    /// from the right, `-1` being the outermost right rule. Initializes
    /// all positions to no rule if none were configured yet.
    pub fn set_column_rule(&mut self, index: isize, rule: VerticalRule) -> Result<(), ConfigError> {
        let resolved = self.resolve_rule_index(index)?;
        let positions = self.ncols + 1;
        let rules = self
            .column_rules
            .get_or_insert_with(|| vec![VerticalRule::None; positions]);
        rules[resolved] = rule;
        Ok(())
    }

    fn resolve_rule_index(&self, index: isize) -> Result<usize, ConfigError> {
        let positions = self.ncols as isize + 1;
        let resolved = if index < 0 { index + positions } else { index };
        // ncols + 1 is accepted as an alias for the outermost right rule.
        let resolved = if resolved == positions { positions - 1 } else { resolved };
        if (0..positions).contains(&resolved) {
            Ok(resolved as usize)
        } else {
            Err(ConfigError::RuleIndex {
                index,
                ncols: self.ncols,
            })
        }
    }

    /// Set where horizontal rules go around the header line.
    pub fn set_header_rules(&mut self, rules: HeaderRules) {
        self.header_rules = rules;
    }

    /// Parse a header rule literal: `"above"`, `"below"`, or `"both"`.
    pub fn set_header_rules_named(&mut self, name: &str) -> Result<(), ConfigError> {
        self.header_rules = name.parse()?;
        Ok(())
    }

    /// Set where horizontal rules go between data rows.
    pub fn set_row_rules(&mut self, rules: RowRules) {
        self.row_rules = rules;
    }

    /// Set the header texts. The length must equal the column count;
    /// headers imply `include_headers`.
    pub fn set_headers<I>(&mut self, headers: I) -> Result<(), ConfigError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if headers.len() != self.ncols {
            return Err(ConfigError::HeaderCount {
                expected: self.ncols,
                got: headers.len(),
            });
        }
        self.headers = Some(headers);
        self.include_headers = true;
        Ok(())
    }

    /// Style header cells bold. Touches only the flag; header texts and
    /// their length are not required to be set.
    pub fn set_header_bold(&mut self, bold: bool) {
        self.header_bold = bold;
    }

    /// Turn the header line on or off. Ignored at render time when no
    /// header texts exist.
    pub fn set_include_headers(&mut self, include: bool) {
        self.include_headers = include;
    }

    /// Broadcast one formatter to every column.
    pub fn set_formatter_all(&mut self, formatter: Formatter) {
        self.formatters = vec![formatter; self.ncols];
    }

    /// Set one formatter per column. The length must equal the column
    /// count.
    pub fn set_formatters(&mut self, formatters: Vec<Formatter>) -> Result<(), ConfigError> {
        if formatters.len() != self.ncols {
            return Err(ConfigError::FormatterCount {
                expected: self.ncols,
                got: formatters.len(),
            });
        }
        self.formatters = formatters;
        Ok(())
    }

    /// Replace a single column's formatter.
    pub fn set_formatter(&mut self, index: usize, formatter: Formatter) -> Result<(), ConfigError> {
        if index >= self.ncols {
            return Err(ConfigError::FormatterIndex {
                index,
                ncols: self.ncols,
            });
        }
        self.formatters[index] = formatter;
        Ok(())
    }

    /// Switch between the single-page and page-breaking environments.
    pub fn set_continuous(&mut self, continuous: bool) {
        self.environment = if continuous {
            Environment::Longtable
        } else {
            Environment::Tabular
        };
    }

    /// Set the table environment directly.
    pub fn set_environment(&mut self, environment: Environment) {
        self.environment = environment;
    }

    /// The resolved alignment string for `\begin{...}{<here>}`.
    ///
    /// Literal layouts are used verbatim. Otherwise the per-column
    /// tokens are interleaved with the vertical rules, alignment
    /// defaulting to center and every rule to empty when unconfigured.
    pub fn column_spec_string(&self) -> String {
        if let Some(ColumnLayout::Literal(spec)) = &self.layout {
            return spec.clone();
        }
        let empty = vec![VerticalRule::None; self.ncols + 1];
        let rules = self.column_rules.as_deref().unwrap_or(&empty);
        let mut spec = String::new();
        spec.push_str(rules[0].as_str());
        for i in 0..self.ncols {
            match &self.layout {
                Some(ColumnLayout::Columns(columns)) => spec.push_str(columns[i].token()),
                _ => spec.push_str(Align::Center.token()),
            }
            spec.push_str(rules[i + 1].as_str());
        }
        spec
    }

    /// Header texts, if any were set or derived.
    pub fn headers(&self) -> Option<&[String]> {
        self.headers.as_deref()
    }

    /// Whether the header line is rendered (given header texts exist).
    pub fn include_headers(&self) -> bool {
        self.include_headers
    }

    /// Whether header cells are wrapped bold.
    pub fn header_bold(&self) -> bool {
        self.header_bold
    }

    /// Horizontal rule counts around the header as `(above, below)`.
    pub fn header_rule_counts(&self) -> (usize, usize) {
        self.header_rules.counts()
    }

    /// The configured row rule spec.
    pub fn row_rules(&self) -> &RowRules {
        &self.row_rules
    }

    /// The per-column formatters, one per column.
    pub fn formatters(&self) -> &[Formatter] {
        &self.formatters
    }

    /// The configured environment.
    pub fn environment(&self) -> Environment {
        self.environment
    }
}
