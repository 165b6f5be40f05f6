//! The rendering engine: one streaming pass from any row source to any
//! output sink.
//!
//! The engine owns no source-specific behavior. It resolves the column
//! alignment string, emits the opening declaration, the optional header
//! block, one formatted line per data row with the configured horizontal
//! rules interleaved, and the closing declaration. Two sources that
//! stream the same rows under the same configuration produce
//! byte-identical markup.

use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::cell::Cell;
use crate::config::{RowRule, RowRules, TableConfig};
use crate::error::Result;
use crate::markup;
use crate::source::RowSource;

/// Row rules resolved into a lookup the streaming loop can consult
/// without lookahead.
enum ResolvedRowRules {
    All,
    None,
    At {
        /// Rule count after each flagged row index.
        counts: BTreeMap<usize, usize>,
        /// Whether one rule fires after the final row.
        end: bool,
    },
}

impl ResolvedRowRules {
    fn resolve(rules: &RowRules) -> Self {
        match rules {
            RowRules::All => ResolvedRowRules::All,
            RowRules::None => ResolvedRowRules::None,
            RowRules::At(list) => {
                let mut counts = BTreeMap::new();
                let mut end = false;
                for rule in list {
                    match rule {
                        RowRule::After(index) => *counts.entry(*index).or_insert(0) += 1,
                        // The sentinel fires at most once, however often
                        // it is listed.
                        RowRule::End => end = true,
                    }
                }
                ResolvedRowRules::At { counts, end }
            }
        }
    }

    fn lines_after(&self, index: usize) -> usize {
        match self {
            ResolvedRowRules::All => 1,
            ResolvedRowRules::None => 0,
            ResolvedRowRules::At { counts, .. } => counts.get(&index).copied().unwrap_or(0),
        }
    }

    fn end_line(&self) -> bool {
        // `All` already separated the last row; `None` suppresses the
        // sentinel outright.
        matches!(self, ResolvedRowRules::At { end: true, .. })
    }
}

/// Render one table: stream `source` through `config` into `sink`.
///
/// The source is consumed. On a streaming error, everything written so
/// far stays in the sink; there is no rollback.
pub fn render<S, W>(config: &TableConfig, mut source: S, sink: &mut W) -> Result<()>
where
    S: RowSource,
    W: Write,
{
    writeln!(
        sink,
        "\\begin{{{}}}{{{}}}",
        config.environment().name(),
        config.column_spec_string()
    )?;

    if config.include_headers() {
        if let Some(headers) = config.headers() {
            let (above, below) = config.header_rule_counts();
            for _ in 0..above {
                sink.write_all(markup::HLINE.as_bytes())?;
            }
            let cells: Vec<String> = if config.header_bold() {
                headers.iter().map(|h| markup::bold(h)).collect()
            } else {
                headers.to_vec()
            };
            sink.write_all(cells.join(markup::CELL_SEP).as_bytes())?;
            sink.write_all(markup::ROW_END.as_bytes())?;
            for _ in 0..below {
                sink.write_all(markup::HLINE.as_bytes())?;
            }
        }
    }

    let rules = ResolvedRowRules::resolve(config.row_rules());
    let formatters = config.formatters();
    let mut index = 0usize;
    while let Some(row) = source.next_row()? {
        let mut line = String::new();
        for (i, formatter) in formatters.iter().enumerate() {
            if i > 0 {
                line.push_str(markup::CELL_SEP);
            }
            let formatted = match row.get(i) {
                Some(cell) => formatter.apply(cell),
                None => formatter.apply(&Cell::Empty),
            };
            line.push_str(&formatted);
        }
        line.push_str(markup::ROW_END);
        sink.write_all(line.as_bytes())?;
        for _ in 0..rules.lines_after(index) {
            sink.write_all(markup::HLINE.as_bytes())?;
        }
        index += 1;
    }

    if rules.end_line() {
        sink.write_all(markup::HLINE.as_bytes())?;
    }

    write!(sink, "\\end{{{}}}", config.environment().name())?;
    Ok(())
}

/// Render one table into an owned string.
pub fn render_to_string<S>(config: &TableConfig, source: S) -> Result<String>
where
    S: RowSource,
{
    let mut buf = Vec::new();
    render(config, source, &mut buf)?;
    String::from_utf8(buf)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err).into())
}
