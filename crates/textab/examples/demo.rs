//! Generate a CSV file, configure a table over it, and write the LaTeX
//! result next to it.

use std::error::Error;

use textab::{CsvOptions, Formatter, LatexTable, RowRule, RowRules, VerticalRule};

fn main() -> Result<(), Box<dyn Error>> {
    let dir = std::env::temp_dir();
    let csv_path = dir.join("textab-demo.csv");
    let tex_path = dir.join("textab-demo.tex");

    let header: Vec<String> = (0..6).map(|i| format!("$x_{}$", i)).collect();
    let mut lines = vec![format!("#{}", header.join(","))];
    for row in 0..8 {
        let cells: Vec<String> = (0..6)
            .map(|col| format!("{}", (row * 6 + col) as f64 / 3.0))
            .collect();
        lines.push(cells.join(","));
    }
    std::fs::write(&csv_path, lines.join("\n"))?;

    let mut table = LatexTable::from_csv(&csv_path, CsvOptions::default().has_header(true))?;
    let config = table.config_mut();
    config.set_formatter_all(Formatter::fixed(2));
    config.set_formatter(0, Formatter::fixed(2).bolded())?;
    config.set_column_rule(0, VerticalRule::Single)?;
    config.set_column_rule(1, VerticalRule::Double)?;
    config.set_column_rule(-1, VerticalRule::Single)?;
    config.set_row_rules(RowRules::At(vec![RowRule::End]));
    config.set_header_bold(true);

    table.write_to(&tex_path)?;
    println!("wrote {}", tex_path.display());
    Ok(())
}
