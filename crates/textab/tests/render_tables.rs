//! End-to-end rendering through the public facade, one scenario per
//! source variant plus the documented separator edge cases.

use std::io::Write;

use textab::{
    Align, Cell, ColumnRules, CsvOptions, Formatter, Frame, FrameOptions, LatexTable, RowRule,
    RowRules, SourceError, TableError,
};

fn spec_example_rows() -> Vec<Vec<Cell>> {
    vec![
        vec![Cell::from("A"), Cell::from("B"), Cell::from("C")],
        vec![Cell::from(1), Cell::from(2), Cell::from(3)],
        vec![Cell::from(4), Cell::from(5), Cell::from(6)],
    ]
}

const SPEC_EXAMPLE: &str = "\\begin{tabular}{|l|c|r|}\n\\hline\n\\textbf{A} & \\textbf{B} & \\textbf{C}\\\\\n\\hline\n1 & 2 & 3\\\\\n4 & 5 & 6\\\\\n\\hline\n\\end{tabular}";

#[test]
fn bold_header_table_with_rules_renders_exactly() {
    let mut table = LatexTable::from_rows(spec_example_rows(), true).unwrap();
    let config = table.config_mut();
    config.set_columns(["l", "c", "r"]).unwrap();
    config.set_column_rules(ColumnRules::All).unwrap();
    config.set_header_bold(true);
    config.set_row_rules(RowRules::At(vec![RowRule::End]));
    assert_eq!(table.to_latex().unwrap(), SPEC_EXAMPLE);
}

#[test]
fn matrix_and_rows_sources_produce_identical_bytes() {
    let mut table =
        LatexTable::from_matrix(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    let config = table.config_mut();
    config.set_columns(["l", "c", "r"]).unwrap();
    config.set_column_rules(ColumnRules::All).unwrap();
    config.set_headers(["A", "B", "C"]).unwrap();
    config.set_header_bold(true);
    config.set_row_rules(RowRules::At(vec![RowRule::End]));
    assert_eq!(table.to_latex().unwrap(), SPEC_EXAMPLE);
}

#[test]
fn frame_rows_lead_with_the_formatted_index() {
    let mut frame = Frame::new(["x", "y"]);
    frame.push_row("a", [Cell::Int(1), Cell::Int(2)]).unwrap();
    frame.push_row("b", [Cell::Int(3), Cell::Int(4)]).unwrap();
    let table = LatexTable::from_frame(
        frame,
        FrameOptions::default().index_formatter(Formatter::display().bolded()),
    )
    .unwrap();
    let latex = table.to_latex().unwrap();
    assert!(latex.contains("\\textbf{a} & 1 & 2\\\\\n"));
    assert!(latex.contains("\\textbf{b} & 3 & 4\\\\\n"));
    assert!(latex.contains(" & x & y\\\\\n"));
}

#[test]
fn csv_file_renders_with_derived_headers_and_formatters() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"#x,y\n0.5,1.25\n2,3\n").unwrap();
    file.flush().unwrap();

    let mut table =
        LatexTable::from_csv(file.path(), CsvOptions::default().has_header(true)).unwrap();
    table.config_mut().set_formatter_all(Formatter::fixed(2));
    assert_eq!(
        table.to_latex().unwrap(),
        "\\begin{tabular}{cc}\n\\hline\nx & y\\\\\n\\hline\n0.50 & 1.25\\\\\n2.00 & 3.00\\\\\n\\end{tabular}"
    );
}

#[test]
fn csv_short_record_aborts_the_render_mid_stream() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"1,2\n3\n").unwrap();
    file.flush().unwrap();

    let table = LatexTable::from_csv(file.path(), CsvOptions::default().ncols(2)).unwrap();
    let mut sink = Vec::new();
    let err = table.render(&mut sink).unwrap_err();
    assert!(matches!(
        err,
        TableError::Source(SourceError::RowWidth { row: 1, .. })
    ));
    // Partial output stays in the sink; there is no rollback.
    let partial = String::from_utf8(sink).unwrap();
    assert!(partial.contains("1 & 2\\\\\n"));
}

#[test]
fn all_row_rules_separate_every_row() {
    let rows = vec![
        vec![Cell::Int(1), Cell::Int(2)],
        vec![Cell::Int(3), Cell::Int(4)],
    ];
    let mut table = LatexTable::from_rows(rows, false).unwrap();
    table.config_mut().set_row_rules(RowRules::All);
    let latex = table.to_latex().unwrap();
    let lines: Vec<&str> = latex.lines().collect();
    for (i, line) in lines.iter().enumerate() {
        if line.ends_with("\\\\") {
            assert_eq!(lines[i + 1], "\\hline");
        }
    }
}

#[test]
fn none_row_rules_never_separate() {
    let rows = vec![vec![Cell::Int(1)], vec![Cell::Int(2)]];
    let mut table = LatexTable::from_rows(rows, false).unwrap();
    table.config_mut().set_row_rules(RowRules::None);
    assert!(!table.to_latex().unwrap().contains("\\hline"));
}

#[test]
fn end_sentinel_fires_once_even_with_zero_data_rows() {
    let rows = vec![vec![Cell::from("h1"), Cell::from("h2")]];
    let mut table = LatexTable::from_rows(rows, true).unwrap();
    table
        .config_mut()
        .set_row_rules(RowRules::At(vec![RowRule::End]));
    assert_eq!(
        table.to_latex().unwrap(),
        "\\begin{tabular}{cc}\n\\hline\nh1 & h2\\\\\n\\hline\n\\hline\n\\end{tabular}"
    );
}

#[test]
fn short_literal_rows_render_with_trailing_empty_cells() {
    let rows = vec![
        vec![Cell::Int(1), Cell::Int(2), Cell::Int(3)],
        vec![Cell::Int(4)],
    ];
    let table = LatexTable::from_rows(rows, false).unwrap();
    let latex = table.to_latex().unwrap();
    assert!(latex.contains("4 &  & \\\\\n"));
}

#[test]
fn strict_sources_reject_width_mismatches() {
    let table = LatexTable::from_matrix(vec![vec![1.0, 2.0], vec![3.0]]).unwrap();
    let err = table.to_latex().unwrap_err();
    assert!(matches!(
        err,
        TableError::Source(SourceError::RowWidth { .. })
    ));
}

#[test]
fn longtable_environment_is_an_opaque_name_switch() {
    let rows = vec![vec![Cell::Int(1)]];
    let mut table = LatexTable::from_rows(rows, false).unwrap();
    table.config_mut().set_continuous(true);
    let latex = table.to_latex().unwrap();
    assert!(latex.starts_with("\\begin{longtable}{c}\n"));
    assert!(latex.ends_with("\\end{longtable}"));
}

#[test]
fn alignment_words_and_literals_mix_in_one_layout() {
    let rows = vec![vec![Cell::Int(1), Cell::Int(2), Cell::Int(3)]];
    let mut table = LatexTable::from_rows(rows, false).unwrap();
    table
        .config_mut()
        .set_columns::<[textab::ColumnSpec; 3]>([
            Align::Left.into(),
            "p{3cm}".into(),
            Align::Right.into(),
        ])
        .unwrap();
    assert!(table
        .to_latex()
        .unwrap()
        .starts_with("\\begin{tabular}{lp{3cm}r}\n"));
}
