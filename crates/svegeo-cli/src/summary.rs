use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use svegeo_model::{CheckResult, CheckStatus, FileReport};

use crate::types::CheckOutcome;

/// Print one file's section: a table with one row per check.
pub fn print_file_report(report: &FileReport) {
    println!();
    println!("{}", report.file_name);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Check"),
        header_cell("Status"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for check in &report.checks {
        table.add_row(vec![
            Cell::new(&check.label),
            status_cell(check),
            detail_cell(check),
        ]);
    }
    println!("{table}");
    println!("  {} data row(s)", report.rows);
}

/// Print the run summary table and the closing pass/fail line.
pub fn print_run_summary(outcome: &CheckOutcome) {
    println!();
    println!("Data directory: {}", outcome.data_dir.display());
    if let Some(path) = &outcome.report_json {
        println!("JSON report: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Rows"),
        header_cell("Checks"),
        header_cell("Failed"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    let mut total_checks = 0usize;
    let mut total_failed = 0usize;
    for report in &outcome.reports {
        total_checks += report.checks.len();
        total_failed += report.failed_count();
        table.add_row(vec![
            Cell::new(&report.file_name),
            Cell::new(report.rows),
            Cell::new(report.checks.len()),
            failed_cell(report.failed_count()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_checks).add_attribute(Attribute::Bold),
        failed_cell(total_failed).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    if total_failed == 0 {
        println!("All checks passed.");
    } else {
        println!("{total_failed} check(s) failed.");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(check: &CheckResult) -> Cell {
    match check.status {
        CheckStatus::Pass => Cell::new("PASS").fg(Color::Green),
        CheckStatus::Fail => Cell::new("FAIL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn detail_cell(check: &CheckResult) -> Cell {
    match check.detail.as_deref() {
        Some(detail) => Cell::new(detail),
        None => dim_cell("-"),
    }
}

fn failed_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
