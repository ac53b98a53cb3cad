//! Per-column checks over parsed data rows. Data rows are 1-indexed from
//! line 2; line 1 is the header.

use std::collections::BTreeMap;

use svegeo_ingest::CsvTable;
use svegeo_model::CheckResult;

use super::{ROW_PREVIEW, fold_failures};

/// Every value in `column` must be exactly `length` ASCII digits. Codes are
/// compared as strings so leading zeros stay significant.
pub fn check_code_format(table: &CsvTable, column: &str, length: usize) -> CheckResult {
    let label = format!("{column} format ({length}-digit zero-padded)");
    let Some(index) = table.column_index(column) else {
        return CheckResult::fail(label, format!("column {column} not present"));
    };
    let mut bad = Vec::new();
    for row in 0..table.rows.len() {
        let value = table.value(row, index);
        let well_formed =
            value.chars().count() == length && value.chars().all(|ch| ch.is_ascii_digit());
        if !well_formed {
            bad.push(format!("line {}: {value:?}", row + 2));
        }
    }
    fold_failures(label, &bad, "invalid value(s)", ROW_PREVIEW)
}

/// Every value in `column` must be unique. A collision reports the value
/// together with the first-seen line and the colliding line; further
/// occurrences keep reporting against the first-seen line.
pub fn check_no_duplicates(table: &CsvTable, column: &str) -> CheckResult {
    let label = format!("No duplicate {column}");
    let Some(index) = table.column_index(column) else {
        return CheckResult::fail(label, format!("column {column} not present"));
    };
    let mut first_seen: BTreeMap<&str, usize> = BTreeMap::new();
    let mut duplicates = Vec::new();
    for row in 0..table.rows.len() {
        let value = table.value(row, index);
        let line = row + 2;
        match first_seen.get(value) {
            Some(first) => duplicates.push(format!("{value:?} (lines {first} and {line})")),
            None => {
                first_seen.insert(value, line);
            }
        }
    }
    fold_failures(label, &duplicates, "duplicate(s)", ROW_PREVIEW)
}

/// The data row count must equal the fixed expectation for the file.
pub fn check_row_count(table: &CsvTable, expected: usize) -> CheckResult {
    let label = format!("Row count = {expected}");
    if table.rows.len() == expected {
        CheckResult::pass(label)
    } else {
        CheckResult::fail(label, format!("got {}", table.rows.len()))
    }
}
