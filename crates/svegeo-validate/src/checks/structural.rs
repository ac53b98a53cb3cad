//! Checks on the raw byte/text shape of a file, applied identically to
//! every dataset.

use svegeo_ingest::{CsvTable, RawFile};
use svegeo_model::{CheckResult, DatasetSpec};

use super::{ROW_PREVIEW, fold_failures};

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// The file must not begin with a UTF-8 byte-order mark.
pub fn check_utf8_no_bom(raw: &RawFile) -> CheckResult {
    if raw.bytes().starts_with(UTF8_BOM) {
        CheckResult::fail("UTF-8, no BOM", "file starts with a UTF-8 byte-order mark")
    } else {
        CheckResult::pass("UTF-8, no BOM")
    }
}

/// Pure line-feed termination: no CR byte anywhere, paired or bare.
pub fn check_lf_line_endings(raw: &RawFile) -> CheckResult {
    if raw.bytes().contains(&b'\r') {
        CheckResult::fail(
            "LF line endings",
            "found carriage-return bytes (CR or CRLF line endings)",
        )
    } else {
        CheckResult::pass("LF line endings")
    }
}

/// The first record must equal the expected column list exactly, in order.
pub fn check_header(table: &CsvTable, spec: &DatasetSpec) -> CheckResult {
    let matches = table.header.len() == spec.header.len()
        && table
            .header
            .iter()
            .zip(spec.header)
            .all(|(got, want)| got == want);
    if matches {
        CheckResult::pass("Correct header")
    } else {
        CheckResult::fail("Correct header", format!("got {:?}", table.header))
    }
}

/// No text line may end with a comma. This deliberately runs on decoded
/// text lines rather than parsed fields, so a quoted field that genuinely
/// ends in a comma is still flagged.
pub fn check_no_trailing_commas(raw: &RawFile) -> CheckResult {
    let mut bad = Vec::new();
    for (number, line) in raw.text().split('\n').enumerate() {
        if line.ends_with(',') {
            bad.push(format!("line {}", number + 1));
        }
    }
    fold_failures(
        "No trailing commas",
        &bad,
        "line(s) ending with a comma",
        ROW_PREVIEW,
    )
}

/// No data record may consist entirely of empty fields.
pub fn check_no_empty_rows(table: &CsvTable) -> CheckResult {
    let mut empty = Vec::new();
    for (index, row) in table.rows.iter().enumerate() {
        if row.iter().all(String::is_empty) {
            empty.push(format!("line {}", index + 2));
        }
    }
    fold_failures("No empty rows", &empty, "empty row(s)", ROW_PREVIEW)
}
