mod field;
mod relational;
mod structural;

pub use field::{check_code_format, check_no_duplicates, check_row_count};
pub use relational::{
    check_county_join_consistency, check_foreign_key, check_municipality_county_prefix,
    check_municipality_join_consistency, check_postal_name_consistency,
};
pub use structural::{
    check_header, check_lf_line_endings, check_no_empty_rows, check_no_trailing_commas,
    check_utf8_no_bom,
};

use svegeo_model::CheckResult;

/// How many offending rows/values a diagnostic lists before cutting off.
pub const ROW_PREVIEW: usize = 5;

/// How many distinct missing foreign-key values a diagnostic lists.
pub const FK_PREVIEW: usize = 10;

/// Fold per-row failure descriptions into one check result, with the total
/// count up front and the listed entries capped.
pub(crate) fn fold_failures(
    label: impl Into<String>,
    failures: &[String],
    noun: &str,
    preview: usize,
) -> CheckResult {
    if failures.is_empty() {
        return CheckResult::pass(label);
    }
    let listed = failures
        .iter()
        .take(preview)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    CheckResult::fail(label, format!("{} {noun}: {listed}", failures.len()))
}
