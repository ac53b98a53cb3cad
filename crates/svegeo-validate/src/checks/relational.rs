//! Cross-file checks: foreign keys, the county-prefix rule, and the
//! denormalization consistency of name copies.

use std::collections::{BTreeMap, BTreeSet};

use svegeo_ingest::CsvTable;
use svegeo_model::{
    CheckResult, CountyRecord, MunicipalityCountyRecord, MunicipalityRecord, PostalRecord,
};

use super::{FK_PREVIEW, ROW_PREVIEW, fold_failures};

/// Every value in `column` must appear in the referenced file's primary-key
/// set. Collects the distinct missing values rather than one entry per row.
pub fn check_foreign_key(
    table: &CsvTable,
    column: &str,
    reference: &BTreeSet<String>,
    reference_name: &str,
) -> CheckResult {
    let label = format!("FK {column} → {reference_name}");
    let Some(index) = table.column_index(column) else {
        return CheckResult::fail(label, format!("column {column} not present"));
    };
    let mut missing: BTreeSet<String> = BTreeSet::new();
    for row in 0..table.rows.len() {
        let value = table.value(row, index);
        if !reference.contains(value) {
            missing.insert(format!("{value:?}"));
        }
    }
    let missing: Vec<String> = missing.into_iter().collect();
    fold_failures(label, &missing, "missing value(s)", FK_PREVIEW)
}

/// The first two characters of municipality_code must equal county_code,
/// compared as strings.
pub fn check_municipality_county_prefix(table: &CsvTable) -> CheckResult {
    let label = "municipality_code prefix matches county_code";
    let (Some(muni), Some(county)) = (
        table.column_index("municipality_code"),
        table.column_index("county_code"),
    ) else {
        return CheckResult::fail(label, "municipality_code or county_code not present");
    };
    let mut bad = Vec::new();
    for row in 0..table.rows.len() {
        let code = table.value(row, muni);
        let county_code = table.value(row, county);
        let prefix: String = code.chars().take(2).collect();
        if prefix != county_code {
            bad.push(format!("line {}: {code:?} vs {county_code:?}", row + 2));
        }
    }
    fold_failures(label, &bad, "mismatch(es)", ROW_PREVIEW)
}

/// county_name and county_name_short in the join file must match the
/// counties file exactly; both comparisons feed one shared mismatch list.
pub fn check_county_join_consistency(
    rows: &[MunicipalityCountyRecord],
    counties: &BTreeMap<String, CountyRecord>,
) -> CheckResult {
    let mut bad = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        let line = index + 2;
        let Some(county) = counties.get(&row.county_code) else {
            continue;
        };
        if row.county_name != county.county_name {
            bad.push(format!(
                "line {line}: county_name {:?} vs {:?}",
                row.county_name, county.county_name
            ));
        }
        if row.county_name_short != county.county_name_short {
            bad.push(format!(
                "line {line}: county_name_short {:?} vs {:?}",
                row.county_name_short, county.county_name_short
            ));
        }
    }
    fold_failures(
        "Join consistency (county columns match counties.csv)",
        &bad,
        "mismatch(es)",
        ROW_PREVIEW,
    )
}

/// municipality_name and municipality_name_short in the join file must
/// match the municipalities file exactly.
pub fn check_municipality_join_consistency(
    rows: &[MunicipalityCountyRecord],
    municipalities: &BTreeMap<String, MunicipalityRecord>,
) -> CheckResult {
    let mut bad = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        let line = index + 2;
        let Some(municipality) = municipalities.get(&row.municipality_code) else {
            continue;
        };
        if row.municipality_name != municipality.municipality_name {
            bad.push(format!(
                "line {line}: municipality_name {:?} vs {:?}",
                row.municipality_name, municipality.municipality_name
            ));
        }
        if row.municipality_name_short != municipality.municipality_name_short {
            bad.push(format!(
                "line {line}: municipality_name_short {:?} vs {:?}",
                row.municipality_name_short, municipality.municipality_name_short
            ));
        }
    }
    fold_failures(
        "Join consistency (municipality columns match municipalities.csv)",
        &bad,
        "mismatch(es)",
        ROW_PREVIEW,
    )
}

/// For postal rows whose municipality_code resolves, municipality_name must
/// match the municipalities file exactly.
pub fn check_postal_name_consistency(
    rows: &[PostalRecord],
    municipalities: &BTreeMap<String, MunicipalityRecord>,
) -> CheckResult {
    let mut bad = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        let Some(municipality) = municipalities.get(&row.municipality_code) else {
            continue;
        };
        if row.municipality_name != municipality.municipality_name {
            bad.push(format!(
                "line {}: {:?} vs {:?}",
                index + 2,
                row.municipality_name,
                municipality.municipality_name
            ));
        }
    }
    fold_failures(
        "municipality_name matches municipalities.csv",
        &bad,
        "mismatch(es)",
        ROW_PREVIEW,
    )
}
