//! Unit tests for the check battery.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use svegeo_ingest::{CsvTable, RawFile};
use svegeo_model::{
    CountyRecord, DatasetSpec, MunicipalityCountyRecord, MunicipalityRecord, PostalRecord,
};
use svegeo_validate::{
    check_code_format, check_county_join_consistency, check_foreign_key, check_header,
    check_lf_line_endings, check_municipality_county_prefix,
    check_municipality_join_consistency, check_no_duplicates, check_no_empty_rows,
    check_no_trailing_commas, check_postal_name_consistency, check_row_count, check_utf8_no_bom,
};

fn raw(bytes: &[u8]) -> RawFile {
    RawFile::from_bytes(PathBuf::from("test.csv"), bytes.to_vec()).expect("decode")
}

fn table(header: &[&str], rows: &[&[&str]]) -> CsvTable {
    CsvTable {
        header: header.iter().map(|s| (*s).to_string()).collect(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|s| (*s).to_string()).collect())
            .collect(),
    }
}

fn codes(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn bom_check_fails_only_when_bytes_start_with_bom() {
    assert!(!check_utf8_no_bom(&raw(b"\xef\xbb\xbfa,b\n")).passed());
    assert!(check_utf8_no_bom(&raw(b"a,b\n")).passed());
    // BOM bytes later in the file are not the encoding check's business.
    assert!(check_utf8_no_bom(&raw(b"a,\xef\xbb\xbfb\n")).passed());
}

#[test]
fn line_ending_check_rejects_crlf_and_bare_cr() {
    assert!(!check_lf_line_endings(&raw(b"a,b\r\n1,2\r\n")).passed());
    assert!(!check_lf_line_endings(&raw(b"a,b\rmore\n")).passed());
    assert!(check_lf_line_endings(&raw(b"a,b\n1,2\n")).passed());
}

#[test]
fn header_check_requires_exact_ordered_match() {
    let spec = DatasetSpec {
        file_name: "test.csv",
        header: &["a", "c"],
        expected_rows: None,
    };
    let mismatch = check_header(&table(&["a", "b"], &[]), &spec);
    assert!(!mismatch.passed());
    assert!(mismatch.detail.expect("detail").contains("\"b\""));
    assert!(check_header(&table(&["a", "c"], &[]), &spec).passed());
    // Extra trailing columns are a mismatch too.
    assert!(!check_header(&table(&["a", "c", "d"], &[]), &spec).passed());
}

#[test]
fn trailing_comma_check_runs_on_text_lines() {
    let result = check_no_trailing_commas(&raw(b"a,b\n1,\n2,3\n"));
    assert!(!result.passed());
    assert!(result.detail.expect("detail").contains("line 2"));
    assert!(check_no_trailing_commas(&raw(b"a,b\n1,2\n")).passed());
    // Deliberately not CSV-aware: a quoted trailing comma is still flagged.
    assert!(!check_no_trailing_commas(&raw(b"a,b\n1,\"x,\"\ny,z\n")).passed());
}

#[test]
fn empty_row_check_flags_all_empty_records() {
    let result = check_no_empty_rows(&table(&["a", "b"], &[&["", ""], &["1", "2"]]));
    assert!(!result.passed());
    assert!(result.detail.expect("detail").contains("line 2"));
    assert!(check_no_empty_rows(&table(&["a", "b"], &[&["1", ""]])).passed());
}

#[test]
fn code_format_requires_exact_length_ascii_digits() {
    let result = check_code_format(&table(&["county_code"], &[&["07"]]), "county_code", 2);
    assert!(result.passed());

    let short = check_code_format(&table(&["county_code"], &[&["7"]]), "county_code", 2);
    assert!(!short.passed());
    assert!(short.detail.expect("detail").contains("line 2: \"7\""));

    let non_digit = check_code_format(&table(&["county_code"], &[&["7X"]]), "county_code", 2);
    assert!(!non_digit.passed());

    // Leading zeros are significant: "007" is not a 2-digit code.
    assert!(!check_code_format(&table(&["county_code"], &[&["007"]]), "county_code", 2).passed());
    assert!(check_code_format(&table(&["county_code"], &[&["00"]]), "county_code", 2).passed());
}

#[test]
fn duplicate_check_reports_every_collision_against_first_seen_line() {
    let result = check_no_duplicates(
        &table(
            &["municipality_code"],
            &[&["0180"], &["0180"], &["0181"], &["0180"]],
        ),
        "municipality_code",
    );
    assert!(!result.passed());
    let detail = result.detail.expect("detail");
    assert!(detail.contains("\"0180\" (lines 2 and 3)"));
    assert!(detail.contains("\"0180\" (lines 2 and 5)"));
    assert!(detail.starts_with("2 duplicate(s)"));
}

#[test]
fn row_count_check_reports_actual_count() {
    let rows: Vec<Vec<&str>> = (0..21).map(|_| vec!["x"]).collect();
    let row_refs: Vec<&[&str]> = rows.iter().map(Vec::as_slice).collect();
    assert!(check_row_count(&table(&["a"], &row_refs), 21).passed());

    let short = check_row_count(&table(&["a"], &row_refs[..20]), 21);
    assert!(!short.passed());
    assert_eq!(short.detail.as_deref(), Some("got 20"));
}

#[test]
fn foreign_key_check_collects_distinct_missing_values() {
    let reference = codes(&["01", "02"]);
    let ok = check_foreign_key(
        &table(&["county_code"], &[&["01"], &["02"], &["01"]]),
        "county_code",
        &reference,
        "counties.csv",
    );
    assert!(ok.passed());

    let missing = check_foreign_key(
        &table(&["county_code"], &[&["03"], &["03"], &["04"]]),
        "county_code",
        &reference,
        "counties.csv",
    );
    assert!(!missing.passed());
    let detail = missing.detail.expect("detail");
    assert!(detail.starts_with("2 missing value(s)"));
    assert!(detail.contains("\"03\""));
    assert!(detail.contains("\"04\""));
}

#[test]
fn prefix_check_compares_strings_not_numbers() {
    let ok = check_municipality_county_prefix(&table(
        &["municipality_code", "county_code"],
        &[&["0180", "01"]],
    ));
    assert!(ok.passed());

    let bad = check_municipality_county_prefix(&table(
        &["municipality_code", "county_code"],
        &[&["0180", "02"]],
    ));
    assert!(!bad.passed());
    assert!(bad.detail.expect("detail").contains("\"0180\" vs \"02\""));
}

#[test]
fn county_join_consistency_reports_both_values() {
    let mut counties = BTreeMap::new();
    counties.insert(
        "01".to_string(),
        CountyRecord {
            county_code: "01".to_string(),
            county_name: "Stockholm".to_string(),
            county_name_short: "Sthlm".to_string(),
        },
    );
    let rows = vec![MunicipalityCountyRecord {
        municipality_code: "0180".to_string(),
        municipality_name: "Stockholm".to_string(),
        municipality_name_short: "Sthlm".to_string(),
        county_code: "01".to_string(),
        county_name: "Stockholn".to_string(),
        county_name_short: "Sthlm".to_string(),
    }];
    let result = check_county_join_consistency(&rows, &counties);
    assert!(!result.passed());
    let detail = result.detail.expect("detail");
    assert!(detail.contains("\"Stockholn\""));
    assert!(detail.contains("\"Stockholm\""));

    // A county code absent from the lookup is the FK check's concern, not
    // this one's.
    let orphan = vec![MunicipalityCountyRecord {
        county_code: "99".to_string(),
        ..rows[0].clone()
    }];
    assert!(check_county_join_consistency(&orphan, &counties).passed());
}

#[test]
fn municipality_join_consistency_checks_both_name_columns() {
    let mut municipalities = BTreeMap::new();
    municipalities.insert(
        "0180".to_string(),
        MunicipalityRecord {
            municipality_code: "0180".to_string(),
            municipality_name: "Stockholm".to_string(),
            municipality_name_short: "Sthlm".to_string(),
            county_code: "01".to_string(),
        },
    );
    let rows = vec![MunicipalityCountyRecord {
        municipality_code: "0180".to_string(),
        municipality_name: "Stockholm".to_string(),
        municipality_name_short: "Sthlm kommun".to_string(),
        county_code: "01".to_string(),
        county_name: "Stockholm".to_string(),
        county_name_short: "Sthlm".to_string(),
    }];
    let result = check_municipality_join_consistency(&rows, &municipalities);
    assert!(!result.passed());
    let detail = result.detail.expect("detail");
    assert!(detail.contains("municipality_name_short"));
    assert!(detail.contains("\"Sthlm kommun\""));
}

#[test]
fn postal_name_consistency_checks_resolved_rows_only() {
    let mut municipalities = BTreeMap::new();
    municipalities.insert(
        "0180".to_string(),
        MunicipalityRecord {
            municipality_code: "0180".to_string(),
            municipality_name: "Stockholm".to_string(),
            municipality_name_short: "Sthlm".to_string(),
            county_code: "01".to_string(),
        },
    );
    let mismatch = vec![PostalRecord {
        postal_code: "11120".to_string(),
        locality: "Stockholm".to_string(),
        municipality_code: "0180".to_string(),
        municipality_name: "Stockolm".to_string(),
    }];
    let result = check_postal_name_consistency(&mismatch, &municipalities);
    assert!(!result.passed());
    assert!(result.detail.expect("detail").contains("\"Stockolm\""));

    let unresolved = vec![PostalRecord {
        municipality_code: "9999".to_string(),
        ..mismatch[0].clone()
    }];
    assert!(check_postal_name_consistency(&unresolved, &municipalities).passed());
}
