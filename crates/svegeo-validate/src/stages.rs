//! Stage orchestration: one stage per reference file, run in dependency
//! order. Each stage parses its file, runs the full check battery without
//! short-circuiting, and hands the next stage an immutable code set and
//! code→record lookup.
//!
//! Check failures never abort a stage. A file that cannot be parsed, or
//! whose header lacks a column the typed records need, is an environment
//! failure and propagates as an error instead.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Result, anyhow};
use tracing::info;

use svegeo_ingest::{CsvTable, RawFile, parse_csv_table};
use svegeo_model::{
    COUNTIES, CountyRecord, FileReport, MUNICIPALITIES, MUNICIPALITY_COUNTY,
    MunicipalityCountyRecord, MunicipalityRecord, POSTAL_TO_MUNICIPALITY, PostalRecord,
};

use crate::checks::{
    check_code_format, check_county_join_consistency, check_foreign_key, check_header,
    check_lf_line_endings, check_municipality_county_prefix, check_municipality_join_consistency,
    check_no_duplicates, check_no_empty_rows, check_no_trailing_commas,
    check_postal_name_consistency, check_row_count, check_utf8_no_bom,
};

/// Output of the counties stage: the report plus the primary-key set and
/// lookup consumed by every later stage.
#[derive(Debug, Clone)]
pub struct CountyStage {
    pub report: FileReport,
    pub codes: BTreeSet<String>,
    pub lookup: BTreeMap<String, CountyRecord>,
}

#[derive(Debug, Clone)]
pub struct MunicipalityStage {
    pub report: FileReport,
    pub codes: BTreeSet<String>,
    pub lookup: BTreeMap<String, MunicipalityRecord>,
}

/// Validate counties.csv stand-alone.
pub fn validate_counties(raw: &RawFile) -> Result<CountyStage> {
    let spec = &COUNTIES;
    let table = parse_csv_table(raw)?;
    let mut report = FileReport::new(spec.file_name);
    report.rows = table.rows.len();

    report.push(check_utf8_no_bom(raw));
    report.push(check_lf_line_endings(raw));
    report.push(check_header(&table, spec));
    report.push(check_no_trailing_commas(raw));
    report.push(check_no_empty_rows(&table));

    report.push(check_code_format(&table, "county_code", 2));
    report.push(check_no_duplicates(&table, "county_code"));
    if let Some(expected) = spec.expected_rows {
        report.push(check_row_count(&table, expected));
    }

    let records = county_records(&table)?;
    let mut codes = BTreeSet::new();
    let mut lookup = BTreeMap::new();
    for record in records {
        codes.insert(record.county_code.clone());
        lookup.insert(record.county_code.clone(), record);
    }
    finish_stage(&report);
    Ok(CountyStage {
        report,
        codes,
        lookup,
    })
}

/// Validate municipalities.csv against the county keys.
pub fn validate_municipalities(raw: &RawFile, counties: &CountyStage) -> Result<MunicipalityStage> {
    let spec = &MUNICIPALITIES;
    let table = parse_csv_table(raw)?;
    let mut report = FileReport::new(spec.file_name);
    report.rows = table.rows.len();

    report.push(check_utf8_no_bom(raw));
    report.push(check_lf_line_endings(raw));
    report.push(check_header(&table, spec));
    report.push(check_no_trailing_commas(raw));
    report.push(check_no_empty_rows(&table));

    report.push(check_code_format(&table, "municipality_code", 4));
    report.push(check_code_format(&table, "county_code", 2));
    report.push(check_no_duplicates(&table, "municipality_code"));
    if let Some(expected) = spec.expected_rows {
        report.push(check_row_count(&table, expected));
    }
    report.push(check_foreign_key(
        &table,
        "county_code",
        &counties.codes,
        COUNTIES.file_name,
    ));
    report.push(check_municipality_county_prefix(&table));

    let records = municipality_records(&table)?;
    let mut codes = BTreeSet::new();
    let mut lookup = BTreeMap::new();
    for record in records {
        codes.insert(record.municipality_code.clone());
        lookup.insert(record.municipality_code.clone(), record);
    }
    finish_stage(&report);
    Ok(MunicipalityStage {
        report,
        codes,
        lookup,
    })
}

/// Validate the denormalized municipality_county.csv join against both
/// source-of-truth files.
pub fn validate_municipality_county(
    raw: &RawFile,
    counties: &CountyStage,
    municipalities: &MunicipalityStage,
) -> Result<FileReport> {
    let spec = &MUNICIPALITY_COUNTY;
    let table = parse_csv_table(raw)?;
    let mut report = FileReport::new(spec.file_name);
    report.rows = table.rows.len();

    report.push(check_utf8_no_bom(raw));
    report.push(check_lf_line_endings(raw));
    report.push(check_header(&table, spec));
    report.push(check_no_trailing_commas(raw));
    report.push(check_no_empty_rows(&table));

    report.push(check_code_format(&table, "municipality_code", 4));
    report.push(check_code_format(&table, "county_code", 2));
    report.push(check_no_duplicates(&table, "municipality_code"));
    if let Some(expected) = spec.expected_rows {
        report.push(check_row_count(&table, expected));
    }
    report.push(check_foreign_key(
        &table,
        "county_code",
        &counties.codes,
        COUNTIES.file_name,
    ));
    report.push(check_foreign_key(
        &table,
        "municipality_code",
        &municipalities.codes,
        MUNICIPALITIES.file_name,
    ));
    report.push(check_municipality_county_prefix(&table));

    let records = municipality_county_records(&table)?;
    report.push(check_county_join_consistency(&records, &counties.lookup));
    report.push(check_municipality_join_consistency(
        &records,
        &municipalities.lookup,
    ));

    finish_stage(&report);
    Ok(report)
}

/// Validate postal_to_municipality.csv against the municipality keys.
pub fn validate_postal(raw: &RawFile, municipalities: &MunicipalityStage) -> Result<FileReport> {
    let spec = &POSTAL_TO_MUNICIPALITY;
    let table = parse_csv_table(raw)?;
    let mut report = FileReport::new(spec.file_name);
    report.rows = table.rows.len();

    report.push(check_utf8_no_bom(raw));
    report.push(check_lf_line_endings(raw));
    report.push(check_header(&table, spec));
    report.push(check_no_trailing_commas(raw));
    report.push(check_no_empty_rows(&table));

    report.push(check_code_format(&table, "postal_code", 5));
    report.push(check_code_format(&table, "municipality_code", 4));
    report.push(check_no_duplicates(&table, "postal_code"));
    report.push(check_foreign_key(
        &table,
        "municipality_code",
        &municipalities.codes,
        MUNICIPALITIES.file_name,
    ));

    let records = postal_records(&table)?;
    report.push(check_postal_name_consistency(
        &records,
        &municipalities.lookup,
    ));

    finish_stage(&report);
    Ok(report)
}

fn finish_stage(report: &FileReport) {
    info!(
        file = %report.file_name,
        rows = report.rows,
        failed = report.failed_count(),
        "dataset validated"
    );
}

/// Resolve a column the typed records cannot do without. Its absence means
/// the file does not carry the schema this validator is defined over, which
/// is fatal for the run rather than one more failed check.
fn required_column(table: &CsvTable, file_name: &str, column: &str) -> Result<usize> {
    table
        .column_index(column)
        .ok_or_else(|| anyhow!("{file_name}: required column {column} not present"))
}

fn county_records(table: &CsvTable) -> Result<Vec<CountyRecord>> {
    let file = COUNTIES.file_name;
    let code = required_column(table, file, "county_code")?;
    let name = required_column(table, file, "county_name")?;
    let name_short = required_column(table, file, "county_name_short")?;
    Ok((0..table.rows.len())
        .map(|row| CountyRecord {
            county_code: table.value(row, code).to_string(),
            county_name: table.value(row, name).to_string(),
            county_name_short: table.value(row, name_short).to_string(),
        })
        .collect())
}

fn municipality_records(table: &CsvTable) -> Result<Vec<MunicipalityRecord>> {
    let file = MUNICIPALITIES.file_name;
    let code = required_column(table, file, "municipality_code")?;
    let name = required_column(table, file, "municipality_name")?;
    let name_short = required_column(table, file, "municipality_name_short")?;
    let county = required_column(table, file, "county_code")?;
    Ok((0..table.rows.len())
        .map(|row| MunicipalityRecord {
            municipality_code: table.value(row, code).to_string(),
            municipality_name: table.value(row, name).to_string(),
            municipality_name_short: table.value(row, name_short).to_string(),
            county_code: table.value(row, county).to_string(),
        })
        .collect())
}

fn municipality_county_records(table: &CsvTable) -> Result<Vec<MunicipalityCountyRecord>> {
    let file = MUNICIPALITY_COUNTY.file_name;
    let code = required_column(table, file, "municipality_code")?;
    let name = required_column(table, file, "municipality_name")?;
    let name_short = required_column(table, file, "municipality_name_short")?;
    let county = required_column(table, file, "county_code")?;
    let county_name = required_column(table, file, "county_name")?;
    let county_short = required_column(table, file, "county_name_short")?;
    Ok((0..table.rows.len())
        .map(|row| MunicipalityCountyRecord {
            municipality_code: table.value(row, code).to_string(),
            municipality_name: table.value(row, name).to_string(),
            municipality_name_short: table.value(row, name_short).to_string(),
            county_code: table.value(row, county).to_string(),
            county_name: table.value(row, county_name).to_string(),
            county_name_short: table.value(row, county_short).to_string(),
        })
        .collect())
}

fn postal_records(table: &CsvTable) -> Result<Vec<PostalRecord>> {
    let file = POSTAL_TO_MUNICIPALITY.file_name;
    let code = required_column(table, file, "postal_code")?;
    let locality = required_column(table, file, "locality")?;
    let municipality = required_column(table, file, "municipality_code")?;
    let name = required_column(table, file, "municipality_name")?;
    Ok((0..table.rows.len())
        .map(|row| PostalRecord {
            postal_code: table.value(row, code).to_string(),
            locality: table.value(row, locality).to_string(),
            municipality_code: table.value(row, municipality).to_string(),
            municipality_name: table.value(row, name).to_string(),
        })
        .collect())
}
