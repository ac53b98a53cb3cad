use anyhow::Result;
use comfy_table::Table;
use tracing::{info, info_span};

use svegeo_ingest::read_raw_file;
use svegeo_model::ALL_DATASETS;
use svegeo_validate::{
    validate_counties, validate_municipalities, validate_municipality_county, validate_postal,
    write_report_json,
};

use crate::cli::CheckArgs;
use crate::summary::{apply_table_style, header_cell, print_file_report};
use crate::types::CheckOutcome;

/// Run the four validation stages in dependency order, printing each file's
/// section as soon as its stage completes so a fatal error later in the run
/// still leaves the earlier reports on stdout.
pub fn run_check(args: &CheckArgs) -> Result<CheckOutcome> {
    let data_dir = &args.data_dir;
    let span = info_span!("check", data_dir = %data_dir.display());
    let _guard = span.enter();
    let mut reports = Vec::new();

    let raw = read_raw_file(&data_dir.join(svegeo_model::COUNTIES.file_name))?;
    let counties = validate_counties(&raw)?;
    print_file_report(&counties.report);
    reports.push(counties.report.clone());

    let raw = read_raw_file(&data_dir.join(svegeo_model::MUNICIPALITIES.file_name))?;
    let municipalities = validate_municipalities(&raw, &counties)?;
    print_file_report(&municipalities.report);
    reports.push(municipalities.report.clone());

    let raw = read_raw_file(&data_dir.join(svegeo_model::MUNICIPALITY_COUNTY.file_name))?;
    let report = validate_municipality_county(&raw, &counties, &municipalities)?;
    print_file_report(&report);
    reports.push(report);

    let raw = read_raw_file(&data_dir.join(svegeo_model::POSTAL_TO_MUNICIPALITY.file_name))?;
    let report = validate_postal(&raw, &municipalities)?;
    print_file_report(&report);
    reports.push(report);

    if let Some(path) = &args.report_json {
        write_report_json(path, data_dir, &reports)?;
        info!(path = %path.display(), "wrote JSON report");
    }

    Ok(CheckOutcome {
        data_dir: data_dir.clone(),
        reports,
        report_json: args.report_json.clone(),
    })
}

/// Print the expected shape of each reference dataset.
pub fn run_datasets() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Columns"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    for spec in &ALL_DATASETS {
        let rows = spec
            .expected_rows
            .map_or_else(|| "-".to_string(), |count| count.to_string());
        table.add_row(vec![
            spec.file_name.to_string(),
            spec.header.join(", "),
            rows,
        ]);
    }
    println!("{table}");
}
