use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use svegeo_model::{FileReport, total_failures};

pub const REPORT_SCHEMA: &str = "svegeo.validation-report";
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Versioned machine-readable run report.
#[derive(Debug, Serialize)]
pub struct ValidationPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub data_dir: String,
    pub failed_checks: usize,
    pub files: Vec<FileReport>,
}

/// Write the run report as pretty-printed JSON.
pub fn write_report_json(path: &Path, data_dir: &Path, reports: &[FileReport]) -> Result<()> {
    let payload = ValidationPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        data_dir: data_dir.display().to_string(),
        failed_checks: total_failures(reports),
        files: reports.to_vec(),
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(path, format!("{json}\n"))
        .with_context(|| format!("write report: {}", path.display()))?;
    Ok(())
}
