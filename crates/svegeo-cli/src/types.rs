use std::path::PathBuf;

use svegeo_model::{FileReport, total_failures};

#[derive(Debug)]
pub struct CheckOutcome {
    pub data_dir: PathBuf,
    pub reports: Vec<FileReport>,
    pub report_json: Option<PathBuf>,
}

impl CheckOutcome {
    pub fn failed_checks(&self) -> usize {
        total_failures(&self.reports)
    }

    pub fn has_failures(&self) -> bool {
        self.failed_checks() > 0
    }
}
