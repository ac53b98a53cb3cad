use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
}

/// Outcome of a single validation check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Human-readable check name, stable across runs.
    pub label: String,
    pub status: CheckStatus,
    /// Diagnostic for failed checks: offending values and line numbers,
    /// capped to a small preview.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CheckResult {
    pub fn pass(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            status: CheckStatus::Pass,
            detail: None,
        }
    }

    pub fn fail(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            status: CheckStatus::Fail,
            detail: Some(detail.into()),
        }
    }

    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Pass
    }
}

/// Ordered check results for one reference file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileReport {
    #[serde(rename = "file")]
    pub file_name: String,
    pub rows: usize,
    pub checks: Vec<CheckResult>,
}

impl FileReport {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            rows: 0,
            checks: Vec::new(),
        }
    }

    pub fn push(&mut self, check: CheckResult) {
        self.checks.push(check);
    }

    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|check| !check.passed()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }
}

/// Total number of failed checks across a run.
pub fn total_failures(reports: &[FileReport]) -> usize {
    reports.iter().map(FileReport::failed_count).sum()
}
