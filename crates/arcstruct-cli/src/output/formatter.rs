//! Output formatter trait for CLI results.

use anyhow::Result;
use arcstruct_core::ArchiveFormat;
use arcstruct_core::StructureReport;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

/// Outcome of one `inspect` run.
pub struct InspectionSummary<'a> {
    pub archive: &'a Path,
    pub report: &'a StructureReport,
    /// Report files written to disk; empty with `--print`.
    pub written: &'a [PathBuf],
    pub print_documents: bool,
}

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format inspection result
    fn format_inspection_result(&self, summary: &InspectionSummary<'_>) -> Result<()>;

    /// Format the list of known formats
    fn format_formats(&self, formats: &[ArchiveFormat]) -> Result<()>;

    /// Format error message
    fn format_error(&self, error: &anyhow::Error);

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }
}

impl JsonOutput<()> {
    pub fn error(operation: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }
}
