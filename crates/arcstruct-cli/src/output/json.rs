//! JSON output formatter for machine-readable results.

use super::formatter::InspectionSummary;
use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use arcstruct_core::ArchiveFormat;
use serde::Serialize;
use std::io::Write;
use std::io::{self};

pub struct JsonFormatter;

#[derive(Serialize)]
struct InspectionOutput {
    archive: String,
    format: &'static str,
    files: usize,
    directories: usize,
    complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    truncation: Option<String>,
    structure: Vec<String>,
    extensions: Vec<String>,
    written: Vec<String>,
}

impl InspectionOutput {
    fn new(summary: &InspectionSummary<'_>) -> Self {
        let report = summary.report;
        Self {
            archive: summary.archive.display().to_string(),
            format: report.format.tag(),
            files: report.files,
            directories: report.directories,
            complete: report.is_complete(),
            truncation: report.truncation.clone(),
            structure: report.structure.lines().to_vec(),
            extensions: report.extensions.lines().to_vec(),
            written: summary
                .written
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct FormatOutput {
    tag: &'static str,
    supported: bool,
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_inspection_result(&self, summary: &InspectionSummary<'_>) -> Result<()> {
        let output = JsonOutput::success("inspect", InspectionOutput::new(summary));
        Self::output(&output)
    }

    fn format_formats(&self, formats: &[ArchiveFormat]) -> Result<()> {
        let data: Vec<FormatOutput> = formats
            .iter()
            .map(|f| FormatOutput {
                tag: f.tag(),
                supported: f.is_supported(),
            })
            .collect();
        Self::output(&JsonOutput::success("formats", data))
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::error("error", format!("{error:?}"));
        let _ = Self::output(&output);
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}
