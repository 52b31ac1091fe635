//! Formats command implementation

use crate::output::OutputFormatter;
use anyhow::Result;
use arcstruct_core::ArchiveFormat;

pub fn execute(formatter: &dyn OutputFormatter) -> Result<()> {
    formatter.format_formats(&ArchiveFormat::ALL)
}
