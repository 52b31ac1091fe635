//! High-level public API for archive structure extraction.

use std::path::Path;

use tracing::debug;

use crate::InspectionConfig;
use crate::Result;
use crate::formats::ArchiveFormat;
use crate::formats::FormatReader;
use crate::formats::detect_format;
use crate::formats::open_reader;
use crate::inspection::collect;
use crate::report::StructureReport;
use crate::report::render_extensions;
use crate::report::render_structure;

/// Extracts the structure and extension reports of an archive.
///
/// The archive is read once, entry headers only. The file handle is closed
/// before this function returns, on success and on failure.
///
/// # Arguments
///
/// * `archive_path` - Path to the archive file
/// * `format` - Declared format of the archive
/// * `config` - Inspection configuration
///
/// # Errors
///
/// Returns an error if:
/// - The format has no reader (`UnsupportedFormat`)
/// - The archive cannot be opened or is corrupt (`Io`, `ArchiveRead`)
/// - The archive has more than `config.max_entries` entries
///
/// # Examples
///
/// ```no_run
/// use arcstruct_core::InspectionConfig;
/// use arcstruct_core::config::LineEnding;
/// use arcstruct_core::extract_structure;
/// use arcstruct_core::formats::ArchiveFormat;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = InspectionConfig::default();
/// let report = extract_structure("project.zip", ArchiveFormat::Zip, &config)?;
/// print!("{}", report.structure.to_text(LineEnding::Lf));
/// # Ok(())
/// # }
/// ```
pub fn extract_structure<P: AsRef<Path>>(
    archive_path: P,
    format: ArchiveFormat,
    config: &InspectionConfig,
) -> Result<StructureReport> {
    let path = archive_path.as_ref();
    debug!(path = %path.display(), format = %format, "extracting archive structure");

    let mut reader = open_reader(path, format, config)?;
    extract_from_reader(reader.as_mut(), config)
}

/// Detects the format from the file name, then extracts the structure.
///
/// # Errors
///
/// Returns `UnsupportedFormat` if the file name carries no known tag, and
/// otherwise the same errors as [`extract_structure`].
///
/// # Examples
///
/// ```no_run
/// use arcstruct_core::InspectionConfig;
/// use arcstruct_core::inspect_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = inspect_archive("backup.tar.gz", &InspectionConfig::default())?;
/// println!("{} entries", report.total_entries());
/// # Ok(())
/// # }
/// ```
pub fn inspect_archive<P: AsRef<Path>>(
    archive_path: P,
    config: &InspectionConfig,
) -> Result<StructureReport> {
    let path = archive_path.as_ref();
    let format = detect_format(path)?;
    extract_structure(path, format, config)
}

/// Runs one collection pass over an already opened reader.
///
/// # Errors
///
/// Returns the reader's failure (strict mode) or `EntryLimitExceeded`.
pub fn extract_from_reader(
    reader: &mut dyn FormatReader,
    config: &InspectionConfig,
) -> Result<StructureReport> {
    let format = reader.format();
    let format_name = reader.format_name();

    let collection = collect(reader.entries()?, format_name, config)?;

    let files = collection.file_count();
    let directories = collection.directory_count();
    debug!(
        format = format_name,
        files,
        directories,
        extensions = collection.extensions.len(),
        complete = collection.truncation.is_none(),
        "archive structure extracted"
    );

    Ok(StructureReport {
        format,
        structure: render_structure(&collection.entries),
        extensions: render_extensions(&collection.extensions),
        files,
        directories,
        truncation: collection.truncation,
    })
}
