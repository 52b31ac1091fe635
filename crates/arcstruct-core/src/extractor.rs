//! Reusable structure extractor.

use std::path::Path;

use crate::InspectionConfig;
use crate::Result;
use crate::api::extract_structure;
use crate::formats::ArchiveFormat;
use crate::formats::detect_format;
use crate::report::StructureReport;

/// Extracts archive structures with one fixed configuration.
///
/// # Examples
///
/// ```no_run
/// use arcstruct_core::ArchiveStructureExtractor;
/// use arcstruct_core::InspectionConfig;
/// use arcstruct_core::formats::ArchiveFormat;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let extractor = ArchiveStructureExtractor::new(InspectionConfig::metadata_driven());
/// let zip = extractor.extract("release.zip", ArchiveFormat::Zip)?;
/// let guessed = extractor.inspect("backup.tar.gz")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArchiveStructureExtractor {
    config: InspectionConfig,
}

impl ArchiveStructureExtractor {
    /// Creates an extractor using `config` for every run.
    #[must_use]
    pub const fn new(config: InspectionConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &InspectionConfig {
        &self.config
    }

    /// Extracts an archive of a declared format.
    ///
    /// # Errors
    ///
    /// See [`extract_structure`].
    pub fn extract<P: AsRef<Path>>(
        &self,
        archive_path: P,
        format: ArchiveFormat,
    ) -> Result<StructureReport> {
        extract_structure(archive_path, format, &self.config)
    }

    /// Extracts an archive whose format is given as a tag such as `".zip"`.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` for unknown tags, otherwise see
    /// [`extract_structure`].
    pub fn extract_tagged<P: AsRef<Path>>(&self, archive_path: P, tag: &str) -> Result<StructureReport> {
        let format: ArchiveFormat = tag.parse()?;
        self.extract(archive_path, format)
    }

    /// Extracts an archive, deriving the format from its file name.
    ///
    /// # Errors
    ///
    /// See [`crate::inspect_archive`].
    pub fn inspect<P: AsRef<Path>>(&self, archive_path: P) -> Result<StructureReport> {
        let path = archive_path.as_ref();
        self.extract(path, detect_format(path)?)
    }
}
