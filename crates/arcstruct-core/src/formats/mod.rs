//! Archive format readers.
//!
//! Every supported format implements [`FormatReader`]. [`open_reader`] is the
//! only place that maps a format tag to a reader, so a new format needs one
//! `ArchiveFormat` variant, one match arm and one reader type.

pub mod detect;
pub mod gzip;
pub mod sevenz;
pub mod tar;
pub mod traits;
pub mod zip;

use std::path::Path;

use crate::InspectionConfig;
use crate::InspectionError;
use crate::Result;
use crate::config::GzipMode;

// Re-export main types for convenience
pub use detect::ArchiveFormat;
pub use detect::detect_format;
pub use gzip::GzipReader;
pub use sevenz::SevenZipReader;
pub use tar::TarGzReader;
pub use traits::EntryStream;
pub use traits::FormatReader;
pub use traits::RawEntry;
pub use zip::ZipReader;

/// Opens the reader for `format`.
///
/// # Errors
///
/// Returns `UnsupportedFormat` for formats without a reader, and a read
/// error if the archive cannot be opened.
pub fn open_reader(
    path: &Path,
    format: ArchiveFormat,
    config: &InspectionConfig,
) -> Result<Box<dyn FormatReader>> {
    match format {
        ArchiveFormat::Zip => Ok(Box::new(ZipReader::open(path)?)),
        ArchiveFormat::SevenZ => Ok(Box::new(SevenZipReader::open(path)?)),
        ArchiveFormat::TarGz => Ok(Box::new(TarGzReader::open(path, format)?)),
        ArchiveFormat::Gz => match config.gzip_mode {
            GzipMode::TarPayload => Ok(Box::new(TarGzReader::open(path, format)?)),
            GzipMode::SingleMember => Ok(Box::new(GzipReader::open(path)?)),
        },
        ArchiveFormat::Rzip | ArchiveFormat::SevenZMac => Err(InspectionError::UnsupportedFormat {
            tag: format.tag().to_string(),
        }),
    }
}
