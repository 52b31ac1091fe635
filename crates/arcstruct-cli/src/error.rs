//! Error conversion utilities for CLI.
//!
//! Converts arcstruct-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use arcstruct_core::ArchiveFormat;
use arcstruct_core::InspectionError;
use std::path::Path;

fn supported_tags() -> String {
    ArchiveFormat::ALL
        .into_iter()
        .filter(|f| f.is_supported())
        .map(ArchiveFormat::tag)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Converts `InspectionError` to user-friendly anyhow error with context
pub fn convert_inspection_error(err: InspectionError, archive: &Path) -> anyhow::Error {
    match err {
        InspectionError::UnsupportedFormat { tag } => {
            anyhow!(
                "Archive format not supported: '{}' ({})\n\
                 HINT: Supported formats: {}. Use --format to set the format explicitly.",
                tag,
                archive.display(),
                supported_tags()
            )
        }
        InspectionError::ArchiveRead { format, reason } => {
            anyhow!(
                "Failed to read {} archive '{}': {}\n\
                 HINT: The archive may be corrupted or truncated. Use --lenient to keep the entries read before the failure.",
                format,
                archive.display(),
                reason
            )
        }
        InspectionError::EntryLimitExceeded { limit } => {
            anyhow!(
                "Archive '{}' has more than {} entries\n\
                 HINT: Use --max-entries to raise the limit.",
                archive.display(),
                limit
            )
        }
        InspectionError::Io(io_err) => {
            anyhow!(
                "I/O error while reading '{}': {}",
                archive.display(),
                io_err
            )
        }
    }
}

/// Adds context to a generic error about archive operations
pub fn add_archive_context<T>(
    result: Result<T, InspectionError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_inspection_error(e, archive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_convert_unsupported_format() {
        let err = InspectionError::UnsupportedFormat {
            tag: "rz".to_string(),
        };
        let converted = convert_inspection_error(err, Path::new("old.rz"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("'rz'"));
        assert!(msg.contains("old.rz"));
        assert!(msg.contains("HINT"));
        assert!(msg.contains("zip, 7z, tar.gz, gz"));
    }

    #[test]
    fn test_convert_read_error() {
        let err = InspectionError::read("tar.gz", "unexpected EOF");
        let converted = convert_inspection_error(err, Path::new("broken.tar.gz"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("tar.gz archive"));
        assert!(msg.contains("--lenient"));
    }

    #[test]
    fn test_convert_limit_error() {
        let err = InspectionError::EntryLimitExceeded { limit: 5 };
        let msg = format!("{:?}", convert_inspection_error(err, Path::new("big.zip")));
        assert!(msg.contains("more than 5 entries"));
        assert!(msg.contains("--max-entries"));
    }

    #[test]
    fn test_convert_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = InspectionError::Io(io_err);
        let converted = convert_inspection_error(err, Path::new("archive.zip"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("I/O error"));
    }
}
