//! 7z archive reader.
//!
//! The 7z header holds the complete entry table, so the header is decoded
//! once when the reader is created and the file handle is released right
//! away. Entries are then yielded in stored order.
//!
//! Password-protected archives with encrypted headers cannot be listed and
//! fail with `ArchiveRead`.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::path::Path;

use sevenz_rust2::Archive;
use sevenz_rust2::Password;

use super::detect::ArchiveFormat;
use super::traits::EntryStream;
use super::traits::FormatReader;
use super::traits::RawEntry;
use crate::InspectionError;
use crate::Result;

/// 7z archive reader.
pub struct SevenZipReader {
    archive: Archive,
}

impl SevenZipReader {
    /// Opens a 7z archive from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or its header cannot
    /// be decoded.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }

    /// Decodes the archive header from any seekable source.
    ///
    /// The source is dropped before this function returns.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveRead` if the signature or header is invalid, or the
    /// header is encrypted.
    pub fn new<R: Read + Seek>(mut source: R) -> Result<Self> {
        let password = Password::empty();
        let archive = Archive::read(&mut source, &password).map_err(convert_error)?;
        Ok(Self { archive })
    }

    /// Number of entries in the archive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.archive.files.len()
    }

    /// Returns `true` if the archive has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archive.files.is_empty()
    }
}

impl FormatReader for SevenZipReader {
    fn format(&self) -> ArchiveFormat {
        ArchiveFormat::SevenZ
    }

    fn entries(&mut self) -> Result<EntryStream<'_>> {
        let iter = self
            .archive
            .files
            .iter()
            .map(|entry| Ok(RawEntry::new(entry.name.clone(), entry.is_directory())));
        Ok(Box::new(iter))
    }
}

/// Converts sevenz-rust2 errors to `ArchiveRead`.
fn convert_error(err: sevenz_rust2::Error) -> InspectionError {
    let err_str = err.to_string();
    let err_lower = err_str.to_lowercase();

    if err_lower.contains("password") || err_lower.contains("encrypt") {
        return InspectionError::read(
            "7z",
            format!("encrypted 7z archive; password-protected headers are not supported ({err_str})"),
        );
    }

    InspectionError::read("7z", format!("failed to open 7z archive: {err_str}"))
}
