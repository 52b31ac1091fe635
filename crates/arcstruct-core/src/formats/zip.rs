//! ZIP archive reader.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::path::Path;

use super::detect::ArchiveFormat;
use super::traits::EntryStream;
use super::traits::FormatReader;
use super::traits::RawEntry;
use super::traits::fuse_on_error;
use crate::InspectionError;
use crate::Result;

/// ZIP archive reader.
///
/// Entries come from the central directory in stored order. Entry data is
/// never decompressed.
#[derive(Debug)]
pub struct ZipReader<R: Read + Seek = BufReader<File>> {
    archive: zip::ZipArchive<R>,
}

impl ZipReader {
    /// Opens a ZIP archive from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or has no valid
    /// central directory.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> ZipReader<R> {
    /// Creates a reader over any seekable source.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveRead` if the central directory cannot be parsed.
    pub fn new(source: R) -> Result<Self> {
        let archive = zip::ZipArchive::new(source).map_err(|e| {
            InspectionError::read("zip", format!("failed to open ZIP archive: {e}"))
        })?;
        Ok(Self { archive })
    }

    /// Number of entries in the central directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Returns `true` if the archive has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archive.len() == 0
    }
}

impl<R: Read + Seek> FormatReader for ZipReader<R> {
    fn format(&self) -> ArchiveFormat {
        ArchiveFormat::Zip
    }

    fn entries(&mut self) -> Result<EntryStream<'_>> {
        let archive = &mut self.archive;
        let iter = (0..archive.len()).map(move |index| {
            // Raw access reads only the local header, which also works for
            // encrypted or unsupported compression methods.
            let entry = archive.by_index_raw(index).map_err(|e| {
                InspectionError::read("zip", format!("failed to read ZIP entry {index}: {e}"))
            })?;
            Ok(RawEntry::new(entry.name(), entry.is_dir()))
        });
        Ok(fuse_on_error(iter))
    }
}
