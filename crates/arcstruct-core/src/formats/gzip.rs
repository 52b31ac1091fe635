//! Single-member gzip reader.
//!
//! A plain `.gz` file compresses exactly one file. This reader reports that
//! file as the archive's only entry.

use std::fs::File;
use std::io;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;

use super::detect::ArchiveFormat;
use super::traits::EntryStream;
use super::traits::FormatReader;
use super::traits::RawEntry;
use crate::InspectionError;
use crate::Result;

/// Reader for a plain gzip file holding one compressed member.
///
/// The entry name comes from the gzip header's stored file name, or from
/// the archive's own file name with the `.gz` suffix removed.
pub struct GzipReader<R: Read = BufReader<File>> {
    decoder: GzDecoder<R>,
    fallback_name: String,
}

impl GzipReader {
    /// Opens a gzip file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file), member_name_from_path(path)))
    }
}

impl<R: Read> GzipReader<R> {
    /// Creates a reader over a gzip byte stream.
    ///
    /// `fallback_name` is used when the gzip header stores no file name.
    pub fn new(source: R, fallback_name: impl Into<String>) -> Self {
        Self {
            decoder: GzDecoder::new(source),
            fallback_name: fallback_name.into(),
        }
    }

    /// Decodes the member to the end so that a damaged stream is reported.
    fn read_member(&mut self) -> Result<RawEntry> {
        io::copy(&mut self.decoder, &mut io::sink())
            .map_err(|e| InspectionError::read("gz", format!("failed to decompress: {e}")))?;

        let name = self
            .decoder
            .header()
            .and_then(flate2::GzHeader::filename)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.fallback_name.clone());

        Ok(RawEntry::new(name, false))
    }
}

impl<R: Read> FormatReader for GzipReader<R> {
    fn format(&self) -> ArchiveFormat {
        ArchiveFormat::Gz
    }

    fn entries(&mut self) -> Result<EntryStream<'_>> {
        let member = self.read_member();
        Ok(Box::new(std::iter::once(member)))
    }
}

/// Derives the member name from an archive path, e.g. `notes.txt.gz` gives
/// `notes.txt`.
#[must_use]
pub fn member_name_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let lower = name.to_ascii_lowercase();
    if lower.ends_with(".gz") && name.len() > 3 {
        name[..name.len() - 3].to_string()
    } else {
        name
    }
}
