//! Gzip-compressed tar archive reader.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;

use super::detect::ArchiveFormat;
use super::traits::EntryStream;
use super::traits::FormatReader;
use super::traits::RawEntry;
use super::traits::fuse_on_error;
use crate::InspectionError;
use crate::Result;

/// Tar-in-gzip reader.
///
/// Tar headers are read sequentially from the decompressed stream; entry
/// data is skipped, never buffered. Also used for plain `.gz` files when
/// their payload is assumed to be a tar stream.
pub struct TarGzReader<R: Read = BufReader<File>> {
    archive: tar::Archive<GzDecoder<R>>,
    format: ArchiveFormat,
}

impl TarGzReader {
    /// Opens a gzip-compressed tar archive from disk.
    ///
    /// `format` is reported back by [`FormatReader::format`] and is either
    /// `TarGz` or `Gz`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn open(path: &Path, format: ArchiveFormat) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file), format))
    }
}

impl<R: Read> TarGzReader<R> {
    /// Creates a reader over a gzip byte stream.
    pub fn new(source: R, format: ArchiveFormat) -> Self {
        Self {
            archive: tar::Archive::new(GzDecoder::new(source)),
            format,
        }
    }
}

impl<R: Read> FormatReader for TarGzReader<R> {
    fn format(&self) -> ArchiveFormat {
        self.format
    }

    fn entries(&mut self) -> Result<EntryStream<'_>> {
        let name = self.format.tag();
        let entries = self
            .archive
            .entries()
            .map_err(|e| InspectionError::read(name, format!("failed to read TAR entries: {e}")))?;

        let iter = entries.map(move |entry_result| {
            let entry = entry_result.map_err(|e| {
                InspectionError::read(name, format!("failed to read TAR entry: {e}"))
            })?;
            let path = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
            let is_dir = entry.header().entry_type().is_dir();
            Ok(RawEntry::new(path, is_dir))
        });
        Ok(fuse_on_error(iter))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::TarTestBuilder;
    use crate::test_utils::create_test_tar_gz;
    use crate::test_utils::gzip_bytes;
    use crate::test_utils::noise;
    use crate::test_utils::truncated;
    use std::io::Cursor;

    fn reader(data: Vec<u8>) -> TarGzReader<Cursor<Vec<u8>>> {
        TarGzReader::new(Cursor::new(data), ArchiveFormat::TarGz)
    }

    #[test]
    fn test_format_name() {
        let r = reader(create_test_tar_gz(&[]));
        assert_eq!(r.format_name(), "tar.gz");

        let r = TarGzReader::new(Cursor::new(Vec::new()), ArchiveFormat::Gz);
        assert_eq!(r.format_name(), "gz");
    }

    #[test]
    fn test_entries_in_stored_order() {
        let data = TarTestBuilder::new()
            .add_directory("src/")
            .add_file("src/main.rs", b"fn main() {}")
            .add_file("README", b"readme")
            .build_gz();

        let mut r = reader(data);
        let entries: Vec<RawEntry> = r.entries().unwrap().map(Result::unwrap).collect();

        assert_eq!(entries.len(), 3);
        assert!(entries[0].path.starts_with("src"));
        assert_eq!(entries[0].native_directory, Some(true));
        assert_eq!(entries[1].path, "src/main.rs");
        assert_eq!(entries[1].native_directory, Some(false));
        assert_eq!(entries[2].path, "README");
    }

    #[test]
    fn test_empty_archive() {
        let mut r = reader(create_test_tar_gz(&[]));
        assert_eq!(r.entries().unwrap().count(), 0);
    }

    #[test]
    fn test_truncated_stream_yields_error() {
        let big = noise(64 * 1024);
        let data = TarTestBuilder::new()
            .add_file("a.bin", &big)
            .add_file("b.bin", &big)
            .build_gz();
        let cut = truncated(&data, data.len() / 2);

        let mut r = reader(cut);
        let items: Vec<Result<RawEntry>> = r.entries().map_or_else(|e| vec![Err(e)], Iterator::collect);

        let last = items.last().unwrap();
        assert!(matches!(
            last,
            Err(InspectionError::ArchiveRead { format: "tar.gz", .. })
        ));
    }

    #[test]
    fn test_non_tar_payload_rejected() {
        let data = gzip_bytes(&[0xAB; 1024]);
        let mut r = reader(data);
        let items: Vec<Result<RawEntry>> = r.entries().map_or_else(|e| vec![Err(e)], Iterator::collect);
        assert!(items.iter().any(Result::is_err));
    }

    #[test]
    fn test_not_gzip_rejected() {
        let mut r = reader(b"plain text, not gzip".to_vec());
        let items: Vec<Result<RawEntry>> = r.entries().map_or_else(|e| vec![Err(e)], Iterator::collect);
        assert!(items.iter().any(Result::is_err));
    }

    #[test]
    fn test_open_missing_file() {
        let result = TarGzReader::open(Path::new("/nonexistent/a.tar.gz"), ArchiveFormat::TarGz);
        assert!(matches!(result, Err(InspectionError::Io(_))));
    }
}
