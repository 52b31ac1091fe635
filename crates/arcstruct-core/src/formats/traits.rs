//! Common traits for archive format readers.

use super::detect::ArchiveFormat;
use crate::Result;

/// Entry descriptor as stored by the archive format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Stored path, segments joined by `/`.
    pub path: String,
    /// Directory flag recorded by the format, if the format has one.
    pub native_directory: Option<bool>,
}

impl RawEntry {
    /// Creates an entry carrying the format's directory flag.
    pub fn new(path: impl Into<String>, is_directory: bool) -> Self {
        Self {
            path: path.into(),
            native_directory: Some(is_directory),
        }
    }

    /// Creates an entry from a format without directory flags.
    pub fn unflagged(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            native_directory: None,
        }
    }
}

/// Lazy stream of entries read from one archive.
///
/// A read failure is yielded as an `Err` item; no items follow it.
pub type EntryStream<'a> = Box<dyn Iterator<Item = Result<RawEntry>> + 'a>;

/// Trait for archive format readers.
///
/// A reader owns the open archive. Dropping it releases the file handle.
pub trait FormatReader {
    /// Returns the archive format this reader handles.
    fn format(&self) -> ArchiveFormat;

    /// Starts reading entries in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry table cannot be located.
    fn entries(&mut self) -> Result<EntryStream<'_>>;

    /// Returns the archive format name.
    fn format_name(&self) -> &'static str {
        self.format().tag()
    }
}

/// Wraps a fallible iterator so that it ends after its first error.
pub(crate) fn fuse_on_error<'a, I>(iter: I) -> EntryStream<'a>
where
    I: Iterator<Item = Result<RawEntry>> + 'a,
{
    let mut failed = false;
    Box::new(iter.map_while(move |item| {
        if failed {
            return None;
        }
        failed = item.is_err();
        Some(item)
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::InspectionError;

    struct TestReader {
        names: Vec<&'static str>,
    }

    impl FormatReader for TestReader {
        fn format(&self) -> ArchiveFormat {
            ArchiveFormat::Zip
        }

        fn entries(&mut self) -> Result<EntryStream<'_>> {
            Ok(Box::new(
                self.names.iter().map(|name| Ok(RawEntry::unflagged(*name))),
            ))
        }
    }

    #[test]
    fn test_trait_implementation() {
        let mut reader = TestReader {
            names: vec!["a.txt", "b/"],
        };
        assert_eq!(reader.format_name(), "zip");

        let paths: Vec<String> = reader
            .entries()
            .unwrap()
            .filter_map(|e| e.ok().map(|e| e.path))
            .collect();
        assert_eq!(paths, vec!["a.txt", "b/"]);
    }

    #[test]
    fn test_raw_entry_constructors() {
        let flagged = RawEntry::new("dir/", true);
        assert_eq!(flagged.native_directory, Some(true));

        let unflagged = RawEntry::unflagged("file.txt");
        assert_eq!(unflagged.native_directory, None);
    }

    #[test]
    fn test_fuse_on_error_stops_after_failure() {
        let items = vec![
            Ok(RawEntry::unflagged("a.txt")),
            Err(InspectionError::read("zip", "broken")),
            Ok(RawEntry::unflagged("never.txt")),
        ];
        let collected: Vec<_> = fuse_on_error(items.into_iter()).collect();
        assert_eq!(collected.len(), 2);
        assert!(collected[0].is_ok());
        assert!(collected[1].is_err());
    }
}
