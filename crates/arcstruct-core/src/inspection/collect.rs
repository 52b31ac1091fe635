//! Entry collection.
//!
//! Turns a reader's raw entry stream into classified entries plus the set of
//! extensions seen, in one pass.

use tracing::trace;
use tracing::warn;

use crate::InspectionConfig;
use crate::InspectionError;
use crate::Result;
use crate::classify::classify;
use crate::config::DirectoryRule;
use crate::config::ReadStrictness;
use crate::formats::EntryStream;
use crate::formats::RawEntry;
use crate::inspection::manifest::ArchiveEntry;
use crate::inspection::manifest::ExtensionSet;

/// Output of one collection pass.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    /// Classified entries in stored order.
    pub entries: Vec<ArchiveEntry>,
    /// Extensions of file entries in first-seen order.
    pub extensions: ExtensionSet,
    /// Read failure that ended a lenient pass early.
    pub truncation: Option<String>,
}

impl Collection {
    /// Number of entries classified as files.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_directory).count()
    }

    /// Number of entries classified as directories.
    #[must_use]
    pub fn directory_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_directory).count()
    }
}

/// Accumulates classified entries and extensions.
#[derive(Debug)]
pub struct StructureCollector<'a> {
    config: &'a InspectionConfig,
    format: &'static str,
    collection: Collection,
}

impl<'a> StructureCollector<'a> {
    /// Creates a collector for entries read by the `format` reader.
    #[must_use]
    pub fn new(config: &'a InspectionConfig, format: &'static str) -> Self {
        Self {
            config,
            format,
            collection: Collection::default(),
        }
    }

    /// Classifies and records one raw entry.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveRead` for an empty entry name and
    /// `EntryLimitExceeded` once `max_entries` entries were recorded.
    pub fn push(&mut self, raw: RawEntry) -> Result<()> {
        if raw.path.is_empty() {
            return Err(InspectionError::read(self.format, "entry with empty name"));
        }
        if self.collection.entries.len() >= self.config.max_entries {
            return Err(InspectionError::EntryLimitExceeded {
                limit: self.config.max_entries,
            });
        }

        let entry = classify_entry(raw, self.config.directory_rule);
        trace!(path = %entry.path, is_directory = entry.is_directory, "collected entry");

        if let Some(extension) = &entry.extension {
            self.collection.extensions.insert(extension);
        }
        self.collection.entries.push(entry);
        Ok(())
    }

    /// Number of entries recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collection.entries.len()
    }

    /// Returns `true` if nothing was recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collection.entries.is_empty()
    }

    /// Consumes the collector.
    #[must_use]
    pub fn finish(self, truncation: Option<String>) -> Collection {
        Collection {
            truncation,
            ..self.collection
        }
    }
}

/// Applies the directory rule to a raw entry.
#[must_use]
pub fn classify_entry(raw: RawEntry, rule: DirectoryRule) -> ArchiveEntry {
    let classification = classify(&raw.path);
    let is_directory = match rule {
        DirectoryRule::PathHeuristic => classification.is_directory,
        DirectoryRule::NativeFlag => {
            raw.path.ends_with('/')
                || raw
                    .native_directory
                    .unwrap_or(classification.is_directory)
        }
    };
    let extension = if is_directory {
        None
    } else {
        classification.extension.map(str::to_string)
    };

    ArchiveEntry {
        path: raw.path,
        is_directory,
        extension,
    }
}

/// Consumes an entry stream to exhaustion.
///
/// In `Strict` mode the first read failure is returned and everything read
/// so far is discarded. In `Lenient` mode the entries read before the
/// failure are returned and `Collection::truncation` holds the failure.
/// Limit violations are always returned as errors.
///
/// # Errors
///
/// Returns the read failure (strict mode) or `EntryLimitExceeded`.
pub fn collect(
    stream: EntryStream<'_>,
    format: &'static str,
    config: &InspectionConfig,
) -> Result<Collection> {
    let mut collector = StructureCollector::new(config, format);

    for item in stream {
        let outcome = item.and_then(|raw| collector.push(raw));
        if let Err(err) = outcome {
            if config.strictness == ReadStrictness::Lenient && err.is_read_error() {
                warn!(
                    format,
                    entries = collector.len(),
                    error = %err,
                    "archive read stopped early"
                );
                return Ok(collector.finish(Some(err.to_string())));
            }
            return Err(err);
        }
    }

    Ok(collector.finish(None))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn stream(items: Vec<Result<RawEntry>>) -> EntryStream<'static> {
        Box::new(items.into_iter())
    }

    fn ok(path: &str) -> Result<RawEntry> {
        Ok(RawEntry::unflagged(path))
    }

    #[test]
    fn test_collect_classifies_by_path() {
        let config = InspectionConfig::default();
        let collection = collect(
            stream(vec![ok("docs/readme.md"), ok("bin"), ok("docs/images/logo.png")]),
            "zip",
            &config,
        )
        .unwrap();

        assert_eq!(collection.entries.len(), 3);
        assert!(!collection.entries[0].is_directory);
        assert!(collection.entries[1].is_directory);
        assert_eq!(collection.extensions.as_slice(), &[".md", ".png"]);
        assert_eq!(collection.file_count(), 2);
        assert_eq!(collection.directory_count(), 1);
        assert!(collection.truncation.is_none());
    }

    #[test]
    fn test_extensions_first_seen_order() {
        let config = InspectionConfig::default();
        let collection = collect(
            stream(vec![ok("a.txt"), ok("b.jpg"), ok("c/d.txt"), ok("e.png")]),
            "zip",
            &config,
        )
        .unwrap();
        assert_eq!(collection.extensions.as_slice(), &[".txt", ".jpg", ".png"]);
    }

    #[test]
    fn test_path_heuristic_ignores_native_flag() {
        let file_named_like_dir = RawEntry::new("README", false);
        let entry = classify_entry(file_named_like_dir, DirectoryRule::PathHeuristic);
        assert!(entry.is_directory);
        assert_eq!(entry.extension, None);

        let dir_with_dot = RawEntry::new("lib.d", true);
        let entry = classify_entry(dir_with_dot, DirectoryRule::PathHeuristic);
        assert!(!entry.is_directory);
        assert_eq!(entry.extension.as_deref(), Some(".d"));
    }

    #[test]
    fn test_native_flag_rule() {
        let readme = classify_entry(RawEntry::new("README", false), DirectoryRule::NativeFlag);
        assert!(!readme.is_directory);
        assert_eq!(readme.extension, None);

        let dotted_dir = classify_entry(RawEntry::new("v1.2", true), DirectoryRule::NativeFlag);
        assert!(dotted_dir.is_directory);
        assert_eq!(dotted_dir.extension, None);
        assert_eq!(dotted_dir.display_path(), "v1.2/");

        let unflagged = classify_entry(RawEntry::unflagged("bin"), DirectoryRule::NativeFlag);
        assert!(unflagged.is_directory);

        let slash = classify_entry(RawEntry::new("out/", false), DirectoryRule::NativeFlag);
        assert!(slash.is_directory);
    }

    #[test]
    fn test_strict_mode_discards_partial_state() {
        let config = InspectionConfig::default();
        let result = collect(
            stream(vec![
                ok("a.txt"),
                Err(InspectionError::read("tar.gz", "unexpected EOF")),
            ]),
            "tar.gz",
            &config,
        );
        assert!(matches!(result, Err(InspectionError::ArchiveRead { .. })));
    }

    #[test]
    fn test_lenient_mode_keeps_entries_and_records_failure() {
        let config = InspectionConfig {
            strictness: ReadStrictness::Lenient,
            ..Default::default()
        };
        let collection = collect(
            stream(vec![
                ok("a.txt"),
                ok("b/"),
                Err(InspectionError::read("tar.gz", "unexpected EOF")),
            ]),
            "tar.gz",
            &config,
        )
        .unwrap();

        assert_eq!(collection.entries.len(), 2);
        let truncation = collection.truncation.unwrap();
        assert!(truncation.contains("unexpected EOF"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let config = InspectionConfig::default();
        let result = collect(stream(vec![ok("")]), "zip", &config);
        assert!(matches!(
            result,
            Err(InspectionError::ArchiveRead { format: "zip", .. })
        ));
    }

    #[test]
    fn test_entry_limit() {
        let config = InspectionConfig {
            max_entries: 2,
            strictness: ReadStrictness::Lenient,
            ..Default::default()
        };
        let result = collect(stream(vec![ok("a.txt"), ok("b.txt"), ok("c.txt")]), "zip", &config);
        assert!(matches!(
            result,
            Err(InspectionError::EntryLimitExceeded { limit: 2 })
        ));
    }

    #[test]
    fn test_collector_push_and_finish() {
        let config = InspectionConfig::default();
        let mut collector = StructureCollector::new(&config, "zip");
        assert!(collector.is_empty());
        collector.push(RawEntry::unflagged("x.tar.gz")).unwrap();
        assert_eq!(collector.len(), 1);

        let collection = collector.finish(None);
        assert_eq!(collection.extensions.as_slice(), &[".tar.gz"]);
    }
}
