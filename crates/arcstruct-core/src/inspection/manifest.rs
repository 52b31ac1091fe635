//! Normalized entries and extension sets.

use std::collections::HashSet;

/// One classified entry of an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Stored path, segments joined by `/`. Never empty.
    pub path: String,
    /// Whether the entry is reported as a directory.
    pub is_directory: bool,
    /// Extension including the leading dot, present only for files.
    pub extension: Option<String>,
}

impl ArchiveEntry {
    /// Path as it appears in the structure report.
    ///
    /// Directories always end with `/`.
    ///
    /// ```
    /// use arcstruct_core::inspection::ArchiveEntry;
    ///
    /// let entry = ArchiveEntry {
    ///     path: "bin".to_string(),
    ///     is_directory: true,
    ///     extension: None,
    /// };
    /// assert_eq!(entry.display_path(), "bin/");
    /// ```
    #[must_use]
    pub fn display_path(&self) -> String {
        if self.is_directory && !self.path.ends_with('/') {
            format!("{}/", self.path)
        } else {
            self.path.clone()
        }
    }
}

/// Distinct extensions in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl ExtensionSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an extension. Returns `false` if it was already present.
    pub fn insert(&mut self, extension: &str) -> bool {
        if self.seen.contains(extension) {
            return false;
        }
        self.seen.insert(extension.to_string());
        self.ordered.push(extension.to_string());
        true
    }

    /// Returns `true` if the extension has been recorded.
    #[must_use]
    pub fn contains(&self, extension: &str) -> bool {
        self.seen.contains(extension)
    }

    /// Extensions in first-seen order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.ordered
    }

    /// Iterates extensions in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// Number of distinct extensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Returns `true` if no extension was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for ExtensionSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for extension in iter {
            set.insert(extension);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order_and_dedup() {
        let set: ExtensionSet = [".txt", ".jpg", ".txt", ".png"].into_iter().collect();
        assert_eq!(set.as_slice(), &[".txt", ".jpg", ".png"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_insert_reports_duplicates() {
        let mut set = ExtensionSet::new();
        assert!(set.is_empty());
        assert!(set.insert(".md"));
        assert!(!set.insert(".md"));
        assert!(set.contains(".md"));
        assert!(!set.contains(".MD"));
    }

    #[test]
    fn test_display_path() {
        let dir = ArchiveEntry {
            path: "docs/".to_string(),
            is_directory: true,
            extension: None,
        };
        assert_eq!(dir.display_path(), "docs/");

        let file = ArchiveEntry {
            path: "docs/a.md".to_string(),
            is_directory: false,
            extension: Some(".md".to_string()),
        };
        assert_eq!(file.display_path(), "docs/a.md");
    }
}
