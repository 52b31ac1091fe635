//! Path-based entry classification.
//!
//! Entry names are classified purely by their text: the final path segment
//! decides whether an entry is a directory and which extension it carries.

/// Result of classifying one archive path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'a> {
    /// Extension including the leading dot, e.g. `.tar.gz`.
    pub extension: Option<&'a str>,
    /// Whether the path denotes a directory.
    pub is_directory: bool,
}

/// Returns the substring after the last `/`, or the whole path.
///
/// ```
/// use arcstruct_core::classify::final_segment;
///
/// assert_eq!(final_segment("a/b/c.txt"), "c.txt");
/// assert_eq!(final_segment("dir/"), "");
/// assert_eq!(final_segment("plain"), "plain");
/// ```
#[must_use]
pub fn final_segment(path: &str) -> &str {
    path.rfind('/').map_or(path, |idx| &path[idx + 1..])
}

/// Classifies a path as file or directory and extracts its extension.
///
/// A path whose final segment has no `.` is a directory. Otherwise it is a
/// file whose extension runs from the *first* `.` of the final segment to
/// the end, so `archive.tar.gz` yields `.tar.gz` and `.bashrc` yields
/// `.bashrc`.
///
/// # Examples
///
/// ```
/// use arcstruct_core::classify::classify;
///
/// let c = classify("a/b/c.txt");
/// assert_eq!(c.extension, Some(".txt"));
/// assert!(!c.is_directory);
///
/// let c = classify("a.b/c");
/// assert_eq!(c.extension, None);
/// assert!(c.is_directory);
/// ```
#[must_use]
pub fn classify(path: &str) -> Classification<'_> {
    let segment = final_segment(path);
    match segment.find('.') {
        Some(dot) => Classification {
            extension: Some(&segment[dot..]),
            is_directory: false,
        },
        None => Classification {
            extension: None,
            is_directory: true,
        },
    }
}

/// Extension of the final segment, if any.
#[must_use]
pub fn extension_of(path: &str) -> Option<&str> {
    classify(path).extension
}

/// Returns `true` if `path` is a directory without a trailing `/`.
#[must_use]
pub fn needs_slash(path: &str) -> bool {
    classify(path).is_directory && !path.ends_with('/')
}
