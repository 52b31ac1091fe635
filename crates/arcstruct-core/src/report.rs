//! Structure and extension reports.

pub mod collation;

use std::io;
use std::io::Write;

use crate::config::LineEnding;
use crate::formats::ArchiveFormat;
use crate::inspection::ArchiveEntry;
use crate::inspection::ExtensionSet;

/// Renders `lines` with every line terminated, including the last.
fn join_lines(lines: &[String], ending: LineEnding) -> String {
    let terminator = ending.as_str();
    let capacity = lines.iter().map(|l| l.len() + terminator.len()).sum();
    let mut text = String::with_capacity(capacity);
    for line in lines {
        text.push_str(line);
        text.push_str(terminator);
    }
    text
}

fn write_lines<W: Write>(lines: &[String], writer: &mut W, ending: LineEnding) -> io::Result<()> {
    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(ending.as_str().as_bytes())?;
    }
    writer.flush()
}

/// Sorted entry paths with directories slash-terminated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureDocument {
    lines: Vec<String>,
}

impl StructureDocument {
    /// Report lines in collation order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the archive had no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Renders the document as text.
    #[must_use]
    pub fn to_text(&self, ending: LineEnding) -> String {
        join_lines(&self.lines, ending)
    }

    /// Writes the document to `writer`.
    ///
    /// # Errors
    ///
    /// Returns any error from the writer.
    pub fn write_to<W: Write>(&self, writer: &mut W, ending: LineEnding) -> io::Result<()> {
        write_lines(&self.lines, writer, ending)
    }
}

/// Unique file extensions in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionDocument {
    lines: Vec<String>,
}

impl ExtensionDocument {
    /// Extensions in first-seen order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of distinct extensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if no file carried an extension.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Renders the document as text.
    #[must_use]
    pub fn to_text(&self, ending: LineEnding) -> String {
        join_lines(&self.lines, ending)
    }

    /// Writes the document to `writer`.
    ///
    /// # Errors
    ///
    /// Returns any error from the writer.
    pub fn write_to<W: Write>(&self, writer: &mut W, ending: LineEnding) -> io::Result<()> {
        write_lines(&self.lines, writer, ending)
    }
}

/// Builds the structure document from classified entries.
///
/// One line is emitted per entry. Entries that render to the same line, such
/// as a path stored twice or `bin` next to `bin/`, stay as repeated lines so
/// the report mirrors the archive's own listing.
///
/// # Examples
///
/// ```
/// use arcstruct_core::inspection::ArchiveEntry;
/// use arcstruct_core::report::render_structure;
///
/// let entries = vec![
///     ArchiveEntry { path: "b".into(), is_directory: true, extension: None },
///     ArchiveEntry { path: "a.txt".into(), is_directory: false, extension: Some(".txt".into()) },
/// ];
/// let doc = render_structure(&entries);
/// assert_eq!(doc.lines(), &["a.txt", "b/"]);
/// ```
#[must_use]
pub fn render_structure(entries: &[ArchiveEntry]) -> StructureDocument {
    let mut lines: Vec<String> = entries.iter().map(ArchiveEntry::display_path).collect();
    collation::sort(&mut lines);
    StructureDocument { lines }
}

/// Builds the extension document.
#[must_use]
pub fn render_extensions(extensions: &ExtensionSet) -> ExtensionDocument {
    ExtensionDocument {
        lines: extensions.as_slice().to_vec(),
    }
}

/// Result of one structure extraction run.
#[derive(Debug, Clone)]
pub struct StructureReport {
    /// Format whose reader produced the entries.
    pub format: ArchiveFormat,

    /// Sorted entry paths.
    pub structure: StructureDocument,

    /// Distinct extensions.
    pub extensions: ExtensionDocument,

    /// Number of entries classified as files.
    pub files: usize,

    /// Number of entries classified as directories.
    pub directories: usize,

    /// Read failure that ended a lenient run early.
    pub truncation: Option<String>,
}

impl StructureReport {
    /// Returns total number of entries.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.files + self.directories
    }

    /// Returns `true` if the whole archive was read.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.truncation.is_none()
    }
}
