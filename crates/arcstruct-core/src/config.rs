//! Configuration for archive inspection.

/// How read failures part-way through an archive are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadStrictness {
    /// The first read failure aborts the run and is returned as an error.
    #[default]
    Strict,
    /// Entries read before a failure are kept and reading stops.
    ///
    /// The failure is recorded in `StructureReport::truncation`.
    Lenient,
}

/// Rule deciding whether an entry is a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryRule {
    /// An entry is a directory iff its final path segment has no `.`.
    ///
    /// Any directory flag stored by the archive format is ignored. A file
    /// named `README` is therefore reported as a directory.
    #[default]
    PathHeuristic,
    /// The format's own directory flag (or a trailing `/`) decides.
    ///
    /// Falls back to the path heuristic when the format stores no flag.
    NativeFlag,
}

/// Interpretation of plain `.gz` files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GzipMode {
    /// The decompressed payload is read as a tar stream.
    #[default]
    TarPayload,
    /// The file is a single compressed member, reported as one entry.
    SingleMember,
}

/// Line terminator used when rendering documents as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\r\n`
    #[default]
    Crlf,
    /// `\n`
    Lf,
}

impl LineEnding {
    /// Returns the terminator string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Crlf => "\r\n",
            Self::Lf => "\n",
        }
    }
}

/// Inspection configuration.
///
/// # Examples
///
/// ```
/// use arcstruct_core::InspectionConfig;
/// use arcstruct_core::config::ReadStrictness;
///
/// // Defaults reproduce the classic report layout
/// let config = InspectionConfig::default();
///
/// // Keep whatever was readable from a damaged archive
/// let lenient = InspectionConfig {
///     strictness: ReadStrictness::Lenient,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct InspectionConfig {
    /// Handling of mid-stream read failures.
    pub strictness: ReadStrictness,

    /// Directory classification rule.
    pub directory_rule: DirectoryRule,

    /// Interpretation of plain `.gz` files.
    pub gzip_mode: GzipMode,

    /// Maximum number of entries accepted from one archive.
    pub max_entries: usize,

    /// Line terminator for rendered documents.
    pub line_ending: LineEnding,
}

impl Default for InspectionConfig {
    /// Default values:
    /// - `strictness`: `Strict`
    /// - `directory_rule`: `PathHeuristic`
    /// - `gzip_mode`: `TarPayload`
    /// - `max_entries`: 1,000,000
    /// - `line_ending`: `Crlf`
    fn default() -> Self {
        Self {
            strictness: ReadStrictness::default(),
            directory_rule: DirectoryRule::default(),
            gzip_mode: GzipMode::default(),
            max_entries: 1_000_000,
            line_ending: LineEnding::default(),
        }
    }
}

impl InspectionConfig {
    /// Configuration that prefers archive metadata over name heuristics.
    ///
    /// Uses native directory flags and treats plain `.gz` files as single
    /// compressed members.
    #[must_use]
    pub fn metadata_driven() -> Self {
        Self {
            directory_rule: DirectoryRule::NativeFlag,
            gzip_mode: GzipMode::SingleMember,
            ..Self::default()
        }
    }
}
