//! Archive format tags and detection.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::InspectionError;
use crate::Result;

/// Archive format tags.
///
/// `Rzip` and `SevenZMac` are recognized but have no reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveFormat {
    /// ZIP archive.
    Zip,
    /// 7z archive.
    SevenZ,
    /// Gzip-compressed tar archive.
    TarGz,
    /// Plain gzip file.
    Gz,
    /// RZIP file (no reader).
    Rzip,
    /// Mac 7z variant (no reader).
    SevenZMac,
}

impl ArchiveFormat {
    /// All known formats, in tag order.
    pub const ALL: [Self; 6] = [
        Self::Zip,
        Self::SevenZ,
        Self::TarGz,
        Self::Gz,
        Self::Rzip,
        Self::SevenZMac,
    ];

    /// Canonical tag without leading dot.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::SevenZ => "7z",
            Self::TarGz => "tar.gz",
            Self::Gz => "gz",
            Self::Rzip => "rz",
            Self::SevenZMac => "s7z",
        }
    }

    /// Returns `true` if a reader exists for this format.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::Rzip | Self::SevenZMac)
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ArchiveFormat {
    type Err = InspectionError;

    /// Parses a tag such as `zip`, `.tar.gz` or `7Z`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let tag = trimmed.strip_prefix('.').unwrap_or(trimmed);
        let lower = tag.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.tag() == lower)
            .ok_or_else(|| InspectionError::UnsupportedFormat {
                tag: trimmed.to_string(),
            })
    }
}

/// Detects the archive format from a file name.
///
/// The tag is everything from the first `.` of the file name, so
/// `backup.tar.gz` is `tar.gz` and `photos.zip` is `zip`.
///
/// # Errors
///
/// Returns `UnsupportedFormat` if the name has no dot or the tag is unknown.
pub fn detect_format(path: &Path) -> Result<ArchiveFormat> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    let tag = name
        .find('.')
        .map(|idx| &name[idx..])
        .ok_or_else(|| InspectionError::UnsupportedFormat {
            tag: name.to_string(),
        })?;

    tag.parse()
}
