//! Error types for archive inspection operations.

use thiserror::Error;

/// Result type alias using `InspectionError`.
pub type Result<T> = std::result::Result<T, InspectionError>;

/// Errors that can occur while inspecting an archive.
#[derive(Error, Debug)]
pub enum InspectionError {
    /// The archive file could not be opened or read from disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Format tag is not implemented or not recognized.
    #[error("unsupported archive format: {tag}")]
    UnsupportedFormat {
        /// The format tag as supplied by the caller.
        tag: String,
    },

    /// Archive stream is corrupted, truncated, or violates its format.
    #[error("failed to read {format} archive: {reason}")]
    ArchiveRead {
        /// Format name of the reader that failed (e.g. "zip").
        format: &'static str,
        /// Description of the failure.
        reason: String,
    },

    /// Archive holds more entries than the configured limit.
    #[error("archive exceeds the entry limit of {limit}")]
    EntryLimitExceeded {
        /// Configured maximum number of entries.
        limit: usize,
    },
}

impl InspectionError {
    /// Creates an `ArchiveRead` error for the given reader.
    pub fn read(format: &'static str, reason: impl Into<String>) -> Self {
        Self::ArchiveRead {
            format,
            reason: reason.into(),
        }
    }

    /// Returns `true` if the archive itself could not be read.
    ///
    /// Both open failures and structural violations count as read errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcstruct_core::InspectionError;
    ///
    /// let err = InspectionError::read("tar.gz", "unexpected end of file");
    /// assert!(err.is_read_error());
    ///
    /// let err = InspectionError::UnsupportedFormat { tag: "rz".into() };
    /// assert!(!err.is_read_error());
    /// ```
    #[must_use]
    pub const fn is_read_error(&self) -> bool {
        matches!(self, Self::Io(_) | Self::ArchiveRead { .. })
    }

    /// Returns `true` if the requested format cannot be handled.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. })
    }

    /// Returns a context string for this error, if available.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcstruct_core::InspectionError;
    ///
    /// let err = InspectionError::read("zip", "bad central directory");
    /// assert_eq!(err.context(), Some("bad central directory"));
    ///
    /// let err = InspectionError::EntryLimitExceeded { limit: 10 };
    /// assert_eq!(err.context(), None);
    /// ```
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::ArchiveRead { reason, .. } => Some(reason),
            Self::UnsupportedFormat { tag } => Some(tag),
            _ => None,
        }
    }
}
