//! Archive structure and extension reports without extraction.
//!
//! `arcstruct-core` reads the entry headers of ZIP, 7z, gzip-wrapped tar and
//! plain gzip archives and produces two in-memory documents: the sorted path
//! structure, with directories slash-terminated, and the distinct file
//! extensions in discovery order. File contents are never written to disk.
//!
//! # Examples
//!
//! ```no_run
//! use arcstruct_core::InspectionConfig;
//! use arcstruct_core::inspect_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = InspectionConfig::default();
//! let report = inspect_archive("archive.tar.gz", &config)?;
//! for line in report.structure.lines() {
//!     println!("{line}");
//! }
//! println!("{} distinct extensions", report.extensions.len());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod classify;
pub mod config;
pub mod error;
pub mod extractor;
pub mod formats;
pub mod inspection;
pub mod report;

#[doc(hidden)]
pub mod test_utils;

// Re-export main API types
pub use api::extract_structure;
pub use api::inspect_archive;
pub use config::InspectionConfig;
pub use error::InspectionError;
pub use error::Result;
pub use extractor::ArchiveStructureExtractor;
pub use formats::ArchiveFormat;
pub use formats::detect_format;
pub use report::ExtensionDocument;
pub use report::StructureDocument;
pub use report::StructureReport;
