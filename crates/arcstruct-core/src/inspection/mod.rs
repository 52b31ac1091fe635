//! Archive inspection without extraction.
//!
//! Entries are streamed from a format reader, classified by path and
//! accumulated together with the distinct extensions of file entries.
//! Nothing is written to disk.
//!
//! # Examples
//!
//! ```
//! use arcstruct_core::InspectionConfig;
//! use arcstruct_core::formats::RawEntry;
//! use arcstruct_core::inspection::collect;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let raw = vec![
//!     Ok(RawEntry::unflagged("docs/readme.md")),
//!     Ok(RawEntry::unflagged("docs")),
//! ];
//! let config = InspectionConfig::default();
//! let collection = collect(Box::new(raw.into_iter()), "zip", &config)?;
//! assert_eq!(collection.entries.len(), 2);
//! assert_eq!(collection.extensions.as_slice(), &[".md"]);
//! # Ok(())
//! # }
//! ```

pub mod collect;
pub mod manifest;

pub use collect::Collection;
pub use collect::StructureCollector;
pub use collect::classify_entry;
pub use collect::collect;
pub use manifest::ArchiveEntry;
pub use manifest::ExtensionSet;
