//! Inspect command implementation.

use crate::cli::InspectArgs;
use crate::error::add_archive_context;
use crate::output::InspectionSummary;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use arcstruct_core::ArchiveFormat;
use arcstruct_core::detect_format;
use arcstruct_core::extract_structure;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

pub fn execute(args: &InspectArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let config = args.config();

    let format = match &args.format {
        Some(tag) => add_archive_context(tag.parse::<ArchiveFormat>(), &args.archive)?,
        None => add_archive_context(detect_format(&args.archive), &args.archive)?,
    };

    let report = add_archive_context(
        extract_structure(&args.archive, format, &config),
        &args.archive,
    )?;

    if let Some(reason) = &report.truncation {
        formatter.format_warning(&format!(
            "'{}' could not be read completely; reports hold the {} entries read before: {reason}",
            args.archive.display(),
            report.total_entries()
        ));
    }

    let mut written = Vec::new();
    if !args.print {
        let output_dir = match &args.output_dir {
            Some(dir) => dir.clone(),
            None => env::current_dir().context("failed to get current directory")?,
        };
        let (structure_path, extensions_path) = report_paths(&args.archive, &output_dir)?;

        fs::write(&structure_path, report.structure.to_text(config.line_ending))
            .with_context(|| format!("failed to write '{}'", structure_path.display()))?;
        fs::write(&extensions_path, report.extensions.to_text(config.line_ending))
            .with_context(|| format!("failed to write '{}'", extensions_path.display()))?;

        written.push(structure_path);
        written.push(extensions_path);
    }

    formatter.format_inspection_result(&InspectionSummary {
        archive: &args.archive,
        report: &report,
        written: &written,
        print_documents: args.print,
    })
}

/// Report base name: the archive file name with every `.` removed.
fn report_stem(archive: &Path) -> Result<String> {
    let name = archive.file_name().with_context(|| {
        format!(
            "cannot name reports after '{}': path has no file name",
            archive.display()
        )
    })?;
    let stem = name.to_string_lossy().replace('.', "");
    if stem.is_empty() {
        bail!(
            "cannot name reports after '{}': file name is only dots",
            archive.display()
        );
    }
    Ok(stem)
}

/// Paths of the structure and extension reports for `archive`.
fn report_paths(archive: &Path, output_dir: &Path) -> Result<(PathBuf, PathBuf)> {
    let stem = report_stem(archive)?;
    Ok((
        output_dir.join(format!("{stem}-Structure.txt")),
        output_dir.join(format!("{stem}-Extensions.txt")),
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_report_stem_removes_dots() {
        assert_eq!(report_stem(Path::new("/data/backup.tar.gz")).unwrap(), "backuptargz");
        assert_eq!(report_stem(Path::new("photos.zip")).unwrap(), "photoszip");
        assert_eq!(report_stem(Path::new("v1.2.release.7z")).unwrap(), "v12release7z");
    }

    #[test]
    fn test_report_stem_requires_file_name() {
        let err = report_stem(Path::new("..")).unwrap_err();
        assert!(err.to_string().contains("has no file name"));
        assert!(report_stem(Path::new("/")).is_err());
    }

    #[test]
    fn test_report_stem_rejects_dots_only() {
        let err = report_stem(Path::new("archives/...")).unwrap_err();
        assert!(err.to_string().contains("only dots"));
    }

    #[test]
    fn test_report_paths_propagates_missing_name() {
        assert!(report_paths(Path::new(".."), Path::new("/out")).is_err());
    }

    #[test]
    fn test_report_paths() {
        let (structure, extensions) =
            report_paths(Path::new("a/site.zip"), Path::new("/out")).unwrap();
        assert_eq!(structure, Path::new("/out/sitezip-Structure.txt"));
        assert_eq!(extensions, Path::new("/out/sitezip-Extensions.txt"));
    }
}
