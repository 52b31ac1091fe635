//! CLI argument parsing using clap.

use arcstruct_core::InspectionConfig;
use arcstruct_core::config::DirectoryRule;
use arcstruct_core::config::GzipMode;
use arcstruct_core::config::LineEnding;
use arcstruct_core::config::ReadStrictness;
use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "arcstruct")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the structure and extension reports of an archive
    Inspect(InspectArgs),
    /// List known archive format tags
    Formats,
}

#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Archive format tag (zip, 7z, tar.gz, gz); detected from the file name if omitted
    #[arg(short, long, value_name = "TAG")]
    pub format: Option<String>,

    /// Directory for the report files (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Keep entries read before a read failure instead of aborting
    #[arg(long)]
    pub lenient: bool,

    /// Use the archive's own directory flags instead of the dot rule
    #[arg(long)]
    pub native_dirs: bool,

    /// Treat plain .gz files as one compressed file, not a tar stream
    #[arg(long)]
    pub gzip_single: bool,

    /// Terminate report lines with LF instead of CRLF
    #[arg(long)]
    pub lf: bool,

    /// Maximum number of entries to read
    #[arg(long, default_value = "1000000", value_parser = clap::value_parser!(u64).range(1..))]
    pub max_entries: u64,

    /// Print the reports instead of writing report files
    #[arg(short, long)]
    pub print: bool,
}

impl InspectArgs {
    /// Maps command-line flags onto the inspection configuration.
    pub fn config(&self) -> InspectionConfig {
        InspectionConfig {
            strictness: if self.lenient {
                ReadStrictness::Lenient
            } else {
                ReadStrictness::Strict
            },
            directory_rule: if self.native_dirs {
                DirectoryRule::NativeFlag
            } else {
                DirectoryRule::PathHeuristic
            },
            gzip_mode: if self.gzip_single {
                GzipMode::SingleMember
            } else {
                GzipMode::TarPayload
            },
            max_entries: usize::try_from(self.max_entries).unwrap_or(usize::MAX),
            line_ending: if self.lf {
                LineEnding::Lf
            } else {
                LineEnding::Crlf
            },
        }
    }
}
