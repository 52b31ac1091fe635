//! Human-readable output formatter with colors and styling.

use super::formatter::InspectionSummary;
use super::formatter::OutputFormatter;
use anyhow::Result;
use arcstruct_core::ArchiveFormat;
use console::Term;
use console::style;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
    err_term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();
        let mut count = 0;

        for c in s.chars().rev() {
            if count == 3 {
                result.push(',');
                count = 0;
            }
            result.push(c);
            count += 1;
        }

        result.chars().rev().collect()
    }

    fn heading(&self, text: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{}", style(text).cyan().bold()));
        } else {
            let _ = self.term.write_line(text);
        }
    }

    fn write_documents(&self, summary: &InspectionSummary<'_>) {
        self.heading("Structure:");
        for line in summary.report.structure.lines() {
            let _ = self.term.write_line(line);
        }
        let _ = self.term.write_line("");
        self.heading("Extensions:");
        for line in summary.report.extensions.lines() {
            let _ = self.term.write_line(line);
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_inspection_result(&self, summary: &InspectionSummary<'_>) -> Result<()> {
        // Requested documents are printed even in quiet mode
        if summary.print_documents {
            self.write_documents(summary);
        }

        if self.quiet {
            return Ok(());
        }

        let report = summary.report;
        let status = if report.is_complete() {
            "Inspection complete"
        } else {
            "Inspection incomplete"
        };

        if summary.print_documents {
            let _ = self.term.write_line("");
        }
        if self.use_colors {
            let mark = if report.is_complete() {
                style("✓").green().bold()
            } else {
                style("⚠").yellow().bold()
            };
            let _ = self.term.write_line(&format!(
                "{mark} {status}: {}",
                summary.archive.display()
            ));
        } else {
            let _ = self
                .term
                .write_line(&format!("{status}: {}", summary.archive.display()));
        }

        let _ = self.term.write_line(&format!(
            "  Files:        {}",
            Self::format_number(report.files)
        ));
        let _ = self.term.write_line(&format!(
            "  Directories:  {}",
            Self::format_number(report.directories)
        ));
        let _ = self.term.write_line(&format!(
            "  Extensions:   {}",
            Self::format_number(report.extensions.len())
        ));

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Format:       {}", report.format));
            if let Some(reason) = &report.truncation {
                let _ = self.term.write_line(&format!("  Stopped at:   {reason}"));
            }
        }

        for path in summary.written {
            let _ = self
                .term
                .write_line(&format!("  Wrote {}", path.display()));
        }

        Ok(())
    }

    fn format_formats(&self, formats: &[ArchiveFormat]) -> Result<()> {
        for format in formats {
            let state = if format.is_supported() {
                "supported"
            } else {
                "not implemented"
            };
            let state = if self.use_colors {
                if format.is_supported() {
                    style(state).green().to_string()
                } else {
                    style(state).dim().to_string()
                }
            } else {
                state.to_string()
            };
            let _ = self.term.write_line(&format!("{:<8} {state}", format.tag()));
        }

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("ERROR: {error:?}"));
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("WARNING: {message}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_small() {
        assert_eq!(HumanFormatter::format_number(0), "0");
        assert_eq!(HumanFormatter::format_number(42), "42");
        assert_eq!(HumanFormatter::format_number(999), "999");
    }

    #[test]
    fn test_format_number_thousands() {
        assert_eq!(HumanFormatter::format_number(1000), "1,000");
        assert_eq!(HumanFormatter::format_number(1_234_567), "1,234,567");
    }
}
