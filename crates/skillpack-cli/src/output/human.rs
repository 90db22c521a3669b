//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use skillpack_core::PackReport;
use skillpack_core::UnpackReport;
use skillpack_core::ValidationReport;
use std::path::Path;

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

    #[allow(clippy::cast_precision_loss)]
    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn headline(&self, message: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(message);
        }
    }

    fn line(&self, label: &str, value: impl std::fmt::Display) {
        let _ = self.term.write_line(&format!("  {label:<20}{value}"));
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_validation_result(&self, skill_path: &Path, report: &ValidationReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.headline("Skill package is valid");
        self.line("Skill ID:", &report.skill_id);
        self.line(
            "Version:",
            report.version.as_deref().unwrap_or("(not declared)"),
        );
        self.line("Source:", report.source_type.as_str());

        if self.verbose {
            self.line("Path:", skill_path.display());
        }

        Ok(())
    }

    fn format_pack_result(&self, report: &PackReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.headline(&format!("Package created: {}", report.zip_path.display()));
        self.line("Top-level directory:", &report.top_level_dir);
        self.line("Files added:", report.files_added);
        self.line("Total size:", Self::format_size(report.bytes_written));

        if self.verbose {
            self.line("Source:", report.source_dir.display());
            self.line("Duration:", format!("{:?}", report.duration));
        }

        Ok(())
    }

    fn format_unpack_result(&self, report: &UnpackReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let extraction = &report.extraction;
        self.headline(&format!("Package unpacked: {}", report.skill_dir.display()));
        self.line("Top-level directory:", &report.top_level_dir);
        self.line("Files written:", extraction.files_written);
        self.line("Directories:", extraction.directories_created);
        self.line("Total size:", Self::format_size(extraction.bytes_written));

        if extraction.entries_skipped > 0 {
            self.line("Entries skipped:", extraction.entries_skipped);
        }

        if self.verbose {
            self.line("Duration:", format!("{:?}", extraction.duration));
        }

        Ok(())
    }

    fn format_error(&self, _operation: &str, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("ERROR: {error:?}"));
        }
    }
}
