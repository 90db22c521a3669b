//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use crate::error::error_kind;
use crate::error::error_message;
use anyhow::Result;
use serde::Serialize;
use skillpack_core::ErrorKind;
use skillpack_core::PackReport;
use skillpack_core::UnpackReport;
use skillpack_core::ValidationReport;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_validation_result(&self, skill_path: &Path, report: &ValidationReport) -> Result<()> {
        #[derive(Serialize)]
        struct ValidationOutput<'a> {
            valid: bool,
            source_type: &'static str,
            skill_id: &'a str,
            version: Option<&'a str>,
            skill_path: String,
        }

        let data = ValidationOutput {
            valid: true,
            source_type: report.source_type.as_str(),
            skill_id: &report.skill_id,
            version: report.version.as_deref(),
            skill_path: skill_path.display().to_string(),
        };

        Self::output(&JsonOutput::success("validate", data))
    }

    fn format_pack_result(&self, report: &PackReport) -> Result<()> {
        #[derive(Serialize)]
        struct PackOutput<'a> {
            source_dir: String,
            zip_path: String,
            top_level_dir: &'a str,
            files_added: usize,
            bytes_written: u64,
            duration_ms: u128,
        }

        let data = PackOutput {
            source_dir: report.source_dir.display().to_string(),
            zip_path: report.zip_path.display().to_string(),
            top_level_dir: &report.top_level_dir,
            files_added: report.files_added,
            bytes_written: report.bytes_written,
            duration_ms: report.duration.as_millis(),
        };

        Self::output(&JsonOutput::success("pack", data))
    }

    fn format_unpack_result(&self, report: &UnpackReport) -> Result<()> {
        #[derive(Serialize)]
        struct UnpackOutput<'a> {
            zip_path: String,
            dest_dir: String,
            top_level_dir: &'a str,
            skill_dir: String,
            files_written: usize,
            directories_created: usize,
            bytes_written: u64,
            entries_skipped: usize,
            duration_ms: u128,
        }

        let extraction = &report.extraction;
        let data = UnpackOutput {
            zip_path: report.zip_path.display().to_string(),
            dest_dir: report.dest_dir.display().to_string(),
            top_level_dir: &report.top_level_dir,
            skill_dir: report.skill_dir.display().to_string(),
            files_written: extraction.files_written,
            directories_created: extraction.directories_created,
            bytes_written: extraction.bytes_written,
            entries_skipped: extraction.entries_skipped,
            duration_ms: extraction.duration.as_millis(),
        };

        Self::output(&JsonOutput::success("unpack", data))
    }

    fn format_error(&self, operation: &str, error: &anyhow::Error) {
        let kind = error_kind(error).map(ErrorKind::as_str);
        let output = JsonOutput::<()>::error(operation, error_message(error), kind);
        let _ = Self::output(&output);
    }
}
