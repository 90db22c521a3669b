//! Output formatter trait for CLI results.

use anyhow::Result;
use serde::Serialize;
use skillpack_core::PackReport;
use skillpack_core::UnpackReport;
use skillpack_core::ValidationReport;
use std::path::Path;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format a successful validation
    fn format_validation_result(&self, skill_path: &Path, report: &ValidationReport) -> Result<()>;

    /// Format a created package
    fn format_pack_result(&self, report: &PackReport) -> Result<()>;

    /// Format an unpacked package
    fn format_unpack_result(&self, report: &UnpackReport) -> Result<()>;

    /// Format the error that ended `operation`
    fn format_error(&self, operation: &str, error: &anyhow::Error);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
            kind: None,
        }
    }
}

impl JsonOutput<()> {
    pub fn error(
        operation: impl Into<String>,
        error: impl Into<String>,
        kind: Option<&'static str>,
    ) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
            kind,
        }
    }
}
