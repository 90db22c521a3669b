//! Operation reports returned by the high-level API.

use std::path::PathBuf;
use std::time::Duration;

use crate::SourceType;

/// Report of a safe extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Number of files written.
    pub files_written: usize,

    /// Number of directory entries materialized.
    pub directories_created: usize,

    /// Total decompressed bytes written to disk.
    pub bytes_written: u64,

    /// Entries skipped (empty names, ignored namespace).
    pub entries_skipped: usize,

    /// Duration of the extraction.
    pub duration: Duration,
}

impl ExtractionReport {
    /// Creates a new empty extraction report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns total number of entries materialized.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.files_written + self.directories_created
    }
}

/// Outcome of a successful package validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Whether the package came from a directory or a zip archive.
    pub source_type: SourceType,

    /// Validated skill identity.
    pub skill_id: String,

    /// Validated version, if the manifest carries one.
    pub version: Option<String>,
}

/// Outcome of unpacking an archive into a destination directory.
#[derive(Debug, Clone)]
pub struct UnpackReport {
    /// Archive that was unpacked.
    pub zip_path: PathBuf,

    /// Destination directory (canonical).
    pub dest_dir: PathBuf,

    /// Top-level directory name found in the archive.
    pub top_level_dir: String,

    /// Extracted package directory, `dest_dir/top_level_dir`.
    pub skill_dir: PathBuf,

    /// Extraction statistics.
    pub extraction: ExtractionReport,
}

/// Outcome of packing a directory into a zip archive.
#[derive(Debug, Clone, Default)]
pub struct PackReport {
    /// Directory that was packed.
    pub source_dir: PathBuf,

    /// Archive written.
    pub zip_path: PathBuf,

    /// Top-level directory name used for every entry.
    pub top_level_dir: String,

    /// Number of files added.
    pub files_added: usize,

    /// Total uncompressed bytes added.
    pub bytes_written: u64,

    /// Duration of the packing.
    pub duration: Duration,
}
