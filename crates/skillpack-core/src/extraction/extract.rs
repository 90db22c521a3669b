//! Zip extraction with per-entry path validation and containment checks.

use std::fs;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use tracing::debug;
use zip::ZipArchive;

use crate::ExtractionReport;
use crate::PackageError;
use crate::Result;
use crate::ValidatorConfig;
use crate::security::normalize_entry_name;
use crate::security::validate_entry_path;
use crate::types::ExtractionRoot;

/// Extracts a package archive into a freshly recreated `target_dir`.
///
/// Any pre-existing `target_dir` is removed first (best effort) and
/// recreated with its missing ancestors. Entries are written rooted
/// exactly as named in the archive, minus the ignored namespace.
///
/// Every entry passes two independent checks before anything is written:
/// the segment-level path-safety policy and a containment check of the
/// canonical output path against the canonical `target_dir`.
///
/// Nothing is rolled back on failure: entries written before the failing
/// one stay on disk and the caller owns cleanup of `target_dir`.
///
/// # Errors
///
/// - `PackageError::InvalidArchive` if the zip cannot be opened or an
///   entry cannot be decompressed
/// - `PackageError::UnsafeEntryPath` if an entry fails either check
/// - `PackageError::Io` for filesystem failures
///
/// # Examples
///
/// ```no_run
/// use skillpack_core::ValidatorConfig;
/// use skillpack_core::extract_package;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ValidatorConfig::default();
/// let report = extract_package("echo-tool.zip", "/tmp/extracted", &config)?;
/// println!("Extracted {} files", report.files_written);
/// # Ok(())
/// # }
/// ```
pub fn extract_package<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    target_dir: Q,
    config: &ValidatorConfig,
) -> Result<ExtractionReport> {
    let start = Instant::now();
    let root = ExtractionRoot::prepare(target_dir)?;

    let file = File::open(archive_path.as_ref())?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;
    let mut report = ExtractionReport::new();

    for index in 0..archive.len() {
        let mut member = archive.by_index(index)?;
        let clean = normalize_entry_name(member.name()).to_string();

        if clean.is_empty() || config.is_ignored(&clean) {
            report.entries_skipped += 1;
            continue;
        }

        let entry = validate_entry_path(&clean)?;
        let out_path = root.resolve(&entry)?;

        if member.is_dir() {
            fs::create_dir_all(&out_path)?;
            report.directories_created += 1;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::with_capacity(COPY_BUFFER_SIZE, File::create(&out_path)?);
        let bytes = copy_entry(&mut member, &mut writer, &clean)?;
        writer.flush()?;

        debug!(entry = %entry, bytes, "extracted file");
        report.files_written += 1;
        report.bytes_written = report.bytes_written.saturating_add(bytes);
    }

    report.duration = start.elapsed();
    debug!(
        files = report.files_written,
        directories = report.directories_created,
        skipped = report.entries_skipped,
        "extraction complete"
    );
    Ok(report)
}

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Streams one decompressed entry into `writer` through a fixed buffer.
///
/// Read failures mean the archive is damaged and map to
/// `PackageError::InvalidArchive`; write failures stay I/O errors.
fn copy_entry<R: Read, W: Write>(reader: &mut R, writer: &mut W, name: &str) -> Result<u64> {
    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];
    let mut total: u64 = 0;

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(PackageError::InvalidArchive(format!(
                    "failed to read entry {name}: {e}"
                )));
            }
        };

        writer.write_all(&buffer[..read])?;
        total = total.saturating_add(read as u64);
    }

    Ok(total)
}
