//! Directory-to-zip packing with a single top-level directory.

use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;
use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::PackReport;
use crate::PackageError;
use crate::Result;
use crate::types::EntryPath;

/// Packs `source_dir` into a Deflate-compressed zip at `output_zip`.
///
/// Every regular file below `source_dir` is stored as
/// `"{top_level}/{relative path}"` with `/` separators; directories are
/// implied by their files. The top-level name is `top_level_name` when it
/// is given and non-empty, otherwise the source directory's own name.
/// Entries are added in file-name order so the same tree always yields the
/// same entry order.
///
/// # Errors
///
/// - `PackageError::InvalidSource` if `source_dir` is not a directory
/// - `PackageError::InvalidTopLevelName` if the top-level name is blank or
///   not a single safe path segment
/// - `PackageError::Io` for filesystem failures or non-UTF-8 file names
///
/// # Examples
///
/// ```no_run
/// use skillpack_core::pack_directory;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = pack_directory("skills/echo-tool", "dist/echo-tool.zip", None)?;
/// println!("Added {} files under {}/", report.files_added, report.top_level_dir);
/// # Ok(())
/// # }
/// ```
pub fn pack_directory<P: AsRef<Path>, Q: AsRef<Path>>(
    source_dir: P,
    output_zip: Q,
    top_level_name: Option<&str>,
) -> Result<PackReport> {
    let start = Instant::now();
    let source_dir = source_dir.as_ref();
    let output_zip = output_zip.as_ref();

    if !source_dir.is_dir() {
        return Err(PackageError::InvalidSource {
            reason: "Invalid source directory",
            path: source_dir.to_path_buf(),
        });
    }
    let source_dir = source_dir.canonicalize()?;
    let root_name = resolve_top_level_name(&source_dir, top_level_name)?;

    if let Some(parent) = output_zip.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(output_zip)?;
    let output_zip = output_zip.canonicalize()?;

    let mut report = PackReport {
        source_dir: source_dir.clone(),
        zip_path: output_zip.clone(),
        top_level_dir: root_name.clone(),
        ..PackReport::default()
    };

    let writer = write_entries(
        ZipWriter::new(BufWriter::new(file)),
        &source_dir,
        &output_zip,
        &root_name,
        &mut report,
    )?;
    writer.into_inner().map_err(|e| e.into_error())?.sync_all()?;

    report.duration = start.elapsed();
    debug!(
        zip = %report.zip_path.display(),
        files = report.files_added,
        "package archive written"
    );
    Ok(report)
}

fn resolve_top_level_name(source_dir: &Path, requested: Option<&str>) -> Result<String> {
    let name = match requested {
        Some(name) if !name.is_empty() => name.trim().to_string(),
        _ => source_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };

    let single_segment =
        EntryPath::validate(&name).is_ok() && name != "." && !name.contains(['/', '\\']);
    if !single_segment {
        return Err(PackageError::InvalidTopLevelName { name });
    }
    Ok(name)
}

fn write_entries<W: Write + Seek>(
    mut zip: ZipWriter<W>,
    source_dir: &Path,
    output_zip: &Path,
    root_name: &str,
    report: &mut PackReport,
) -> Result<W> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(source_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            PackageError::Io(std::io::Error::other(format!("walkdir error: {e}")))
        })?;
        let path = entry.path();

        // Follows symlinks; dangling links are skipped.
        if !path.is_file() || path == output_zip {
            continue;
        }

        let archive_name = format!("{root_name}/{}", relative_zip_path(source_dir, path)?);
        zip.start_file(archive_name.as_str(), options)
            .map_err(|e| std::io::Error::other(format!("failed to start file in ZIP: {e}")))?;
        let bytes = fs::read(path)?;
        zip.write_all(&bytes)?;

        debug!(entry = %archive_name, bytes = bytes.len(), "added file");
        report.files_added += 1;
        report.bytes_written += bytes.len() as u64;
    }

    let writer = zip
        .finish()
        .map_err(|e| std::io::Error::other(format!("failed to finish ZIP archive: {e}")))?;
    Ok(writer)
}

/// Converts a path below `root` to a `/`-separated zip name.
fn relative_zip_path(root: &Path, path: &Path) -> Result<String> {
    let relative: PathBuf = path
        .strip_prefix(root)
        .map_err(|e| PackageError::Io(std::io::Error::other(e.to_string())))?
        .to_path_buf();

    let segments = relative
        .components()
        .map(|component| {
            component.as_os_str().to_str().ok_or_else(|| {
                PackageError::Io(std::io::Error::other(format!(
                    "path is not valid UTF-8: {}",
                    path.display()
                )))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(segments.join("/"))
}
