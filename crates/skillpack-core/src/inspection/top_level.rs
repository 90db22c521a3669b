//! Top-level directory detection.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::io::Cursor;
use std::io::Read;
use std::io::Seek;
use std::path::Path;

use tracing::debug;
use zip::ZipArchive;

use crate::PackageError;
use crate::Result;
use crate::ValidatorConfig;
use crate::security::normalize_entry_name;
use crate::security::validate_entry_path;

/// Returns the single top-level directory shared by all entry names.
///
/// Each name is trimmed of leading and trailing `/`; names that become
/// empty or fall under the ignored namespace are skipped. Every remaining
/// name must pass the path-safety policy, even when it would not change
/// the outcome.
///
/// # Errors
///
/// - `PackageError::UnsafeEntryPath` on the first unsafe name
/// - `PackageError::StructuralMismatch` if zero or several distinct
///   top-level segments remain
///
/// # Examples
///
/// ```
/// use skillpack_core::ValidatorConfig;
/// use skillpack_core::inspect_top_level;
///
/// let config = ValidatorConfig::default();
/// let names = ["echo-tool/", "echo-tool/SKILL.md", "__MACOSX/._SKILL.md"];
/// assert_eq!(inspect_top_level(names, &config).unwrap(), "echo-tool");
///
/// let siblings = ["a/SKILL.md", "b/SKILL.md"];
/// assert!(inspect_top_level(siblings, &config).is_err());
/// ```
pub fn inspect_top_level<I>(names: I, config: &ValidatorConfig) -> Result<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut top_levels = BTreeSet::new();

    for name in names {
        let clean = normalize_entry_name(name.as_ref());
        if clean.is_empty() || config.is_ignored(clean) {
            continue;
        }

        let entry = validate_entry_path(clean)?;
        top_levels.insert(entry.top_level().to_string());
    }

    if top_levels.len() != 1 {
        return Err(PackageError::StructuralMismatch {
            found: top_levels.len(),
        });
    }

    let top = top_levels.pop_first().unwrap_or_default();
    debug!(top_level = %top, "detected package top-level directory");
    Ok(top)
}

/// Inspects an in-memory zip archive.
///
/// # Errors
///
/// Returns `PackageError::InvalidArchive` if the buffer is not a readable
/// zip, otherwise the errors of [`inspect_top_level`].
pub fn inspect_top_level_from_bytes(payload: &[u8], config: &ValidatorConfig) -> Result<String> {
    inspect_reader(Cursor::new(payload), config)
}

/// Inspects a zip archive on disk, opened read-only.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened,
/// `PackageError::InvalidArchive` if it is not a readable zip, otherwise
/// the errors of [`inspect_top_level`].
pub fn inspect_top_level_from_path<P: AsRef<Path>>(
    package_path: P,
    config: &ValidatorConfig,
) -> Result<String> {
    let file = File::open(package_path.as_ref())?;
    inspect_reader(BufReader::new(file), config)
}

fn inspect_reader<R: Read + Seek>(reader: R, config: &ValidatorConfig) -> Result<String> {
    let archive = ZipArchive::new(reader)?;
    debug!(entries = archive.len(), "inspecting zip central directory");
    inspect_top_level(archive.file_names(), config)
}
