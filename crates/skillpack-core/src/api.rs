//! High-level public API for validating, unpacking and packing packages.

use std::path::Path;

use tracing::debug;

use crate::PackageError;
use crate::PackageValidator;
use crate::Result;
use crate::UnpackReport;
use crate::ValidationReport;
use crate::ValidatorConfig;
use crate::extraction::extract_package;
use crate::inspection::inspect_top_level_from_path;

/// How a package path should be treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceType {
    /// Decide from the filesystem: files are zips, directories are packages.
    #[default]
    Auto,
    /// An unpacked package directory.
    Directory,
    /// A zip archive holding one package directory.
    Zip,
}

impl SourceType {
    /// Lowercase name used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Directory => "directory",
            Self::Zip => "zip",
        }
    }
}

/// Validates an unpacked package directory.
///
/// The directory's own name is the declared top-level name.
///
/// # Errors
///
/// Returns `PackageError::InvalidSource` if `path` is not a directory,
/// otherwise any error of [`PackageValidator::validate_dir`].
///
/// # Examples
///
/// ```no_run
/// use skillpack_core::ValidatorConfig;
/// use skillpack_core::validate_directory;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ValidatorConfig::default().with_require_version(false);
/// let report = validate_directory("skills/echo-tool", &config)?;
/// assert_eq!(report.skill_id, "echo-tool");
/// # Ok(())
/// # }
/// ```
pub fn validate_directory<P: AsRef<Path>>(
    path: P,
    config: &ValidatorConfig,
) -> Result<ValidationReport> {
    let path = path.as_ref();
    if !path.is_dir() {
        return Err(PackageError::InvalidSource {
            reason: "Invalid skill directory",
            path: path.to_path_buf(),
        });
    }

    let path = path.canonicalize()?;
    let top_level = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let package = PackageValidator::new(config.clone()).validate_dir(&path, &top_level)?;

    Ok(ValidationReport {
        source_type: SourceType::Directory,
        skill_id: package.skill_id,
        version: package.version,
    })
}

/// Validates a zip package.
///
/// The archive is inspected for its single top-level directory, extracted
/// into a fresh temporary directory, and the extracted directory is
/// validated. The temporary directory is removed before returning.
///
/// # Errors
///
/// - `PackageError::InvalidSource` if `path` is not a file
/// - any inspection, extraction or validation error
pub fn validate_archive<P: AsRef<Path>>(
    path: P,
    config: &ValidatorConfig,
) -> Result<ValidationReport> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(PackageError::InvalidSource {
            reason: "Invalid skill package zip",
            path: path.to_path_buf(),
        });
    }

    let top_level = package_top_level(path, config)?;

    let temp = tempfile::Builder::new()
        .prefix("skillpack-validate-")
        .tempdir()?;
    let extracted_root = temp.path().join("extracted");
    extract_package(path, &extracted_root, config)?;

    let skill_dir = extracted_root.join(&top_level);
    if !skill_dir.is_dir() {
        return Err(PackageError::MissingTopLevelDir { name: top_level });
    }

    let package = PackageValidator::new(config.clone()).validate_dir(&skill_dir, &top_level)?;
    debug!(archive = %path.display(), skill_id = %package.skill_id, "archive validated");

    Ok(ValidationReport {
        source_type: SourceType::Zip,
        skill_id: package.skill_id,
        version: package.version,
    })
}

/// Validates a package given as a directory or a zip.
///
/// With `SourceType::Auto`, a file is treated as a zip and a directory as
/// an unpacked package.
///
/// # Errors
///
/// Returns `PackageError::InvalidSource` if `path` is neither (in auto
/// mode), otherwise the errors of [`validate_directory`] or
/// [`validate_archive`].
pub fn validate_path<P: AsRef<Path>>(
    path: P,
    source_type: SourceType,
    config: &ValidatorConfig,
) -> Result<ValidationReport> {
    let path = path.as_ref();
    match source_type {
        SourceType::Directory => validate_directory(path, config),
        SourceType::Zip => validate_archive(path, config),
        SourceType::Auto if path.is_file() => validate_archive(path, config),
        SourceType::Auto if path.is_dir() => validate_directory(path, config),
        SourceType::Auto => Err(PackageError::InvalidSource {
            reason: "Invalid skill path",
            path: path.to_path_buf(),
        }),
    }
}

/// Unpacks a zip package into `dest_dir`, which is wiped first.
///
/// The extracted package is not validated; use [`validate_directory`] on
/// `report.skill_dir` for that.
///
/// # Errors
///
/// - `PackageError::InvalidSource` if `zip_path` is not a file
/// - `PackageError::MissingTopLevelDir` if the archive's top-level entry
///   did not produce a directory
/// - any inspection or extraction error
pub fn unpack_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    zip_path: P,
    dest_dir: Q,
    config: &ValidatorConfig,
) -> Result<UnpackReport> {
    let zip_path = zip_path.as_ref();
    let dest_dir = dest_dir.as_ref();
    if !zip_path.is_file() {
        return Err(PackageError::InvalidSource {
            reason: "Invalid zip path",
            path: zip_path.to_path_buf(),
        });
    }

    let top_level = package_top_level(zip_path, config)?;
    let extraction = extract_package(zip_path, dest_dir, config)?;

    let dest_dir = dest_dir.canonicalize()?;
    let skill_dir = dest_dir.join(&top_level);
    if !skill_dir.is_dir() {
        return Err(PackageError::MissingTopLevelDir { name: top_level });
    }

    Ok(UnpackReport {
        zip_path: zip_path.canonicalize()?,
        dest_dir,
        top_level_dir: top_level,
        skill_dir,
        extraction,
    })
}

/// Inspects `zip_path` and rejects a `.` top level, which names the
/// extraction root itself rather than a package directory.
fn package_top_level(zip_path: &Path, config: &ValidatorConfig) -> Result<String> {
    let top_level = inspect_top_level_from_path(zip_path, config)?;
    if top_level == "." {
        return Err(PackageError::MissingTopLevelDir { name: top_level });
    }
    Ok(top_level)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::pack_directory;
    use crate::test_utils::create_test_zip;
    use crate::test_utils::write_skill_package;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_directory() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dir = temp.path().join("echo-tool");
        write_skill_package(&dir, "echo-tool", Some("2.0"));

        let report = validate_directory(&dir, &ValidatorConfig::default()).unwrap();
        assert_eq!(report.source_type, SourceType::Directory);
        assert_eq!(report.skill_id, "echo-tool");
        assert_eq!(report.version.as_deref(), Some("2.0"));
    }

    #[test]
    fn test_validate_directory_rejects_file() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let file = temp.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        let err = validate_directory(&file, &ValidatorConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSource);
    }

    #[test]
    fn test_validate_archive_round_trip() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dir = temp.path().join("echo-tool");
        write_skill_package(&dir, "echo-tool", None);
        let zip = temp.path().join("echo-tool.zip");
        pack_directory(&dir, &zip, None).unwrap();

        let config = ValidatorConfig::default().with_require_version(false);
        let report = validate_archive(&zip, &config).unwrap();
        assert_eq!(report.source_type, SourceType::Zip);
        assert_eq!(report.skill_id, "echo-tool");
        assert_eq!(report.version, None);
    }

    #[test]
    fn test_validate_archive_renamed_top_level_mismatch() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dir = temp.path().join("echo-tool");
        write_skill_package(&dir, "echo-tool", Some("1.0"));
        let zip = temp.path().join("renamed.zip");
        pack_directory(&dir, &zip, Some("renamed")).unwrap();

        let err = validate_archive(&zip, &ValidatorConfig::default()).unwrap_err();
        assert!(matches!(err, PackageError::IdentityMismatch));
    }

    #[test]
    fn test_validate_archive_single_file_top_level() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let zip = temp.path().join("flat.zip");
        fs::write(&zip, create_test_zip(vec![("SKILL.md", "---\nname: x\n---\n")])).unwrap();

        let err = validate_archive(&zip, &ValidatorConfig::default()).unwrap_err();
        assert!(matches!(err, PackageError::MissingTopLevelDir { .. }));
    }

    #[test]
    fn test_dot_prefixed_archive_is_structural_error() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let zip = temp.path().join("dotted.zip");
        fs::write(
            &zip,
            create_test_zip(vec![
                ("./echo-tool/SKILL.md", "---\nname: echo-tool\n---\n"),
                ("./echo-tool/assets/runner.json", "{}"),
            ]),
        )
        .unwrap();

        let err = validate_archive(&zip, &ValidatorConfig::default()).unwrap_err();
        assert!(matches!(err, PackageError::MissingTopLevelDir { ref name } if name == "."));
        assert_eq!(err.kind(), ErrorKind::StructuralMismatch);

        let err = unpack_archive(&zip, temp.path().join("out"), &ValidatorConfig::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StructuralMismatch);
        assert!(!temp.path().join("out").exists());
    }

    #[test]
    fn test_validate_path_auto() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dir = temp.path().join("echo-tool");
        write_skill_package(&dir, "echo-tool", Some("3.1.4"));
        let zip = temp.path().join("pkg.zip");
        pack_directory(&dir, &zip, None).unwrap();
        let config = ValidatorConfig::default();

        let from_dir = validate_path(&dir, SourceType::Auto, &config).unwrap();
        let from_zip = validate_path(&zip, SourceType::Auto, &config).unwrap();
        assert_eq!(from_dir.source_type, SourceType::Directory);
        assert_eq!(from_zip.source_type, SourceType::Zip);
        assert_eq!(from_dir.version, from_zip.version);

        let err = validate_path(temp.path().join("absent"), SourceType::Auto, &config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSource);

        let err = validate_path(&dir, SourceType::Zip, &config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSource);
    }

    #[test]
    fn test_unpack_archive() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dir = temp.path().join("echo-tool");
        write_skill_package(&dir, "echo-tool", Some("2.0"));
        let zip = temp.path().join("pkg.zip");
        pack_directory(&dir, &zip, None).unwrap();

        let dest = temp.path().join("unpacked");
        let report = unpack_archive(&zip, &dest, &ValidatorConfig::default()).unwrap();

        assert_eq!(report.top_level_dir, "echo-tool");
        assert!(report.skill_dir.join("SKILL.md").is_file());
        assert_eq!(report.extraction.files_written, 5);
    }
}
