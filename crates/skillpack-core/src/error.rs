//! Error types for skill package inspection, extraction and validation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `PackageError`.
pub type Result<T> = std::result::Result<T, PackageError>;

/// Closed set of failure kinds a caller can map to its own report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The zip container cannot be opened or read.
    InvalidArchive,
    /// An archive entry fails the path-safety or containment policy.
    UnsafeEntryPath,
    /// Zero or more than one top-level directory.
    StructuralMismatch,
    /// Required or schema-referenced files are absent.
    MissingRequiredFiles,
    /// Manifest or frontmatter content has the wrong shape.
    InvalidManifest,
    /// Directory name, manifest id and frontmatter name disagree.
    IdentityMismatch,
    /// Version string does not match the version grammar.
    InvalidVersion,
    /// The path handed to a high-level operation is unusable.
    InvalidSource,
    /// Underlying filesystem failure.
    Io,
}

impl ErrorKind {
    /// Stable snake_case identifier for machine-readable reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArchive => "invalid_archive",
            Self::UnsafeEntryPath => "unsafe_entry_path",
            Self::StructuralMismatch => "structural_mismatch",
            Self::MissingRequiredFiles => "missing_required_files",
            Self::InvalidManifest => "invalid_manifest",
            Self::IdentityMismatch => "identity_mismatch",
            Self::InvalidVersion => "invalid_version",
            Self::InvalidSource => "invalid_source",
            Self::Io => "io",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while handling a skill package.
#[derive(Error, Debug)]
pub enum PackageError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive is corrupted or not a zip file.
    #[error("Invalid zip package: {0}")]
    InvalidArchive(String),

    /// Entry path is absolute, traverses upwards, or escapes the target.
    #[error("Unsafe zip entry path: {path}")]
    UnsafeEntryPath {
        /// The offending entry path, as cleaned.
        path: String,
    },

    /// Archive does not hold exactly one top-level directory.
    #[error("Skill package must contain exactly one top-level directory (found {found})")]
    StructuralMismatch {
        /// Number of distinct top-level segments seen.
        found: usize,
    },

    /// The extracted tree lacks the directory named by the archive.
    #[error("Extracted package missing top-level skill directory: {name}")]
    MissingTopLevelDir {
        /// Expected top-level directory name.
        name: String,
    },

    /// Required files (or schema files) are absent.
    #[error("Skill package missing required files: {}", files.join(", "))]
    MissingFiles {
        /// Relative paths of every missing file.
        files: Vec<String>,
    },

    /// Manifest is unparseable or a field has the wrong shape.
    #[error("{0}")]
    InvalidManifest(String),

    /// The documentation file has no frontmatter block or no usable `name`.
    #[error("{doc} must define frontmatter name")]
    MissingFrontmatterName {
        /// Configured documentation file, relative to the package root.
        doc: String,
    },

    /// Directory name, manifest id and frontmatter name are not all equal.
    #[error("Skill identity mismatch: directory, manifest id, and frontmatter name must match")]
    IdentityMismatch,

    /// Version string does not match `digits(.digits)*`.
    #[error("Invalid skill version: {raw}")]
    InvalidVersion {
        /// The raw version string.
        raw: String,
    },

    /// Input path is missing or of the wrong file type.
    #[error("{reason}: {}", path.display())]
    InvalidSource {
        /// What was expected at the path.
        reason: &'static str,
        /// The offending path.
        path: PathBuf,
    },

    /// Top-level name for packing is empty or not a single safe segment.
    #[error("Top-level name must be a non-empty single path segment: {name:?}")]
    InvalidTopLevelName {
        /// The rejected name.
        name: String,
    },
}

impl PackageError {
    /// Returns the failure kind this error belongs to.
    ///
    /// # Examples
    ///
    /// ```
    /// use skillpack_core::{ErrorKind, PackageError};
    ///
    /// let err = PackageError::MissingFrontmatterName {
    ///     doc: "SKILL.md".into(),
    /// };
    /// assert_eq!(err.kind(), ErrorKind::InvalidManifest);
    /// assert_eq!(err.to_string(), "SKILL.md must define frontmatter name");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            Self::InvalidArchive(_) => ErrorKind::InvalidArchive,
            Self::UnsafeEntryPath { .. } => ErrorKind::UnsafeEntryPath,
            Self::StructuralMismatch { .. } | Self::MissingTopLevelDir { .. } => {
                ErrorKind::StructuralMismatch
            }
            Self::MissingFiles { .. } => ErrorKind::MissingRequiredFiles,
            Self::InvalidManifest(_) | Self::MissingFrontmatterName { .. } => {
                ErrorKind::InvalidManifest
            }
            Self::IdentityMismatch => ErrorKind::IdentityMismatch,
            Self::InvalidVersion { .. } => ErrorKind::InvalidVersion,
            Self::InvalidSource { .. } | Self::InvalidTopLevelName { .. } => ErrorKind::InvalidSource,
        }
    }

    /// Returns `true` if the archive tried to write outside its target.
    #[must_use]
    pub const fn is_security_violation(&self) -> bool {
        matches!(self, Self::UnsafeEntryPath { .. })
    }

    pub(crate) fn unsafe_path(path: impl Into<String>) -> Self {
        Self::UnsafeEntryPath { path: path.into() }
    }

    pub(crate) fn invalid_manifest(message: impl Into<String>) -> Self {
        Self::InvalidManifest(message.into())
    }
}

impl From<zip::result::ZipError> for PackageError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::InvalidArchive(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_files_lists_everything() {
        let err = PackageError::MissingFiles {
            files: vec!["SKILL.md".into(), "assets/runner.json".into()],
        };
        assert_eq!(
            err.to_string(),
            "Skill package missing required files: SKILL.md, assets/runner.json"
        );
        assert_eq!(err.kind(), ErrorKind::MissingRequiredFiles);
    }

    #[test]
    fn test_unsafe_path_error() {
        let err = PackageError::unsafe_path("../etc/passwd");
        assert!(err.to_string().contains("Unsafe zip entry path"));
        assert!(err.to_string().contains("../etc/passwd"));
        assert!(err.is_security_violation());
    }

    #[test]
    fn test_identity_mismatch_is_generic() {
        let err = PackageError::IdentityMismatch;
        let display = err.to_string();
        assert!(display.contains("identity mismatch"));
        assert!(!err.is_security_violation());
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            PackageError::InvalidArchive("bad".into()).kind(),
            ErrorKind::InvalidArchive
        );
        assert_eq!(
            PackageError::StructuralMismatch { found: 2 }.kind(),
            ErrorKind::StructuralMismatch
        );
        assert_eq!(
            PackageError::InvalidVersion { raw: "v1".into() }.kind(),
            ErrorKind::InvalidVersion
        );
        assert_eq!(
            PackageError::invalid_manifest("runner.json must define schemas").kind(),
            ErrorKind::InvalidManifest
        );
        assert_eq!(ErrorKind::UnsafeEntryPath.as_str(), "unsafe_entry_path");
    }

    #[test]
    fn test_zip_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "truncated");
        let err: PackageError = zip::result::ZipError::Io(io_err).into();
        assert!(matches!(err, PackageError::InvalidArchive(_)));
        assert_eq!(err.kind(), ErrorKind::InvalidArchive);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PackageError = io_err.into();
        assert!(matches!(err, PackageError::Io(_)));
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
