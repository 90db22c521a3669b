//! Error conversion utilities for CLI.
//!
//! Wraps skillpack-core's typed errors (thiserror) in contextual errors
//! (anyhow) with actionable guidance. The typed error stays in the chain so
//! output formatters can still report its kind.

use anyhow::Result;
use skillpack_core::ErrorKind;
use skillpack_core::PackageError;
use std::path::Path;

/// Converts a `PackageError` into an anyhow error with a user-facing hint.
pub fn convert_package_error(err: PackageError, path: &Path) -> anyhow::Error {
    let path = path.display();
    let context = match &err {
        PackageError::UnsafeEntryPath { .. } => format!(
            "Security violation: package '{path}' contains an entry that escapes its directory\n\
             HINT: This package may be malicious. Do not unpack it from untrusted sources."
        ),
        PackageError::InvalidArchive(_) => format!(
            "Invalid zip package '{path}'\n\
             HINT: The file may be corrupted, truncated, or not a zip archive."
        ),
        PackageError::StructuralMismatch { .. } | PackageError::MissingTopLevelDir { .. } => {
            format!(
                "Package '{path}' has the wrong layout\n\
                 HINT: Zip the skill directory itself so every entry starts with '<skill-id>/'."
            )
        }
        PackageError::MissingFiles { .. } => format!(
            "Package '{path}' is incomplete\n\
             HINT: A skill needs SKILL.md, assets/runner.json and every schema runner.json names."
        ),
        PackageError::IdentityMismatch => format!(
            "Package '{path}' has an inconsistent identity\n\
             HINT: The directory name, runner.json id and SKILL.md frontmatter name must be equal."
        ),
        PackageError::InvalidVersion { .. } => format!(
            "Package '{path}' declares an invalid version\n\
             HINT: Use dot-separated numbers such as 1.2.3, or pass --require-version false."
        ),
        PackageError::InvalidManifest(_) | PackageError::MissingFrontmatterName { .. } => {
            format!("Package '{path}' has an invalid manifest")
        }
        PackageError::InvalidSource { .. } | PackageError::InvalidTopLevelName { .. } => {
            format!("Cannot use '{path}'")
        }
        PackageError::Io(_) => format!("I/O error while processing '{path}'"),
    };

    anyhow::Error::new(err).context(context)
}

/// Adds package context to a core result.
pub fn add_package_context<T>(result: Result<T, PackageError>, path: &Path) -> anyhow::Result<T> {
    result.map_err(|e| convert_package_error(e, path))
}

/// Returns the kind of the typed error carried by `err`, if any.
pub fn error_kind(err: &anyhow::Error) -> Option<ErrorKind> {
    err.downcast_ref::<PackageError>().map(PackageError::kind)
}

/// Returns the underlying package message, or the full chain otherwise.
pub fn error_message(err: &anyhow::Error) -> String {
    err.downcast_ref::<PackageError>()
        .map_or_else(|| format!("{err:#}"), ToString::to_string)
}
