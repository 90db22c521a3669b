//! Validated archive entry path.

use crate::PackageError;
use crate::Result;
use std::path::Path;
use std::path::PathBuf;

/// An archive entry path that passed the path-safety policy.
///
/// `EntryPath` represents a path that has been validated to not be:
/// - Empty after normalization
/// - Absolute (leading `/` or `\`, or absolute under the host path model)
/// - A parent traversal (`..` segment, with either separator)
/// - Rooted at a drive designator (`C:`)
/// - Carrying null bytes
///
/// # Security Properties
///
/// - Can ONLY be constructed through validation
/// - NO `From<String>` implementation
/// - Stored as given: `.` and empty segments are kept, so the top-level
///   segment is exactly the text before the first `/`
///
/// # Examples
///
/// ```
/// use skillpack_core::EntryPath;
///
/// let entry = EntryPath::validate("echo-tool/assets/runner.json").unwrap();
/// assert_eq!(entry.top_level(), "echo-tool");
///
/// assert!(EntryPath::validate("echo-tool/../../etc/passwd").is_err());
/// assert!(EntryPath::validate("C:/Windows/win.ini").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryPath(String);

impl EntryPath {
    /// Validates a cleaned entry name and constructs an `EntryPath`.
    ///
    /// The name is expected to have its leading and trailing `/` trimmed
    /// already (see [`crate::security::normalize_entry_name`]); a leading
    /// separator that survives trimming is rejected.
    ///
    /// # Errors
    ///
    /// Returns `PackageError::UnsafeEntryPath` carrying the offending name
    /// for any violation.
    pub fn validate(clean: &str) -> Result<Self> {
        if clean.is_empty() || clean.contains('\0') {
            return Err(PackageError::unsafe_path(clean));
        }

        if clean.starts_with('/') || clean.starts_with('\\') {
            return Err(PackageError::unsafe_path(clean));
        }

        if Path::new(clean).is_absolute() {
            return Err(PackageError::unsafe_path(clean));
        }

        // Backslash counts as a separator here so that `a\..\b` cannot
        // traverse on hosts that honour it.
        if clean.split(['/', '\\']).any(|segment| segment == "..") {
            return Err(PackageError::unsafe_path(clean));
        }

        // The drive check looks past `.` and empty segments, so `./C:/x`
        // is caught as well.
        if meaningful_segments(clean)
            .next()
            .is_some_and(|first| first.ends_with(':'))
        {
            return Err(PackageError::unsafe_path(clean));
        }

        Ok(Self(clean.to_string()))
    }

    /// Returns the entry path as a `/`-separated string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the text before the first `/`, which may be `.`.
    #[must_use]
    pub fn top_level(&self) -> &str {
        self.0.split('/').next().unwrap_or_default()
    }

    /// Returns the path relative to an extraction root, using host separators.
    ///
    /// `.` and empty segments are dropped; `./skill` and `skill` map to the
    /// same location.
    #[must_use]
    pub fn to_relative_path(&self) -> PathBuf {
        meaningful_segments(&self.0).collect()
    }
}

fn meaningful_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
}

impl std::fmt::Display for EntryPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
