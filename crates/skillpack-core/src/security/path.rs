//! Entry name normalization and path traversal validation.

use crate::Result;
use crate::types::EntryPath;

/// Trims leading and trailing `/` from a raw zip entry name.
///
/// Directory entries (`skill/assets/`) and names with a stray leading
/// slash normalize to the same form as their file counterparts. A result
/// that is empty denotes an entry to skip.
///
/// # Examples
///
/// ```
/// use skillpack_core::security::normalize_entry_name;
///
/// assert_eq!(normalize_entry_name("echo-tool/assets/"), "echo-tool/assets");
/// assert_eq!(normalize_entry_name("/"), "");
/// ```
#[must_use]
pub fn normalize_entry_name(raw: &str) -> &str {
    raw.trim_matches('/')
}

/// Validates that a cleaned entry name is safe to extract.
///
/// This function delegates to `EntryPath::validate()`, which rejects:
/// - Names starting with `/` or `\`
/// - Names absolute under the host path model
/// - Any `..` segment
/// - A first segment that looks like a drive designator (`C:`)
///
/// The same check runs during top-level inspection and during extraction.
///
/// # Errors
///
/// Returns `PackageError::UnsafeEntryPath` carrying the offending name.
///
/// # Examples
///
/// ```
/// use skillpack_core::security::validate_entry_path;
///
/// assert!(validate_entry_path("echo-tool/SKILL.md").is_ok());
/// assert!(validate_entry_path("../etc/passwd").is_err());
/// ```
pub fn validate_entry_path(clean: &str) -> Result<EntryPath> {
    EntryPath::validate(clean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PackageError;

    #[test]
    fn test_normalize_strips_both_ends() {
        assert_eq!(normalize_entry_name("//skill/SKILL.md"), "skill/SKILL.md");
        assert_eq!(normalize_entry_name("skill/"), "skill");
        assert_eq!(normalize_entry_name("skill"), "skill");
        assert_eq!(normalize_entry_name(""), "");
    }

    #[test]
    fn test_validate_path_valid() {
        assert!(validate_entry_path("foo/bar.txt").is_ok());
        assert!(validate_entry_path("foo/bar/baz/file.txt").is_ok());
    }

    #[test]
    fn test_validate_path_traversal() {
        let result = validate_entry_path("foo/../../etc/passwd");
        assert!(matches!(
            result,
            Err(PackageError::UnsafeEntryPath { ref path }) if path == "foo/../../etc/passwd"
        ));
    }

    #[test]
    fn test_leading_backslash_survives_normalization() {
        let clean = normalize_entry_name("\\evil/payload");
        assert!(validate_entry_path(clean).is_err());
    }
}
