//! Freshly prepared extraction directory with a canonical boundary.

use crate::PackageError;
use crate::Result;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;
use tracing::warn;

use super::EntryPath;

/// An empty extraction directory and its canonical absolute form.
///
/// Construction destroys whatever existed at the path, recreates the
/// directory (with missing ancestors) and canonicalizes it once. The
/// canonical form is the containment boundary for every entry written
/// below it.
///
/// # Examples
///
/// ```no_run
/// use skillpack_core::ExtractionRoot;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let root = ExtractionRoot::prepare("/tmp/extracted")?;
/// println!("Extracting to: {}", root.as_path().display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRoot(PathBuf);

impl ExtractionRoot {
    /// Wipes and recreates `path`, then canonicalizes it.
    ///
    /// Removal of a pre-existing directory is best effort; a failure is
    /// logged and extraction proceeds into whatever remains.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or canonicalized.
    pub fn prepare(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if path.exists()
            && let Err(e) = fs::remove_dir_all(path)
        {
            warn!(path = %path.display(), error = %e, "failed to clear extraction target");
        }

        fs::create_dir_all(path)?;

        let canonical = path.canonicalize().map_err(|e| {
            PackageError::Io(io::Error::new(
                e.kind(),
                format!("failed to canonicalize path {}: {e}", path.display()),
            ))
        })?;

        debug!(root = %canonical.display(), "prepared extraction root");
        Ok(Self(canonical))
    }

    /// Returns the canonical root as a `&Path`.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Resolves an entry to its canonical output path below the root.
    ///
    /// The entry is joined onto the root and resolved to canonical form
    /// (symlinked ancestors followed); the result must still start with the
    /// root. This is checked independently of the segment-level policy that
    /// produced the `EntryPath`.
    ///
    /// # Errors
    ///
    /// Returns `PackageError::UnsafeEntryPath` if the resolved path leaves
    /// the root, or an I/O error if resolution fails.
    pub fn resolve(&self, entry: &EntryPath) -> Result<PathBuf> {
        let candidate = self.0.join(entry.to_relative_path());
        let resolved = resolve_lenient(&candidate)?;

        if !resolved.starts_with(&self.0) {
            return Err(PackageError::unsafe_path(entry.as_str()));
        }

        Ok(resolved)
    }
}

/// Canonicalizes the deepest existing ancestor of `path` and appends the
/// components that do not exist yet.
fn resolve_lenient(path: &Path) -> io::Result<PathBuf> {
    let mut existing = path;
    let mut pending: Vec<OsString> = Vec::new();

    loop {
        match existing.canonicalize() {
            Ok(mut resolved) => {
                resolved.extend(pending.iter().rev());
                return Ok(resolved);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let (Some(parent), Some(name)) = (existing.parent(), existing.file_name()) else {
                    return Err(e);
                };
                pending.push(name.to_os_string());
                existing = parent;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_prepare_creates_missing_ancestors() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let target = temp.path().join("a").join("b").join("extracted");

        let root = ExtractionRoot::prepare(&target).unwrap();
        assert!(target.is_dir());
        assert!(root.as_path().is_absolute());
    }

    #[test]
    fn test_prepare_wipes_existing_contents() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let target = temp.path().join("extracted");
        fs::create_dir_all(target.join("stale")).unwrap();
        fs::write(target.join("stale").join("old.txt"), "old").unwrap();

        ExtractionRoot::prepare(&target).unwrap();
        assert!(target.is_dir());
        assert_eq!(fs::read_dir(&target).unwrap().count(), 0);
    }

    #[test]
    fn test_resolve_nonexistent_entry() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let root = ExtractionRoot::prepare(temp.path().join("out")).unwrap();
        let entry = EntryPath::validate("skill/assets/runner.json").unwrap();

        let resolved = root.resolve(&entry).unwrap();
        assert!(resolved.starts_with(root.as_path()));
        assert!(resolved.ends_with("skill/assets/runner.json"));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_rejects_symlinked_ancestor() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let outside = temp.path().join("outside");
        fs::create_dir_all(&outside).unwrap();
        let root = ExtractionRoot::prepare(temp.path().join("out")).unwrap();
        std::os::unix::fs::symlink(&outside, root.as_path().join("skill")).unwrap();

        let entry = EntryPath::validate("skill/evil.txt").unwrap();
        let result = root.resolve(&entry);
        assert!(matches!(result, Err(PackageError::UnsafeEntryPath { .. })));
    }

    #[test]
    fn test_resolve_lenient_keeps_missing_tail() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let base = temp.path().canonicalize().unwrap();
        let resolved = resolve_lenient(&base.join("x").join("y.txt")).unwrap();
        assert_eq!(resolved, base.join("x").join("y.txt"));
    }
}
