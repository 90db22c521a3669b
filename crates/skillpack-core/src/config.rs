//! Package layout and validation policy.

/// Relative location of the primary documentation file.
pub const SKILL_DOC: &str = "SKILL.md";

/// Relative location of the manifest file.
pub const RUNNER_MANIFEST: &str = "assets/runner.json";

/// Archive namespace dropped before any other processing (macOS resource forks).
pub const IGNORED_NAMESPACE: &str = "__MACOSX";

/// Layout and policy used by the package validator.
///
/// # Examples
///
/// ```
/// use skillpack_core::ValidatorConfig;
///
/// // Default layout, version required
/// let config = ValidatorConfig::default();
/// assert!(config.require_version);
///
/// let relaxed = ValidatorConfig::default().with_require_version(false);
/// assert!(!relaxed.require_version);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Documentation file carrying the frontmatter `name`.
    pub skill_doc: String,

    /// JSON manifest with `id`, `schemas`, `engines`, `artifacts`, `version`.
    pub manifest: String,

    /// First path segment whose entries are skipped in archives.
    pub ignored_namespace: String,

    /// Whether the manifest must carry a valid `version`.
    pub require_version: bool,
}

impl Default for ValidatorConfig {
    /// Default values:
    /// - `skill_doc`: `SKILL.md`
    /// - `manifest`: `assets/runner.json`
    /// - `ignored_namespace`: `__MACOSX`
    /// - `require_version`: true
    fn default() -> Self {
        Self {
            skill_doc: SKILL_DOC.to_string(),
            manifest: RUNNER_MANIFEST.to_string(),
            ignored_namespace: IGNORED_NAMESPACE.to_string(),
            require_version: true,
        }
    }
}

impl ValidatorConfig {
    /// Sets the documentation file, relative to the package root.
    pub fn with_skill_doc(mut self, skill_doc: impl Into<String>) -> Self {
        self.skill_doc = skill_doc.into();
        self
    }

    /// Sets the manifest file, relative to the package root.
    pub fn with_manifest(mut self, manifest: impl Into<String>) -> Self {
        self.manifest = manifest.into();
        self
    }

    /// Sets whether the manifest version is mandatory.
    pub fn with_require_version(mut self, require: bool) -> Self {
        self.require_version = require;
        self
    }

    /// Files that must exist at the package root, in report order.
    #[must_use]
    pub fn required_files(&self) -> [&str; 2] {
        [&self.skill_doc, &self.manifest]
    }

    /// Returns `true` if a cleaned entry path falls under the ignored namespace.
    #[must_use]
    pub fn is_ignored(&self, clean_name: &str) -> bool {
        clean_name
            .split('/')
            .next()
            .is_some_and(|first| first == self.ignored_namespace)
    }
}
