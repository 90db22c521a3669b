//! Package directory validator.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::PackageError;
use crate::Result;
use crate::ValidatorConfig;
use crate::security::validate_entry_path;
use crate::validation::RunnerManifest;
use crate::validation::frontmatter::extract_skill_name;

/// Identity and version of a package that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPackage {
    /// Skill id, equal to the directory name and the frontmatter name.
    pub skill_id: String,
    /// Manifest version, when present (always present if required).
    pub version: Option<String>,
}

/// Validates package directories against a fixed layout.
///
/// The validator holds no state between calls besides its configuration.
///
/// # Examples
///
/// ```no_run
/// use skillpack_core::PackageValidator;
/// use skillpack_core::ValidatorConfig;
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let validator = PackageValidator::new(ValidatorConfig::default());
/// let package = validator.validate_dir(Path::new("skills/echo-tool"), "echo-tool")?;
/// assert_eq!(package.skill_id, "echo-tool");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackageValidator {
    config: ValidatorConfig,
}

impl PackageValidator {
    /// Creates a validator for the given layout.
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Validates `skill_dir`, declared under `top_level_dir`.
    ///
    /// Checks run in order and the first failure is returned, except that
    /// missing required files are collected into one report, and missing
    /// schema files are collected into another:
    ///
    /// 1. required files present
    /// 2. manifest parses as a JSON object
    /// 3. manifest `id` is a non-empty string
    /// 4. documentation frontmatter defines `name`
    /// 5. directory name, `id` and `name` are identical
    /// 6. `schemas.{input,parameter,output}` reference existing files
    /// 7. `engines` is a non-empty list
    /// 8. `artifacts` is a list when present
    /// 9. `version` matches the version grammar (mandatory if the
    ///    configuration sets `require_version`)
    ///
    /// # Errors
    ///
    /// - `PackageError::MissingFiles` for absent required or schema files
    /// - `PackageError::InvalidManifest` for malformed manifest fields
    /// - `PackageError::MissingFrontmatterName` for a missing `name`
    /// - `PackageError::IdentityMismatch` if the three names disagree
    /// - `PackageError::InvalidVersion` for a malformed version
    pub fn validate_dir(&self, skill_dir: &Path, top_level_dir: &str) -> Result<ValidatedPackage> {
        let missing: Vec<String> = self
            .config
            .required_files()
            .into_iter()
            .filter(|rel| !skill_dir.join(rel).exists())
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(PackageError::MissingFiles { files: missing });
        }

        let manifest_bytes = fs::read(skill_dir.join(&self.config.manifest))?;
        let manifest = RunnerManifest::parse(&manifest_bytes, &self.config.manifest)?;
        let skill_id = manifest.id()?;

        let doc_bytes = fs::read(skill_dir.join(&self.config.skill_doc))?;
        let doc = String::from_utf8(doc_bytes).map_err(|_| {
            PackageError::invalid_manifest(format!("{} is not valid UTF-8", self.config.skill_doc))
        })?;
        let skill_name = extract_skill_name(&doc).ok_or_else(|| {
            PackageError::MissingFrontmatterName {
                doc: self.config.skill_doc.clone(),
            }
        })?;

        if skill_id != top_level_dir.trim() || skill_name != skill_id {
            debug!(
                directory = top_level_dir,
                id = %skill_id,
                name = %skill_name,
                "package identity mismatch"
            );
            return Err(PackageError::IdentityMismatch);
        }

        let schemas = manifest.schemas()?;
        let mut missing = Vec::new();
        for (key, rel) in schemas.entries() {
            let entry = validate_entry_path(rel).map_err(|_| {
                PackageError::invalid_manifest(format!(
                    "{} schema {key} must be a relative path inside the package: {rel}",
                    manifest.label()
                ))
            })?;
            if !skill_dir.join(entry.to_relative_path()).exists() {
                missing.push(rel.to_string());
            }
        }
        if !missing.is_empty() {
            return Err(PackageError::MissingFiles { files: missing });
        }

        manifest.engines()?;
        manifest.artifacts()?;
        let version = manifest.version(self.config.require_version)?;

        debug!(skill_id = %skill_id, version = ?version, "package validated");
        Ok(ValidatedPackage { skill_id, version })
    }
}
