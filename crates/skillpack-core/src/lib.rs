//! Safe inspection, extraction and validation of skill packages.
//!
//! A skill package is a directory (or a zip archive holding exactly one
//! top-level directory) that carries a fixed layout:
//!
//! ```text
//! <skill-id>/
//!   SKILL.md            -- frontmatter with `name: <skill-id>`
//!   assets/runner.json  -- manifest with `id`, `schemas`, `engines`, ...
//! ```
//!
//! `skillpack-core` refuses archives whose entries try to escape the
//! extraction directory, and checks that the directory name, the manifest
//! id and the frontmatter name agree before anything downstream trusts the
//! package.
//!
//! # Examples
//!
//! ```no_run
//! use skillpack_core::ValidatorConfig;
//! use skillpack_core::validate_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ValidatorConfig::default();
//! let report = validate_archive("echo-tool.zip", &config)?;
//! println!("{} {:?}", report.skill_id, report.version);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod creation;
pub mod error;
pub mod extraction;
pub mod inspection;
pub mod report;
pub mod security;
pub mod types;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export main API types
pub use api::SourceType;
pub use api::unpack_archive;
pub use api::validate_archive;
pub use api::validate_directory;
pub use api::validate_path;
pub use config::ValidatorConfig;
pub use creation::pack_directory;
pub use error::ErrorKind;
pub use error::PackageError;
pub use error::Result;
pub use extraction::extract_package;
pub use inspection::inspect_top_level;
pub use inspection::inspect_top_level_from_bytes;
pub use inspection::inspect_top_level_from_path;
pub use report::ExtractionReport;
pub use report::PackReport;
pub use report::UnpackReport;
pub use report::ValidationReport;
pub use validation::PackageValidator;
pub use validation::SkillVersion;
pub use validation::ValidatedPackage;
pub use validation::parse_version;

// Re-export types module for easier access
pub use types::EntryPath;
pub use types::ExtractionRoot;
