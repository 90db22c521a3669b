//! Structural and identity validation of an extracted package directory.

pub mod frontmatter;
pub mod manifest;
pub mod validator;
pub mod version;

pub use manifest::RunnerManifest;
pub use manifest::SchemaRefs;
pub use validator::PackageValidator;
pub use validator::ValidatedPackage;
pub use version::SkillVersion;
pub use version::parse_version;
