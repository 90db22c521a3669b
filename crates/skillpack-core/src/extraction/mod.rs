//! Safe extraction of package archives.

pub mod extract;

pub use extract::extract_package;
