//! Validated path types.
//!
//! - [`EntryPath`]: an archive entry name that passed the path-safety policy
//! - [`ExtractionRoot`]: a freshly prepared directory with a canonical
//!   containment boundary

mod entry_path;
mod extraction_root;

pub use entry_path::EntryPath;
pub use extraction_root::ExtractionRoot;
