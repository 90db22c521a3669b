//! Archive inspection without extraction.
//!
//! Determines the single top-level directory of a package archive while
//! applying the path-safety policy to every entry name. No files are
//! written to disk.

pub mod top_level;

pub use top_level::inspect_top_level;
pub use top_level::inspect_top_level_from_bytes;
pub use top_level::inspect_top_level_from_path;
