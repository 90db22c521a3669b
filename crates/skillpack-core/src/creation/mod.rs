//! Packing a package directory into a zip archive.

pub mod pack;

pub use pack::pack_directory;
