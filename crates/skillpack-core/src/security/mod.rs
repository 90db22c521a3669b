//! Path-safety policy shared by inspection and extraction.

pub mod path;

pub use path::normalize_entry_name;
pub use path::validate_entry_path;
