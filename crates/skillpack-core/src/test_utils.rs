//! Test helpers for building in-memory archives and package directories.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::fs;
use std::io::Cursor;
use std::io::Write;
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::write::ZipWriter;

/// Creates an in-memory ZIP archive from a list of `(name, content)` entries.
///
/// Names are written verbatim, so unsafe names can be produced on purpose.
/// Names ending in `/` become directory entries.
#[must_use]
pub fn create_test_zip(entries: Vec<(&str, &str)>) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored)
        .unix_permissions(0o644);

    for (name, data) in entries {
        if name.ends_with('/') {
            zip.add_directory(name, options).unwrap();
        } else {
            zip.start_file(name, options).unwrap();
            zip.write_all(data.as_bytes()).unwrap();
        }
    }

    zip.finish().unwrap().into_inner()
}

/// A well-formed `runner.json` for `id`, optionally carrying a version.
#[must_use]
pub fn runner_json(id: &str, version: Option<&str>) -> String {
    let mut manifest = serde_json::json!({
        "id": id,
        "schemas": {
            "input": "assets/input.schema.json",
            "parameter": "assets/parameter.schema.json",
            "output": "assets/output.schema.json",
        },
        "engines": ["python"],
        "artifacts": [],
    });
    if let Some(version) = version {
        manifest["version"] = serde_json::Value::from(version);
    }
    manifest.to_string()
}

/// Writes a complete, valid package for `id` into `dir`.
pub fn write_skill_package(dir: &Path, id: &str, version: Option<&str>) {
    fs::create_dir_all(dir.join("assets")).unwrap();
    fs::write(
        dir.join("SKILL.md"),
        format!("---\nname: {id}\ndescription: test skill\n---\n# {id}\n"),
    )
    .unwrap();
    fs::write(dir.join("assets/runner.json"), runner_json(id, version)).unwrap();
    for schema in ["input", "parameter", "output"] {
        fs::write(
            dir.join(format!("assets/{schema}.schema.json")),
            r#"{"type":"object"}"#,
        )
        .unwrap();
    }
}
