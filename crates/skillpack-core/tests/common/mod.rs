//! Shared fixtures for integration tests.

#![allow(dead_code, clippy::unwrap_used, clippy::missing_panics_doc)]

use std::fs;
use std::io::Cursor;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use zip::write::SimpleFileOptions;
use zip::write::ZipWriter;

/// Builds an in-memory zip; names ending in `/` become directory entries.
pub fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for (name, data) in entries {
        if name.ends_with('/') {
            zip.add_directory(*name, options).unwrap();
        } else {
            zip.start_file(*name, options).unwrap();
            zip.write_all(data.as_bytes()).unwrap();
        }
    }
    zip.finish().unwrap().into_inner()
}

/// Writes a zip built by [`zip_bytes`] to `dir/name` and returns its path.
pub fn write_zip(dir: &Path, name: &str, entries: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, zip_bytes(entries)).unwrap();
    path
}

/// Writes a complete, valid package for `id` into `dir`.
pub fn write_skill_package(dir: &Path, id: &str, version: Option<&str>) {
    fs::create_dir_all(dir.join("assets")).unwrap();
    fs::write(
        dir.join("SKILL.md"),
        format!("---\nname: \"{id}\"\ndescription: Echo the input back\n---\n\n# {id}\n"),
    )
    .unwrap();

    let mut manifest = serde_json::json!({
        "id": id,
        "schemas": {
            "input": "assets/input.schema.json",
            "parameter": "assets/parameter.schema.json",
            "output": "assets/output.schema.json",
        },
        "engines": ["codex", "gemini"],
        "artifacts": [{"role": "result", "pattern": "result.json"}],
    });
    if let Some(version) = version {
        manifest["version"] = serde_json::Value::from(version);
    }
    fs::write(
        dir.join("assets/runner.json"),
        serde_json::to_string_pretty(&manifest).unwrap(),
    )
    .unwrap();

    for schema in ["input", "parameter", "output"] {
        fs::write(
            dir.join(format!("assets/{schema}.schema.json")),
            r#"{"type": "object"}"#,
        )
        .unwrap();
    }
}

/// Rewrites `assets/runner.json` under `dir` through `edit`.
pub fn edit_manifest(dir: &Path, edit: impl FnOnce(&mut serde_json::Value)) {
    let path = dir.join("assets/runner.json");
    let mut doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    edit(&mut doc);
    fs::write(path, doc.to_string()).unwrap();
}

/// Collects `relative path -> bytes` for every file below `root`.
pub fn snapshot(root: &Path) -> Vec<(String, Vec<u8>)> {
    let mut files: Vec<(String, Vec<u8>)> = walkdir::WalkDir::new(root)
        .into_iter()
        .map(Result::unwrap)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let rel = entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            (rel, fs::read(entry.path()).unwrap())
        })
        .collect();
    files.sort();
    files
}
