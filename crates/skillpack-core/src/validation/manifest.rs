//! Typed access to the `runner.json` manifest.
//!
//! The manifest is parsed as untyped JSON and projected field by field so
//! that each shape violation yields its own message, in the order the
//! validator checks them.

use serde_json::Map;
use serde_json::Value;

use crate::PackageError;
use crate::Result;
use crate::validation::parse_version;

/// Schema file references, relative to the package root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRefs {
    /// Input schema path.
    pub input: String,
    /// Parameter schema path.
    pub parameter: String,
    /// Output schema path.
    pub output: String,
}

impl SchemaRefs {
    /// Returns `(key, path)` pairs in manifest key order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("input", self.input.as_str()),
            ("parameter", self.parameter.as_str()),
            ("output", self.output.as_str()),
        ]
    }
}

/// A parsed `runner.json` document.
#[derive(Debug, Clone)]
pub struct RunnerManifest {
    doc: Map<String, Value>,
    label: String,
}

impl RunnerManifest {
    /// Parses manifest bytes read from `manifest_name`.
    ///
    /// Field errors name the manifest by its file name, e.g. `runner.json`
    /// for `assets/runner.json`.
    ///
    /// # Errors
    ///
    /// Returns `PackageError::InvalidManifest` if the bytes are not a JSON
    /// object.
    pub fn parse(bytes: &[u8], manifest_name: &str) -> Result<Self> {
        let label = manifest_name
            .rsplit('/')
            .next()
            .unwrap_or(manifest_name)
            .to_string();
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(doc)) => Ok(Self { doc, label }),
            Ok(_) => Err(PackageError::invalid_manifest(format!(
                "{manifest_name} must contain a JSON object"
            ))),
            Err(_) => Err(PackageError::invalid_manifest(format!(
                "Invalid {manifest_name}"
            ))),
        }
    }

    /// Returns the file name used in error messages.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    fn field_error(&self, problem: &str) -> PackageError {
        PackageError::invalid_manifest(format!("{} {problem}", self.label))
    }

    /// Returns the trimmed, non-empty `id`.
    pub fn id(&self) -> Result<String> {
        match self.doc.get("id") {
            Some(Value::String(id)) if !id.trim().is_empty() => Ok(id.trim().to_string()),
            _ => Err(self.field_error("must define a non-empty id")),
        }
    }

    /// Returns the `input`, `parameter` and `output` schema references.
    pub fn schemas(&self) -> Result<SchemaRefs> {
        let Some(Value::Object(schemas)) = self.doc.get("schemas") else {
            return Err(self.field_error("must define schemas"));
        };

        let get = |key: &str| match schemas.get(key) {
            Some(Value::String(path)) if !path.trim().is_empty() => Ok(path.clone()),
            _ => Err(self.field_error("schemas must define input, parameter and output")),
        };

        Ok(SchemaRefs {
            input: get("input")?,
            parameter: get("parameter")?,
            output: get("output")?,
        })
    }

    /// Returns the non-empty `engines` list.
    pub fn engines(&self) -> Result<&[Value]> {
        match self.doc.get("engines") {
            Some(Value::Array(engines)) if !engines.is_empty() => Ok(engines),
            _ => Err(self.field_error("must define a non-empty engines list")),
        }
    }

    /// Returns `artifacts` when provided; `null` counts as absent.
    pub fn artifacts(&self) -> Result<Option<&[Value]>> {
        match self.doc.get("artifacts") {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(artifacts)) => Ok(Some(artifacts)),
            Some(_) => Err(self.field_error("artifacts must be a list when provided")),
        }
    }

    /// Returns the trimmed `version`, validated against the version grammar.
    ///
    /// With `require` set, a missing, non-string or blank version fails.
    /// Without it, only a non-blank string is validated; anything else
    /// yields `None`.
    pub fn version(&self, require: bool) -> Result<Option<String>> {
        let version = match self.doc.get("version") {
            Some(Value::String(raw)) if !raw.trim().is_empty() => raw.trim().to_string(),
            _ if require => {
                return Err(self.field_error("must define a non-empty version"));
            }
            _ => return Ok(None),
        };

        parse_version(&version)?;
        Ok(Some(version))
    }
}
