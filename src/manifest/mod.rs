//! manifest
//!
//! The application manifest bundle and typed lookups over it.
//!
//! # Overview
//!
//! A [`Manifest`] wraps the key/value bundle the host environment packages
//! with an application. The bundle is loaded once, is immutable for the
//! life of the process, and is read through typed accessors that never
//! fail on absent optional keys.
//!
//! # Two-Tier Failure Semantics
//!
//! - Optional lookups ([`Manifest::string`], [`Manifest::bool`], ...)
//!   treat absence as a normal outcome: `None`, `""`, `false`, or an empty
//!   collection.
//! - [`Manifest::required_string`] documents a caller obligation. A missing
//!   required key is a deployment defect, so the accessor panics with a
//!   diagnostic naming the key instead of masking the problem with a
//!   default.
//!
//! # Loading
//!
//! The manifest is an injected dependency; its loading mechanism is the
//! host's business. For tools and tests this module also reads manifests
//! from JSON or TOML files:
//!
//! ```no_run
//! use appmanifest::manifest::Manifest;
//! use std::path::Path;
//!
//! let manifest = Manifest::load(Path::new("Info.json"))?;
//! if let Some(identifier) = manifest.string("CFBundleIdentifier") {
//!     println!("identifier: {}", identifier);
//! }
//! # Ok::<(), appmanifest::manifest::ManifestError>(())
//! ```

pub mod schema;

pub use schema::BundleInfo;

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

/// Errors from manifest construction and loading.
///
/// Key lookups never produce these: absence is not an error.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse manifest file '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("unsupported manifest format '{path}': expected a .json or .toml file")]
    UnsupportedFormat { path: PathBuf },

    #[error("manifest root must be a key/value object, got {found}")]
    NotAnObject { found: &'static str },
}

/// An immutable application manifest bundle.
///
/// Accessors are direct passthrough reads over the underlying map; nothing
/// is cached and nothing is ever mutated after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    entries: Map<String, Value>,
}

impl Manifest {
    /// Wrap an already-loaded key/value bundle.
    pub fn new(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    /// Build a manifest from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::NotAnObject` if the value is not an object.
    pub fn from_value(value: Value) -> Result<Self, ManifestError> {
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(ManifestError::NotAnObject {
                found: json_type_name(&other),
            }),
        }
    }

    /// Load a manifest from a `.json` or `.toml` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, cannot be parsed, has
    /// an unrecognized extension, or does not contain a key/value object at
    /// its root.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let contents = fs::read_to_string(path).map_err(|e| ManifestError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let extension = path.extension().and_then(|e| e.to_str());
        let value: Value = match extension {
            Some("json") => {
                serde_json::from_str(&contents).map_err(|e| ManifestError::Parse {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?
            }
            Some("toml") => toml::from_str(&contents).map_err(|e| ManifestError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?,
            _ => {
                return Err(ManifestError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let manifest = Self::from_value(value)?;
        debug!(path = %path.display(), keys = manifest.len(), "loaded manifest");
        Ok(manifest)
    }

    /// Load a manifest from the path named by an environment variable.
    ///
    /// Returns `Ok(None)` if the variable is unset or empty, mirroring the
    /// usual config-override convention.
    pub fn load_from_env(var: &str) -> Result<Option<Self>, ManifestError> {
        match std::env::var(var) {
            Ok(path) if !path.is_empty() => {
                debug!(var, path, "loading manifest from environment override");
                Self::load(Path::new(&path)).map(Some)
            }
            _ => Ok(None),
        }
    }

    /// Number of top-level keys in the bundle.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bundle has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // =========================================================================
    // Raw typed lookups
    // =========================================================================

    /// Get the raw value for a key. Absence is never an error.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Get a string value, or `None` if the key is absent or not a string.
    pub fn string(&self, key: &str) -> Option<&str> {
        self.value(key).and_then(Value::as_str)
    }

    /// Get a string value, or `""` if the key is absent or not a string.
    ///
    /// For callers where the empty string is an acceptable default.
    pub fn string_or_default(&self, key: &str) -> &str {
        self.string(key).unwrap_or("")
    }

    /// Get a string value for a key the caller guarantees is present.
    ///
    /// # Panics
    ///
    /// Panics if the key is absent or not a string. This is deliberate:
    /// required keys are guaranteed by deployment convention, and a missing
    /// one is a programming/configuration error that should fail fast
    /// rather than be papered over with a default.
    pub fn required_string(&self, key: &str) -> &str {
        match self.string(key) {
            Some(value) => value,
            None => panic!("required key '{key}' should be present in the manifest as a string"),
        }
    }

    /// Get a boolean value, defaulting to `false` if absent or not a bool.
    pub fn bool(&self, key: &str) -> bool {
        self.value(key).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Get an array of strings, skipping non-string elements.
    ///
    /// Returns an empty vector if the key is absent or not an array.
    pub fn string_array(&self, key: &str) -> Vec<String> {
        match self.value(key).and_then(Value::as_array) {
            Some(items) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Get a nested key/value dictionary, or `None` if absent or not an
    /// object.
    pub fn dictionary(&self, key: &str) -> Option<&Map<String, Value>> {
        self.value(key).and_then(Value::as_object)
    }
}

impl From<Map<String, Value>> for Manifest {
    fn from(entries: Map<String, Value>) -> Self {
        Self::new(entries)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
