//! get command - Print the raw value for a single manifest key

use std::path::Path;

use anyhow::{Context as _, Result};
use serde_json::Value;

use crate::manifest::Manifest;

/// Print the value for `key`, or nothing if the key is absent.
///
/// Absence is a normal outcome for manifest lookups, so a missing key
/// prints nothing and exits successfully.
pub fn get(path: &Path, key: &str) -> Result<()> {
    let manifest = Manifest::load(path).context("Failed to load manifest")?;

    match manifest.value(key) {
        None => Ok(()),
        // Bare strings print without quotes, everything else as JSON.
        Some(Value::String(s)) => {
            println!("{}", s);
            Ok(())
        }
        Some(other) => {
            println!("{}", serde_json::to_string_pretty(other)?);
            Ok(())
        }
    }
}
