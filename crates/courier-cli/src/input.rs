//! Document loading for file-based subcommands.
//!
//! The format is chosen by extension: `.yaml`/`.yml` is YAML, anything
//! else is JSON.

use std::path::Path;

use anyhow::{bail, Context, Result};
use courier_schema::ConfigMap;
use serde_json::Value;

/// Read a JSON or YAML document as a JSON value.
pub fn read_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read file: {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let value = match ext {
        "yaml" | "yml" if content.trim().is_empty() => Value::Null,
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .with_context(|| format!("invalid YAML: {}", path.display()))?,
        _ => serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON: {}", path.display()))?,
    };
    Ok(value)
}

/// Read a configuration map. The document must be a mapping at the top
/// level; an empty YAML file reads as an empty map.
pub fn read_config_map(path: &Path) -> Result<ConfigMap> {
    match read_document(path)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(ConfigMap::new()),
        other => bail!(
            "configuration in {} must be a mapping, found {}",
            path.display(),
            kind_of(&other)
        ),
    }
}

/// Read a UTF-8 text file.
pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("cannot read file: {}", path.display()))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
