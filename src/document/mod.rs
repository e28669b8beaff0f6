//! Load phase: YAML text → `Value` tree.

pub mod value;

pub use value::{resolve, Mapping, Value};

use std::path::Path;

use crate::error::LoadError;

/// Parse a YAML string into a document tree. An empty document is `Value::Null`.
pub fn parse_document(yaml: &str) -> Result<Value, serde_yaml::Error> {
    if yaml.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_yaml::from_str::<serde_yaml::Value>(yaml).map(Value::from)
}

/// Read and parse one YAML file.
pub fn load_document(path: &Path) -> Result<Value, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    parse_document(&text).map_err(|source| LoadError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}
