//! Project layout settings.
//!
//! Defaults match the conventional layout: workflows in `workflows/`, the portal
//! registry at `workflows/portal_routes.yaml`, diagrams in `diagrams/`. Relative
//! paths are resolved against the project root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub workflows_dir: PathBuf,
    pub registry_path: PathBuf,
    pub diagrams_dir: PathBuf,
    pub workflow_extension: String,
    pub diagram_extension: String,
    /// Process workflows in lexicographic order instead of directory listing order.
    pub sort_paths: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            workflows_dir: PathBuf::from("workflows"),
            registry_path: PathBuf::from("workflows").join("portal_routes.yaml"),
            diagrams_dir: PathBuf::from("diagrams"),
            workflow_extension: "yaml".into(),
            diagram_extension: "mmd".into(),
            sort_paths: false,
        }
    }
}

impl Config {
    /// Load settings from a YAML file; absent keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        Self::from_yaml(&text).map_err(|source| LoadError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    pub fn workflows_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.workflows_dir)
    }

    pub fn registry_path(&self, root: &Path) -> PathBuf {
        root.join(&self.registry_path)
    }

    pub fn diagrams_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.diagrams_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = Config::from_yaml("diagrams_dir: out\nsort_paths: true\n").unwrap();
        assert_eq!(config.diagrams_dir, PathBuf::from("out"));
        assert!(config.sort_paths);
        assert_eq!(config.workflows_dir, PathBuf::from("workflows"));
        assert_eq!(config.diagram_extension, "mmd");
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
    }

    #[test]
    fn paths_resolve_against_root() {
        let config = Config::default();
        let root = Path::new("/project");
        assert_eq!(
            config.registry_path(root),
            root.join("workflows").join("portal_routes.yaml")
        );
        assert_eq!(config.diagrams_dir(root), root.join("diagrams"));
    }

    #[test]
    fn unknown_shape_is_an_error() {
        assert!(Config::from_yaml("sort_paths: [1, 2]").is_err());
    }
}
