//! Portal registry: the set of portal names a step may reference.

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::document::{self, Value};
use crate::error::LoadError;

/// String names are kept apart from bool/number names so that `portal: 42` matches
/// `name: 42` but not `name: '42'`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortalRegistry {
    names: HashSet<String>,
    scalars: Vec<Value>,
}

impl PortalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract names from `portals: [{name: ...}, ...]`.
    ///
    /// Entries that are not mappings are skipped, and so are falsy or missing names.
    pub fn from_document(document: &Value) -> Self {
        let portals = document
            .get("portals")
            .and_then(Value::as_sequence)
            .unwrap_or_default();

        let mut registry = Self::new();
        for name in portals
            .iter()
            .filter(|p| p.is_mapping())
            .filter_map(|p| p.get("name"))
            .filter(|name| name.is_truthy())
        {
            match name {
                Value::String(s) => {
                    registry.names.insert(s.clone());
                }
                Value::Bool(_) | Value::Number(_) => {
                    if !registry.scalars.contains(name) {
                        registry.scalars.push(name.clone());
                    }
                }
                Value::Null | Value::Sequence(_) | Value::Mapping(_) => {}
            }
        }
        registry
    }

    /// Load the registry file. A missing file is an empty registry.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            debug!(path = %path.display(), "portal registry not found, using empty registry");
            return Ok(Self::new());
        }
        let document = document::load_document(path)?;
        let registry = Self::from_document(&document);
        debug!(path = %path.display(), portals = registry.len(), "loaded portal registry");
        Ok(registry)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Typed lookup: strings match string names, bools and numbers match equal
    /// non-string names. Collections never match.
    pub fn contains_value(&self, portal: &Value) -> bool {
        match portal {
            Value::String(s) => self.contains(s),
            Value::Bool(_) | Value::Number(_) => self.scalars.contains(portal),
            Value::Null | Value::Sequence(_) | Value::Mapping(_) => false,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len() + self.scalars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every name in text form, sorted.
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .names
            .iter()
            .cloned()
            .chain(self.scalars.iter().map(Value::to_string))
            .collect();
        names.sort_unstable();
        names
    }
}
