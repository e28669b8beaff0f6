//! Finding and error types shared by every phase.
//!
//! A `Finding` is a defect inside one workflow document and is always collected,
//! never propagated. A `LoadError` means the input set itself is broken (unreadable
//! directory, unparseable YAML, unwritable artifact) and terminates the run.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FindingKind {
    /// Required-field or step-shape violation.
    Structural,
    /// Step references a portal the registry does not know.
    Referential,
}

/// Same spelling as the serialized form.
impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindingKind::Structural => write!(f, "structural"),
            FindingKind::Referential => write!(f, "referential"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub code: String,
    pub kind: FindingKind,
    pub message: String,
    pub step_index: Option<usize>,
}

/// Renders the bare message; this is the text the report prints under a file.
impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Finding {
    pub fn structural(code: &str, message: impl Into<String>, step_index: Option<usize>) -> Self {
        Finding {
            code: code.into(),
            kind: FindingKind::Structural,
            message: message.into(),
            step_index,
        }
    }

    pub fn referential(code: &str, message: impl Into<String>, step_index: usize) -> Self {
        Finding {
            code: code.into(),
            kind: FindingKind::Referential,
            message: message.into(),
            step_index: Some(step_index),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML in {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to emit report: {0}")]
    Output(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::Write {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finding_displays_bare_message() {
        let f = Finding::structural("S001", "missing required field 'id'", None);
        assert_eq!(f.to_string(), "missing required field 'id'");
        assert_eq!(f.kind, FindingKind::Structural);
    }

    #[test]
    fn referential_finding_carries_step() {
        let f = Finding::referential("R001", "steps[2]: uses.portal 'x' not found", 2);
        assert_eq!(f.kind, FindingKind::Referential);
        assert_eq!(f.step_index, Some(2));
    }

    #[test]
    fn kind_display_matches_json() {
        for kind in [FindingKind::Structural, FindingKind::Referential] {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.to_string()));
        }
        assert_eq!(FindingKind::Referential.to_string(), "referential");
    }

    #[test]
    fn load_error_names_path() {
        let err = LoadError::io(
            "workflows/a.yaml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.to_string(), "failed to read workflows/a.yaml: gone");
    }
}
