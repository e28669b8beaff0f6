//! Structural validation rules (S001–S004).

use crate::document::Value;
use crate::error::Finding;

use super::step_prefix;

pub const REQUIRED_FIELDS: [&str; 6] = ["id", "name", "description", "version", "trigger", "steps"];

pub const REQUIRED_STEP_FIELDS: [&str; 4] = ["id", "name", "component", "action"];

/// One finding per absent top-level field, in declaration order.
/// A document that is not a mapping has no fields at all.
pub fn s001_required_fields(document: &Value, findings: &mut Vec<Finding>) {
    for field in REQUIRED_FIELDS {
        if !document.contains_key(field) {
            findings.push(Finding::structural(
                "S001",
                format!("missing required field '{field}'"),
                None,
            ));
        }
    }
}

/// Returns the steps when they form a non-empty sequence. Otherwise records a
/// single finding and returns `None` so per-step rules are skipped.
pub fn s002_non_empty_steps<'a>(
    document: &'a Value,
    findings: &mut Vec<Finding>,
) -> Option<&'a [Value]> {
    match document.get("steps").and_then(Value::as_sequence) {
        Some(steps) if !steps.is_empty() => Some(steps),
        _ => {
            findings.push(Finding::structural(
                "S002",
                "steps must be a non-empty list",
                None,
            ));
            None
        }
    }
}

/// Returns whether the step can be inspected further.
pub fn s003_step_is_mapping(index: usize, step: &Value, findings: &mut Vec<Finding>) -> bool {
    if step.is_mapping() {
        return true;
    }
    findings.push(Finding::structural(
        "S003",
        format!("{} must be a dict", step_prefix(index)),
        Some(index),
    ));
    false
}

pub fn s004_step_fields(index: usize, step: &Value, findings: &mut Vec<Finding>) {
    let prefix = step_prefix(index);
    for field in REQUIRED_STEP_FIELDS {
        if !step.contains_key(field) {
            findings.push(Finding::structural(
                "S004",
                format!("{prefix}: missing '{field}'"),
                Some(index),
            ));
        }
    }
}
