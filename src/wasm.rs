//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::diagram;
use crate::document::{self, Value};
use crate::error::Finding;
use crate::registry::PortalRegistry;
use crate::validate;

/// Validate a workflow YAML against a portal registry YAML.
/// Returns a JSON array of findings.
#[wasm_bindgen]
pub fn validate_workflow(workflow_yaml: &str, registry_yaml: &str) -> JsValue {
    let result = validate_workflow_inner(workflow_yaml, registry_yaml);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_workflow_inner(workflow_yaml: &str, registry_yaml: &str) -> Vec<FindingDto> {
    let registry_doc = match parse(registry_yaml, "registry") {
        Ok(doc) => doc,
        Err(dto) => return vec![dto],
    };
    let workflow = match parse(workflow_yaml, "workflow") {
        Ok(doc) => doc,
        Err(dto) => return vec![dto],
    };

    let registry = PortalRegistry::from_document(&registry_doc);
    validate::validate_workflow(&workflow, &registry)
        .into_iter()
        .map(FindingDto::from)
        .collect()
}

/// Compile a workflow YAML into Mermaid text.
/// Returns a JSON object with either `diagram` (success) or `errors` (parse failure).
#[wasm_bindgen]
pub fn compile_diagram(workflow_yaml: &str) -> JsValue {
    let result = compile_diagram_inner(workflow_yaml);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn compile_diagram_inner(workflow_yaml: &str) -> CompileResult {
    match parse(workflow_yaml, "workflow") {
        Ok(doc) => CompileResult::Success {
            diagram: diagram::compile(&doc).to_string(),
        },
        Err(dto) => CompileResult::Errors { errors: vec![dto] },
    }
}

fn parse(yaml: &str, what: &str) -> Result<Value, FindingDto> {
    document::parse_document(yaml).map_err(|e| FindingDto {
        code: "P001".into(),
        kind: "parse".into(),
        message: format!("Failed to parse {what} YAML: {e}"),
        step_index: None,
    })
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct FindingDto {
    code: String,
    kind: String,
    message: String,
    step_index: Option<usize>,
}

impl From<Finding> for FindingDto {
    fn from(f: Finding) -> Self {
        FindingDto {
            code: f.code,
            kind: f.kind.to_string(),
            message: f.message,
            step_index: f.step_index,
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum CompileResult {
    #[serde(rename = "success")]
    Success { diagram: String },
    #[serde(rename = "errors")]
    Errors { errors: Vec<FindingDto> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_inner_reports_unknown_portal() {
        let findings = validate_workflow_inner(
            "id: wf\nname: W\ndescription: d\nversion: 1\ntrigger: {event: x}\nsteps:\n  - {id: a, name: A, component: c, action: go, uses: {portal: erp}}\n",
            "portals:\n  - name: crm\n",
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code, "R001");
        assert_eq!(findings[0].kind, "referential");
        assert_eq!(findings[0].step_index, Some(0));
    }

    #[test]
    fn validate_inner_surfaces_parse_errors() {
        let findings = validate_workflow_inner("steps: [", "portals: []");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code, "P001");
        assert_eq!(findings[0].kind, "parse");
        assert!(findings[0].message.starts_with("Failed to parse workflow YAML"));
    }

    #[test]
    fn compile_inner_returns_diagram() {
        match compile_diagram_inner("id: wf") {
            CompileResult::Success { diagram } => assert!(diagram.starts_with("flowchart LR")),
            CompileResult::Errors { errors } => panic!("unexpected errors: {errors:?}"),
        }
    }
}
