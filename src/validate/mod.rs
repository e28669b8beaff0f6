//! Validation phase.
//!
//! Checks one workflow document against the portal registry. Structural rules
//! (S001–S004) live in `structural`, the portal cross-reference rule (R001) in
//! `references`. Findings come out in document order.

pub mod references;
pub mod structural;

use std::path::Path;

use tracing::debug;

use crate::document::{self, resolve, Value};
use crate::error::{Finding, LoadError};
use crate::registry::PortalRegistry;

/// Validate a whole workflow document. Pure; never fails.
pub fn validate_workflow(document: &Value, registry: &PortalRegistry) -> Vec<Finding> {
    let mut findings = Vec::new();

    structural::s001_required_fields(document, &mut findings);

    let Some(steps) = structural::s002_non_empty_steps(document, &mut findings) else {
        return findings;
    };

    for (index, step) in steps.iter().enumerate() {
        findings.extend(validate_step(index, step, registry));
    }

    findings
}

/// Validate the step at `index`: shape, then fields, then its portal reference.
pub fn validate_step(index: usize, step: &Value, registry: &PortalRegistry) -> Vec<Finding> {
    let mut findings = Vec::new();

    if !structural::s003_step_is_mapping(index, step, &mut findings) {
        return findings;
    }
    structural::s004_step_fields(index, step, &mut findings);
    references::r001_portal_exists(index, step, registry, &mut findings);

    findings
}

/// Load and validate one workflow file. Returns its path relative to `root`.
pub fn validate_file(
    path: &Path,
    root: &Path,
    registry: &PortalRegistry,
) -> Result<(String, Vec<Finding>), LoadError> {
    let relative = relative_path(path, root);
    let document = document::load_document(path)?;
    let findings = validate_workflow(&document, registry);

    debug!(
        workflow = %resolve(&[(&document, "id")], &relative),
        findings = findings.len(),
        "validated workflow"
    );

    Ok((relative, findings))
}

pub(crate) fn step_prefix(index: usize) -> String {
    format!("steps[{index}]")
}

fn relative_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(yaml: &str) -> Value {
        document::parse_document(yaml).unwrap()
    }

    fn messages(findings: &[Finding]) -> Vec<String> {
        findings.iter().map(|f| f.message.clone()).collect()
    }

    #[test]
    fn missing_fields_come_before_portal_error_within_a_step() {
        let registry = PortalRegistry::new();
        let step = doc("id: a\nuses:\n  portal: erp\n");
        assert_eq!(
            messages(&validate_step(3, &step, &registry)),
            vec![
                "steps[3]: missing 'name'",
                "steps[3]: missing 'component'",
                "steps[3]: missing 'action'",
                "steps[3]: uses.portal 'erp' not found in portal_routes.yaml",
            ]
        );
    }

    #[test]
    fn non_mapping_step_stops_further_checks() {
        let registry = PortalRegistry::new();
        let findings = validate_step(0, &doc("just-a-string"), &registry);
        assert_eq!(messages(&findings), vec!["steps[0] must be a dict"]);
    }

    #[test]
    fn non_mapping_document_reports_every_field() {
        let findings = validate_workflow(&doc("- a\n- b\n"), &PortalRegistry::new());
        assert_eq!(findings.len(), 7);
        assert_eq!(findings[6].message, "steps must be a non-empty list");
    }

    #[test]
    fn relative_path_falls_back_to_full_path() {
        let root = Path::new("/project");
        assert_eq!(
            relative_path(Path::new("/project/workflows/a.yaml"), root),
            Path::new("workflows").join("a.yaml").display().to_string()
        );
        assert_eq!(relative_path(Path::new("/elsewhere/a.yaml"), root), "/elsewhere/a.yaml");
    }

    #[test]
    fn validate_file_reads_and_relativizes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wf.yaml");
        std::fs::write(&path, "id: wf\nsteps: []\n").unwrap();
        let (rel, findings) = validate_file(&path, dir.path(), &PortalRegistry::new()).unwrap();
        assert_eq!(rel, "wf.yaml");
        assert_eq!(findings.len(), 5);
    }
}
