//! Cross-reference rule R001: a step's `uses.portal` must name a registered portal.

use crate::document::Value;
use crate::error::Finding;
use crate::registry::PortalRegistry;

use super::step_prefix;

/// Portal usage is optional: a missing `uses`, a `uses` that is not a mapping, or a
/// falsy `portal` are all accepted.
pub fn r001_portal_exists(
    index: usize,
    step: &Value,
    registry: &PortalRegistry,
    findings: &mut Vec<Finding>,
) {
    let Some(uses) = step.get("uses").filter(|u| u.is_mapping()) else {
        return;
    };
    let Some(portal) = uses.get("portal").filter(|p| p.is_truthy()) else {
        return;
    };

    if !registry.contains_value(portal) {
        findings.push(Finding::referential(
            "R001",
            format!(
                "{}: uses.portal '{}' not found in portal_routes.yaml",
                step_prefix(index),
                portal
            ),
            index,
        ));
    }
}
