#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use flowcheck::document::{parse_document, Value};
use flowcheck::registry::PortalRegistry;
use tempfile::TempDir;

// =============================================================================
// Documents
// =============================================================================

pub const REGISTRY_YAML: &str = "\
portals:
  - name: crm
  - name: billing
";

pub fn doc(yaml: &str) -> Value {
    parse_document(yaml).expect("fixture YAML should parse")
}

pub fn crm_billing_registry() -> PortalRegistry {
    PortalRegistry::from_document(&doc(REGISTRY_YAML))
}

/// A complete workflow with one step using `portal`.
pub fn single_step_workflow(id: &str, portal: &str) -> String {
    format!(
        "\
id: {id}
name: Send confirmation
description: Emails the customer
version: 1
trigger:
  event: order.created
steps:
  - id: s1
    name: Send
    component: emailer
    action: send
    uses:
      portal: {portal}
"
    )
}

pub const ORDER_INTAKE_YAML: &str = "\
id: order-intake
name: Order Intake
description: Validates an order and notifies the CRM
version: 2
trigger:
  event: order.created
steps:
  - id: s1-a
    name: Validate order
    component: validator
    action: check
  - id: s2-b
    name: Notify CRM
    component: emailer
    action: send
    uses:
      portal: crm
";

// =============================================================================
// On-disk projects
// =============================================================================

/// Temporary project laid out as `<root>/workflows/*.yaml`.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir(dir.path().join("workflows")).expect("workflows dir");
        Project { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn workflows_dir(&self) -> PathBuf {
        self.root().join("workflows")
    }

    pub fn registry_path(&self) -> PathBuf {
        self.workflows_dir().join("portal_routes.yaml")
    }

    pub fn write_registry(&self, yaml: &str) -> PathBuf {
        let path = self.registry_path();
        fs::write(&path, yaml).expect("write registry");
        path
    }

    pub fn write_workflow(&self, file_name: &str, yaml: &str) -> PathBuf {
        let path = self.workflows_dir().join(file_name);
        fs::write(&path, yaml).expect("write workflow");
        path
    }
}
