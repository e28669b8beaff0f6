//! Validation reporter: runs the validator over many files and prints the outcome.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::{Finding, LoadError};
use crate::registry::PortalRegistry;
use crate::validate;

const TAG: &str = "[validate]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// One ✅/❌ line per file with indented finding bullets.
    #[default]
    Text,
    /// A single JSON document describing the summary.
    Json,
}

/// A finding tied to the workflow it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocatedFinding {
    pub path: String,
    #[serde(flatten)]
    pub finding: Finding,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    pub known_portals: Vec<String>,
    pub files_checked: usize,
    /// Flat list in processing order.
    pub findings: Vec<LocatedFinding>,
}

impl ValidationSummary {
    pub fn issue_count(&self) -> usize {
        self.findings.len()
    }

    pub fn is_success(&self) -> bool {
        self.findings.is_empty()
    }

    /// Process exit status: 0 when clean, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_success() { 0 } else { 1 }
    }
}

pub struct Reporter<W: Write> {
    out: W,
    format: ReportFormat,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Reporter {
            out,
            format: ReportFormat::Text,
        }
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Validate `paths` in the given order. Files are reported relative to `root`.
    pub fn run(
        &mut self,
        paths: &[PathBuf],
        root: &Path,
        registry: &PortalRegistry,
    ) -> Result<ValidationSummary, LoadError> {
        let mut summary = ValidationSummary {
            known_portals: registry.sorted_names(),
            ..Default::default()
        };

        if self.format == ReportFormat::Text {
            writeln!(
                self.out,
                "{TAG} Known portals: {}",
                python_list(&summary.known_portals)
            )?;
        }

        for path in paths {
            let (relative, findings) = validate::validate_file(path, root, registry)?;
            summary.files_checked += 1;

            if self.format == ReportFormat::Text {
                self.file_status(&relative, &findings)?;
            }

            summary
                .findings
                .extend(findings.into_iter().map(|finding| LocatedFinding {
                    path: relative.clone(),
                    finding,
                }));
        }

        match self.format {
            ReportFormat::Text => self.footer(&summary)?,
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut self.out, &summary)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;

        info!(
            files = summary.files_checked,
            issues = summary.issue_count(),
            "validation finished"
        );
        Ok(summary)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn file_status(&mut self, relative: &str, findings: &[Finding]) -> std::io::Result<()> {
        if findings.is_empty() {
            return writeln!(self.out, "{TAG} ✅ {relative}");
        }
        writeln!(self.out, "{TAG} ❌ {relative}")?;
        for finding in findings {
            writeln!(self.out, "  - {finding}")?;
        }
        Ok(())
    }

    fn footer(&mut self, summary: &ValidationSummary) -> std::io::Result<()> {
        writeln!(self.out)?;
        if summary.is_success() {
            writeln!(self.out, "{TAG} All workflows look good.")
        } else {
            writeln!(self.out, "{TAG} Found {} issues.", summary.issue_count())
        }
    }
}

/// `['a', 'b']`
fn python_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| format!("'{s}'")).collect();
    format!("[{}]", quoted.join(", "))
}
