//! Diagram pass: workflow document → Mermaid flowchart.
//!
//! Public API: `compile(document) -> GraphDescription`. Compilation is total: a
//! structurally broken document still produces a diagram, with fallbacks in place
//! of whatever is missing.

pub mod graph;
pub mod writer;

use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use tracing::{info, warn};

use crate::document::{self, resolve, Value};
use crate::error::LoadError;
use graph::{FlowGraph, FlowNode, NodeKind};
use writer::DiagramWriter;

pub const TRIGGER_NODE_ID: &str = "trigger";

/// Compiled diagram: the Mermaid lines plus the graph they describe.
#[derive(Debug, Clone)]
pub struct GraphDescription {
    lines: Vec<String>,
    graph: FlowGraph,
}

impl GraphDescription {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }
}

/// Lines joined by `\n`, no trailing newline.
impl fmt::Display for GraphDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// Compile a workflow document into a left-to-right flowchart.
pub fn compile(document: &Value) -> GraphDescription {
    let mut w = DiagramWriter::new();
    let mut graph = FlowGraph::new();

    // 1. HEADER
    let title = resolve(&[(document, "name"), (document, "id")], "workflow");
    w.block_open("flowchart LR");
    w.comment(&title);

    // 2. TRIGGER
    let no_trigger = Value::Null;
    let trigger = document.get("trigger").unwrap_or(&no_trigger);
    let trigger_label = resolve(&[(trigger, "event"), (trigger, "type")], "trigger");
    w.line(&format!(r#"{TRIGGER_NODE_ID}(["Trigger: {trigger_label}"])"#));
    let mut prev = graph.add_node(FlowNode {
        id: TRIGGER_NODE_ID.into(),
        label: trigger_label,
        kind: NodeKind::Trigger,
    });

    // 3. STEPS + EDGES
    let steps = document
        .get("steps")
        .and_then(Value::as_sequence)
        .unwrap_or_default();

    for (i, step) in steps.iter().enumerate() {
        let step_id = resolve(&[(step, "id")], &format!("s{}", i + 1));
        let name = resolve(&[(step, "name")], &step_id);
        let component = resolve(&[(step, "component")], "component");
        let node_id = node_identifier(&step_id);
        let label = format!(r"{name}\n[{component}]");

        w.line(&format!(r#"{node_id}["{label}"]"#));
        w.line(&format!("{} --> {node_id}", graph.graph[prev].id));

        let current = graph.add_node(FlowNode {
            id: node_id,
            label,
            kind: NodeKind::Step,
        });
        graph.add_edge(prev, current);
        prev = current;
    }

    GraphDescription {
        lines: w.finish(),
        graph,
    }
}

/// Mermaid node ids must not contain hyphens.
pub fn node_identifier(step_id: &str) -> String {
    step_id.replace('-', "_")
}

/// Artifact name: the workflow `id`, else the source file stem.
///
/// The id must be a single plain path component so the artifact stays inside the
/// output directory; `../x`, `a/b` or `/abs` fall back to the stem.
pub fn artifact_name(document: &Value, source: &Path) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "workflow".to_string());
    let name = resolve(&[(document, "id")], &stem);
    if is_single_component(&name) {
        return name;
    }
    warn!(
        source = %source.display(),
        id = %name,
        "workflow id is not a plain file name, using the file stem"
    );
    stem
}

fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) => part == name,
        _ => false,
    }
}

/// Write `<out_dir>/<name>.<extension>`, creating `out_dir` if needed.
pub fn write_diagram(
    out_dir: &Path,
    name: &str,
    extension: &str,
    description: &GraphDescription,
) -> Result<PathBuf, LoadError> {
    fs::create_dir_all(out_dir).map_err(|e| LoadError::write(out_dir, e))?;

    let path = out_dir.join(format!("{name}.{extension}"));
    let file = File::create(&path).map_err(|e| LoadError::write(&path, e))?;
    let mut out = BufWriter::new(file);
    write!(out, "{description}").map_err(|e| LoadError::write(&path, e))?;
    out.flush().map_err(|e| LoadError::write(&path, e))?;

    Ok(path)
}

/// Load, compile and write the diagram for one workflow file.
pub fn visualize_file(
    source: &Path,
    out_dir: &Path,
    extension: &str,
) -> Result<PathBuf, LoadError> {
    let document = document::load_document(source)?;
    let description = compile(&document);
    let name = artifact_name(&document, source);
    let path = write_diagram(out_dir, &name, extension, &description)?;
    info!(
        source = %source.display(),
        nodes = description.graph().node_count(),
        "wrote diagram"
    );
    Ok(path)
}
