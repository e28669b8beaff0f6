//! Indent-aware line builder for Mermaid flowchart text.
//!
//! Statements inside a `flowchart` block use 2-space indentation.

/// Collects diagram lines, prefixing each with the current indentation.
pub struct DiagramWriter {
    lines: Vec<String>,
    indent_level: usize,
}

impl DiagramWriter {
    pub fn new() -> Self {
        Self {
            lines: Vec::with_capacity(16),
            indent_level: 0,
        }
    }

    /// Write one complete line at the current indentation.
    pub fn line(&mut self, text: &str) {
        let mut line = "  ".repeat(self.indent_level);
        line.push_str(text);
        self.lines.push(line);
    }

    /// Write `%% text`.
    pub fn comment(&mut self, text: &str) {
        self.line(&format!("%% {text}"));
    }

    /// Write `header` and indent everything after it (e.g. `flowchart LR`).
    pub fn block_open(&mut self, header: &str) {
        self.line(header);
        self.indent();
    }

    fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Consume the writer and return the lines.
    pub fn finish(self) -> Vec<String> {
        self.lines
    }
}

impl Default for DiagramWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_line() {
        let mut w = DiagramWriter::new();
        w.line("flowchart LR");
        assert_eq!(w.finish(), vec!["flowchart LR"]);
    }

    #[test]
    fn block_indents_body() {
        let mut w = DiagramWriter::new();
        w.block_open("flowchart LR");
        w.comment("Orders");
        w.line("a --> b");
        assert_eq!(w.finish(), vec!["flowchart LR", "  %% Orders", "  a --> b"]);
    }

    #[test]
    fn nested_blocks_stack_indentation() {
        let mut w = DiagramWriter::new();
        w.block_open("flowchart LR");
        w.block_open("subgraph inner");
        w.line("a");
        assert_eq!(w.finish(), vec!["flowchart LR", "  subgraph inner", "    a"]);
    }
}
