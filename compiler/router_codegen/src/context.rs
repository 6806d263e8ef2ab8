//! Emission context.
//!
//! `EmitContext` tracks the current indentation level and accumulates output
//! lines. Indentation is four spaces per level; blank lines carry no
//! trailing whitespace.

/// Indented line writer.
pub struct EmitContext {
    /// Current indentation level.
    indent: usize,
    /// Generated output.
    output: String,
}

impl EmitContext {
    /// Create a context starting at `base_indent` levels.
    pub fn new(base_indent: usize) -> Self {
        Self {
            indent: base_indent,
            output: String::with_capacity(1024),
        }
    }

    /// Increase indentation level.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease indentation level.
    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    /// Write a line at the current indentation.
    pub fn writeln(&mut self, s: &str) {
        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
        self.output.push_str(s);
        self.output.push('\n');
    }

    /// Write an empty line.
    pub fn blank_line(&mut self) {
        self.output.push('\n');
    }

    /// Write a multi-line block at the current indentation.
    ///
    /// Leading spaces inside `block` are kept relative to the current level.
    /// Empty lines stay empty.
    pub fn write_block(&mut self, block: &str) {
        for line in block.lines() {
            if line.trim().is_empty() {
                self.blank_line();
            } else {
                self.writeln(line);
            }
        }
    }

    /// Finish and return the output trimmed for slot substitution.
    pub fn into_fragment(self) -> String {
        self.output.trim().to_string()
    }
}
