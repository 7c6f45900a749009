//! Indented line emitter shared by the formatters

/// Accumulates output lines, prefixing each with `depth` copies of the unit
#[derive(Debug, Clone)]
pub struct Indenter<'a> {
    unit: &'a str,
    depth: usize,
    out: String,
    lines: usize,
}

impl<'a> Indenter<'a> {
    pub fn new(unit: &'a str) -> Self {
        Self {
            unit,
            depth: 0,
            out: String::new(),
            lines: 0,
        }
    }

    /// Open one level
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Close one level, never going below zero
    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Emit a line at the current depth
    pub fn emit(&mut self, line: &str) {
        self.emit_at(self.depth, line);
    }

    /// Emit a line at an explicit depth without changing the tracked one
    pub fn emit_at(&mut self, depth: usize, line: &str) {
        if self.lines > 0 {
            self.out.push('\n');
        }
        for _ in 0..depth {
            self.out.push_str(self.unit);
        }
        self.out.push_str(line);
        self.lines += 1;
    }

    /// Joined output, without a trailing newline
    pub fn finish(self) -> String {
        self.out
    }
}
