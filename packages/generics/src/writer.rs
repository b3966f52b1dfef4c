//! Buffered code writer with indentation tracking

/// Accumulates generated source line by line
pub struct CodeWriter {
    buffer: String,
    indent_level: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
        }
    }

    pub fn write_line(&mut self, text: &str) {
        let indent = "    ".repeat(self.indent_level);
        self.buffer.push_str(&indent);
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    pub fn output(&self) -> &str {
        &self.buffer
    }

    pub fn into_output(self) -> String {
        self.buffer
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}
