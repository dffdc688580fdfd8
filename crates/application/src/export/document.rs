/// Line-oriented builder for the rendered Lua text. Indentation is written
/// as tabs and expanded once in [`LuaDocument::build`].
#[derive(Debug, Default)]
pub struct LuaDocument {
    buffer: String,
}

impl LuaDocument {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    pub fn comment(self, text: &str) -> Self {
        self.text("-- ").text_line(text)
    }

    pub fn text(mut self, text: &str) -> Self {
        self.buffer.push_str(text);
        self
    }

    pub fn text_line(mut self, text: &str) -> Self {
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    pub fn empty_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Appends `block` followed by a blank line; no-op for an empty block.
    pub fn section(self, block: &str) -> Self {
        if block.is_empty() {
            self
        } else {
            self.text(block).empty_line()
        }
    }

    /// Text as written, tabs preserved.
    pub fn into_string(self) -> String {
        self.buffer
    }

    pub fn build(self, indent_width: usize) -> String {
        self.buffer.replace('\t', &" ".repeat(indent_width))
    }
}

/// Emits a blank line whenever the grouping key changes between
/// consecutive entries, never before the first one.
#[derive(Debug, Default)]
pub struct GroupSeparator {
    previous: String,
}

impl GroupSeparator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn separate(&mut self, key: &str, out: &mut String) {
        if !self.previous.is_empty() && self.previous != key {
            out.push('\n');
        }
        self.previous = key.to_string();
    }
}
