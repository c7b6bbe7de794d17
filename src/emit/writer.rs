const INDENT: &str = "    ";

/// Accumulates generated source one line at a time.
///
/// Lines are indented by four spaces per open block, which is what `rustfmt`
/// would produce for the shapes the emitters write.
#[derive(Debug, Default)]
pub struct SourceWriter {
    out:   String,
    depth: usize,
}

impl SourceWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes one line at the current indentation. An empty line gets no
    /// trailing whitespace.
    pub fn line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.out.push_str(INDENT);
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    pub fn blank(&mut self) {
        self.line("");
    }

    /// Writes a `///` doc line.
    pub fn doc(&mut self, text: &str) {
        if text.is_empty() {
            self.line("///");
        } else {
            self.line(&format!("/// {text}"));
        }
    }

    /// Writes a `//!` inner doc line.
    pub fn inner_doc(&mut self, text: &str) {
        if text.is_empty() {
            self.line("//!");
        } else {
            self.line(&format!("//! {text}"));
        }
    }

    /// Writes `head {` and indents what follows. An empty head opens a bare
    /// block.
    pub fn open(&mut self, head: &str) {
        if head.is_empty() {
            self.line("{");
        } else {
            self.line(&format!("{head} {{"));
        }
        self.depth += 1;
    }

    /// Dedents and writes the closing brace.
    pub fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    /// Writes `head {}` for an item with an empty body.
    pub fn empty_block(&mut self, head: &str) {
        self.line(&format!("{head} {{}}"));
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }
}
