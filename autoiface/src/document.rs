//! Indented output text.

use autoiface_syntax::DocComment;

use crate::pool::PooledBuffer;

/// A text buffer that tracks the current nesting depth.
///
/// Each [`open`](Self::open) is matched by one [`close`](Self::close);
/// [`finish`](Self::finish) closes whatever is still open. A blank separator
/// line right before a closing brace is dropped, and a body with nothing in
/// it collapses to `{}` on the header line.
pub struct OutputDocument<'a> {
    buffer: PooledBuffer<'a>,
    indent: &'a str,
    depth: usize,
}

impl<'a> OutputDocument<'a> {
    /// Write into `buffer`, indenting by `indent` per level.
    pub fn new(buffer: PooledBuffer<'a>, indent: &'a str) -> Self {
        Self {
            buffer,
            indent,
            depth: 0,
        }
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Append raw text, without indentation.
    pub fn push_raw(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Append an indented line.
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buffer.push_str(self.indent);
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    /// Append an empty line.
    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    /// Append a documentation comment at the current depth.
    pub fn doc_comment(&mut self, docs: &DocComment) {
        for line in docs.rendered_lines() {
            self.line(&line);
        }
    }

    /// Write `header {` and go one level deeper.
    pub fn open(&mut self, header: &str) {
        self.line(&format!("{header} {{"));
        self.depth += 1;
    }

    /// Go one level up and write the closing brace.
    pub fn close(&mut self) {
        if self.depth == 0 {
            return;
        }
        while self.buffer.ends_with("\n\n") {
            self.buffer.pop();
        }
        self.depth -= 1;
        if self.buffer.ends_with("{\n") {
            self.buffer.pop();
            self.buffer.push_str("}\n");
        } else {
            self.line("}");
        }
    }

    /// Close every open level and take the text.
    pub fn finish(mut self) -> String {
        while self.depth > 0 {
            self.close();
        }
        self.buffer.as_str().to_owned()
    }
}
