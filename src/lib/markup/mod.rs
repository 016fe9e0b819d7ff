//! Indentation-aware markup writer.
//!
//! Components describe themselves through [`Render`] and push whole lines
//! into a [`Markup`] buffer, which keeps track of nesting so the output
//! reads like hand-written HTML.

use crate::utils::{escape_attr, escape_text};

const INDENT: &str = "    ";

#[derive(Debug, Default)]
pub struct Markup {
    buf: String,
    depth: usize,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current depth.
    pub fn line(&mut self, content: &str) {
        for _ in 0..self.depth {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(content);
        self.buf.push('\n');
    }

    /// Write an opening line and nest everything after it.
    pub fn open(&mut self, content: &str) {
        self.line(content);
        self.depth += 1;
    }

    /// Leave the current nesting level and write the closing line.
    pub fn close(&mut self, content: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(content);
    }

    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    pub fn push<R: Render + ?Sized>(&mut self, component: &R) {
        component.render(self);
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Something that writes itself as markup.
pub trait Render {
    fn render(&self, out: &mut Markup);

    fn to_html(&self) -> String {
        let mut out = Markup::new();
        self.render(&mut out);
        out.finish()
    }
}

/// Start tag with escaped attribute values, in the given order.
pub fn start_tag(name: &str, attrs: &[(&str, &str)]) -> String {
    let mut tag = String::with_capacity(name.len() + 2);
    tag.push('<');
    tag.push_str(name);
    for (key, value) in attrs {
        tag.push(' ');
        tag.push_str(key);
        tag.push_str("=\"");
        tag.push_str(&escape_attr(value));
        tag.push('"');
    }
    tag.push('>');
    tag
}

/// Start tag, escaped text content and end tag on one line.
pub fn element(name: &str, attrs: &[(&str, &str)], text: &str) -> String {
    format!("{}{}</{name}>", start_tag(name, attrs), escape_text(text))
}
