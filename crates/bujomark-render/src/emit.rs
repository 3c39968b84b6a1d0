//! Markup emission.
//!
//! [`MarkupWriter`] appends structural fragments to an append-only buffer
//! in exactly the order operations arrive. The element names are fixed and
//! must match the stylesheets shipped with the original plugin.

use crate::handler::Op;

/// Container element name.
pub const CONTAINER: &str = "bujo";
/// One journal line.
pub const ENTRY: &str = "bujo-entry";
/// Indentation span; content is repeated non-breaking-space units.
pub const INDENT: &str = "bujo-indent";
/// Bullet glyph span.
pub const BULLET: &str = "bujo-bullet";
/// Entry body span.
pub const TEXT: &str = "bujo-text";
/// Visual line break between entries.
pub const LINE_BREAK: &str = "<br />";

/// Non-breaking space unit used for indentation and bullet separation.
const NBSP: &str = "&nbsp;";

/// Append-only markup writer.
#[derive(Debug, Clone, Default)]
pub struct MarkupWriter {
    buf: String,
    /// Non-breaking spaces per indent level
    indent_units: usize,
}

impl MarkupWriter {
    /// Create a writer emitting `indent_units` non-breaking spaces per
    /// indent level.
    pub fn new(indent_units: usize) -> Self {
        Self {
            buf: String::new(),
            indent_units,
        }
    }

    /// Apply one output operation.
    pub fn apply(&mut self, op: &Op) {
        match op {
            Op::ContainerOpen => self.open_tag(CONTAINER),
            Op::ContainerClose => self.close_tag(CONTAINER),
            Op::OpenEntry {
                indent_levels,
                glyph,
            } => self.open_entry(*indent_levels, glyph),
            Op::CloseEntry => {
                self.close_tag(TEXT);
                self.close_tag(ENTRY);
            }
            Op::LineBreak => self.buf.push_str(LINE_BREAK),
            Op::Text(text) => self.text(text),
        }
    }

    /// Append escaped literal text.
    pub fn text(&mut self, text: &str) {
        self.buf.push_str(&html_escape::encode_safe(text));
    }

    /// Emitted markup so far.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Byte length of the markup so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if nothing has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the writer, yielding the markup buffer.
    pub fn into_string(self) -> String {
        self.buf
    }

    fn open_entry(&mut self, levels: usize, glyph: &str) {
        self.open_tag(ENTRY);
        if levels > 0 {
            self.open_tag(INDENT);
            for _ in 0..levels * self.indent_units {
                self.buf.push_str(NBSP);
            }
            self.close_tag(INDENT);
        }
        self.open_tag(BULLET);
        self.text(glyph);
        self.buf.push_str(NBSP);
        self.close_tag(BULLET);
        self.open_tag(TEXT);
    }

    fn open_tag(&mut self, name: &str) {
        self.buf.push('<');
        self.buf.push_str(name);
        self.buf.push('>');
    }

    fn close_tag(&mut self, name: &str) {
        self.buf.push_str("</");
        self.buf.push_str(name);
        self.buf.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_tags() {
        let mut w = MarkupWriter::new(4);
        w.apply(&Op::ContainerOpen);
        w.apply(&Op::ContainerClose);
        assert_eq!(w.as_str(), "<bujo></bujo>");
    }

    #[test]
    fn test_entry_without_indent() {
        let mut w = MarkupWriter::new(4);
        w.apply(&Op::OpenEntry {
            indent_levels: 0,
            glyph: "•".into(),
        });
        assert_eq!(
            w.as_str(),
            "<bujo-entry><bujo-bullet>•&nbsp;</bujo-bullet><bujo-text>"
        );
    }

    #[test]
    fn test_entry_with_indent() {
        let mut w = MarkupWriter::new(4);
        w.apply(&Op::OpenEntry {
            indent_levels: 2,
            glyph: "•".into(),
        });
        let expected_indent = "&nbsp;".repeat(8);
        assert!(w
            .as_str()
            .contains(&format!("<bujo-indent>{}</bujo-indent>", expected_indent)));
    }

    #[test]
    fn test_indent_units_configurable() {
        let mut w = MarkupWriter::new(2);
        w.apply(&Op::OpenEntry {
            indent_levels: 3,
            glyph: "•".into(),
        });
        assert!(w
            .as_str()
            .contains(&format!("<bujo-indent>{}</bujo-indent>", "&nbsp;".repeat(6))));
    }

    #[test]
    fn test_close_entry() {
        let mut w = MarkupWriter::new(4);
        w.apply(&Op::CloseEntry);
        assert_eq!(w.as_str(), "</bujo-text></bujo-entry>");
    }

    #[test]
    fn test_text_is_escaped() {
        let mut w = MarkupWriter::new(4);
        w.apply(&Op::Text("a <b> & \"c\"".into()));
        assert_eq!(w.as_str(), "a &lt;b&gt; &amp; &quot;c&quot;");
    }

    #[test]
    fn test_glyph_is_escaped() {
        let mut w = MarkupWriter::new(4);
        w.apply(&Op::OpenEntry {
            indent_levels: 0,
            glyph: "<".into(),
        });
        assert!(w.as_str().contains("<bujo-bullet>&lt;&nbsp;</bujo-bullet>"));
    }

    #[test]
    fn test_line_break() {
        let mut w = MarkupWriter::new(4);
        w.apply(&Op::LineBreak);
        assert_eq!(w.as_str(), "<br />");
    }
}
