//! Bullet-table parsing and lookup.
//!
//! The bullet table maps short marker strings (`*`, `x`, `>`) to display
//! glyphs. It is parsed once from a plain-text configuration block and is
//! immutable afterwards, so it can be shared read-only across any number
//! of transcoder instances.

use serde::{Deserialize, Serialize};

/// Mapping from bullet markers to display glyphs.
///
/// Insertion order is preserved; a marker configured twice keeps the later
/// glyph. An empty glyph means "render the marker literally".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletTable {
    entries: Vec<(String, String)>,
}

impl BulletTable {
    /// Parse a bullet table from its text-block form.
    ///
    /// One entry per non-blank trimmed line, split on the first run of
    /// whitespace into marker and glyph. A line holding only a marker maps
    /// to an empty glyph. Blank lines are skipped silently; there is no
    /// error path.
    ///
    /// # Example
    ///
    /// ```
    /// use bujomark_config::BulletTable;
    ///
    /// let table = BulletTable::parse("* •\nx ✘\n-\n");
    /// assert_eq!(table.glyph_for("*"), "•");
    /// assert_eq!(table.glyph_for("-"), "-");
    /// ```
    pub fn parse(text: &str) -> Self {
        let mut entries: Vec<(String, String)> = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (marker, glyph) = match line.split_once(|c: char| c.is_whitespace()) {
                Some((marker, rest)) => (marker, rest.trim_start()),
                None => (line, ""),
            };
            if let Some(entry) = entries.iter_mut().find(|(m, _)| m == marker) {
                entry.1 = glyph.to_string();
            } else {
                entries.push((marker.to_string(), glyph.to_string()));
            }
        }
        Self { entries }
    }

    /// Look up the display glyph for a marker.
    ///
    /// Falls back to the marker itself when the marker is unknown or its
    /// configured glyph is empty. Unknown markers are not an error.
    pub fn glyph_for<'a>(&'a self, marker: &'a str) -> &'a str {
        match self.entries.iter().find(|(m, _)| m == marker) {
            Some((_, glyph)) if !glyph.is_empty() => glyph,
            _ => marker,
        }
    }

    /// Check whether a marker is configured.
    pub fn contains(&self, marker: &str) -> bool {
        self.entries.iter().any(|(m, _)| m == marker)
    }

    /// Markers in tokenizer registration order: longest first so that
    /// overlapping markers resolve to the longest match, ties keeping
    /// configuration order.
    pub fn markers_longest_first(&self) -> Vec<&str> {
        let mut markers: Vec<&str> = self.entries.iter().map(|(m, _)| m.as_str()).collect();
        markers.sort_by_key(|m| std::cmp::Reverse(m.len()));
        markers
    }

    /// Number of configured markers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no markers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let table = BulletTable::parse("* •\nx ✘\n> ›\n");
        assert_eq!(table.len(), 3);
        assert_eq!(table.glyph_for("*"), "•");
        assert_eq!(table.glyph_for("x"), "✘");
        assert_eq!(table.glyph_for(">"), "›");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let table = BulletTable::parse("\n* •\n\n   \nx ✘\n\n");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_marker_only_line_renders_literally() {
        let table = BulletTable::parse("-\n");
        assert!(table.contains("-"));
        assert_eq!(table.glyph_for("-"), "-");
    }

    #[test]
    fn test_glyph_keeps_inner_whitespace_split() {
        // Only the first whitespace run separates marker from glyph
        let table = BulletTable::parse("todo \t (to do)\n");
        assert_eq!(table.glyph_for("todo"), "(to do)");
    }

    #[test]
    fn test_unknown_marker_falls_back() {
        let table = BulletTable::parse("* •\n");
        assert!(!table.contains("-"));
        assert_eq!(table.glyph_for("-"), "-");
    }

    #[test]
    fn test_duplicate_marker_keeps_last() {
        let table = BulletTable::parse("* •\n* ◦\n");
        assert_eq!(table.len(), 1);
        assert_eq!(table.glyph_for("*"), "◦");
    }

    #[test]
    fn test_lookup_idempotent() {
        let table = BulletTable::parse("* •\nx\n");
        for marker in ["*", "x", "?"] {
            let first = table.glyph_for(marker).to_string();
            assert_eq!(table.glyph_for(marker), first);
        }
    }

    #[test]
    fn test_markers_longest_first() {
        let table = BulletTable::parse(">> »\n* •\n>>> ⋙\n> ›\n");
        assert_eq!(table.markers_longest_first(), vec![">>>", ">>", "*", ">"]);
    }
}
