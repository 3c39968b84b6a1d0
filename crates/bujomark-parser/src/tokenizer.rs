//! Tokenizer for bujo block markup.
//!
//! This module compiles the ordered pattern set into regexes and walks a
//! document in two modes: outside a block only the block-open tag is live,
//! inside a block the full pattern set applies until the closing tag.

use regex::Regex;
use std::sync::LazyLock;

use bujomark_config::{BulletTable, Config};
use bujomark_core::{Span, SpannedToken, Token};

/// Regex for the opening tag: `<bujo`, optional attributes, `>`, then the
/// trailing whitespace run and line terminator (consumed so the block body
/// never starts with a spurious line-break token).
static BLOCK_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<bujo\b[^>\r\n]*>[ \t]*(?:\r?\n|$)").unwrap());

/// Pattern source for the closing tag.
const BLOCK_CLOSE: &str = r"</bujo\b[^>\r\n]*>";

/// Pattern source for the explicit line-break escape: two backslashes
/// followed by one whitespace character.
const BREAK_ESCAPE: &str = r"\\\\\s";

/// Pattern source for a paragraph break. Must be tried before the single
/// line terminator; the two share a prefix.
const PARAGRAPH_BREAK: &str = r"\r?\n\r?\n";

/// Pattern source for a single line terminator.
const LINE_BREAK: &str = r"\r?\n";

/// Tokenizer for bujo blocks.
///
/// Built once from a bullet table and the indent-marker literal; immutable
/// and shareable afterwards. Text not claimed by any pattern inside a block
/// becomes [`Token::Text`]; document text outside any block becomes
/// [`Token::Raw`].
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Alternation over the in-block patterns, in priority order
    block_pattern: Regex,
    /// Pattern sources in priority order, for diagnostics and tests
    sources: Vec<String>,
}

impl Tokenizer {
    /// Create a tokenizer for the given bullet table and indent marker.
    ///
    /// The indent marker is matched verbatim, including when it is
    /// whitespace. An empty indent marker or an empty table simply leaves
    /// the corresponding pattern unregistered.
    pub fn new(table: &BulletTable, indent: &str) -> Self {
        let mut sources = vec![
            format!("(?P<close>{})", BLOCK_CLOSE),
        ];
        if !indent.is_empty() {
            sources.push(format!("(?P<indent>{})", regex::escape(indent)));
        }
        sources.push(format!("(?P<esc>{})", BREAK_ESCAPE));
        sources.push(format!("(?P<para>{})", PARAGRAPH_BREAK));
        sources.push(format!("(?P<line>{})", LINE_BREAK));

        let markers = table.markers_longest_first();
        if !markers.is_empty() {
            let joined = markers
                .iter()
                .map(|m| regex::escape(m))
                .collect::<Vec<_>>()
                .join("|");
            sources.push(format!("(?P<bullet>{})", joined));
        }

        let block_pattern = Regex::new(&sources.join("|"))
            .expect("in-block pattern is built from escaped literals");

        Self {
            block_pattern,
            sources,
        }
    }

    /// Create a tokenizer from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.bullet_table(), &config.bujo.indent)
    }

    /// The in-block pattern sources, in priority order.
    pub fn pattern_sources(&self) -> &[String] {
        &self.sources
    }

    /// Tokenize a whole document.
    ///
    /// Emits [`Token::Raw`] for stretches outside any block, then the full
    /// in-block token stream for each `<bujo>` block found, in document
    /// order. A block whose closing tag never appears runs to end of input
    /// without a [`Token::BlockClose`]; that is not an error.
    pub fn tokenize(&self, input: &str) -> Vec<SpannedToken> {
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < input.len() {
            // Outside a block: only the opening tag is live.
            let Some(open) = BLOCK_OPEN_RE.find_at(input, pos) else {
                tokens.push(self.spanned(input, pos, input.len(), Token::Raw));
                break;
            };
            if open.start() > pos {
                tokens.push(self.spanned(input, pos, open.start(), Token::Raw));
            }
            tokens.push(SpannedToken::new(
                Token::BlockOpen,
                Span::of(input, open.start(), open.end()),
            ));
            pos = open.end();

            // Inside the block: full pattern set until the closing tag.
            pos = self.tokenize_block(input, pos, &mut tokens);
        }

        tokens
    }

    /// Tokenize block content starting at `pos`.
    ///
    /// Returns the offset just past the closing tag, or the end of input
    /// if the block is unterminated.
    fn tokenize_block(&self, input: &str, mut pos: usize, tokens: &mut Vec<SpannedToken>) -> usize {
        while pos < input.len() {
            let Some(caps) = self.block_pattern.captures_at(input, pos) else {
                // Unterminated block: the rest is literal text.
                tokens.push(self.spanned(input, pos, input.len(), Token::Text));
                return input.len();
            };
            let m = caps.get(0).expect("match has a whole-match group");

            // The gap up to the match is unmatched literal text.
            if m.start() > pos {
                tokens.push(self.spanned(input, pos, m.start(), Token::Text));
            }

            let span = Span::of(input, m.start(), m.end());
            let token = if caps.name("close").is_some() {
                Token::BlockClose
            } else if caps.name("indent").is_some() {
                Token::Indent
            } else if caps.name("esc").is_some() {
                Token::BreakEscape
            } else if caps.name("para").is_some() {
                Token::ParagraphBreak
            } else if caps.name("line").is_some() {
                Token::LineBreak
            } else {
                Token::Bullet(m.as_str().to_string())
            };

            let done = token == Token::BlockClose;
            tokens.push(SpannedToken::new(token, span));
            pos = m.end();
            if done {
                return pos;
            }
        }
        pos
    }

    fn spanned(
        &self,
        input: &str,
        start: usize,
        end: usize,
        make: impl FnOnce(String) -> Token,
    ) -> SpannedToken {
        SpannedToken::new(make(input[start..end].to_string()), Span::of(input, start, end))
    }
}
