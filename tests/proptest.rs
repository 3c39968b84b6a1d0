//! Property-based tests for bujomark.
//!
//! These tests use proptest to generate random inputs and verify that the
//! tokenizer and transcoder hold the transcoder's structural invariants.

use proptest::prelude::*;

use bujomark_config::{BulletTable, RenderConfig};
use bujomark_core::Token;
use bujomark_parser::Tokenizer;
use bujomark_render::Transcoder;

/// Generate a random bullet-table text block.
fn bullet_table_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::string::string_regex(r"[!-~]{1,4}([ \t]+[!-~]{0,6})?").unwrap(),
        0..8,
    )
    .prop_map(|lines| lines.join("\n"))
}

/// Generate a random document-like string, with enough tag fragments mixed
/// in to exercise block scanning.
fn document_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"([\x20-\x7E\n\t]|<bujo>\n|</bujo>|\\\\ ){0,60}").unwrap()
}

/// Generate one token the transcoder may legally receive.
fn token() -> impl Strategy<Value = Token> {
    prop_oneof![
        1 => Just(Token::BlockOpen),
        1 => Just(Token::BlockClose),
        3 => Just(Token::Indent),
        3 => Just(Token::LineBreak),
        1 => Just(Token::ParagraphBreak),
        1 => Just(Token::BreakEscape),
        3 => prop::string::string_regex(r"[\*x>o-]").unwrap().prop_map(Token::Bullet),
        3 => prop::string::string_regex(r"[ -~]{0,16}").unwrap().prop_map(Token::Text),
    ]
}

/// Tokens that can never open an entry.
fn bulletless_token() -> impl Strategy<Value = Token> {
    prop_oneof![
        Just(Token::BlockOpen),
        Just(Token::BlockClose),
        Just(Token::Indent),
        Just(Token::LineBreak),
        Just(Token::ParagraphBreak),
        Just(Token::BreakEscape),
        prop::string::string_regex(r"[ -~]{0,16}").unwrap().prop_map(Token::Text),
    ]
}

fn table() -> BulletTable {
    BulletTable::parse("* •\nx ✘\n> ›\n")
}

proptest! {
    /// Every configured marker maps to exactly one glyph; lookups are
    /// idempotent and never empty.
    #[test]
    fn bullet_lookups_are_idempotent(text in bullet_table_text()) {
        let parsed = BulletTable::parse(&text);
        for marker in parsed.markers_longest_first() {
            let glyph = parsed.glyph_for(marker).to_string();
            prop_assert!(!glyph.is_empty());
            prop_assert_eq!(parsed.glyph_for(marker), &glyph);
        }
    }

    /// Duplicate markers collapse to a single entry.
    #[test]
    fn bullet_markers_are_unique(text in bullet_table_text()) {
        let parsed = BulletTable::parse(&text);
        let mut markers = parsed.markers_longest_first();
        let before = markers.len();
        markers.sort_unstable();
        markers.dedup();
        prop_assert_eq!(markers.len(), before);
    }

    /// The tokenizer never panics on arbitrary documents, and in-block
    /// text tokens never contain a line terminator (the line-break pattern
    /// claims them all).
    #[test]
    fn tokenizer_never_panics(input in document_string()) {
        let tokenizer = Tokenizer::new(&table(), "\t");
        for spanned in tokenizer.tokenize(&input) {
            if let Token::Text(text) = &spanned.token {
                prop_assert!(!text.contains('\n'));
            }
        }
    }

    /// Tokenize-then-transcode runs cleanly over arbitrary documents and
    /// keeps entry tags balanced whenever every block is closed.
    #[test]
    fn pipeline_never_panics(input in document_string()) {
        let tokenizer = Tokenizer::new(&table(), "\t");
        let mut transcoder = Transcoder::new(table(), RenderConfig::default());
        for spanned in tokenizer.tokenize(&input) {
            if !matches!(spanned.token, Token::Raw(_)) {
                transcoder.push(&spanned.token);
            }
        }
        let open = transcoder.state().entry_open;
        let out = transcoder.finish();
        if !open {
            prop_assert_eq!(
                out.markup.matches("<bujo-entry>").count(),
                out.markup.matches("</bujo-entry>").count()
            );
        }
    }

    /// Without bullet tokens no entry element is ever emitted.
    #[test]
    fn no_entry_without_bullet(tokens in prop::collection::vec(bulletless_token(), 0..40)) {
        let out = Transcoder::transcode(table(), RenderConfig::default(), tokens.iter());
        prop_assert!(!out.markup.contains("<bujo-entry>"));
    }

    /// N indent tokens followed by one bullet yield an indent span of
    /// exactly N levels, and the pending count resets afterwards.
    #[test]
    fn indent_consumed_exactly(n in 0usize..10) {
        let mut transcoder = Transcoder::new(table(), RenderConfig::default());
        for _ in 0..n {
            transcoder.push(&Token::Indent);
        }
        transcoder.push(&Token::Bullet("*".into()));
        prop_assert_eq!(transcoder.state().pending_indent, 0);

        let out = transcoder.finish();
        if n == 0 {
            prop_assert!(!out.markup.contains("<bujo-indent>"));
        } else {
            let span = format!("<bujo-indent>{}</bujo-indent>", "&nbsp;".repeat(n * 4));
            prop_assert!(out.markup.contains(&span));
        }
    }

    /// A token stream ending in block-close never leaves an entry or text
    /// element open past block end.
    #[test]
    fn block_close_seals_entries(tokens in prop::collection::vec(token(), 0..40)) {
        let mut transcoder = Transcoder::new(table(), RenderConfig::default());
        for token in &tokens {
            transcoder.push(token);
        }
        transcoder.push(&Token::BlockClose);
        prop_assert!(!transcoder.state().entry_open);

        let out = transcoder.finish();
        prop_assert_eq!(
            out.markup.matches("<bujo-entry>").count(),
            out.markup.matches("</bujo-entry>").count()
        );
        prop_assert_eq!(
            out.markup.matches("<bujo-text>").count(),
            out.markup.matches("</bujo-text>").count()
        );
    }

    /// Paragraph breaks route to the boundary signal channel, never to the
    /// markup buffer: each one raises exactly two signals.
    #[test]
    fn paragraph_breaks_only_signal(tokens in prop::collection::vec(token(), 0..40)) {
        let paragraphs = tokens
            .iter()
            .filter(|t| matches!(t, Token::ParagraphBreak))
            .count();
        let out = Transcoder::transcode(table(), RenderConfig::default(), tokens.iter());
        prop_assert_eq!(out.boundaries.len(), paragraphs * 2);
    }
}
