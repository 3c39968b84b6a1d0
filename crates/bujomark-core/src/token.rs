//! Input tokens for the bujo block tokenizer.
//!
//! Tokens are produced by the tokenizer in strict left-to-right document
//! order and consumed one at a time by the transcoder. The set of kinds is
//! fixed; the transcoder matches exhaustively over it.

use serde::{Deserialize, Serialize};

use crate::types::Span;

/// One classified unit of bujo block input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// Opening `<bujo ...>` tag, including its trailing line terminator
    BlockOpen,

    /// Closing `</bujo ...>` tag
    BlockClose,

    /// One occurrence of the configured indent-marker literal
    Indent,

    /// A single line terminator inside a block
    LineBreak,

    /// Two consecutive line terminators inside a block
    ParagraphBreak,

    /// Explicit line-break escape: `\\` followed by one whitespace character
    BreakEscape,

    /// A configured bullet marker, carrying its matched text
    Bullet(String),

    /// Literal text not claimed by any other pattern
    Text(String),

    /// Document text outside any bujo block (driver pass-through;
    /// never handed to the transcoder)
    Raw(String),
}

impl Token {
    /// Check if this token can only occur inside a block.
    pub fn is_block_content(&self) -> bool {
        !matches!(self, Token::BlockOpen | Token::Raw(_))
    }

    /// Kind name for logging and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::BlockOpen => "block-open",
            Token::BlockClose => "block-close",
            Token::Indent => "indent",
            Token::LineBreak => "line-break",
            Token::ParagraphBreak => "paragraph-break",
            Token::BreakEscape => "break-escape",
            Token::Bullet(_) => "bullet",
            Token::Text(_) => "text",
            Token::Raw(_) => "raw",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Bullet(m) => write!(f, "bullet({})", m),
            Token::Text(t) => write!(f, "text({} bytes)", t.len()),
            Token::Raw(t) => write!(f, "raw({} bytes)", t.len()),
            other => f.write_str(other.kind()),
        }
    }
}

/// A token together with the source span it was matched from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpannedToken {
    /// The classified token
    pub token: Token,
    /// Where it came from in the input
    pub span: Span,
}

impl SpannedToken {
    /// Create a new spanned token.
    pub fn new(token: Token, span: Span) -> Self {
        Self { token, span }
    }
}
