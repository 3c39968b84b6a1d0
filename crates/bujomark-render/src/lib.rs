//! Bujomark Render
//!
//! The transcoder: a token-driven state machine that turns a bujo block's
//! token stream into nested markup for HTML rendering.
//!
//! # Overview
//!
//! - [`handler::step`] - the pure step function over (state, token)
//! - [`MarkupWriter`] - the append-only markup emitter
//! - [`Transcoder`] - drives the step function over a token stream,
//!   collecting markup and paragraph-boundary signals
//!
//! One transcoder instance serves one block (or one document scan); the
//! bullet table and render options are immutable and shareable across
//! instances.
//!
//! # Example
//!
//! ```
//! use bujomark_config::{BulletTable, RenderConfig};
//! use bujomark_core::Token;
//! use bujomark_render::Transcoder;
//!
//! let table = BulletTable::parse("* •");
//! let mut transcoder = Transcoder::new(table, RenderConfig::default());
//!
//! for token in [
//!     Token::BlockOpen,
//!     Token::Bullet("*".into()),
//!     Token::Text("hello".into()),
//!     Token::LineBreak,
//!     Token::BlockClose,
//! ] {
//!     transcoder.push(&token);
//! }
//!
//! let out = transcoder.finish();
//! assert!(out.markup.starts_with("<bujo>"));
//! assert!(out.markup.contains("hello"));
//! ```

pub mod emit;
pub mod handler;

pub use emit::MarkupWriter;
pub use handler::{Op, Step};

use bujomark_config::{BulletTable, Config, RenderConfig};
use bujomark_core::{Token, TranscodeState};

/// Finished output of one transcoding run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcoded {
    /// The emitted markup buffer
    pub markup: String,
    /// Byte offsets into `markup` where paragraph-boundary signals were
    /// raised. Each paragraph break raises two, at the same offset; the
    /// host splits its block structure there.
    pub boundaries: Vec<usize>,
}

/// Token-driven transcoder for one bujo block.
///
/// State is scoped to the instance; feed every token of a block in
/// document order, then call [`finish`](Transcoder::finish). Tokens after
/// a block-close keep being processed (a document scan may contain several
/// blocks), each block starting from a fresh entry state.
#[derive(Debug, Clone)]
pub struct Transcoder {
    table: BulletTable,
    options: RenderConfig,
    state: TranscodeState,
    writer: MarkupWriter,
    boundaries: Vec<usize>,
}

impl Transcoder {
    /// Create a transcoder over a bullet table and render options.
    pub fn new(table: BulletTable, options: RenderConfig) -> Self {
        Self {
            table,
            options,
            state: TranscodeState::new(),
            writer: MarkupWriter::new(options.indent_units),
            boundaries: Vec::new(),
        }
    }

    /// Create a transcoder from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.bullet_table(), config.render)
    }

    /// The current machine state.
    pub fn state(&self) -> TranscodeState {
        self.state
    }

    /// Markup emitted so far.
    pub fn markup(&self) -> &str {
        self.writer.as_str()
    }

    /// Feed one token.
    ///
    /// Returns the number of paragraph-boundary signals this token raised.
    pub fn push(&mut self, token: &Token) -> usize {
        let step = handler::step(self.state, token, &self.table, &self.options);
        self.state = step.state;
        for op in &step.ops {
            self.writer.apply(op);
        }
        for _ in 0..step.boundary_signals {
            self.boundaries.push(self.writer.len());
        }
        step.boundary_signals
    }

    /// Finish, yielding the markup and boundary offsets.
    pub fn finish(self) -> Transcoded {
        Transcoded {
            markup: self.writer.into_string(),
            boundaries: self.boundaries,
        }
    }

    /// One-shot convenience: transcode a full token stream.
    pub fn transcode<'a, I>(table: BulletTable, options: RenderConfig, tokens: I) -> Transcoded
    where
        I: IntoIterator<Item = &'a Token>,
    {
        let mut transcoder = Self::new(table, options);
        for token in tokens {
            transcoder.push(token);
        }
        transcoder.finish()
    }
}
