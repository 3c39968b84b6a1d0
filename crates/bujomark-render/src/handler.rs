//! The token step function.
//!
//! This is the state machine at the heart of the transcoder: a pure
//! function of (state, token) returning the new state, the output
//! operations to emit, and any paragraph-boundary signals for the host.
//! Keeping it free of ambient mutation makes every transition testable
//! in isolation.

use bujomark_config::{BulletTable, RenderConfig};
use bujomark_core::{Token, TranscodeState};

/// One output instruction for the emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// `<bujo>` container start
    ContainerOpen,
    /// `</bujo>` container end
    ContainerClose,
    /// Entry start: indent span (if any), bullet span, text span open
    OpenEntry {
        /// Accumulated indent levels consumed by this entry
        indent_levels: usize,
        /// Display glyph for the bullet span
        glyph: String,
    },
    /// Close the open text and entry spans
    CloseEntry,
    /// Visual line break
    LineBreak,
    /// Literal text, escaped by the emitter
    Text(String),
}

/// Result of stepping the machine over one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// State to feed back into the next step
    pub state: TranscodeState,
    /// Output operations, in emission order
    pub ops: Vec<Op>,
    /// Paragraph-boundary signals raised for the host pipeline
    pub boundary_signals: usize,
}

impl Step {
    fn new(state: TranscodeState) -> Self {
        Self {
            state,
            ops: Vec::new(),
            boundary_signals: 0,
        }
    }
}

/// Step the state machine over one token.
///
/// Paragraph breaks raise two boundary signals apiece so the host's block
/// structure performs a genuine paragraph split instead of swallowing the
/// blank line; they produce no inline output of their own (unless
/// forwarding is disabled, in which case they degrade to a line break).
pub fn step(
    state: TranscodeState,
    token: &Token,
    table: &BulletTable,
    options: &RenderConfig,
) -> Step {
    let mut step = Step::new(state);
    match token {
        Token::BlockOpen => {
            step.ops.push(Op::ContainerOpen);
        }
        Token::BlockClose => {
            // A dangling entry is closed before the container ends.
            if state.entry_open {
                step.ops.push(Op::CloseEntry);
                step.ops.push(Op::LineBreak);
                step.state = state.close_entry();
            }
            step.ops.push(Op::ContainerClose);
        }
        Token::Indent => {
            // Deferred until the next bullet consumes it.
            step.state = state.deepen();
        }
        Token::LineBreak => {
            if state.entry_open {
                step.ops.push(Op::CloseEntry);
                step.ops.push(Op::LineBreak);
                step.state = state.close_entry();
            }
            // A bare newline outside an entry is insignificant.
        }
        Token::ParagraphBreak => {
            if state.entry_open {
                step.ops.push(Op::CloseEntry);
                step.ops.push(Op::LineBreak);
                step.state = state.close_entry();
            }
            if options.forward_paragraphs {
                step.boundary_signals = 2;
            } else {
                step.ops.push(Op::LineBreak);
            }
        }
        Token::BreakEscape => {
            // Visual break only; the entry stays open.
            step.ops.push(Op::LineBreak);
        }
        Token::Bullet(marker) => {
            let (indent_levels, state) = state.open_entry();
            step.state = state;
            step.ops.push(Op::OpenEntry {
                indent_levels,
                glyph: table.glyph_for(marker).to_string(),
            });
        }
        Token::Text(text) => {
            step.ops.push(Op::Text(text.clone()));
        }
        Token::Raw(text) => {
            // Driver-level pass-through; the transcoder should never see one.
            debug_assert!(false, "raw token fed to the transcoder");
            step.ops.push(Op::Text(text.clone()));
        }
    }
    step
}
