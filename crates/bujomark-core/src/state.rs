//! Transcoder state for bujo block processing.
//!
//! The [`TranscodeState`] value is threaded explicitly through the token
//! step function (returned and passed back in) rather than living as
//! ambient mutable fields, so the state machine can be tested in isolation
//! and instantiated per block.

use serde::{Deserialize, Serialize};

/// State carried across tokens within one bujo block.
///
/// Invariants:
/// - `pending_indent` is nonzero only between indent tokens and the next
///   bullet token; it is reset to zero exactly when consumed into an
///   indent span.
/// - `entry_open` is true iff an entry/text span has been emitted without
///   a matching close. It is set only by a bullet token and cleared only
///   by a line break, a paragraph break, or block close.
///
/// # Example
///
/// ```
/// use bujomark_core::TranscodeState;
///
/// let state = TranscodeState::new();
/// assert!(!state.entry_open);
/// assert_eq!(state.pending_indent, 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscodeState {
    /// Whether an entry/text span is currently open and unterminated
    pub entry_open: bool,
    /// Count of indent markers seen since the last entry opened or closed
    pub pending_indent: usize,
}

impl TranscodeState {
    /// Create the initial state for a fresh block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more indent marker ahead of the next bullet.
    ///
    /// # Example
    ///
    /// ```
    /// use bujomark_core::TranscodeState;
    ///
    /// let state = TranscodeState::new().deepen().deepen();
    /// assert_eq!(state.pending_indent, 2);
    /// ```
    pub fn deepen(mut self) -> Self {
        self.pending_indent += 1;
        self
    }

    /// Consume the accumulated indent and open an entry.
    ///
    /// Returns the indent level to render together with the new state.
    ///
    /// # Example
    ///
    /// ```
    /// use bujomark_core::TranscodeState;
    ///
    /// let state = TranscodeState::new().deepen().deepen();
    /// let (levels, state) = state.open_entry();
    /// assert_eq!(levels, 2);
    /// assert!(state.entry_open);
    /// assert_eq!(state.pending_indent, 0);
    /// ```
    pub fn open_entry(mut self) -> (usize, Self) {
        let levels = self.pending_indent;
        self.pending_indent = 0;
        self.entry_open = true;
        (levels, self)
    }

    /// Close the open entry, if any.
    pub fn close_entry(mut self) -> Self {
        self.entry_open = false;
        self
    }
}
