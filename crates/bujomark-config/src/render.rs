//! Render options.
//!
//! This module contains the `RenderConfig` struct which holds the
//! knobs affecting emitted markup.

use serde::{Deserialize, Serialize};

/// Render options.
///
/// Controls how indentation and paragraph breaks are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RenderConfig {
    /// Non-breaking spaces emitted per indent level.
    /// Default: 4
    #[serde(default = "default_indent_units")]
    pub indent_units: usize,

    /// Forward paragraph-break tokens to the host as paragraph boundaries.
    /// When disabled they degrade to plain line breaks.
    /// Default: true
    #[serde(default = "default_true")]
    pub forward_paragraphs: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_units: 4,
            forward_paragraphs: true,
        }
    }
}

impl RenderConfig {
    /// Merge another RenderConfig into this one.
    ///
    /// TOML does not distinguish "not set" from "set to default", so all
    /// values are copied from `other`; an override file should contain
    /// only the values the user wants to change.
    pub fn merge(&mut self, other: &RenderConfig) {
        self.indent_units = other.indent_units;
        self.forward_paragraphs = other.forward_paragraphs;
    }
}

fn default_indent_units() -> usize {
    4
}

fn default_true() -> bool {
    true
}
