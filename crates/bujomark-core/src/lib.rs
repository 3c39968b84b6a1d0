//! Bujomark Core
//!
//! This crate provides core types, state, and error definitions
//! for the bujomark bullet-journal transcoder.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Token`] - The fixed set of input token kinds
//! - [`TranscodeState`] - The state value threaded through the transcoder
//! - [`BujomarkError`] - Error types
//! - [`Position`], [`Span`] - Source location types

pub mod error;
pub mod state;
pub mod token;
pub mod types;

pub use error::{BujomarkError, Result};
pub use state::TranscodeState;
pub use token::{SpannedToken, Token};
pub use types::{Position, Span};
