//! Bujomark Parser
//!
//! The block tokenizer for bujo markup. It scans a document for
//! `<bujo ...>` blocks and classifies their contents into the fixed token
//! set consumed by the transcoder, in strict left-to-right order.
//!
//! # Overview
//!
//! The tokenizer is built around an ordered pattern list compiled into a
//! single regex alternation. Order is match priority: the paragraph-break
//! pattern is tried before the single line terminator (the two share a
//! prefix), and longer bullet markers are registered before shorter
//! overlapping ones.
//!
//! # Example
//!
//! ```
//! use bujomark_config::BulletTable;
//! use bujomark_core::Token;
//! use bujomark_parser::Tokenizer;
//!
//! let table = BulletTable::parse("* •");
//! let tokenizer = Tokenizer::new(&table, "\t");
//!
//! let tokens = tokenizer.tokenize("<bujo>\n* hello\n</bujo>");
//! assert_eq!(tokens[0].token, Token::BlockOpen);
//! assert_eq!(tokens[1].token, Token::Bullet("*".into()));
//! ```

pub mod tokenizer;

pub use tokenizer::Tokenizer;
