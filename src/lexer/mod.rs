//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for a parser. It handles:
//!
//! - Keywords and identifiers
//! - Decimal number literals with `_` digit separators
//! - Operators and punctuation, longest match first
//! - Line and column tracking for every token

pub mod lexer;
pub mod tokens;
