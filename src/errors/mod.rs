//! Error types for the lexer.
//!
//! A scan either produces a complete token stream or stops at the first
//! problem. This module defines:
//!
//! - The error structure with its source location
//! - The error variants (unexpected character, malformed number, internal end-of-input)
//! - Diagnostic formatting and suggestions

pub mod errors;
