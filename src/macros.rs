//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_ERROR!` - Creates an Error at a location

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's lexeme
/// * `$location` - Where the token was captured
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), lexer.location());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $location:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            location: $location,
        }
    };
}

/// Creates an Error from an `ErrorImpl` variant and a location.
///
/// ```ignore
/// return Err(MK_ERROR!(ErrorImpl::UnexpectedEndOfInput, self.location()));
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($error_impl:expr, $location:expr) => {
        $crate::errors::errors::Error::new($error_impl, $location)
    };
}
