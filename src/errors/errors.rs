use std::fmt::Display;

use thiserror::Error;

use crate::Location;

/// A failed scan. Carries the kind of failure and the lexer position at
/// the moment it was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("ERROR: {location}: {internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    location: Location,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, location: Location) -> Self {
        Error {
            internal_error: error_impl,
            location,
        }
    }

    pub fn get_location(&self) -> &Location {
        &self.location
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::MalformedNumberLiteral { .. } => "MalformedNumberLiteral",
        }
    }

    /// Whether the error comes from a broken lexer invariant rather than
    /// from the input.
    pub fn is_internal(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::UnexpectedEndOfInput)
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::Suggestion(String::from(
                "The lexer read past the end of its input, this is a bug in the lexer",
            )),
            ErrorImpl::UnexpectedCharacter { character: '!' } => {
                ErrorTip::Suggestion(String::from("`!` is only valid as part of `!=`"))
            }
            ErrorImpl::UnexpectedCharacter { .. } => ErrorTip::None,
            ErrorImpl::MalformedNumberLiteral { literal } => ErrorTip::Suggestion(format!(
                "Number `{}` already has a decimal point",
                literal
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("unexpected character: {character}")]
    UnexpectedCharacter { character: char },
    #[error("malformed number literal: second '.' after {literal:?}")]
    MalformedNumberLiteral { literal: String },
}
