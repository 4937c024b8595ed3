use lazy_static::lazy_static;
use serde::Serialize;
use std::{collections::HashMap, fmt::Display};

use crate::Location;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map.insert("for", TokenKind::For);
        map.insert("while", TokenKind::While);
        // `do` shares the `while` kind
        map.insert("do", TokenKind::While);
        map
    };

    /// Fixed-text tokens in the order they are attempted. Two-character
    /// operators come before their one-character prefixes.
    pub static ref LITERAL_PATTERNS: Vec<LiteralPattern> = vec![
        LiteralPattern { literal: "==", kind: TokenKind::Eq },
        LiteralPattern { literal: "!=", kind: TokenKind::NotEq },
        LiteralPattern { literal: ">=", kind: TokenKind::Gte },
        LiteralPattern { literal: "<=", kind: TokenKind::Lte },
        LiteralPattern { literal: "<", kind: TokenKind::Lt },
        LiteralPattern { literal: ">", kind: TokenKind::Gt },
        LiteralPattern { literal: "=", kind: TokenKind::Assign },
        LiteralPattern { literal: ";", kind: TokenKind::Semicolon },
        LiteralPattern { literal: ".", kind: TokenKind::Period },
        LiteralPattern { literal: ",", kind: TokenKind::Comma },
        LiteralPattern { literal: "{", kind: TokenKind::LeftBrace },
        LiteralPattern { literal: "}", kind: TokenKind::RightBrace },
        LiteralPattern { literal: "(", kind: TokenKind::LeftParen },
        LiteralPattern { literal: ")", kind: TokenKind::RightParen },
        LiteralPattern { literal: "[", kind: TokenKind::LeftBracket },
        LiteralPattern { literal: "]", kind: TokenKind::RightBracket },
    ];
}

#[derive(Debug, Clone, Copy)]
pub struct LiteralPattern {
    pub literal: &'static str,
    pub kind: TokenKind,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum TokenKind {
    EndOfFile,
    Identifier,
    Number,

    // Reserved
    If,
    Else,
    Return,
    For,
    While,

    Assign, // =
    Eq,     // ==
    NotEq,  // !=
    Gt,
    Lt,
    Gte,
    Lte,

    Semicolon,
    Period,
    Comma,

    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::If | TokenKind::Else | TokenKind::Return | TokenKind::For | TokenKind::While
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub location: Location,
}

/// The full, ordered output of one scan. Always ends with a single
/// `EndOfFile` token.
pub type TokenStream = Vec<Token>;

impl Token {
    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// One-line listing of the token, showing the lexeme only where it
    /// carries information beyond the kind.
    pub fn describe(&self) -> String {
        if self.is_one_of_many(&[TokenKind::Identifier, TokenKind::Number]) {
            format!("{} ({}) @ {}", self.kind, self.value, self.location)
        } else {
            format!("{} @ {}", self.kind, self.location)
        }
    }
}
