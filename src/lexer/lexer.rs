use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Location, MK_ERROR, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, TokenStream, LITERAL_PATTERNS, RESERVED_LOOKUP};

/// The immutable text being scanned, tagged with the file name used in
/// diagnostics.
#[derive(Debug, Clone)]
pub struct SourceBuffer {
    file: Rc<String>,
    content: Vec<u8>,
}

impl SourceBuffer {
    pub fn new(file: impl Into<String>, content: impl Into<Vec<u8>>) -> SourceBuffer {
        SourceBuffer {
            file: Rc::new(file.into()),
            content: content.into(),
        }
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn byte_at(&self, index: usize) -> Option<u8> {
        self.content.get(index).copied()
    }
}

#[derive(Debug, Clone)]
pub struct Lexer {
    source: SourceBuffer,
    tokens: Vec<Token>,
    cursor: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(file: impl Into<String>, source: impl Into<Vec<u8>>) -> Lexer {
        Lexer {
            source: SourceBuffer::new(file, source),
            tokens: vec![],
            cursor: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Current line and column, stamped with the file name.
    pub fn location(&self) -> Location {
        Location::new(Rc::clone(self.source.file()), self.line, self.column)
    }

    /// Looks `offset` bytes past the cursor without moving it. Returns
    /// `None` at or past the end of the input.
    pub fn peek(&self, offset: usize) -> Option<char> {
        let index = self.cursor.checked_add(offset)?;
        self.source.byte_at(index).map(char::from)
    }

    /// Takes the byte under the cursor. Callers peek first, so running out
    /// of input here means the scanner itself is broken.
    pub fn consume(&mut self) -> Result<char, Error> {
        match self.source.byte_at(self.cursor) {
            Some(byte) => {
                self.cursor += 1;
                self.column += 1;
                Ok(char::from(byte))
            }
            None => Err(MK_ERROR!(ErrorImpl::UnexpectedEndOfInput, self.location())),
        }
    }

    fn push(&mut self, token: Token) {
        trace!(
            kind = %token.kind,
            value = %token.value,
            line = token.location.line,
            column = token.location.column,
            "token"
        );
        self.tokens.push(token);
    }

    /// Scans the whole input. Either every byte becomes part of a token or
    /// whitespace, or the first problem is returned and nothing else.
    pub fn lex(mut self) -> Result<TokenStream, Error> {
        debug!(file = %self.source.file(), bytes = self.source.len(), "lexing source");

        if let Err(error) = self.scan() {
            debug!(%error, "lexing aborted");
            return Err(error);
        }

        let eof = MK_TOKEN!(TokenKind::EndOfFile, String::new(), self.location());
        self.push(eof);

        debug!(tokens = self.tokens.len(), "lexing finished");
        Ok(self.tokens)
    }

    fn scan(&mut self) -> Result<(), Error> {
        while let Some(c) = self.peek(0) {
            // the newline is counted as the first column of the next line
            if c == '\n' {
                self.line += 1;
                self.column = 1;
                self.consume()?;
                continue;
            }

            if is_whitespace(c) {
                self.consume()?;
                continue;
            }

            if c.is_ascii_alphabetic() || c == '_' {
                let token = self.lex_identifier()?;
                self.push(token);
                continue;
            }

            if c.is_ascii_digit() {
                let token = self.lex_number()?;
                self.push(token);
                continue;
            }

            if self.match_literals()? {
                continue;
            }

            return Err(MK_ERROR!(
                ErrorImpl::UnexpectedCharacter { character: c },
                self.location()
            ));
        }

        Ok(())
    }

    fn match_literals(&mut self) -> Result<bool, Error> {
        for pattern in LITERAL_PATTERNS.iter() {
            if self.match_literal(pattern.literal, pattern.kind)? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Emits a `kind` token if the input continues with exactly `literal`.
    /// Nothing is consumed when it doesn't.
    pub fn match_literal(&mut self, literal: &str, kind: TokenKind) -> Result<bool, Error> {
        let matched = !literal.is_empty()
            && literal
                .bytes()
                .enumerate()
                .all(|(offset, byte)| self.peek(offset) == Some(char::from(byte)));

        if !matched {
            return Ok(false);
        }

        for _ in 0..literal.len() {
            self.consume()?;
        }

        let token = MK_TOKEN!(kind, String::from(literal), self.location());
        self.push(token);
        Ok(true)
    }

    fn lex_identifier(&mut self) -> Result<Token, Error> {
        let mut value = String::new();
        value.push(self.consume()?);

        while let Some(c) = self.peek(0) {
            if !(c.is_ascii_alphanumeric() || c == '_') {
                break;
            }
            value.push(self.consume()?);
        }

        let kind = RESERVED_LOOKUP
            .get(value.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);

        Ok(MK_TOKEN!(kind, value, self.location()))
    }

    fn lex_number(&mut self) -> Result<Token, Error> {
        let mut value = String::new();
        value.push(self.consume()?);
        let mut period = false;

        while let Some(c) = self.peek(0) {
            match c {
                // digit separator, dropped from the lexeme
                '_' => {
                    self.consume()?;
                }
                '.' if period => {
                    return Err(MK_ERROR!(
                        ErrorImpl::MalformedNumberLiteral { literal: value },
                        self.location()
                    ));
                }
                '.' => {
                    period = true;
                    value.push(self.consume()?);
                }
                c if c.is_ascii_digit() => value.push(self.consume()?),
                _ => break,
            }
        }

        Ok(MK_TOKEN!(TokenKind::Number, value, self.location()))
    }
}

/// Same set as C's `isspace`.
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

pub fn lex(file: &str, source: &str) -> Result<TokenStream, Error> {
    Lexer::new(file, source).lex()
}
