//! Integration tests for the public lexing API.
//!
//! These run whole programs through `lex` and check the properties a
//! parser relies on: a single trailing end-of-file token, longest-match
//! operators, keyword handling, locations and all-or-nothing failure.

use generic_lexer::{
    errors::errors::ErrorImpl, lex, lexer::lexer::Lexer, Token, TokenKind,
};

const PROGRAM: &str = "int main(void) { bool success = true; if (success) return 0;\nelse return 1; }";

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

#[test]
fn test_lex_if_else_statement() {
    let tokens = lex("main.c", "if (x) return 1; else return 0;").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::If,
            TokenKind::LeftParen,
            TokenKind::Identifier,
            TokenKind::RightParen,
            TokenKind::Return,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Else,
            TokenKind::Return,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::EndOfFile,
        ]
    );
}

#[test]
fn test_lex_program() {
    let tokens = lex("main.c", PROGRAM).unwrap();
    let values: Vec<&str> = tokens.iter().map(|token| token.value.as_str()).collect();

    assert_eq!(
        values,
        vec![
            "int", "main", "(", "void", ")", "{", "bool", "success", "=", "true", ";", "if", "(",
            "success", ")", "return", "0", ";", "else", "return", "1", ";", "}", "",
        ]
    );

    let else_token = &tokens[18];
    assert_eq!(else_token.kind, TokenKind::Else);
    assert_eq!(else_token.location.line, 2);
    assert_eq!(else_token.location.column, 6);
}

#[test]
fn test_lex_single_end_of_file() {
    for source in ["", "x", "a = b;", PROGRAM, "\n\n", "while (i <= 10) { i = i. 1; }"] {
        let tokens = lex("main.c", source).unwrap();
        let last = tokens.last().unwrap();

        assert_eq!(last.kind, TokenKind::EndOfFile);
        assert_eq!(last.value, "");
        assert_eq!(
            tokens
                .iter()
                .filter(|token| token.kind == TokenKind::EndOfFile)
                .count(),
            1
        );
    }
}

#[test]
fn test_lex_maximal_munch() {
    let tokens = lex("main.c", "==").unwrap();
    assert_eq!(kinds(&tokens), vec![TokenKind::Eq, TokenKind::EndOfFile]);

    let tokens = lex("main.c", "=").unwrap();
    assert_eq!(kinds(&tokens), vec![TokenKind::Assign, TokenKind::EndOfFile]);
}

#[test]
fn test_lex_do_is_while() {
    let do_tokens = lex("main.c", "do").unwrap();
    let while_tokens = lex("main.c", "while").unwrap();

    assert_eq!(do_tokens[0].kind, TokenKind::While);
    assert_eq!(do_tokens[0].kind, while_tokens[0].kind);
}

#[test]
fn test_lex_underscore_stripping() {
    let tokens = lex("main.c", "1_000_000").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "1000000");
}

#[test]
fn test_lex_malformed_number() {
    let error = lex("main.c", "x = 1.2.3;").unwrap_err();

    assert!(matches!(
        error.get_kind(),
        ErrorImpl::MalformedNumberLiteral { .. }
    ));
    assert_eq!(error.get_error_name(), "MalformedNumberLiteral");
}

#[test]
fn test_lex_invalid_character() {
    let error = lex("main.c", "@").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedCharacter { character: '@' }
    );
    assert_eq!(error.get_location().line, 1);
    assert_eq!(error.get_location().column, 1);
    assert_eq!(error.to_string(), "ERROR: main.c:1:1: unexpected character: @");
}

#[test]
fn test_lex_line_tracking() {
    let tokens = lex("main.c", "a\nb").unwrap();

    assert_eq!(tokens[0].location.line, 1);
    assert_eq!(tokens[1].value, "b");
    assert_eq!(tokens[1].location.line, 2);
    assert_eq!(tokens[1].location.column, 3);
}

#[test]
fn test_lex_columns_increase_within_a_line() {
    let source = "foo = bar;\nif (a == b) { c = 10_0; }\n\nreturn [x, y.z];";
    let tokens = lex("main.c", source).unwrap();

    for pair in tokens.windows(2) {
        let (previous, next) = (&pair[0], &pair[1]);
        if previous.location.line != next.location.line {
            continue;
        }
        // EOF shares the column of a token that ends the input
        assert!(
            next.location.column > previous.location.column
                || (next.kind == TokenKind::EndOfFile
                    && next.location.column == previous.location.column),
            "{} then {}",
            previous.location,
            next.location
        );
    }

    let first_on_line_two = tokens.iter().find(|token| token.location.line == 2).unwrap();
    assert_eq!(first_on_line_two.value, "if");
    assert_eq!(first_on_line_two.location.column, 4);
}

#[test]
fn test_lex_is_deterministic() {
    let first = lex("main.c", PROGRAM).unwrap();
    let second = Lexer::new("main.c", PROGRAM).lex().unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_lex_file_name_is_shared() {
    let tokens = lex("src/lib.c", "a b").unwrap();

    assert!(tokens
        .iter()
        .all(|token| token.location.file.as_str() == "src/lib.c"));
    assert!(std::rc::Rc::ptr_eq(
        &tokens[0].location.file,
        &tokens[1].location.file
    ));
}
