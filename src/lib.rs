#![allow(clippy::module_inception)]

use std::{
    fmt::{Display, Write},
    rc::Rc,
};

use serde::Serialize;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

pub use lexer::lexer::lex;
pub use lexer::tokens::{Token, TokenKind, TokenStream};

/// Where a token or error sits in its source: file name, 1-based line and
/// 1-based column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub file: Rc<String>,
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(file: Rc<String>, line: usize, column: usize) -> Self {
        Location { file, line, column }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Returns the text of the 1-based `line` without its line terminator.
pub fn get_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

/// Formats an error the way the driver prints it: the `ERROR:` line, an
/// optional tip, then the offending source line with a caret under the
/// reported column.
pub fn render_error(error: &Error, source: &str) -> String {
    /*
        ERROR: main.c:2:6: unexpected character: @
          |
        2 | x = @;
          | ----^
    */

    let location = error.get_location();
    let mut out = error.to_string();

    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        let _ = write!(out, " ({})", tip);
    }

    let Some(line_text) = get_line(source, location.line) else {
        return out;
    };

    let line_string = location.line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let arrows = display_column(location)
        .saturating_sub(removed_whitespace)
        .max(1);

    let _ = writeln!(out);
    let _ = writeln!(out, "{:>padding$}", "|");
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());
    let _ = write!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
}

/// 1-based column within the line's own text. Past the first line the
/// lexer counts the preceding newline as column 1.
fn display_column(location: &Location) -> usize {
    if location.line > 1 {
        location.column.saturating_sub(1)
    } else {
        location.column
    }
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();
    (&string[start..], start)
}
