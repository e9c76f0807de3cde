//! Lexer: raw text to an ordered sequence of lexemes.
//!
//! Splitting is line-oriented then whitespace-oriented; since the newline is
//! itself whitespace the two collapse into a single pass that accumulates
//! maximal non-whitespace runs. Whitespace carries no information the rest of
//! the pipeline needs (block structure lives in explicit delimiter tokens),
//! so it is dropped here. Lexing has no error conditions.

use super::{Lexeme, Span};

/// Split source text into lexemes in reading order. Empty input produces an
/// empty sequence.
pub fn lex(source: &str) -> Vec<Lexeme> {
    let mut lexemes = Vec::new();
    let mut run_start: Option<usize> = None;

    for (offset, ch) in source.char_indices() {
        if ch.is_whitespace() {
            if let Some(start) = run_start.take() {
                lexemes.push(make_lexeme(source, start, offset));
            }
        } else if run_start.is_none() {
            run_start = Some(offset);
        }
    }
    if let Some(start) = run_start {
        lexemes.push(make_lexeme(source, start, source.len()));
    }

    lexemes
}

fn make_lexeme(source: &str, start: usize, end: usize) -> Lexeme {
    Lexeme {
        text: source[start..end].to_string(),
        span: Span { start, end },
    }
}
