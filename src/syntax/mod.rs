//! Syntax types for the recast pipeline.
//!
//! The pipeline's flat intermediate representation: raw lexemes out of the
//! lexer, classified tokens out of the classifier. Everything carries a byte
//! span for diagnostics.

use serde::{Deserialize, Serialize};

pub mod classifier;
pub mod lexer;

pub use classifier::{classify, classify_all};
pub use lexer::lex;

/// A byte range in the source text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// A raw lexeme: one whitespace-delimited run of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexeme {
    pub text: String,
    pub span: Span,
}

/// Semantic token kinds assigned by the classifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Keyword,
    Identifier,
    Operator,
    Delimiter,
    Literal,
    Comment,
    /// Defensive only; the lexer never emits whitespace lexemes.
    Whitespace,
    Unknown,
    BlockStart,
    BlockEnd,
    FunctionStart,
    FunctionEnd,
    ClassDecl,
    Inheritance,
}

impl TokenKind {
    /// Kinds that open a nested scope in the AST.
    pub const fn opens_scope(&self) -> bool {
        matches!(self, Self::BlockStart | Self::FunctionStart | Self::ClassDecl)
    }

    /// Kinds that close a nested scope in the AST.
    pub const fn closes_scope(&self) -> bool {
        matches!(self, Self::BlockEnd | Self::FunctionEnd)
    }
}

/// A classified token. Source order is significant and preserved all the way
/// to emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}
