//! AST types for the recast pipeline.
//!
//! The tree reflects nested block, function, and class scopes. Ownership is
//! strictly downward: every node owns its children and no node holds a
//! reference to its parent. "Where do I insert next" is construction-time
//! state that lives on the builder's open-scope stack, never in the tree.

use serde::{Deserialize, Serialize};

use crate::syntax::{Span, Token, TokenKind};

pub mod builder;

pub use builder::build;

/// Node kinds: interior scope nodes plus leaves carrying their token kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AstKind {
    /// The synthetic top of every tree.
    Root,
    Block,
    Function,
    Class,
    Leaf(TokenKind),
}

/// One node of the translation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstNode {
    pub kind: AstKind,
    pub text: String,
    pub span: Span,
    pub children: Vec<AstNode>,
}

impl AstNode {
    pub fn root() -> Self {
        Self {
            kind: AstKind::Root,
            text: String::new(),
            span: Span::default(),
            children: Vec::new(),
        }
    }

    /// An interior node opened by a scope token.
    pub fn scope(token: &Token) -> Self {
        let kind = match token.kind {
            TokenKind::BlockStart => AstKind::Block,
            TokenKind::FunctionStart => AstKind::Function,
            TokenKind::ClassDecl => AstKind::Class,
            other => AstKind::Leaf(other),
        };
        Self {
            kind,
            text: token.text.clone(),
            span: token.span,
            children: Vec::new(),
        }
    }

    pub fn leaf(token: &Token) -> Self {
        Self {
            kind: AstKind::Leaf(token.kind),
            text: token.text.clone(),
            span: token.span,
            children: Vec::new(),
        }
    }

    /// Count the nodes satisfying a predicate, this node included.
    pub fn count(&self, pred: &dyn Fn(&AstNode) -> bool) -> usize {
        let here = usize::from(pred(self));
        here + self.children.iter().map(|c| c.count(pred)).sum::<usize>()
    }
}
