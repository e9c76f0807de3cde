//! AST builder: classified tokens to one root node.
//!
//! Construction keeps an explicit stack of currently open scope nodes with
//! the root at the bottom. Opening tokens push a new node; closing tokens pop
//! the innermost scope into its parent's child list; everything else attaches
//! as a leaf of the innermost scope. The stack is external and transient; the
//! finished tree carries no construction state.

use crate::errors::{to_source_span, ErrorReporting, RecastError, SourceContext};
use crate::syntax::{Token, TokenKind};

use super::{AstKind, AstNode};

/// Build the translation tree. Returns the root node or an unbalanced
/// structure error naming the offending marker.
pub fn build(tokens: &[Token], source: &SourceContext) -> Result<AstNode, RecastError> {
    let mut stack = vec![AstNode::root()];

    for token in tokens {
        match token.kind {
            TokenKind::BlockStart | TokenKind::FunctionStart | TokenKind::ClassDecl => {
                stack.push(AstNode::scope(token));
            }
            TokenKind::BlockEnd => {
                close_scope(&mut stack, AstKind::Block, token, source)?;
                // A class body's closing brace also terminates the
                // declaration scope that carries it.
                if innermost(&stack).kind == AstKind::Class {
                    pop_into_parent(&mut stack);
                }
            }
            TokenKind::FunctionEnd => {
                close_scope(&mut stack, AstKind::Function, token, source)?;
            }
            _ => {
                innermost_mut(&mut stack).children.push(AstNode::leaf(token));
            }
        }
    }

    // Class scopes have no explicit terminator in block-less languages; they
    // close implicitly at end of input. Anything else left open is an error.
    while innermost(&stack).kind == AstKind::Class {
        pop_into_parent(&mut stack);
    }
    if stack.len() > 1 {
        let open = innermost(&stack);
        return Err(source.unclosed_scope(&open.text, to_source_span(open.span)));
    }

    Ok(stack.pop().unwrap_or_else(AstNode::root))
}

fn close_scope(
    stack: &mut Vec<AstNode>,
    expected: AstKind,
    token: &Token,
    source: &SourceContext,
) -> Result<(), RecastError> {
    if stack.len() == 1 {
        return Err(source.unexpected_closer(&token.text, to_source_span(token.span)));
    }
    let open = innermost(stack);
    if open.kind != expected {
        return Err(source.mismatched_closer(&open.text, &token.text, to_source_span(token.span)));
    }
    pop_into_parent(stack);
    Ok(())
}

fn pop_into_parent(stack: &mut Vec<AstNode>) {
    // Callers guarantee at least two entries.
    let closed = stack.pop().expect("open-scope stack underflow");
    innermost_mut(stack).children.push(closed);
}

fn innermost(stack: &[AstNode]) -> &AstNode {
    stack.last().expect("open-scope stack lost its root")
}

fn innermost_mut(stack: &mut [AstNode]) -> &mut AstNode {
    stack.last_mut().expect("open-scope stack lost its root")
}
