//! AST builder coverage: scope nesting, balance errors, class termination.

use recast::ast::{self, AstKind, AstNode};
use recast::errors::{ErrorCategory, ErrorKind, RecastError, SourceContext};
use recast::profiles::build_default_registry;
use recast::syntax::{classify_all, lex, TokenKind};

fn build(source: &str, language: &str) -> Result<AstNode, RecastError> {
    let registry = build_default_registry();
    let profile = registry.get(language).unwrap();
    let tokens = classify_all(&lex(source), profile).unwrap();
    ast::build(&tokens, &SourceContext::from_input(language, source))
}

#[test]
fn flat_input_hangs_leaves_off_the_root() {
    let root = build("x = 1 ;", "cpp").unwrap();
    assert_eq!(root.kind, AstKind::Root);
    assert_eq!(root.children.len(), 4);
    assert!(root
        .children
        .iter()
        .all(|c| matches!(c.kind, AstKind::Leaf(_))));
}

#[test]
fn braces_nest_into_block_scopes() {
    let root = build("a { b { c } }", "cpp").unwrap();
    assert_eq!(root.children.len(), 2); // "a" and the outer block
    let outer = &root.children[1];
    assert_eq!(outer.kind, AstKind::Block);
    assert_eq!(outer.children.len(), 2); // "b" and the inner block
    let inner = &outer.children[1];
    assert_eq!(inner.kind, AstKind::Block);
    assert!(matches!(
        inner.children[0].kind,
        AstKind::Leaf(TokenKind::Identifier)
    ));
}

#[test]
fn parens_nest_into_function_scopes() {
    let root = build("f ( a , b )", "cpp").unwrap();
    let call = &root.children[1];
    assert_eq!(call.kind, AstKind::Function);
    assert_eq!(call.children.len(), 3);
}

#[test]
fn class_scope_owns_header_and_body() {
    let root = build("class D : public B { x ; }", "cpp").unwrap();
    assert_eq!(root.children.len(), 1);
    let class = &root.children[0];
    assert_eq!(class.kind, AstKind::Class);
    // D, :, public, B, and the block
    assert_eq!(class.children.len(), 5);
    assert_eq!(class.children.last().unwrap().kind, AstKind::Block);
}

#[test]
fn class_body_close_also_ends_the_declaration() {
    // Two classes back to back: the first's closing brace must terminate its
    // declaration scope, or the second would nest inside it.
    let root = build("class A { } class B { }", "cpp").unwrap();
    assert_eq!(root.children.len(), 2);
    assert!(root.children.iter().all(|c| c.kind == AstKind::Class));
}

#[test]
fn blockless_class_closes_at_end_of_input() {
    let root = build("class D ( B ) :", "python").unwrap();
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].kind, AstKind::Class);
}

#[test]
fn lone_block_end_is_unbalanced() {
    let err = build("}", "cpp").unwrap_err();
    assert_eq!(err.kind.category(), ErrorCategory::UnbalancedStructure);
    assert!(matches!(err.kind, ErrorKind::UnexpectedCloser { .. }));
}

#[test]
fn unclosed_block_is_unbalanced() {
    let err = build("class A { x", "cpp").unwrap_err();
    assert_eq!(err.kind.category(), ErrorCategory::UnbalancedStructure);
    assert!(matches!(err.kind, ErrorKind::UnclosedScope { .. }));
}

#[test]
fn wrong_closer_for_the_innermost_scope_is_unbalanced() {
    let err = build("( }", "cpp").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MismatchedCloser { .. }));
}

#[test]
fn well_formed_nesting_always_reduces_to_a_single_root() {
    for source in ["", "{ }", "( )", "{ ( ) { } }", "class A { f ( x ) { } }"] {
        let root = build(source, "cpp").unwrap();
        assert_eq!(root.kind, AstKind::Root, "source: {source:?}");
    }
}

#[test]
fn scope_counts_match_marker_counts() {
    let root = build("{ { } } { }", "cpp").unwrap();
    let blocks = root.count(&|n| n.kind == AstKind::Block);
    assert_eq!(blocks, 3);
}
