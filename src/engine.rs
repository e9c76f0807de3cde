//! The translation pipeline entry point.
//!
//! Data flow is one-directional and single-pass per stage:
//! text -> lexemes -> tokens -> tree -> text. Every stage is a pure function
//! of its input plus the read-only profile registry, so concurrent calls
//! against one registry need no synchronization; each call allocates its own
//! token list and tree and discards them on return.

use crate::ast;
use crate::emit::Emitter;
use crate::errors::{RecastError, SourceContext};
use crate::profiles::ProfileRegistry;
use crate::syntax::{classifier, lexer};

/// Translate `code` from one registered language's surface syntax to
/// another's.
///
/// Both profiles are resolved up front; an absent or empty profile fails with
/// `UnsupportedLanguage` before any translation work is performed.
pub fn translate(
    code: &str,
    source_language: &str,
    target_language: &str,
    registry: &ProfileRegistry,
) -> Result<String, RecastError> {
    let source_profile = registry.get(source_language)?;
    let target_profile = registry.get(target_language)?;

    let context = SourceContext::from_input(source_language, code);
    let lexemes = lexer::lex(code);
    let tokens = classifier::classify_all(&lexemes, source_profile)?;
    let tree = ast::build(&tokens, &context)?;
    Emitter::new(source_profile, target_profile).emit(&tree)
}
