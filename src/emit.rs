//! Emitter: walks the translation tree and produces target text.
//!
//! Structural nodes are substituted through the target profile's role table;
//! comment leaves are re-marked (stripping by the source marker's length,
//! wrapping with the target's markers); inheritance leaves are substituted;
//! every other leaf passes through verbatim, space-separated. Identifiers,
//! literals, operators, and delimiters are assumed lexically portable across
//! profiles; this is marker substitution, not a language-aware rewrite.

use crate::ast::{AstKind, AstNode};
use crate::errors::RecastError;
use crate::profiles::{LanguageProfile, Role};
use crate::syntax::TokenKind;

pub struct Emitter<'a> {
    source: &'a LanguageProfile,
    target: &'a LanguageProfile,
}

/// Walk-local state. Needed only for profiles whose multi-line comment start
/// and end markers coincide (python's `'''`), where a lone marker is
/// ambiguous and open/close parity decides which target marker to emit.
struct EmitState {
    multiline_open: bool,
}

impl<'a> Emitter<'a> {
    pub fn new(source: &'a LanguageProfile, target: &'a LanguageProfile) -> Self {
        Self { source, target }
    }

    /// Produce target text for the whole tree.
    pub fn emit(&self, root: &AstNode) -> Result<String, RecastError> {
        let mut out = String::new();
        let mut state = EmitState {
            multiline_open: false,
        };
        self.emit_children(root, &mut out, &mut state)?;
        Ok(out.trim_end().to_string())
    }

    fn emit_children(
        &self,
        node: &AstNode,
        out: &mut String,
        state: &mut EmitState,
    ) -> Result<(), RecastError> {
        for child in &node.children {
            self.emit_node(child, out, state)?;
        }
        Ok(())
    }

    fn emit_node(
        &self,
        node: &AstNode,
        out: &mut String,
        state: &mut EmitState,
    ) -> Result<(), RecastError> {
        match node.kind {
            AstKind::Root => self.emit_children(node, out, state),
            AstKind::Block => {
                push_line(out, self.target.require(Role::StartBlock)?);
                self.emit_children(node, out, state)?;
                push_line(out, self.target.require(Role::EndBlock)?);
                Ok(())
            }
            AstKind::Function => {
                push_word(out, self.target.require(Role::Function)?);
                push_word(out, self.target.require(Role::StartFunction)?);
                self.emit_children(node, out, state)?;
                push_word(out, self.target.require(Role::EndFunction)?);
                Ok(())
            }
            AstKind::Class => {
                push_word(out, self.target.require(Role::Class)?);
                self.emit_children(node, out, state)
            }
            AstKind::Leaf(TokenKind::Inheritance) => {
                push_word(out, self.target.require(Role::Inheritance)?);
                Ok(())
            }
            AstKind::Leaf(TokenKind::Comment) => {
                let translated = self.translate_comment(&node.text, state)?;
                push_word(out, &translated);
                Ok(())
            }
            AstKind::Leaf(_) => {
                push_word(out, &node.text);
                Ok(())
            }
        }
    }

    /// Re-express one comment lexeme in the target's markers.
    ///
    /// The inner text is recovered by stripping the length of the *source*
    /// profile's marker; stripping by the target marker would truncate
    /// incorrectly whenever the two differ in length.
    fn translate_comment(&self, text: &str, state: &mut EmitState) -> Result<String, RecastError> {
        let multi_start = self.source.require(Role::MultiLineCommentStart)?;
        let multi_end = self.source.require(Role::MultiLineCommentEnd)?;
        let single = self.source.require(Role::SingleLineComment)?;

        // A lone marker in a profile where start == end: parity decides.
        if !multi_start.is_empty() && multi_start == multi_end && text == multi_start {
            let role = if state.multiline_open {
                Role::MultiLineCommentEnd
            } else {
                Role::MultiLineCommentStart
            };
            state.multiline_open = !state.multiline_open;
            return Ok(self.target.require(role)?.to_string());
        }

        if !multi_start.is_empty() && text.starts_with(multi_start) {
            let inner = &text[multi_start.len()..];
            let target_start = self.target.require(Role::MultiLineCommentStart)?;
            if inner.is_empty() {
                return Ok(target_start.to_string());
            }
            let inner = if !multi_end.is_empty() {
                inner.strip_suffix(multi_end).unwrap_or(inner)
            } else {
                inner
            };
            let target_end = self.target.require(Role::MultiLineCommentEnd)?;
            return Ok(format!("{target_start} {inner} {target_end}"));
        }

        if !multi_end.is_empty() && text.starts_with(multi_end) {
            let inner = &text[multi_end.len()..];
            let target_end = self.target.require(Role::MultiLineCommentEnd)?;
            return Ok(format!("{target_end}{inner}"));
        }

        if !single.is_empty() && text.starts_with(single) {
            let inner = &text[single.len()..];
            let target_single = self.target.require(Role::SingleLineComment)?;
            if inner.is_empty() {
                return Ok(target_single.to_string());
            }
            return Ok(format!("{target_single} {inner}"));
        }

        // Defensive: the classifier only produces Comment for marked lexemes.
        Ok(text.to_string())
    }
}

fn push_word(out: &mut String, word: &str) {
    if !word.is_empty() {
        out.push_str(word);
        out.push(' ');
    }
}

fn push_line(out: &mut String, symbol: &str) {
    if !symbol.is_empty() {
        out.push_str(symbol);
    }
    out.push('\n');
}
