//! Classifier: assigns each lexeme exactly one semantic token kind.
//!
//! Classification is a fixed priority chain, first match wins. The ordering
//! is deliberate: the profile-driven structural checks (class declaration,
//! inheritance marker) run first because the keyword check is strictly more
//! permissive and would shadow them, and the literal bracket checks run
//! before the delimiter set for the same reason. Classification never fails
//! for unrecognized input; unknown lexemes pass through verbatim.

use crate::errors::RecastError;
use crate::profiles::{LanguageProfile, Role};

use super::{Lexeme, Token, TokenKind};

/// The fixed operator set.
const OPERATORS: &[&str] = &["+", "-", "*", "/", "=", "==", "!="];

/// The fixed delimiter set. The bracket members are shadowed by the
/// structural checks and only ever match through this set for profiles that
/// repurpose them, which none of the built-ins do.
const DELIMITERS: &[&str] = &[",", ";", "(", ")", "{", "}"];

/// Roles whose symbols classify as plain keywords. The structural, comment,
/// class, and inheritance roles are owned by earlier rungs of the chain.
const KEYWORD_ROLES: &[Role] = &[
    Role::StartBlock,
    Role::EndBlock,
    Role::EndStatement,
    Role::Function,
    Role::VariableTypeInt,
    Role::VariableTypeDouble,
];

const COMMENT_MARKER_ROLES: &[Role] = &[
    Role::SingleLineComment,
    Role::MultiLineCommentStart,
    Role::MultiLineCommentEnd,
];

/// Classify every lexeme against the source profile. Whitespace tokens are
/// dropped, mirroring the lexer's contract.
pub fn classify_all(
    lexemes: &[Lexeme],
    profile: &LanguageProfile,
) -> Result<Vec<Token>, RecastError> {
    let mut tokens = Vec::with_capacity(lexemes.len());
    for lexeme in lexemes {
        let token = classify(lexeme, profile)?;
        if token.kind == TokenKind::Whitespace {
            continue;
        }
        tokens.push(token);
    }
    Ok(tokens)
}

/// Assign a single lexeme its token kind.
///
/// Errors only when a dereferenced role (`class`, `inheritance`) is absent
/// from the profile; everything else falls through to `Unknown`.
pub fn classify(lexeme: &Lexeme, profile: &LanguageProfile) -> Result<Token, RecastError> {
    let kind = classify_text(&lexeme.text, profile)?;
    Ok(Token {
        kind,
        text: lexeme.text.clone(),
        span: lexeme.span,
    })
}

fn classify_text(text: &str, profile: &LanguageProfile) -> Result<TokenKind, RecastError> {
    if is_class_decl(text, profile)? {
        Ok(TokenKind::ClassDecl)
    } else if is_inheritance(text, profile)? {
        Ok(TokenKind::Inheritance)
    } else if text == "{" {
        Ok(TokenKind::BlockStart)
    } else if text == "}" {
        Ok(TokenKind::BlockEnd)
    } else if text == "(" {
        // Unreachable when the profile repurposes "(" as its inheritance
        // marker; the inheritance rung already claimed it.
        Ok(TokenKind::FunctionStart)
    } else if text == ")" && !paren_repurposed(profile) {
        Ok(TokenKind::FunctionEnd)
    } else if is_keyword(text, profile) {
        Ok(TokenKind::Keyword)
    } else if is_identifier(text) {
        Ok(TokenKind::Identifier)
    } else if OPERATORS.contains(&text) {
        Ok(TokenKind::Operator)
    } else if DELIMITERS.contains(&text) {
        Ok(TokenKind::Delimiter)
    } else if is_literal(text) {
        Ok(TokenKind::Literal)
    } else if is_comment(text, profile) {
        Ok(TokenKind::Comment)
    } else if text.chars().all(char::is_whitespace) {
        Ok(TokenKind::Whitespace)
    } else {
        Ok(TokenKind::Unknown)
    }
}

/// A profile that maps its inheritance role to "(" (python) strips the
/// function brackets of their structural meaning: the opener reads as the
/// inheritance marker, so the closer must demote to a plain delimiter or
/// every close paren would be an unmatched scope end.
fn paren_repurposed(profile: &LanguageProfile) -> bool {
    profile.get(Role::Inheritance) == Some("(")
}

fn is_class_decl(text: &str, profile: &LanguageProfile) -> Result<bool, RecastError> {
    Ok(text == profile.require(Role::Class)?)
}

fn is_inheritance(text: &str, profile: &LanguageProfile) -> Result<bool, RecastError> {
    Ok(text == profile.require(Role::Inheritance)?)
}

fn is_keyword(text: &str, profile: &LanguageProfile) -> bool {
    KEYWORD_ROLES.iter().any(|role| {
        profile
            .get(*role)
            .is_some_and(|symbol| !symbol.is_empty() && symbol == text)
    })
}

fn is_identifier(text: &str) -> bool {
    text.chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
}

fn is_literal(text: &str) -> bool {
    let starts_with_digit = text.chars().next().is_some_and(|c| c.is_ascii_digit());
    let quoted = text.len() >= 2 && text.starts_with('"') && text.ends_with('"');
    starts_with_digit || quoted
}

fn is_comment(text: &str, profile: &LanguageProfile) -> bool {
    COMMENT_MARKER_ROLES.iter().any(|role| {
        profile
            .get(*role)
            .is_some_and(|marker| !marker.is_empty() && text.starts_with(marker))
    })
}
