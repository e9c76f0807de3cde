//! Recast error handling.
//!
//! A single error struct with a kind enum, rendered through miette. Errors are
//! created through the [`ErrorReporting`] trait so that `RecastError` values
//! are never assembled by hand at call sites.

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};

use crate::profiles::Role;

// ============================================================================
// SOURCE CONTEXT - Error reporting infrastructure
// ============================================================================

/// Source context for error reporting: the input text being translated plus a
/// display name (conventionally the source language).
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub name: String,
    pub content: String,
}

impl SourceContext {
    /// Create a source context from the input under translation.
    pub fn from_input(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Create a fallback when the failing operation has no input text,
    /// such as a registry lookup.
    pub fn fallback(context: &str) -> Self {
        Self {
            name: "recast".to_string(),
            content: context.to_string(),
        }
    }

    /// Convert to NamedSource for use with miette error reporting.
    pub fn to_named_source(&self) -> Arc<NamedSource<String>> {
        Arc::new(NamedSource::new(self.name.clone(), self.content.clone()))
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// The single error type: what went wrong, where, and how to help.
#[derive(Debug)]
pub struct RecastError {
    pub kind: ErrorKind,
    pub source_info: SourceInfo,
    pub diagnostic_info: DiagnosticInfo,
}

/// All error conditions the pipeline can surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested language has no registered (or a completely empty)
    /// profile. Checked before any translation work begins.
    UnsupportedLanguage { language: String },

    /// A close marker arrived with no open scope to close.
    UnexpectedCloser { marker: String },

    /// A close marker arrived while a different kind of scope was innermost.
    MismatchedCloser { opener: String, found: String },

    /// A scope was still open when the input ran out.
    UnclosedScope { marker: String },

    /// A profile that passed the registry check is missing a role the
    /// classifier or emitter dereferences.
    MissingMapping { language: String, role: Role },
}

/// Where the error happened.
#[derive(Debug, Clone)]
pub struct SourceInfo {
    pub source: Arc<NamedSource<String>>,
    pub primary_span: SourceSpan,
}

/// Diagnostic enhancement data.
#[derive(Debug, Clone)]
pub struct DiagnosticInfo {
    pub help: Option<String>,
    pub error_code: String,
}

/// Context-aware error creation.
pub trait ErrorReporting {
    fn report(&self, kind: ErrorKind, span: SourceSpan) -> RecastError;

    fn unexpected_closer(&self, marker: &str, span: SourceSpan) -> RecastError {
        self.report(
            ErrorKind::UnexpectedCloser {
                marker: marker.into(),
            },
            span,
        )
    }

    fn mismatched_closer(&self, opener: &str, found: &str, span: SourceSpan) -> RecastError {
        self.report(
            ErrorKind::MismatchedCloser {
                opener: opener.into(),
                found: found.into(),
            },
            span,
        )
    }

    fn unclosed_scope(&self, marker: &str, span: SourceSpan) -> RecastError {
        self.report(
            ErrorKind::UnclosedScope {
                marker: marker.into(),
            },
            span,
        )
    }
}

impl ErrorReporting for SourceContext {
    fn report(&self, kind: ErrorKind, span: SourceSpan) -> RecastError {
        let error_code = format!(
            "recast::{}::{}",
            kind.category().code_segment(),
            kind.code_suffix()
        );
        RecastError {
            kind,
            source_info: SourceInfo {
                source: self.to_named_source(),
                primary_span: span,
            },
            diagnostic_info: DiagnosticInfo {
                help: None,
                error_code,
            },
        }
    }
}

/// Standalone constructor for registry lookup failures, which happen before
/// any source text enters the pipeline.
pub fn unsupported_language(language: &str) -> RecastError {
    SourceContext::fallback(&format!("language lookup: {language}")).report(
        ErrorKind::UnsupportedLanguage {
            language: language.to_string(),
        },
        unspanned(),
    )
}

/// Standalone constructor for role table gaps. Profiles are validated for
/// presence, not completeness, so a missing role surfaces lazily at the
/// point of dereference.
pub fn missing_mapping(language: &str, role: Role) -> RecastError {
    let mut error = SourceContext::fallback(&format!("profile: {language}")).report(
        ErrorKind::MissingMapping {
            language: language.to_string(),
            role,
        },
        unspanned(),
    );
    error.diagnostic_info.help = Some(format!(
        "add a '{}' entry to the '{}' profile's role table",
        role.key(),
        language
    ));
    error
}

/// A placeholder span for errors not tied to a source location.
pub fn unspanned() -> SourceSpan {
    SourceSpan::from(0..0)
}

/// Converts a syntax Span to a miette SourceSpan.
pub fn to_source_span(span: crate::syntax::Span) -> SourceSpan {
    SourceSpan::from(span.start..span.end)
}

// ============================================================================
// CATEGORIES AND CODES
// ============================================================================

/// The three error kinds of the translation contract, exposed for test
/// assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UnsupportedLanguage,
    UnbalancedStructure,
    MissingMapping,
}

impl ErrorCategory {
    pub const fn code_segment(&self) -> &'static str {
        match self {
            Self::UnsupportedLanguage => "language",
            Self::UnbalancedStructure => "structure",
            Self::MissingMapping => "profile",
        }
    }
}

impl ErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedLanguage { .. } => ErrorCategory::UnsupportedLanguage,
            Self::UnexpectedCloser { .. }
            | Self::MismatchedCloser { .. }
            | Self::UnclosedScope { .. } => ErrorCategory::UnbalancedStructure,
            Self::MissingMapping { .. } => ErrorCategory::MissingMapping,
        }
    }

    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::UnsupportedLanguage { .. } => "unsupported_language",
            Self::UnexpectedCloser { .. } => "unexpected_closer",
            Self::MismatchedCloser { .. } => "mismatched_closer",
            Self::UnclosedScope { .. } => "unclosed_scope",
            Self::MissingMapping { .. } => "missing_mapping",
        }
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

impl std::error::Error for RecastError {}

impl fmt::Display for RecastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::UnsupportedLanguage { language } => {
                write!(f, "Unsupported language: no profile named '{language}'")
            }
            ErrorKind::UnexpectedCloser { marker } => {
                write!(f, "Unbalanced structure: '{marker}' closes no open scope")
            }
            ErrorKind::MismatchedCloser { opener, found } => {
                write!(
                    f,
                    "Unbalanced structure: '{found}' cannot close the scope opened by '{opener}'"
                )
            }
            ErrorKind::UnclosedScope { marker } => {
                write!(f, "Unbalanced structure: scope opened by '{marker}' is never closed")
            }
            ErrorKind::MissingMapping { language, role } => {
                write!(
                    f,
                    "Profile '{language}' has no mapping for role '{}'",
                    role.key()
                )
            }
        }
    }
}

impl Diagnostic for RecastError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.diagnostic_info.error_code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diagnostic_info
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = vec![LabeledSpan::new_with_span(
            Some(self.primary_label()),
            self.source_info.primary_span,
        )];
        Some(Box::new(labels.into_iter()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&*self.source_info.source)
    }
}

impl RecastError {
    fn primary_label(&self) -> String {
        match &self.kind {
            ErrorKind::UnsupportedLanguage { .. } => "unknown language".into(),
            ErrorKind::UnexpectedCloser { .. } => "closes nothing".into(),
            ErrorKind::MismatchedCloser { .. } => "wrong closer for this scope".into(),
            ErrorKind::UnclosedScope { .. } => "opened here, never closed".into(),
            ErrorKind::MissingMapping { .. } => "role not in profile".into(),
        }
    }
}

/// Prints a RecastError with full miette diagnostics.
///
/// Use this for user-facing error display in CLI contexts.
pub fn print_error(error: RecastError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}
