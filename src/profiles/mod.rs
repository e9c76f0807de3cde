//! Language profiles: the data the whole pipeline is driven by.
//!
//! A [`LanguageProfile`] maps a closed set of semantic [`Role`]s to that
//! language's literal surface symbols. Profiles live in a [`ProfileRegistry`]
//! that is built once at startup and passed by reference into the pipeline;
//! nothing in the registry is mutated after registration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{self, RecastError};

pub mod builtin;

pub use builtin::build_default_registry;

// ============================================================================
// ROLES
// ============================================================================

/// The closed set of semantic slots a profile can fill.
///
/// Every profile used for translation must define at least the structural,
/// comment, and function-bracket roles; the variable-type roles are optional
/// keyword data. Gaps surface as `MissingMapping` at the point of dereference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    StartBlock,
    EndBlock,
    EndStatement,
    Function,
    StartFunction,
    EndFunction,
    Class,
    Inheritance,
    VariableTypeInt,
    VariableTypeDouble,
    SingleLineComment,
    MultiLineCommentStart,
    MultiLineCommentEnd,
}

impl Role {
    /// The role's table key, as it appears in profile files.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::StartBlock => "start_block",
            Self::EndBlock => "end_block",
            Self::EndStatement => "end_statement",
            Self::Function => "function",
            Self::StartFunction => "start_function",
            Self::EndFunction => "end_function",
            Self::Class => "class",
            Self::Inheritance => "inheritance",
            Self::VariableTypeInt => "variable_type_int",
            Self::VariableTypeDouble => "variable_type_double",
            Self::SingleLineComment => "single_line_comment",
            Self::MultiLineCommentStart => "multi_line_comment_start",
            Self::MultiLineCommentEnd => "multi_line_comment_end",
        }
    }
}

// ============================================================================
// PROFILES
// ============================================================================

/// An immutable role-to-symbol table for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageProfile {
    /// The registry name, injected at registration time.
    #[serde(skip)]
    pub name: String,
    #[serde(flatten)]
    roles: HashMap<Role, String>,
}

impl LanguageProfile {
    pub fn new(name: impl Into<String>, roles: impl IntoIterator<Item = (Role, &'static str)>) -> Self {
        Self {
            name: name.into(),
            roles: roles
                .into_iter()
                .map(|(role, symbol)| (role, symbol.to_string()))
                .collect(),
        }
    }

    /// Look up a role's symbol, if the profile defines it.
    pub fn get(&self, role: Role) -> Option<&str> {
        self.roles.get(&role).map(String::as_str)
    }

    /// Look up a role's symbol; a gap is a `MissingMapping` error.
    pub fn require(&self, role: Role) -> Result<&str, RecastError> {
        self.get(role)
            .ok_or_else(|| errors::missing_mapping(&self.name, role))
    }

    /// A profile with no roles at all is treated as absent.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Iterate over the defined role table.
    pub fn roles(&self) -> impl Iterator<Item = (Role, &str)> {
        self.roles.iter().map(|(role, symbol)| (*role, symbol.as_str()))
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// The single source of truth for language profiles.
///
/// Constructed once at the entrypoint and passed by reference to all pipeline
/// code. Never construct a local or hidden registry inside a stage.
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: HashMap<String, LanguageProfile>,
}

impl ProfileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a profile under a language name, stamping the name into the
    /// profile for diagnostics. A re-registration replaces the old table.
    pub fn register(&mut self, name: impl Into<String>, mut profile: LanguageProfile) {
        let name = name.into();
        profile.name = name.clone();
        self.profiles.insert(name, profile);
    }

    /// Look up a profile by language name. Absent and empty profiles are both
    /// rejected before any translation work starts.
    pub fn get(&self, language: &str) -> Result<&LanguageProfile, RecastError> {
        match self.profiles.get(language) {
            Some(profile) if !profile.is_empty() => Ok(profile),
            _ => Err(errors::unsupported_language(language)),
        }
    }

    /// Registered language names, sorted for stable output.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Merge profiles from a YAML document of `name -> role table`.
    ///
    /// Adding a language is pure data registration; no pipeline code changes.
    /// A name that is already registered replaces the old table wholesale
    /// (roles do not merge); the returned list names those replacements so
    /// callers can warn about partially specified overrides.
    pub fn merge_yaml_str(&mut self, yaml: &str) -> Result<Vec<String>, serde_yaml::Error> {
        let parsed: HashMap<String, LanguageProfile> = serde_yaml::from_str(yaml)?;
        let mut replaced: Vec<String> = parsed
            .keys()
            .filter(|name| self.profiles.contains_key(*name))
            .cloned()
            .collect();
        replaced.sort_unstable();
        for (name, profile) in parsed {
            self.register(name, profile);
        }
        Ok(replaced)
    }
}
