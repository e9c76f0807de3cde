//! Canonical registry builder.
//!
//! Provides a single function to construct the registry of built-in language
//! profiles for both production and test use, so all code paths share the
//! same registration data.

use super::{LanguageProfile, ProfileRegistry, Role};

/// Builds the default registry with the two built-in profiles registered.
///
/// # Example
/// ```
/// use recast::profiles::build_default_registry;
/// let registry = build_default_registry();
/// assert!(registry.get("cpp").is_ok());
/// ```
pub fn build_default_registry() -> ProfileRegistry {
    let mut registry = ProfileRegistry::new();
    registry.register("cpp", cpp_profile());
    registry.register("python", python_profile());
    registry
}

fn cpp_profile() -> LanguageProfile {
    LanguageProfile::new(
        "cpp",
        [
            (Role::StartBlock, "{"),
            (Role::EndBlock, "}"),
            (Role::EndStatement, ";"),
            (Role::Function, ""),
            (Role::StartFunction, "("),
            (Role::EndFunction, ")"),
            (Role::Class, "class"),
            (Role::Inheritance, ":"),
            (Role::VariableTypeInt, "int"),
            (Role::VariableTypeDouble, "double"),
            (Role::SingleLineComment, "//"),
            (Role::MultiLineCommentStart, "/*"),
            (Role::MultiLineCommentEnd, "*/"),
        ],
    )
}

fn python_profile() -> LanguageProfile {
    LanguageProfile::new(
        "python",
        [
            (Role::StartBlock, ":"),
            (Role::EndBlock, ""),
            (Role::EndStatement, ""),
            (Role::Function, "def"),
            (Role::StartFunction, "("),
            (Role::EndFunction, ")"),
            (Role::Class, "class"),
            (Role::Inheritance, "("),
            (Role::VariableTypeInt, "int"),
            (Role::VariableTypeDouble, "float"),
            (Role::SingleLineComment, "#"),
            (Role::MultiLineCommentStart, "'''"),
            (Role::MultiLineCommentEnd, "'''"),
        ],
    )
}
