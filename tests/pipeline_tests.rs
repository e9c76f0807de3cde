//! End-to-end translation properties.

use recast::errors::ErrorCategory;
use recast::profiles::{build_default_registry, LanguageProfile, ProfileRegistry, Role};
use recast::translate;

fn registry() -> ProfileRegistry {
    build_default_registry()
}

/// Occurrences of a marker as a standalone lexeme in the output.
fn marker_count(text: &str, marker: &str) -> usize {
    text.split_whitespace().filter(|w| *w == marker).count()
}

#[test]
fn identity_translation_preserves_structural_marker_counts() {
    let code = "class A { void f ( ) { x = 1 ; } }";
    let out = translate(code, "cpp", "cpp", &registry()).unwrap();

    for marker in ["class", "{", "}", "(", ")"] {
        assert_eq!(
            marker_count(&out, marker),
            marker_count(code, marker),
            "marker {marker:?} in {out:?}"
        );
    }
}

#[test]
fn identity_translation_is_stable_for_python() {
    // The python profile exercises every awkward corner at once: an empty
    // end_block, "(" repurposed as the inheritance marker, "#" comments,
    // and coinciding multi-line markers.
    let code = "class D ( B ) : # note";
    let out = translate(code, "python", "python", &registry()).unwrap();
    assert_eq!(out, code);

    let out = translate("''' doc '''", "python", "python", &registry()).unwrap();
    assert_eq!(out, "''' doc '''");
}

#[test]
fn function_arguments_stay_enclosed_by_the_bracket_symbols() {
    // The function word leads, then the bracket pair encloses the children;
    // arguments must never leak outside the brackets.
    let out = translate("f ( a , b )", "cpp", "python", &registry()).unwrap();
    assert_eq!(out, "f def ( a , b )");

    let out = translate("f ( a , b )", "cpp", "cpp", &registry()).unwrap();
    assert_eq!(out, "f ( a , b )");
}

#[test]
fn unknown_source_language_is_rejected_before_any_work() {
    let err = translate("x", "missing", "cpp", &registry()).unwrap_err();
    assert_eq!(err.kind.category(), ErrorCategory::UnsupportedLanguage);
}

#[test]
fn unknown_target_language_is_rejected_before_any_work() {
    let err = translate("x", "cpp", "missing", &registry()).unwrap_err();
    assert_eq!(err.kind.category(), ErrorCategory::UnsupportedLanguage);
}

#[test]
fn empty_profile_is_rejected_like_an_absent_one() {
    let mut registry = registry();
    registry.merge_yaml_str("hollow: {}").unwrap();
    let err = translate("x", "hollow", "cpp", &registry).unwrap_err();
    assert_eq!(err.kind.category(), ErrorCategory::UnsupportedLanguage);
}

#[test]
fn single_line_comment_round_trips_python_to_cpp() {
    let out = translate("# hello", "python", "cpp", &registry()).unwrap();
    assert!(out.starts_with("// hello"), "got {out:?}");
}

#[test]
fn single_line_comment_round_trips_cpp_to_python() {
    let out = translate("// hello", "cpp", "python", &registry()).unwrap();
    assert!(out.starts_with("# hello"), "got {out:?}");
}

#[test]
fn attached_comment_text_strips_the_source_marker_length() {
    // The marker lengths differ ("//" vs "#"); stripping must use the source
    // profile's marker or the inner text would be truncated.
    let out = translate("//note", "cpp", "python", &registry()).unwrap();
    assert_eq!(out, "# note");

    let out = translate("#note", "python", "cpp", &registry()).unwrap();
    assert_eq!(out, "// note");
}

#[test]
fn multi_line_comment_markers_map_pairwise() {
    let out = translate("/* hi */", "cpp", "python", &registry()).unwrap();
    assert_eq!(out, "''' hi '''");

    // python's start and end markers coincide; parity decides direction.
    let out = translate("''' hi '''", "python", "cpp", &registry()).unwrap();
    assert_eq!(out, "/* hi */");
}

#[test]
fn inheritance_marker_substitutes_cpp_to_python() {
    let out = translate("class D : public B", "cpp", "python", &registry()).unwrap();
    assert_eq!(out, "class D ( public B");
}

#[test]
fn inheritance_marker_substitutes_python_to_cpp() {
    let out = translate("class D ( B", "python", "cpp", &registry()).unwrap();
    assert_eq!(out, "class D : B");
}

#[test]
fn there_and_back_reproduces_the_structural_skeleton() {
    for code in ["class D : public B", "// hello world", "x = 1 + 2"] {
        let there = translate(code, "cpp", "python", &registry()).unwrap();
        let back = translate(&there, "python", "cpp", &registry()).unwrap();
        let skeleton: Vec<&str> = code.split_whitespace().collect();
        let round: Vec<&str> = back.split_whitespace().collect();
        assert_eq!(skeleton, round, "through python: {there:?}");
    }
}

#[test]
fn block_markers_rewrite_between_profiles() {
    let out = translate("while x { y ; }", "cpp", "python", &registry()).unwrap();
    // cpp "{" becomes python ":" on its own line; cpp "}" maps to python's
    // empty end marker and contributes only a line break.
    assert!(out.contains(":\n"), "got {out:?}");
    assert!(!out.contains('{') && !out.contains('}'), "got {out:?}");
}

#[test]
fn unbalanced_input_is_a_terminal_failure_not_partial_output() {
    let err = translate("{ x", "cpp", "python", &registry()).unwrap_err();
    assert_eq!(err.kind.category(), ErrorCategory::UnbalancedStructure);
}

#[test]
fn missing_role_in_an_otherwise_registered_profile_is_reported() {
    let mut registry = registry();
    registry.register(
        "minimal",
        LanguageProfile::new("minimal", [(Role::Class, "class")]),
    );
    let err = translate("x", "minimal", "cpp", &registry).unwrap_err();
    assert_eq!(err.kind.category(), ErrorCategory::MissingMapping);
}

#[test]
fn empty_input_translates_to_empty_output() {
    let out = translate("", "cpp", "python", &registry()).unwrap();
    assert!(out.is_empty());
}

#[test]
fn unknown_lexemes_pass_through_verbatim() {
    let out = translate("x -> y", "cpp", "python", &registry()).unwrap();
    assert_eq!(out, "x -> y");
}
