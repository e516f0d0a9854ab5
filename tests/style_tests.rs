//! Comprehensive tests for directive normalization.

use prism::{Directive, StyleError, StyleOptions, normalize};

// ============================================================================
// Merge Semantics
// ============================================================================

#[test]
fn later_color_overrides_earlier() {
    let style = normalize(["red", "blue"]).unwrap();
    assert_eq!(style.color().unwrap().name, "blue");
    assert_eq!(style.color().unwrap().code, 34);
}

#[test]
fn later_background_overrides_earlier() {
    let style = normalize(vec![
        Directive::from(StyleOptions::new().bg("red")),
        Directive::from(StyleOptions::new().bg("blue")),
    ])
    .unwrap();
    assert_eq!(style.background().unwrap().code, 44);
}

#[test]
fn color_and_background_merge_independently() {
    let style = normalize(vec![
        Directive::from("red"),
        Directive::from(StyleOptions::new().bg("blue")),
    ])
    .unwrap();
    assert_eq!(style.color().unwrap().name, "red");
    assert_eq!(style.background().unwrap().name, "blue");
}

#[test]
fn modifiers_union_uniquely_in_first_set_order() {
    let style = normalize(vec![
        Directive::from("bold"),
        Directive::from(["bold", "underline"]),
    ])
    .unwrap();
    let names: Vec<&str> = style.modifiers().iter().map(|m| m.name).collect();
    assert_eq!(names, ["bold", "underline"]);
}

#[test]
fn respecifying_a_modifier_changes_nothing() {
    let once = normalize(["bold", "underline"]).unwrap();
    let twice = normalize(["bold", "underline", "bold", "underline"]).unwrap();
    assert_eq!(once, twice);
}

// ============================================================================
// Flattening
// ============================================================================

#[test]
fn nested_lists_flatten_left_to_right() {
    let style = normalize(vec![
        Directive::from(vec![Directive::from("red"), Directive::from("bold")]),
        Directive::from(vec![Directive::from(vec![Directive::from("green")])]),
    ])
    .unwrap();
    assert_eq!(style.color().unwrap().name, "green");
    assert_eq!(style.modifiers()[0].name, "bold");
}

#[test]
fn skips_are_discarded_at_any_depth() {
    let style = normalize(vec![
        Directive::Skip,
        Directive::from(vec![Directive::Skip, Directive::from("red")]),
        Directive::from(None::<&str>),
    ])
    .unwrap();
    assert_eq!(style.color().unwrap().name, "red");
}

#[test]
fn empty_input_yields_identity() {
    assert!(normalize(Vec::<Directive>::new()).unwrap().is_empty());
    assert!(normalize(Directive::Skip).unwrap().is_empty());
    assert!(normalize(false).unwrap().is_empty());
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn renormalizing_a_style_is_a_noop() {
    let first = normalize(vec![
        Directive::from("red"),
        Directive::from(StyleOptions::new().bg("blue").modifier("bold")),
    ])
    .unwrap();
    let second = normalize(first.clone()).unwrap();
    assert_eq!(first, second);

    let third = normalize(vec![Directive::from(second)]).unwrap();
    assert_eq!(first, third);
}

#[test]
fn normalized_style_can_be_combined_with_more_directives() {
    let base = normalize("cyan").unwrap();
    let style = normalize(vec![Directive::from(base), Directive::from("underline")]).unwrap();
    assert_eq!(style.color().unwrap().name, "cyan");
    assert_eq!(style.modifiers()[0].name, "underline");
}

// ============================================================================
// Aliases and Spelling
// ============================================================================

#[test]
fn grey_resolves_to_gray() {
    assert_eq!(normalize("grey").unwrap(), normalize("gray").unwrap());
}

#[test]
fn modifier_aliases_resolve() {
    assert_eq!(normalize("faint").unwrap(), normalize("dim").unwrap());
    assert_eq!(normalize("conceal").unwrap(), normalize("hidden").unwrap());
    assert_eq!(
        normalize("strike").unwrap(),
        normalize("strikethrough").unwrap()
    );
    assert_eq!(
        normalize("strikethru").unwrap(),
        normalize("strikethrough").unwrap()
    );
}

#[test]
fn separator_and_case_insensitive_names() {
    let expected = normalize("brightMagenta").unwrap();
    assert_eq!(normalize("bright_magenta").unwrap(), expected);
    assert_eq!(normalize("BRIGHT-MAGENTA").unwrap(), expected);
    assert_eq!(normalize("  bright magenta ").unwrap(), expected);
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn options_cover_all_axes() {
    let style = normalize(
        StyleOptions::new()
            .color("white")
            .background("red")
            .modifiers(["bold", "underline"]),
    )
    .unwrap();
    assert_eq!(style.color().unwrap().code, 37);
    assert_eq!(style.background().unwrap().code, 41);
    assert_eq!(style.modifiers().len(), 2);
}

#[test]
fn options_accept_shorthand_setters() {
    let full = normalize(StyleOptions::new().background("blue").modifier("italic")).unwrap();
    let short = normalize(StyleOptions::new().bg("blue").effect("italic")).unwrap();
    assert_eq!(full, short);
}

#[test]
fn options_accept_single_scalar_modifier() {
    let style = normalize(StyleOptions::new().modifier("italic")).unwrap();
    assert_eq!(style.modifiers().len(), 1);
    assert_eq!(style.modifiers()[0].code, 3);
}

#[test]
fn options_accept_registry_entries() {
    let red = prism::resolve(prism::Category::Foreground, "red").unwrap();
    let style = normalize(StyleOptions::new().color(red)).unwrap();
    assert_eq!(style.color().unwrap(), red);
}

#[test]
fn options_never_propagate_a_stale_entry_code() {
    let stale = prism::Entry {
        name: "red",
        code: 99,
    };
    let style = normalize(StyleOptions::new().color(stale)).unwrap();
    assert_eq!(style.color().unwrap().code, 31);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn unknown_bare_name_errors() {
    let err = normalize("not-a-color").unwrap_err();
    assert_eq!(err, StyleError::UnknownStyle("not-a-color".to_string()));
    assert!(err.is_unknown());
}

#[test]
fn unknown_option_values_error_per_axis() {
    assert_eq!(
        normalize(StyleOptions::new().color("mauve")).unwrap_err(),
        StyleError::UnknownColor("mauve".to_string())
    );
    assert_eq!(
        normalize(StyleOptions::new().bg("mauve")).unwrap_err(),
        StyleError::UnknownBackground("mauve".to_string())
    );
    assert_eq!(
        normalize(StyleOptions::new().modifier("sparkle")).unwrap_err(),
        StyleError::UnknownModifier("sparkle".to_string())
    );
}

#[test]
fn unsupported_directive_type_errors() {
    let err = normalize(true).unwrap_err();
    assert_eq!(err, StyleError::UnsupportedType("bool"));
    assert!(!err.is_unknown());
}

#[test]
fn error_in_a_nested_list_aborts_the_whole_call() {
    let err = normalize(vec![
        Directive::from("red"),
        Directive::from(vec![Directive::from("oops")]),
    ])
    .unwrap_err();
    assert_eq!(err, StyleError::UnknownStyle("oops".to_string()));
}

#[test]
fn error_messages_name_the_offending_value() {
    let err = normalize("oops").unwrap_err();
    assert_eq!(err.to_string(), "unknown style: oops");

    let err = normalize(StyleOptions::new().bg("mauve")).unwrap_err();
    assert_eq!(err.to_string(), "unknown background color: mauve");
}
