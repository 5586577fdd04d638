//! Integration tests for the `cs!` macro.
//!
//! These run the composer scenarios through the macro, with a renderer that
//! ignores its properties.

#![cfg(feature = "macros")]

use classnames::prelude::*;

#[allow(dead_code)]
struct Props {
    color: Option<&'static str>,
    font_size: Option<u32>,
}

fn red_14() -> Props {
    Props {
        color: Some("red"),
        font_size: Some(14),
    }
}

fn custom(_: &Props) -> String {
    "custom".to_string()
}

#[test]
fn test_single_string() {
    let cs = create(custom);
    assert_eq!(cs!(cs; "foo"), "foo");
}

#[test]
fn test_single_style_object() {
    let cs = create(custom);
    assert_eq!(cs!(cs; Style::props(red_14())), "custom");
}

#[test]
fn test_filters_out_falsy_values() {
    let cs = create(custom);
    assert_eq!(cs!(cs; Style::Skip, "bar"), "bar");
    assert_eq!(cs!(cs; "foo", None::<&str>), "foo");
    assert_eq!(cs!(cs; "foo", ""), "foo");
}

#[test]
fn test_nested_values() {
    let cs = create(custom);
    assert_eq!(cs!(cs; vec!["foo", "bar"]), "foo bar");
    assert_eq!(
        cs!(cs; vec![Style::Skip, "bar".into(), Style::from(["baz"])], vec![Some("foo"), None]),
        "bar baz foo"
    );
}

#[test]
fn test_style_objects() {
    let cs = create(custom);
    assert_eq!(cs!(cs; Style::props(red_14()), "bar"), "custom bar");
    assert_eq!(
        cs!(cs; vec![Style::props(red_14()), "bar".into()]),
        "custom bar"
    );
}

#[test]
fn test_conditional_items() {
    let cs = create(custom);
    let active = true;
    let disabled = false;
    assert_eq!(
        cs!(cs; "px-4 py-2", "bg-blue-500" => active, "opacity-50" => disabled),
        "px-4 py-2 bg-blue-500"
    );
    assert_eq!(
        cs!(cs; "btn", Style::props(red_14()) => !disabled, "big" => 2 > 1),
        "btn custom big"
    );
}

#[test]
fn test_owned_and_borrowed_strings() {
    let cs = create(custom);
    let owned = String::from("card");
    let computed = format!("w-{}", 12);
    assert_eq!(cs!(cs; &owned, computed, Some(&owned)), "card w-12 card");
}

#[test]
fn test_trailing_comma_and_composer_expression() {
    let composers = [create(custom)];
    assert_eq!(cs!(composers[0]; "a", "b",), "a b");
}

#[test]
fn test_empty_item_list() {
    let cs = create(custom);
    assert_eq!(cs!(cs;), "");
}

#[test]
fn test_does_not_dedupe() {
    let cs = create(custom);
    assert_eq!(cs!(cs; "foo", "bar", "foo"), "foo bar foo");
}
