//! Integration tests for composing from JSON values.

#![cfg(feature = "json")]

use classnames::prelude::*;
use serde_json::json;

#[test]
fn test_compose_value_with_closure_renderer() {
    let cs = create(|props: &JsonProps<'_>| format!("css-{}", props.len()));
    assert_eq!(
        compose_value(&cs, &json!(["a", { "color": "red", "fontSize": 14 }, [null, ["b"]]])),
        "a css-2 b"
    );
}

#[test]
fn test_compose_value_with_utility_renderer() {
    let cs = Composer::new(UtilityRenderer);
    let value = json!([
        "card",
        false,
        { "display": "flex", "justifyContent": "center" },
        ["shadow", ""]
    ]);
    assert_eq!(
        try_compose_value(&cs, &value),
        Ok("card display-flex justify-content-center shadow".to_string())
    );
}

#[test]
fn test_utility_renderer_error_propagates() {
    let cs = Composer::new(UtilityRenderer);
    let err = try_compose_value(&cs, &json!(["card", { "margin": "0 auto" }])).unwrap_err();
    assert_eq!(
        err,
        RenderError::Whitespace {
            key: "margin".to_string()
        }
    );
}

#[test]
fn test_classified_values_mix_with_typed_ones() {
    let cs = create(|props: &JsonProps<'_>| utility_classes(props).unwrap_or_default());
    let value = json!({ "gap": 4 });
    let args = [Style::from("grid"), classify(&value), Style::from(vec!["x", ""])];
    assert_eq!(cs.compose(&args), "grid gap-4 x");
}
