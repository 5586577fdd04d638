//! Composing class names from dynamic JSON values.
//!
//! JSON carries no variant tags, so values are classified by shape:
//!
//! | value                      | becomes                 |
//! |----------------------------|-------------------------|
//! | `null`, `false`, `0`       | [`Style::Skip`]         |
//! | `true`, other numbers      | a token of its JSON text |
//! | string                     | a token                 |
//! | array                      | [`Style::List`]         |
//! | object                     | [`Style::Properties`]   |

use crate::{Composer, Render, Style, TryRender};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Style properties as they appear in JSON input.
pub type JsonProps<'v> = &'v Map<String, Value>;

/// Errors from [`utility_classes`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("style property `{key}` holds a nested array or object")]
    Nested { key: String },

    #[error("style property `{key}` contains whitespace")]
    Whitespace { key: String },

    #[error("style property key `{key}` is empty or contains whitespace")]
    InvalidKey { key: String },
}

/// Classify a JSON value as a style argument.
pub fn classify(value: &Value) -> Style<'_, JsonProps<'_>> {
    match value {
        Value::Null | Value::Bool(false) => Style::Skip,
        Value::Bool(true) => Style::Token(Cow::Borrowed("true")),
        Value::Number(n) if n.as_f64() == Some(0.0) => Style::Skip,
        Value::Number(n) => Style::Token(Cow::Owned(n.to_string())),
        Value::String(s) => Style::Token(Cow::Borrowed(s.as_str())),
        Value::Array(items) => items.iter().map(classify).collect(),
        Value::Object(map) => Style::Properties(map),
    }
}

fn arguments(value: &Value) -> Vec<Style<'_, JsonProps<'_>>> {
    match value {
        Value::Array(items) => items.iter().map(classify).collect(),
        other => vec![classify(other)],
    }
}

/// Compose a JSON value. A top-level array is the argument list, anything
/// else is a single argument.
pub fn compose_value<'v, R>(composer: &Composer<R>, value: &'v Value) -> String
where
    R: Render<JsonProps<'v>>,
{
    composer.compose(&arguments(value))
}

/// [`compose_value`] for fallible renderers.
pub fn try_compose_value<'v, R>(
    composer: &Composer<R>,
    value: &'v Value,
) -> Result<String, <R as TryRender<JsonProps<'v>>>::Error>
where
    R: TryRender<JsonProps<'v>>,
{
    composer.try_compose(&arguments(value))
}

/// Render a property map as utility classes, one `key-value` token per entry.
///
/// Keys are converted from camelCase to kebab-case. `true` emits the bare
/// key, `null`, `false` and `""` emit nothing. Keys must be non-empty and
/// free of whitespace.
///
/// ```
/// use serde_json::json;
///
/// let props = json!({ "color": "red", "fontSize": 14, "bold": true, "italic": false });
/// let classes = classnames_core::json::utility_classes(props.as_object().unwrap());
/// assert_eq!(classes.unwrap(), "color-red font-size-14 bold");
/// ```
pub fn utility_classes(props: &Map<String, Value>) -> Result<String, RenderError> {
    let mut classes = String::new();

    for (key, value) in props {
        if key.is_empty() || key.contains(char::is_whitespace) {
            return Err(RenderError::InvalidKey { key: key.clone() });
        }

        let value: Option<Cow<'_, str>> = match value {
            Value::Null | Value::Bool(false) => continue,
            Value::String(s) if s.is_empty() => continue,
            Value::Bool(true) => None,
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Array(_) | Value::Object(_) => {
                return Err(RenderError::Nested { key: key.clone() })
            }
        };
        if value.as_deref().is_some_and(|v| v.contains(char::is_whitespace)) {
            return Err(RenderError::Whitespace { key: key.clone() });
        }

        if !classes.is_empty() {
            classes.push(' ');
        }
        push_kebab(&mut classes, key);
        if let Some(value) = value {
            classes.push('-');
            classes.push_str(&value);
        }
    }

    Ok(classes)
}

fn push_kebab(out: &mut String, key: &str) {
    for (i, c) in key.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
}

/// [`TryRender`] adapter for [`utility_classes`].
#[derive(Clone, Copy, Debug, Default)]
pub struct UtilityRenderer;

impl<'v> TryRender<JsonProps<'v>> for UtilityRenderer {
    type Error = RenderError;

    fn try_render(&self, props: &JsonProps<'v>) -> Result<String, RenderError> {
        utility_classes(props)
    }
}
