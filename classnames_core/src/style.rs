//! Style values and the lists they nest into.

use std::borrow::Cow;

/// A nestable list of style arguments.
pub type StyleList<'a, P> = Vec<Style<'a, P>>;

/// A single argument to a [`Composer`](crate::Composer).
///
/// `P` is the caller's style-properties type. It is never inspected here,
/// only handed to the composer's renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Style<'a, P> {
    /// A class name emitted verbatim. The empty string is dropped.
    Token(Cow<'a, str>),
    /// Contributes nothing. Stands in for null, undefined and `false`.
    Skip,
    /// A nested list, flattened in place.
    List(StyleList<'a, P>),
    /// Style properties, handed to the renderer.
    Properties(P),
}

impl<'a, P> Style<'a, P> {
    pub fn token(token: impl Into<Cow<'a, str>>) -> Self {
        Style::Token(token.into())
    }

    pub fn props(props: P) -> Self {
        Style::Properties(props)
    }

    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Style::List(items.into_iter().map(Into::into).collect())
    }

    /// Returns `true` for values the composer drops: [`Style::Skip`] and the
    /// empty token. Whitespace-only tokens are kept.
    pub fn is_falsy(&self) -> bool {
        match self {
            Style::Skip => true,
            Style::Token(token) => token.is_empty(),
            Style::List(_) | Style::Properties(_) => false,
        }
    }
}

impl<'a, P> Default for Style<'a, P> {
    fn default() -> Self {
        Style::Skip
    }
}

impl<'a, P> From<&'a str> for Style<'a, P> {
    fn from(token: &'a str) -> Self {
        Style::Token(Cow::Borrowed(token))
    }
}

impl<'a, P> From<&'a String> for Style<'a, P> {
    fn from(token: &'a String) -> Self {
        Style::Token(Cow::Borrowed(token.as_str()))
    }
}

impl<'a, P> From<String> for Style<'a, P> {
    fn from(token: String) -> Self {
        Style::Token(Cow::Owned(token))
    }
}

impl<'a, P> From<Cow<'a, str>> for Style<'a, P> {
    fn from(token: Cow<'a, str>) -> Self {
        Style::Token(token)
    }
}

impl<'a, P, T> From<Option<T>> for Style<'a, P>
where
    T: Into<Style<'a, P>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Style::Skip, Into::into)
    }
}

impl<'a, P, T> From<Vec<T>> for Style<'a, P>
where
    T: Into<Style<'a, P>>,
{
    fn from(items: Vec<T>) -> Self {
        Style::list(items)
    }
}

impl<'a, P, T, const N: usize> From<[T; N]> for Style<'a, P>
where
    T: Into<Style<'a, P>>,
{
    fn from(items: [T; N]) -> Self {
        Style::list(items)
    }
}

impl<'a, P> FromIterator<Style<'a, P>> for Style<'a, P> {
    fn from_iter<I: IntoIterator<Item = Style<'a, P>>>(iter: I) -> Self {
        Style::List(iter.into_iter().collect())
    }
}
