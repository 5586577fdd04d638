//! Renderers turn style properties into class-name tokens.

/// Converts style properties into a single token.
///
/// Implemented for every `Fn(&P) -> String`, so plain closures work:
///
/// ```
/// use classnames_core::{Composer, Style};
///
/// struct Props {
///     color: &'static str,
/// }
///
/// let cs = Composer::new(|p: &Props| format!("text-{}", p.color));
/// assert_eq!(cs.compose(&[Style::props(Props { color: "red" }), "bold".into()]), "text-red bold");
/// ```
pub trait Render<P> {
    fn render(&self, props: &P) -> String;
}

impl<P, F> Render<P> for F
where
    F: Fn(&P) -> String,
{
    fn render(&self, props: &P) -> String {
        self(props)
    }
}

/// A renderer that can fail.
///
/// The error is returned to the caller of
/// [`Composer::try_compose`](crate::Composer::try_compose) unchanged.
pub trait TryRender<P> {
    type Error;

    fn try_render(&self, props: &P) -> Result<String, Self::Error>;
}

impl<P, F, E> TryRender<P> for F
where
    F: Fn(&P) -> Result<String, E>,
{
    type Error = E;

    fn try_render(&self, props: &P) -> Result<String, E> {
        self(props)
    }
}
