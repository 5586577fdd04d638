//! The class-name composer.

use crate::{flatten, Render, Style, TryRender};
use std::convert::Infallible;
use std::fmt;

/// Create a composer around `render`.
///
/// Shorthand for [`Composer::new`].
pub fn create<R>(render: R) -> Composer<R> {
    Composer::new(render)
}

/// Joins nested style arguments into one class-name string.
///
/// A composer holds nothing but its renderer. It is `Send` and `Sync`
/// whenever the renderer is, and every call is independent of the others.
/// The properties type is picked per call, so one renderer that accepts
/// several property types serves all of them.
#[derive(Clone)]
pub struct Composer<R> {
    render: R,
}

impl<R> Composer<R> {
    pub fn new(render: R) -> Self {
        Self { render }
    }

    pub fn renderer(&self) -> &R {
        &self.render
    }

    pub fn into_renderer(self) -> R {
        self.render
    }

    /// Compose `args` into a space-separated class string.
    ///
    /// Arguments are flattened depth-first. [`Style::Skip`] and empty tokens
    /// are dropped, properties are passed through the renderer, and the
    /// survivors are joined by single spaces in input order. Repeated tokens
    /// are all kept.
    ///
    /// ```
    /// use classnames_core::{Composer, Style};
    ///
    /// let cs = Composer::new(|_: &()| "custom".to_string());
    /// let args = [
    ///     Style::from(vec![Style::Skip, "bar".into(), Style::from(["baz"])]),
    ///     Style::from(vec![Some("foo"), None]),
    ///     Style::props(()),
    /// ];
    /// assert_eq!(cs.compose(&args), "bar baz foo custom");
    /// ```
    pub fn compose<P>(&self, args: &[Style<'_, P>]) -> String
    where
        R: Render<P>,
    {
        let joined = self.join(args, |props| {
            Ok::<_, Infallible>(self.render.render(props))
        });
        match joined {
            Ok(classes) => classes,
            Err(never) => match never {},
        }
    }

    /// Like [`compose`](Self::compose), with a renderer that can fail.
    ///
    /// Properties are rendered in flattened order. The first error is
    /// returned as is and no later properties are rendered.
    pub fn try_compose<P>(&self, args: &[Style<'_, P>]) -> Result<String, <R as TryRender<P>>::Error>
    where
        R: TryRender<P>,
    {
        self.join(args, |props| {
            self.render.try_render(props).map_err(|err| {
                tracing::debug!("style properties failed to render");
                err
            })
        })
    }

    fn join<P, E>(
        &self,
        args: &[Style<'_, P>],
        mut render: impl FnMut(&P) -> Result<String, E>,
    ) -> Result<String, E> {
        let mut classes = String::new();
        let mut count = 0usize;

        for leaf in flatten(args).filter(|leaf| !leaf.is_falsy()) {
            let rendered;
            let token: &str = match leaf {
                Style::Token(token) => token,
                Style::Properties(props) => {
                    rendered = render(props)?;
                    &rendered
                }
                // flatten never yields lists
                Style::Skip | Style::List(_) => continue,
            };
            if count > 0 {
                classes.push(' ');
            }
            classes.push_str(token);
            count += 1;
        }

        tracing::trace!(tokens = count, "composed class names");
        Ok(classes)
    }
}

impl<R> fmt::Debug for Composer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composer").finish_non_exhaustive()
    }
}
