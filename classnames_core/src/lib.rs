//! Core types for composing class-name strings.
//!
//! A [`Composer`] flattens nested [`Style`] arguments, drops empty values,
//! renders style properties through a caller-supplied renderer and joins the
//! result with single spaces.

pub mod composer;
pub mod flatten;
pub mod render;
pub mod style;

#[cfg(feature = "json")]
pub mod json;

pub use composer::*;
pub use flatten::*;
pub use render::*;
pub use style::*;
