//! Classnames - compose class-name strings from nested, conditional styles.
//!
//! # Example
//! ```
//! use classnames::prelude::*;
//!
//! struct Props {
//!     color: &'static str,
//! }
//!
//! let cs = Composer::new(|p: &Props| format!("text-{}", p.color));
//! let active = true;
//!
//! let classes = cs.compose(&[
//!     "btn".into(),
//!     Style::from(vec![Some("btn-lg"), None]),
//!     if active { "active".into() } else { Style::Skip },
//!     Style::props(Props { color: "red" }),
//! ]);
//! assert_eq!(classes, "btn btn-lg active text-red");
//! ```
//!
//! With the `macros` feature (on by default) the same call reads:
//!
//! ```ignore
//! cs!(cs; "btn", vec![Some("btn-lg"), None], "active" => active, Style::props(props))
//! ```

// `cs!` expands to `::classnames::...` paths, including inside this crate.
extern crate self as classnames;

pub mod prelude {
    // Core types
    pub use classnames_core::{create, flatten, Composer, Render, Style, StyleList, TryRender};

    // Macros
    #[cfg(feature = "macros")]
    pub use classnames_macros::cs;

    // JSON boundary
    #[cfg(feature = "json")]
    pub use classnames_core::json::{
        classify, compose_value, try_compose_value, utility_classes, JsonProps, RenderError,
        UtilityRenderer,
    };
}

// Re-export sub-crates
pub use classnames_core;
#[cfg(feature = "macros")]
pub use classnames_macros;
