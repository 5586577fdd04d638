//! Procedural macros for classnames.

use proc_macro::TokenStream;

mod cs;

/// The `cs!` macro for composing class names with a `Composer`.
///
/// The composer comes first, followed by a semicolon and the arguments.
/// Each argument is converted with `classnames::classnames_core::Style::from`
/// (only the `classnames` facade needs to be a dependency), and an
/// argument written as `style => condition` is skipped unless the condition
/// holds.
///
/// # Example
/// ```ignore
/// let cs = Composer::new(|p: &Props| p.to_class());
///
/// // Static classes
/// cs!(cs; "flex", "items-center", "gap-4")
///
/// // Conditional classes and style properties
/// cs!(cs; "px-4 py-2", "bg-blue-500" => is_active, Style::props(extra))
///
/// // Options and nested lists
/// cs!(cs; some_class, vec!["a", "b"], None::<&str>)
/// ```
#[proc_macro]
pub fn cs(input: TokenStream) -> TokenStream {
    cs::cs_impl(input)
}
