//! The `cs!` macro for composing class names.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Expr, Token,
};

/// A single argument in the cs! macro, which can be:
/// - A simple expression converted with `Style::from`
/// - A conditional: `expr => condition`
enum CsItem {
    Simple(Expr),
    Conditional { style: Expr, condition: Expr },
}

impl Parse for CsItem {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let expr: Expr = input.parse()?;

        if input.peek(Token![=>]) {
            input.parse::<Token![=>]>()?;
            let condition: Expr = input.parse()?;
            Ok(CsItem::Conditional {
                style: expr,
                condition,
            })
        } else {
            Ok(CsItem::Simple(expr))
        }
    }
}

/// The full cs! input: a composer, a semicolon, then comma-separated items.
struct CsInput {
    composer: Expr,
    items: Vec<CsItem>,
}

impl Parse for CsInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let composer: Expr = input.parse()?;
        input.parse::<Token![;]>()?;

        let mut items = Vec::new();
        while !input.is_empty() {
            items.push(input.parse()?);

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(CsInput { composer, items })
    }
}

pub fn cs_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as CsInput);
    expand(input).into()
}

/// Items resolve through the `classnames` facade, which re-exports
/// `classnames_core`, so callers only need the facade as a dependency.
fn expand(input: CsInput) -> TokenStream2 {
    let CsInput { composer, items } = input;

    let args: Vec<TokenStream2> = items
        .into_iter()
        .map(|item| match item {
            CsItem::Simple(expr) => {
                quote! {
                    ::classnames::classnames_core::Style::from(#expr)
                }
            }
            CsItem::Conditional { style, condition } => {
                quote! {
                    if #condition {
                        ::classnames::classnames_core::Style::from(#style)
                    } else {
                        ::classnames::classnames_core::Style::Skip
                    }
                }
            }
        })
        .collect();

    quote! {
        (#composer).compose(&[#(#args),*])
    }
}
