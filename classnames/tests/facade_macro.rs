//! `cs!` used with nothing but the `classnames` facade in scope.
//!
//! The empty `classnames_core` module shadows the sub-crate, so any expansion
//! that names `classnames_core` directly fails to compile here.

#![cfg(feature = "macros")]

use classnames::prelude::{cs, create, Style};

#[allow(dead_code)]
mod classnames_core {}

fn shout(p: &&str) -> String {
    p.to_uppercase()
}

#[test]
fn test_cs_through_facade_only() {
    let cs = create(shout);
    let active = false;
    assert_eq!(
        cs!(cs; "a", Style::props("b"), "c" => active, vec![Some("d"), None]),
        "a B d"
    );
}

#[test]
fn test_empty_call_through_facade_only() {
    let cs = create(shout);
    assert_eq!(cs!(cs;), "");
}
