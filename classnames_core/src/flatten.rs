//! Depth-first flattening of nested style lists.

use crate::Style;
use std::slice;

/// Flatten `args` into the leaf values they contain, depth-first and
/// left-to-right.
///
/// Lists never appear in the output. Nesting depth is bounded only by
/// memory: the traversal keeps its own stack instead of recursing.
pub fn flatten<'s, 'a, P>(args: &'s [Style<'a, P>]) -> Leaves<'s, 'a, P> {
    Leaves {
        stack: vec![args.iter()],
    }
}

/// Iterator returned by [`flatten`].
#[derive(Clone, Debug)]
pub struct Leaves<'s, 'a, P> {
    stack: Vec<slice::Iter<'s, Style<'a, P>>>,
}

impl<'s, 'a, P> Iterator for Leaves<'s, 'a, P> {
    type Item = &'s Style<'a, P>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(Style::List(items)) => self.stack.push(items.iter()),
                Some(leaf) => return Some(leaf),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

impl<'s, 'a, P> std::iter::FusedIterator for Leaves<'s, 'a, P> {}
