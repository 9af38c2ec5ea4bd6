//! Diagnostic tree printer.
//!
//! Renders one line per key in in-order traversal, `"key [priority]"`,
//! indented by depth. Purely for eyeballing tree shape while debugging;
//! nothing in the core depends on it.

use std::fmt;

use crate::treap::{LEFT, Node, RIGHT, Treap};

impl<K: fmt::Display> fmt::Display for Treap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write_in_order(self.root.as_deref(), 0, f);
    }
}

fn write_in_order<K: fmt::Display>(
    node: Option<&Node<K>>,
    depth: usize,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let Some(node) = node else {
        return Ok(());
    };
    write_in_order(node.links[LEFT].as_deref(), depth + 1, f)?;
    writeln!(f, "{:indent$}{} [{}]", "", node.key, node.priority, indent = depth)?;
    return write_in_order(node.links[RIGHT].as_deref(), depth + 1, f);
}
