//! Tree display: termtree conversion and the flat indented listing.

use termtree::Tree;

use crate::domain::Employee;

pub trait OrgTreeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl OrgTreeConvert for Employee {
    fn to_tree_string(&self) -> Tree<String> {
        let root = self.to_string();

        // Recursively construct the children
        let leaves: Vec<_> = self
            .children
            .iter()
            .map(OrgTreeConvert::to_tree_string)
            .collect();

        Tree::new(root).with_leaves(leaves)
    }
}

/// Flat pre-order listing: `depth * indent_width` spaces, then `(id) name`.
pub fn indented_listing(root: &Employee, indent_width: usize) -> String {
    let mut out = String::new();
    write_node(root, 0, indent_width, &mut out);
    out
}

fn write_node(node: &Employee, depth: usize, indent_width: usize, out: &mut String) {
    out.push_str(&" ".repeat(depth * indent_width));
    out.push_str(&node.to_string());
    out.push('\n');
    for child in &node.children {
        write_node(child, depth + 1, indent_width, out);
    }
}
