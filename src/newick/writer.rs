//! Newick serialization for [Tree].

use crate::model::{Tree, TreeIndex};
use crate::parser::utils::escape_label;
use std::io::{self, Write};

/// Returns the Newick representation of this tree with closing semicolon.
///
/// Internal vertex names are written after the closing parenthesis of their
/// child list; labels are escaped (quoted or underscored) as needed. The
/// root's branch length, if any, is not written.
///
/// Output is fully determined by the tree structure and child order, so two
/// identical trees serialize to byte-identical strings.
///
/// # Example
/// ```
/// use phylolabel::newick::{parse_str, to_newick};
///
/// let tree = parse_str("((A:1,B:2)AB:3,C:4);").unwrap();
/// assert_eq!(to_newick(&tree), "((A:1,B:2)AB:3,C:4);");
/// ```
pub fn to_newick(tree: &Tree) -> String {
    let mut newick = String::new();
    if tree.is_root_set() {
        build_newick(tree, &mut newick, tree.root_index());
    }
    newick.push(';');
    newick
}

/// Writes the tree in Newick format followed by a newline.
pub fn write_newick<W: Write>(writer: &mut W, tree: &Tree) -> io::Result<()> {
    writeln!(writer, "{}", to_newick(tree))
}

/// Recursive helper for building the Newick string.
fn build_newick(tree: &Tree, newick: &mut String, index: TreeIndex) {
    let vertex = &tree[index];

    if !vertex.is_leaf() {
        newick.push('(');
        for (i, &child) in vertex.children().iter().enumerate() {
            if i > 0 {
                newick.push(',');
            }
            build_newick(tree, newick, child);
        }
        newick.push(')');
    }

    if let Some(name) = vertex.name() {
        newick.push_str(&escape_label(name));
    }

    if index != tree.root_index() {
        if let Some(branch_length) = vertex.branch_length() {
            newick.push(':');
            newick.push_str(&branch_length.to_string());
        }
    }
}
