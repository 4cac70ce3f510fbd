use std::io::{self, Write};

use crate::models::TreeNode;

const LEAF_MARKER: &str = "|-- ";
const DIRECTORY_MARKER: &str = "+-- ";
const INDENT_STEP: &str = "    ";

/// Render `root` and everything below it, starting at column zero.
pub fn write_tree<W: Write>(writer: &mut W, root: &TreeNode) -> io::Result<()> {
    write_node(writer, root, "")
}

/// Write one line for `node` prefixed by `indent`, then each child one step deeper.
pub fn write_node<W: Write>(writer: &mut W, node: &TreeNode, indent: &str) -> io::Result<()> {
    match node {
        TreeNode::Leaf { name } => writeln!(writer, "{indent}{LEAF_MARKER}{name}"),
        TreeNode::Directory { name, children } => {
            writeln!(writer, "{indent}{DIRECTORY_MARKER}{name}")?;

            let child_indent = format!("{indent}{INDENT_STEP}");
            for child in children {
                write_node(writer, child, &child_indent)?;
            }
            Ok(())
        }
    }
}
