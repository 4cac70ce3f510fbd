/// A node of the rendered tree: a file or a directory with its children.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TreeNode {
    Leaf {
        name: String,
    },
    Directory {
        name: String,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn leaf(name: impl Into<String>) -> Self {
        TreeNode::Leaf { name: name.into() }
    }

    pub fn directory(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        TreeNode::Directory {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::Leaf { name } | TreeNode::Directory { name, .. } => name,
        }
    }

    /// Children in listing order; always empty for a leaf.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Leaf { .. } => &[],
            TreeNode::Directory { children, .. } => children.as_slice(),
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, TreeNode::Directory { .. })
    }

    /// Number of lines this node renders to, itself included.
    pub fn line_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(TreeNode::line_count)
            .sum::<usize>()
    }
}
