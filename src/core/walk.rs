use std::path::Path;

use tracing::{debug, warn};

use crate::display_name;
use crate::error::BuildError;
use crate::fs::FileSystem;
use crate::models::{EntryKind, FsEntry, TreeNode};

/// Build the tree rooted at `dir`.
///
/// Fails with [`BuildError::InvalidArgument`] when `dir` is missing or is not a
/// directory. Nested directories that cannot be listed are built with no
/// children.
pub fn build_tree<F: FileSystem>(fs: &F, dir: &Path) -> Result<TreeNode, BuildError> {
    if !fs.exists(dir) || !fs.is_dir(dir) {
        return Err(BuildError::InvalidArgument {
            path: dir.to_path_buf(),
        });
    }

    Ok(build_directory(fs, dir, display_name(dir)))
}

fn build_directory<F: FileSystem>(fs: &F, dir: &Path, name: String) -> TreeNode {
    debug!(dir = %dir.display(), "listing directory");

    let entries = match fs.read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(dir = %dir.display(), error = %err, "cannot list directory, treating it as empty");
            Vec::new()
        }
    };

    let children = entries
        .iter()
        .map(|entry| build_node(fs, entry))
        .collect();

    TreeNode::directory(name, children)
}

fn build_node<F: FileSystem>(fs: &F, entry: &FsEntry) -> TreeNode {
    match entry.kind {
        EntryKind::Directory => build_directory(fs, &entry.path, entry.name.clone()),
        EntryKind::File => TreeNode::leaf(entry.name.clone()),
    }
}
