pub mod cli;
pub mod core;
pub mod error;
pub mod fs;
pub mod models;

use std::io::Write;
use std::path::Path;

use crate::fs::FileSystem;

/// Environment variable naming the log level; logging stays off when unset.
pub const LOG_ENV: &str = "DIRTREE_LOG";

/// Name shown for a directory: its final path segment, or the whole path
/// when there is none (`/`, `.`).
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.as_os_str().to_string_lossy().into_owned())
}

/// Build the tree for `start` and render it to `writer`.
///
/// The whole tree is built before anything is written, so a failure leaves
/// `writer` untouched.
pub fn run<F: FileSystem, W: Write>(fs: &F, start: &Path, writer: &mut W) -> anyhow::Result<()> {
    let root = core::build_tree(fs, start)?;
    core::write_tree(writer, &root)?;
    writer.flush()?;
    Ok(())
}
