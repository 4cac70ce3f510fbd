mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use std::path::Path;

use crate::models::FsEntry;

pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Immediate entries of `dir`, in the order the host lists them.
    fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>>;
}
