use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    /// The starting path is missing or is not a directory.
    #[error("Invalid directory path: {}", path.display())]
    InvalidArgument { path: PathBuf },
}
