use std::path::PathBuf;

use gloss_core::ProfileError;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Invalid variant pattern on line {line}: {source}")]
    InvalidPattern {
        line: usize,
        #[source]
        source: ProfileError,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
