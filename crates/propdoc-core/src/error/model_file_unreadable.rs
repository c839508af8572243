use super::Error;
use std::path::{Path, PathBuf};

/// Error when a model source file exists but cannot be read.
#[derive(Debug)]
pub(super) struct ModelFileUnreadableError {
    path: PathBuf,
    source: std::io::Error,
}

impl std::error::Error for ModelFileUnreadableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl core::fmt::Display for ModelFileUnreadableError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "Could not read model file {}: {}",
            self.path.display(),
            self.source
        )
    }
}

impl Error {
    /// Creates a model-file-unreadable error wrapping the I/O failure.
    pub fn model_file_unreadable(path: impl AsRef<Path>, source: std::io::Error) -> Error {
        Error::from(super::ErrorKind::ModelFileUnreadable(
            ModelFileUnreadableError {
                path: path.as_ref().to_path_buf(),
                source,
            },
        ))
    }

    /// Returns `true` if this error is a model-file-unreadable error.
    pub fn is_model_file_unreadable(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ModelFileUnreadable(_))
    }
}
