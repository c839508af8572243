use super::Error;
use std::path::{Path, PathBuf};

/// Error when a model class has no source file on disk.
#[derive(Debug)]
pub(super) struct ModelFileNotFoundError {
    model: Box<str>,
    path: PathBuf,
}

impl std::error::Error for ModelFileNotFoundError {}

impl core::fmt::Display for ModelFileNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "Could not find file for model {} (expected {}).",
            self.model,
            self.path.display()
        )
    }
}

impl Error {
    /// Creates a model-file-not-found error.
    pub fn model_file_not_found(model: impl Into<String>, path: impl AsRef<Path>) -> Error {
        Error::from(super::ErrorKind::ModelFileNotFound(ModelFileNotFoundError {
            model: model.into().into(),
            path: path.as_ref().to_path_buf(),
        }))
    }

    /// Returns `true` if this error is a model-file-not-found error.
    pub fn is_model_file_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ModelFileNotFound(_))
    }
}
