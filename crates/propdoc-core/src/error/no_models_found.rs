use super::Error;

/// Error when the models directory is missing or holds no model files.
#[derive(Debug)]
pub(super) struct NoModelsFoundError;

impl std::error::Error for NoModelsFoundError {}

impl core::fmt::Display for NoModelsFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("No models found.")
    }
}

impl Error {
    /// Creates a no-models-found error.
    pub fn no_models_found() -> Error {
        Error::from(super::ErrorKind::NoModelsFound(NoModelsFoundError))
    }

    /// Returns `true` if this error is a no-models-found error.
    pub fn is_no_models_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoModelsFound(_))
    }
}
