use super::Error;

/// Error when a model name does not resolve under any configured namespace.
#[derive(Debug)]
pub(super) struct ModelNotFoundError {
    name: Box<str>,
}

impl std::error::Error for ModelNotFoundError {}

impl core::fmt::Display for ModelNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Model {} not found.", self.name)
    }
}

impl Error {
    /// Creates a model-not-found error for the name the user supplied.
    pub fn model_not_found(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ModelNotFound(ModelNotFoundError {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is a model-not-found error.
    pub fn is_model_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ModelNotFound(_))
    }
}
