use super::Error;

/// Error when the model source has neither a generated docblock to replace
/// nor a class declaration to insert one in front of.
#[derive(Debug)]
pub(super) struct DocblockReplaceFailedError {
    model: Box<str>,
}

impl std::error::Error for DocblockReplaceFailedError {}

impl core::fmt::Display for DocblockReplaceFailedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Failed to update docblocks for model {}.", self.model)
    }
}

impl Error {
    /// Creates a docblock-replace-failed error.
    pub fn docblock_replace_failed(model: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DocblockReplaceFailed(
            DocblockReplaceFailedError {
                model: model.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a docblock-replace-failed error.
    pub fn is_docblock_replace_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DocblockReplaceFailed(_))
    }
}
