use super::Error;

/// Error when the located migrations yield no recognizable column.
#[derive(Debug)]
pub(super) struct NoColumnsFoundError;

impl std::error::Error for NoColumnsFoundError {}

impl core::fmt::Display for NoColumnsFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("No columns found in migration files.")
    }
}

impl Error {
    /// Creates a no-columns-found error.
    pub fn no_columns_found() -> Error {
        Error::from(super::ErrorKind::NoColumnsFound(NoColumnsFoundError))
    }

    /// Returns `true` if this error is a no-columns-found error.
    pub fn is_no_columns_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoColumnsFound(_))
    }
}
