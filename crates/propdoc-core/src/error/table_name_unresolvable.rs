use super::Error;

/// Error when a resolved model's table name cannot be determined.
///
/// This occurs when:
/// - The model source cannot be read
/// - The model declares `$table` with something other than a string literal
/// - The class name yields an empty table name
#[derive(Debug)]
pub(super) struct TableNameUnresolvableError {
    model: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for TableNameUnresolvableError {}

impl core::fmt::Display for TableNameUnresolvableError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "Could not determine table name for model {} ({}).",
            self.model, self.reason
        )
    }
}

impl Error {
    /// Creates a table-name-unresolvable error.
    pub fn table_name_unresolvable(model: impl Into<String>, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TableNameUnresolvable(
            TableNameUnresolvableError {
                model: model.into().into(),
                reason: reason.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a table-name-unresolvable error.
    pub fn is_table_name_unresolvable(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TableNameUnresolvable(_))
    }
}
