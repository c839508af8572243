use super::Error;

/// Error when no migration creates or alters the model's table.
#[derive(Debug)]
pub(super) struct NoMigrationsFoundError {
    table: Box<str>,
}

impl std::error::Error for NoMigrationsFoundError {}

impl core::fmt::Display for NoMigrationsFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "No migration files found for table {}.", self.table)
    }
}

impl Error {
    /// Creates a no-migrations-found error for the given table.
    pub fn no_migrations_found(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NoMigrationsFound(NoMigrationsFoundError {
            table: table.into().into(),
        }))
    }

    /// Returns `true` if this error is a no-migrations-found error.
    pub fn is_no_migrations_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoMigrationsFound(_))
    }
}
