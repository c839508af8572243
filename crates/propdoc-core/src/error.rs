mod adhoc;
mod docblock_replace_failed;
mod model_file_not_found;
mod model_file_unreadable;
mod model_not_found;
mod no_columns_found;
mod no_migrations_found;
mod no_models_found;
mod table_name_unresolvable;

use adhoc::AdhocError;
use docblock_replace_failed::DocblockReplaceFailedError;
use model_file_not_found::ModelFileNotFoundError;
use model_file_unreadable::ModelFileUnreadableError;
use model_not_found::ModelNotFoundError;
use no_columns_found::NoColumnsFoundError;
use no_migrations_found::NoMigrationsFoundError;
use no_models_found::NoModelsFoundError;
use std::sync::Arc;
use table_name_unresolvable::TableNameUnresolvableError;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while synthesizing model properties.
///
/// Every stage of a run reports its failure through this type. The CLI maps
/// any `Error` to a non-zero exit status.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        let inner = Arc::get_mut(&mut err.inner).expect("consequent error must not be shared");
        assert!(
            inner.cause.is_none(),
            "consequent error must not already have a cause"
        );
        inner.cause = Some(self);
        err
    }

    /// Creates an ad-hoc error from format arguments. Used by [`err!`] and
    /// [`bail!`].
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(args)))
    }

    /// Returns the innermost error of the context chain.
    pub fn root(&self) -> &Error {
        self.chain().last().unwrap()
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            ErrorKind::ModelFileUnreadable(err) => Some(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    NoModelsFound(NoModelsFoundError),
    ModelNotFound(ModelNotFoundError),
    TableNameUnresolvable(TableNameUnresolvableError),
    NoMigrationsFound(NoMigrationsFoundError),
    NoColumnsFound(NoColumnsFoundError),
    ModelFileNotFound(ModelFileNotFoundError),
    ModelFileUnreadable(ModelFileUnreadableError),
    DocblockReplaceFailed(DocblockReplaceFailedError),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            NoModelsFound(err) => core::fmt::Display::fmt(err, f),
            ModelNotFound(err) => core::fmt::Display::fmt(err, f),
            TableNameUnresolvable(err) => core::fmt::Display::fmt(err, f),
            NoMigrationsFound(err) => core::fmt::Display::fmt(err, f),
            NoColumnsFound(err) => core::fmt::Display::fmt(err, f),
            ModelFileNotFound(err) => core::fmt::Display::fmt(err, f),
            ModelFileUnreadable(err) => core::fmt::Display::fmt(err, f),
            DocblockReplaceFailed(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind, cause: None }),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
