mod adhoc;
mod cancelled;
mod driver;
mod empty_result;
mod invalid_schema;
mod recursion_limit;
mod schema_lookup;
mod shape_mismatch;

use adhoc::AdhocError;
use cancelled::CancelledError;
use driver::DriverError;
use empty_result::EmptyResultError;
use invalid_schema::InvalidSchemaError;
use recursion_limit::RecursionLimitError;
use schema_lookup::SchemaLookupError;
use shape_mismatch::ShapeMismatchError;
use std::sync::Arc;

/// Returns early with an ad-hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while resolving a model action.
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
    /// Wraps this error in a higher-level description, e.g. which call
    /// failed. The new description is shown first, the original last.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.wrap(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn wrap(self, outer: Error) -> Error {
        let kind = match Arc::try_unwrap(outer.inner) {
            Ok(ErrorInner { kind, cause: None }) => kind,
            // The outer error is shared or already chained; keep its message only.
            Ok(inner) => ErrorKind::Adhoc(AdhocError::new(Error::from(inner).to_string())),
            Err(shared) => ErrorKind::Adhoc(AdhocError::new(Error { inner: shared }.to_string())),
        };

        Error::from(ErrorInner {
            kind,
            cause: Some(self),
        })
    }

    /// This error followed by each error it wraps, outermost first.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        std::iter::successors(Some(self), |&err| err.inner.cause.as_ref())
    }

    /// Returns the innermost error of the context chain.
    pub fn root(&self) -> &Error {
        self.chain().last().unwrap_or(self)
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            ErrorKind::Driver(err) => Some(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        for (i, err) in self.chain().enumerate() {
            if i > 0 {
                f.write_str(": ")?;
            }
            core::fmt::Display::fmt(err.kind().as_display(), f)?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if f.alternate() {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        } else {
            core::fmt::Display::fmt(self, f)
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    Cancelled(CancelledError),
    Driver(DriverError),
    EmptyResult(EmptyResultError),
    InvalidSchema(InvalidSchemaError),
    RecursionLimit(RecursionLimitError),
    SchemaLookup(SchemaLookupError),
    ShapeMismatch(ShapeMismatchError),
}

impl ErrorKind {
    fn as_display(&self) -> &dyn core::fmt::Display {
        match self {
            Self::Anyhow(err) => err,
            Self::Adhoc(err) => err,
            Self::Cancelled(err) => err,
            Self::Driver(err) => err,
            Self::EmptyResult(err) => err,
            Self::InvalidSchema(err) => err,
            Self::RecursionLimit(err) => err,
            Self::SchemaLookup(err) => err,
            Self::ShapeMismatch(err) => err,
        }
    }
}

impl From<ErrorInner> for Error {
    fn from(inner: ErrorInner) -> Error {
        Error {
            inner: Arc::new(inner),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::from(ErrorInner { kind, cause: None })
    }
}

/// Lets drivers built on `anyhow` use `?` directly.
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        anyhow::Error::from(err).into()
    }
}

/// Anything usable as context for an [`Error`].
pub trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for &str {
    fn into_error(self) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(self)))
    }
}

impl IntoError for String {
    fn into_error(self) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(self)))
    }
}
