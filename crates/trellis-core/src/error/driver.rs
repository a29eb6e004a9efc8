use super::Error;

use std::error::Error as StdError;

/// Failure reported by a [`Driver`](crate::Driver) while running an action,
/// e.g. a constraint violation or a lost connection.
///
/// Never retried by the engine. The wrapped error reaches the caller as-is.
#[derive(Debug)]
pub(super) struct DriverError {
    source: Box<dyn StdError + Send + Sync>,
}

impl StdError for DriverError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.source)
    }
}

impl core::fmt::Display for DriverError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let first: &(dyn StdError + 'static) = &*self.source;

        for (i, err) in std::iter::successors(Some(first), |&err| err.source()).enumerate() {
            if i > 0 {
                f.write_str(": ")?;
            }
            write!(f, "{err}")?;
        }

        Ok(())
    }
}

impl Error {
    /// Wraps a storage failure raised while executing an action.
    pub fn driver(err: impl StdError + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Driver(DriverError {
            source: Box::new(err),
        }))
    }

    /// Returns `true` if the driver failed to run an action.
    pub fn is_driver(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Driver(_))
    }
}
