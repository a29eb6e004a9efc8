use super::Error;

/// Error when an in-flight resolution is aborted through its context.
#[derive(Debug)]
pub(super) struct CancelledError {
    deadline: bool,
}

impl std::error::Error for CancelledError {}

impl core::fmt::Display for CancelledError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("operation cancelled")?;
        if self.deadline {
            f.write_str(": deadline exceeded")?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error for a resolution cancelled through its token.
    pub fn cancelled() -> Error {
        Error::from(super::ErrorKind::Cancelled(CancelledError { deadline: false }))
    }

    /// Creates an error for a resolution that ran past its deadline.
    pub fn deadline_exceeded() -> Error {
        Error::from(super::ErrorKind::Cancelled(CancelledError { deadline: true }))
    }

    /// Returns `true` if the resolution was cancelled, including by deadline.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Cancelled(_))
    }

    /// Returns `true` if the resolution ran past its deadline.
    pub fn is_deadline_exceeded(&self) -> bool {
        matches!(
            self.kind(),
            super::ErrorKind::Cancelled(CancelledError { deadline: true })
        )
    }
}
