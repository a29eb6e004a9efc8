use super::Error;

/// Error when nested resolution goes deeper than the configured limit.
#[derive(Debug)]
pub(super) struct RecursionLimitError {
    limit: usize,
    model: Box<str>,
    action: Box<str>,
}

impl std::error::Error for RecursionLimitError {}

impl core::fmt::Display for RecursionLimitError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "recursion limit of {} exceeded while resolving `{}.{}`",
            self.limit, self.model, self.action
        )
    }
}

impl Error {
    /// Creates a recursion limit error for the call that crossed `limit`.
    pub fn recursion_limit(limit: usize, model: &str, action: &str) -> Error {
        Error::from(super::ErrorKind::RecursionLimit(RecursionLimitError {
            limit,
            model: model.into(),
            action: action.into(),
        }))
    }

    /// Returns `true` if this error is a recursion limit error.
    pub fn is_recursion_limit(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RecursionLimit(_))
    }
}
