use super::Error;

/// Error when data does not have the shape an operation requires.
///
/// This occurs when:
/// - An override is neither a record nor a list of records
/// - Two batches of different length are merged position by position
#[derive(Debug)]
pub(super) struct ShapeMismatchError {
    message: Box<str>,
}

impl std::error::Error for ShapeMismatchError {}

impl core::fmt::Display for ShapeMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "shape mismatch: {}", self.message)
    }
}

impl Error {
    /// Creates a shape mismatch error.
    pub fn shape_mismatch(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ShapeMismatch(ShapeMismatchError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a shape mismatch error.
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ShapeMismatch(_))
    }
}
