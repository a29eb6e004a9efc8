use super::Error;

/// Error when a model or action name is not declared in the schema.
///
/// Raised before any driver call is attempted for the branch.
#[derive(Debug)]
pub(super) struct SchemaLookupError {
    model: Box<str>,
    action: Option<Box<str>>,
}

impl std::error::Error for SchemaLookupError {}

impl core::fmt::Display for SchemaLookupError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.action {
            Some(action) => write!(
                f,
                "action `{}` is not declared on model `{}`",
                action, self.model
            ),
            None => write!(f, "model `{}` is not declared", self.model),
        }
    }
}

impl Error {
    /// Creates an error for an undeclared model.
    pub fn model_not_found(model: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::SchemaLookup(SchemaLookupError {
            model: model.into().into(),
            action: None,
        }))
    }

    /// Creates an error for an action not declared on `model`.
    pub fn action_not_found(model: impl Into<String>, action: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::SchemaLookup(SchemaLookupError {
            model: model.into().into(),
            action: Some(action.into().into()),
        }))
    }

    /// Returns `true` if this error is a schema lookup error.
    pub fn is_schema_lookup(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::SchemaLookup(_))
    }
}
