use crate::stmt::{Input, Row};

/// A single action invocation handed to the driver.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// Model the action is declared on
    pub model: String,

    /// Action to run
    pub action: String,

    /// Column values, one record or a batch
    pub input: Input,

    /// Filters and overrides independent of `input`
    pub constraints: Row,
}

impl Operation {
    pub fn new(model: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            action: action.into(),
            input: Input::default(),
            constraints: Row::new(),
        }
    }

    /// Returns `true` if this invokes `action` on `model`.
    pub fn is(&self, model: &str, action: &str) -> bool {
        self.model == model && self.action == action
    }
}
