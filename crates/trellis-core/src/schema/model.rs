use super::Action;
use crate::{Error, Result};

use serde::Deserialize;

/// A named table together with the actions declared on it.
#[derive(Debug, Clone, Deserialize)]
pub struct Model {
    /// Name of the model
    pub name: String,

    /// Actions declared on the model, in declaration order
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            actions: vec![],
        }
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn action(&self, name: &str) -> Result<&Action> {
        self.actions
            .iter()
            .find(|action| action.name == name)
            .ok_or_else(|| Error::action_not_found(&self.name, name))
    }
}
