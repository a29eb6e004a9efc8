mod action;
pub use action::Action;

mod builder;
pub use builder::Builder;

mod link;
pub use link::{Extracted, Link, PrepareMode};

mod model;
pub use model::Model;

mod verify;

use crate::{Error, Result};

use indexmap::IndexMap;
use serde::Deserialize;

/// Registry of every model and its actions, built once at load time.
///
/// Deserializes from a list of models.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(try_from = "Vec<Model>")]
pub struct Schema {
    models: IndexMap<String, Model>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Looks up a model by name.
    pub fn model(&self, name: &str) -> Result<&Model> {
        self.models
            .get(name)
            .ok_or_else(|| Error::model_not_found(name))
    }

    /// Looks up an action of a model by name.
    pub fn action(&self, model: &str, action: &str) -> Result<&Action> {
        self.model(model)?.action(action)
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> + '_ {
        self.models.values()
    }
}

impl TryFrom<Vec<Model>> for Schema {
    type Error = Error;

    fn try_from(models: Vec<Model>) -> Result<Self> {
        let mut builder = Schema::builder();
        for model in models {
            builder.model(model);
        }
        builder.build()
    }
}
