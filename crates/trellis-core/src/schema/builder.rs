use super::{verify, Model, Schema};
use crate::Result;

use indexmap::IndexMap;

#[derive(Debug, Default)]
pub struct Builder {
    /// Models in registration order
    models: Vec<Model>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&mut self, model: Model) -> &mut Self {
        self.models.push(model);
        self
    }

    pub fn build(&mut self) -> Result<Schema> {
        let models = std::mem::take(&mut self.models);

        verify::apply(&models)?;

        let models: IndexMap<_, _> = models
            .into_iter()
            .map(|model| (model.name.clone(), model))
            .collect();

        Ok(Schema { models })
    }
}
