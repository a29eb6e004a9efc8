use super::Model;
use crate::{Error, Result};

use std::collections::HashSet;

/// Checks the registry invariants lookups rely on: names are non-empty and
/// unique per scope. Link targets are left to traversal.
pub(super) fn apply(models: &[Model]) -> Result<()> {
    let mut model_names = HashSet::new();

    for model in models {
        if model.name.is_empty() {
            return Err(Error::invalid_schema("model name must not be empty"));
        }

        if !model_names.insert(&model.name[..]) {
            return Err(Error::invalid_schema(format!(
                "duplicate model `{}`",
                model.name
            )));
        }

        let mut action_names = HashSet::new();

        for action in &model.actions {
            if action.name.is_empty() {
                return Err(Error::invalid_schema(format!(
                    "model `{}` declares an action with an empty name",
                    model.name
                )));
            }

            if !action_names.insert(&action.name[..]) {
                return Err(Error::invalid_schema(format!(
                    "duplicate action `{}` on model `{}`",
                    action.name, model.name
                )));
            }
        }
    }

    Ok(())
}
