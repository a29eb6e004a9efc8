use indexmap::IndexMap;
use trellis_core::{
    stmt::{Input, Value},
    Error, Result,
};

/// Caller-supplied data for specific model actions, scoped to one
/// resolution.
///
/// When the engine reaches an action with an entry, the entry is merged over
/// the computed input: a record once, a list of records once per element,
/// running the action for each. An entry applies once per branch of the
/// resolution tree; it is not seen again below the call that used it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Overrides {
    entries: IndexMap<String, IndexMap<String, Value>>,

    /// Entries pulled out of a batch input, one slot per batch element.
    /// Resolved to plain entries when the output rows are split into their
    /// own subtrees.
    per_row: IndexMap<String, IndexMap<String, Vec<Option<Value>>>>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entry for `model.action`, replacing any previous one.
    ///
    /// The shape is checked when the entry is used; anything but a record
    /// or a list of records fails that branch with a shape mismatch.
    pub fn insert(
        &mut self,
        model: impl Into<String>,
        action: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.entries
            .entry(model.into())
            .or_default()
            .insert(action.into(), value.into());
        self
    }

    pub fn with(
        mut self,
        model: impl Into<String>,
        action: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.insert(model, action, value);
        self
    }

    pub fn get(&self, model: &str, action: &str) -> Option<&Value> {
        self.entries.get(model)?.get(action)
    }

    pub fn contains(&self, model: &str, action: &str) -> bool {
        self.get(model, action).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.per_row.is_empty()
    }

    /// Sets a positional entry for `model.action`: output row `i` of the
    /// current call sees `values[i]` only.
    pub(crate) fn insert_per_row(
        &mut self,
        model: impl Into<String>,
        action: impl Into<String>,
        values: Vec<Option<Value>>,
    ) {
        self.per_row
            .entry(model.into())
            .or_default()
            .insert(action.into(), values);
    }

    /// The plain entries only, for calls that are not tied to an output row.
    pub(crate) fn shared(&self) -> Overrides {
        Overrides {
            entries: self.entries.clone(),
            per_row: IndexMap::new(),
        }
    }

    /// One scope per output row, each holding the plain entries plus that
    /// row's slot of every positional entry.
    ///
    /// Fails when a positional entry does not have exactly one slot per row.
    pub(crate) fn split(&self, rows: usize) -> Result<Vec<Overrides>> {
        for (model, actions) in &self.per_row {
            for (action, values) in actions {
                if values.len() != rows {
                    return Err(Error::shape_mismatch(format!(
                        "override for `{model}.{action}` came from a batch of {} records, but the action returned {rows} rows",
                        values.len()
                    )));
                }
            }
        }

        Ok((0..rows)
            .map(|i| {
                let mut scope = self.shared();

                for (model, actions) in &self.per_row {
                    for (action, values) in actions {
                        if let Some(value) = &values[i] {
                            scope.insert(model, action, value.clone());
                        }
                    }
                }

                scope
            })
            .collect())
    }

    /// Removes the entry for `model.action` and checks its shape.
    pub(crate) fn take(&mut self, model: &str, action: &str) -> Result<Option<Input>> {
        let Some(actions) = self.entries.get_mut(model) else {
            return Ok(None);
        };

        let Some(value) = actions.shift_remove(action) else {
            return Ok(None);
        };

        if actions.is_empty() {
            self.entries.shift_remove(model);
        }

        let kind = value.kind_name();

        Input::try_from(value).map(Some).map_err(|_| {
            Error::shape_mismatch(format!(
                "override for `{model}.{action}` must be a record or a list of records, found {kind}"
            ))
        })
    }
}
