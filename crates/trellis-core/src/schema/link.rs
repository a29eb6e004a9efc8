use crate::mapping::MappingTable;
use crate::shape::Dimension;
use crate::stmt::{Input, Row, Value};

use serde::Deserialize;

/// Connects an action to an action on another model.
///
/// Used in two positions. As a *prepare*, the target runs before the
/// action and its output feeds the action's input. As a *nextpage*, the
/// target runs once per output row and its reshaped output is attached to
/// that row under [`Link::attachment_key`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Link {
    /// Target model name
    pub model: String,

    /// Target action name
    pub action: String,

    /// Maps the current data onto the target's input
    #[serde(default)]
    pub input: MappingTable,

    /// Maps the current data onto the target's constraints
    #[serde(default)]
    pub constraints: MappingTable,

    /// Attachment key for nextpages. On a prepare, names the sub-structure
    /// of the input that is handed to the target as a batch.
    #[serde(default)]
    pub marker: Option<String>,

    /// Reshaping applied to the target's rows before they are attached
    #[serde(default)]
    pub dimension: Dimension,

    /// How a prepare's rows are folded into the input
    #[serde(default)]
    pub mode: PrepareMode,
}

/// Sub-structure removed from an input by [`Link::extract`].
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted {
    /// Found under the marker of a single record
    Single(Value),

    /// One entry per batch element; `None` where the element had no marker
    Batch(Vec<Option<Value>>),
}

/// Merge policy for the rows returned by a prepare.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrepareMode {
    /// Look up one reference row and merge it into the input, then continue
    /// with the next prepare.
    #[default]
    One,

    /// Fetch a list that becomes the batch of things to act on. The input
    /// is reset to the caller's data, one element per fetched row, and no
    /// further prepares run.
    FanOut,
}

impl Link {
    pub fn new(model: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            action: action.into(),
            input: MappingTable::new(),
            constraints: MappingTable::new(),
            marker: None,
            dimension: Dimension::Default,
            mode: PrepareMode::One,
        }
    }

    /// Maps input column `source` to `target` on the target action.
    pub fn map_input(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.input.insert(source, target);
        self
    }

    /// Maps column `source` to the target's constraint `target`.
    pub fn map_constraint(
        mut self,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        self.constraints.insert(source, target);
        self
    }

    pub fn with_input(mut self, input: MappingTable) -> Self {
        self.input = input;
        self
    }

    pub fn with_constraints(mut self, constraints: MappingTable) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    pub fn with_dimension(mut self, dimension: Dimension) -> Self {
        self.dimension = dimension;
        self
    }

    pub fn with_mode(mut self, mode: PrepareMode) -> Self {
        self.mode = mode;
        self
    }

    /// The marker, or the empty string when none is set.
    pub fn marker(&self) -> &str {
        self.marker.as_deref().unwrap_or_default()
    }

    /// Key the target's results are attached under: the marker, or
    /// `<model>_<action>`.
    pub fn attachment_key(&self) -> String {
        match self.marker() {
            "" => format!("{}_{}", self.model, self.action),
            marker => marker.to_string(),
        }
    }

    /// Input for the target, projected from `current`.
    pub fn propagate_input(&self, current: &Input) -> Option<Input> {
        self.input.project_input(current)
    }

    /// Constraints for the target, projected from the first record of
    /// `current`.
    pub fn propagate_constraints(&self, current: &Input) -> Option<Row> {
        current
            .rows()
            .first()
            .and_then(|row| self.constraints.project(row))
    }

    /// Removes the marker sub-structure from `input` and returns it.
    ///
    /// For a batch, each element keeps its own sub-structure, by position.
    /// Returns `None` when there is no marker or no record carries it. The
    /// shape of the returned values is not checked here.
    pub fn extract(&self, input: &mut Input) -> Option<Extracted> {
        let marker = self.marker();

        if marker.is_empty() {
            return None;
        }

        match input {
            Input::Single(row) => row.shift_remove(marker).map(Extracted::Single),
            Input::Batch(rows) => {
                let values: Vec<_> = rows.iter_mut().map(|row| row.shift_remove(marker)).collect();

                if values.iter().all(Option::is_none) {
                    return None;
                }

                Some(Extracted::Batch(values))
            }
        }
    }
}
