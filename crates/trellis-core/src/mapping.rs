//! Field-rename tables used to carry data from one action to the next.

use crate::stmt::{Input, Row, Value};

use indexmap::IndexMap;
use serde::Deserialize;

/// Source key of the sentinel entry that passes data through unchanged.
pub const ALL: &str = "ALL";

/// A directional, partial column mapping.
///
/// Unmapped source columns are dropped. A table containing the [`ALL`] key
/// passes the whole structure through instead, ignoring any other entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "IndexMap<String, String>")]
pub enum MappingTable {
    /// Pass the entire structure through unchanged
    All,

    /// Copy `source` columns into `target` columns
    Fields(IndexMap<String, String>),
}

impl MappingTable {
    /// An empty table; projecting through it never produces anything.
    pub fn new() -> Self {
        Self::Fields(IndexMap::new())
    }

    pub fn all() -> Self {
        Self::All
    }

    /// Adds a `source -> target` entry. Has no effect on an `All` table.
    pub fn field(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.insert(source, target);
        self
    }

    pub fn insert(&mut self, source: impl Into<String>, target: impl Into<String>) {
        let source = source.into();

        if source == ALL {
            *self = Self::All;
        } else if let Self::Fields(fields) = self {
            fields.insert(source, target.into());
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::All => false,
            Self::Fields(fields) => fields.is_empty(),
        }
    }

    /// Projects `row` through the table.
    ///
    /// A mapped value that is itself a record has its columns spliced into
    /// the result instead of being nested under the target name. Returns
    /// `None` when nothing was produced, meaning there is nothing to
    /// propagate.
    pub fn project(&self, row: &Row) -> Option<Row> {
        let fields = match self {
            Self::All => return Some(row.clone()),
            Self::Fields(fields) => fields,
        };

        let mut ret = Row::new();

        for (source, target) in fields {
            match row.get(source.as_str()) {
                Some(Value::Record(nested)) => ret.merge(nested),
                Some(value) => {
                    ret.insert(target.clone(), value.clone());
                }
                None => {}
            }
        }

        if ret.is_empty() {
            None
        } else {
            Some(ret)
        }
    }

    /// Projects every record of `input`.
    ///
    /// Batch elements keep their positions; an element that projects to
    /// nothing becomes an empty record. `None` if no element produced
    /// anything.
    pub fn project_input(&self, input: &Input) -> Option<Input> {
        match input {
            Input::Single(row) => self.project(row).map(Input::Single),
            Input::Batch(rows) => {
                if self.is_all() {
                    return Some(input.clone());
                }

                let projected: Vec<_> = rows.iter().map(|row| self.project(row)).collect();

                if projected.iter().all(Option::is_none) {
                    return None;
                }

                Some(Input::Batch(
                    projected
                        .into_iter()
                        .map(Option::unwrap_or_default)
                        .collect(),
                ))
            }
        }
    }
}

impl Default for MappingTable {
    fn default() -> Self {
        Self::new()
    }
}

impl From<IndexMap<String, String>> for MappingTable {
    fn from(fields: IndexMap<String, String>) -> Self {
        if fields.contains_key(ALL) {
            Self::All
        } else {
            Self::Fields(fields)
        }
    }
}

impl<S, T> FromIterator<(S, T)> for MappingTable
where
    S: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let mut ret = Self::new();
        for (source, target) in iter {
            ret.insert(source, target);
        }
        ret
    }
}
