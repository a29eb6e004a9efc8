use super::{Row, RowSet, Value};
use crate::{Error, Result};

/// Data handed to an action: one record, or a batch of records.
///
/// Every consumer branches on the variant; a batch is never treated as a
/// record or the other way around.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Object-shaped request
    Single(Row),

    /// Batch request, e.g. "insert N children"
    Batch(RowSet),
}

impl Input {
    pub fn is_single(&self) -> bool {
        matches!(self, Self::Single(_))
    }

    pub fn is_batch(&self) -> bool {
        matches!(self, Self::Batch(_))
    }

    /// The records of this input. A single record is a one-element slice.
    pub fn rows(&self) -> &[Row] {
        match self {
            Self::Single(row) => std::slice::from_ref(row),
            Self::Batch(rows) => rows,
        }
    }

    pub fn into_rows(self) -> RowSet {
        match self {
            Self::Single(row) => vec![row],
            Self::Batch(rows) => rows,
        }
    }

    /// Overlays `other` onto `self`, right-biased per key.
    ///
    /// A single record is applied to every element of a batch; two batches
    /// are paired by position and must have the same length.
    pub fn merge(self, other: &Input) -> Result<Input> {
        Ok(match (self, other) {
            (Self::Single(base), Self::Single(overlay)) => Self::Single(base.merged(overlay)),
            (Self::Single(base), Self::Batch(overlay)) => Self::Batch(
                overlay
                    .iter()
                    .map(|row| base.clone().merged(row))
                    .collect(),
            ),
            (Self::Batch(base), Self::Single(overlay)) => Self::Batch(
                base.into_iter()
                    .map(|row| row.merged(overlay))
                    .collect(),
            ),
            (Self::Batch(base), Self::Batch(overlay)) => {
                if base.len() != overlay.len() {
                    return Err(Error::shape_mismatch(format!(
                        "cannot merge a batch of {} rows with a batch of {} rows",
                        base.len(),
                        overlay.len()
                    )));
                }

                Self::Batch(
                    base.into_iter()
                        .zip(overlay)
                        .map(|(row, overlay)| row.merged(overlay))
                        .collect(),
                )
            }
        })
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::Single(Row::new())
    }
}

impl From<Row> for Input {
    fn from(row: Row) -> Self {
        Self::Single(row)
    }
}

impl From<RowSet> for Input {
    fn from(rows: RowSet) -> Self {
        Self::Batch(rows)
    }
}

impl From<Input> for Value {
    fn from(input: Input) -> Self {
        match input {
            Input::Single(row) => Value::Record(row),
            Input::Batch(rows) => Value::from(rows),
        }
    }
}

impl TryFrom<Value> for Input {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Record(row) => Ok(Self::Single(row)),
            Value::List(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Record(row) => Ok(row),
                    other => Err(Error::shape_mismatch(format!(
                        "expected a list of records, found a {} element",
                        other.kind_name()
                    ))),
                })
                .collect::<Result<RowSet>>()
                .map(Self::Batch),
            other => Err(Error::shape_mismatch(format!(
                "expected a record or a list of records, found {}",
                other.kind_name()
            ))),
        }
    }
}
