//! Reshaping of a fetched row set before it is attached to its parent.

use crate::stmt::{Row, RowSet, Value};
use crate::{Error, Result};

use serde::Deserialize;

/// Column read as the key by [`Dimension::Map`].
pub const MAP_KEY: &str = "key";

/// Column read as the value by [`Dimension::Map`].
pub const MAP_VALUE: &str = "value";

/// How a row set is reshaped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Leave the row set as a list of records
    #[default]
    Default,

    /// Take the first row only
    One,

    /// Project the marker column out of each row
    Array,

    /// Lift the record found under the marker into each row
    Many,

    /// Fold rows into a record keyed by their `key` column
    Map,
}

/// Collapses `rows` into the shape declared by `dimension`.
///
/// `Array`, `Many` and `Map` need a marker to key off; with an empty
/// marker they fall back to `Default`.
pub fn reduce(dimension: Dimension, marker: &str, rows: RowSet) -> Result<Value> {
    let dimension = match dimension {
        Dimension::Array | Dimension::Many | Dimension::Map if marker.is_empty() => {
            Dimension::Default
        }
        dimension => dimension,
    };

    match dimension {
        Dimension::Default => Ok(Value::from(rows)),
        Dimension::One => match rows.into_iter().next() {
            Some(row) => Ok(Value::Record(row)),
            None => Err(Error::empty_result("dimension `one` received no rows")),
        },
        Dimension::Array => Ok(Value::List(
            rows.into_iter()
                .map(|mut row| row.shift_remove(marker).unwrap_or_default())
                .collect(),
        )),
        Dimension::Many => Ok(Value::List(
            rows.into_iter()
                .map(|row| Value::Record(lift(marker, row)))
                .collect(),
        )),
        Dimension::Map => Ok(Value::Record(fold_map(rows))),
    }
}

/// Replaces the wrapper under `marker` with its own columns. The row's
/// other columns are merged on top.
fn lift(marker: &str, mut row: Row) -> Row {
    if !matches!(row.get(marker), Some(Value::Record(_) | Value::List(_))) {
        return row;
    }

    let base = match row.shift_remove(marker) {
        Some(Value::Record(nested)) => nested,
        Some(Value::List(items)) => match items.into_iter().next() {
            Some(Value::Record(nested)) => nested,
            _ => Row::new(),
        },
        _ => Row::new(),
    };

    base.merged(&row)
}

fn fold_map(rows: RowSet) -> Row {
    let mut ret = Row::new();

    for mut row in rows {
        let Some(key) = row.get(MAP_KEY).and_then(Value::to_key) else {
            continue;
        };

        let value = row.shift_remove(MAP_VALUE).map(unwrap_singleton);
        ret.insert(key, value.unwrap_or_default());
    }

    ret
}

/// Strips one-element list wrappers, however deeply nested.
fn unwrap_singleton(value: Value) -> Value {
    match value {
        Value::List(items) => match <[Value; 1]>::try_from(items) {
            Ok([inner]) => unwrap_singleton(inner),
            Err(items) => Value::List(items),
        },
        value => value,
    }
}
