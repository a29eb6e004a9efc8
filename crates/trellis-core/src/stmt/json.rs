use super::{Input, Row, Value};
use crate::{Error, Result};

use serde_json::{Map, Number};

impl From<serde_json::Value> for Value {
    fn from(src: serde_json::Value) -> Self {
        match src {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(v) => Value::Bool(v),
            serde_json::Value::Number(v) => match v.as_i64() {
                Some(v) => Value::I64(v),
                // u64 beyond i64::MAX and real numbers both land here
                None => v.as_f64().map(Value::F64).unwrap_or_default(),
            },
            serde_json::Value::String(v) => Value::String(v),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Value::Record(Row::from(fields)),
        }
    }
}

impl From<Map<String, serde_json::Value>> for Row {
    fn from(fields: Map<String, serde_json::Value>) -> Self {
        fields.into_iter().collect()
    }
}

impl From<Value> for serde_json::Value {
    fn from(src: Value) -> Self {
        match src {
            Value::Null => serde_json::Value::Null,
            Value::Bool(v) => serde_json::Value::Bool(v),
            Value::I64(v) => serde_json::Value::Number(v.into()),
            // NaN and infinities have no JSON form
            Value::F64(v) => Number::from_f64(v)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(v) => serde_json::Value::String(v),
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Record(row) => serde_json::Value::Object(row.into()),
        }
    }
}

impl From<Row> for Map<String, serde_json::Value> {
    fn from(row: Row) -> Self {
        row.into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect()
    }
}

impl TryFrom<serde_json::Value> for Row {
    type Error = Error;

    fn try_from(src: serde_json::Value) -> Result<Self> {
        match src {
            serde_json::Value::Object(fields) => Ok(Row::from(fields)),
            other => Err(Error::shape_mismatch(format!(
                "expected a JSON object, found {}",
                Value::from(other).kind_name()
            ))),
        }
    }
}

impl TryFrom<serde_json::Value> for Input {
    type Error = Error;

    fn try_from(src: serde_json::Value) -> Result<Self> {
        Input::try_from(Value::from(src))
    }
}
