use super::{Row, RowSet};

/// A dynamically typed column value.
///
/// This is the closed set of shapes the engine attaches to rows: scalars,
/// a nested record, or a list.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Double precision floating point number
    F64(f64),

    /// Signed 64-bit integer
    I64(i64),

    /// A list of values
    List(Vec<Value>),

    /// Null value
    #[default]
    Null,

    /// A nested record
    Record(Row),

    /// String value
    String(String),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Row> {
        match self {
            Self::Record(row) => Some(row),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn into_record(self) -> Option<Row> {
        match self {
            Self::Record(row) => Some(row),
            _ => None,
        }
    }

    /// Returns the rows of a list of records.
    ///
    /// `None` if this is not a list or any item is not a record.
    pub fn into_rows(self) -> Option<RowSet> {
        match self {
            Self::List(items) => items.into_iter().map(Value::into_record).collect(),
            _ => None,
        }
    }

    /// Renders a scalar as a map key. Records, lists and null have no key form.
    pub fn to_key(&self) -> Option<String> {
        match self {
            Self::String(v) => Some(v.clone()),
            Self::I64(v) => Some(v.to_string()),
            Self::F64(v) => Some(v.to_string()),
            Self::Bool(v) => Some(v.to_string()),
            Self::Null | Self::Record(_) | Self::List(_) => None,
        }
    }

    /// Short name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::F64(_) => "f64",
            Self::I64(_) => "i64",
            Self::List(_) => "list",
            Self::Null => "null",
            Self::Record(_) => "record",
            Self::String(_) => "string",
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Row> for Value {
    fn from(value: Row) -> Self {
        Self::Record(value)
    }
}

impl From<RowSet> for Value {
    fn from(rows: RowSet) -> Self {
        Self::List(rows.into_iter().map(Value::Record).collect())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}
