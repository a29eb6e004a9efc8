mod input;
pub use input::Input;

mod json;

mod row;
pub use row::{Row, RowSet};

mod value;
pub use value::Value;
