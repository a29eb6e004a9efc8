pub mod db;
pub use db::Db;

mod engine;

mod overrides;
pub use overrides::Overrides;

pub use trellis_core::{
    async_trait, bail,
    driver::{self, Context, Driver, Operation},
    err,
    mapping::{self, MappingTable},
    row,
    schema::{self, Action, Extracted, Link, Model, PrepareMode, Schema},
    shape::{self, Dimension},
    stmt::{self, Input, Row, RowSet, Value},
    Error, Result,
};
