#[macro_use]
mod macros;

pub mod driver;
pub use driver::Driver;

mod error;
pub use error::{Error, IntoError};

pub mod mapping;
pub use mapping::MappingTable;

pub mod schema;
pub use schema::Schema;

pub mod shape;

pub mod stmt;

/// A Result type alias that uses Trellis' [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
