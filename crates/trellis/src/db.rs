mod builder;
pub use builder::Builder;

mod config;
pub use config::Config;

mod resolve;
pub use resolve::Resolve;

use crate::engine::Engine;

use trellis_core::Schema;

/// A handle for resolving model actions against one schema and driver.
///
/// Cloning is cheap and clones share the schema and driver. Nothing is
/// retained between resolutions, so independent resolutions may run
/// concurrently on clones of the same handle.
#[derive(Debug, Clone)]
pub struct Db {
    engine: Engine,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Schema {
        &self.engine.schema
    }

    pub fn config(&self) -> &Config {
        &self.engine.config
    }

    /// Starts a resolution of `action` on `model`.
    ///
    /// Without input or constraints the action runs with no caller-supplied
    /// data, relying on its prepares and any overrides.
    pub fn resolve(&self, model: impl Into<String>, action: impl Into<String>) -> Resolve<'_> {
        Resolve::new(&self.engine, model.into(), action.into())
    }
}
