use super::{Config, Db};
use crate::engine::Engine;

use trellis_core::{bail, Driver, Result, Schema};

use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Replace all settings at once, e.g. with a deserialized [`Config`].
    pub fn config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    pub fn max_depth(&mut self, max_depth: usize) -> &mut Self {
        self.config.max_depth = max_depth;
        self
    }

    pub fn concurrency(&mut self, concurrency: usize) -> &mut Self {
        self.config.concurrency = concurrency;
        self
    }

    pub fn build(&mut self, schema: Schema, driver: impl Driver) -> Result<Db> {
        if self.config.max_depth == 0 {
            bail!("max_depth must be at least 1");
        }

        if self.config.concurrency == 0 {
            bail!("concurrency must be at least 1");
        }

        Ok(Db {
            engine: Engine {
                schema: Arc::new(schema),
                driver: Arc::new(driver),
                config: self.config.clone(),
            },
        })
    }
}
