mod exec;
mod nextpage;
mod prepare;

use crate::{db::Config, Overrides};

use async_recursion::async_recursion;
use std::sync::Arc;
use tracing::Instrument;
use trellis_core::{
    driver::{Context, Driver},
    stmt::{Input, Row, RowSet},
    Error, Result, Schema,
};

#[derive(Debug, Clone)]
pub(crate) struct Engine {
    pub(crate) schema: Arc<Schema>,
    pub(crate) driver: Arc<dyn Driver>,
    pub(crate) config: Config,
}

/// One model action to resolve, with everything flowing into it.
///
/// Each call owns its data; sibling calls never share mutable state.
#[derive(Debug)]
pub(crate) struct Call {
    pub(crate) model: String,
    pub(crate) action: String,
    pub(crate) input: Input,
    pub(crate) constraints: Row,
    pub(crate) overrides: Overrides,

    /// Nesting level, the root call being 1
    pub(crate) depth: usize,
}

impl Engine {
    /// Resolves `call` into its nested row set.
    ///
    /// Runs the prepares to compute the effective input, executes the
    /// action (once per element of a batch override), then resolves every
    /// nextpage for every output row and attaches the result. Any error
    /// aborts the whole tree.
    #[async_recursion]
    pub(crate) async fn resolve(&self, cx: &Context, call: Call) -> Result<RowSet> {
        let span = tracing::debug_span!(
            "resolve",
            model = %call.model,
            action = %call.action,
            depth = call.depth
        );

        self.resolve_call(cx, call).instrument(span).await
    }

    async fn resolve_call(&self, cx: &Context, call: Call) -> Result<RowSet> {
        let Call {
            model,
            action,
            input,
            constraints,
            mut overrides,
            depth,
        } = call;

        if depth > self.config.max_depth {
            return Err(Error::recursion_limit(
                self.config.max_depth,
                &model,
                &action,
            ));
        }

        // Unknown names and malformed overrides fail before any I/O for
        // this branch.
        let schema_action = self.schema.action(&model, &action)?;
        let overlay = overrides.take(&model, &action)?;
        cx.check()?;

        let (input, constraints) = self
            .prepare(cx, schema_action, input, constraints, &mut overrides, depth)
            .await?;

        let rows = self
            .exec(cx, &model, &action, input, constraints, overlay)
            .await?;

        self.nextpages(cx, schema_action, rows, &overrides, depth)
            .await
    }
}
