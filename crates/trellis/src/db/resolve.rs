use crate::engine::{Call, Engine};
use crate::Overrides;

use trellis_core::{
    driver::Context,
    stmt::{Input, Row, RowSet},
    Result,
};

/// A pending resolution, see [`Db::resolve`](super::Db::resolve).
#[must_use = "a resolution does nothing until `exec` is awaited"]
#[derive(Debug)]
pub struct Resolve<'a> {
    engine: &'a Engine,
    call: Call,
    cx: Option<Context>,
}

impl<'a> Resolve<'a> {
    pub(super) fn new(engine: &'a Engine, model: String, action: String) -> Self {
        Self {
            engine,
            call: Call {
                model,
                action,
                input: Input::default(),
                constraints: Row::new(),
                overrides: Overrides::new(),
                depth: 1,
            },
            cx: None,
        }
    }

    /// Column values for the action: one record or a batch.
    pub fn input(mut self, input: impl Into<Input>) -> Self {
        self.call.input = input.into();
        self
    }

    /// Filters and forced values, kept apart from the input.
    pub fn constraints(mut self, constraints: Row) -> Self {
        self.call.constraints = constraints;
        self
    }

    pub fn overrides(mut self, overrides: Overrides) -> Self {
        self.call.overrides = overrides;
        self
    }

    /// Cancellation and deadline scope. Defaults to a fresh context that is
    /// never cancelled.
    pub fn context(mut self, cx: Context) -> Self {
        self.cx = Some(cx);
        self
    }

    /// Runs the resolution and returns the nested result tree.
    pub async fn exec(self) -> Result<RowSet> {
        let cx = self.cx.unwrap_or_default();
        self.engine.resolve(&cx, self.call).await
    }
}
