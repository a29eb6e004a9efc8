mod context;
pub use context::Context;

mod operation;
pub use operation::Operation;

use crate::{async_trait, stmt::RowSet};

use std::{fmt::Debug, sync::Arc};

/// Executes one model action against storage.
///
/// This is the only way the engine reaches the store. Implementations
/// decide how statements are built and run; the engine only sees the rows.
/// Returned rows are expected to use flat column names, while any deeper
/// nesting they already carry is passed through untouched.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Execute an action.
    ///
    /// Long running implementations should observe `cx` so that a cancelled
    /// resolution stops issuing I/O; the engine also stops waiting on the
    /// returned future once `cx` is cancelled or past its deadline.
    async fn exec(&self, cx: &Context, op: Operation) -> crate::Result<RowSet>;
}

#[async_trait]
impl<T: Driver> Driver for Arc<T> {
    async fn exec(&self, cx: &Context, op: Operation) -> crate::Result<RowSet> {
        (**self).exec(cx, op).await
    }
}
