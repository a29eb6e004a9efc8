use super::{Call, Engine};
use crate::Overrides;

use futures::{stream, StreamExt, TryStreamExt};
use trellis_core::{
    driver::Context,
    schema::{Action, Link},
    shape,
    stmt::{Input, Row, RowSet},
    Result,
};

impl Engine {
    /// Resolves every nextpage of `action` for every row and attaches the
    /// reshaped results.
    ///
    /// Links run in declaration order. Within a link, up to
    /// `Config::concurrency` rows are in flight at once and results keep
    /// row order. The first error drops every row built so far.
    ///
    /// Overrides extracted from a batch input are handed out by position:
    /// row `i` sees element `i`'s entry only.
    pub(super) async fn nextpages(
        &self,
        cx: &Context,
        action: &Action,
        mut rows: RowSet,
        overrides: &Overrides,
        depth: usize,
    ) -> Result<RowSet> {
        if action.nextpages.is_empty() {
            return Ok(rows);
        }

        // Each output row resolves its nextpages in its own override scope.
        let scopes = overrides.split(rows.len())?;

        for link in &action.nextpages {
            let key = link.attachment_key();

            let scopes = &scopes;
            rows = stream::iter(rows.into_iter().enumerate())
                .map(|(i, row)| self.attach(cx, link, &key, row, &scopes[i], depth))
                .buffered(self.config.concurrency)
                .try_collect()
                .await?;
        }

        Ok(rows)
    }

    async fn attach(
        &self,
        cx: &Context,
        link: &Link,
        key: &str,
        mut row: Row,
        overrides: &Overrides,
        depth: usize,
    ) -> Result<Row> {
        let current = Input::Single(row.clone());

        let call = Call {
            model: link.model.clone(),
            action: link.action.clone(),
            input: link.propagate_input(&current).unwrap_or_default(),
            constraints: link.propagate_constraints(&current).unwrap_or_default(),
            overrides: overrides.clone(),
            depth: depth + 1,
        };

        let nested = self.resolve(cx, call).await?;

        tracing::trace!(key, rows = nested.len(), "attaching nextpage");

        row.insert(key, shape::reduce(link.dimension, link.marker(), nested)?);
        Ok(row)
    }
}
