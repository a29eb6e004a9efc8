use super::Engine;

use trellis_core::{
    driver::{Context, Operation},
    stmt::{Input, Row, RowSet},
    Result,
};

impl Engine {
    /// Runs the action itself, merging the caller's override for it over
    /// the computed input. A batch override runs the action once per element
    /// and concatenates the rows in element order.
    pub(super) async fn exec(
        &self,
        cx: &Context,
        model: &str,
        action: &str,
        input: Input,
        constraints: Row,
        overlay: Option<Input>,
    ) -> Result<RowSet> {
        match overlay {
            None => self.exec_op(cx, model, action, input, constraints).await,
            Some(Input::Single(row)) => {
                let input = input.merge(&Input::Single(row))?;
                self.exec_op(cx, model, action, input, constraints).await
            }
            Some(Input::Batch(rows)) => {
                tracing::trace!(rows = rows.len(), "expanding batch override");

                let mut ret = vec![];

                for row in rows {
                    let input = input.clone().merge(&Input::Single(row))?;
                    ret.extend(
                        self.exec_op(cx, model, action, input, constraints.clone())
                            .await?,
                    );
                }

                Ok(ret)
            }
        }
    }

    async fn exec_op(
        &self,
        cx: &Context,
        model: &str,
        action: &str,
        input: Input,
        constraints: Row,
    ) -> Result<RowSet> {
        let op = Operation {
            model: model.to_string(),
            action: action.to_string(),
            input,
            constraints,
        };

        let rows = cx.run(self.driver.exec(cx, op)).await?;

        tracing::debug!(rows = rows.len(), "action executed");

        Ok(rows)
    }
}
