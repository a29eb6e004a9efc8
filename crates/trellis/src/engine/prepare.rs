use super::{Call, Engine};
use crate::Overrides;

use trellis_core::{
    driver::Context,
    schema::{Action, Extracted, PrepareMode},
    stmt::{Input, Row, RowSet},
    Result,
};

impl Engine {
    /// Computes the effective input and constraints of `action`.
    ///
    /// Prepares with a marker run first and never execute: they move the
    /// sub-structure found under the marker out of the input and into the
    /// overrides for their target, to be consumed further down the tree. For
    /// a batch input each element's sub-structure stays with the output row
    /// at the same position.
    /// The remaining prepares execute in declaration order and fold their
    /// rows in according to their [`PrepareMode`].
    pub(super) async fn prepare(
        &self,
        cx: &Context,
        action: &Action,
        input: Input,
        constraints: Row,
        overrides: &mut Overrides,
        depth: usize,
    ) -> Result<(Input, Row)> {
        let mut base = input;

        for link in action.prepares.iter().filter(|link| !link.marker().is_empty()) {
            let Some(extracted) = link.extract(&mut base) else {
                continue;
            };

            tracing::trace!(
                target_model = %link.model,
                target_action = %link.action,
                marker = link.marker(),
                "moved input sub-structure to overrides"
            );

            match extracted {
                Extracted::Single(value) => {
                    overrides.insert(&link.model, &link.action, value);
                }
                Extracted::Batch(values) => {
                    overrides.insert_per_row(&link.model, &link.action, values);
                }
            }
        }

        let mut input = base.clone();
        let mut acc_constraints = constraints.clone();

        for link in action.prepares.iter().filter(|link| link.marker().is_empty()) {
            let call = Call {
                model: link.model.clone(),
                action: link.action.clone(),
                input: link.propagate_input(&input).unwrap_or_default(),
                constraints: link.propagate_constraints(&input).unwrap_or_default(),
                overrides: overrides.shared(),
                depth: depth + 1,
            };

            let rows = self.resolve(cx, call).await?;

            tracing::trace!(
                target_model = %link.model,
                target_action = %link.action,
                rows = rows.len(),
                mode = ?link.mode,
                "prepare resolved"
            );

            if link.mode == PrepareMode::FanOut && !rows.is_empty() {
                let mut fanned = constraints.clone();
                for row in &rows {
                    fanned.merge(row);
                }

                return Ok((fan_out(base, &rows), fanned));
            }

            if let Some(first) = rows.into_iter().next() {
                acc_constraints.merge(&first);
                input = input.merge(&Input::Single(first))?;
            }
        }

        Ok((input, acc_constraints))
    }
}

/// Starts over from the caller's data: every caller record is merged with
/// every fetched row, caller records outermost.
fn fan_out(base: Input, rows: &RowSet) -> Input {
    Input::Batch(
        base.into_rows()
            .iter()
            .flat_map(|record| rows.iter().map(move |row| record.clone().merged(row)))
            .collect(),
    )
}
