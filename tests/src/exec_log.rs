use std::sync::{Arc, Mutex, MutexGuard};
use trellis::{Input, Operation};

/// Read side of a [`MockDriver`](crate::MockDriver)'s operation log.
///
/// Operations appear in the order the driver received them.
#[derive(Debug, Clone)]
pub struct ExecLog {
    ops: Arc<Mutex<Vec<Operation>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<Operation>>>) -> Self {
        Self { ops }
    }

    fn ops(&self) -> MutexGuard<'_, Vec<Operation>> {
        self.ops.lock().unwrap()
    }

    pub fn len(&self) -> usize {
        self.ops().len()
    }

    /// `true` if the driver was never reached
    pub fn is_empty(&self) -> bool {
        self.ops().is_empty()
    }

    /// Number of times `action` ran on `model`
    pub fn calls(&self, model: &str, action: &str) -> usize {
        self.ops().iter().filter(|op| op.is(model, action)).count()
    }

    /// Inputs `action` on `model` ran with, in call order
    pub fn inputs(&self, model: &str, action: &str) -> Vec<Input> {
        self.ops()
            .iter()
            .filter(|op| op.is(model, action))
            .map(|op| op.input.clone())
            .collect()
    }

    /// `model.action` of every operation, in call order
    pub fn targets(&self) -> Vec<String> {
        self.ops()
            .iter()
            .map(|op| format!("{}.{}", op.model, op.action))
            .collect()
    }

    /// Takes the oldest operation off the log.
    pub fn pop(&mut self) -> Option<Operation> {
        let mut ops = self.ops();
        (!ops.is_empty()).then(|| ops.remove(0))
    }

    /// Runs `f` over the raw operations, for assertions the helpers above
    /// don't cover.
    pub fn with_ops<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[Operation]) -> R,
    {
        f(&self.ops())
    }
}
