//! Uniform randomness source used by shuffle selection.

use std::{cell::Cell, rc::Rc};

/// Source of uniformly distributed values in `[0, 1)`.
pub trait RandomSource {
    /// Next value in `[0, 1)`.
    fn next_unit(&self) -> f64;
}

#[derive(Debug, Clone)]
/// Deterministic source that cycles through a fixed list of values.
pub struct SequenceRandomSource {
    values: Rc<[f64]>,
    cursor: Rc<Cell<usize>>,
}

impl SequenceRandomSource {
    /// Creates a source replaying `values` in order, wrapping at the end.
    ///
    /// Values are clamped into `[0, 1)`; an empty list always yields `0.0`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values
            .into()
            .into_iter()
            .map(|value| value.clamp(0.0, 1.0 - f64::EPSILON))
            .collect::<Vec<_>>();
        Self {
            values: values.into(),
            cursor: Rc::new(Cell::new(0)),
        }
    }
}

impl RandomSource for SequenceRandomSource {
    fn next_unit(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let index = self.cursor.get();
        self.cursor.set((index + 1) % self.values.len());
        self.values[index]
    }
}
