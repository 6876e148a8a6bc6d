use crate::equation::Evaluation;

use super::{Solution, Status};

/// Tracks the evaluation with the smallest residual magnitude.
pub(super) struct Best<I, O> {
    eval: Evaluation<I, O, 1>,
}

impl<I, O> Best<I, O> {
    /// Starts tracking from the first evaluation.
    pub(super) fn new(eval: Evaluation<I, O, 1>) -> Self {
        Self { eval }
    }

    /// Replaces the tracked evaluation if the residual magnitude improves.
    pub(super) fn update(&mut self, eval: Evaluation<I, O, 1>) {
        if eval.residual().abs() < self.eval.residual().abs() {
            self.eval = eval;
        }
    }

    /// Finalizes the solver using the best evaluation.
    pub(super) fn finish(self, status: Status, iters: usize, step: f64) -> Solution<I, O> {
        Solution::from_eval(self.eval, status, iters, step)
    }
}
