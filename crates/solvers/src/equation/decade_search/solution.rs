use psychro_core::Snapshot;

use crate::equation::Evaluation;

/// Indicates how the decade search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The residual met the configured tolerance.
    Converged,
    /// Reached the iteration cap without converging.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a decade search.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,
    /// Best estimate of the root.
    pub x: f64,
    /// Residual at the reported root estimate.
    pub residual: f64,
    /// Snapshot at the reported root estimate.
    pub snapshot: Snapshot<I, O>,
    /// Iteration count when the solver finished.
    pub iters: usize,
    /// Step size when the solver finished.
    pub step: f64,
}

impl<I, O> Solution<I, O> {
    /// Constructs a solution from an evaluation result.
    pub(super) fn from_eval(
        eval: Evaluation<I, O, 1>,
        status: Status,
        iters: usize,
        step: f64,
    ) -> Self {
        Self {
            status,
            x: eval.x[0],
            residual: eval.residuals[0],
            snapshot: eval.snapshot,
            iters,
            step,
        }
    }

    /// Returns true if the solver met its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
