use crate::equation::Evaluation;

/// Iteration event emitted by the decade search.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based, the starting evaluation is not an event).
    pub iter: usize,
    /// Point evaluated in this iteration.
    pub x: f64,
    /// Step size that will be applied on the next move.
    pub step: f64,
    /// Evaluation at `x`.
    pub eval: &'a Evaluation<I, O, 1>,
}

impl<I, O> Event<'_, I, O> {
    /// Returns the residual at the evaluated point.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.eval.residual()
    }
}
