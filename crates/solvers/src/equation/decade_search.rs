//! Damped decade step search for residuals that increase with `x`.
//!
//! Starting from a point, the search retreats by a fixed step while the
//! residual is non-negative. On an undershoot (negative residual) it moves
//! forward by the current step, divides the step by the shrink factor, and
//! steps back by the new, finer step. Each sign change therefore refines the
//! estimate by one order of magnitude (for the default factor of ten).
//!
//! Unlike bisection, the search needs no bracket, only a starting point above
//! the root and a residual that is monotonically increasing near it.
//! A residual of `+∞` is read as an overshoot and `−∞` as an undershoot, so a
//! model can flag guesses outside its domain without failing the search.

mod action;
mod best;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use psychro_core::{EquationProblem, Model, Observer};

use crate::equation::{Evaluation, evaluate};

use best::Best;

/// Finds a root of an increasing residual with the decade search.
/// Observers see each iteration's evaluation and the step in effect.
///
/// # Errors
///
/// Returns an error if the config or starting point is invalid, a residual is
/// NaN, or the model or problem returns an error during evaluation.
/// Reaching `config.max_iters` is reported as [`Status::MaxIters`].
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    start: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    config.validate()?;

    if !start.is_finite() {
        return Err(Error::NonFiniteStart { value: start });
    }

    let mut x = start;
    let mut step = config.initial_step;

    let start_eval = checked_evaluate(model, problem, x)?;
    let mut residual = start_eval.residual();
    if residual.abs() <= config.residual_tol {
        return Ok(Solution::from_eval(start_eval, Status::Converged, 0, step));
    }
    let mut best = Best::new(start_eval);

    for iter in 1..=config.max_iters {
        (x, step) = advance(x, step, residual, config.shrink_factor);

        let eval = checked_evaluate(model, problem, x)?;
        residual = eval.residual();

        let event = Event {
            iter,
            x,
            step,
            eval: &eval,
        };
        let action = observer.observe(&event);

        if residual.abs() <= config.residual_tol {
            return Ok(Solution::from_eval(eval, Status::Converged, iter, step));
        }

        best.update(eval);

        if let Some(Action::StopEarly) = action {
            return Ok(best.finish(Status::StoppedByObserver, iter, step));
        }
    }

    Ok(best.finish(Status::MaxIters, config.max_iters, step))
}

/// Runs the decade search without observation.
///
/// # Errors
///
/// Returns an error if the config or starting point is invalid, a residual is
/// NaN, or the model or problem returns an error during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    start: f64,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, start, config, ())
}

/// Computes the next point and step from the current residual.
///
/// An undershoot moves forward by the current step, shrinks the step, and
/// retreats by the shrunken step. Anything else retreats by the current step.
fn advance(x: f64, step: f64, residual: f64, shrink_factor: f64) -> (f64, f64) {
    if residual < 0.0 {
        let finer = step / shrink_factor;
        ((x + step) - finer, finer)
    } else {
        (x - step, step)
    }
}

/// Evaluates at `x` and rejects NaN residuals.
fn checked_evaluate<M, P>(
    model: &M,
    problem: &P,
    x: f64,
) -> Result<Evaluation<M::Input, M::Output, 1>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let eval = evaluate(model, problem, [x])?;
    if eval.residual().is_nan() {
        return Err(Error::NanResidual { x });
    }
    Ok(eval)
}
