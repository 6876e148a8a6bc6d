//! Solvers for equation problems: finding roots of scalar equations.
//!
//! An [`EquationProblem`] maps solver variables `x: [f64; N]` to model inputs,
//! calls the model, and computes residuals. Solvers in this module drive those
//! residuals toward zero.
//!
//! # Solvers
//!
//! - [`decade_search`]: damped step search for residuals that increase with `x`
//!
//! [`EquationProblem`]: psychro_core::EquationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod decade_search;
