//! Numerical solvers for the psychrometric workspace.
//!
//! Solvers operate on a [`Model`] paired with a problem trait from
//! `psychro-core`, and report progress to an [`Observer`] so callers can log
//! or stop an iteration without changing the solver API.
//!
//! [`Model`]: psychro_core::Model
//! [`Observer`]: psychro_core::Observer

pub mod equation;
