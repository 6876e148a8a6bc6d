use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::EvalError;

use super::ConfigError;

/// Errors that can occur during a decade search.
///
/// Hitting the iteration cap is not an error; it is reported through
/// [`Status::MaxIters`](super::Status::MaxIters) on the returned solution.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("starting point is not finite: {value}")]
    NonFiniteStart { value: f64 },

    #[error("residual is NaN at x = {x}")]
    NanResidual { x: f64 },

    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
