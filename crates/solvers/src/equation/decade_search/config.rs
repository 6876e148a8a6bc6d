use thiserror::Error;

/// Configuration for the decade search solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Hard cap on the number of steps taken after the starting evaluation.
    pub max_iters: usize,
    /// Step size used from the starting point until the first undershoot.
    pub initial_step: f64,
    /// Factor the step is divided by after each undershoot.
    pub shrink_factor: f64,
    /// Absolute residual tolerance for convergence.
    pub residual_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 200,
            initial_step: 10.0,
            shrink_factor: 10.0,
            residual_tol: 1e-6,
        }
    }
}

/// Reasons a [`Config`] can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("initial_step must be finite and positive")]
    InitialStep,
    #[error("shrink_factor must be finite and greater than one")]
    ShrinkFactor,
    #[error("residual_tol must be finite and non-negative")]
    ResidualTol,
}

impl Config {
    /// Validates the step policy and tolerance.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_step.is_finite() || self.initial_step <= 0.0 {
            return Err(ConfigError::InitialStep);
        }
        if !self.shrink_factor.is_finite() || self.shrink_factor <= 1.0 {
            return Err(ConfigError::ShrinkFactor);
        }
        if !self.residual_tol.is_finite() || self.residual_tol < 0.0 {
            return Err(ConfigError::ResidualTol);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_fields() {
        let config = Config {
            initial_step: 0.0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InitialStep));

        let config = Config {
            shrink_factor: 1.0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ShrinkFactor));

        let config = Config {
            residual_tol: f64::NAN,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ResidualTol));
    }
}
