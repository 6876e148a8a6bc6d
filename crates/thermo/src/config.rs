use psychro_solvers::equation::decade_search;

use crate::Error;

/// Solver settings for [`Psychrometrics`](crate::Psychrometrics).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Step policy, iteration cap, and tolerance of the wet-bulb search.
    pub wet_bulb: decade_search::Config,

    /// Absolute tolerance for the saturation and dry-air equality checks,
    /// in °C for temperatures and as a fraction for relative humidity.
    pub equality_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wet_bulb: decade_search::Config::default(),
            equality_tol: 1e-9,
        }
    }
}

impl Config {
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the search config is invalid or
    /// `equality_tol` is negative or not finite.
    pub fn validate(&self) -> Result<(), Error> {
        self.wet_bulb
            .validate()
            .map_err(|err| Error::InvalidConfig(err.to_string()))?;

        if !self.equality_tol.is_finite() || self.equality_tol < 0.0 {
            return Err(Error::InvalidConfig(
                "equality_tol must be finite and non-negative".into(),
            ));
        }
        Ok(())
    }
}
