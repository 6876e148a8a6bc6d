//! Wet bulb from dry bulb, pressure, and humidity ratio.
//!
//! The psychrometric relation cannot be solved for the wet bulb in closed
//! form, so the wet bulb is found with the decade search: the guess starts one
//! step below the dry bulb and the residual is the humidity ratio implied by
//! the guess minus the target.

use std::convert::Infallible;

use log::{debug, trace};
use psychro_core::{EquationProblem, Model};
use psychro_solvers::equation::decade_search::{self, Action, Event, Status};

use crate::{Error, humidity};

/// Humidity ratio implied by a wet-bulb guess at a fixed dry bulb and
/// pressure.
///
/// Guesses at or above the boiling point have no finite saturation humidity
/// ratio. They map to `+∞`, which the search treats as an overshoot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WetBulbModel {
    /// Dry bulb in °C.
    pub dry_bulb: f64,
    /// Barometric pressure in kPa.
    pub pressure: f64,
}

impl Model for WetBulbModel {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, wet_bulb: &f64) -> Result<f64, Self::Error> {
        let ws = humidity::saturation_humidity_ratio(self.pressure, *wet_bulb)
            .unwrap_or(f64::INFINITY);
        Ok(humidity::humidity_ratio_from_wet_bulb(
            self.dry_bulb,
            *wet_bulb,
            ws,
        ))
    }
}

/// Drives the implied humidity ratio to a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetHumidityRatio(pub f64);

impl EquationProblem<1> for TargetHumidityRatio {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([output - self.0])
    }
}

/// Finds the wet bulb (°C) of air at dry bulb `t_db` (°C) and pressure `p`
/// (kPa) holding humidity ratio `w`.
///
/// # Errors
///
/// Returns [`Error::NonConvergence`] if the search reaches its iteration cap,
/// [`Error::InvalidConfig`] for a bad search config, and
/// [`Error::Calculation`] if a non-finite value stops the search.
pub fn solve(t_db: f64, p: f64, w: f64, config: &decade_search::Config) -> Result<f64, Error> {
    let model = WetBulbModel {
        dry_bulb: t_db,
        pressure: p,
    };
    let problem = TargetHumidityRatio(w);
    let start = t_db - config.initial_step;

    let observer = |event: &Event<'_, f64, f64>| -> Option<Action> {
        trace!(
            "wet bulb iter {}: guess {} °C, step {}, residual {}",
            event.iter,
            event.x,
            event.step,
            event.residual(),
        );
        None
    };

    let solution =
        decade_search::solve(&model, &problem, start, config, observer).map_err(|err| match err {
            decade_search::Error::InvalidConfig(err) => Error::InvalidConfig(err.to_string()),
            err => Error::Calculation(err.to_string()),
        })?;

    match solution.status {
        Status::Converged => {
            debug!(
                "wet bulb converged to {} °C in {} iterations",
                solution.x, solution.iters
            );
            Ok(solution.x)
        }
        Status::MaxIters | Status::StoppedByObserver => Err(Error::NonConvergence {
            iters: solution.iters,
            wet_bulb: solution.x,
            residual: solution.residual,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use crate::saturation;

    const SEA_LEVEL: f64 = 101.325;

    fn humidity_ratio_at(t_db: f64, relative_humidity: f64) -> f64 {
        let pw = relative_humidity * saturation::saturation_pressure(t_db);
        humidity::humidity_ratio_from_pressures(SEA_LEVEL, pw).unwrap()
    }

    #[test]
    fn chart_point_wet_bulb() {
        let w = humidity_ratio_at(24.0, 0.5);
        let t_wb = solve(24.0, SEA_LEVEL, w, &decade_search::Config::default()).unwrap();
        assert_relative_eq!(t_wb, 17.054, epsilon = 1e-3);
    }

    #[test]
    fn below_freezing_uses_ice_branch() {
        let w = humidity_ratio_at(-10.0, 0.5);
        let t_wb = solve(-10.0, SEA_LEVEL, w, &decade_search::Config::default()).unwrap();
        assert_relative_eq!(t_wb, -11.51, epsilon = 1e-3);
    }

    #[test]
    fn dry_air_wet_bulb() {
        let t_wb = solve(24.0, SEA_LEVEL, 0.0, &decade_search::Config::default()).unwrap();
        assert_relative_eq!(t_wb, 7.755, epsilon = 1e-3);
    }

    #[test]
    fn model_reports_overshoot_above_boiling() {
        let model = WetBulbModel {
            dry_bulb: 150.0,
            pressure: SEA_LEVEL,
        };
        assert_eq!(model.call(&120.0), Ok(f64::INFINITY));
    }

    #[test]
    fn hot_air_search_retreats_below_boiling() {
        let w = humidity_ratio_at(150.0, 0.01);
        let t_wb = solve(150.0, SEA_LEVEL, w, &decade_search::Config::default()).unwrap();

        let model = WetBulbModel {
            dry_bulb: 150.0,
            pressure: SEA_LEVEL,
        };
        assert!(t_wb < 100.0);
        assert!((model.call(&t_wb).unwrap() - w).abs() <= 1e-6);
    }

    #[test]
    fn iteration_cap_is_non_convergence() {
        let w = humidity_ratio_at(24.0, 0.5);
        let config = decade_search::Config {
            max_iters: 3,
            ..decade_search::Config::default()
        };

        let result = solve(24.0, SEA_LEVEL, w, &config);

        let Err(Error::NonConvergence {
            iters, wet_bulb, ..
        }) = result
        else {
            panic!("expected non-convergence, got {result:?}");
        };
        assert_eq!(iters, 3);
        assert_relative_eq!(wet_bulb, 21.0);
    }

    #[test]
    fn invalid_config_is_reported() {
        let config = decade_search::Config {
            shrink_factor: 0.5,
            ..decade_search::Config::default()
        };
        let result = solve(24.0, SEA_LEVEL, 0.009, &config);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    proptest! {
        #[test]
        fn solution_reproduces_humidity_ratio(
            t_db in -30.0..60.0_f64,
            relative_humidity in 0.05..0.95_f64,
        ) {
            let w = humidity_ratio_at(t_db, relative_humidity);
            let t_wb = solve(t_db, SEA_LEVEL, w, &decade_search::Config::default()).unwrap();

            let model = WetBulbModel { dry_bulb: t_db, pressure: SEA_LEVEL };
            prop_assert!((model.call(&t_wb).unwrap() - w).abs() <= 1e-6);
            prop_assert!(t_wb <= t_db);
        }
    }
}
