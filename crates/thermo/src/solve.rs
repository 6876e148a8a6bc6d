use log::debug;
use psychro_core::Model;
use uom::si::{thermodynamic_temperature::degree_celsius, velocity::meter_per_second};

use crate::{
    Config, Error,
    dew_point, humidity,
    input::{HumidityInput, PsychrometricInput},
    mixture::Mixture,
    saturation,
    state::{PsychrometricState, Resolved, Scope},
    wet_bulb, wind_chill,
};

/// The psychrometric state solver as a [`Model`].
///
/// Each call is independent: the pressure is resolved, the humidity ratio is
/// fixed from the humidity input, and every other property follows from the
/// dry bulb, humidity ratio, and pressure. The wet bulb is searched for unless
/// it was the input or the air is saturated.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Psychrometrics {
    pub config: Config,
}

impl Psychrometrics {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl Model for Psychrometrics {
    type Input = PsychrometricInput;
    type Output = PsychrometricState;
    type Error = Error;

    fn call(&self, input: &PsychrometricInput) -> Result<PsychrometricState, Error> {
        self.config.validate()?;
        let tol = self.config.equality_tol;

        let t_db = finite(input.dry_bulb.get::<degree_celsius>(), "dry_bulb")?;
        let value = finite(input.humidity.value(), "humidity")?;
        finite(input.pressure.value(), "pressure")?;
        let wind_speed = input
            .wind_speed
            .map(|v| finite(v.get::<meter_per_second>(), "wind_speed"))
            .transpose()?;

        above_absolute_zero(t_db, "dry_bulb")?;
        match input.humidity {
            HumidityInput::WetBulb(_) => above_absolute_zero(value, "wet_bulb")?,
            HumidityInput::DewPoint(_) => above_absolute_zero(value, "dew_point")?,
            HumidityInput::RelativeHumidity(_) => {}
        }

        let p = input.pressure.barometric_pressure()?;
        let pws = saturation::saturation_pressure(t_db);
        // Above the boiling point the air cannot saturate.
        let ws_db = humidity::humidity_ratio_from_pressures(p, pws).ok();

        let degree_of_saturation = |w: f64| ws_db.map_or(0.0, |ws| w / ws);
        let relative_humidity = |w: f64, pw: f64| match ws_db {
            Some(ws) => humidity::relative_humidity_from_saturation(w / ws, pws, p),
            None => pw / pws,
        };

        let (w, pw, rh) = match input.humidity {
            HumidityInput::RelativeHumidity(_) => {
                if !(0.0..=1.0).contains(&value) {
                    return Err(Error::RelativeHumidityOutOfRange { value });
                }
                let pw = pws * value;
                let w = humidity::humidity_ratio_from_pressures(p, pw)?;
                (w, pw, value)
            }
            HumidityInput::WetBulb(_) => {
                let t_wb = value;
                let ws_wb = match humidity::saturation_humidity_ratio(p, t_wb) {
                    Ok(ws) => ws,
                    Err(_) if t_wb > t_db => {
                        return Err(Error::WetBulbExceedsDryBulb {
                            dry_bulb: t_db,
                            wet_bulb: t_wb,
                        });
                    }
                    Err(err) => return Err(err),
                };
                let w = humidity::humidity_ratio_from_wet_bulb(t_db, t_wb, ws_wb);
                let pw = humidity::vapor_pressure_from_humidity_ratio(p, w);
                let rh = relative_humidity(w, pw);

                if w < 0.0 || rh < 0.0 {
                    return Err(Error::WetBulbTooLow {
                        dry_bulb: t_db,
                        wet_bulb: t_wb,
                    });
                }
                if t_wb > t_db {
                    return Err(Error::WetBulbExceedsDryBulb {
                        dry_bulb: t_db,
                        wet_bulb: t_wb,
                    });
                }
                (w, pw, rh)
            }
            HumidityInput::DewPoint(_) => {
                if value > t_db {
                    return Err(Error::DewPointExceedsDryBulb {
                        dry_bulb: t_db,
                        dew_point: value,
                    });
                }
                let pw = saturation::saturation_pressure(value);
                let w = humidity::humidity_ratio_from_pressures(p, pw)?;
                (w, pw, relative_humidity(w, pw))
            }
        };

        debug!("resolved barometric pressure {p} kPa, humidity ratio {w}, vapor pressure {pw} kPa");

        let mixture = Mixture::evaluate(t_db, w, p);

        let t_dp = match input.humidity {
            HumidityInput::DewPoint(_) => value,
            HumidityInput::WetBulb(_) => dew_point::estimate(pw, rh, t_db, Some(value), tol),
            HumidityInput::RelativeHumidity(_) => dew_point::estimate(pw, rh, t_db, None, tol),
        };

        // Keyed on the input rather than `t_dp`, which may be capped at the
        // dry bulb without the air being saturated.
        let saturated = match input.humidity {
            HumidityInput::WetBulb(_) => false,
            HumidityInput::DewPoint(_) => (value - t_db).abs() <= tol,
            HumidityInput::RelativeHumidity(_) => (value - 1.0).abs() <= tol,
        };

        let t_wb = match input.humidity {
            HumidityInput::WetBulb(_) => value,
            _ if saturated => t_db,
            _ => wet_bulb::solve(t_db, p, w, &self.config.wet_bulb)?,
        };

        if Scope::classify(t_dp, t_db, t_wb) == Scope::Outside {
            debug!(
                "state outside ASHRAE 41.6 scope: dry bulb {t_db} °C, wet bulb {t_wb} °C, dew point {t_dp} °C"
            );
        }

        Ok(PsychrometricState::from(Resolved {
            humidity_mode: input.humidity.mode(),
            dry_bulb: t_db,
            wet_bulb: t_wb,
            dew_point: t_dp,
            relative_humidity: rh,
            humidity_ratio: w,
            degree_of_saturation: degree_of_saturation(w),
            barometric_pressure: p,
            vapor_pressure: pw,
            saturation_pressure: pws,
            mixture,
            wind_chill: wind_speed.map(|v| wind_chill::wind_chill(t_db, v)),
        }))
    }
}

/// Solves one state with the default [`Config`].
///
/// # Errors
///
/// Returns an [`Error`] when the input is incomplete, physically inconsistent,
/// or the wet-bulb search does not converge.
pub fn solve(input: &PsychrometricInput) -> Result<PsychrometricState, Error> {
    Psychrometrics::default().call(input)
}

fn finite(value: f64, field: &'static str) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::MissingInput { field })
    }
}

fn above_absolute_zero(value: f64, field: &'static str) -> Result<(), Error> {
    if value < dew_point::ABSOLUTE_ZERO_C {
        Err(Error::BelowAbsoluteZero { field, value })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::kilojoule_per_kilogram,
        f64::{Length, Pressure, Ratio, ThermodynamicTemperature, Velocity},
        length::meter,
        pressure::kilopascal,
        ratio::ratio,
    };

    use crate::{barometric::PressureInput, input::HumidityMode};

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    fn sea_level() -> PressureInput {
        PressureInput::Absolute(Pressure::new::<kilopascal>(101.325))
    }

    fn rh_input(t_db: f64, rh: f64) -> PsychrometricInput {
        PsychrometricInput::new(
            celsius(t_db),
            HumidityInput::RelativeHumidity(Ratio::new::<ratio>(rh)),
            sea_level(),
        )
    }

    #[test]
    fn relative_humidity_chart_point() {
        let state = solve(&rh_input(24.0, 0.5)).unwrap();

        assert_eq!(state.humidity_mode, HumidityMode::RelativeHumidity);
        assert_relative_eq!(state.humidity_ratio.get::<ratio>(), 0.009_299, epsilon = 1e-6);
        assert_relative_eq!(state.wet_bulb.get::<degree_celsius>(), 17.054, epsilon = 1e-3);
        assert_relative_eq!(state.dew_point.get::<degree_celsius>(), 12.977, epsilon = 1e-3);
        assert_relative_eq!(
            state.enthalpy.get::<kilojoule_per_kilogram>(),
            47.804,
            epsilon = 1e-3
        );
        assert_relative_eq!(state.relative_humidity.get::<ratio>(), 0.5);
        assert!(state.is_within_scope());
    }

    #[test]
    fn wet_bulb_mode_back_derives_relative_humidity() {
        let input = PsychrometricInput::new(
            celsius(24.0),
            HumidityInput::WetBulb(celsius(17.054)),
            sea_level(),
        );

        let state = solve(&input).unwrap();

        assert_eq!(state.humidity_mode, HumidityMode::WetBulb);
        assert_relative_eq!(state.relative_humidity.get::<ratio>(), 0.5, epsilon = 1e-3);
        assert_relative_eq!(state.wet_bulb.get::<degree_celsius>(), 17.054, epsilon = 1e-9);
        assert_relative_eq!(state.dew_point.get::<degree_celsius>(), 12.977, epsilon = 1e-2);
    }

    #[test]
    fn dew_point_mode_keeps_input_dew_point() {
        let input = PsychrometricInput::new(
            celsius(20.0),
            HumidityInput::DewPoint(celsius(-50.0)),
            sea_level(),
        );

        let state = solve(&input).unwrap();

        assert_relative_eq!(state.dew_point.get::<degree_celsius>(), -50.0, epsilon = 1e-9);
        assert_relative_eq!(state.humidity_ratio.get::<ratio>(), 2.418e-5, epsilon = 1e-8);
        assert_relative_eq!(state.wet_bulb.get::<degree_celsius>(), 5.825, epsilon = 1e-3);
        assert_eq!(state.scope, Scope::Outside);
    }

    #[test]
    fn saturated_air_skips_search() {
        let state = solve(&rh_input(0.0, 1.0)).unwrap();

        assert_relative_eq!(state.dew_point.get::<degree_celsius>(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(state.wet_bulb.get::<degree_celsius>(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(state.degree_of_saturation.get::<ratio>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn cold_humid_dew_point_stays_at_or_below_dry_bulb() {
        let state = solve(&rh_input(-39.5, 0.98)).unwrap();

        let t_db = state.dry_bulb.get::<degree_celsius>();
        let t_dp = state.dew_point.get::<degree_celsius>();
        let t_wb = state.wet_bulb.get::<degree_celsius>();
        assert!(t_dp <= t_db);
        assert!(t_wb <= t_db);
        assert_relative_eq!(t_dp, -39.5, epsilon = 1e-9);
        // Not saturated, so the wet bulb still comes from the search.
        assert_relative_eq!(t_wb, -39.502, epsilon = 1e-2);
        assert_eq!(state.scope, Scope::Within);

        let state = solve(&rh_input(-32.07, 0.976)).unwrap();
        assert!(state.dew_point <= state.dry_bulb);
    }

    #[test]
    fn dry_air_limit() {
        let state = solve(&rh_input(24.0, 0.0)).unwrap();

        assert_relative_eq!(state.humidity_ratio.get::<ratio>(), 0.0);
        assert_relative_eq!(
            state.dew_point.get::<degree_celsius>(),
            dew_point::ABSOLUTE_ZERO_C,
            epsilon = 1e-9
        );
        assert_relative_eq!(state.wet_bulb.get::<degree_celsius>(), 7.755, epsilon = 1e-3);
        assert_eq!(state.scope, Scope::Outside);
    }

    #[test]
    fn validation_errors() {
        let result = solve(&rh_input(24.0, 1.2));
        assert_eq!(result, Err(Error::RelativeHumidityOutOfRange { value: 1.2 }));

        let wet_bulb_high = PsychrometricInput::new(
            celsius(30.0),
            HumidityInput::WetBulb(celsius(35.0)),
            sea_level(),
        );
        assert!(matches!(
            solve(&wet_bulb_high),
            Err(Error::WetBulbExceedsDryBulb { .. })
        ));

        let wet_bulb_low = PsychrometricInput::new(
            celsius(40.0),
            HumidityInput::WetBulb(celsius(0.0)),
            sea_level(),
        );
        assert!(matches!(
            solve(&wet_bulb_low),
            Err(Error::WetBulbTooLow { .. })
        ));

        let dew_point_high = PsychrometricInput::new(
            celsius(20.0),
            HumidityInput::DewPoint(celsius(25.0)),
            sea_level(),
        );
        assert!(matches!(
            solve(&dew_point_high),
            Err(Error::DewPointExceedsDryBulb { .. })
        ));
    }

    #[test]
    fn blank_fields_are_missing_input() {
        let result = solve(&rh_input(f64::NAN, 0.5));
        assert_eq!(result, Err(Error::MissingInput { field: "dry_bulb" }));

        let result = solve(&rh_input(20.0, f64::NAN));
        assert_eq!(result, Err(Error::MissingInput { field: "humidity" }));

        let blank_pressure = PsychrometricInput::new(
            celsius(20.0),
            HumidityInput::RelativeHumidity(Ratio::new::<ratio>(0.5)),
            PressureInput::Absolute(Pressure::new::<kilopascal>(f64::NAN)),
        );
        assert_eq!(
            solve(&blank_pressure),
            Err(Error::MissingInput { field: "pressure" })
        );
    }

    #[test]
    fn temperatures_below_absolute_zero_are_rejected() {
        let result = solve(&rh_input(-280.0, 0.5));
        assert!(matches!(
            result,
            Err(Error::BelowAbsoluteZero {
                field: "dry_bulb",
                ..
            })
        ));

        let dew_point = PsychrometricInput::new(
            celsius(20.0),
            HumidityInput::DewPoint(celsius(-300.0)),
            sea_level(),
        );
        assert!(matches!(
            solve(&dew_point),
            Err(Error::BelowAbsoluteZero {
                field: "dew_point",
                ..
            })
        ));

        let wet_bulb = PsychrometricInput::new(
            celsius(20.0),
            HumidityInput::WetBulb(celsius(-300.0)),
            sea_level(),
        );
        assert!(matches!(
            solve(&wet_bulb),
            Err(Error::BelowAbsoluteZero {
                field: "wet_bulb",
                ..
            })
        ));
    }

    #[test]
    fn iteration_cap_surfaces_as_non_convergence() {
        let mut config = Config::default();
        config.wet_bulb.max_iters = 3;

        let result = Psychrometrics::new(config).call(&rh_input(24.0, 0.5));

        assert!(matches!(result, Err(Error::NonConvergence { iters: 3, .. })));
    }

    #[test]
    fn elevation_input_lowers_pressure() {
        let input = PsychrometricInput::new(
            celsius(24.0),
            HumidityInput::RelativeHumidity(Ratio::new::<ratio>(0.5)),
            PressureInput::Elevation(Length::new::<meter>(306.0)),
        );

        let state = solve(&input).unwrap();
        let at_sea_level = solve(&rh_input(24.0, 0.5)).unwrap();

        assert_relative_eq!(
            state.barometric_pressure.get::<kilopascal>(),
            97.705,
            epsilon = 1e-3
        );
        assert!(state.humidity_ratio > at_sea_level.humidity_ratio);
        assert!(state.density < at_sea_level.density);
    }

    #[test]
    fn wind_chill_only_with_wind_speed() {
        let calm = solve(&rh_input(0.0, 0.5)).unwrap();
        assert_eq!(calm.wind_chill, None);

        let windy = solve(
            &rh_input(0.0, 0.5).with_wind_speed(Velocity::new::<meter_per_second>(5.0)),
        )
        .unwrap();
        let chill = windy.wind_chill.unwrap().get::<degree_celsius>();
        assert_relative_eq!(chill, -4.916_369, epsilon = 1e-6);
    }

    #[test]
    fn boiling_dry_bulb_reports_zero_saturation() {
        let input = PsychrometricInput::new(
            celsius(120.0),
            HumidityInput::DewPoint(celsius(20.0)),
            sea_level(),
        );

        let state = solve(&input).unwrap();

        let pw = saturation::saturation_pressure(20.0);
        let pws = saturation::saturation_pressure(120.0);
        assert_relative_eq!(state.degree_of_saturation.get::<ratio>(), 0.0);
        assert_relative_eq!(state.relative_humidity.get::<ratio>(), pw / pws, epsilon = 1e-12);
        assert!(state.wet_bulb < state.dry_bulb);
    }
}
