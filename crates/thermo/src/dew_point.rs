//! Dew point from water vapor pressure (ASHRAE two-branch fit).
//!
//! The fit is `Tdp = 6.54 + 14.526·a + 0.7389·a² + 0.09486·a³ + 0.4569·pw^0.1984`
//! with `a = ln(pw)`, pw in kPa. When that estimate falls below 0 °C the
//! low-temperature fit `6.09 + 12.608·a + 0.4959·a²` replaces it. The two
//! branches are not blended.

/// Dew point reported for perfectly dry air.
pub const ABSOLUTE_ZERO_C: f64 = -273.15;

const HIGH: [f64; 5] = [6.54, 14.526, 0.7389, 0.09486, 0.4569];
const HIGH_EXPONENT: f64 = 0.1984;
const LOW: [f64; 3] = [6.09, 12.608, 0.4959];

/// Raw two-branch polynomial estimate of the dew point in °C.
///
/// Undefined for `pw ≤ 0`; callers handle dry air through [`estimate`].
#[must_use]
pub fn polynomial(pw: f64) -> f64 {
    let a = pw.ln();
    let [c14, c15, c16, c17, c18] = HIGH;
    let high = c14 + c15 * a + c16 * a.powi(2) + c17 * a.powi(3) + c18 * pw.powf(HIGH_EXPONENT);
    if high < 0.0 {
        let [d0, d1, d2] = LOW;
        d0 + d1 * a + d2 * a.powi(2)
    } else {
        high
    }
}

/// Dew point in °C with the saturation and dry-air overrides applied.
///
/// The overrides are checked after the polynomial, with later ones taking
/// precedence:
///
/// 1. relative humidity of one gives the dry bulb,
/// 2. a wet bulb equal to the dry bulb gives the dry bulb,
/// 3. relative humidity of zero gives absolute zero.
///
/// Equality is tested within `tol` (°C for temperatures, fraction for
/// relative humidity). Pass `None` for `t_wb` when the wet bulb is not yet
/// known.
///
/// Below about −32 °C the low-temperature fit can land above the dry bulb
/// for nearly saturated air, so the result is capped at `t_db`.
#[must_use]
pub fn estimate(pw: f64, relative_humidity: f64, t_db: f64, t_wb: Option<f64>, tol: f64) -> f64 {
    if relative_humidity.abs() <= tol {
        return ABSOLUTE_ZERO_C;
    }
    let saturated = (relative_humidity - 1.0).abs() <= tol;
    let equal_bulbs = t_wb.is_some_and(|t_wb| (t_db - t_wb).abs() <= tol);
    if saturated || equal_bulbs {
        return t_db;
    }
    polynomial(pw).min(t_db)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::saturation;

    const TOL: f64 = 1e-9;

    #[test]
    fn above_freezing_uses_primary_fit() {
        assert_relative_eq!(polynomial(1.5), 13.052_76, epsilon = 1e-4);
        assert_relative_eq!(polynomial(3.0), 24.084_21, epsilon = 1e-4);
    }

    #[test]
    fn below_freezing_switches_to_low_fit() {
        // The primary fit gives about −23.86 °C here.
        assert_relative_eq!(polynomial(0.1), -20.311_78, epsilon = 1e-4);
        assert_relative_eq!(polynomial(0.01), -41.455_14, epsilon = 1e-4);
    }

    #[test]
    fn freezing_point_vapor_pressure_is_near_zero() {
        let pw = saturation::pressure_over_water(0.0);
        assert_relative_eq!(polynomial(pw), 0.0, epsilon = 5e-3);
    }

    #[test]
    fn saturated_air_returns_dry_bulb() {
        let pw = saturation::saturation_pressure(24.0);
        assert_relative_eq!(estimate(pw, 1.0, 24.0, None, TOL), 24.0);
    }

    #[test]
    fn equal_bulbs_return_dry_bulb() {
        let pw = saturation::saturation_pressure(24.0);
        assert_relative_eq!(estimate(pw, 0.999_9, 24.0, Some(24.0), TOL), 24.0);
    }

    #[test]
    fn dry_air_returns_absolute_zero() {
        assert_relative_eq!(estimate(0.0, 0.0, 24.0, None, TOL), ABSOLUTE_ZERO_C);
        assert_relative_eq!(estimate(0.0, 0.0, 24.0, Some(24.0), TOL), ABSOLUTE_ZERO_C);
    }

    #[test]
    fn cold_fit_is_capped_at_dry_bulb() {
        let pw = 0.98 * saturation::saturation_pressure(-39.5);
        assert!(polynomial(pw) > -39.5);
        assert_relative_eq!(estimate(pw, 0.98, -39.5, None, TOL), -39.5);
    }

    #[test]
    fn tolerance_controls_near_equality() {
        let pw = 1.5;
        let near = 24.0 - 1e-6;

        assert_relative_eq!(estimate(pw, 0.5, 24.0, Some(near), 1e-5), 24.0);
        assert_relative_eq!(estimate(pw, 0.5, 24.0, Some(near), TOL), polynomial(pw));
    }
}
