//! Conversions between water vapor pressure and humidity ratio, and the
//! psychrometric wet-bulb relation.
//!
//! Pressures are in kPa, temperatures in °C, humidity ratios in kg of water
//! per kg of dry air.

use crate::{Error, saturation};

/// Ratio of the molecular weights of water and dry air.
pub const MOLECULAR_WEIGHT_RATIO: f64 = 0.62198;

/// Humidity ratio of air at barometric pressure `p` holding water vapor at
/// partial pressure `pw`, `W = 0.62198·pw / (p − pw)`.
///
/// # Errors
///
/// Returns [`Error::VaporPressureExceedsBarometric`] when `pw ≥ p`, where the
/// humidity ratio is undefined or negative.
pub fn humidity_ratio_from_pressures(p: f64, pw: f64) -> Result<f64, Error> {
    if pw >= p {
        return Err(Error::VaporPressureExceedsBarometric {
            vapor_pressure: pw,
            barometric_pressure: p,
        });
    }
    Ok(MOLECULAR_WEIGHT_RATIO * pw / (p - pw))
}

/// Humidity ratio of saturated air at temperature `t` and pressure `p`.
///
/// # Errors
///
/// Returns [`Error::VaporPressureExceedsBarometric`] when `t` is at or above
/// the boiling point at `p`.
pub fn saturation_humidity_ratio(p: f64, t: f64) -> Result<f64, Error> {
    humidity_ratio_from_pressures(p, saturation::saturation_pressure(t))
}

/// Humidity ratio implied by a dry bulb, a wet bulb, and the saturation
/// humidity ratio at the wet bulb (ASHRAE psychrometric relation).
///
/// `t_wb` appears in both the numerator and the denominator, so recovering
/// the wet bulb from a humidity ratio requires iteration.
#[must_use]
pub fn humidity_ratio_from_wet_bulb(t_db: f64, t_wb: f64, ws_wb: f64) -> f64 {
    ((2501.0 - 2.381 * t_wb) * ws_wb - (t_db - t_wb)) / (2501.0 + 1.805 * t_db - 4.186 * t_wb)
}

/// Partial pressure of water vapor for humidity ratio `w` at pressure `p`.
#[must_use]
pub fn vapor_pressure_from_humidity_ratio(p: f64, w: f64) -> f64 {
    p * w / (MOLECULAR_WEIGHT_RATIO + w)
}

/// Relative humidity from the degree of saturation `mu`, the saturation
/// pressure at dry bulb `pws`, and barometric pressure `p`.
#[must_use]
pub fn relative_humidity_from_saturation(mu: f64, pws: f64, p: f64) -> f64 {
    mu / (1.0 - (1.0 - mu) * (pws / p))
}
