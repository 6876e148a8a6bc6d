//! Wind chill index (NWS 2001), evaluated in °F and mph.
//!
//! The index is defined for cold air and a moving wind. Callers decide
//! whether it applies; no range is enforced here.

const METERS_PER_SECOND_PER_MPH: f64 = 0.447_04;

/// Wind chill in °C for dry bulb `t_db` (°C) and wind speed in m/s.
#[must_use]
pub fn wind_chill(t_db: f64, wind_speed: f64) -> f64 {
    let f = t_db * 1.8 + 32.0;
    let v = (wind_speed / METERS_PER_SECOND_PER_MPH).powf(0.16);
    let index_f = 35.74 + 0.6215 * f - 35.75 * v + 0.4275 * f * v;
    (index_f - 32.0) / 1.8
}
