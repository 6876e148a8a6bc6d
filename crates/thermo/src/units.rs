//! Quantity aliases for the specific (per-mass) properties reported by the
//! solver, which `uom` does not name directly.

use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{TemperatureInterval, ThermodynamicTemperature},
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::kelvin as abs_kelvin,
    },
    typenum::{N1, N2, P2, Z0},
};

/// Specific gas constant, J/kg·K in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Specific enthalpy, J/kg in SI.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Specific entropy, J/kg·K in SI.
pub type SpecificEntropy = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Specific internal energy, J/kg in SI.
pub type SpecificInternalEnergy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Computes the signed difference `to − from` between two temperatures.
///
/// A `TemperatureInterval` is a distinct quantity from a
/// `ThermodynamicTemperature`, so the difference is taken in kelvin and
/// returned as an interval that can be read in any compatible unit.
#[inline]
#[must_use]
pub fn temperature_difference(
    from: ThermodynamicTemperature,
    to: ThermodynamicTemperature,
) -> TemperatureInterval {
    TemperatureInterval::new::<delta_kelvin>(to.get::<abs_kelvin>() - from.get::<abs_kelvin>())
}
