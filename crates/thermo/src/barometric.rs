use uom::si::{
    f64::{Length, Pressure},
    length::{meter, millimeter},
    pressure::kilopascal,
};

use crate::Error;

/// Standard sea-level pressure in inches of mercury.
const SEA_LEVEL_INHG: f64 = 29.921;
const KPA_PER_INHG: f64 = 3.386_50;
const KPA_PER_MMHG: f64 = 0.133_31;
const METERS_PER_FOOT: f64 = 0.3048;

/// How the barometric pressure is specified.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PressureInput {
    /// Elevation above sea level, converted with the standard-atmosphere fit.
    Elevation(Length),
    /// Absolute pressure in any pressure unit.
    Absolute(Pressure),
    /// Height of a mercury column, converted at 0.13331 kPa per mm.
    MercuryColumn(Length),
}

impl PressureInput {
    /// The supplied number before conversion: meters, kPa, or mm of mercury.
    #[must_use]
    pub fn value(&self) -> f64 {
        match *self {
            Self::Elevation(elevation) => elevation.get::<meter>(),
            Self::Absolute(pressure) => pressure.get::<kilopascal>(),
            Self::MercuryColumn(column) => column.get::<millimeter>(),
        }
    }

    /// Resolves the barometric pressure in kPa.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBarometricPressure`] if the result is not a
    /// finite positive number, which includes elevations beyond the top of the
    /// fitted atmosphere.
    pub fn barometric_pressure(&self) -> Result<f64, Error> {
        let kpa = match *self {
            Self::Elevation(elevation) => {
                let feet = elevation.get::<meter>() / METERS_PER_FOOT;
                SEA_LEVEL_INHG * (1.0 - 6.875_35e-6 * feet).powf(5.256) * KPA_PER_INHG
            }
            Self::Absolute(pressure) => pressure.get::<kilopascal>(),
            Self::MercuryColumn(column) => column.get::<millimeter>() * KPA_PER_MMHG,
        };

        if kpa.is_finite() && kpa > 0.0 {
            Ok(kpa)
        } else {
            Err(Error::InvalidBarometricPressure { value: kpa })
        }
    }
}
