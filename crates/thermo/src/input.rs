use uom::si::{
    f64::{Length, Pressure, Ratio, ThermodynamicTemperature, Velocity},
    length::{meter, millimeter},
    pressure::kilopascal,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

use crate::{Error, barometric::PressureInput};

/// The single humidity measurement that fixes the state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HumidityInput {
    /// Relative humidity as a fraction in `[0, 1]`.
    RelativeHumidity(Ratio),
    WetBulb(ThermodynamicTemperature),
    DewPoint(ThermodynamicTemperature),
}

/// Which kind of humidity measurement was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HumidityMode {
    RelativeHumidity,
    WetBulb,
    DewPoint,
}

impl HumidityInput {
    #[must_use]
    pub fn mode(&self) -> HumidityMode {
        match self {
            Self::RelativeHumidity(_) => HumidityMode::RelativeHumidity,
            Self::WetBulb(_) => HumidityMode::WetBulb,
            Self::DewPoint(_) => HumidityMode::DewPoint,
        }
    }

    /// The raw value in the solver's units: a fraction for relative humidity
    /// and °C for temperatures.
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::RelativeHumidity(rh) => rh.get::<ratio>(),
            Self::WetBulb(t) | Self::DewPoint(t) => t.get::<degree_celsius>(),
        }
    }
}

/// Everything needed to solve one psychrometric state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsychrometricInput {
    pub dry_bulb: ThermodynamicTemperature,
    pub humidity: HumidityInput,
    pub pressure: PressureInput,
    /// Only used for wind chill.
    pub wind_speed: Option<Velocity>,
}

impl PsychrometricInput {
    /// Creates an input without wind speed.
    #[must_use]
    pub fn new(
        dry_bulb: ThermodynamicTemperature,
        humidity: HumidityInput,
        pressure: PressureInput,
    ) -> Self {
        Self {
            dry_bulb,
            humidity,
            pressure,
            wind_speed: None,
        }
    }

    /// Returns a builder taking plain numbers in °C, kPa, m, and m/s.
    #[must_use]
    pub fn builder() -> InputBuilder {
        InputBuilder::default()
    }

    /// Sets the wind speed used for wind chill.
    #[must_use]
    pub fn with_wind_speed(self, wind_speed: Velocity) -> Self {
        Self {
            wind_speed: Some(wind_speed),
            ..self
        }
    }
}

/// Assembles a [`PsychrometricInput`] from fields that may be blank.
///
/// A field that was never set, or was set to a non-finite number, is reported
/// as [`Error::MissingInput`] by [`build`](Self::build). Fields are checked in
/// the order dry bulb, humidity, pressure, wind speed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputBuilder {
    dry_bulb: Option<f64>,
    humidity: Option<(HumidityMode, f64)>,
    pressure: Option<PressureField>,
    wind_speed: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PressureField {
    Elevation(f64),
    Kilopascals(f64),
    MillimetersOfMercury(f64),
}

impl InputBuilder {
    /// Dry bulb in °C.
    #[must_use]
    pub fn dry_bulb(mut self, celsius: f64) -> Self {
        self.dry_bulb = Some(celsius);
        self
    }

    /// Relative humidity as a fraction.
    #[must_use]
    pub fn relative_humidity(mut self, fraction: f64) -> Self {
        self.humidity = Some((HumidityMode::RelativeHumidity, fraction));
        self
    }

    /// Wet bulb in °C.
    #[must_use]
    pub fn wet_bulb(mut self, celsius: f64) -> Self {
        self.humidity = Some((HumidityMode::WetBulb, celsius));
        self
    }

    /// Dew point in °C.
    #[must_use]
    pub fn dew_point(mut self, celsius: f64) -> Self {
        self.humidity = Some((HumidityMode::DewPoint, celsius));
        self
    }

    /// Elevation above sea level in meters.
    #[must_use]
    pub fn elevation(mut self, meters: f64) -> Self {
        self.pressure = Some(PressureField::Elevation(meters));
        self
    }

    /// Absolute pressure in kPa.
    #[must_use]
    pub fn pressure_kpa(mut self, kpa: f64) -> Self {
        self.pressure = Some(PressureField::Kilopascals(kpa));
        self
    }

    /// Absolute pressure in mm of mercury.
    #[must_use]
    pub fn pressure_mmhg(mut self, mm: f64) -> Self {
        self.pressure = Some(PressureField::MillimetersOfMercury(mm));
        self
    }

    /// Wind speed in m/s.
    #[must_use]
    pub fn wind_speed(mut self, meters_per_second: f64) -> Self {
        self.wind_speed = Some(meters_per_second);
        self
    }

    /// Validates that every required field is present and finite.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingInput`] naming the first blank field.
    pub fn build(self) -> Result<PsychrometricInput, Error> {
        let dry_bulb = required(self.dry_bulb, "dry_bulb")?;

        let (mode, value) = self.humidity.ok_or(Error::MissingInput { field: "humidity" })?;
        let value = required(Some(value), "humidity")?;
        let humidity = match mode {
            HumidityMode::RelativeHumidity => {
                HumidityInput::RelativeHumidity(Ratio::new::<ratio>(value))
            }
            HumidityMode::WetBulb => HumidityInput::WetBulb(celsius(value)),
            HumidityMode::DewPoint => HumidityInput::DewPoint(celsius(value)),
        };

        let pressure = match self.pressure {
            Some(PressureField::Elevation(m)) => {
                PressureInput::Elevation(Length::new::<meter>(required(Some(m), "pressure")?))
            }
            Some(PressureField::Kilopascals(kpa)) => PressureInput::Absolute(
                Pressure::new::<kilopascal>(required(Some(kpa), "pressure")?),
            ),
            Some(PressureField::MillimetersOfMercury(mm)) => PressureInput::MercuryColumn(
                Length::new::<millimeter>(required(Some(mm), "pressure")?),
            ),
            None => return Err(Error::MissingInput { field: "pressure" }),
        };

        let wind_speed = self
            .wind_speed
            .map(|v| required(Some(v), "wind_speed").map(Velocity::new::<meter_per_second>))
            .transpose()?;

        Ok(PsychrometricInput {
            dry_bulb: celsius(dry_bulb),
            humidity,
            pressure,
            wind_speed,
        })
    }
}

fn required(value: Option<f64>, field: &'static str) -> Result<f64, Error> {
    value
        .filter(|v| v.is_finite())
        .ok_or(Error::MissingInput { field })
}

fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}
