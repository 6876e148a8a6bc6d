//! Shared fixtures for the cross-crate scenario tests.

use std::path::Path;

use psychro_thermo::{Error, InputBuilder, PsychrometricInput};
use serde::Deserialize;

/// Chart points loaded from `fixtures/chart_points.toml`.
#[derive(Debug, Deserialize)]
pub struct ChartPoints {
    #[serde(rename = "point")]
    pub points: Vec<ChartPoint>,
}

/// One reference state with the raw numbers a user would type in.
///
/// Blank fields stay `None` so the fixture exercises the same missing-input
/// path as a partially filled form.
#[derive(Debug, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub dry_bulb: Option<f64>,
    pub relative_humidity: Option<f64>,
    pub wet_bulb: Option<f64>,
    pub dew_point: Option<f64>,
    pub pressure_kpa: Option<f64>,
    pub pressure_mmhg: Option<f64>,
    pub elevation: Option<f64>,
    pub expected: Expected,
}

/// Expected values in °C, kPa, kg/kg, and kJ/kg.
#[derive(Debug, Deserialize)]
pub struct Expected {
    pub barometric_pressure: Option<f64>,
    pub relative_humidity: Option<f64>,
    pub humidity_ratio: f64,
    pub wet_bulb: f64,
    pub dew_point: f64,
    pub enthalpy: f64,
}

impl ChartPoint {
    /// Builds the solver input from whichever fields are present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingInput`] if a required field is blank.
    pub fn input(&self) -> Result<PsychrometricInput, Error> {
        let mut builder = InputBuilder::default();
        if let Some(t) = self.dry_bulb {
            builder = builder.dry_bulb(t);
        }
        if let Some(rh) = self.relative_humidity {
            builder = builder.relative_humidity(rh);
        }
        if let Some(t) = self.wet_bulb {
            builder = builder.wet_bulb(t);
        }
        if let Some(t) = self.dew_point {
            builder = builder.dew_point(t);
        }
        if let Some(p) = self.pressure_kpa {
            builder = builder.pressure_kpa(p);
        }
        if let Some(mm) = self.pressure_mmhg {
            builder = builder.pressure_mmhg(mm);
        }
        if let Some(m) = self.elevation {
            builder = builder.elevation(m);
        }
        builder.build()
    }
}

/// Parses chart points from TOML text.
///
/// # Errors
///
/// Returns the TOML error if the text does not match [`ChartPoints`].
pub fn parse_chart_points(text: &str) -> Result<ChartPoints, toml::de::Error> {
    toml::from_str(text)
}

/// Loads the bundled chart point fixture.
///
/// # Panics
///
/// Panics if the fixture is missing or malformed.
#[must_use]
pub fn chart_points() -> ChartPoints {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/chart_points.toml");
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("cannot read {}: {err}", path.display()));
    parse_chart_points(&text).unwrap_or_else(|err| panic!("invalid {}: {err}", path.display()))
}
