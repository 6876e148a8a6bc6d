use thiserror::Error;

/// Reasons a psychrometric solve can fail.
///
/// Every variant is a recoverable validation outcome: the solver returns it
/// instead of a state and the caller decides how to present it.
/// Temperatures are in °C and pressures in kPa.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A required input was not supplied or is not a finite number.
    #[error("missing input: {field}")]
    MissingInput { field: &'static str },

    /// The wet bulb implies a negative humidity ratio or relative humidity.
    #[error("wet bulb {wet_bulb} °C is too low for dry bulb {dry_bulb} °C")]
    WetBulbTooLow { dry_bulb: f64, wet_bulb: f64 },

    /// The wet bulb is above the dry bulb.
    #[error("wet bulb {wet_bulb} °C cannot exceed dry bulb {dry_bulb} °C")]
    WetBulbExceedsDryBulb { dry_bulb: f64, wet_bulb: f64 },

    /// The dew point is above the dry bulb.
    #[error("dew point {dew_point} °C cannot exceed dry bulb {dry_bulb} °C")]
    DewPointExceedsDryBulb { dry_bulb: f64, dew_point: f64 },

    /// A temperature input is below absolute zero.
    #[error("{field} {value} °C is below absolute zero")]
    BelowAbsoluteZero { field: &'static str, value: f64 },

    /// The relative humidity is outside `[0, 1]`.
    #[error("relative humidity {value} must be between 0 and 1 inclusive")]
    RelativeHumidityOutOfRange { value: f64 },

    /// The water vapor pressure reaches the barometric pressure, leaving the
    /// humidity ratio undefined.
    #[error(
        "vapor pressure {vapor_pressure} kPa must be below barometric pressure {barometric_pressure} kPa"
    )]
    VaporPressureExceedsBarometric {
        vapor_pressure: f64,
        barometric_pressure: f64,
    },

    /// The resolved barometric pressure is not a finite positive number.
    #[error("barometric pressure {value} kPa is not a finite positive number")]
    InvalidBarometricPressure { value: f64 },

    /// The wet-bulb search hit its iteration cap.
    #[error(
        "wet bulb search did not converge after {iters} iterations (last estimate {wet_bulb} °C, residual {residual})"
    )]
    NonConvergence {
        iters: usize,
        wet_bulb: f64,
        residual: f64,
    },

    /// The solver configuration is invalid.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A numerical failure occurred while solving.
    #[error("calculation error: {0}")]
    Calculation(String),
}
