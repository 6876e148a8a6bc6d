//! Moist-air psychrometrics based on the ASHRAE correlations.
//!
//! Given a dry bulb, one humidity measurement (relative humidity, wet bulb, or
//! dew point), and a barometric pressure specification, [`solve`] returns the
//! full [`PsychrometricState`] of the air and water vapor mixture.
//!
//! ```ignore
//! use psychro_thermo::{PsychrometricInput, solve};
//!
//! let input = PsychrometricInput::builder()
//!     .dry_bulb(24.0)
//!     .relative_humidity(0.5)
//!     .pressure_kpa(101.325)
//!     .build()?;
//! let state = solve(&input)?;
//! ```
//!
//! The correlation modules work in plain `f64` values in °C and kPa so they
//! can be composed without unit conversions. The input and state records use
//! `uom` quantities.

mod config;
mod error;
mod input;
mod solve;
mod state;

pub mod barometric;
pub mod dew_point;
pub mod humidity;
pub mod mixture;
pub mod saturation;
pub mod units;
pub mod wet_bulb;
pub mod wind_chill;

pub use barometric::PressureInput;
pub use config::Config;
pub use error::Error;
pub use input::{HumidityInput, HumidityMode, InputBuilder, PsychrometricInput};
pub use solve::{Psychrometrics, solve};
pub use state::{PsychrometricState, Scope};
