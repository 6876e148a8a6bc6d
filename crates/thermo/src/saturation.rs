//! Saturation vapor pressure of water per ASHRAE Handbook of Fundamentals
//! (1993) and ANSI/ASHRAE 41.6-1994.
//!
//! Both correlations take the form
//! `ln(p) = C₁/T + C₂ + C₃·T + C₄·T² + C₅·T³ [+ C₆·T⁴] + C₇·ln(T)`
//! with `T` in kelvin and `p` in kPa.

const CELSIUS_TO_KELVIN: f64 = 273.15;

// Over ice, −100 °C to 0 °C.
const ICE: [f64; 7] = [
    -5_674.535_9,
    -0.515_230_58,
    -0.009_677_843_0,
    0.000_000_622_157_01,
    0.000_000_002_074_782_5,
    -0.000_000_000_000_948_402_40,
    4.163_501_9,
];

// Over liquid water, 0 °C to 200 °C.
const WATER: [f64; 6] = [
    -5_800.220_6,
    -5.516_256_0,
    -0.048_640_239,
    0.000_041_764_768,
    -0.000_000_014_452_093,
    6.545_967_3,
];

/// Which saturation correlation applies at a temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Saturation over liquid water, used at and above 0 °C.
    Water,
    /// Saturation over ice, used below 0 °C.
    Ice,
}

impl Branch {
    /// Selects the branch for a temperature in °C.
    ///
    /// The split is exact at 0 °C with no blending.
    #[must_use]
    pub fn for_temperature(t_c: f64) -> Self {
        if t_c < 0.0 { Self::Ice } else { Self::Water }
    }

    /// Evaluates this branch's correlation at `t_c` (°C), returning kPa.
    #[must_use]
    pub fn pressure(self, t_c: f64) -> f64 {
        match self {
            Self::Water => pressure_over_water(t_c),
            Self::Ice => pressure_over_ice(t_c),
        }
    }
}

/// Saturation pressure over liquid water in kPa at `t_c` (°C).
#[must_use]
pub fn pressure_over_water(t_c: f64) -> f64 {
    let t = t_c + CELSIUS_TO_KELVIN;
    let [c8, c9, c10, c11, c12, c13] = WATER;
    (c8 / t + c9 + c10 * t + c11 * t.powi(2) + c12 * t.powi(3) + c13 * t.ln()).exp()
}

/// Saturation pressure over ice in kPa at `t_c` (°C).
#[must_use]
pub fn pressure_over_ice(t_c: f64) -> f64 {
    let t = t_c + CELSIUS_TO_KELVIN;
    let [c1, c2, c3, c4, c5, c6, c7] = ICE;
    (c1 / t + c2 + c3 * t + c4 * t.powi(2) + c5 * t.powi(3) + c6 * t.powi(4) + c7 * t.ln()).exp()
}

/// Saturation pressure in kPa at `t_c` (°C), over ice below 0 °C and over
/// water otherwise.
#[must_use]
pub fn saturation_pressure(t_c: f64) -> f64 {
    Branch::for_temperature(t_c).pressure(t_c)
}
