//! Thermophysical properties of the dry air and water vapor mixture.
//!
//! Inputs are the dry bulb in °C, the humidity ratio in kg/kg dry air and the
//! barometric pressure in kPa. Energies are in kJ/kg and specific heats in
//! kJ/(kg·K).

use crate::humidity::MOLECULAR_WEIGHT_RATIO;

const CELSIUS_TO_KELVIN: f64 = 273.15;

/// Specific gas constant of dry air, kJ/(kg·K).
pub const GAS_CONSTANT_DRY_AIR: f64 = 0.287_055;

/// Specific gas constant of water vapor, kJ/(kg·K).
pub const GAS_CONSTANT_WATER_VAPOR: f64 = 0.461_520;

const UNIVERSAL_GAS_CONSTANT: f64 = 8.314_472;
const MOLAR_MASS_WATER: f64 = 18.015_28;
const MOLAR_MASS_DRY_AIR: f64 = 28.964_43;
const STANDARD_GRAVITY: f64 = 9.806_65;

// Dimensionless cp/R as a quartic in kelvin.
const DRY_AIR_CP: [f64; 5] = [3.653, -1.337e-3, 3.294e-6, -1.913e-9, 0.2763e-12];
const WATER_VAPOR_CP: [f64; 5] = [4.070, -1.108e-3, 4.152e-6, -2.964e-9, 0.807e-12];

fn quartic([a, b, c, d, e]: [f64; 5], t: f64) -> f64 {
    a + t * (b + t * (c + t * (d + t * e)))
}

/// Isobaric specific heat of dry air at `t_c` (°C).
#[must_use]
pub fn cp_dry_air(t_c: f64) -> f64 {
    quartic(DRY_AIR_CP, t_c + CELSIUS_TO_KELVIN) * GAS_CONSTANT_DRY_AIR
}

/// Isobaric specific heat of water vapor at `t_c` (°C).
#[must_use]
pub fn cp_water_vapor(t_c: f64) -> f64 {
    quartic(WATER_VAPOR_CP, t_c + CELSIUS_TO_KELVIN) * GAS_CONSTANT_WATER_VAPOR
}

/// Every property of the mixture that follows directly from dry bulb,
/// humidity ratio and pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mixture {
    pub mole_fraction_water: f64,
    /// kg/kmol.
    pub molecular_weight: f64,
    pub gas_constant: f64,
    pub cp_dry_air: f64,
    pub cp_water_vapor: f64,
    pub cp: f64,
    pub cv: f64,
    pub specific_heat_ratio: f64,
    pub entropy: f64,
    /// `√(k·R·T·g)` with `R` in kJ/(kg·K).
    pub speed_of_sound: f64,
    pub enthalpy: f64,
    pub sensible_enthalpy: f64,
    pub latent_enthalpy: f64,
    pub internal_energy: f64,
    /// m³ per kg of dry air.
    pub specific_volume: f64,
    /// kg/m³ of moist air.
    pub density: f64,
    /// kg of water per m³.
    pub absolute_humidity: f64,
    /// °C.
    pub virtual_temperature: f64,
    pub specific_humidity: f64,
}

impl Mixture {
    /// Evaluates the mixture at dry bulb `t_db` (°C), humidity ratio `w`, and
    /// barometric pressure `p` (kPa).
    #[must_use]
    pub fn evaluate(t_db: f64, w: f64, p: f64) -> Self {
        let t = t_db + CELSIUS_TO_KELVIN;

        let mole_fraction_water = w / (w + MOLECULAR_WEIGHT_RATIO);
        let molecular_weight = mole_fraction_water * MOLAR_MASS_WATER
            + (1.0 - mole_fraction_water) * MOLAR_MASS_DRY_AIR;
        let gas_constant = UNIVERSAL_GAS_CONSTANT / molecular_weight;

        let cp_a = cp_dry_air(t_db);
        let cp_w = cp_water_vapor(t_db);
        let cp = cp_a * (1.0 - mole_fraction_water) + cp_w * mole_fraction_water;
        let cv = cp - gas_constant;
        let specific_heat_ratio = cp / cv;

        let log_ratio = (t / CELSIUS_TO_KELVIN).ln();
        let entropy_air = cp_a * log_ratio;
        let entropy_vapor = 9.754_41 - cp_w * log_ratio;
        let entropy = entropy_air + entropy_vapor * w;

        let speed_of_sound = (specific_heat_ratio * gas_constant * t * STANDARD_GRAVITY).sqrt();

        let enthalpy = 1.006 * t_db + w * (2501.0 + 1.805 * t_db);
        let sensible_enthalpy = t_db * cp_a;
        let latent_enthalpy = enthalpy - sensible_enthalpy;
        let internal_energy = enthalpy - gas_constant * t;

        let specific_volume = GAS_CONSTANT_DRY_AIR * t * (1.0 + 1.607_768_74 * w) / p;
        let density = (1.0 + w) / specific_volume;
        let absolute_humidity = density - 1.0 / specific_volume;
        let virtual_temperature = (1.0 + 0.608 * w) * t - CELSIUS_TO_KELVIN;

        Self {
            mole_fraction_water,
            molecular_weight,
            gas_constant,
            cp_dry_air: cp_a,
            cp_water_vapor: cp_w,
            cp,
            cv,
            specific_heat_ratio,
            entropy,
            speed_of_sound,
            enthalpy,
            sensible_enthalpy,
            latent_enthalpy,
            internal_energy,
            specific_volume,
            density,
            absolute_humidity,
            virtual_temperature,
            specific_humidity: w / (1.0 + w),
        }
    }

    /// Mole fraction of dry air, `1 − x_w`.
    #[must_use]
    pub fn mole_fraction_dry_air(&self) -> f64 {
        1.0 - self.mole_fraction_water
    }

    /// Volume of moist air per kg of mixture, `1/ρ`.
    #[must_use]
    pub fn moist_specific_volume(&self) -> f64 {
        self.density.recip()
    }
}
