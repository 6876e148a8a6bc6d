use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{
        MassDensity, MolarMass, Pressure, Ratio, SpecificHeatCapacity, SpecificVolume,
        TemperatureInterval, ThermodynamicTemperature,
    },
    mass_density::kilogram_per_cubic_meter,
    molar_mass::gram_per_mole,
    pressure::kilopascal,
    ratio::ratio,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    specific_volume::cubic_meter_per_kilogram,
    thermodynamic_temperature::degree_celsius,
};

use crate::{
    input::HumidityMode,
    mixture::Mixture,
    units::{
        SpecificEnthalpy, SpecificEntropy, SpecificGasConstant, SpecificInternalEnergy,
        temperature_difference,
    },
};

/// Whether a state lies within the ANSI/ASHRAE 41.6-1994 applicability range.
///
/// A state outside the range is still fully computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scope {
    Within,
    Outside,
}

impl Scope {
    /// Classifies a state from its dew point, dry bulb, and wet bulb in °C.
    ///
    /// The dew point must lie in `[−45, 93]` and both bulbs in `[−100, 200]`.
    #[must_use]
    pub fn classify(dew_point: f64, dry_bulb: f64, wet_bulb: f64) -> Self {
        let bulb_in_range = |t: f64| (-100.0..=200.0).contains(&t);
        if (-45.0..=93.0).contains(&dew_point) && bulb_in_range(dry_bulb) && bulb_in_range(wet_bulb)
        {
            Self::Within
        } else {
            Self::Outside
        }
    }
}

/// The complete thermodynamic state of a moist-air sample.
///
/// Per-mass quantities are per kg of dry air unless noted otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsychrometricState {
    pub humidity_mode: HumidityMode,

    pub dry_bulb: ThermodynamicTemperature,
    pub wet_bulb: ThermodynamicTemperature,
    /// Absolute zero for perfectly dry air.
    pub dew_point: ThermodynamicTemperature,

    pub relative_humidity: Ratio,
    /// Mass of water vapor per mass of dry air.
    pub humidity_ratio: Ratio,
    /// Mass of water vapor per mass of moist air.
    pub specific_humidity: Ratio,
    pub degree_of_saturation: Ratio,

    pub barometric_pressure: Pressure,
    /// Partial pressure of the water vapor.
    pub vapor_pressure: Pressure,
    /// Saturation pressure at the dry bulb.
    pub saturation_pressure: Pressure,

    pub enthalpy: SpecificEnthalpy,
    pub sensible_enthalpy: SpecificEnthalpy,
    pub latent_enthalpy: SpecificEnthalpy,
    pub internal_energy: SpecificInternalEnergy,
    pub entropy: SpecificEntropy,

    /// Volume per mass of dry air.
    pub specific_volume: SpecificVolume,
    /// Volume per mass of moist air, the inverse of `density`.
    pub moist_specific_volume: SpecificVolume,
    pub density: MassDensity,
    /// Mass of water vapor per volume of moist air.
    pub absolute_humidity: MassDensity,

    pub gas_constant: SpecificGasConstant,
    pub cp: SpecificHeatCapacity,
    pub cv: SpecificHeatCapacity,
    pub specific_heat_ratio: Ratio,
    /// `√(k·R·T·g)` with `R` in kJ/(kg·K), `T` in K, and `g = 9.80665`.
    pub speed_of_sound: f64,

    pub mole_fraction_water: Ratio,
    pub mole_fraction_dry_air: Ratio,
    pub molecular_weight: MolarMass,
    pub virtual_temperature: ThermodynamicTemperature,

    /// Present only when a wind speed was supplied.
    pub wind_chill: Option<ThermodynamicTemperature>,
    pub scope: Scope,
}

impl PsychrometricState {
    /// Dry bulb minus wet bulb.
    #[must_use]
    pub fn wet_bulb_depression(&self) -> TemperatureInterval {
        temperature_difference(self.wet_bulb, self.dry_bulb)
    }

    /// Dry bulb minus dew point.
    #[must_use]
    pub fn dew_point_depression(&self) -> TemperatureInterval {
        temperature_difference(self.dew_point, self.dry_bulb)
    }

    #[must_use]
    pub fn is_within_scope(&self) -> bool {
        self.scope == Scope::Within
    }
}

/// Resolved values in the solver's units (°C, kPa, kg/kg).
#[derive(Debug, Clone, Copy)]
pub(crate) struct Resolved {
    pub humidity_mode: HumidityMode,
    pub dry_bulb: f64,
    pub wet_bulb: f64,
    pub dew_point: f64,
    pub relative_humidity: f64,
    pub humidity_ratio: f64,
    pub degree_of_saturation: f64,
    pub barometric_pressure: f64,
    pub vapor_pressure: f64,
    pub saturation_pressure: f64,
    pub mixture: Mixture,
    pub wind_chill: Option<f64>,
}

impl From<Resolved> for PsychrometricState {
    fn from(r: Resolved) -> Self {
        let m = r.mixture;

        Self {
            humidity_mode: r.humidity_mode,
            dry_bulb: celsius(r.dry_bulb),
            wet_bulb: celsius(r.wet_bulb),
            dew_point: celsius(r.dew_point),
            relative_humidity: fraction(r.relative_humidity),
            humidity_ratio: fraction(r.humidity_ratio),
            specific_humidity: fraction(m.specific_humidity),
            degree_of_saturation: fraction(r.degree_of_saturation),
            barometric_pressure: kpa(r.barometric_pressure),
            vapor_pressure: kpa(r.vapor_pressure),
            saturation_pressure: kpa(r.saturation_pressure),
            enthalpy: energy(m.enthalpy),
            sensible_enthalpy: energy(m.sensible_enthalpy),
            latent_enthalpy: energy(m.latent_enthalpy),
            internal_energy: energy(m.internal_energy),
            entropy: SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(m.entropy),
            specific_volume: SpecificVolume::new::<cubic_meter_per_kilogram>(m.specific_volume),
            moist_specific_volume: SpecificVolume::new::<cubic_meter_per_kilogram>(
                m.moist_specific_volume(),
            ),
            density: MassDensity::new::<kilogram_per_cubic_meter>(m.density),
            absolute_humidity: MassDensity::new::<kilogram_per_cubic_meter>(m.absolute_humidity),
            gas_constant: SpecificGasConstant::new::<kilojoule_per_kilogram_kelvin>(m.gas_constant),
            cp: SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(m.cp),
            cv: SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(m.cv),
            specific_heat_ratio: fraction(m.specific_heat_ratio),
            speed_of_sound: m.speed_of_sound,
            mole_fraction_water: fraction(m.mole_fraction_water),
            mole_fraction_dry_air: fraction(m.mole_fraction_dry_air()),
            molecular_weight: MolarMass::new::<gram_per_mole>(m.molecular_weight),
            virtual_temperature: celsius(m.virtual_temperature),
            wind_chill: r.wind_chill.map(celsius),
            scope: Scope::classify(r.dew_point, r.dry_bulb, r.wet_bulb),
        }
    }
}

fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

fn fraction(value: f64) -> Ratio {
    Ratio::new::<ratio>(value)
}

fn kpa(value: f64) -> Pressure {
    Pressure::new::<kilopascal>(value)
}

fn energy(value: f64) -> SpecificEnthalpy {
    SpecificEnthalpy::new::<kilojoule_per_kilogram>(value)
}
