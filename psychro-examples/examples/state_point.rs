//! # State Point
//!
//! Solves a few moist-air states, one for each humidity and pressure input
//! mode, and prints the main properties of each.
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run --example state_point
//! ```

use psychro_thermo::{Error, PsychrometricInput, PsychrometricState, Scope, solve};
use uom::si::{
    available_energy::kilojoule_per_kilogram,
    mass_density::kilogram_per_cubic_meter,
    pressure::kilopascal,
    ratio::{percent, ratio},
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    specific_volume::cubic_meter_per_kilogram,
    thermodynamic_temperature::degree_celsius,
};

fn main() -> Result<(), Error> {
    let inputs = [
        (
            "office, 50 % RH at sea level",
            PsychrometricInput::builder()
                .dry_bulb(24.0)
                .relative_humidity(0.5)
                .pressure_kpa(101.325)
                .build()?,
        ),
        (
            "sling psychrometer at 1600 m",
            PsychrometricInput::builder()
                .dry_bulb(30.0)
                .wet_bulb(20.0)
                .elevation(1600.0)
                .build()?,
        ),
        (
            "winter porch, dew point and barometer",
            PsychrometricInput::builder()
                .dry_bulb(-5.0)
                .dew_point(-12.0)
                .pressure_mmhg(755.0)
                .wind_speed(6.0)
                .build()?,
        ),
    ];

    for (label, input) in &inputs {
        let state = solve(input)?;
        print_state(label, &state);
    }

    let inconsistent = PsychrometricInput::builder()
        .dry_bulb(30.0)
        .wet_bulb(35.0)
        .pressure_kpa(101.325)
        .build()?;
    match solve(&inconsistent) {
        Ok(_) => println!("unexpectedly solved an inconsistent input"),
        Err(err) => println!("rejected input: {err}"),
    }

    Ok(())
}

fn print_state(label: &str, state: &PsychrometricState) {
    println!("== {label} ==");
    println!(
        "  pressure            {:>10.3} kPa",
        state.barometric_pressure.get::<kilopascal>()
    );
    println!(
        "  dry bulb            {:>10.2} °C",
        state.dry_bulb.get::<degree_celsius>()
    );
    println!(
        "  wet bulb            {:>10.2} °C",
        state.wet_bulb.get::<degree_celsius>()
    );
    println!(
        "  dew point           {:>10.2} °C",
        state.dew_point.get::<degree_celsius>()
    );
    println!(
        "  relative humidity   {:>10.1} %",
        state.relative_humidity.get::<percent>()
    );
    println!(
        "  humidity ratio      {:>10.5} kg/kg",
        state.humidity_ratio.get::<ratio>()
    );
    println!(
        "  enthalpy            {:>10.2} kJ/kg",
        state.enthalpy.get::<kilojoule_per_kilogram>()
    );
    println!(
        "  specific volume     {:>10.4} m³/kg",
        state.specific_volume.get::<cubic_meter_per_kilogram>()
    );
    println!(
        "  density             {:>10.4} kg/m³",
        state.density.get::<kilogram_per_cubic_meter>()
    );
    println!(
        "  cp                  {:>10.4} kJ/kg·K",
        state.cp.get::<kilojoule_per_kilogram_kelvin>()
    );
    if let Some(chill) = state.wind_chill {
        println!(
            "  wind chill          {:>10.2} °C",
            chill.get::<degree_celsius>()
        );
    }
    if state.scope == Scope::Outside {
        println!("  (outside the ASHRAE 41.6 range)");
    }
}
