use approx::assert_relative_eq;
use integration_tests::{chart_points, parse_chart_points};
use psychro_thermo::{Error, solve};
use uom::si::{
    available_energy::kilojoule_per_kilogram, pressure::kilopascal, ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

#[test]
fn fixture_points_match_reference_states() {
    let fixture = chart_points();
    assert!(!fixture.points.is_empty());

    for point in &fixture.points {
        let input = point
            .input()
            .unwrap_or_else(|err| panic!("{}: {err}", point.name));
        let state = solve(&input).unwrap_or_else(|err| panic!("{}: {err}", point.name));
        let expected = &point.expected;

        assert_relative_eq!(
            state.humidity_ratio.get::<ratio>(),
            expected.humidity_ratio,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            state.wet_bulb.get::<degree_celsius>(),
            expected.wet_bulb,
            epsilon = 1e-2
        );
        assert_relative_eq!(
            state.dew_point.get::<degree_celsius>(),
            expected.dew_point,
            epsilon = 1e-2
        );
        assert_relative_eq!(
            state.enthalpy.get::<kilojoule_per_kilogram>(),
            expected.enthalpy,
            epsilon = 1e-2
        );
        if let Some(rh) = expected.relative_humidity {
            assert_relative_eq!(state.relative_humidity.get::<ratio>(), rh, epsilon = 1e-3);
        }
        if let Some(p) = expected.barometric_pressure {
            assert_relative_eq!(state.barometric_pressure.get::<kilopascal>(), p, epsilon = 1e-3);
        }
    }
}

#[test]
fn blank_fixture_fields_are_missing_input() {
    let fixture = parse_chart_points(
        r#"
        [[point]]
        name = "no pressure"
        dry_bulb = 24.0
        relative_humidity = 0.5

        [point.expected]
        humidity_ratio = 0.0
        wet_bulb = 0.0
        dew_point = 0.0
        enthalpy = 0.0
        "#,
    )
    .expect("fixture should parse");

    let result = fixture.points[0].input();
    assert_eq!(result, Err(Error::MissingInput { field: "pressure" }));
}
