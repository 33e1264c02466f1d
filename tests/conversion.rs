//! 단위 변환 게이트웨이 회귀 테스트.
use pq_calc_engine::conversion::{convert, lookup_unit, ConversionError, UnitCatalog, UnitGateway};
use pq_calc_engine::quantity::QuantityKind;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn gauge_pressure_carries_atmospheric_offset() {
    let gw = UnitCatalog;
    // 0 barg => 1 atm abs
    assert_close("0 barg", gw.convert_to_base(0.0, "barg").unwrap(), 101_325.0, 1e-12);
    assert_close("bar->barg", gw.convert(1.01325, "bar", "barg").unwrap(), 0.0, 1e-9);
    assert_close("psig->psi", gw.convert(0.0, "psig", "psi").unwrap(), 14.695_95, 1e-5);
    assert_close("atm->kPa", gw.convert(1.0, "atm", "kPa").unwrap(), 101.325, 1e-12);
}

#[test]
fn temperature_and_temperature_difference_are_separate() {
    let gw = UnitCatalog;
    assert_close("100C", gw.convert(100.0, "C", "F").unwrap(), 212.0, 1e-12);
    assert_close("0C", gw.convert_to_base(0.0, "°C").unwrap(), 273.15, 1e-12);
    assert_close("10 dK", gw.convert(10.0, "ΔK", "Δ°F").unwrap(), 18.0, 1e-12);
    assert_eq!(gw.kind_of("K").unwrap(), QuantityKind::Temperature);
    assert_eq!(gw.kind_of("delta_K").unwrap(), QuantityKind::TemperatureDifference);
    assert!(matches!(
        gw.convert(1.0, "K", "ΔK"),
        Err(ConversionError::Incompatible { .. })
    ));
}

#[test]
fn category_aware_convert_accepts_plain_temperature_difference_symbols() {
    let out = convert(QuantityKind::TemperatureDifference, 9.0, "F", "K").unwrap();
    assert_close("9 dF", out, 5.0, 1e-12);
}

#[test]
fn compatible_units_start_with_base_unit() {
    let gw = UnitCatalog;
    let units = gw.compatible_units("km/h").unwrap();
    assert_eq!(units.first().map(String::as_str), Some("m/s"));
    assert!(units.iter().any(|u| u == "mph"));
    assert_eq!(gw.base_unit("psi").unwrap(), "Pa");
    assert_eq!(
        UnitCatalog.units_for_category("force").unwrap(),
        vec!["N", "kN", "kgf", "lbf"]
    );
}

#[test]
fn unknown_and_incompatible_units_are_errors() {
    let gw = UnitCatalog;
    assert_eq!(
        gw.convert_to_base(1.0, "furlong"),
        Err(ConversionError::UnknownUnit("furlong".into()))
    );
    assert_eq!(
        gw.convert(1.0, "m", "s"),
        Err(ConversionError::Incompatible {
            from: "m".into(),
            to: "s".into()
        })
    );
    assert!(matches!(
        UnitCatalog.units_for_category("colour"),
        Err(ConversionError::UnknownCategory(_))
    ));
}

#[test]
fn every_canonical_symbol_resolves_to_its_own_category() {
    for kind in QuantityKind::ALL {
        for unit in UnitCatalog.units_for_category(kind.name()).unwrap() {
            let found = lookup_unit(&unit).unwrap();
            assert_eq!(found.kind(), kind, "{unit}");
            assert_eq!(found.symbol(), unit);
        }
    }
}

#[test]
fn derived_si_units_are_coherent() {
    let gw = UnitCatalog;
    assert_close("kWh", gw.convert_to_base(1.0, "kWh").unwrap(), 3.6e6, 1e-12);
    assert_close("hp", gw.convert(1.0, "hp", "W").unwrap(), 745.699_872, 1e-6);
    assert_close("lbf", gw.convert(1.0, "lbf", "N").unwrap(), 4.448_221_615, 1e-8);
    assert_close("cP", gw.convert(1.0, "cP", "Pa·s").unwrap(), 0.001, 1e-12);
    assert_close("%", gw.convert_to_base(50.0, "%").unwrap(), 0.5, 1e-12);
}

#[test]
fn milli_prefix_is_not_read_as_mega() {
    let gw = UnitCatalog;
    assert_close("MPa", gw.convert(1.0, "MPa", "Pa").unwrap(), 1.0e6, 1e-12);
    assert_close("MW", gw.convert(1.0, "MW", "W").unwrap(), 1.0e6, 1e-12);
    assert_close("MJ", gw.convert(1.0, "MJ", "J").unwrap(), 1.0e6, 1e-12);
    for unit in ["mPa", "mW", "mJ"] {
        assert_eq!(
            gw.convert_to_base(1.0, unit),
            Err(ConversionError::UnknownUnit(unit.into())),
            "{unit}"
        );
    }
    // 밀리바는 그대로 인식한다.
    assert_close("mbar", gw.convert(1000.0, "mbar", "bar").unwrap(), 1.0, 1e-12);
}
