//! 덮어쓰기 멱등성, 왕복 변환 속성 테스트.
use proptest::prelude::*;

use pq_calc_engine::config::EngineConfig;
use pq_calc_engine::engine::{CalculationRequest, Calculator};
use pq_calc_engine::quantity::QuantityDefinition;
use pq_calc_engine::{UnitCatalog, UnitGateway};

const UNITS: [&str; 14] = [
    "km", "ft", "mi", "h", "mph", "lb", "psi", "barg", "°F", "Δ°F", "kWh", "hp", "cP", "%",
];

proptest! {
    #[test]
    fn face_base_round_trip(value in -1.0e6f64..1.0e6, idx in 0usize..UNITS.len()) {
        let unit = UNITS[idx];
        let gw = UnitCatalog;
        let base = gw.convert_to_base(value, unit).unwrap();
        let back = gw.convert_to_face(base, unit).unwrap();
        prop_assert!((back - value).abs() <= 1e-9 * value.abs().max(1.0), "{unit}: {value} -> {back}");
    }

    #[test]
    fn applying_the_same_override_is_idempotent(value in -1.0e4f64..1.0e4) {
        let defs = vec![
            QuantityDefinition::input("p", "pressure", 0.0, "barg", 101_325.0, "Pa"),
            QuantityDefinition::derived("q", "pressure", "p * 2", "kPa", "Pa"),
        ];
        let calc = Calculator::new(EngineConfig::default());
        let req = CalculationRequest::new(defs).with_input("p", value, "psig");
        let first = calc.calculate(&req).unwrap();
        let second = calc.calculate(&req).unwrap();
        prop_assert_eq!(first.inputs["p"].base_value, second.inputs["p"].base_value);
        prop_assert_eq!(&first.outputs, &second.outputs);
    }
}
