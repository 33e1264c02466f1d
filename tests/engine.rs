//! 계산 엔진 시나리오 테스트.
use pq_calc_engine::config::EngineConfig;
use pq_calc_engine::engine::{calculate, CalcError, CalculationRequest, Calculator};
use pq_calc_engine::quantity::QuantityDefinition;
use pq_calc_engine::{MathEvaluator, UnitCatalog};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

/// 거리 D[km], 시간 t[h], 속도 v = D/t.
fn trip(v_face_unit: &str) -> Vec<QuantityDefinition> {
    vec![
        QuantityDefinition::input("D", "length", 1.0, "km", 1000.0, "m"),
        QuantityDefinition::input("t", "time", 1.0, "h", 3600.0, "s"),
        QuantityDefinition::derived("v", "velocity", "D / t", v_face_unit, "m/s"),
    ]
}

fn run(request: &CalculationRequest) -> pq_calc_engine::CalculationResponse {
    Calculator::new(EngineConfig::default())
        .calculate(request)
        .expect("calculation")
}

#[test]
fn velocity_from_distance_and_time() {
    let req = CalculationRequest::new(trip("km/h"))
        .with_input("D", 300.0, "km")
        .with_input("t", 6.0, "h");
    let res = run(&req);

    let v = &res.outputs["v"];
    assert_close("v", v.value, 50.0, 1e-9);
    assert_eq!(v.unit, "km/h");
    assert_close("v base", v.base_value, 13.888_888_9, 1e-6);
    assert_eq!(v.base_unit, "m/s");
    assert_eq!(v.expression.as_deref(), Some("D / t"));

    assert_eq!(res.inputs.len(), 2);
    assert_close("D base", res.inputs["D"].base_value, 300_000.0, 1e-12);
    assert_eq!(res.inputs["t"].unit, "h");
    assert_eq!(res.metadata.total_quantities, 3);
}

#[test]
fn face_unit_of_definition_is_used_without_preference() {
    let req = CalculationRequest::new(trip("m/s"))
        .with_input("D", 300.0, "km")
        .with_input("t", 6.0, "h");
    let res = run(&req);
    assert_close("v", res.outputs["v"].value, 13.888_888_9, 1e-6);
    assert_eq!(res.outputs["v"].unit, "m/s");
}

#[test]
fn output_preference_converts_into_requested_unit() {
    let req = CalculationRequest::new(trip("km/h"))
        .with_input("D", 300.0, "km")
        .with_input("t", 6.0, "h")
        .with_output("v", Some("mph"));
    let res = run(&req);
    let v = &res.outputs["v"];
    assert_eq!(v.unit, "mph");
    assert_close("v mph", v.value, 31.068_559_6, 1e-6);
    assert_close("v base", v.base_value, 13.888_888_9, 1e-6);
}

#[test]
fn incompatible_output_unit_falls_back_to_definition_unit() {
    let req = CalculationRequest::new(trip("km/h"))
        .with_input("D", 300.0, "km")
        .with_input("t", 6.0, "h")
        .with_output("v", Some("kg"));
    let res = run(&req);
    assert_eq!(res.outputs["v"].unit, "km/h");
    assert_close("v", res.outputs["v"].value, 50.0, 1e-9);
    assert!(!res.has_errors());
}

#[test]
fn inputs_without_override_keep_definition_values() {
    let res = run(&CalculationRequest::new(trip("km/h")).with_input("t", 0.5, "h"));
    // D는 정의값 1 km, 입력으로 돌려주지 않으므로 출력에 포함된다.
    assert!(res.inputs.contains_key("t"));
    assert_close("D", res.outputs["D"].value, 1.0, 1e-12);
    assert_close("v", res.outputs["v"].value, 2.0, 1e-9);
}

#[test]
fn failed_expression_is_contained() {
    let mut defs = trip("km/h");
    defs.push(QuantityDefinition::derived("bad", "velocity", "D / 0", "km/h", "m/s"));
    let req = CalculationRequest::new(defs)
        .with_input("D", 300.0, "km")
        .with_input("t", 6.0, "h");
    let res = run(&req);

    let bad = &res.outputs["bad"];
    assert_eq!(bad.value, 0.0);
    assert_eq!(bad.unit, "km/h");
    assert!(bad.error.is_some());
    assert!(res.outputs["v"].error.is_none());
    assert_close("v", res.outputs["v"].value, 50.0, 1e-9);
}

#[test]
fn deeply_nested_expression_fails_only_its_quantity() {
    let deep = format!("{}D{}", "(".repeat(50_000), ")".repeat(50_000));
    let mut defs = trip("km/h");
    defs.push(QuantityDefinition::derived("deep", "length", &deep, "km", "m"));
    let req = CalculationRequest::new(defs)
        .with_input("D", 300.0, "km")
        .with_input("t", 6.0, "h");
    let res = run(&req);
    assert!(res.outputs["deep"].error.is_some());
    assert_close("v", res.outputs["v"].value, 50.0, 1e-9);
}

#[test]
fn cycles_and_missing_symbols_terminate_with_errors() {
    let defs = vec![
        QuantityDefinition::input("x", "900", 2.0, "", 2.0, "ul"),
        QuantityDefinition::derived("a", "900", "b + 1", "", "ul"),
        QuantityDefinition::derived("b", "900", "a * 2", "", "ul"),
        QuantityDefinition::derived("c", "900", "a + x", "", "ul"),
        QuantityDefinition::derived("m", "900", "x + nowhere", "", "ul"),
        QuantityDefinition::derived("ok", "900", "x * 3", "", "ul"),
    ];
    let res = run(&CalculationRequest::new(defs));
    for sym in ["a", "b", "c", "m"] {
        let r = &res.outputs[sym];
        assert!(r.error.is_some(), "{sym} should fail");
        assert_eq!(r.value, 0.0);
    }
    assert!(res.outputs["m"].error.as_deref().unwrap().contains("nowhere"));
    assert_close("ok", res.outputs["ok"].value, 6.0, 1e-12);
}

#[test]
fn explicit_output_filter_limits_outputs() {
    let mut defs = trip("km/h");
    defs.push(QuantityDefinition::derived("half", "velocity", "v / 2", "km/h", "m/s"));
    let req = CalculationRequest::new(defs)
        .with_input("D", 300.0, "km")
        .with_input("t", 6.0, "h")
        .with_output("half", None);
    let res = run(&req);
    assert_eq!(res.outputs.keys().collect::<Vec<_>>(), vec!["half"]);
    assert_close("half", res.outputs["half"].value, 25.0, 1e-9);
}

#[test]
fn no_filter_returns_every_non_input_quantity() {
    let mut defs = trip("km/h");
    defs.push(QuantityDefinition::derived("half", "velocity", "v / 2", "km/h", "m/s"));
    let req = CalculationRequest::new(defs).with_input("D", 300.0, "km");
    let res = run(&req);
    assert_eq!(res.outputs.keys().collect::<Vec<_>>(), vec!["half", "t", "v"]);
}

#[test]
fn caller_errors_abort_before_scheduling() {
    let calc = Calculator::new(EngineConfig::default());

    let unknown = CalculationRequest::new(trip("km/h")).with_input("zz", 1.0, "m");
    assert_eq!(calc.calculate(&unknown), Err(CalcError::UnknownOverride("zz".into())));

    let derived = CalculationRequest::new(trip("km/h")).with_input("v", 1.0, "m/s");
    assert_eq!(calc.calculate(&derived), Err(CalcError::OverrideOnDerived("v".into())));

    let bad_unit = CalculationRequest::new(trip("km/h")).with_input("D", 1.0, "kg");
    assert!(matches!(calc.calculate(&bad_unit), Err(CalcError::Unit { .. })));

    assert_eq!(calc.calculate(&CalculationRequest::default()), Err(CalcError::Empty));

    let mut dup = trip("km/h");
    dup.push(QuantityDefinition::input("t", "time", 1.0, "s", 1.0, "s"));
    assert_eq!(
        calc.calculate(&CalculationRequest::new(dup)),
        Err(CalcError::DuplicateSymbol("t".into()))
    );

    let unknown_unit = vec![QuantityDefinition::input("q", "x", 1.0, "furlongs", 1.0, "m")];
    assert!(matches!(
        calc.calculate(&CalculationRequest::new(unknown_unit)),
        Err(CalcError::InvalidDefinition(_))
    ));
}

#[test]
fn repeated_calls_give_identical_results() {
    let req = CalculationRequest::new(trip("km/h"))
        .with_input("D", 123.0, "mi")
        .with_input("t", 95.0, "min");
    let first = run(&req);
    let second = run(&req);
    assert_eq!(first.inputs, second.inputs);
    assert_eq!(first.outputs, second.outputs);
}

#[test]
fn pass_budget_from_config_is_honored() {
    let defs = vec![
        QuantityDefinition::input("a", "900", 1.0, "", 1.0, "ul"),
        QuantityDefinition::derived("c", "900", "b + 1", "", "ul"),
        QuantityDefinition::derived("b", "900", "a + 1", "", "ul"),
    ];
    let config = EngineConfig {
        max_passes: 1,
        ..EngineConfig::default()
    };
    let res = calculate(&CalculationRequest::new(defs), &UnitCatalog, &MathEvaluator, &config)
        .expect("calculation");
    assert!(res.outputs["c"].error.is_some());
    assert_close("b", res.outputs["b"].value, 2.0, 1e-12);
}

#[test]
fn request_json_accepts_original_field_names() {
    let json = r#"{
        "pqs": [
            {"sym": "r", "categoryId": "length", "faceValue": 1, "faceUnit": "m", "baseValue": 1, "baseUnit": "m"},
            {"sym": "A", "expression": "pi * r^2", "categoryId": "area", "faceUnit": "cm2", "baseUnit": "m2"}
        ],
        "inputOverrides": {"r": {"value": 10, "unit": "cm"}},
        "outputPreferences": {"A": {}}
    }"#;
    let req: CalculationRequest = serde_json::from_str(json).unwrap();
    let res = run(&req);
    assert_close("A", res.outputs["A"].value, std::f64::consts::PI * 100.0, 1e-9);

    let out = serde_json::to_value(&res).unwrap();
    assert!(out["outputs"]["A"]["baseValue"].is_number());
    assert_eq!(out["outputs"]["A"]["baseUnit"], "m2");
    assert!(out["outputs"]["A"].get("error").is_none());
    assert_eq!(out["metadata"]["totalQuantities"], 2);
}

#[test]
fn omitted_base_value_is_derived_from_face_value() {
    let json = r#"{
        "quantities": [
            {"symbol": "D", "categoryId": "length", "faceValue": 5, "faceUnit": "km", "baseUnit": "m"},
            {"symbol": "twice", "expression": "D * 2", "categoryId": "length", "faceUnit": "km", "baseUnit": "m"}
        ]
    }"#;
    let req: CalculationRequest = serde_json::from_str(json).unwrap();
    let res = run(&req);
    let d = &res.outputs["D"];
    assert_close("D", d.value, 5.0, 1e-12);
    assert_close("D base", d.base_value, 5000.0, 1e-12);
    assert_close("twice", res.outputs["twice"].value, 10.0, 1e-12);
}

#[test]
fn stale_base_value_in_definition_is_replaced() {
    let defs = vec![
        QuantityDefinition::input("D", "length", 2.0, "km", 1.0, "m"),
        QuantityDefinition::derived("half", "length", "D / 2", "m", "m"),
    ];
    let res = run(&CalculationRequest::new(defs));
    assert_close("D base", res.outputs["D"].base_value, 2000.0, 1e-12);
    assert_close("half", res.outputs["half"].value, 1000.0, 1e-12);
}
