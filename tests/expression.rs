//! 내장 수식 평가기 테스트.
use std::collections::HashMap;

use pq_calc_engine::expr::{EvalError, Evaluator, MathEvaluator};

fn eval(src: &str) -> Result<f64, EvalError> {
    MathEvaluator.evaluate(src, &HashMap::new())
}

fn eval_with(src: &str, vars: &[(&str, f64)]) -> Result<f64, EvalError> {
    let bindings = vars.iter().map(|(k, v)| (k.to_string(), *v)).collect();
    MathEvaluator.evaluate(src, &bindings)
}

fn assert_close(label: &str, actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-12 * expected.abs().max(1.0),
        "{label} expected {expected} got {actual}"
    );
}

#[test]
fn operator_precedence() {
    assert_eq!(eval("2 + 3 * 4").unwrap(), 14.0);
    assert_eq!(eval("(2 + 3) * 4").unwrap(), 20.0);
    assert_eq!(eval("-2^2").unwrap(), -4.0);
    assert_eq!(eval("2^3^2").unwrap(), 512.0);
    assert_eq!(eval("2^-1").unwrap(), 0.5);
    assert_eq!(eval("10 % 3").unwrap(), 1.0);
    assert_eq!(eval("8 / 4 / 2").unwrap(), 1.0);
}

#[test]
fn builtin_functions_and_constants() {
    assert_close("log2", eval("log(8, 2)").unwrap(), 3.0);
    assert_close("ln", eval("ln(e)").unwrap(), 1.0);
    assert_close("log", eval("log(E)").unwrap(), 1.0);
    assert_close("log10", eval("log10(1000)").unwrap(), 3.0);
    assert_eq!(eval("max(1, 5, 3)").unwrap(), 5.0);
    assert_eq!(eval("min(4, -2)").unwrap(), -2.0);
    assert_eq!(eval("SQRT(16)").unwrap(), 4.0);
    assert_eq!(eval("pow(2, 10)").unwrap(), 1024.0);
    assert_eq!(eval("round(2.5) + floor(1.9) + ceil(1.1)").unwrap(), 6.0);
    assert_close("sin", eval("sin(pi / 2)").unwrap(), 1.0);
}

#[test]
fn builtin_names_take_precedence_over_bindings() {
    assert_close("pi", eval_with("pi", &[("pi", 3.0)]).unwrap(), std::f64::consts::PI);
}

#[test]
fn variables_are_read_from_bindings() {
    let v = eval_with("D / t", &[("D", 300_000.0), ("t", 21_600.0)]).unwrap();
    assert_close("v", v, 13.888_888_888_888_89);
    assert_eq!(
        eval_with("x + y", &[("x", 1.0)]),
        Err(EvalError::UnknownIdentifier("y".into()))
    );
}

#[test]
fn evaluation_errors() {
    assert_eq!(eval("1 / 0"), Err(EvalError::DivisionByZero));
    assert_eq!(eval("1 % 0"), Err(EvalError::DivisionByZero));
    assert!(matches!(eval("sqrt(-1)"), Err(EvalError::Domain(_))));
    assert_eq!(eval("foo(1)"), Err(EvalError::UnknownFunction("foo".into())));
    assert!(matches!(eval("sin()"), Err(EvalError::Arity { found: 0, .. })));
    assert!(matches!(eval("pow(1)"), Err(EvalError::Arity { found: 1, .. })));
    assert!(matches!(eval("2 +"), Err(EvalError::Syntax { .. })));
    assert!(matches!(eval("2 $ 3"), Err(EvalError::Syntax { position: 2, .. })));
}
