use std::collections::HashMap;
use std::f64::consts::{E, PI};

use super::parser::{parse, BinaryOp, Expr, UnaryOp};
use super::EvalError;

/// 수식 평가기. 변수 이름 → 기준값 바인딩으로 수식을 계산한다.
pub trait Evaluator {
    fn evaluate(&self, expression: &str, bindings: &HashMap<String, f64>) -> Result<f64, EvalError>;
}

/// 내장 수학 함수/상수를 지원하는 기본 평가기.
#[derive(Debug, Clone, Copy, Default)]
pub struct MathEvaluator;

impl MathEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for MathEvaluator {
    fn evaluate(&self, expression: &str, bindings: &HashMap<String, f64>) -> Result<f64, EvalError> {
        let ast = parse(expression)?;
        evaluate_ast(&ast, bindings)
    }
}

const FUNCTIONS: [&str; 18] = [
    "sin", "cos", "tan", "asin", "acos", "atan", "sqrt", "abs", "exp", "ln", "log", "log10",
    "min", "max", "pow", "floor", "ceil", "round",
];

/// 내장 상수. 소문자/대문자 표기만 인정한다.
pub fn builtin_constant(name: &str) -> Option<f64> {
    match name {
        "pi" | "PI" => Some(PI),
        "e" | "E" => Some(E),
        _ => None,
    }
}

fn canonical_function(name: &str) -> Option<&'static str> {
    FUNCTIONS
        .iter()
        .copied()
        .find(|f| *f == name || f.to_uppercase() == name)
}

pub fn is_builtin_function(name: &str) -> bool {
    canonical_function(name).is_some()
}

/// 내장 함수/상수 이름인지 여부. 같은 이름의 물리량보다 우선한다.
pub fn is_builtin(name: &str) -> bool {
    builtin_constant(name).is_some() || is_builtin_function(name)
}

/// 구문 트리를 평가한다.
pub fn evaluate_ast(expr: &Expr, bindings: &HashMap<String, f64>) -> Result<f64, EvalError> {
    match expr {
        Expr::Number(n) => Ok(*n),
        Expr::Ident(name) => builtin_constant(name)
            .or_else(|| bindings.get(name).copied())
            .ok_or_else(|| EvalError::UnknownIdentifier(name.clone())),
        Expr::Unary(op, inner) => {
            let v = evaluate_ast(inner, bindings)?;
            Ok(match op {
                UnaryOp::Neg => -v,
                UnaryOp::Pos => v,
            })
        }
        Expr::Binary(op, lhs, rhs) => {
            let a = evaluate_ast(lhs, bindings)?;
            let b = evaluate_ast(rhs, bindings)?;
            binary(*op, a, b)
        }
        Expr::Call(name, args) => {
            let values = args
                .iter()
                .map(|a| evaluate_ast(a, bindings))
                .collect::<Result<Vec<_>, _>>()?;
            call(name, &values)
        }
    }
}

fn binary(op: BinaryOp, a: f64, b: f64) -> Result<f64, EvalError> {
    match op {
        BinaryOp::Add => Ok(a + b),
        BinaryOp::Sub => Ok(a - b),
        BinaryOp::Mul => Ok(a * b),
        BinaryOp::Div | BinaryOp::Rem if b == 0.0 => Err(EvalError::DivisionByZero),
        BinaryOp::Div => Ok(a / b),
        BinaryOp::Rem => Ok(a % b),
        BinaryOp::Pow => checked("^", a.powf(b)),
    }
}

fn checked(name: &str, value: f64) -> Result<f64, EvalError> {
    if value.is_nan() {
        Err(EvalError::Domain(name.to_string()))
    } else {
        Ok(value)
    }
}

fn arity(name: &str, expected: &'static str, found: usize) -> EvalError {
    EvalError::Arity {
        name: name.to_string(),
        expected,
        found,
    }
}

fn unary_fn(name: &'static str, args: &[f64], f: fn(f64) -> f64) -> Result<f64, EvalError> {
    match args {
        [x] => checked(name, f(*x)),
        _ => Err(arity(name, "1개", args.len())),
    }
}

fn call(name: &str, args: &[f64]) -> Result<f64, EvalError> {
    let canonical =
        canonical_function(name).ok_or_else(|| EvalError::UnknownFunction(name.to_string()))?;
    match canonical {
        "sin" => unary_fn("sin", args, f64::sin),
        "cos" => unary_fn("cos", args, f64::cos),
        "tan" => unary_fn("tan", args, f64::tan),
        "asin" => unary_fn("asin", args, f64::asin),
        "acos" => unary_fn("acos", args, f64::acos),
        "atan" => unary_fn("atan", args, f64::atan),
        "sqrt" => unary_fn("sqrt", args, f64::sqrt),
        "abs" => unary_fn("abs", args, f64::abs),
        "exp" => unary_fn("exp", args, f64::exp),
        "ln" => unary_fn("ln", args, f64::ln),
        "log10" => unary_fn("log10", args, f64::log10),
        "floor" => unary_fn("floor", args, f64::floor),
        "ceil" => unary_fn("ceil", args, f64::ceil),
        "round" => unary_fn("round", args, f64::round),
        // log(x)는 자연로그, log(x, b)는 밑이 b인 로그
        "log" => match args {
            [x] => checked("log", x.ln()),
            [x, base] => checked("log", x.ln() / base.ln()),
            _ => Err(arity("log", "1~2개", args.len())),
        },
        "pow" => match args {
            [x, y] => checked("pow", x.powf(*y)),
            _ => Err(arity("pow", "2개", args.len())),
        },
        "min" | "max" => {
            if args.is_empty() {
                return Err(arity(canonical, "1개 이상", 0));
            }
            let pick = if canonical == "min" { f64::min } else { f64::max };
            Ok(args[1..].iter().fold(args[0], |acc, v| pick(acc, *v)))
        }
        other => Err(EvalError::UnknownFunction(other.to_string())),
    }
}
