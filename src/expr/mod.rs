//! 물리량 수식 해석기.
//!
//! 의존성 분석과 평가가 같은 렉서를 쓰므로, 의존성으로 잡힌 식별자와
//! 평가 시 실제로 읽는 식별자가 어긋나지 않는다.

mod eval;
pub mod lexer;
pub mod parser;

use thiserror::Error;

pub use eval::{builtin_constant, evaluate_ast, is_builtin, is_builtin_function, Evaluator, MathEvaluator};
pub use parser::{parse, BinaryOp, Expr, UnaryOp};

/// 수식 평가 오류. 해당 물리량 하나의 실패로만 기록된다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("구문 오류 (위치 {position}): {message}")]
    Syntax { position: usize, message: String },
    #[error("정의되지 않은 식별자: {0}")]
    UnknownIdentifier(String),
    #[error("알 수 없는 함수: {0}")]
    UnknownFunction(String),
    #[error("함수 {name}의 인자 개수가 잘못되었습니다: {expected} 필요, {found}개 전달")]
    Arity {
        name: String,
        expected: &'static str,
        found: usize,
    },
    #[error("0으로 나눌 수 없습니다")]
    DivisionByZero,
    #[error("정의역을 벗어난 계산: {0}")]
    Domain(String),
}
