//! 상태 없는 물리량(PQ) 계산 엔진.
//!
//! 물리량 정의 목록을 받아 의존 순서대로 수식을 평가하고, 단위를 변환해 호출자가
//! 요청한 물리량만 돌려준다. CLI는 같은 라이브러리를 얇게 감싼다.

pub mod app;
pub mod cache;
pub mod config;
pub mod conversion;
pub mod dependency;
pub mod engine;
pub mod expr;
pub mod i18n;
pub mod projector;
pub mod quantity;
pub mod registry;
pub mod scheduler;
pub mod ui_cli;
pub mod units;

pub use conversion::{ConversionError, UnitCatalog, UnitGateway};
pub use engine::{calculate, describe, CalcError, CalculationRequest, CalculationResponse, Calculator};
pub use expr::{EvalError, Evaluator, MathEvaluator};
pub use quantity::{QuantityDefinition, QuantityKind, QuantityResult};
