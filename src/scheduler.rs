//! 입력값 적용, 출력 단위 설정, 의존 순서에 따른 반복 평가.
//!
//! 모든 산술은 각 물리량의 기준 단위 값으로 하고, 표시 단위 변환은 입력을 받을 때와
//! 결과를 보고할 때만 한다.

use std::collections::{BTreeMap, HashMap, VecDeque};

use log::{debug, warn};
use thiserror::Error;

use crate::conversion::{ConversionError, UnitGateway};
use crate::dependency::DependencyGraph;
use crate::engine::CalcError;
use crate::expr::{EvalError, Evaluator};
use crate::quantity::{InputOverride, OutputPreference, QuantityResult, QuantityState};
use crate::registry::QuantityRegistry;

/// 물리량 하나가 해석되지 못한 이유. 해당 결과 항목의 `error`가 된다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolutionFailure {
    #[error(transparent)]
    Evaluation(#[from] EvalError),
    #[error("의존하는 물리량 {0}의 계산이 실패했습니다")]
    DependencyFailed(String),
    #[error("순환 의존성: {}", .0.join(" -> "))]
    Cycle(Vec<String>),
    #[error("순환 또는 누락된 의존성 때문에 해석할 수 없습니다 (대기 중: {})", .0.join(", "))]
    Unresolvable(Vec<String>),
    #[error("반복 한도({0}회)를 넘었습니다")]
    BudgetExhausted(usize),
    #[error("결과 단위 변환 실패: {0}")]
    Unit(#[from] ConversionError),
}

/// 해석 결과. `order`는 결과가 확정된 순서다.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub results: BTreeMap<String, QuantityResult>,
    pub order: Vec<String>,
    pub passes: usize,
}

impl Resolution {
    pub fn failures(&self) -> impl Iterator<Item = &QuantityResult> {
        self.results.values().filter(|r| r.is_error())
    }
}

enum Step {
    Done,
    Waiting,
}

pub struct Scheduler<'a, G: ?Sized, E: ?Sized> {
    gateway: &'a G,
    evaluator: &'a E,
    max_passes: usize,
}

impl<'a, G, E> Scheduler<'a, G, E>
where
    G: UnitGateway + ?Sized,
    E: Evaluator + ?Sized,
{
    pub fn new(gateway: &'a G, evaluator: &'a E) -> Self {
        Self {
            gateway,
            evaluator,
            max_passes: 0,
        }
    }

    /// 반복 횟수 한도. 0이면 물리량 개수의 제곱을 쓴다.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    fn pass_budget(&self, count: usize) -> usize {
        if self.max_passes == 0 {
            count.saturating_mul(count).max(1)
        } else {
            self.max_passes
        }
    }

    /// 호출자가 준 입력값을 기준 단위로 환산해 입력 물리량에 적용한다.
    ///
    /// 모르는 기호, 파생 물리량에 대한 지정, 환산할 수 없는 단위는 계산 전체를 중단시킨다.
    pub fn apply_overrides(
        &self,
        registry: &mut QuantityRegistry,
        overrides: &BTreeMap<String, InputOverride>,
    ) -> Result<(), CalcError> {
        for (symbol, input) in overrides {
            let q = registry
                .get_mut(symbol)
                .ok_or_else(|| CalcError::UnknownOverride(symbol.clone()))?;
            if !q.is_input() {
                return Err(CalcError::OverrideOnDerived(symbol.clone()));
            }
            let base_value = self
                .gateway
                .convert(input.value, &input.unit, q.base_unit())
                .map_err(|source| CalcError::Unit {
                    symbol: symbol.clone(),
                    source,
                })?;
            q.face_value = input.value;
            q.face_unit = input.unit.clone();
            q.base_value = base_value;
            q.state = QuantityState::Resolved;
            debug!("입력 적용: {symbol} = {} {} ({base_value} {})", input.value, input.unit, q.base_unit());
        }
        Ok(())
    }

    /// 출력 단위 설정 중 실제로 쓸 수 있는 것만 남긴다.
    ///
    /// 기준 단위에서 1을 환산해 보고 실패하면 경고만 남기고 버린다. 입력 물리량은
    /// 호출자가 준 단위를 그대로 돌려주므로 대상이 아니다.
    pub fn output_units(
        &self,
        registry: &QuantityRegistry,
        preferences: &BTreeMap<String, OutputPreference>,
    ) -> HashMap<String, String> {
        let mut units = HashMap::new();
        for (symbol, pref) in preferences {
            let Some(unit) = pref.unit.as_deref().filter(|u| !u.trim().is_empty()) else {
                continue;
            };
            let Some(q) = registry.get(symbol) else {
                warn!("출력 단위 무시: 알 수 없는 기호 {symbol}");
                continue;
            };
            if q.is_input() {
                continue;
            }
            match self.gateway.convert(1.0, q.base_unit(), unit) {
                Ok(_) => {
                    units.insert(symbol.clone(), unit.to_string());
                }
                Err(e) => warn!("출력 단위 무시: {symbol}에 {unit} 사용 불가 ({e})"),
            }
        }
        units
    }

    /// 모든 물리량이 확정될 때까지 대기열을 반복해서 돈다.
    ///
    /// 한 바퀴 동안 아무것도 확정되지 않으면 남은 물리량을 모두 실패로 처리하고,
    /// 반복 한도를 넘겨도 마찬가지로 끝낸다.
    pub fn resolve(
        &self,
        registry: &mut QuantityRegistry,
        graph: &DependencyGraph,
        output_units: &HashMap<String, String>,
    ) -> Resolution {
        let mut queue: VecDeque<String> = registry.symbols().map(str::to_string).collect();
        let budget = self.pass_budget(registry.len());
        let mut resolution = Resolution::default();

        while !queue.is_empty() {
            if resolution.passes >= budget {
                warn!("반복 한도 {budget}회 초과, 남은 물리량 {}개를 실패 처리", queue.len());
                for symbol in queue.drain(..) {
                    let failure = ResolutionFailure::BudgetExhausted(budget);
                    self.record_failure(registry, &mut resolution, &symbol, failure);
                }
                break;
            }
            resolution.passes += 1;

            let mut progressed = false;
            for _ in 0..queue.len() {
                let Some(symbol) = queue.pop_front() else {
                    break;
                };
                match self.step(registry, graph, output_units, &mut resolution, &symbol) {
                    Step::Done => progressed = true,
                    Step::Waiting => queue.push_back(symbol),
                }
            }
            debug!("{}번째 반복 종료, 대기 {}개", resolution.passes, queue.len());

            if !progressed && !queue.is_empty() {
                warn!("진행 없음: {}", queue.iter().cloned().collect::<Vec<_>>().join(", "));
                let stalled: Vec<String> = queue.drain(..).collect();
                for symbol in &stalled {
                    let failure = stall_reason(registry, graph, symbol);
                    self.record_failure(registry, &mut resolution, symbol, failure);
                }
            }
        }
        resolution
    }

    fn step(
        &self,
        registry: &mut QuantityRegistry,
        graph: &DependencyGraph,
        output_units: &HashMap<String, String>,
        resolution: &mut Resolution,
        symbol: &str,
    ) -> Step {
        let Some(q) = registry.get(symbol) else {
            return Step::Done;
        };
        if let QuantityState::Failed(message) = &q.state {
            let result = QuantityResult::failed(q, message);
            record(resolution, symbol, result);
            return Step::Done;
        }
        if q.is_resolved() {
            let result = QuantityResult::from_quantity(q);
            record(resolution, symbol, result);
            return Step::Done;
        }
        let Some(expression) = q.expression().map(str::to_string) else {
            return Step::Done;
        };

        let mut bindings = HashMap::new();
        for dep in graph.dependencies(symbol) {
            let Some(d) = registry.get(dep) else {
                continue;
            };
            match d.state {
                QuantityState::Resolved => {
                    bindings.insert(dep.to_string(), d.base_value);
                }
                QuantityState::Failed(_) => {
                    let failure = ResolutionFailure::DependencyFailed(dep.to_string());
                    self.record_failure(registry, resolution, symbol, failure);
                    return Step::Done;
                }
                QuantityState::Unresolved => return Step::Waiting,
            }
        }

        let outcome = self
            .evaluator
            .evaluate(&expression, &bindings)
            .map_err(ResolutionFailure::from)
            .and_then(|raw| {
                let base_value = if raw.is_finite() {
                    raw
                } else {
                    warn!("{symbol} = {expression} 결과가 {raw}이므로 0으로 처리");
                    0.0
                };
                let unit = match output_units.get(symbol) {
                    Some(unit) => unit.clone(),
                    None => q.definition.face_unit.clone(),
                };
                let face_value = self.gateway.convert(base_value, q.base_unit(), &unit)?;
                Ok((base_value, face_value, unit))
            });

        match outcome {
            Ok((base_value, face_value, unit)) => {
                if let Some(q) = registry.get_mut(symbol) {
                    q.base_value = base_value;
                    q.face_value = face_value;
                    q.face_unit = unit;
                    q.state = QuantityState::Resolved;
                    debug!("{symbol} = {face_value} {} ({base_value} {})", q.face_unit, q.base_unit());
                    let result = QuantityResult::from_quantity(q);
                    record(resolution, symbol, result);
                }
            }
            Err(failure) => self.record_failure(registry, resolution, symbol, failure),
        }
        Step::Done
    }

    fn record_failure(
        &self,
        registry: &mut QuantityRegistry,
        resolution: &mut Resolution,
        symbol: &str,
        failure: ResolutionFailure,
    ) {
        let message = failure.to_string();
        debug!("{symbol} 계산 실패: {message}");
        if let Some(q) = registry.get_mut(symbol) {
            q.state = QuantityState::Failed(message.clone());
            let result = QuantityResult::failed(q, &message);
            record(resolution, symbol, result);
        }
    }
}

fn record(resolution: &mut Resolution, symbol: &str, result: QuantityResult) {
    resolution.order.push(symbol.to_string());
    resolution.results.insert(symbol.to_string(), result);
}

fn stall_reason(registry: &QuantityRegistry, graph: &DependencyGraph, symbol: &str) -> ResolutionFailure {
    match graph.find_cycle(symbol) {
        Some(cycle) if cycle.first().map(String::as_str) == Some(symbol) => {
            ResolutionFailure::Cycle(cycle)
        }
        _ => ResolutionFailure::Unresolvable(
            graph
                .dependencies(symbol)
                .filter(|dep| registry.get(dep).is_some_and(|d| !d.is_resolved()))
                .map(str::to_string)
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::UnitCatalog;
    use crate::expr::MathEvaluator;
    use crate::quantity::QuantityDefinition;

    fn run(defs: Vec<QuantityDefinition>) -> Resolution {
        let mut registry = QuantityRegistry::load(defs).unwrap();
        let graph = DependencyGraph::build(&registry);
        Scheduler::new(&UnitCatalog, &MathEvaluator).resolve(&mut registry, &graph, &HashMap::new())
    }

    #[test]
    fn evaluates_chain_in_dependency_order() {
        let res = run(vec![
            QuantityDefinition::derived("c", "900", "b * 2", "", "ul"),
            QuantityDefinition::derived("b", "900", "a + 1", "", "ul"),
            QuantityDefinition::input("a", "900", 1.0, "", 1.0, "ul"),
        ]);
        // 입력은 처음부터 확정이므로 b는 첫 바퀴에, c는 두 번째 바퀴에 계산된다.
        let pos = |s: &str| res.order.iter().position(|o| o == s).unwrap();
        assert!(pos("b") < pos("c"));
        assert_eq!(res.results["c"].base_value, 4.0);
        assert_eq!(res.passes, 2);
    }

    #[test]
    fn self_reference_is_reported_as_cycle() {
        let res = run(vec![QuantityDefinition::derived("x", "900", "x + 1", "", "ul")]);
        let err = res.results["x"].error.clone().unwrap();
        assert!(err.contains("x -> x"), "{err}");
        assert_eq!(res.results["x"].value, 0.0);
    }

    #[test]
    fn dependent_of_failed_quantity_fails_fast() {
        let res = run(vec![
            QuantityDefinition::derived("bad", "900", "1 / 0", "", "ul"),
            QuantityDefinition::derived("next", "900", "bad + 1", "", "ul"),
        ]);
        assert_eq!(res.failures().count(), 2);
        assert!(res.results["next"].error.as_deref().unwrap().contains("bad"));
        assert_eq!(res.passes, 1);
    }

    #[test]
    fn budget_caps_the_number_of_passes() {
        let mut registry = QuantityRegistry::load(vec![
            QuantityDefinition::input("a", "900", 1.0, "", 1.0, "ul"),
            QuantityDefinition::derived("c", "900", "b", "", "ul"),
            QuantityDefinition::derived("b", "900", "a", "", "ul"),
        ])
        .unwrap();
        let graph = DependencyGraph::build(&registry);
        let res = Scheduler::new(&UnitCatalog, &MathEvaluator)
            .with_max_passes(1)
            .resolve(&mut registry, &graph, &HashMap::new());
        assert_eq!(res.passes, 1);
        assert!(res.results["c"].is_error());
        assert!(!res.results["b"].is_error());
    }
}
