//! 계산 요청/응답 형식과 계산 진입점.
//!
//! 한 번의 호출마다 레지스트리, 의존성 그래프, 작업 상태를 새로 만들고 응답을 돌려준 뒤
//! 모두 버린다. 같은 요청은 이전 호출과 무관하게 항상 같은 결과를 낸다.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::time::Instant;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cache::{Clock, MetadataCache};
use crate::config::EngineConfig;
use crate::conversion::{ConversionError, UnitCatalog, UnitGateway};
use crate::dependency::DependencyGraph;
use crate::expr::{Evaluator, MathEvaluator};
use crate::projector;
use crate::quantity::{InputOverride, OutputPreference, QuantityDefinition, QuantityResult};
use crate::registry::{DefinitionError, DefinitionIssue, QuantityRegistry};
use crate::scheduler::Scheduler;

/// 계산을 시작하기 전에 거부되는 호출자 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("물리량 정의가 없습니다")]
    Empty,
    #[error("잘못된 물리량 정의: {0}")]
    InvalidDefinition(DefinitionError),
    #[error("중복된 기호: {0}")]
    DuplicateSymbol(String),
    #[error("정의되지 않은 기호에 입력값을 지정했습니다: {0}")]
    UnknownOverride(String),
    #[error("수식으로 계산되는 물리량에는 입력값을 지정할 수 없습니다: {0}")]
    OverrideOnDerived(String),
    #[error("{symbol} 입력 단위 오류: {source}")]
    Unit {
        symbol: String,
        #[source]
        source: ConversionError,
    },
}

impl From<DefinitionError> for CalcError {
    fn from(value: DefinitionError) -> Self {
        match value {
            DefinitionError::DuplicateSymbol(symbol) => CalcError::DuplicateSymbol(symbol),
            other => CalcError::InvalidDefinition(other),
        }
    }
}

/// 계산 요청.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    #[serde(alias = "quantityDefinitions", alias = "pqs")]
    pub quantities: Vec<QuantityDefinition>,
    #[serde(default, alias = "inputOverrides")]
    pub inputs: BTreeMap<String, InputOverride>,
    /// `None`이면 입력으로 돌려주지 않는 모든 물리량을 출력한다.
    #[serde(default, alias = "outputPreferences", skip_serializing_if = "Option::is_none")]
    pub outputs: Option<BTreeMap<String, OutputPreference>>,
}

impl CalculationRequest {
    pub fn new(quantities: Vec<QuantityDefinition>) -> Self {
        Self {
            quantities,
            ..Self::default()
        }
    }

    pub fn with_input(mut self, symbol: &str, value: f64, unit: &str) -> Self {
        self.inputs
            .insert(symbol.to_string(), InputOverride::new(value, unit));
        self
    }

    /// 출력 목록에 추가한다. `unit`이 `None`이면 기본 단위로 받는다.
    pub fn with_output(mut self, symbol: &str, unit: Option<&str>) -> Self {
        let pref = OutputPreference {
            unit: unit.map(str::to_string),
        };
        self.outputs
            .get_or_insert_with(BTreeMap::new)
            .insert(symbol.to_string(), pref);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    pub total_quantities: usize,
    pub calculation_time_ms: u64,
}

/// 계산 응답. 개별 항목이 각자 성공/실패 상태를 가진다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    pub inputs: BTreeMap<String, QuantityResult>,
    pub outputs: BTreeMap<String, QuantityResult>,
    pub metadata: ResponseMetadata,
}

impl CalculationResponse {
    pub fn has_errors(&self) -> bool {
        self.outputs.values().any(QuantityResult::is_error)
    }
}

/// 레지스트리 → 의존성 분석 → 반복 평가 → 결과 선별을 한 번 수행한다.
pub fn calculate<G, E>(
    request: &CalculationRequest,
    gateway: &G,
    evaluator: &E,
    config: &EngineConfig,
) -> Result<CalculationResponse, CalcError>
where
    G: UnitGateway + ?Sized,
    E: Evaluator + ?Sized,
{
    let started = Instant::now();
    let mut registry = QuantityRegistry::load(request.quantities.clone())?;
    if registry.is_empty() {
        return Err(CalcError::Empty);
    }
    registry.validate_units(gateway)?;
    let graph = DependencyGraph::build(&registry);

    let scheduler = Scheduler::new(gateway, evaluator).with_max_passes(config.max_passes);
    scheduler.apply_overrides(&mut registry, &request.inputs)?;
    let output_units = request
        .outputs
        .as_ref()
        .map(|prefs| scheduler.output_units(&registry, prefs))
        .unwrap_or_default();
    let resolution = scheduler.resolve(&mut registry, &graph, &output_units);

    let failures = resolution.failures().count();
    if failures > 0 {
        warn!("{}개 중 {failures}개 물리량 계산 실패", registry.len());
    }

    let view = projector::project(&resolution.results, &request.inputs, request.outputs.as_ref());
    let elapsed = started.elapsed().as_millis() as u64;
    info!(
        "계산 완료: 물리량 {}개, 반복 {}회, {elapsed}ms",
        registry.len(),
        resolution.passes
    );
    Ok(CalculationResponse {
        inputs: view.inputs,
        outputs: view.outputs,
        metadata: ResponseMetadata {
            total_quantities: registry.len(),
            calculation_time_ms: elapsed,
        },
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityRole {
    Input,
    Output,
}

/// 물리량 하나의 설명 정보.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityInfo {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub unit: String,
    pub base_unit: String,
    pub category_id: String,
    #[serde(rename = "type")]
    pub role: QuantityRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

/// 정의 목록 요약. 입력/출력 물리량과 분류별 사용 가능 단위.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationSummary {
    pub total_quantities: usize,
    pub input_quantities: Vec<QuantityInfo>,
    pub output_quantities: Vec<QuantityInfo>,
    pub available_units: BTreeMap<String, Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<String>,
}

impl CalculationSummary {
    /// 기호별 사용 가능 단위(분류의 단위 목록).
    pub fn symbol_units(&self) -> BTreeMap<String, Vec<String>> {
        self.input_quantities
            .iter()
            .chain(&self.output_quantities)
            .filter_map(|info| {
                self.available_units
                    .get(&info.category_id)
                    .map(|units| (info.symbol.clone(), units.clone()))
            })
            .collect()
    }
}

/// 정의 목록을 검사하고 요약한다. 계산은 하지 않는다.
pub fn describe<G>(definitions: &[QuantityDefinition], gateway: &G) -> Result<CalculationSummary, CalcError>
where
    G: UnitGateway + ?Sized,
{
    let registry = QuantityRegistry::load(definitions.to_vec())?;
    if registry.is_empty() {
        return Err(CalcError::Empty);
    }

    let mut summary = CalculationSummary {
        total_quantities: registry.len(),
        input_quantities: Vec::new(),
        output_quantities: Vec::new(),
        available_units: BTreeMap::new(),
        issues: registry.issues().iter().map(DefinitionIssue::to_string).collect(),
    };
    for q in registry.iter() {
        let def = &q.definition;
        let info = QuantityInfo {
            symbol: def.symbol.clone(),
            description: def.description.clone(),
            unit: def.face_unit.clone(),
            base_unit: def.base_unit.clone(),
            category_id: def.category_id.clone(),
            role: if q.is_input() {
                QuantityRole::Input
            } else {
                QuantityRole::Output
            },
            expression: q.expression().map(str::to_string),
        };
        if !summary.available_units.contains_key(&def.category_id) {
            let units = gateway.compatible_units(&def.face_unit).unwrap_or_else(|e| {
                warn!("{} 분류의 단위 목록을 가져오지 못함: {e}", def.category_id);
                vec![def.face_unit.clone(), def.base_unit.clone()]
            });
            summary.available_units.insert(def.category_id.clone(), units);
        }
        match info.role {
            QuantityRole::Input => summary.input_quantities.push(info),
            QuantityRole::Output => summary.output_quantities.push(info),
        }
    }
    Ok(summary)
}

/// 캐시에 있으면 캐시된 요약을, 없으면 새로 만들어 캐시에 넣는다.
pub fn describe_cached<G, C>(
    key: &str,
    definitions: &[QuantityDefinition],
    gateway: &G,
    cache: &mut MetadataCache<C>,
) -> Result<CalculationSummary, CalcError>
where
    G: UnitGateway + ?Sized,
    C: Clock,
{
    if let Some(summary) = cache.get(key) {
        debug!("요약 캐시 적중: {key}");
        return Ok(summary.clone());
    }
    let summary = describe(definitions, gateway)?;
    cache.insert(key, summary.clone());
    Ok(summary)
}

/// 게이트웨이, 평가기, 설정과 정의 요약 캐시를 묶어 둔 계산기.
///
/// 캐시는 `EngineConfig::cache_ttl_secs` 동안 요약을 보관한다.
#[derive(Debug, Clone)]
pub struct Calculator<G = UnitCatalog, E = MathEvaluator> {
    gateway: G,
    evaluator: E,
    config: EngineConfig,
    cache: RefCell<MetadataCache>,
}

impl Calculator {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_parts(UnitCatalog, MathEvaluator, config)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<G: UnitGateway, E: Evaluator> Calculator<G, E> {
    pub fn with_parts(gateway: G, evaluator: E, config: EngineConfig) -> Self {
        let cache = RefCell::new(MetadataCache::new(config.cache_ttl()));
        Self {
            gateway,
            evaluator,
            config,
            cache,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn calculate(&self, request: &CalculationRequest) -> Result<CalculationResponse, CalcError> {
        calculate(request, &self.gateway, &self.evaluator, &self.config)
    }

    /// `key`로 캐시된 요약이 있으면 그대로 쓰고, 없으면 정의를 요약해 캐시에 넣는다.
    pub fn describe(
        &self,
        key: &str,
        definitions: &[QuantityDefinition],
    ) -> Result<CalculationSummary, CalcError> {
        let mut cache = self.cache.borrow_mut();
        describe_cached(key, definitions, &self.gateway, &mut *cache)
    }

    /// 캐시된 요약을 버린다. 정의가 바뀌었을 때 호출한다.
    pub fn invalidate(&self, key: &str) -> bool {
        self.cache.borrow_mut().invalidate(key)
    }
}
