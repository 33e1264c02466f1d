use serde::{Deserialize, Serialize};

/// 다루는 물리량 종류(단위 호환 분류)를 나타낸다.
///
/// 같은 분류에 속한 단위끼리만 서로 변환할 수 있다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityKind {
    Dimensionless,
    Length,
    Area,
    Volume,
    Time,
    Velocity,
    Mass,
    Force,
    Pressure,
    Energy,
    Power,
    Temperature,
    TemperatureDifference,
    Viscosity,
    HeatTransferCoeff,
    ThermalConductivity,
    SpecificEnthalpy,
}

impl QuantityKind {
    /// 단위 문자열만으로 분류를 찾을 때의 탐색 순서.
    /// 온도가 온도차보다 앞에 있어야 `K`, `C`가 절대 온도로 해석된다.
    pub const ALL: [QuantityKind; 17] = [
        QuantityKind::Dimensionless,
        QuantityKind::Length,
        QuantityKind::Area,
        QuantityKind::Volume,
        QuantityKind::Time,
        QuantityKind::Velocity,
        QuantityKind::Mass,
        QuantityKind::Force,
        QuantityKind::Pressure,
        QuantityKind::Energy,
        QuantityKind::Power,
        QuantityKind::Temperature,
        QuantityKind::TemperatureDifference,
        QuantityKind::Viscosity,
        QuantityKind::HeatTransferCoeff,
        QuantityKind::ThermalConductivity,
        QuantityKind::SpecificEnthalpy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            QuantityKind::Dimensionless => "dimensionless",
            QuantityKind::Length => "length",
            QuantityKind::Area => "area",
            QuantityKind::Volume => "volume",
            QuantityKind::Time => "time",
            QuantityKind::Velocity => "velocity",
            QuantityKind::Mass => "mass",
            QuantityKind::Force => "force",
            QuantityKind::Pressure => "pressure",
            QuantityKind::Energy => "energy",
            QuantityKind::Power => "power",
            QuantityKind::Temperature => "temperature",
            QuantityKind::TemperatureDifference => "temperature_difference",
            QuantityKind::Viscosity => "viscosity",
            QuantityKind::HeatTransferCoeff => "heat_transfer_coeff",
            QuantityKind::ThermalConductivity => "thermal_conductivity",
            QuantityKind::SpecificEnthalpy => "specific_enthalpy",
        }
    }

    /// 분류 이름(대소문자, `-`/`_` 구분 없음)으로 분류를 찾는다.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|k| k.name() == normalized)
    }
}

impl std::fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn default_category_id() -> String {
    "900".to_string()
}

fn default_base_unit() -> String {
    "ul".to_string()
}

/// 계산 요청 하나에 포함되는 물리량(PQ) 정의.
///
/// `expression`이 없으면 입력 물리량, 있으면 파생 물리량이다. 누락된 필드는
/// 문서에서 PQ를 추출할 때와 같은 기본값(분류 `900`, 기준 단위 `ul`, 값 0)을 쓴다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityDefinition {
    #[serde(alias = "sym")]
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(default = "default_category_id")]
    pub category_id: String,
    #[serde(default = "default_base_unit")]
    pub base_unit: String,
    #[serde(default)]
    pub base_value: f64,
    #[serde(default)]
    pub face_unit: String,
    #[serde(default)]
    pub face_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl QuantityDefinition {
    /// 입력 물리량 정의를 만든다.
    pub fn input(
        symbol: &str,
        category_id: &str,
        face_value: f64,
        face_unit: &str,
        base_value: f64,
        base_unit: &str,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            expression: None,
            category_id: category_id.to_string(),
            base_unit: base_unit.to_string(),
            base_value,
            face_unit: face_unit.to_string(),
            face_value,
            description: None,
        }
    }

    /// 파생 물리량 정의를 만든다. 값은 계산 전이므로 0으로 둔다.
    pub fn derived(
        symbol: &str,
        category_id: &str,
        expression: &str,
        face_unit: &str,
        base_unit: &str,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            expression: Some(expression.to_string()),
            category_id: category_id.to_string(),
            base_unit: base_unit.to_string(),
            base_value: 0.0,
            face_unit: face_unit.to_string(),
            face_value: 0.0,
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// 공백뿐인 수식은 수식이 없는 것으로 본다.
    pub fn expression(&self) -> Option<&str> {
        self.expression
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }

    pub fn is_input(&self) -> bool {
        self.expression().is_none()
    }
}

/// 호출자가 입력 물리량에 지정한 값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputOverride {
    pub value: f64,
    pub unit: String,
}

impl InputOverride {
    pub fn new(value: f64, unit: &str) -> Self {
        Self {
            value,
            unit: unit.to_string(),
        }
    }
}

/// 결과를 특정 단위로 받고 싶을 때의 출력 설정. 단위가 없으면 요청 목록에만 포함한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputPreference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl OutputPreference {
    pub fn unit(unit: &str) -> Self {
        Self {
            unit: Some(unit.to_string()),
        }
    }
}

/// 물리량 하나의 해석 상태.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityState {
    Unresolved,
    Resolved,
    /// 계산 실패. 메시지는 결과 항목의 `error`로 전달된다.
    Failed(String),
}

/// 계산 한 번 동안 사용하는 작업용 물리량.
#[derive(Debug, Clone)]
pub struct Quantity {
    pub definition: QuantityDefinition,
    pub face_value: f64,
    pub face_unit: String,
    pub base_value: f64,
    pub state: QuantityState,
}

impl Quantity {
    /// 입력 물리량은 정의의 값 그대로 이미 해석된 상태로 시작한다.
    pub fn from_definition(definition: QuantityDefinition) -> Self {
        let state = if definition.is_input() {
            QuantityState::Resolved
        } else {
            QuantityState::Unresolved
        };
        Self {
            face_value: definition.face_value,
            face_unit: definition.face_unit.clone(),
            base_value: definition.base_value,
            state,
            definition,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.definition.symbol
    }

    pub fn base_unit(&self) -> &str {
        &self.definition.base_unit
    }

    pub fn expression(&self) -> Option<&str> {
        self.definition.expression()
    }

    pub fn is_input(&self) -> bool {
        self.definition.is_input()
    }

    pub fn is_resolved(&self) -> bool {
        self.state == QuantityState::Resolved
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, QuantityState::Failed(_))
    }
}

/// 응답에 담기는 물리량 하나의 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityResult {
    pub symbol: String,
    pub value: f64,
    pub unit: String,
    pub base_value: f64,
    pub base_unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QuantityResult {
    /// 현재 값으로 결과 항목을 만든다.
    pub fn from_quantity(q: &Quantity) -> Self {
        Self {
            symbol: q.symbol().to_string(),
            value: q.face_value,
            unit: q.face_unit.clone(),
            base_value: q.base_value,
            base_unit: q.base_unit().to_string(),
            expression: q.expression().map(str::to_string),
            error: None,
        }
    }

    /// 실패 항목. 응답 형태를 맞추기 위해 값은 0, 단위는 정의의 표시 단위를 쓴다.
    pub fn failed(q: &Quantity, message: &str) -> Self {
        Self {
            symbol: q.symbol().to_string(),
            value: 0.0,
            unit: q.definition.face_unit.clone(),
            base_value: 0.0,
            base_unit: q.base_unit().to_string(),
            expression: q.expression().map(str::to_string),
            error: Some(message.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
