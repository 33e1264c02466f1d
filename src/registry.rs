use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use crate::conversion::{ConversionError, UnitGateway};
use crate::expr::{self, lexer};
use crate::quantity::{Quantity, QuantityDefinition};

/// 정의 목록 자체가 잘못되어 계산을 시작할 수 없는 경우.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DefinitionError {
    #[error("기호가 비어 있는 물리량 정의가 있습니다")]
    EmptySymbol,
    #[error("식별자로 쓸 수 없는 기호: {0}")]
    InvalidSymbol(String),
    #[error("중복된 기호: {0}")]
    DuplicateSymbol(String),
    #[error("{symbol}: {source}")]
    Unit {
        symbol: String,
        #[source]
        source: ConversionError,
    },
    #[error("{symbol}: 기준 단위 {base_unit}와 표시 단위 {face_unit}의 분류가 다릅니다")]
    UnitMismatch {
        symbol: String,
        base_unit: String,
        face_unit: String,
    },
}

/// 계산은 가능하지만 작성자가 확인해야 할 정의상의 문제.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionIssue {
    #[error("{symbol}: 정의되지 않은 기호 {reference}를 참조합니다")]
    UndefinedReference { symbol: String, reference: String },
    #[error("{0}: 내장 함수/상수 이름과 같아 수식에서 참조할 수 없습니다")]
    ShadowedByBuiltin(String),
}

fn is_identifier(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// 계산 요청 하나의 물리량 집합. 정의 순서를 유지한다.
#[derive(Debug, Clone, Default)]
pub struct QuantityRegistry {
    quantities: Vec<Quantity>,
    index: HashMap<String, usize>,
}

impl QuantityRegistry {
    /// 정의 목록으로 작업 집합 전체를 새로 만든다.
    ///
    /// 기호 형식과 중복만 검사하며 외부 서비스는 호출하지 않는다.
    /// 표시 단위가 비어 있으면 기준 단위를 표시 단위로 쓴다.
    pub fn load(definitions: Vec<QuantityDefinition>) -> Result<Self, DefinitionError> {
        let mut registry = Self::default();
        for mut definition in definitions {
            definition.symbol = definition.symbol.trim().to_string();
            if definition.symbol.is_empty() {
                return Err(DefinitionError::EmptySymbol);
            }
            if !is_identifier(&definition.symbol) {
                return Err(DefinitionError::InvalidSymbol(definition.symbol));
            }
            if registry.index.contains_key(&definition.symbol) {
                return Err(DefinitionError::DuplicateSymbol(definition.symbol));
            }
            if definition.face_unit.trim().is_empty() {
                definition.face_unit = definition.base_unit.clone();
            }
            registry
                .index
                .insert(definition.symbol.clone(), registry.quantities.len());
            registry.quantities.push(Quantity::from_definition(definition));
        }
        Ok(registry)
    }

    /// 기준/표시 단위가 게이트웨이에 있고 같은 분류인지 확인한다.
    ///
    /// 입력 물리량의 기준값은 정의에 적힌 값 대신 표시값을 기준 단위로 환산해 다시 채운다.
    pub fn validate_units<G: UnitGateway + ?Sized>(
        &mut self,
        gateway: &G,
    ) -> Result<(), DefinitionError> {
        for q in &mut self.quantities {
            let def = &q.definition;
            let unit_error = |source| DefinitionError::Unit {
                symbol: def.symbol.clone(),
                source,
            };
            let base_kind = gateway.kind_of(&def.base_unit).map_err(unit_error)?;
            let face_kind = gateway.kind_of(&def.face_unit).map_err(unit_error)?;
            if base_kind != face_kind {
                return Err(DefinitionError::UnitMismatch {
                    symbol: def.symbol.clone(),
                    base_unit: def.base_unit.clone(),
                    face_unit: def.face_unit.clone(),
                });
            }
            if q.is_input() {
                let base_value = gateway
                    .convert(q.face_value, &q.face_unit, &def.base_unit)
                    .map_err(unit_error)?;
                if base_value != def.base_value {
                    debug!(
                        "{}: 기준값 {} → {base_value} {}",
                        def.symbol, def.base_value, def.base_unit
                    );
                }
                q.base_value = base_value;
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    pub fn get(&self, symbol: &str) -> Option<&Quantity> {
        self.index.get(symbol).map(|&i| &self.quantities[i])
    }

    pub fn get_mut(&mut self, symbol: &str) -> Option<&mut Quantity> {
        self.index.get(symbol).map(|&i| &mut self.quantities[i])
    }

    /// 정의 순서대로 순회한다.
    pub fn iter(&self) -> impl Iterator<Item = &Quantity> {
        self.quantities.iter()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.quantities.iter().map(Quantity::symbol)
    }

    pub fn inputs(&self) -> impl Iterator<Item = &Quantity> {
        self.quantities.iter().filter(|q| q.is_input())
    }

    pub fn derived(&self) -> impl Iterator<Item = &Quantity> {
        self.quantities.iter().filter(|q| !q.is_input())
    }

    /// 정의되지 않은 기호 참조, 내장 이름과 겹치는 기호를 찾는다.
    pub fn issues(&self) -> Vec<DefinitionIssue> {
        let mut issues = Vec::new();
        for q in &self.quantities {
            if expr::is_builtin(q.symbol()) {
                issues.push(DefinitionIssue::ShadowedByBuiltin(q.symbol().to_string()));
            }
            let Some(expression) = q.expression() else {
                continue;
            };
            let mut seen = Vec::new();
            for ident in lexer::identifiers(expression) {
                if expr::is_builtin(ident) || self.contains(ident) || seen.contains(&ident) {
                    continue;
                }
                seen.push(ident);
                issues.push(DefinitionIssue::UndefinedReference {
                    symbol: q.symbol().to_string(),
                    reference: ident.to_string(),
                });
            }
        }
        issues
    }
}
