use std::collections::BTreeMap;

use log::debug;

use crate::quantity::{InputOverride, OutputPreference, QuantityResult};

/// 응답에 실을 입력/출력 결과.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    pub inputs: BTreeMap<String, QuantityResult>,
    pub outputs: BTreeMap<String, QuantityResult>,
}

/// 해석된 결과를 입력 에코와 출력으로 나눈다.
///
/// 입력값을 지정한 물리량은 `inputs`에만 들어간다. 나머지는 출력 필터가 없으면 모두,
/// 있으면 필터에 이름이 있는 것만 `outputs`에 들어간다. 어느 쪽에도 해당하지 않는
/// 중간 물리량은 계산은 되었지만 응답에서 빠진다.
pub fn project(
    results: &BTreeMap<String, QuantityResult>,
    requested_inputs: &BTreeMap<String, InputOverride>,
    requested_outputs: Option<&BTreeMap<String, OutputPreference>>,
) -> Projection {
    let mut view = Projection::default();
    for (symbol, result) in results {
        if requested_inputs.contains_key(symbol) {
            view.inputs.insert(symbol.clone(), result.clone());
        } else if requested_outputs.map_or(true, |outputs| outputs.contains_key(symbol)) {
            view.outputs.insert(symbol.clone(), result.clone());
        }
    }
    if let Some(outputs) = requested_outputs {
        for symbol in outputs.keys().filter(|s| !results.contains_key(*s)) {
            debug!("요청한 출력 {symbol}은 정의에 없어 생략");
        }
    }
    view
}
