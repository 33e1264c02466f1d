use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::app::AppError;
use crate::conversion::UnitGateway;
use crate::engine::{CalculationRequest, Calculator, QuantityInfo};
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityDefinition;

/// 정의 파일은 배열이거나 `{ "quantities": [...] }` 형태다.
#[derive(Deserialize)]
#[serde(untagged)]
enum DefinitionFile {
    List(Vec<QuantityDefinition>),
    Wrapped {
        #[serde(alias = "quantityDefinitions", alias = "pqs")]
        quantities: Vec<QuantityDefinition>,
    },
}

impl DefinitionFile {
    fn into_definitions(self) -> Vec<QuantityDefinition> {
        match self {
            DefinitionFile::List(defs) | DefinitionFile::Wrapped { quantities: defs } => defs,
        }
    }
}

/// 계산 요청 파일을 실행하고 응답 JSON을 출력한다.
pub fn handle_calc(
    tr: &Translator,
    calculator: &Calculator,
    path: &Path,
    pretty: bool,
) -> Result<(), AppError> {
    let content = fs::read_to_string(path)?;
    let request: CalculationRequest = serde_json::from_str(&content)?;
    let response = calculator.calculate(&request)?;
    let json = if pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{json}");
    let failed = response.outputs.values().filter(|r| r.is_error()).count();
    if failed > 0 {
        eprintln!("{}: {} {failed}", tr.t(keys::WARNING_PREFIX), tr.t(keys::CALC_FAILED_COUNT));
    }
    Ok(())
}

/// 정의 목록 요약과 정의상의 문제를 출력한다.
pub fn handle_validate(tr: &Translator, calculator: &Calculator, path: &Path) -> Result<(), AppError> {
    let content = fs::read_to_string(path)?;
    let definitions = serde_json::from_str::<DefinitionFile>(&content)?.into_definitions();
    let summary = calculator.describe(&path.to_string_lossy(), &definitions)?;

    println!("{} {}", tr.t(keys::VALIDATE_TOTAL), summary.total_quantities);
    println!("\n[{}]", tr.t(keys::VALIDATE_INPUTS));
    for info in &summary.input_quantities {
        println!("{}", format_info(tr, info));
    }
    println!("\n[{}]", tr.t(keys::VALIDATE_OUTPUTS));
    for info in &summary.output_quantities {
        println!("{}", format_info(tr, info));
    }
    println!("\n[{}]", tr.t(keys::VALIDATE_UNITS));
    for (category, units) in &summary.available_units {
        println!("  {category}: {}", units.join(", "));
    }
    if summary.issues.is_empty() {
        println!("\n{}", tr.t(keys::VALIDATE_NO_ISSUES));
    } else {
        println!("\n[{}]", tr.t(keys::VALIDATE_ISSUES));
        for issue in &summary.issues {
            println!("  - {issue}");
        }
    }
    Ok(())
}

fn format_info(tr: &Translator, info: &QuantityInfo) -> String {
    let expression = info
        .expression
        .as_deref()
        .map(|e| format!(" = {e}"))
        .unwrap_or_default();
    let description = info
        .description
        .as_deref()
        .map(|d| format!("  ({d})"))
        .unwrap_or_default();
    format!(
        "  {}{expression} [{}, {} {}]{description}",
        info.symbol,
        info.unit,
        tr.t(keys::VALIDATE_BASE),
        info.base_unit
    )
}

/// 단위 변환 명령을 처리한다.
pub fn handle_convert(
    tr: &Translator,
    calculator: &Calculator,
    value: f64,
    from: &str,
    to: &str,
) -> Result<(), AppError> {
    let result = calculator.gateway().convert(value, from, to)?;
    println!("{} {value} {from} = {result} {to}", tr.t(keys::CONVERT_RESULT));
    Ok(())
}

/// 호환 단위 목록을 출력한다.
pub fn handle_units(tr: &Translator, calculator: &Calculator, unit: &str) -> Result<(), AppError> {
    let gateway = calculator.gateway();
    let kind = gateway.kind_of(unit)?;
    let base = gateway.base_unit(unit)?;
    let units = gateway.compatible_units(unit)?;
    println!("{kind} / {} {base}", tr.t(keys::UNITS_BASE));
    println!("{} {}", tr.t(keys::UNITS_HEADING), units.join(", "));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::QuantityRole;

    #[test]
    fn quantity_line_follows_language() {
        let info = QuantityInfo {
            symbol: "v".into(),
            description: None,
            unit: "km/h".into(),
            base_unit: "m/s".into(),
            category_id: "velocity".into(),
            role: QuantityRole::Output,
            expression: Some("D / t".into()),
        };
        assert_eq!(
            format_info(&Translator::new("en"), &info),
            "  v = D / t [km/h, base m/s]"
        );
        assert_eq!(
            format_info(&Translator::new("ko"), &info),
            "  v = D / t [km/h, 기준 m/s]"
        );
    }
}
