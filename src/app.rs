use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::engine::{CalcError, Calculator};
use crate::i18n::Translator;
use crate::ui_cli;

/// 물리량 계산 엔진 CLI.
#[derive(Debug, Parser)]
#[command(name = "pq_calc", version, about = "물리량 정의를 계산하고 단위를 변환합니다")]
pub struct Cli {
    /// 설정 파일 경로. 없으면 기본값으로 생성한다.
    #[arg(long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// 출력 언어 (ko / en / auto)
    #[arg(long, global = true)]
    pub lang: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 계산 요청 JSON을 실행하고 응답 JSON을 출력한다.
    Calc {
        request: PathBuf,
        #[arg(long)]
        pretty: bool,
    },
    /// 물리량 정의 목록을 검사하고 요약한다.
    Validate { definitions: PathBuf },
    /// 값 하나를 다른 단위로 변환한다.
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: f64,
        from: String,
        to: String,
    },
    /// 주어진 단위와 호환되는 단위 목록을 출력한다.
    Units { unit: String },
}

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 계산 요청 오류
    #[error("계산 오류: {0}")]
    Calc(#[from] CalcError),
    /// 요청/정의 JSON 오류
    #[error("JSON 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 명령 하나를 실행한다.
pub fn run(command: &Command, config: &Config, tr: &Translator) -> Result<(), AppError> {
    let calculator = Calculator::new(config.engine.clone());
    match command {
        Command::Calc { request, pretty } => ui_cli::handle_calc(tr, &calculator, request, *pretty),
        Command::Validate { definitions } => ui_cli::handle_validate(tr, &calculator, definitions),
        Command::Convert { value, from, to } => {
            ui_cli::handle_convert(tr, &calculator, *value, from, to)
        }
        Command::Units { unit } => ui_cli::handle_units(tr, &calculator, unit),
    }
}
