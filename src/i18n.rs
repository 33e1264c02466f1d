use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const WARNING_PREFIX: &str = "general.warning_prefix";

    pub const CALC_FAILED_COUNT: &str = "calc.failed_count";

    pub const VALIDATE_TOTAL: &str = "validate.total";
    pub const VALIDATE_INPUTS: &str = "validate.inputs";
    pub const VALIDATE_OUTPUTS: &str = "validate.outputs";
    pub const VALIDATE_UNITS: &str = "validate.available_units";
    pub const VALIDATE_ISSUES: &str = "validate.issues";
    pub const VALIDATE_NO_ISSUES: &str = "validate.no_issues";
    pub const VALIDATE_BASE: &str = "validate.base";

    pub const CONVERT_RESULT: &str = "convert.result";

    pub const UNITS_HEADING: &str = "units.heading";
    pub const UNITS_BASE: &str = "units.base";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩이 우선이며 영어 번역이 없으면 한국어 문자열을 쓴다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: &str) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| normalize_lang(config_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().and_then(|loc| normalize_locale_string(&loc)) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let path = dir.join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        WARNING_PREFIX => "경고",
        CALC_FAILED_COUNT => "계산에 실패한 출력 물리량 수:",
        VALIDATE_TOTAL => "전체 물리량:",
        VALIDATE_INPUTS => "입력 물리량",
        VALIDATE_OUTPUTS => "출력 물리량",
        VALIDATE_UNITS => "분류별 사용 가능 단위",
        VALIDATE_ISSUES => "확인이 필요한 정의",
        VALIDATE_NO_ISSUES => "정의 문제 없음",
        VALIDATE_BASE => "기준",
        CONVERT_RESULT => "변환 결과:",
        UNITS_HEADING => "호환 단위:",
        UNITS_BASE => "기준 단위:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        WARNING_PREFIX => "Warning",
        CALC_FAILED_COUNT => "Output quantities that failed:",
        VALIDATE_TOTAL => "Total quantities:",
        VALIDATE_INPUTS => "Input quantities",
        VALIDATE_OUTPUTS => "Output quantities",
        VALIDATE_UNITS => "Available units per category",
        VALIDATE_ISSUES => "Definitions to review",
        VALIDATE_NO_ISSUES => "No definition issues",
        VALIDATE_BASE => "base",
        CONVERT_RESULT => "Result:",
        UNITS_HEADING => "Compatible units:",
        UNITS_BASE => "Base unit:",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_korean_for_unknown_language() {
        let tr = Translator::new("fr");
        assert_eq!(tr.language(), Language::Ko);
        assert_eq!(tr.t(keys::ERROR_PREFIX), "오류");
        assert_eq!(Translator::new("en-US").t(keys::ERROR_PREFIX), "Error");
        assert_eq!(Translator::new("en").t(keys::VALIDATE_BASE), "base");
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language(Some("en"), "ko"), "en");
        assert_eq!(resolve_language(None, "ko-KR"), "ko");
    }

    #[test]
    fn pack_keys_are_flattened() {
        let map = parse_toml_to_map("[general]\nerror_prefix = \"ERR\"\n").unwrap();
        assert_eq!(map.get(keys::ERROR_PREFIX).map(String::as_str), Some("ERR"));
    }
}
