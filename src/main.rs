use clap::Parser;
use pq_calc_engine::app::{self, Cli};
use pq_calc_engine::config::{self, Config};
use pq_calc_engine::i18n::{self, keys, Translator};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() {
    let cli = Cli::parse();
    let cfg = match config::load_or_default(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("오류: {err}");
            Config::default()
        }
    };
    init_logging(&cfg.logging.level);

    let lang = i18n::resolve_language(cli.lang.as_deref(), &cfg.ui.language);
    let tr = Translator::new_with_pack(&lang, None);
    if let Err(err) = app::run(&cli.command, &cfg, &tr) {
        eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();
}
