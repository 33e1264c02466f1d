//! 정의 요약 캐시 테스트.
use std::time::Duration;

use pq_calc_engine::cache::{ManualClock, MetadataCache};
use pq_calc_engine::config::EngineConfig;
use pq_calc_engine::engine::{describe, describe_cached, Calculator, QuantityRole};
use pq_calc_engine::quantity::QuantityDefinition;
use pq_calc_engine::UnitCatalog;

fn defs() -> Vec<QuantityDefinition> {
    vec![
        QuantityDefinition::input("D", "length", 1.0, "km", 1000.0, "m").with_description("거리"),
        QuantityDefinition::input("t", "time", 1.0, "h", 3600.0, "s"),
        QuantityDefinition::derived("v", "velocity", "D / t", "km/h", "m/s"),
        QuantityDefinition::input("n", "custom", 3.0, "widget", 3.0, "widget"),
    ]
}

#[test]
fn describe_splits_inputs_and_outputs() {
    let summary = describe(&defs(), &UnitCatalog).unwrap();
    assert_eq!(summary.total_quantities, 4);
    assert_eq!(summary.input_quantities.len(), 3);
    assert_eq!(summary.output_quantities[0].symbol, "v");
    assert_eq!(summary.output_quantities[0].role, QuantityRole::Output);
    assert_eq!(summary.output_quantities[0].expression.as_deref(), Some("D / t"));
    assert_eq!(summary.input_quantities[0].description.as_deref(), Some("거리"));
    assert!(summary.available_units["velocity"].contains(&"mph".to_string()));
    // 게이트웨이가 모르는 단위는 표시/기준 단위로 대체한다.
    assert_eq!(summary.available_units["custom"], vec!["widget", "widget"]);
    assert!(summary.issues.is_empty());
}

#[test]
fn entries_expire_after_ttl() {
    let clock = ManualClock::new();
    let mut cache = MetadataCache::with_clock(Duration::from_secs(60), clock.clone());
    let summary = describe(&defs(), &UnitCatalog).unwrap();
    cache.insert("article-1", summary.clone());

    assert_eq!(cache.get("article-1"), Some(&summary));
    let units = cache.symbol_units("article-1", "t").unwrap();
    assert!(units.iter().any(|u| u == "min"));

    clock.advance(Duration::from_secs(59));
    assert!(cache.get("article-1").is_some());
    clock.advance(Duration::from_secs(1));
    assert!(cache.get("article-1").is_none());
    assert!(cache.symbol_units("article-1", "t").is_none());
    assert_eq!(cache.purge_expired(), 1);
    assert!(cache.is_empty());
}

#[test]
fn cached_describe_reuses_summary_until_invalidated() {
    let clock = ManualClock::new();
    let mut cache = MetadataCache::with_clock(Duration::from_secs(300), clock);
    let first = describe_cached("a", &defs(), &UnitCatalog, &mut cache).unwrap();

    let other = vec![QuantityDefinition::input("x", "length", 1.0, "m", 1.0, "m")];
    let hit = describe_cached("a", &other, &UnitCatalog, &mut cache).unwrap();
    assert_eq!(hit, first);

    assert!(cache.invalidate("a"));
    let fresh = describe_cached("a", &other, &UnitCatalog, &mut cache).unwrap();
    assert_eq!(fresh.total_quantities, 1);

    cache.clear();
    assert_eq!(cache.len(), 0);
}

#[test]
fn calculator_caches_summaries_for_configured_ttl() {
    let calc = Calculator::new(EngineConfig::default());
    let first = calc.describe("defs.json", &defs()).unwrap();
    let other = vec![QuantityDefinition::input("x", "length", 1.0, "m", 1.0, "m")];
    assert_eq!(calc.describe("defs.json", &other).unwrap(), first);
    assert!(calc.invalidate("defs.json"));
    assert_eq!(calc.describe("defs.json", &other).unwrap().total_quantities, 1);

    // TTL 0이면 매번 새로 요약한다.
    let uncached = Calculator::new(EngineConfig {
        cache_ttl_secs: 0,
        ..EngineConfig::default()
    });
    assert_eq!(uncached.describe("k", &defs()).unwrap().total_quantities, 4);
    assert_eq!(uncached.describe("k", &other).unwrap().total_quantities, 1);
}
