//! 정의 요약을 보관하는 명시적 캐시.
//!
//! 전역 상태 없이 호출자가 소유하고 필요한 호출에 참조로 넘긴다. 항목은 TTL이 지나면
//! 없는 것으로 취급하며, 시계는 테스트에서 바꿔 끼울 수 있다.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::engine::CalculationSummary;

/// 캐시 만료 판단에 쓰는 시계.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// 프로세스 시작 이후 경과 시간을 쓰는 기본 시계.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// 직접 시간을 움직이는 시계. 복제본끼리 시간을 공유한다.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[derive(Debug, Clone)]
struct Entry {
    summary: CalculationSummary,
    symbol_units: HashMap<String, Vec<String>>,
    stored_at: Duration,
}

#[derive(Debug, Clone)]
pub struct MetadataCache<C = SystemClock> {
    ttl: Duration,
    clock: C,
    entries: HashMap<String, Entry>,
}

impl MetadataCache<SystemClock> {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, SystemClock::default())
    }
}

impl<C: Clock> MetadataCache<C> {
    pub fn with_clock(ttl: Duration, clock: C) -> Self {
        Self {
            ttl,
            clock,
            entries: HashMap::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn is_fresh(&self, entry: &Entry) -> bool {
        self.clock.now().saturating_sub(entry.stored_at) < self.ttl
    }

    /// 요약을 저장하고 기호별 단위 목록도 함께 만든다.
    pub fn insert(&mut self, key: &str, summary: CalculationSummary) {
        let symbol_units = summary.symbol_units().into_iter().collect();
        let entry = Entry {
            summary,
            symbol_units,
            stored_at: self.clock.now(),
        };
        self.entries.insert(key.to_string(), entry);
    }

    pub fn get(&self, key: &str) -> Option<&CalculationSummary> {
        self.entries
            .get(key)
            .filter(|e| self.is_fresh(e))
            .map(|e| &e.summary)
    }

    /// 기호 하나에 쓸 수 있는 단위 목록.
    pub fn symbol_units(&self, key: &str, symbol: &str) -> Option<&[String]> {
        self.entries
            .get(key)
            .filter(|e| self.is_fresh(e))
            .and_then(|e| e.symbol_units.get(symbol))
            .map(Vec::as_slice)
    }

    pub fn invalidate(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// 만료된 항목을 실제로 지운다.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now();
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries
            .retain(|_, e| now.saturating_sub(e.stored_at) < ttl);
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
