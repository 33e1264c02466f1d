use serde::{Deserialize, Serialize};

/// 시간 단위. 내부 기준은 초(s)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Second,
    Millisecond,
    Minute,
    Hour,
    Day,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 5] = [
        TimeUnit::Second,
        TimeUnit::Millisecond,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            TimeUnit::Second => "s",
            TimeUnit::Millisecond => "ms",
            TimeUnit::Minute => "min",
            TimeUnit::Hour => "h",
            TimeUnit::Day => "d",
        }
    }

    pub fn to_base(self, value: f64) -> f64 {
        value * seconds_per(self)
    }

    pub fn from_base(self, value_s: f64) -> f64 {
        value_s / seconds_per(self)
    }
}

fn seconds_per(unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Second => 1.0,
        TimeUnit::Millisecond => 0.001,
        TimeUnit::Minute => 60.0,
        TimeUnit::Hour => 3600.0,
        TimeUnit::Day => 86_400.0,
    }
}

/// 시간을 변환한다.
pub fn convert_time(value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
    to.from_base(from.to_base(value))
}
