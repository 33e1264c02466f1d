use serde::{Deserialize, Serialize};

/// 동력(일률) 단위. 내부 기준은 와트(W)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Watt,
    Kilowatt,
    Megawatt,
    /// 기계식 마력
    Horsepower,
    BtuPerHour,
}

impl PowerUnit {
    pub const ALL: [PowerUnit; 5] = [
        PowerUnit::Watt,
        PowerUnit::Kilowatt,
        PowerUnit::Megawatt,
        PowerUnit::Horsepower,
        PowerUnit::BtuPerHour,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            PowerUnit::Watt => "W",
            PowerUnit::Kilowatt => "kW",
            PowerUnit::Megawatt => "MW",
            PowerUnit::Horsepower => "hp",
            PowerUnit::BtuPerHour => "Btu/h",
        }
    }

    pub fn to_base(self, value: f64) -> f64 {
        value * watt_per(self)
    }

    pub fn from_base(self, value_w: f64) -> f64 {
        value_w / watt_per(self)
    }
}

fn watt_per(unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => 1.0,
        PowerUnit::Kilowatt => 1000.0,
        PowerUnit::Megawatt => 1_000_000.0,
        PowerUnit::Horsepower => 745.699_872,
        PowerUnit::BtuPerHour => 0.293_071_07,
    }
}

/// 동력을 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    to.from_base(from.to_base(value))
}
