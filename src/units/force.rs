use serde::{Deserialize, Serialize};

/// 힘 단위. 내부 기준은 뉴턴(N)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceUnit {
    Newton,
    Kilonewton,
    KilogramForce,
    PoundForce,
}

impl ForceUnit {
    pub const ALL: [ForceUnit; 4] = [
        ForceUnit::Newton,
        ForceUnit::Kilonewton,
        ForceUnit::KilogramForce,
        ForceUnit::PoundForce,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            ForceUnit::Newton => "N",
            ForceUnit::Kilonewton => "kN",
            ForceUnit::KilogramForce => "kgf",
            ForceUnit::PoundForce => "lbf",
        }
    }

    pub fn to_base(self, value: f64) -> f64 {
        value * newton_per(self)
    }

    pub fn from_base(self, value_n: f64) -> f64 {
        value_n / newton_per(self)
    }
}

const STANDARD_GRAVITY: f64 = 9.806_65;

fn newton_per(unit: ForceUnit) -> f64 {
    match unit {
        ForceUnit::Newton => 1.0,
        ForceUnit::Kilonewton => 1000.0,
        ForceUnit::KilogramForce => STANDARD_GRAVITY,
        ForceUnit::PoundForce => 4.448_221_615_260_5,
    }
}

/// 힘을 변환한다.
pub fn convert_force(value: f64, from: ForceUnit, to: ForceUnit) -> f64 {
    to.from_base(from.to_base(value))
}
