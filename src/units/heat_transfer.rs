use serde::{Deserialize, Serialize};

/// 열전달계수(U) 단위. 내부 기준은 W/m²·K이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatTransferUnit {
    WPerSquareMeterK,
    BtuPerHourSquareFootF,
}

impl HeatTransferUnit {
    pub const ALL: [HeatTransferUnit; 2] = [
        HeatTransferUnit::WPerSquareMeterK,
        HeatTransferUnit::BtuPerHourSquareFootF,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            HeatTransferUnit::WPerSquareMeterK => "W/m2K",
            HeatTransferUnit::BtuPerHourSquareFootF => "Btu/h-ft2-F",
        }
    }

    pub fn to_base(self, value: f64) -> f64 {
        to_base(value, self)
    }

    pub fn from_base(self, value: f64) -> f64 {
        from_base(value, self)
    }
}

fn to_base(value: f64, unit: HeatTransferUnit) -> f64 {
    match unit {
        HeatTransferUnit::WPerSquareMeterK => value,
        HeatTransferUnit::BtuPerHourSquareFootF => value * 5.678263,
    }
}

fn from_base(value: f64, unit: HeatTransferUnit) -> f64 {
    match unit {
        HeatTransferUnit::WPerSquareMeterK => value,
        HeatTransferUnit::BtuPerHourSquareFootF => value / 5.678263,
    }
}

/// 열전달계수를 변환한다.
pub fn convert_heat_transfer(value: f64, from: HeatTransferUnit, to: HeatTransferUnit) -> f64 {
    let base = to_base(value, from);
    from_base(base, to)
}
