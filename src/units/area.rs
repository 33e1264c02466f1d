use serde::{Deserialize, Serialize};

/// 면적 단위. 내부 기준은 제곱미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMeter,
    SquareMillimeter,
    SquareCentimeter,
    SquareKilometer,
    Hectare,
    SquareInch,
    SquareFoot,
}

impl AreaUnit {
    pub const ALL: [AreaUnit; 7] = [
        AreaUnit::SquareMeter,
        AreaUnit::SquareMillimeter,
        AreaUnit::SquareCentimeter,
        AreaUnit::SquareKilometer,
        AreaUnit::Hectare,
        AreaUnit::SquareInch,
        AreaUnit::SquareFoot,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            AreaUnit::SquareMeter => "m2",
            AreaUnit::SquareMillimeter => "mm2",
            AreaUnit::SquareCentimeter => "cm2",
            AreaUnit::SquareKilometer => "km2",
            AreaUnit::Hectare => "ha",
            AreaUnit::SquareInch => "in2",
            AreaUnit::SquareFoot => "ft2",
        }
    }

    pub fn to_base(self, value: f64) -> f64 {
        to_square_meter(value, self)
    }

    pub fn from_base(self, value_m2: f64) -> f64 {
        from_square_meter(value_m2, self)
    }
}

fn factor(unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareMeter => 1.0,
        AreaUnit::SquareMillimeter => 1e-6,
        AreaUnit::SquareCentimeter => 1e-4,
        AreaUnit::SquareKilometer => 1e6,
        AreaUnit::Hectare => 1e4,
        AreaUnit::SquareInch => 0.000_645_16,
        AreaUnit::SquareFoot => 0.092_903_04,
    }
}

fn to_square_meter(value: f64, unit: AreaUnit) -> f64 {
    value * factor(unit)
}

fn from_square_meter(value: f64, unit: AreaUnit) -> f64 {
    value / factor(unit)
}

/// 면적을 변환한다.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    let m2 = to_square_meter(value, from);
    from_square_meter(m2, to)
}
