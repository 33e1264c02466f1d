use serde::{Deserialize, Serialize};

/// 무차원 단위. 내부 기준은 `ul`(unitless, 배율 1)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DimensionlessUnit {
    Unitless,
    Percent,
}

impl DimensionlessUnit {
    pub const ALL: [DimensionlessUnit; 2] = [DimensionlessUnit::Unitless, DimensionlessUnit::Percent];

    pub fn symbol(self) -> &'static str {
        match self {
            DimensionlessUnit::Unitless => "ul",
            DimensionlessUnit::Percent => "%",
        }
    }

    pub fn to_base(self, value: f64) -> f64 {
        match self {
            DimensionlessUnit::Unitless => value,
            DimensionlessUnit::Percent => value / 100.0,
        }
    }

    pub fn from_base(self, value: f64) -> f64 {
        match self {
            DimensionlessUnit::Unitless => value,
            DimensionlessUnit::Percent => value * 100.0,
        }
    }
}
