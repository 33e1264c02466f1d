use serde::{Deserialize, Serialize};

/// 질량 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Kilogram,
    Gram,
    Tonne,
    Pound,
}

impl MassUnit {
    pub const ALL: [MassUnit; 4] = [
        MassUnit::Kilogram,
        MassUnit::Gram,
        MassUnit::Tonne,
        MassUnit::Pound,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            MassUnit::Kilogram => "kg",
            MassUnit::Gram => "g",
            MassUnit::Tonne => "t",
            MassUnit::Pound => "lb",
        }
    }

    pub fn to_base(self, value: f64) -> f64 {
        to_kg(value, self)
    }

    pub fn from_base(self, value_kg: f64) -> f64 {
        from_kg(value_kg, self)
    }
}

const KG_PER_POUND: f64 = 0.453_592_37;

fn to_kg(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => value,
        MassUnit::Gram => value / 1000.0,
        MassUnit::Tonne => value * 1000.0,
        MassUnit::Pound => value * KG_PER_POUND,
    }
}

fn from_kg(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => value,
        MassUnit::Gram => value * 1000.0,
        MassUnit::Tonne => value / 1000.0,
        MassUnit::Pound => value / KG_PER_POUND,
    }
}

/// 질량을 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    let base = to_kg(value, from);
    from_kg(base, to)
}
