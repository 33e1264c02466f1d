use serde::{Deserialize, Serialize};

/// 비엔탈피 단위. 내부 기준은 J/kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecificEnthalpyUnit {
    JPerKg,
    KjPerKg,
    KcalPerKg,
    BtuPerPound,
}

impl SpecificEnthalpyUnit {
    pub const ALL: [SpecificEnthalpyUnit; 4] = [
        SpecificEnthalpyUnit::JPerKg,
        SpecificEnthalpyUnit::KjPerKg,
        SpecificEnthalpyUnit::KcalPerKg,
        SpecificEnthalpyUnit::BtuPerPound,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            SpecificEnthalpyUnit::JPerKg => "J/kg",
            SpecificEnthalpyUnit::KjPerKg => "kJ/kg",
            SpecificEnthalpyUnit::KcalPerKg => "kcal/kg",
            SpecificEnthalpyUnit::BtuPerPound => "Btu/lb",
        }
    }

    pub fn to_base(self, value: f64) -> f64 {
        to_base(value, self)
    }

    pub fn from_base(self, value: f64) -> f64 {
        from_base(value, self)
    }
}

fn to_base(value: f64, unit: SpecificEnthalpyUnit) -> f64 {
    match unit {
        SpecificEnthalpyUnit::JPerKg => value,
        SpecificEnthalpyUnit::KjPerKg => value * 1000.0,
        SpecificEnthalpyUnit::KcalPerKg => value * 4184.0,
        SpecificEnthalpyUnit::BtuPerPound => value * 2326.0,
    }
}

fn from_base(value: f64, unit: SpecificEnthalpyUnit) -> f64 {
    match unit {
        SpecificEnthalpyUnit::JPerKg => value,
        SpecificEnthalpyUnit::KjPerKg => value / 1000.0,
        SpecificEnthalpyUnit::KcalPerKg => value / 4184.0,
        SpecificEnthalpyUnit::BtuPerPound => value / 2326.0,
    }
}

/// 비엔탈피를 변환한다.
pub fn convert_specific_enthalpy(
    value: f64,
    from: SpecificEnthalpyUnit,
    to: SpecificEnthalpyUnit,
) -> f64 {
    let base = to_base(value, from);
    from_base(base, to)
}
