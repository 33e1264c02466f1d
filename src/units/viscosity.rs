use serde::{Deserialize, Serialize};

/// 점도 단위. 내부 기준은 Pa·s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViscosityUnit {
    PascalSecond,
    Poise,
    Centipoise,
}

impl ViscosityUnit {
    pub const ALL: [ViscosityUnit; 3] = [
        ViscosityUnit::PascalSecond,
        ViscosityUnit::Poise,
        ViscosityUnit::Centipoise,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            ViscosityUnit::PascalSecond => "Pa·s",
            ViscosityUnit::Poise => "P",
            ViscosityUnit::Centipoise => "cP",
        }
    }

    pub fn to_base(self, value: f64) -> f64 {
        to_pas(value, self)
    }

    pub fn from_base(self, value_pas: f64) -> f64 {
        from_pas(value_pas, self)
    }
}

fn to_pas(value: f64, unit: ViscosityUnit) -> f64 {
    match unit {
        ViscosityUnit::PascalSecond => value,
        ViscosityUnit::Poise => value / 10.0,
        ViscosityUnit::Centipoise => value / 1000.0,
    }
}

fn from_pas(value: f64, unit: ViscosityUnit) -> f64 {
    match unit {
        ViscosityUnit::PascalSecond => value,
        ViscosityUnit::Poise => value * 10.0,
        ViscosityUnit::Centipoise => value * 1000.0,
    }
}

/// 점도를 변환한다.
pub fn convert_viscosity(value: f64, from: ViscosityUnit, to: ViscosityUnit) -> f64 {
    let base = to_pas(value, from);
    from_pas(base, to)
}
