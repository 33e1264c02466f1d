use serde::{Deserialize, Serialize};

/// 에너지 단위. 내부 기준은 줄(J)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    Joule,
    Kilojoule,
    Megajoule,
    KilowattHour,
    KiloCalorie,
    Btu,
}

impl EnergyUnit {
    pub const ALL: [EnergyUnit; 6] = [
        EnergyUnit::Joule,
        EnergyUnit::Kilojoule,
        EnergyUnit::Megajoule,
        EnergyUnit::KilowattHour,
        EnergyUnit::KiloCalorie,
        EnergyUnit::Btu,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            EnergyUnit::Joule => "J",
            EnergyUnit::Kilojoule => "kJ",
            EnergyUnit::Megajoule => "MJ",
            EnergyUnit::KilowattHour => "kWh",
            EnergyUnit::KiloCalorie => "kcal",
            EnergyUnit::Btu => "Btu",
        }
    }

    pub fn to_base(self, value: f64) -> f64 {
        to_joule(value, self)
    }

    pub fn from_base(self, value_j: f64) -> f64 {
        from_joule(value_j, self)
    }
}

fn joule_per(unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Joule => 1.0,
        EnergyUnit::Kilojoule => 1000.0,
        EnergyUnit::Megajoule => 1_000_000.0,
        EnergyUnit::KilowattHour => 3_600_000.0,
        EnergyUnit::KiloCalorie => 4184.0,
        EnergyUnit::Btu => 1055.06,
    }
}

fn to_joule(value: f64, unit: EnergyUnit) -> f64 {
    value * joule_per(unit)
}

fn from_joule(value: f64, unit: EnergyUnit) -> f64 {
    value / joule_per(unit)
}

/// 에너지를 변환한다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    let j = to_joule(value, from);
    from_joule(j, to)
}
