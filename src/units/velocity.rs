use serde::{Deserialize, Serialize};

/// 속도 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityUnit {
    MeterPerSecond,
    KilometerPerHour,
    FootPerSecond,
    MilePerHour,
    Knot,
}

impl VelocityUnit {
    pub const ALL: [VelocityUnit; 5] = [
        VelocityUnit::MeterPerSecond,
        VelocityUnit::KilometerPerHour,
        VelocityUnit::FootPerSecond,
        VelocityUnit::MilePerHour,
        VelocityUnit::Knot,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            VelocityUnit::MeterPerSecond => "m/s",
            VelocityUnit::KilometerPerHour => "km/h",
            VelocityUnit::FootPerSecond => "ft/s",
            VelocityUnit::MilePerHour => "mph",
            VelocityUnit::Knot => "kt",
        }
    }

    pub fn to_base(self, value: f64) -> f64 {
        to_mps(value, self)
    }

    pub fn from_base(self, value_mps: f64) -> f64 {
        from_mps(value_mps, self)
    }
}

const MPS_PER_MPH: f64 = 0.447_04;
const MPS_PER_KNOT: f64 = 1852.0 / 3600.0;

fn to_mps(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::KilometerPerHour => value / 3.6,
        VelocityUnit::FootPerSecond => value * 0.3048,
        VelocityUnit::MilePerHour => value * MPS_PER_MPH,
        VelocityUnit::Knot => value * MPS_PER_KNOT,
    }
}

fn from_mps(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::KilometerPerHour => value * 3.6,
        VelocityUnit::FootPerSecond => value / 0.3048,
        VelocityUnit::MilePerHour => value / MPS_PER_MPH,
        VelocityUnit::Knot => value / MPS_PER_KNOT,
    }
}

/// 속도를 변환한다.
pub fn convert_velocity(value: f64, from: VelocityUnit, to: VelocityUnit) -> f64 {
    let base = to_mps(value, from);
    from_mps(base, to)
}
