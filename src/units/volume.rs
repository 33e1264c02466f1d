use serde::{Deserialize, Serialize};

/// 체적 단위. 내부 기준은 입방미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    CubicMeter,
    Liter,
    Milliliter,
    CubicFoot,
    /// 미국 갤런
    Gallon,
}

impl VolumeUnit {
    pub const ALL: [VolumeUnit; 5] = [
        VolumeUnit::CubicMeter,
        VolumeUnit::Liter,
        VolumeUnit::Milliliter,
        VolumeUnit::CubicFoot,
        VolumeUnit::Gallon,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            VolumeUnit::CubicMeter => "m3",
            VolumeUnit::Liter => "L",
            VolumeUnit::Milliliter => "mL",
            VolumeUnit::CubicFoot => "ft3",
            VolumeUnit::Gallon => "gal",
        }
    }

    pub fn to_base(self, value: f64) -> f64 {
        to_cubic_meter(value, self)
    }

    pub fn from_base(self, value_m3: f64) -> f64 {
        from_cubic_meter(value_m3, self)
    }
}

const M3_PER_GALLON: f64 = 0.003_785_411_784;

fn to_cubic_meter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMeter => value,
        VolumeUnit::Liter => value / 1000.0,
        VolumeUnit::Milliliter => value / 1_000_000.0,
        VolumeUnit::CubicFoot => value * 0.028_316_846_592,
        VolumeUnit::Gallon => value * M3_PER_GALLON,
    }
}

fn from_cubic_meter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMeter => value,
        VolumeUnit::Liter => value * 1000.0,
        VolumeUnit::Milliliter => value * 1_000_000.0,
        VolumeUnit::CubicFoot => value / 0.028_316_846_592,
        VolumeUnit::Gallon => value / M3_PER_GALLON,
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    let m3 = to_cubic_meter(value, from);
    from_cubic_meter(m3, to)
}
