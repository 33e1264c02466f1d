use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 절대압 Pa이다.
///
/// 수식 평가가 기준값끼리 일관되게 이루어지도록 기준은 항상 절대압으로 둔다.
/// 게이지 단위(`barg`, `psig`)는 표준 대기압(101 325 Pa)을 보정하여 환산한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    MegaPascal,
    Bar,
    /// 게이지 bar
    BarG,
    MilliBar,
    KgPerCm2,
    Psi,
    /// 게이지 psi
    PsiG,
    Atm,
    /// mmHg(절대, torr와 동일 취급)
    MmHg,
}

impl PressureUnit {
    pub const ALL: [PressureUnit; 11] = [
        PressureUnit::Pascal,
        PressureUnit::KiloPascal,
        PressureUnit::MegaPascal,
        PressureUnit::Bar,
        PressureUnit::BarG,
        PressureUnit::MilliBar,
        PressureUnit::KgPerCm2,
        PressureUnit::Psi,
        PressureUnit::PsiG,
        PressureUnit::Atm,
        PressureUnit::MmHg,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::Bar => "bar",
            PressureUnit::BarG => "barg",
            PressureUnit::MilliBar => "mbar",
            PressureUnit::KgPerCm2 => "kgf/cm2",
            PressureUnit::Psi => "psi",
            PressureUnit::PsiG => "psig",
            PressureUnit::Atm => "atm",
            PressureUnit::MmHg => "mmHg",
        }
    }

    /// 게이지 기준 단위인지 여부.
    pub fn is_gauge(self) -> bool {
        matches!(self, PressureUnit::BarG | PressureUnit::PsiG)
    }

    pub fn to_base(self, value: f64) -> f64 {
        to_pascal(value, self)
    }

    pub fn from_base(self, value_pa: f64) -> f64 {
        from_pascal(value_pa, self)
    }
}

/// 표준 대기압 [Pa]
pub const ATM_PA: f64 = 101_325.0;
const PA_PER_BAR: f64 = 100_000.0;
const PA_PER_PSI: f64 = 6_894.757_293_168;
const PA_PER_KGF_CM2: f64 = 98_066.5;
const PA_PER_MMHG: f64 = ATM_PA / 760.0;

fn pascal_per(unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => 1.0,
        PressureUnit::KiloPascal => 1000.0,
        PressureUnit::MegaPascal => 1_000_000.0,
        PressureUnit::Bar | PressureUnit::BarG => PA_PER_BAR,
        PressureUnit::MilliBar => 100.0,
        PressureUnit::KgPerCm2 => PA_PER_KGF_CM2,
        PressureUnit::Psi | PressureUnit::PsiG => PA_PER_PSI,
        PressureUnit::Atm => ATM_PA,
        PressureUnit::MmHg => PA_PER_MMHG,
    }
}

/// 주어진 압력을 절대압 Pa로 변환한다. 게이지 단위는 대기압을 더한다.
pub fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    let pa = value * pascal_per(unit);
    if unit.is_gauge() {
        pa + ATM_PA
    } else {
        pa
    }
}

/// 절대압 Pa 값을 원하는 단위로 변환한다. 게이지 단위는 대기압을 뺀 뒤 환산한다.
pub fn from_pascal(value_pa: f64, unit: PressureUnit) -> f64 {
    let pa = if unit.is_gauge() {
        value_pa - ATM_PA
    } else {
        value_pa
    };
    pa / pascal_per(unit)
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let pa = to_pascal(value, from);
    from_pascal(pa, to)
}
