use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// 분류가 서로 다른 단위 사이의 변환
    #[error("호환되지 않는 단위: {from} → {to}")]
    Incompatible { from: String, to: String },
    /// 알 수 없는 물리량 분류 이름
    #[error("알 수 없는 물리량 분류: {0}")]
    UnknownCategory(String),
}

/// 분류가 확정된 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Dimensionless(DimensionlessUnit),
    Length(LengthUnit),
    Area(AreaUnit),
    Volume(VolumeUnit),
    Time(TimeUnit),
    Velocity(VelocityUnit),
    Mass(MassUnit),
    Force(ForceUnit),
    Pressure(PressureUnit),
    Energy(EnergyUnit),
    Power(PowerUnit),
    Temperature(TemperatureUnit),
    TemperatureDifference(TemperatureDiffUnit),
    Viscosity(ViscosityUnit),
    HeatTransferCoeff(HeatTransferUnit),
    ThermalConductivity(ConductivityUnit),
    SpecificEnthalpy(SpecificEnthalpyUnit),
}

impl Unit {
    pub fn kind(self) -> QuantityKind {
        match self {
            Unit::Dimensionless(_) => QuantityKind::Dimensionless,
            Unit::Length(_) => QuantityKind::Length,
            Unit::Area(_) => QuantityKind::Area,
            Unit::Volume(_) => QuantityKind::Volume,
            Unit::Time(_) => QuantityKind::Time,
            Unit::Velocity(_) => QuantityKind::Velocity,
            Unit::Mass(_) => QuantityKind::Mass,
            Unit::Force(_) => QuantityKind::Force,
            Unit::Pressure(_) => QuantityKind::Pressure,
            Unit::Energy(_) => QuantityKind::Energy,
            Unit::Power(_) => QuantityKind::Power,
            Unit::Temperature(_) => QuantityKind::Temperature,
            Unit::TemperatureDifference(_) => QuantityKind::TemperatureDifference,
            Unit::Viscosity(_) => QuantityKind::Viscosity,
            Unit::HeatTransferCoeff(_) => QuantityKind::HeatTransferCoeff,
            Unit::ThermalConductivity(_) => QuantityKind::ThermalConductivity,
            Unit::SpecificEnthalpy(_) => QuantityKind::SpecificEnthalpy,
        }
    }

    /// 표준 표기 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Dimensionless(u) => u.symbol(),
            Unit::Length(u) => u.symbol(),
            Unit::Area(u) => u.symbol(),
            Unit::Volume(u) => u.symbol(),
            Unit::Time(u) => u.symbol(),
            Unit::Velocity(u) => u.symbol(),
            Unit::Mass(u) => u.symbol(),
            Unit::Force(u) => u.symbol(),
            Unit::Pressure(u) => u.symbol(),
            Unit::Energy(u) => u.symbol(),
            Unit::Power(u) => u.symbol(),
            Unit::Temperature(u) => u.symbol(),
            Unit::TemperatureDifference(u) => u.symbol(),
            Unit::Viscosity(u) => u.symbol(),
            Unit::HeatTransferCoeff(u) => u.symbol(),
            Unit::ThermalConductivity(u) => u.symbol(),
            Unit::SpecificEnthalpy(u) => u.symbol(),
        }
    }

    /// 값을 분류의 기준 단위로 환산한다.
    pub fn to_base(self, value: f64) -> f64 {
        match self {
            Unit::Dimensionless(u) => u.to_base(value),
            Unit::Length(u) => u.to_base(value),
            Unit::Area(u) => u.to_base(value),
            Unit::Volume(u) => u.to_base(value),
            Unit::Time(u) => u.to_base(value),
            Unit::Velocity(u) => u.to_base(value),
            Unit::Mass(u) => u.to_base(value),
            Unit::Force(u) => u.to_base(value),
            Unit::Pressure(u) => u.to_base(value),
            Unit::Energy(u) => u.to_base(value),
            Unit::Power(u) => u.to_base(value),
            Unit::Temperature(u) => u.to_base(value),
            Unit::TemperatureDifference(u) => u.to_base(value),
            Unit::Viscosity(u) => u.to_base(value),
            Unit::HeatTransferCoeff(u) => u.to_base(value),
            Unit::ThermalConductivity(u) => u.to_base(value),
            Unit::SpecificEnthalpy(u) => u.to_base(value),
        }
    }

    /// 기준 단위 값을 이 단위로 환산한다.
    pub fn from_base(self, value: f64) -> f64 {
        match self {
            Unit::Dimensionless(u) => u.from_base(value),
            Unit::Length(u) => u.from_base(value),
            Unit::Area(u) => u.from_base(value),
            Unit::Volume(u) => u.from_base(value),
            Unit::Time(u) => u.from_base(value),
            Unit::Velocity(u) => u.from_base(value),
            Unit::Mass(u) => u.from_base(value),
            Unit::Force(u) => u.from_base(value),
            Unit::Pressure(u) => u.from_base(value),
            Unit::Energy(u) => u.from_base(value),
            Unit::Power(u) => u.from_base(value),
            Unit::Temperature(u) => u.from_base(value),
            Unit::TemperatureDifference(u) => u.from_base(value),
            Unit::Viscosity(u) => u.from_base(value),
            Unit::HeatTransferCoeff(u) => u.from_base(value),
            Unit::ThermalConductivity(u) => u.from_base(value),
            Unit::SpecificEnthalpy(u) => u.from_base(value),
        }
    }

    /// 분류에 속한 모든 단위. 첫 항목이 기준 단위이다.
    pub fn units_of(kind: QuantityKind) -> Vec<Unit> {
        match kind {
            QuantityKind::Dimensionless => DimensionlessUnit::ALL
                .into_iter()
                .map(Unit::Dimensionless)
                .collect(),
            QuantityKind::Length => LengthUnit::ALL.into_iter().map(Unit::Length).collect(),
            QuantityKind::Area => AreaUnit::ALL.into_iter().map(Unit::Area).collect(),
            QuantityKind::Volume => VolumeUnit::ALL.into_iter().map(Unit::Volume).collect(),
            QuantityKind::Time => TimeUnit::ALL.into_iter().map(Unit::Time).collect(),
            QuantityKind::Velocity => VelocityUnit::ALL.into_iter().map(Unit::Velocity).collect(),
            QuantityKind::Mass => MassUnit::ALL.into_iter().map(Unit::Mass).collect(),
            QuantityKind::Force => ForceUnit::ALL.into_iter().map(Unit::Force).collect(),
            QuantityKind::Pressure => PressureUnit::ALL.into_iter().map(Unit::Pressure).collect(),
            QuantityKind::Energy => EnergyUnit::ALL.into_iter().map(Unit::Energy).collect(),
            QuantityKind::Power => PowerUnit::ALL.into_iter().map(Unit::Power).collect(),
            QuantityKind::Temperature => TemperatureUnit::ALL
                .into_iter()
                .map(Unit::Temperature)
                .collect(),
            QuantityKind::TemperatureDifference => TemperatureDiffUnit::ALL
                .into_iter()
                .map(Unit::TemperatureDifference)
                .collect(),
            QuantityKind::Viscosity => ViscosityUnit::ALL
                .into_iter()
                .map(Unit::Viscosity)
                .collect(),
            QuantityKind::HeatTransferCoeff => HeatTransferUnit::ALL
                .into_iter()
                .map(Unit::HeatTransferCoeff)
                .collect(),
            QuantityKind::ThermalConductivity => ConductivityUnit::ALL
                .into_iter()
                .map(Unit::ThermalConductivity)
                .collect(),
            QuantityKind::SpecificEnthalpy => SpecificEnthalpyUnit::ALL
                .into_iter()
                .map(Unit::SpecificEnthalpy)
                .collect(),
        }
    }

    /// 분류의 기준 단위.
    pub fn base_of(kind: QuantityKind) -> Unit {
        // 모든 분류는 최소 하나의 단위를 가진다.
        Unit::units_of(kind)[0]
    }
}

/// 분류를 알고 있을 때 단위 문자열을 해석한다.
pub fn parse_unit(kind: QuantityKind, s: &str) -> Result<Unit, ConversionError> {
    let unit = match kind {
        QuantityKind::Dimensionless => parse_dimensionless_unit(s).map(Unit::Dimensionless),
        QuantityKind::Length => parse_length_unit(s).map(Unit::Length),
        QuantityKind::Area => parse_area_unit(s).map(Unit::Area),
        QuantityKind::Volume => parse_volume_unit(s).map(Unit::Volume),
        QuantityKind::Time => parse_time_unit(s).map(Unit::Time),
        QuantityKind::Velocity => parse_velocity_unit(s).map(Unit::Velocity),
        QuantityKind::Mass => parse_mass_unit(s).map(Unit::Mass),
        QuantityKind::Force => parse_force_unit(s).map(Unit::Force),
        QuantityKind::Pressure => parse_pressure_unit(s).map(Unit::Pressure),
        QuantityKind::Energy => parse_energy_unit(s).map(Unit::Energy),
        QuantityKind::Power => parse_power_unit(s).map(Unit::Power),
        QuantityKind::Temperature => parse_temperature_unit(s).map(Unit::Temperature),
        QuantityKind::TemperatureDifference => {
            parse_temperature_diff_unit(s).map(Unit::TemperatureDifference)
        }
        QuantityKind::Viscosity => parse_viscosity_unit(s).map(Unit::Viscosity),
        QuantityKind::HeatTransferCoeff => parse_heat_transfer_unit(s).map(Unit::HeatTransferCoeff),
        QuantityKind::ThermalConductivity => {
            parse_conductivity_unit(s).map(Unit::ThermalConductivity)
        }
        QuantityKind::SpecificEnthalpy => {
            parse_specific_enthalpy_unit(s).map(Unit::SpecificEnthalpy)
        }
    };
    unit.ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
}

/// 분류 없이 단위 문자열만으로 단위를 찾는다. `QuantityKind::ALL` 순서로 탐색한다.
pub fn lookup_unit(s: &str) -> Result<Unit, ConversionError> {
    QuantityKind::ALL
        .into_iter()
        .find_map(|kind| parse_unit(kind, s).ok())
        .ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `C`, `bar`, `m`, `kPa`, `Btu`, `ft/s` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    let from = parse_unit(kind, from_unit_str)?;
    let to = parse_unit(kind, to_unit_str)?;
    let out = match (from, to) {
        (Unit::Length(a), Unit::Length(b)) => convert_length(value, a, b),
        (Unit::Area(a), Unit::Area(b)) => convert_area(value, a, b),
        (Unit::Volume(a), Unit::Volume(b)) => convert_volume(value, a, b),
        (Unit::Time(a), Unit::Time(b)) => convert_time(value, a, b),
        (Unit::Velocity(a), Unit::Velocity(b)) => convert_velocity(value, a, b),
        (Unit::Mass(a), Unit::Mass(b)) => convert_mass(value, a, b),
        (Unit::Force(a), Unit::Force(b)) => convert_force(value, a, b),
        (Unit::Pressure(a), Unit::Pressure(b)) => convert_pressure(value, a, b),
        (Unit::Energy(a), Unit::Energy(b)) => convert_energy(value, a, b),
        (Unit::Power(a), Unit::Power(b)) => convert_power(value, a, b),
        (Unit::Temperature(a), Unit::Temperature(b)) => convert_temperature(value, a, b),
        (Unit::TemperatureDifference(a), Unit::TemperatureDifference(b)) => {
            convert_temperature_diff(value, a, b)
        }
        (Unit::Viscosity(a), Unit::Viscosity(b)) => convert_viscosity(value, a, b),
        (Unit::HeatTransferCoeff(a), Unit::HeatTransferCoeff(b)) => {
            convert_heat_transfer(value, a, b)
        }
        (Unit::ThermalConductivity(a), Unit::ThermalConductivity(b)) => {
            convert_conductivity(value, a, b)
        }
        (Unit::SpecificEnthalpy(a), Unit::SpecificEnthalpy(b)) => {
            convert_specific_enthalpy(value, a, b)
        }
        (a, b) => b.from_base(a.to_base(value)),
    };
    Ok(out)
}

/// 단위 변환 게이트웨이. 계산 엔진은 이 트레이트를 통해서만 단위를 다룬다.
///
/// 기본 구현은 [`UnitCatalog`]이며, 원격 카탈로그 등 다른 단위 소스를 쓰려면
/// 이 트레이트를 구현하면 된다.
pub trait UnitGateway {
    /// 단위가 속한 분류.
    fn kind_of(&self, unit: &str) -> Result<QuantityKind, ConversionError>;

    /// 단위가 속한 분류의 기준 단위 기호.
    fn base_unit(&self, unit: &str) -> Result<String, ConversionError>;

    /// 값을 분류의 기준 단위로 환산한다.
    fn convert_to_base(&self, value: f64, unit: &str) -> Result<f64, ConversionError>;

    /// 기준 단위 값을 지정한 단위로 환산한다.
    fn convert_to_face(&self, base_value: f64, unit: &str) -> Result<f64, ConversionError>;

    /// 같은 분류의 두 단위 사이에서 값을 환산한다.
    fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
        if self.kind_of(from)? != self.kind_of(to)? {
            return Err(ConversionError::Incompatible {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        let base = self.convert_to_base(value, from)?;
        self.convert_to_face(base, to)
    }

    /// `unit`과 서로 바꿔 쓸 수 있는 모든 단위.
    fn compatible_units(&self, unit: &str) -> Result<Vec<String>, ConversionError>;
}

/// 내장 단위표를 쓰는 게이트웨이. 상태가 없으므로 자유롭게 복사해 쓴다.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitCatalog;

impl UnitCatalog {
    pub fn new() -> Self {
        Self
    }

    /// 분류 이름(`length`, `velocity` 등)에 속한 단위 기호 목록.
    pub fn units_for_category(&self, category: &str) -> Result<Vec<String>, ConversionError> {
        let kind = QuantityKind::from_name(category)
            .ok_or_else(|| ConversionError::UnknownCategory(category.to_string()))?;
        Ok(Unit::units_of(kind)
            .into_iter()
            .map(|u| u.symbol().to_string())
            .collect())
    }
}

impl UnitGateway for UnitCatalog {
    fn kind_of(&self, unit: &str) -> Result<QuantityKind, ConversionError> {
        lookup_unit(unit).map(Unit::kind)
    }

    fn base_unit(&self, unit: &str) -> Result<String, ConversionError> {
        let kind = self.kind_of(unit)?;
        Ok(Unit::base_of(kind).symbol().to_string())
    }

    fn convert_to_base(&self, value: f64, unit: &str) -> Result<f64, ConversionError> {
        Ok(lookup_unit(unit)?.to_base(value))
    }

    fn convert_to_face(&self, base_value: f64, unit: &str) -> Result<f64, ConversionError> {
        Ok(lookup_unit(unit)?.from_base(base_value))
    }

    fn compatible_units(&self, unit: &str) -> Result<Vec<String>, ConversionError> {
        let kind = self.kind_of(unit)?;
        Ok(Unit::units_of(kind)
            .into_iter()
            .map(|u| u.symbol().to_string())
            .collect())
    }
}

fn parse_dimensionless_unit(s: &str) -> Option<DimensionlessUnit> {
    match s.trim().to_lowercase().as_str() {
        "" | "ul" | "1" | "-" | "unitless" => Some(DimensionlessUnit::Unitless),
        "%" | "percent" => Some(DimensionlessUnit::Percent),
        _ => None,
    }
}

fn parse_length_unit(s: &str) -> Option<LengthUnit> {
    match s.trim().to_lowercase().as_str() {
        "m" | "meter" | "metre" => Some(LengthUnit::Meter),
        "mm" => Some(LengthUnit::Millimeter),
        "cm" => Some(LengthUnit::Centimeter),
        "km" => Some(LengthUnit::Kilometer),
        "in" | "inch" => Some(LengthUnit::Inch),
        "ft" | "foot" | "feet" => Some(LengthUnit::Foot),
        "yd" | "yard" => Some(LengthUnit::Yard),
        "mi" | "mile" => Some(LengthUnit::Mile),
        _ => None,
    }
}

fn parse_area_unit(s: &str) -> Option<AreaUnit> {
    match s.trim().to_lowercase().as_str() {
        "m2" | "m^2" | "m²" | "sqm" => Some(AreaUnit::SquareMeter),
        "mm2" | "mm^2" | "mm²" => Some(AreaUnit::SquareMillimeter),
        "cm2" | "cm^2" | "cm²" => Some(AreaUnit::SquareCentimeter),
        "km2" | "km^2" | "km²" => Some(AreaUnit::SquareKilometer),
        "ha" | "hectare" => Some(AreaUnit::Hectare),
        "in2" | "in^2" | "sqin" => Some(AreaUnit::SquareInch),
        "ft2" | "ft^2" | "sqft" => Some(AreaUnit::SquareFoot),
        _ => None,
    }
}

fn parse_volume_unit(s: &str) -> Option<VolumeUnit> {
    match s.trim().to_lowercase().as_str() {
        "m3" | "m^3" | "m³" => Some(VolumeUnit::CubicMeter),
        "l" | "liter" | "litre" => Some(VolumeUnit::Liter),
        "ml" | "milliliter" => Some(VolumeUnit::Milliliter),
        "ft3" | "ft^3" | "cuft" => Some(VolumeUnit::CubicFoot),
        "gal" | "gallon" => Some(VolumeUnit::Gallon),
        _ => None,
    }
}

fn parse_time_unit(s: &str) -> Option<TimeUnit> {
    match s.trim().to_lowercase().as_str() {
        "s" | "sec" | "second" => Some(TimeUnit::Second),
        "ms" => Some(TimeUnit::Millisecond),
        "min" | "minute" => Some(TimeUnit::Minute),
        "h" | "hr" | "hour" => Some(TimeUnit::Hour),
        "d" | "day" => Some(TimeUnit::Day),
        _ => None,
    }
}

fn parse_velocity_unit(s: &str) -> Option<VelocityUnit> {
    match s.trim().to_lowercase().as_str() {
        "m/s" | "mps" => Some(VelocityUnit::MeterPerSecond),
        "km/h" | "kph" | "kmh" => Some(VelocityUnit::KilometerPerHour),
        "ft/s" | "fps" => Some(VelocityUnit::FootPerSecond),
        "mph" | "mi/h" => Some(VelocityUnit::MilePerHour),
        "kt" | "knot" => Some(VelocityUnit::Knot),
        _ => None,
    }
}

fn parse_mass_unit(s: &str) -> Option<MassUnit> {
    match s.trim().to_lowercase().as_str() {
        "kg" => Some(MassUnit::Kilogram),
        "g" => Some(MassUnit::Gram),
        "t" | "tonne" => Some(MassUnit::Tonne),
        "lb" | "lbs" | "lbm" => Some(MassUnit::Pound),
        _ => None,
    }
}

/// 소문자 `m` 접두사(밀리)는 메가 단위와 대소문자만 다르므로 소문자화 전에 걸러낸다.
/// 밀리 단위는 지원하지 않는다.
fn is_milli_symbol(s: &str) -> bool {
    let t = s.trim();
    t.starts_with('m') && matches!(t.to_lowercase().as_str(), "mpa" | "mw" | "mj")
}

fn parse_force_unit(s: &str) -> Option<ForceUnit> {
    match s.trim().to_lowercase().as_str() {
        "n" | "newton" => Some(ForceUnit::Newton),
        "kn" | "kilonewton" => Some(ForceUnit::Kilonewton),
        "kgf" => Some(ForceUnit::KilogramForce),
        "lbf" => Some(ForceUnit::PoundForce),
        _ => None,
    }
}

fn parse_pressure_unit(s: &str) -> Option<PressureUnit> {
    if is_milli_symbol(s) {
        return None;
    }
    match s.trim().to_lowercase().as_str() {
        "pa" | "pascal" => Some(PressureUnit::Pascal),
        "kpa" | "kilopascal" => Some(PressureUnit::KiloPascal),
        "mpa" | "megapascal" => Some(PressureUnit::MegaPascal),
        "bar" | "bara" => Some(PressureUnit::Bar),
        "barg" => Some(PressureUnit::BarG),
        "mbar" | "millibar" => Some(PressureUnit::MilliBar),
        "kg/cm2" | "kgf/cm2" => Some(PressureUnit::KgPerCm2),
        "psi" | "psia" => Some(PressureUnit::Psi),
        "psig" => Some(PressureUnit::PsiG),
        "atm" => Some(PressureUnit::Atm),
        "mmhg" | "torr" => Some(PressureUnit::MmHg),
        _ => None,
    }
}

fn parse_energy_unit(s: &str) -> Option<EnergyUnit> {
    if is_milli_symbol(s) {
        return None;
    }
    match s.trim().to_lowercase().as_str() {
        "j" | "joule" => Some(EnergyUnit::Joule),
        "kj" | "kilojoule" => Some(EnergyUnit::Kilojoule),
        "mj" | "megajoule" => Some(EnergyUnit::Megajoule),
        "kwh" => Some(EnergyUnit::KilowattHour),
        "kcal" | "kilocalorie" => Some(EnergyUnit::KiloCalorie),
        "btu" => Some(EnergyUnit::Btu),
        _ => None,
    }
}

fn parse_power_unit(s: &str) -> Option<PowerUnit> {
    if is_milli_symbol(s) {
        return None;
    }
    match s.trim().to_lowercase().as_str() {
        "w" | "watt" => Some(PowerUnit::Watt),
        "kw" | "kilowatt" => Some(PowerUnit::Kilowatt),
        "mw" | "megawatt" => Some(PowerUnit::Megawatt),
        "hp" | "horsepower" => Some(PowerUnit::Horsepower),
        "btu/h" | "btu/hr" => Some(PowerUnit::BtuPerHour),
        _ => None,
    }
}

fn parse_temperature_unit(s: &str) -> Option<TemperatureUnit> {
    match s.trim().to_lowercase().as_str() {
        "k" | "kelvin" => Some(TemperatureUnit::Kelvin),
        "c" | "celsius" | "°c" | "degc" => Some(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" | "degf" => Some(TemperatureUnit::Fahrenheit),
        "r" | "rankine" | "°r" => Some(TemperatureUnit::Rankine),
        _ => None,
    }
}

/// 분류를 모를 때는 절대 온도가 먼저 매칭되므로 Δ 표기로만 온도차를 찾을 수 있다.
fn parse_temperature_diff_unit(s: &str) -> Option<TemperatureDiffUnit> {
    match s.trim().to_lowercase().as_str() {
        "k" | "kelvin" | "δk" | "dk" | "delta_k" => Some(TemperatureDiffUnit::Kelvin),
        "c" | "celsius" | "°c" | "δ°c" | "δc" | "dc" | "delta_c" => {
            Some(TemperatureDiffUnit::Celsius)
        }
        "f" | "fahrenheit" | "°f" | "δ°f" | "δf" | "df" | "delta_f" => {
            Some(TemperatureDiffUnit::Fahrenheit)
        }
        "r" | "rankine" | "°r" | "δ°r" | "δr" | "dr" | "delta_r" => {
            Some(TemperatureDiffUnit::Rankine)
        }
        _ => None,
    }
}

fn parse_viscosity_unit(s: &str) -> Option<ViscosityUnit> {
    match s.trim().to_lowercase().as_str() {
        "pa·s" | "pa.s" | "pas" | "pa*s" => Some(ViscosityUnit::PascalSecond),
        "p" | "poise" => Some(ViscosityUnit::Poise),
        "cp" | "cps" | "centipoise" => Some(ViscosityUnit::Centipoise),
        _ => None,
    }
}

fn parse_heat_transfer_unit(s: &str) -> Option<HeatTransferUnit> {
    match s.trim().to_lowercase().as_str() {
        "w/m2k" | "w/m^2k" | "w/(m2·k)" | "w/m2·k" => Some(HeatTransferUnit::WPerSquareMeterK),
        "btu/h-ft2-f" | "btu/(h·ft2·f)" => Some(HeatTransferUnit::BtuPerHourSquareFootF),
        _ => None,
    }
}

fn parse_conductivity_unit(s: &str) -> Option<ConductivityUnit> {
    match s.trim().to_lowercase().as_str() {
        "w/mk" | "w/(m·k)" | "w/m·k" => Some(ConductivityUnit::WPerMeterK),
        "btu/h-ft-f" | "btu/(h·ft·f)" => Some(ConductivityUnit::BtuPerHourFootF),
        _ => None,
    }
}

fn parse_specific_enthalpy_unit(s: &str) -> Option<SpecificEnthalpyUnit> {
    match s.trim().to_lowercase().as_str() {
        "j/kg" => Some(SpecificEnthalpyUnit::JPerKg),
        "kj/kg" => Some(SpecificEnthalpyUnit::KjPerKg),
        "kcal/kg" => Some(SpecificEnthalpyUnit::KcalPerKg),
        "btu/lb" | "btu/lbm" => Some(SpecificEnthalpyUnit::BtuPerPound),
        _ => None,
    }
}
