//! 단위 정의 및 변환 모듈 모음.
//!
//! 각 분류의 내부 기준 단위는 일관된 SI 단위이다. 수식은 기준값끼리만
//! 계산되므로 기준 단위 조합이 물리적으로 맞아떨어져야 한다.

pub mod area;
pub mod conductivity;
pub mod dimensionless;
pub mod energy;
pub mod force;
pub mod heat_transfer;
pub mod length;
pub mod mass;
pub mod power;
pub mod pressure;
pub mod specific_enthalpy;
pub mod temperature;
pub mod time;
pub mod velocity;
pub mod viscosity;
pub mod volume;

pub use area::{convert_area, AreaUnit};
pub use conductivity::{convert_conductivity, ConductivityUnit};
pub use dimensionless::DimensionlessUnit;
pub use energy::{convert_energy, EnergyUnit};
pub use force::{convert_force, ForceUnit};
pub use heat_transfer::{convert_heat_transfer, HeatTransferUnit};
pub use length::{convert_length, LengthUnit};
pub use mass::{convert_mass, MassUnit};
pub use power::{convert_power, PowerUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use specific_enthalpy::{convert_specific_enthalpy, SpecificEnthalpyUnit};
pub use temperature::{
    convert_temperature, convert_temperature_diff, TemperatureDiffUnit, TemperatureUnit,
};
pub use time::{convert_time, TimeUnit};
pub use velocity::{convert_velocity, VelocityUnit};
pub use viscosity::{convert_viscosity, ViscosityUnit};
pub use volume::{convert_volume, VolumeUnit};
