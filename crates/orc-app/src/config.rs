//! Cycle configuration file: schema, loading and saving.
//!
//! Every design parameter is either a plain number in SI units or a string
//! carrying its own unit:
//!
//! ```yaml
//! version: 1
//! name: ORC CO2 100 kW
//! fluid: CO2
//! backend: coolprop
//! source_temperature: 34 C
//! sink_temperature: 283.15
//! target_power: 100 kW
//! turbine_efficiency: 80 %
//! ```
//!
//! Fields left out take the reference design values.

use crate::error::{AppError, AppResult};
use orc_core::units::{dk, k, w};
use orc_cycle::DesignParameters;
use orc_fluids::{Quantity, WorkingFluid, parse_quantity};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Current config schema version.
pub const CONFIG_VERSION: u32 = 1;

/// Run name used when a config does not set one.
pub const DEFAULT_RUN_NAME: &str = "ORC CO2 100 kW";

/// A design parameter as written in the config: SI number or unit string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum InputValue {
    Number(f64),
    Text(String),
}

impl InputValue {
    /// Canonical SI value of this input.
    pub fn to_si(&self, quantity: Quantity) -> Result<f64, orc_fluids::UnitError> {
        match self {
            InputValue::Number(v) => Ok(*v),
            InputValue::Text(text) => parse_quantity(text, quantity),
        }
    }
}

impl From<f64> for InputValue {
    fn from(v: f64) -> Self {
        InputValue::Number(v)
    }
}

impl From<&str> for InputValue {
    fn from(s: &str) -> Self {
        InputValue::Text(s.to_string())
    }
}

/// Fluid property backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Backend {
    /// Real-fluid properties from CoolProp
    #[default]
    #[serde(rename = "coolprop")]
    CoolProp,
    /// Constant-property analytic surrogate
    #[serde(rename = "surrogate")]
    Surrogate,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::CoolProp => write!(f, "coolprop"),
            Backend::Surrogate => write!(f, "surrogate"),
        }
    }
}

impl std::str::FromStr for Backend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "coolprop" => Ok(Backend::CoolProp),
            "surrogate" => Ok(Backend::Surrogate),
            other => Err(AppError::InvalidInput(format!(
                "unknown backend '{}' (expected coolprop or surrogate)",
                other
            ))),
        }
    }
}

/// On-disk cycle configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CycleConfig {
    pub version: u32,
    pub name: String,
    pub fluid: WorkingFluid,
    pub backend: Backend,
    pub source_temperature: InputValue,
    pub sink_temperature: InputValue,
    pub superheat: InputValue,
    pub subcool: InputValue,
    pub evaporator_pinch: InputValue,
    pub condenser_pinch: InputValue,
    pub turbine_efficiency: InputValue,
    pub pump_efficiency: InputValue,
    pub generator_efficiency: InputValue,
    pub target_power: InputValue,
}

impl Default for CycleConfig {
    fn default() -> Self {
        let p = DesignParameters::default();
        Self {
            version: CONFIG_VERSION,
            name: DEFAULT_RUN_NAME.to_string(),
            fluid: p.fluid,
            backend: Backend::default(),
            source_temperature: p.source_temperature.value.into(),
            sink_temperature: p.sink_temperature.value.into(),
            superheat: p.superheat.value.into(),
            subcool: p.subcool.value.into(),
            evaporator_pinch: p.evaporator_pinch.value.into(),
            condenser_pinch: p.condenser_pinch.value.into(),
            turbine_efficiency: p.turbine_efficiency.into(),
            pump_efficiency: p.pump_efficiency.into(),
            generator_efficiency: p.generator_efficiency.into(),
            target_power: p.target_power.value.into(),
        }
    }
}

fn field(value: &InputValue, field: &'static str, quantity: Quantity) -> AppResult<f64> {
    value
        .to_si(quantity)
        .map_err(|source| AppError::Unit { field, source })
}

impl CycleConfig {
    /// Parse every field into SI design parameters and validate them.
    pub fn to_parameters(&self) -> AppResult<DesignParameters> {
        use Quantity::{Dimensionless, Power, Temperature, TemperatureDifference};

        let params = DesignParameters {
            fluid: self.fluid,
            source_temperature: k(field(
                &self.source_temperature,
                "source_temperature",
                Temperature,
            )?),
            sink_temperature: k(field(
                &self.sink_temperature,
                "sink_temperature",
                Temperature,
            )?),
            superheat: dk(field(&self.superheat, "superheat", TemperatureDifference)?),
            subcool: dk(field(&self.subcool, "subcool", TemperatureDifference)?),
            evaporator_pinch: dk(field(
                &self.evaporator_pinch,
                "evaporator_pinch",
                TemperatureDifference,
            )?),
            condenser_pinch: dk(field(
                &self.condenser_pinch,
                "condenser_pinch",
                TemperatureDifference,
            )?),
            turbine_efficiency: field(
                &self.turbine_efficiency,
                "turbine_efficiency",
                Dimensionless,
            )?,
            pump_efficiency: field(&self.pump_efficiency, "pump_efficiency", Dimensionless)?,
            generator_efficiency: field(
                &self.generator_efficiency,
                "generator_efficiency",
                Dimensionless,
            )?,
            target_power: w(field(&self.target_power, "target_power", Power)?),
        };

        params.validate()?;
        Ok(params)
    }

    /// Parse a config from YAML text and validate it.
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        let config: CycleConfig = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config YAML: {}", e)))?;

        if config.version != CONFIG_VERSION {
            return Err(AppError::UnsupportedVersion {
                found: config.version,
                expected: CONFIG_VERSION,
            });
        }

        config.to_parameters()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))
    }
}

/// Reference design point as a config.
pub fn default_config() -> CycleConfig {
    CycleConfig::default()
}

/// Load and validate a config from a YAML file.
pub fn load_config(path: &Path) -> AppResult<CycleConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    CycleConfig::from_yaml_str(&content)
}

/// Save a config to a YAML file.
pub fn save_config(path: &Path, config: &CycleConfig) -> AppResult<()> {
    let content = config.to_yaml_string()?;

    std::fs::write(path, content).map_err(|e| AppError::ConfigFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_reference_parameters() {
        let params = default_config().to_parameters().unwrap();
        assert_eq!(params, DesignParameters::default());
    }

    #[test]
    fn unit_strings_are_converted() {
        let config = CycleConfig {
            source_temperature: "34 C".into(),
            target_power: "0.1 MW".into(),
            turbine_efficiency: "80 %".into(),
            ..Default::default()
        };
        let params = config.to_parameters().unwrap();
        assert!((params.source_temperature.value - 307.15).abs() < 1e-9);
        assert!((params.target_power.value - 100e3).abs() < 1e-6);
        assert!((params.turbine_efficiency - 0.8).abs() < 1e-12);
    }

    #[test]
    fn bad_unit_names_the_field() {
        let config = CycleConfig {
            subcool: "3 parsecs".into(),
            ..Default::default()
        };
        let err = config.to_parameters().unwrap_err();
        assert!(matches!(err, AppError::Unit { field: "subcool", .. }));
    }

    #[test]
    fn invalid_parameter_surfaces_cycle_error() {
        let config = CycleConfig {
            pump_efficiency: 1.5_f64.into(),
            ..Default::default()
        };
        assert!(matches!(
            config.to_parameters(),
            Err(AppError::Cycle(_))
        ));
    }

    #[test]
    fn backend_parsing() {
        assert_eq!("CoolProp".parse::<Backend>().unwrap(), Backend::CoolProp);
        assert_eq!("surrogate".parse::<Backend>().unwrap(), Backend::Surrogate);
        assert!("refprop".parse::<Backend>().is_err());
    }
}
