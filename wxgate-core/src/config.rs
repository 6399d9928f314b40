//! Calculation Configuration
//!
//! ## Overview
//!
//! A [`CalculationConfig`] is built once per run and then only read. Every
//! calculator invoked for a payload borrows the same instance, so two payloads
//! calculated with the same config always agree.
//!
//! ## Building
//!
//! In code, use the builder with typed values:
//!
//! ```rust
//! use wxgate_core::{BatteryStrategy, CalculationConfig, UnitSystem};
//!
//! let config = CalculationConfig::builder()
//!     .input_unit_system(UnitSystem::Imperial)
//!     .output_unit_system(UnitSystem::Metric)
//!     .default_battery_strategy(BatteryStrategy::Boolean)
//!     .battery_override("wh68batt", BatteryStrategy::Numeric)
//!     .precision(2)
//!     .build()?;
//!
//! assert_eq!(config.battery_strategy("wh68batt"), BatteryStrategy::Numeric);
//! assert_eq!(config.battery_strategy("wh65batt"), BatteryStrategy::Boolean);
//! # Ok::<(), wxgate_core::ConfigError>(())
//! ```
//!
//! From a config file or the environment, deserialize [`CalculationSettings`]
//! (plain strings) and convert it. Unknown names fail here, before any payload
//! is touched:
//!
//! ```rust
//! use wxgate_core::{CalculationConfig, CalculationSettings};
//!
//! let settings: CalculationSettings = serde_json::from_str(
//!     r#"{"output_unit_system": "metric", "battery_overrides": {"soilbatt1": "numeric"}}"#,
//! ).unwrap();
//! let config = CalculationConfig::try_from(settings)?;
//! # Ok::<(), wxgate_core::ConfigError>(())
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::thresholds::{DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES};
use crate::errors::ConfigError;

/// Unit system for input or output values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// °F, inHg, mph, in, mi
    #[default]
    Imperial,
    /// °C, hPa, km/h, mm, km
    Metric,
}

impl FromStr for UnitSystem {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "imperial" => Ok(Self::Imperial),
            "metric" => Ok(Self::Metric),
            _ => Err(ConfigError::InvalidUnitSystem(s.to_string())),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imperial => f.write_str("imperial"),
            Self::Metric => f.write_str("metric"),
        }
    }
}

/// How a raw battery value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatteryStrategy {
    /// 0 is OFF (battery fine), anything else ON (battery low)
    #[default]
    Boolean,
    /// Raw value is a voltage
    Numeric,
    /// Raw value is a charge percentage
    Percentage,
}

impl FromStr for BatteryStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "boolean" => Ok(Self::Boolean),
            "numeric" => Ok(Self::Numeric),
            "percentage" => Ok(Self::Percentage),
            _ => Err(ConfigError::InvalidBatteryStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for BatteryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => f.write_str("boolean"),
            Self::Numeric => f.write_str("numeric"),
            Self::Percentage => f.write_str("percentage"),
        }
    }
}

/// Immutable settings shared by every calculator in a run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculationConfig {
    input_unit_system: UnitSystem,
    output_unit_system: UnitSystem,
    default_battery_strategy: BatteryStrategy,
    battery_overrides: HashMap<String, BatteryStrategy>,
    precision: Option<u32>,
    disable_calculated_data: bool,
}

impl CalculationConfig {
    /// Start building a configuration. Defaults: imperial in and out, boolean
    /// batteries, no precision override, derived data enabled.
    pub fn builder() -> CalculationConfigBuilder {
        CalculationConfigBuilder::default()
    }

    /// Unit system the gateway reports in
    pub fn input_unit_system(&self) -> UnitSystem {
        self.input_unit_system
    }

    /// Unit system readings are published in
    pub fn output_unit_system(&self) -> UnitSystem {
        self.output_unit_system
    }

    /// Strategy for batteries without an override
    pub fn default_battery_strategy(&self) -> BatteryStrategy {
        self.default_battery_strategy
    }

    /// Per-key strategy overrides
    pub fn battery_overrides(&self) -> &HashMap<String, BatteryStrategy> {
        &self.battery_overrides
    }

    /// Configured precision, if any
    pub fn precision(&self) -> Option<u32> {
        self.precision
    }

    /// Whether synthesized readings are suppressed
    pub fn disable_calculated_data(&self) -> bool {
        self.disable_calculated_data
    }

    /// Effective strategy for a battery key: override first, then the default
    pub fn battery_strategy(&self, key: &str) -> BatteryStrategy {
        self.battery_overrides
            .get(key)
            .copied()
            .unwrap_or(self.default_battery_strategy)
    }

    /// Decimal places for a calculator whose own default is `default_places`.
    /// A configured precision wins.
    pub fn decimal_places(&self, default_places: u32) -> u32 {
        self.precision.unwrap_or(default_places)
    }

    /// Round `value` for output, using the configured precision or one decimal
    pub fn round(&self, value: f64) -> f64 {
        crate::units::round_to(value, self.decimal_places(DEFAULT_DECIMAL_PLACES))
    }
}

/// Builder for [`CalculationConfig`]
#[derive(Debug, Clone, Default)]
pub struct CalculationConfigBuilder {
    config: CalculationConfig,
}

impl CalculationConfigBuilder {
    /// Unit system the gateway reports in
    pub fn input_unit_system(mut self, system: UnitSystem) -> Self {
        self.config.input_unit_system = system;
        self
    }

    /// Unit system readings are published in
    pub fn output_unit_system(mut self, system: UnitSystem) -> Self {
        self.config.output_unit_system = system;
        self
    }

    /// Strategy for batteries without an override
    pub fn default_battery_strategy(mut self, strategy: BatteryStrategy) -> Self {
        self.config.default_battery_strategy = strategy;
        self
    }

    /// Override the strategy for one key
    pub fn battery_override(mut self, key: impl Into<String>, strategy: BatteryStrategy) -> Self {
        self.config.battery_overrides.insert(key.into(), strategy);
        self
    }

    /// Add several overrides, e.g. from [`parse_battery_overrides`]
    pub fn battery_overrides(mut self, overrides: HashMap<String, BatteryStrategy>) -> Self {
        self.config.battery_overrides.extend(overrides);
        self
    }

    /// Decimal places for every converted and derived value
    pub fn precision(mut self, places: u32) -> Self {
        self.config.precision = Some(places);
        self
    }

    /// Suppress synthesized readings (dew point, feels like, ...)
    pub fn disable_calculated_data(mut self, disable: bool) -> Self {
        self.config.disable_calculated_data = disable;
        self
    }

    /// Validate and freeze the configuration
    pub fn build(self) -> Result<CalculationConfig, ConfigError> {
        if let Some(requested) = self.config.precision {
            if requested > MAX_DECIMAL_PLACES {
                log_warn!("Rejecting precision {} (max {})", requested, MAX_DECIMAL_PLACES);
                return Err(ConfigError::InvalidPrecision {
                    requested,
                    max: MAX_DECIMAL_PLACES,
                });
            }
        }
        Ok(self.config)
    }
}

/// Loosely typed settings as they come from a config file or the environment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationSettings {
    /// `imperial` or `metric`
    pub input_unit_system: Option<String>,
    /// `imperial` or `metric`
    pub output_unit_system: Option<String>,
    /// `boolean`, `numeric` or `percentage`
    pub default_battery_strategy: Option<String>,
    /// Key to strategy name
    pub battery_overrides: HashMap<String, String>,
    /// Decimal places
    pub precision: Option<u32>,
    /// Suppress synthesized readings
    pub disable_calculated_data: bool,
}

impl TryFrom<CalculationSettings> for CalculationConfig {
    type Error = ConfigError;

    fn try_from(settings: CalculationSettings) -> Result<Self, Self::Error> {
        let mut builder = CalculationConfig::builder()
            .disable_calculated_data(settings.disable_calculated_data);

        if let Some(system) = settings.input_unit_system.as_deref() {
            builder = builder.input_unit_system(system.parse()?);
        }
        if let Some(system) = settings.output_unit_system.as_deref() {
            builder = builder.output_unit_system(system.parse()?);
        }
        if let Some(strategy) = settings.default_battery_strategy.as_deref() {
            builder = builder.default_battery_strategy(strategy.parse()?);
        }
        for (key, strategy) in settings.battery_overrides {
            let strategy = strategy.parse()?;
            builder = builder.battery_override(key, strategy);
        }
        if let Some(places) = settings.precision {
            builder = builder.precision(places);
        }

        builder.build()
    }
}

/// Parse overrides in the `key=strategy;key=strategy` form used on command lines
/// and in environment variables. Empty segments are ignored.
pub fn parse_battery_overrides(input: &str) -> Result<HashMap<String, BatteryStrategy>, ConfigError> {
    let mut overrides = HashMap::new();

    for entry in input.split(';').map(str::trim).filter(|e| !e.is_empty()) {
        let (key, strategy) = entry
            .split_once('=')
            .ok_or_else(|| ConfigError::InvalidBatteryOverride(entry.to_string()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::InvalidBatteryOverride(entry.to_string()));
        }
        overrides.insert(key.to_string(), strategy.parse()?);
    }

    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_system_parsing() {
        assert_eq!("metric".parse::<UnitSystem>(), Ok(UnitSystem::Metric));
        assert_eq!(" Imperial ".parse::<UnitSystem>(), Ok(UnitSystem::Imperial));
        assert_eq!(
            "kelvin".parse::<UnitSystem>(),
            Err(ConfigError::InvalidUnitSystem("kelvin".to_string()))
        );
    }

    #[test]
    fn battery_strategy_parsing() {
        assert_eq!("NUMERIC".parse::<BatteryStrategy>(), Ok(BatteryStrategy::Numeric));
        assert!("volts".parse::<BatteryStrategy>().is_err());
    }

    #[test]
    fn override_beats_default() {
        let config = CalculationConfig::builder()
            .default_battery_strategy(BatteryStrategy::Percentage)
            .battery_override("wh65batt", BatteryStrategy::Boolean)
            .build()
            .unwrap();

        assert_eq!(config.battery_strategy("wh65batt"), BatteryStrategy::Boolean);
        assert_eq!(config.battery_strategy("soilbatt1"), BatteryStrategy::Percentage);
    }

    #[test]
    fn precision_is_bounded() {
        let result = CalculationConfig::builder().precision(9).build();
        assert!(matches!(result, Err(ConfigError::InvalidPrecision { requested: 9, .. })));

        let config = CalculationConfig::builder().precision(3).build().unwrap();
        assert_eq!(config.decimal_places(1), 3);
        assert_eq!(CalculationConfig::default().decimal_places(2), 2);
    }

    #[test]
    fn settings_conversion() {
        let settings: CalculationSettings = serde_json::from_str(
            r#"{
                "input_unit_system": "imperial",
                "output_unit_system": "METRIC",
                "default_battery_strategy": "percentage",
                "battery_overrides": {"wh68batt": "numeric"},
                "precision": 2,
                "disable_calculated_data": true
            }"#,
        )
        .unwrap();

        let config = CalculationConfig::try_from(settings).unwrap();
        assert_eq!(config.output_unit_system(), UnitSystem::Metric);
        assert_eq!(config.battery_strategy("wh68batt"), BatteryStrategy::Numeric);
        assert_eq!(config.battery_strategy("wh65batt"), BatteryStrategy::Percentage);
        assert_eq!(config.precision(), Some(2));
        assert!(config.disable_calculated_data());
    }

    #[test]
    fn settings_with_bad_strategy_fail_up_front() {
        let mut settings = CalculationSettings::default();
        settings
            .battery_overrides
            .insert("wh65batt".to_string(), "sometimes".to_string());

        assert_eq!(
            CalculationConfig::try_from(settings),
            Err(ConfigError::InvalidBatteryStrategy("sometimes".to_string()))
        );
    }

    #[test]
    fn override_string_parsing() {
        let overrides = parse_battery_overrides("wh65batt=boolean; soilbatt1=numeric;").unwrap();
        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides["soilbatt1"], BatteryStrategy::Numeric);

        assert!(matches!(
            parse_battery_overrides("wh65batt"),
            Err(ConfigError::InvalidBatteryOverride(_))
        ));
        assert!(matches!(
            parse_battery_overrides("=numeric"),
            Err(ConfigError::InvalidBatteryOverride(_))
        ));

        let config = CalculationConfig::builder()
            .battery_overrides(overrides)
            .build()
            .unwrap();
        assert_eq!(config.battery_strategy("soilbatt1"), BatteryStrategy::Numeric);
    }
}
