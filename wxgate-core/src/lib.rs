//! Calculation engine for wxgate
//!
//! Turns the flat key/value payload a personal weather-station gateway uploads
//! into unit-converted, rounded and enriched readings.
//!
//! Key properties:
//! - Pure per payload: same `(payload, config)` always gives the same readings
//! - A bad field degrades to a null reading for that field only
//! - Derived readings (dew point, feels like, ...) are synthesized after raw ones
//!
//! ```rust
//! use wxgate_core::{calculate, CalculationConfig, DataValue, RawPayload, UnitSystem};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CalculationConfig::builder()
//!     .output_unit_system(UnitSystem::Metric)
//!     .build()?;
//!
//! let payload = RawPayload::from_pairs([("tempf", "74.7"), ("humidity", "31")]);
//! let readings = calculate(&payload, &config);
//!
//! assert_eq!(readings.get("dewpoint").unwrap().value, DataValue::Number(5.6));
//!
//! // {"tempf":23.7,"humidity":31.0,"dewpoint":5.6,...}
//! println!("{}", readings.to_json()?);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod battery;
pub mod calculator;
pub mod config;
pub mod constants;
pub mod descriptor;
pub mod errors;
pub mod keys;
pub mod meteo;
pub mod reading;
pub mod traits;
pub mod units;

// Public API
pub use battery::resolve_battery;
pub use calculator::{calculate, CalculatedReadings, Calculator, CalculatorInputs};
pub use config::{
    parse_battery_overrides, BatteryStrategy, CalculationConfig, CalculationConfigBuilder,
    CalculationSettings, UnitSystem,
};
pub use descriptor::{describe, Component, DescriptorCache, EntityDescriptor};
pub use errors::{CalculationError, CalculationResult, ConfigError};
pub use reading::{CalculatedDataPoint, DataValue, RawPayload, RawValue};
pub use units::{convert, UnitClass};

/// Crate version, published as the discovery device's software version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
