//! Meteorological Derivations
//!
//! ## Overview
//!
//! A gateway measures a handful of things: air temperature, relative humidity,
//! wind speed, solar radiation, UV. Everything else people want on a dashboard
//! is derived from those:
//!
//! ```text
//! temperature + humidity ──┬─> dew point ──┬─> frost point
//!                          │               ├─> humidex ─> humidex perception
//!                          │               └─> thermal perception
//!                          ├─> heat index ─┐
//!                          ├─> simmer index ─> simmer zone
//!                          ├─> absolute humidity
//!                          └─> relative strain index ─> strain perception
//! temperature + wind ──────> wind chill ───┴─> feels like
//! wind ────────────────────> Beaufort scale
//! solar radiation ─────────> lux ─> perceived brightness
//! UV index ────────────────> safe exposure time (per skin type)
//! ```
//!
//! ## Units Inside the Formulas
//!
//! Each published formula is written for one unit system (the NWS ones in °F and
//! mph, the psychrometric ones in °C). Rather than carrying two versions of every
//! formula, inputs are wrapped in [`Temperature`] and [`WindSpeed`], which know
//! the system they were measured in and hand out whichever unit a formula wants.
//! Results come back as the same types and are presented in the output system by
//! the calculators.
//!
//! ```rust
//! use wxgate_core::meteo::{dew_point, Temperature};
//! use wxgate_core::UnitSystem;
//!
//! let dp = dew_point(Temperature::new(74.7, UnitSystem::Imperial), 31.0);
//! assert_eq!(wxgate_core::units::round_to(dp.fahrenheit(), 1), 42.1);
//! assert_eq!(wxgate_core::units::round_to(dp.celsius(), 1), 5.6);
//! ```
//!
//! ## Domains
//!
//! Some formulas are undefined for part of the weather: wind chill on a warm day,
//! the simmer index in the cold, the strain index outside 26-35 °C. Those return
//! `None` or [`CalculationError::OutOfDomain`](crate::CalculationError); it is
//! never an error from the caller's point of view, just a null reading.

mod comfort;
mod solar;
mod temperature;
mod wind;

pub use comfort::{
    absolute_humidity, humidex, relative_strain_index, simmer_index, HumidexPerception,
    RelativeStrainPerception, SimmerZone, ThermalPerception,
};
pub use solar::{perceived_brightness, safe_exposure_time, solar_radiation_to_lux, SkinType};
pub use temperature::{dew_point, feels_like, frost_point, heat_index, wind_chill};
pub use wind::{beaufort_scale, BeaufortScale};

use crate::config::UnitSystem;
use crate::constants::conversion::{
    FAHRENHEIT_OFFSET, FAHRENHEIT_PER_CELSIUS, KELVIN_OFFSET, SPEED_KMH_PER_MPH,
};

/// A temperature that remembers the unit system it was measured in.
///
/// The original value is kept as-is so threshold checks in the formula's own unit
/// (80 °F for the heat index, say) are not disturbed by conversion round-off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature {
    value: f64,
    system: UnitSystem,
}

impl Temperature {
    /// Wrap a value measured in `system` (°F for imperial, °C for metric)
    pub fn new(value: f64, system: UnitSystem) -> Self {
        Self { value, system }
    }

    /// From degrees Celsius
    pub fn from_celsius(celsius: f64) -> Self {
        Self::new(celsius, UnitSystem::Metric)
    }

    /// From degrees Fahrenheit
    pub fn from_fahrenheit(fahrenheit: f64) -> Self {
        Self::new(fahrenheit, UnitSystem::Imperial)
    }

    /// Degrees Celsius
    pub fn celsius(&self) -> f64 {
        match self.system {
            UnitSystem::Metric => self.value,
            UnitSystem::Imperial => (self.value - FAHRENHEIT_OFFSET) / FAHRENHEIT_PER_CELSIUS,
        }
    }

    /// Degrees Fahrenheit
    pub fn fahrenheit(&self) -> f64 {
        match self.system {
            UnitSystem::Imperial => self.value,
            UnitSystem::Metric => self.value * FAHRENHEIT_PER_CELSIUS + FAHRENHEIT_OFFSET,
        }
    }

    /// Kelvin
    pub fn kelvin(&self) -> f64 {
        self.celsius() + KELVIN_OFFSET
    }

    /// Value in `system`'s unit (°F or °C), unrounded
    pub fn value_in(&self, system: UnitSystem) -> f64 {
        match system {
            UnitSystem::Imperial => self.fahrenheit(),
            UnitSystem::Metric => self.celsius(),
        }
    }
}

/// A wind speed that remembers the unit system it was measured in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindSpeed {
    value: f64,
    system: UnitSystem,
}

impl WindSpeed {
    /// Wrap a value measured in `system` (mph for imperial, km/h for metric)
    pub fn new(value: f64, system: UnitSystem) -> Self {
        Self { value, system }
    }

    /// From miles per hour
    pub fn from_mph(mph: f64) -> Self {
        Self::new(mph, UnitSystem::Imperial)
    }

    /// From kilometres per hour
    pub fn from_kmh(kmh: f64) -> Self {
        Self::new(kmh, UnitSystem::Metric)
    }

    /// Miles per hour
    pub fn mph(&self) -> f64 {
        match self.system {
            UnitSystem::Imperial => self.value,
            UnitSystem::Metric => self.value / SPEED_KMH_PER_MPH,
        }
    }

    /// Kilometres per hour
    pub fn kmh(&self) -> f64 {
        match self.system {
            UnitSystem::Metric => self.value,
            UnitSystem::Imperial => self.value * SPEED_KMH_PER_MPH,
        }
    }

    /// Value in `system`'s unit (mph or km/h), unrounded
    pub fn value_in(&self, system: UnitSystem) -> f64 {
        match system {
            UnitSystem::Imperial => self.mph(),
            UnitSystem::Metric => self.kmh(),
        }
    }
}
