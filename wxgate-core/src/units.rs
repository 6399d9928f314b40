//! Unit Conversion Between Imperial and Metric
//!
//! ## Overview
//!
//! Weather gateways report in one unit system, consumers want another. Each
//! physical quantity belongs to a [`UnitClass`], and each class has exactly one
//! conversion rule:
//!
//! ```text
//! Class               Imperial   Metric    Rule
//! ------------------  ---------  --------  -------------------------------
//! Temperature         °F         °C        (F - 32) / 1.8   (offset-aware)
//! Pressure            inHg       hPa       × 33.8639
//! Speed               mph        km/h      × 1.60934
//! Distance            mi         km        × 1.609
//! Precipitation       in         mm        × 25.4
//! PrecipitationRate   in/h       mm/h      × 25.4
//! Illuminance         W/m²       lx        × 126.7  (empirical)
//! Humidity            %          %         none
//! ```
//!
//! Temperature goes through [`Temperature`](crate::meteo::Temperature) so that a
//! converted air temperature and a derived dew point are rounded the same way.
//!
//! ## Unit Labels
//!
//! [`UnitClass::label`] is the only place unit strings are spelled out. The
//! calculators and the entity descriptor resolver both ask it, so a published
//! value and its advertised unit cannot disagree.
//!
//! ## Rounding
//!
//! [`convert`] rounds only when given a precision. Calculators pass the configured
//! precision and round to one decimal themselves when none is set.
//!
//! ```rust
//! use wxgate_core::{convert, UnitClass, UnitSystem};
//!
//! let hpa = convert(28.122, UnitClass::Pressure, UnitSystem::Imperial, UnitSystem::Metric, Some(3))?;
//! assert_eq!(hpa, 952.321);
//! # Ok::<(), wxgate_core::CalculationError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::config::UnitSystem;
use crate::constants::conversion::{
    DISTANCE_KM_PER_MI, ILLUMINANCE_LUX_PER_WM2, PRECIPITATION_MM_PER_IN, PRESSURE_HPA_PER_INHG,
    SPEED_KMH_PER_MPH,
};
use crate::errors::{CalculationError, CalculationResult};
use crate::meteo::Temperature;
use crate::traits::Validatable;

/// Category of physical quantity sharing one conversion rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitClass {
    /// Air, soil and water temperature
    Temperature,
    /// Barometric pressure, vapor pressure deficit
    Pressure,
    /// Wind speed and gusts
    Speed,
    /// Lightning distance
    Distance,
    /// Rain accumulation
    Precipitation,
    /// Rain rate
    PrecipitationRate,
    /// Solar radiation / illuminance
    Illuminance,
    /// Relative humidity, dimensionless
    Humidity,
}

impl UnitClass {
    /// All classes, for table-driven tests
    pub const ALL: [UnitClass; 8] = [
        UnitClass::Temperature,
        UnitClass::Pressure,
        UnitClass::Speed,
        UnitClass::Distance,
        UnitClass::Precipitation,
        UnitClass::PrecipitationRate,
        UnitClass::Illuminance,
        UnitClass::Humidity,
    ];

    /// Unit label for this class in `system`
    pub fn label(self, system: UnitSystem) -> &'static str {
        match (self, system) {
            (Self::Temperature, UnitSystem::Imperial) => "°F",
            (Self::Temperature, UnitSystem::Metric) => "°C",
            (Self::Pressure, UnitSystem::Imperial) => "inHg",
            (Self::Pressure, UnitSystem::Metric) => "hPa",
            (Self::Speed, UnitSystem::Imperial) => "mph",
            (Self::Speed, UnitSystem::Metric) => "km/h",
            (Self::Distance, UnitSystem::Imperial) => "mi",
            (Self::Distance, UnitSystem::Metric) => "km",
            (Self::Precipitation, UnitSystem::Imperial) => "in",
            (Self::Precipitation, UnitSystem::Metric) => "mm",
            (Self::PrecipitationRate, UnitSystem::Imperial) => "in/h",
            (Self::PrecipitationRate, UnitSystem::Metric) => "mm/h",
            (Self::Illuminance, UnitSystem::Imperial) => "W/m²",
            (Self::Illuminance, UnitSystem::Metric) => "lx",
            (Self::Humidity, _) => "%",
        }
    }

    /// Metric units per imperial unit, `None` for classes that are not a flat factor
    fn metric_factor(self) -> Option<f64> {
        match self {
            Self::Pressure => Some(PRESSURE_HPA_PER_INHG),
            Self::Speed => Some(SPEED_KMH_PER_MPH),
            Self::Distance => Some(DISTANCE_KM_PER_MI),
            Self::Precipitation | Self::PrecipitationRate => Some(PRECIPITATION_MM_PER_IN),
            Self::Illuminance => Some(ILLUMINANCE_LUX_PER_WM2),
            Self::Humidity => Some(1.0),
            Self::Temperature => None,
        }
    }
}

/// Convert `value` of `class` from one unit system to another.
///
/// Rounds to `precision` decimal places when given; unrounded otherwise.
/// Non-finite input is reported as [`CalculationError::NotANumber`].
pub fn convert(
    value: f64,
    class: UnitClass,
    from: UnitSystem,
    to: UnitSystem,
    precision: Option<u32>,
) -> CalculationResult<f64> {
    if !value.is_valid() {
        return Err(CalculationError::NotANumber);
    }

    let converted = if from == to {
        value
    } else {
        match class.metric_factor() {
            Some(factor) => match to {
                UnitSystem::Metric => value * factor,
                UnitSystem::Imperial => value / factor,
            },
            None => Temperature::new(value, from).value_in(to),
        }
    };

    Ok(match precision {
        Some(places) => round_to(converted, places),
        None => converted,
    })
}

/// Round half away from zero to `places` decimals
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    let rounded = (value * scale).round() / scale;
    // Avoid publishing "-0.0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
