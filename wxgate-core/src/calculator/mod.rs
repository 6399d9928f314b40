//! Calculator Dispatch
//!
//! ## Overview
//!
//! Every payload key is routed to exactly one [`Calculator`], found in the
//! ordered [`DISPATCH`] table (exact names, then key families, then
//! pass-through). The calculator turns the raw value into a
//! [`CalculatedDataPoint`] in the configured output units.
//!
//! After the raw keys, derived readings (dew point, feels like, Beaufort force,
//! ...) are synthesized from the keys they depend on, unless
//! `disable_calculated_data` is set.
//!
//! ```text
//! RawPayload ──> for each key ──> DISPATCH.lookup ──> Calculator::compute ─┐
//!            └─> derived groups ──> Calculator::Meteo(..)::compute ────────┴─> CalculatedReadings
//! ```
//!
//! ## Failure Model
//!
//! `compute` never fails. A value that cannot be parsed, a missing companion
//! reading, a formula outside its domain or a non-finite result gives a null
//! point carrying the unit the value would have had; the reason is logged at
//! debug level. A temperature at or below absolute zero (gateways send `-9999`
//! for a missing probe) is outside every formula's domain.
//!
//! ```rust
//! use wxgate_core::{calculate, CalculationConfig, RawPayload};
//!
//! let payload = RawPayload::from_pairs([("tempf", "74.2"), ("windspeedmph", "14.2")]);
//! let readings = calculate(&payload, &CalculationConfig::default());
//!
//! // Too warm for wind chill
//! assert!(readings.get("windchill").unwrap().value.is_null());
//! ```

mod derived;
mod dispatch;
mod readings;

pub use dispatch::{calculator_for, DISPATCH};
pub use readings::{CalculatedReadings, ReadingValues};

use crate::battery::{battery_unit, resolve_battery, STATE_OFF, STATE_ON};
use crate::config::{CalculationConfig, UnitSystem};
use crate::constants::thresholds::STRAIN_INDEX_DECIMAL_PLACES;
use crate::errors::{CalculationError, CalculationResult};
use crate::meteo::{
    self, HumidexPerception, RelativeStrainPerception, SimmerZone, SkinType, Temperature,
    ThermalPerception, WindSpeed,
};
use crate::reading::{CalculatedDataPoint, DataValue, RawPayload, RawValue};
use crate::traits::Labelled;
use crate::units::{convert, round_to, UnitClass};

/// Largest magnitude an `f64` holds as an exact integer (2^53)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Airborne pollutant reported by particulate and CO₂ sensors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pollutant {
    /// Fine particulate matter, µg/m³
    Pm25,
    /// Coarse particulate matter, µg/m³
    Pm10,
    /// Carbon dioxide, ppm
    Co2,
}

impl Pollutant {
    /// Unit the gateway reports this pollutant in
    pub fn unit(self) -> &'static str {
        match self {
            Self::Pm25 | Self::Pm10 => "µg/m³",
            Self::Co2 => "ppm",
        }
    }

    fn decimal_places(self) -> u32 {
        match self {
            Self::Pm25 | Self::Pm10 => 1,
            Self::Co2 => 0,
        }
    }
}

/// Derived meteorological reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeteoKind {
    /// Dew point from temperature and humidity
    DewPoint,
    /// Apparent temperature from temperature, humidity and wind
    FeelsLike,
    /// NWS heat index
    HeatIndex,
    /// NWS wind chill
    WindChill,
    /// Frost point
    FrostPoint,
    /// Canadian humidex
    Humidex,
    /// Humidex comfort band
    HumidexPerception,
    /// Simmer index
    SimmerIndex,
    /// Simmer index comfort band
    SimmerZone,
    /// Comfort band from dew point
    ThermalPerception,
    /// Water vapor content of the air
    AbsoluteHumidity,
    /// Relative strain index
    RelativeStrainIndex,
    /// Strain index comfort band
    RelativeStrainPerception,
    /// Beaufort force from wind speed
    BeaufortScale,
    /// Illuminance estimate from solar radiation
    SolarRadiationLux,
    /// Perceived brightness from solar radiation
    SolarRadiationPerceived,
    /// Minutes to sunburn at the current UV index
    SafeExposureTime(SkinType),
}

impl MeteoKind {
    /// Unit of the reading in `system`
    pub fn unit(self, system: UnitSystem) -> Option<&'static str> {
        match self {
            Self::DewPoint
            | Self::FeelsLike
            | Self::HeatIndex
            | Self::WindChill
            | Self::FrostPoint
            | Self::SimmerIndex => Some(UnitClass::Temperature.label(system)),
            Self::AbsoluteHumidity => Some("g/m³"),
            Self::SolarRadiationLux => Some("lx"),
            Self::SolarRadiationPerceived => Some("%"),
            Self::SafeExposureTime(_) => Some("min"),
            Self::Humidex
            | Self::HumidexPerception
            | Self::SimmerZone
            | Self::ThermalPerception
            | Self::RelativeStrainIndex
            | Self::RelativeStrainPerception
            | Self::BeaufortScale => None,
        }
    }
}

/// How a raw or derived key is turned into a reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Calculator {
    /// Unknown key: numbers stay numbers, everything else is passed as text
    PassThrough,
    /// Timestamp, passed through unmodified
    Timestamp,
    /// Number with a fixed unit, rounded to `places` unless a precision is configured
    Simple {
        /// Unit label
        unit: Option<&'static str>,
        /// Default decimal places
        places: u32,
    },
    /// Number converted from the input to the output unit system
    UnitConverted(UnitClass),
    /// Battery level, interpreted through the battery strategy
    Battery,
    /// Zero/non-zero state published as `OFF`/`ON`
    BinaryState,
    /// Lightning distance. Gateways report it in km whatever the input system.
    Distance,
    /// Particulate or gas concentration
    Pollutant(Pollutant),
    /// Free memory in bytes
    Memory,
    /// Derived reading computed from companion keys
    Meteo(MeteoKind),
}

/// Raw values a calculator reads.
///
/// Raw calculators only look at `primary`. Derived readings also get the
/// humidity and wind companions of their group.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculatorInputs<'a> {
    /// The reading itself, or the primary input of a derived reading
    pub primary: Option<&'a RawValue>,
    /// Relative humidity companion
    pub humidity: Option<&'a RawValue>,
    /// Wind speed companion
    pub wind: Option<&'a RawValue>,
}

impl<'a> CalculatorInputs<'a> {
    /// Inputs for a raw key
    pub fn single(value: &'a RawValue) -> Self {
        Self {
            primary: Some(value),
            ..Self::default()
        }
    }

    fn primary(&self) -> CalculationResult<f64> {
        required(self.primary, "primary")
    }

    fn humidity(&self) -> CalculationResult<f64> {
        required(self.humidity, "humidity")
    }

    fn temperature(&self, system: UnitSystem) -> CalculationResult<Temperature> {
        let temp = Temperature::new(self.primary()?, system);
        if temp.kelvin() <= 0.0 {
            return Err(CalculationError::OutOfDomain {
                reason: "temperature at or below absolute zero",
            });
        }
        Ok(temp)
    }

    fn wind(&self, system: UnitSystem) -> CalculationResult<WindSpeed> {
        required(self.wind, "wind").map(|value| WindSpeed::new(value, system))
    }
}

fn required(value: Option<&RawValue>, key: &'static str) -> CalculationResult<f64> {
    value
        .ok_or(CalculationError::MissingInput { key })?
        .as_f64()
        .ok_or(CalculationError::NotANumber)
}

impl Calculator {
    /// Unit the reading for `key` carries under `config`
    pub fn unit(&self, key: &str, config: &CalculationConfig) -> Option<&'static str> {
        let output = config.output_unit_system();
        match self {
            Self::PassThrough | Self::Timestamp | Self::BinaryState => None,
            Self::Simple { unit, .. } => *unit,
            Self::UnitConverted(class) => Some(class.label(output)),
            Self::Battery => battery_unit(config.battery_strategy(key)),
            Self::Distance => Some(UnitClass::Distance.label(output)),
            Self::Pollutant(pollutant) => Some(pollutant.unit()),
            Self::Memory => Some("B"),
            Self::Meteo(kind) => kind.unit(output),
        }
    }

    /// Compute the reading for `key`. Never fails: unusable inputs give a null
    /// point with the reading's unit.
    pub fn compute(
        &self,
        key: &str,
        inputs: &CalculatorInputs<'_>,
        config: &CalculationConfig,
    ) -> CalculatedDataPoint {
        match self.try_compute(key, inputs, config) {
            Ok(point) if point.value.as_f64().map_or(true, f64::is_finite) => point,
            Ok(_) => {
                log_debug!("{} not calculated: result is not finite", key);
                CalculatedDataPoint::null(self.unit(key, config))
            }
            Err(error) => {
                log_debug!("{} not calculated: {}", key, error);
                CalculatedDataPoint::null(self.unit(key, config))
            }
        }
    }

    fn try_compute(
        &self,
        key: &str,
        inputs: &CalculatorInputs<'_>,
        config: &CalculationConfig,
    ) -> CalculationResult<CalculatedDataPoint> {
        let unit = self.unit(key, config);

        match self {
            Self::PassThrough => {
                let raw = inputs.primary.ok_or(CalculationError::MissingInput { key: "primary" })?;
                let value = match raw.as_f64() {
                    Some(number) => DataValue::Number(number),
                    None => raw.to_data_value(),
                };
                Ok(CalculatedDataPoint {
                    value,
                    ..CalculatedDataPoint::null(None)
                })
            }
            Self::Timestamp => {
                let raw = inputs.primary.ok_or(CalculationError::MissingInput { key: "primary" })?;
                Ok(CalculatedDataPoint {
                    value: raw.to_data_value(),
                    ..CalculatedDataPoint::null(None)
                })
            }
            Self::Simple { places, .. } => Ok(rounded_point(
                inputs.primary()?,
                config.decimal_places(*places),
                unit,
            )),
            Self::UnitConverted(class) => {
                let value = convert(
                    inputs.primary()?,
                    *class,
                    config.input_unit_system(),
                    config.output_unit_system(),
                    None,
                )?;
                Ok(CalculatedDataPoint::number(config.round(value), unit))
            }
            Self::Battery => {
                let raw = inputs.primary.ok_or(CalculationError::MissingInput { key: "primary" })?;
                Ok(resolve_battery(key, raw, config))
            }
            Self::BinaryState => {
                let state = if inputs.primary()? == 0.0 { STATE_OFF } else { STATE_ON };
                Ok(CalculatedDataPoint::text(state))
            }
            Self::Distance => {
                let value = convert(
                    inputs.primary()?,
                    UnitClass::Distance,
                    UnitSystem::Metric,
                    config.output_unit_system(),
                    None,
                )?;
                Ok(CalculatedDataPoint::number(config.round(value), unit))
            }
            Self::Pollutant(pollutant) => Ok(rounded_point(
                inputs.primary()?,
                config.decimal_places(pollutant.decimal_places()),
                unit,
            )),
            Self::Memory => Ok(rounded_point(inputs.primary()?, 0, unit)),
            Self::Meteo(kind) => compute_meteo(*kind, inputs, config),
        }
    }
}

/// Rounded numeric point; at zero places the value is published as an integer
fn rounded_point(value: f64, places: u32, unit: Option<&'static str>) -> CalculatedDataPoint {
    let value = round_to(value, places);
    if places == 0 && value.abs() < MAX_EXACT_INTEGER {
        CalculatedDataPoint::integer(value as i64, unit)
    } else {
        CalculatedDataPoint::number(value, unit)
    }
}

fn temperature_point(temp: Temperature, config: &CalculationConfig) -> CalculatedDataPoint {
    let output = config.output_unit_system();
    CalculatedDataPoint::number(
        config.round(temp.value_in(output)),
        Some(UnitClass::Temperature.label(output)),
    )
}

fn label_point(band: impl Labelled) -> CalculatedDataPoint {
    CalculatedDataPoint::text(band.label())
}

fn compute_meteo(
    kind: MeteoKind,
    inputs: &CalculatorInputs<'_>,
    config: &CalculationConfig,
) -> CalculationResult<CalculatedDataPoint> {
    let input = config.input_unit_system();
    let unit = kind.unit(config.output_unit_system());

    let point = match kind {
        MeteoKind::DewPoint => {
            temperature_point(meteo::dew_point(inputs.temperature(input)?, inputs.humidity()?), config)
        }
        MeteoKind::FeelsLike => temperature_point(
            meteo::feels_like(inputs.temperature(input)?, inputs.humidity()?, inputs.wind(input)?),
            config,
        ),
        MeteoKind::HeatIndex => {
            temperature_point(meteo::heat_index(inputs.temperature(input)?, inputs.humidity()?), config)
        }
        MeteoKind::WindChill => {
            let chill = meteo::wind_chill(inputs.temperature(input)?, inputs.wind(input)?).ok_or(
                CalculationError::OutOfDomain {
                    reason: "wind chill needs cold air and wind",
                },
            )?;
            temperature_point(chill, config)
        }
        MeteoKind::FrostPoint => {
            let temp = inputs.temperature(input)?;
            let dew_point = meteo::dew_point(temp, inputs.humidity()?);
            temperature_point(meteo::frost_point(temp, dew_point), config)
        }
        MeteoKind::Humidex | MeteoKind::HumidexPerception => {
            let temp = inputs.temperature(input)?;
            let humidex = meteo::humidex(temp, meteo::dew_point(temp, inputs.humidity()?));
            if kind == MeteoKind::Humidex {
                CalculatedDataPoint::number(config.round(humidex), unit)
            } else {
                label_point(HumidexPerception::from_humidex(humidex))
            }
        }
        MeteoKind::SimmerIndex => {
            temperature_point(meteo::simmer_index(inputs.temperature(input)?, inputs.humidity()?)?, config)
        }
        MeteoKind::SimmerZone => {
            let index = meteo::simmer_index(inputs.temperature(input)?, inputs.humidity()?)?;
            label_point(SimmerZone::from_index(index))
        }
        MeteoKind::ThermalPerception => label_point(ThermalPerception::from_conditions(
            inputs.temperature(input)?,
            inputs.humidity()?,
        )),
        MeteoKind::AbsoluteHumidity => {
            let value = meteo::absolute_humidity(inputs.temperature(input)?, inputs.humidity()?);
            CalculatedDataPoint::number(config.round(value), unit)
        }
        MeteoKind::RelativeStrainIndex => {
            let index = meteo::relative_strain_index(inputs.temperature(input)?, inputs.humidity()?)?;
            CalculatedDataPoint::number(
                round_to(index, config.decimal_places(STRAIN_INDEX_DECIMAL_PLACES)),
                unit,
            )
        }
        MeteoKind::RelativeStrainPerception => {
            let index = meteo::relative_strain_index(inputs.temperature(input)?, inputs.humidity()?)?;
            label_point(RelativeStrainPerception::from_index(index))
        }
        MeteoKind::BeaufortScale => {
            let wind = WindSpeed::new(inputs.primary()?, input);
            let scale = meteo::beaufort_scale(wind, input);
            CalculatedDataPoint::integer(i64::from(scale.force()), unit)
                .with_attribute("description", scale.label())
        }
        MeteoKind::SolarRadiationLux => {
            let lux = meteo::solar_radiation_to_lux(inputs.primary()?);
            CalculatedDataPoint::number(config.round(lux), unit)
        }
        MeteoKind::SolarRadiationPerceived => {
            let lux = meteo::solar_radiation_to_lux(inputs.primary()?);
            CalculatedDataPoint::number(config.round(meteo::perceived_brightness(lux)), unit)
        }
        MeteoKind::SafeExposureTime(skin_type) => {
            let minutes = meteo::safe_exposure_time(inputs.primary()?, skin_type).ok_or(
                CalculationError::OutOfDomain {
                    reason: "no UV exposure",
                },
            )?;
            rounded_point(minutes, 0, unit)
        }
    };

    Ok(point)
}

/// Calculate every reading for one payload.
///
/// Raw keys come first, in payload order, followed by derived readings unless
/// they are disabled. A derived key already present in the payload keeps the
/// raw value.
pub fn calculate(payload: &RawPayload, config: &CalculationConfig) -> CalculatedReadings {
    let mut readings = CalculatedReadings::with_capacity(payload.len());

    for (key, value) in payload.iter() {
        let calculator = calculator_for(key);
        readings.push(key, calculator.compute(key, &CalculatorInputs::single(value), config));
    }

    if config.disable_calculated_data() {
        return readings;
    }

    for derived in derived::derived_readings(payload) {
        if readings.contains_key(&derived.key) {
            continue;
        }
        let point = Calculator::Meteo(derived.kind).compute(&derived.key, &derived.inputs, config);
        readings.push(derived.key, point);
    }

    readings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BatteryStrategy;

    fn imperial() -> CalculationConfig {
        CalculationConfig::default()
    }

    fn metric_output() -> CalculationConfig {
        CalculationConfig::builder()
            .output_unit_system(UnitSystem::Metric)
            .build()
            .unwrap()
    }

    fn metric_input() -> CalculationConfig {
        CalculationConfig::builder()
            .input_unit_system(UnitSystem::Metric)
            .output_unit_system(UnitSystem::Metric)
            .build()
            .unwrap()
    }

    fn compute(calculator: Calculator, key: &str, raw: &str, config: &CalculationConfig) -> CalculatedDataPoint {
        calculator.compute(key, &CalculatorInputs::single(&RawValue::from(raw)), config)
    }

    #[test]
    fn pass_through_keeps_text_and_numbers() {
        let config = imperial();
        assert_eq!(
            compute(Calculator::PassThrough, "stationtype", "GW2000A_V3.1.2", &config).value,
            DataValue::Text("GW2000A_V3.1.2".into())
        );
        assert_eq!(
            compute(Calculator::PassThrough, "something", "12", &config).value,
            DataValue::Number(12.0)
        );
    }

    #[test]
    fn timestamp_is_untouched() {
        let point = compute(Calculator::Timestamp, "dateutc", "2024-05-01 12:00:00", &metric_output());
        assert_eq!(point.value, DataValue::Text("2024-05-01 12:00:00".into()));
        assert_eq!(point.unit, None);
    }

    #[test]
    fn unit_converted_temperature() {
        let point = compute(Calculator::UnitConverted(UnitClass::Temperature), "tempf", "74.7", &metric_output());
        assert_eq!(point.value, DataValue::Number(23.7));
        assert_eq!(point.unit, Some("°C"));

        let point = compute(Calculator::UnitConverted(UnitClass::Temperature), "tempf", "74.7", &imperial());
        assert_eq!(point.value, DataValue::Number(74.7));
        assert_eq!(point.unit, Some("°F"));
    }

    #[test]
    fn configured_precision_applies() {
        let config = CalculationConfig::builder()
            .output_unit_system(UnitSystem::Metric)
            .precision(3)
            .build()
            .unwrap();
        let point = compute(Calculator::UnitConverted(UnitClass::Pressure), "baromrelin", "28.122", &config);
        assert_eq!(point.value, DataValue::Number(952.321));
        assert_eq!(point.unit, Some("hPa"));
    }

    #[test]
    fn malformed_value_is_null_with_unit() {
        let point = compute(Calculator::UnitConverted(UnitClass::Speed), "windspeedmph", "--", &metric_output());
        assert!(point.value.is_null());
        assert_eq!(point.unit, Some("km/h"));
    }

    #[test]
    fn binary_state() {
        let config = imperial();
        assert_eq!(compute(Calculator::BinaryState, "leak_ch1", "0", &config).value, DataValue::Text("OFF".into()));
        assert_eq!(compute(Calculator::BinaryState, "srain_piezo", "1", &config).value, DataValue::Text("ON".into()));
    }

    #[test]
    fn lightning_distance_is_reported_in_km() {
        let point = compute(Calculator::Distance, "lightning", "16.09", &imperial());
        assert_eq!(point.value, DataValue::Number(10.0));
        assert_eq!(point.unit, Some("mi"));

        let point = compute(Calculator::Distance, "lightning", "", &imperial());
        assert!(point.value.is_null());
    }

    #[test]
    fn battery_goes_through_strategy() {
        let config = CalculationConfig::builder()
            .default_battery_strategy(BatteryStrategy::Numeric)
            .build()
            .unwrap();
        let point = compute(Calculator::Battery, "soilbatt1", "1.4", &config);
        assert_eq!(point.value, DataValue::Number(1.4));
        assert_eq!(point.unit, Some("V"));
    }

    #[test]
    fn pollutants_keep_their_units() {
        let config = imperial();
        let point = compute(Calculator::Pollutant(Pollutant::Co2), "co2", "412.4", &config);
        assert_eq!(point.value, DataValue::Integer(412));
        assert_eq!(point.unit, Some("ppm"));

        let point = compute(Calculator::Pollutant(Pollutant::Pm25), "pm25_ch1", "7.25", &config);
        assert_eq!(point.value, DataValue::Number(7.3));
        assert_eq!(point.unit, Some("µg/m³"));
    }

    #[test]
    fn whole_number_readings_are_integers() {
        let config = imperial();
        let uv = Calculator::Simple { unit: Some("UV index"), places: 0 };
        assert_eq!(compute(uv, "uv", "5", &config).value, DataValue::Integer(5));
        assert_eq!(compute(Calculator::Memory, "heap", "132364", &config).value, DataValue::Integer(132364));

        // A configured precision keeps the value fractional
        let precise = CalculationConfig::builder().precision(2).build().unwrap();
        assert_eq!(compute(uv, "uv", "5", &precise).value, DataValue::Number(5.0));
    }

    #[test]
    fn below_absolute_zero_is_null() {
        for kind in [
            MeteoKind::DewPoint,
            MeteoKind::FrostPoint,
            MeteoKind::AbsoluteHumidity,
            MeteoKind::Humidex,
            MeteoKind::HumidexPerception,
            MeteoKind::HeatIndex,
        ] {
            let point = meteo(kind, "-9999", Some("50"), Some("8.8"), &imperial());
            assert!(point.value.is_null(), "{:?} gave {:?}", kind, point.value);
            assert_eq!(point.unit, kind.unit(UnitSystem::Imperial));
        }
        assert!(meteo(MeteoKind::DewPoint, "-273.15", Some("50"), None, &metric_input()).value.is_null());
    }

    #[test]
    fn overflowing_result_is_null() {
        let point = meteo(MeteoKind::HeatIndex, "1e200", Some("50"), None, &imperial());
        assert!(point.value.is_null());
        assert_eq!(point.unit, Some("°F"));
    }

    fn meteo(kind: MeteoKind, temp: &str, humidity: Option<&str>, wind: Option<&str>, config: &CalculationConfig) -> CalculatedDataPoint {
        let temp = RawValue::from(temp);
        let humidity = humidity.map(RawValue::from);
        let wind = wind.map(RawValue::from);
        let inputs = CalculatorInputs {
            primary: Some(&temp),
            humidity: humidity.as_ref(),
            wind: wind.as_ref(),
        };
        Calculator::Meteo(kind).compute("derived", &inputs, config)
    }

    #[test]
    fn dew_point_in_both_systems() {
        assert_eq!(meteo(MeteoKind::DewPoint, "74.7", Some("31"), None, &imperial()).value, DataValue::Number(42.1));
        assert_eq!(meteo(MeteoKind::DewPoint, "74.7", Some("31"), None, &metric_output()).value, DataValue::Number(5.6));
    }

    #[test]
    fn wind_chill_domain() {
        let chill = meteo(MeteoKind::WindChill, "10.2", None, Some("8.8"), &imperial());
        assert_eq!(chill.value, DataValue::Number(-2.4));

        let chill = meteo(MeteoKind::WindChill, "74.2", None, Some("14.2"), &imperial());
        assert!(chill.value.is_null());
        assert_eq!(chill.unit, Some("°F"));
    }

    #[test]
    fn missing_companion_is_null() {
        assert!(meteo(MeteoKind::DewPoint, "74.7", None, None, &imperial()).value.is_null());
        assert!(meteo(MeteoKind::FeelsLike, "74.7", Some("31"), None, &imperial()).value.is_null());
    }

    #[test]
    fn perception_labels() {
        let point = meteo(MeteoKind::SimmerZone, "85", Some("60"), None, &imperial());
        assert!(point.value.as_str().is_some());
        assert_eq!(point.unit, None);

        assert!(meteo(MeteoKind::SimmerZone, "50", Some("60"), None, &imperial()).value.is_null());
    }

    #[test]
    fn beaufort_carries_description() {
        let wind = RawValue::from("14.2");
        let inputs = CalculatorInputs::single(&wind);
        let point = Calculator::Meteo(MeteoKind::BeaufortScale).compute("beaufortscale", &inputs, &imperial());
        assert_eq!(point.value, DataValue::Integer(4));
        assert_eq!(point.attributes["description"], "Moderate breeze");
    }

    #[test]
    fn safe_exposure_whole_minutes() {
        let uv = RawValue::from("5");
        let inputs = CalculatorInputs::single(&uv);
        let point = Calculator::Meteo(MeteoKind::SafeExposureTime(SkinType::I)).compute("s", &inputs, &imperial());
        assert_eq!(point.value, DataValue::Integer(27));
        assert_eq!(point.unit, Some("min"));

        let uv = RawValue::from("0");
        let inputs = CalculatorInputs::single(&uv);
        assert!(Calculator::Meteo(MeteoKind::SafeExposureTime(SkinType::I)).compute("s", &inputs, &imperial()).value.is_null());
    }
}
