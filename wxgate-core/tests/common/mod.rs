//! Shared fixtures for integration tests
//!
//! Payloads are captured gateway uploads with identifiers removed. Values are
//! strings, as a form-encoded post delivers them.

#![allow(dead_code)]

use wxgate_core::{
    BatteryStrategy, CalculatedReadings, CalculationConfig, DataValue, RawPayload, UnitSystem,
};

/// GW2000 upload with an outdoor array, one extra channel, a leak sensor and
/// a lightning detector
pub fn gw2000_payload() -> RawPayload {
    RawPayload::from_pairs([
        ("PASSKEY", "0123456789ABCDEF"),
        ("stationtype", "GW2000A_V2.1.4"),
        ("runtime", "319206"),
        ("heap", "132364"),
        ("dateutc", "2023-10-02 15:24:32"),
        ("tempinf", "74.7"),
        ("humidityin", "31"),
        ("baromrelin", "28.122"),
        ("baromabsin", "28.122"),
        ("tempf", "10.2"),
        ("humidity", "60"),
        ("winddir", "289"),
        ("windspeedmph", "8.8"),
        ("windgustmph", "11.4"),
        ("maxdailygust", "15.0"),
        ("solarradiation", "500.0"),
        ("uv", "5"),
        ("rainratein", "0.000"),
        ("dailyrainin", "0.122"),
        ("temp1f", "68.0"),
        ("humidity1", "45"),
        ("leak_ch1", "0"),
        ("lightning_num", "0"),
        ("lightning", ""),
        ("lightning_time", ""),
        ("wh65batt", "0"),
        ("soilbatt1", "1.4"),
        ("leakbatt1", "4"),
        ("freq", "915M"),
        ("model", "GW2000A"),
        ("interval", "16"),
    ])
}

/// Warm-day payload where the heat-related readings are defined
pub fn summer_payload() -> RawPayload {
    RawPayload::from_pairs([
        ("tempf", "90.0"),
        ("humidity", "60"),
        ("windspeedmph", "2.0"),
        ("uv", "8"),
    ])
}

/// Upload from a gateway configured for metric units. Keys keep their
/// imperial names; the values are °C, km/h, hPa, mm and km.
pub fn metric_payload() -> RawPayload {
    RawPayload::from_pairs([
        ("tempf", "22.1"),
        ("humidity", "15"),
        ("windspeedmph", "20"),
        ("windgustmph", "30"),
        ("baromrelin", "951.6"),
        ("dailyrainin", "12.7"),
        ("lightning", "10"),
        ("uv", "5"),
    ])
}

/// Defaults: imperial in and out, boolean batteries
pub fn imperial() -> CalculationConfig {
    CalculationConfig::default()
}

/// Imperial gateway published in metric units
pub fn metric_output() -> CalculationConfig {
    CalculationConfig::builder()
        .output_unit_system(UnitSystem::Metric)
        .build()
        .unwrap()
}

/// Metric gateway published in metric units
pub fn metric_input() -> CalculationConfig {
    CalculationConfig::builder()
        .input_unit_system(UnitSystem::Metric)
        .output_unit_system(UnitSystem::Metric)
        .build()
        .unwrap()
}

/// Metric gateway published in imperial units
pub fn metric_to_imperial() -> CalculationConfig {
    CalculationConfig::builder()
        .input_unit_system(UnitSystem::Metric)
        .output_unit_system(UnitSystem::Imperial)
        .build()
        .unwrap()
}

/// Metric output with numeric batteries overridden per key
pub fn metric_with_battery_overrides() -> CalculationConfig {
    CalculationConfig::builder()
        .output_unit_system(UnitSystem::Metric)
        .battery_override("soilbatt1", BatteryStrategy::Numeric)
        .battery_override("leakbatt1", BatteryStrategy::Percentage)
        .build()
        .unwrap()
}

/// Assert `key` is a number equal to `expected` and carries `unit`
pub fn assert_number(readings: &CalculatedReadings, key: &str, expected: f64, unit: Option<&str>) {
    let point = readings
        .get(key)
        .unwrap_or_else(|| panic!("missing reading {}", key));
    assert_eq!(point.value, DataValue::Number(expected), "value of {}", key);
    assert_eq!(point.unit, unit, "unit of {}", key);
}

/// Assert `key` is a whole number equal to `expected` and carries `unit`
pub fn assert_integer(readings: &CalculatedReadings, key: &str, expected: i64, unit: Option<&str>) {
    let point = readings
        .get(key)
        .unwrap_or_else(|| panic!("missing reading {}", key));
    assert_eq!(point.value, DataValue::Integer(expected), "value of {}", key);
    assert_eq!(point.unit, unit, "unit of {}", key);
}

/// Assert `key` is present and null
pub fn assert_null(readings: &CalculatedReadings, key: &str) {
    let point = readings
        .get(key)
        .unwrap_or_else(|| panic!("missing reading {}", key));
    assert!(point.value.is_null(), "{} should be null, got {}", key, point.value);
}
