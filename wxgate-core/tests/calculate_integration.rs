//! End-to-end calculation tests
//!
//! Full gateway payloads through `calculate`, checking output order, unit
//! conversion, derived readings and graceful degradation.

mod common;

use wxgate_core::{calculate, CalculationConfig, CalculationSettings, DataValue, RawPayload};

use common::{
    assert_integer, assert_null, assert_number, gw2000_payload, imperial, metric_input,
    metric_output, metric_payload, metric_to_imperial, metric_with_battery_overrides,
    summer_payload,
};

const DERIVED_KEYS: [&str; 6] = [
    "dewpoint",
    "feelslike",
    "windchill",
    "beaufortscale",
    "solarradiation_lux",
    "safe_exposure_time_skin_type_1",
];

#[test]
fn raw_keys_first_in_payload_order() {
    let payload = gw2000_payload();
    let readings = calculate(&payload, &imperial());

    let raw: Vec<_> = payload.keys().collect();
    let published: Vec<_> = readings.keys().collect();
    assert_eq!(&published[..raw.len()], &raw[..]);

    // Fixed groups, then channels
    let derived = &published[raw.len()..];
    assert_eq!(derived.first(), Some(&"dewpoint"));
    assert_eq!(&derived[derived.len() - 2..], ["dewpoint1", "heatindex1"]);
}

#[test]
fn imperial_passes_values_through() {
    let readings = calculate(&gw2000_payload(), &imperial());

    assert_number(&readings, "tempf", 10.2, Some("°F"));
    assert_number(&readings, "windspeedmph", 8.8, Some("mph"));
    assert_number(&readings, "baromrelin", 28.1, Some("inHg"));
    assert_number(&readings, "windchill", -2.4, Some("°F"));
    assert_number(&readings, "feelslike", -2.4, Some("°F"));
    assert_number(&readings, "dewpointin", 42.1, Some("°F"));
    assert_number(&readings, "heatindexin", 74.7, Some("°F"));
    assert_number(&readings, "dewpoint1", 45.9, Some("°F"));
}

#[test]
fn metric_output_converts() {
    let readings = calculate(&gw2000_payload(), &metric_output());

    assert_number(&readings, "tempf", -12.1, Some("°C"));
    assert_number(&readings, "windspeedmph", 14.2, Some("km/h"));
    assert_number(&readings, "windgustmph", 18.3, Some("km/h"));
    assert_number(&readings, "maxdailygust", 24.1, Some("km/h"));
    assert_number(&readings, "baromrelin", 952.3, Some("hPa"));
    assert_number(&readings, "dailyrainin", 3.1, Some("mm"));
    assert_number(&readings, "rainratein", 0.0, Some("mm/h"));
    assert_number(&readings, "windchill", -19.1, Some("°C"));
    assert_number(&readings, "dewpointin", 5.6, Some("°C"));
    assert_number(&readings, "heatindexin", 23.7, Some("°C"));
    assert_number(&readings, "dewpoint1", 7.7, Some("°C"));
}

#[test]
fn fixed_unit_readings() {
    let readings = calculate(&gw2000_payload(), &metric_output());

    assert_integer(&readings, "winddir", 289, Some("°"));
    assert_integer(&readings, "humidity", 60, Some("%"));
    assert_integer(&readings, "heap", 132364, Some("B"));
    assert_integer(&readings, "runtime", 319206, Some("s"));
    assert_integer(&readings, "uv", 5, Some("UV index"));
    assert_integer(&readings, "lightning_num", 0, None);
    assert_number(&readings, "solarradiation", 500.0, Some("W/m²"));
    assert_number(&readings, "solarradiation_lux", 63350.0, Some("lx"));
    assert_number(&readings, "solarradiation_perceived", 96.0, Some("%"));
}

#[test]
fn timestamps_and_identifiers_untouched() {
    let readings = calculate(&gw2000_payload(), &metric_output());
    let values = readings.values();

    assert_eq!(values.get("dateutc"), Some(&DataValue::Text("2023-10-02 15:24:32".into())));
    assert_eq!(values.get("lightning_time"), Some(&DataValue::Text(String::new())));
    assert_eq!(values.get("stationtype"), Some(&DataValue::Text("GW2000A_V2.1.4".into())));
    assert_eq!(values.get("freq"), Some(&DataValue::Text("915M".into())));
}

#[test]
fn states_and_batteries() {
    let readings = calculate(&gw2000_payload(), &imperial());
    let values = readings.values();

    assert_eq!(values.get("leak_ch1"), Some(&DataValue::Text("OFF".into())));
    assert_eq!(values.get("wh65batt"), Some(&DataValue::Text("OFF".into())));
    assert_eq!(values.get("soilbatt1"), Some(&DataValue::Text("ON".into())));
    assert_eq!(values.get("leakbatt1"), Some(&DataValue::Text("ON".into())));
}

#[test]
fn battery_overrides_apply_per_key() {
    let readings = calculate(&gw2000_payload(), &metric_with_battery_overrides());

    assert_number(&readings, "soilbatt1", 1.4, Some("V"));
    assert_number(&readings, "leakbatt1", 4.0, Some("%"));
    assert_eq!(readings.values().get("wh65batt"), Some(&DataValue::Text("OFF".into())));
}

#[test]
fn empty_lightning_distance_is_null() {
    let readings = calculate(&gw2000_payload(), &metric_output());
    assert_null(&readings, "lightning");
    assert_eq!(readings.get("lightning").unwrap().unit, Some("km"));
}

#[test]
fn cold_day_domains() {
    let readings = calculate(&gw2000_payload(), &imperial());

    assert_null(&readings, "simmerindex");
    assert_null(&readings, "simmerzone");
    assert_null(&readings, "relative_strain_index");
    assert_null(&readings, "relative_strain_index_perception");
    assert_number(&readings, "heatindex", 10.2, Some("°F"));
}

#[test]
fn warm_day_derivations() {
    let readings = calculate(&summer_payload(), &imperial());
    let values = readings.values();

    assert_number(&readings, "heatindex", 99.7, Some("°F"));
    assert_number(&readings, "feelslike", 99.7, Some("°F"));
    assert_null(&readings, "windchill");
    assert_number(&readings, "simmerindex", 107.4, Some("°F"));
    assert_eq!(values.get("simmerzone"), Some(&DataValue::Text("Extremely warm".into())));
    assert_number(&readings, "relative_strain_index", 0.39, None);
    assert_eq!(
        values.get("relative_strain_index_perception"),
        Some(&DataValue::Text("Discomfort".into()))
    );
    assert_number(&readings, "absolute_humidity", 20.5, Some("g/m³"));
}

#[test]
fn beaufort_and_exposure() {
    let readings = calculate(&gw2000_payload(), &imperial());

    assert_integer(&readings, "beaufortscale", 3, None);
    assert_eq!(
        readings.get("beaufortscale").unwrap().attributes["description"],
        "Gentle breeze"
    );

    let minutes: Vec<_> = (1..=6)
        .map(|n| {
            readings
                .get(&format!("safe_exposure_time_skin_type_{}", n))
                .and_then(|p| p.value.as_f64())
        })
        .collect();
    assert_eq!(
        minutes,
        [Some(27.0), Some(33.0), Some(40.0), Some(60.0), Some(80.0), Some(133.0)]
    );
}

#[test]
fn whole_numbers_serialize_without_fraction() {
    let payload = RawPayload::from_pairs([
        ("windspeedmph", "14.2"),
        ("uv", "5"),
        ("humidity", "31"),
        ("heap", "132364"),
    ]);
    let readings = calculate(&payload, &imperial());

    assert_eq!(
        serde_json::to_value(readings.values()).unwrap(),
        serde_json::json!({
            "windspeedmph": 14.2,
            "uv": 5,
            "humidity": 31,
            "heap": 132364,
            "beaufortscale": 4,
            "safe_exposure_time_skin_type_1": 27,
            "safe_exposure_time_skin_type_2": 33,
            "safe_exposure_time_skin_type_3": 40,
            "safe_exposure_time_skin_type_4": 60,
            "safe_exposure_time_skin_type_5": 80,
            "safe_exposure_time_skin_type_6": 133,
        })
    );
    let json = readings.to_json().unwrap();
    assert!(json.contains(r#""beaufortscale":4,"#), "{}", json);
    assert!(json.contains(r#""uv":5,"#), "{}", json);
}

#[test]
fn metric_gateway_to_imperial_output() {
    let readings = calculate(&metric_payload(), &metric_to_imperial());

    assert_number(&readings, "tempf", 71.8, Some("°F"));
    assert_number(&readings, "windspeedmph", 12.4, Some("mph"));
    assert_number(&readings, "windgustmph", 18.6, Some("mph"));
    assert_number(&readings, "baromrelin", 28.1, Some("inHg"));
    assert_number(&readings, "dailyrainin", 0.5, Some("in"));
    assert_number(&readings, "lightning", 6.2, Some("mi"));
    assert_number(&readings, "dewpoint", 21.7, Some("°F"));
    assert_number(&readings, "feelslike", 71.8, Some("°F"));
    assert_null(&readings, "windchill");
    // Force comes from the km/h table: 20 km/h is 4, while 12.4 mph would be 3
    assert_integer(&readings, "beaufortscale", 4, None);
}

#[test]
fn metric_gateway_to_metric_output() {
    let readings = calculate(&metric_payload(), &metric_input());

    assert_number(&readings, "tempf", 22.1, Some("°C"));
    assert_number(&readings, "windspeedmph", 20.0, Some("km/h"));
    assert_number(&readings, "baromrelin", 951.6, Some("hPa"));
    assert_number(&readings, "dailyrainin", 12.7, Some("mm"));
    assert_number(&readings, "lightning", 10.0, Some("km"));
    assert_number(&readings, "dewpoint", -5.7, Some("°C"));
    assert_number(&readings, "heatindex", 22.1, Some("°C"));
    assert_integer(&readings, "beaufortscale", 4, None);
    assert_eq!(
        readings.get("beaufortscale").unwrap().attributes["description"],
        "Moderate breeze"
    );
}

#[test]
fn missing_sensor_sentinel_gives_nulls() {
    let payload = RawPayload::from_pairs([
        ("tempf", "-9999"),
        ("humidity", "50"),
        ("windspeedmph", "8.8"),
    ]);
    let readings = calculate(&payload, &imperial());

    for key in [
        "dewpoint",
        "feelslike",
        "heatindex",
        "windchill",
        "frostpoint",
        "humidex",
        "humidex_perception",
        "simmerindex",
        "simmerzone",
        "thermalperception",
        "absolute_humidity",
        "relative_strain_index",
        "relative_strain_index_perception",
    ] {
        assert_null(&readings, key);
    }
    assert_eq!(readings.get("frostpoint").unwrap().unit, Some("°F"));

    for (key, point) in readings.iter() {
        if let Some(value) = point.value.as_f64() {
            assert!(value.is_finite(), "{} is {}", key, value);
        }
    }
}

#[test]
fn disable_calculated_data_keeps_only_raw_keys() {
    let payload = gw2000_payload();
    let config = CalculationConfig::builder()
        .disable_calculated_data(true)
        .build()
        .unwrap();
    let readings = calculate(&payload, &config);

    assert_eq!(readings.len(), payload.len());
    for key in DERIVED_KEYS {
        assert!(!readings.contains_key(key), "{} should not be synthesized", key);
    }
}

#[test]
fn missing_companion_gives_null_not_absence() {
    let payload = RawPayload::from_pairs([("tempf", "50.0")]);
    let readings = calculate(&payload, &imperial());

    assert_null(&readings, "dewpoint");
    assert_null(&readings, "feelslike");
    assert_null(&readings, "windchill");
    assert!(!readings.contains_key("beaufortscale"));
}

#[test]
fn malformed_field_degrades_alone() {
    let mut payload = gw2000_payload();
    payload.insert("tempf", "n/a");
    let readings = calculate(&payload, &metric_output());

    assert_null(&readings, "tempf");
    assert_null(&readings, "dewpoint");
    assert_number(&readings, "windspeedmph", 14.2, Some("km/h"));
    assert_number(&readings, "dewpointin", 5.6, Some("°C"));
}

#[test]
fn raw_value_wins_over_synthesized_key() {
    let payload = RawPayload::from_pairs([("tempf", "74.7"), ("humidity", "31"), ("dewpoint", "40.0")]);
    let readings = calculate(&payload, &imperial());

    assert_eq!(readings.keys().filter(|k| *k == "dewpoint").count(), 1);
    assert_eq!(readings.values().get("dewpoint"), Some(&DataValue::Number(40.0)));
}

#[test]
fn json_payload_and_settings() {
    let payload: RawPayload = serde_json::from_str(
        r#"{"tempf": 74.7, "humidity": 31, "baromrelin": "28.122"}"#,
    )
    .unwrap();
    let settings: CalculationSettings = serde_json::from_str(
        r#"{"output_unit_system": "metric", "precision": 3, "disable_calculated_data": true}"#,
    )
    .unwrap();
    let config = CalculationConfig::try_from(settings).unwrap();

    let readings = calculate(&payload, &config);
    assert_eq!(
        readings.to_json().unwrap(),
        r#"{"tempf":23.722,"humidity":31.0,"baromrelin":952.321}"#
    );
}

#[test]
fn calculation_is_deterministic() {
    let payload = gw2000_payload();
    let config = metric_output();
    assert_eq!(calculate(&payload, &config), calculate(&payload, &config));
}
