//! Derived reading groups
//!
//! A group is synthesized when its primary key is in the payload. Companions
//! that are absent still produce the readings, as nulls.

use super::{CalculatorInputs, MeteoKind};
use crate::keys::temperature_channel;
use crate::meteo::SkinType;
use crate::reading::RawPayload;

struct DerivedGroup {
    primary: &'static str,
    humidity: Option<&'static str>,
    wind: Option<&'static str>,
    outputs: &'static [(&'static str, MeteoKind)],
}

const OUTDOOR: DerivedGroup = DerivedGroup {
    primary: "tempf",
    humidity: Some("humidity"),
    wind: Some("windspeedmph"),
    outputs: &[
        ("dewpoint", MeteoKind::DewPoint),
        ("feelslike", MeteoKind::FeelsLike),
        ("heatindex", MeteoKind::HeatIndex),
        ("windchill", MeteoKind::WindChill),
        ("frostpoint", MeteoKind::FrostPoint),
        ("humidex", MeteoKind::Humidex),
        ("humidex_perception", MeteoKind::HumidexPerception),
        ("simmerindex", MeteoKind::SimmerIndex),
        ("simmerzone", MeteoKind::SimmerZone),
        ("thermalperception", MeteoKind::ThermalPerception),
        ("absolute_humidity", MeteoKind::AbsoluteHumidity),
        ("relative_strain_index", MeteoKind::RelativeStrainIndex),
        ("relative_strain_index_perception", MeteoKind::RelativeStrainPerception),
    ],
};

const WIND: DerivedGroup = DerivedGroup {
    primary: "windspeedmph",
    humidity: None,
    wind: None,
    outputs: &[("beaufortscale", MeteoKind::BeaufortScale)],
};

const SOLAR: DerivedGroup = DerivedGroup {
    primary: "solarradiation",
    humidity: None,
    wind: None,
    outputs: &[
        ("solarradiation_lux", MeteoKind::SolarRadiationLux),
        ("solarradiation_perceived", MeteoKind::SolarRadiationPerceived),
    ],
};

const UV: DerivedGroup = DerivedGroup {
    primary: "uv",
    humidity: None,
    wind: None,
    outputs: &[
        ("safe_exposure_time_skin_type_1", MeteoKind::SafeExposureTime(SkinType::I)),
        ("safe_exposure_time_skin_type_2", MeteoKind::SafeExposureTime(SkinType::II)),
        ("safe_exposure_time_skin_type_3", MeteoKind::SafeExposureTime(SkinType::III)),
        ("safe_exposure_time_skin_type_4", MeteoKind::SafeExposureTime(SkinType::IV)),
        ("safe_exposure_time_skin_type_5", MeteoKind::SafeExposureTime(SkinType::V)),
        ("safe_exposure_time_skin_type_6", MeteoKind::SafeExposureTime(SkinType::VI)),
    ],
};

const INDOOR: DerivedGroup = DerivedGroup {
    primary: "tempinf",
    humidity: Some("humidityin"),
    wind: None,
    outputs: &[
        ("dewpointin", MeteoKind::DewPoint),
        ("heatindexin", MeteoKind::HeatIndex),
    ],
};

const GROUPS: [DerivedGroup; 5] = [OUTDOOR, WIND, SOLAR, UV, INDOOR];

/// One reading to synthesize, with its inputs already looked up
pub(super) struct DerivedReading<'a> {
    pub key: String,
    pub kind: MeteoKind,
    pub inputs: CalculatorInputs<'a>,
}

/// Derived readings for `payload` in publishing order: the fixed groups, then
/// per-channel dew point and heat index in payload order
pub(super) fn derived_readings(payload: &RawPayload) -> Vec<DerivedReading<'_>> {
    let mut derived = Vec::new();

    for group in &GROUPS {
        let Some(primary) = payload.get(group.primary) else {
            continue;
        };
        let inputs = CalculatorInputs {
            primary: Some(primary),
            humidity: group.humidity.and_then(|key| payload.get(key)),
            wind: group.wind.and_then(|key| payload.get(key)),
        };
        derived.extend(group.outputs.iter().map(|(key, kind)| DerivedReading {
            key: (*key).to_string(),
            kind: *kind,
            inputs,
        }));
    }

    for (key, value) in payload.iter() {
        let Some(channel) = temperature_channel(key) else {
            continue;
        };
        let inputs = CalculatorInputs {
            primary: Some(value),
            humidity: payload.get(&format!("humidity{}", channel)),
            wind: None,
        };
        derived.push(DerivedReading {
            key: format!("dewpoint{}", channel),
            kind: MeteoKind::DewPoint,
            inputs,
        });
        derived.push(DerivedReading {
            key: format!("heatindex{}", channel),
            kind: MeteoKind::HeatIndex,
            inputs,
        });
    }

    derived
}
