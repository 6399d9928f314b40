//! Entity Descriptors
//!
//! ## Overview
//!
//! Home-automation discovery needs more than a value: each reading is announced
//! as an entity with a component type, a device class, an icon and a unit. The
//! descriptor for a key is resolved the same way its calculator is, through an
//! exact-then-family [`KeyTable`]:
//!
//! ```text
//! solarradiation  exact     -> sensor, illuminance
//! windgust        "wind"    -> sensor, wind_speed
//! maxdailygust    "gust"    -> sensor, wind_speed
//! windchill       "windchill" (listed before "wind") -> sensor, temperature
//! leak_ch1        "leak"    -> binary_sensor, moisture
//! stationtype     (none)    -> sensor, no metadata
//! ```
//!
//! Units follow the output unit system through [`UnitClass::label`], so a
//! descriptor and the reading it describes always agree. Battery keys take
//! their component and unit from the effective battery strategy.
//!
//! Descriptors never change for a given device and key, so publishers keep a
//! [`DescriptorCache`].
//!
//! ```rust
//! use wxgate_core::{describe, CalculationConfig, Component};
//!
//! let config = CalculationConfig::default();
//! let descriptor = describe("windgustmph", &config);
//!
//! assert_eq!(descriptor.component, Component::Sensor);
//! assert_eq!(descriptor.device_class, Some("wind_speed"));
//! assert_eq!(descriptor.unit, Some("mph"));
//! ```

mod cache;

pub use cache::DescriptorCache;

use std::fmt;

use serde::Serialize;

use crate::battery::battery_unit;
use crate::calculator::CalculatedReadings;
use crate::config::{BatteryStrategy, CalculationConfig};
use crate::keys::KeyTable;
use crate::reading::CalculatedDataPoint;
use crate::units::UnitClass;

/// Discovery component type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    /// Numeric or text sensor
    Sensor,
    /// ON/OFF sensor
    BinarySensor,
}

impl Component {
    /// Name used in discovery topics
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sensor => "sensor",
            Self::BinarySensor => "binary_sensor",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a reading is presented to a home-automation consumer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntityDescriptor {
    /// Component type
    pub component: Component,
    /// Material Design icon
    pub icon: Option<&'static str>,
    /// Device class
    pub device_class: Option<&'static str>,
    /// Unit of measurement
    pub unit: Option<&'static str>,
}

impl Default for EntityDescriptor {
    fn default() -> Self {
        Self {
            component: Component::Sensor,
            icon: None,
            device_class: None,
            unit: None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum UnitSource {
    None,
    Fixed(&'static str),
    Class(UnitClass),
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    Entity {
        component: Component,
        device_class: Option<&'static str>,
        icon: Option<&'static str>,
        unit: UnitSource,
    },
    Battery,
}

const fn sensor(device_class: Option<&'static str>, icon: Option<&'static str>, unit: UnitSource) -> Rule {
    Rule::Entity {
        component: Component::Sensor,
        device_class,
        icon,
        unit,
    }
}

const fn binary(device_class: &'static str, icon: &'static str) -> Rule {
    Rule::Entity {
        component: Component::BinarySensor,
        device_class: Some(device_class),
        icon: Some(icon),
        unit: UnitSource::None,
    }
}

const TIMESTAMP: Rule = sensor(Some("timestamp"), Some("mdi:clock"), UnitSource::None);
const TEMPERATURE: Rule = sensor(Some("temperature"), Some("mdi:thermometer"), UnitSource::Class(UnitClass::Temperature));
const WIND_DIRECTION: Rule = sensor(None, Some("mdi:compass"), UnitSource::Fixed("°"));
const RAIN_RATE: Rule = sensor(
    Some("precipitation_intensity"),
    Some("mdi:water"),
    UnitSource::Class(UnitClass::PrecipitationRate),
);
const DURATION: Rule = sensor(Some("duration"), Some("mdi:timer"), UnitSource::Fixed("s"));
const PRESSURE: Rule = sensor(Some("pressure"), Some("mdi:gauge"), UnitSource::Class(UnitClass::Pressure));
const WIND_SPEED: Rule = sensor(Some("wind_speed"), Some("mdi:weather-windy"), UnitSource::Class(UnitClass::Speed));
const MOISTURE: Rule = sensor(Some("moisture"), Some("mdi:water-percent"), UnitSource::Fixed("%"));
const PERCEPTION: Rule = sensor(None, Some("mdi:emoticon"), UnitSource::None);

const EXACT: &[(&str, Rule)] = &[
    ("dateutc", TIMESTAMP),
    ("lightning_time", TIMESTAMP),
    ("winddir", WIND_DIRECTION),
    ("winddir_avg10m", WIND_DIRECTION),
    ("uv", sensor(None, Some("mdi:sunglasses"), UnitSource::Fixed("UV index"))),
    ("solarradiation", sensor(Some("illuminance"), Some("mdi:weather-sunny"), UnitSource::Fixed("W/m²"))),
    ("solarradiation_lux", sensor(Some("illuminance"), Some("mdi:weather-sunny"), UnitSource::Fixed("lx"))),
    ("solarradiation_perceived", sensor(None, Some("mdi:brightness-6"), UnitSource::Fixed("%"))),
    ("rainratein", RAIN_RATE),
    ("rrain_piezo", RAIN_RATE),
    ("srain_piezo", binary("moisture", "mdi:weather-rainy")),
    ("lightning", sensor(Some("distance"), Some("mdi:map-marker-distance"), UnitSource::Class(UnitClass::Distance))),
    ("lightning_num", sensor(None, Some("mdi:weather-lightning"), UnitSource::None)),
    ("heap", sensor(Some("data_size"), Some("mdi:memory"), UnitSource::Fixed("B"))),
    ("runtime", DURATION),
    ("interval", DURATION),
    ("vpd", PRESSURE),
    ("simmerindex", TEMPERATURE),
    ("humidex", sensor(None, Some("mdi:thermometer"), UnitSource::None)),
    ("humidex_perception", PERCEPTION),
    ("simmerzone", PERCEPTION),
    ("thermalperception", PERCEPTION),
    ("absolute_humidity", sensor(None, Some("mdi:water"), UnitSource::Fixed("g/m³"))),
    ("relative_strain_index", sensor(None, Some("mdi:heat-wave"), UnitSource::None)),
    ("relative_strain_index_perception", PERCEPTION),
    ("beaufortscale", sensor(None, Some("mdi:weather-windy"), UnitSource::None)),
];

const FAMILIES: &[(&str, Rule)] = &[
    ("leakbatt", Rule::Battery),
    ("leak", binary("moisture", "mdi:water-alert")),
    ("batt", Rule::Battery),
    ("volt", sensor(Some("voltage"), Some("mdi:flash"), UnitSource::Fixed("V"))),
    ("safe_exposure_time", sensor(Some("duration"), Some("mdi:timer-sand"), UnitSource::Fixed("min"))),
    ("dewpoint", TEMPERATURE),
    ("heatindex", TEMPERATURE),
    ("feelslike", TEMPERATURE),
    ("windchill", TEMPERATURE),
    ("frostpoint", TEMPERATURE),
    ("humi", sensor(Some("humidity"), Some("mdi:water-percent"), UnitSource::Class(UnitClass::Humidity))),
    ("temp", TEMPERATURE),
    ("tf_", TEMPERATURE),
    ("pm25", sensor(Some("pm25"), Some("mdi:blur"), UnitSource::Fixed("µg/m³"))),
    ("pm10", sensor(Some("pm10"), Some("mdi:blur"), UnitSource::Fixed("µg/m³"))),
    ("co2", sensor(Some("carbon_dioxide"), Some("mdi:molecule-co2"), UnitSource::Fixed("ppm"))),
    ("moisture", MOISTURE),
    ("leafwetness", MOISTURE),
    ("rain", sensor(Some("precipitation"), Some("mdi:water"), UnitSource::Class(UnitClass::Precipitation))),
    ("wind", WIND_SPEED),
    ("gust", WIND_SPEED),
    ("barom", PRESSURE),
];

static DESCRIPTORS: KeyTable<Rule> = KeyTable::new(EXACT, FAMILIES);

/// Resolve the descriptor for `key` under `config`
pub fn describe(key: &str, config: &CalculationConfig) -> EntityDescriptor {
    let Some((rule, _)) = DESCRIPTORS.lookup(key) else {
        return EntityDescriptor::default();
    };

    match rule {
        Rule::Entity {
            component,
            device_class,
            icon,
            unit,
        } => EntityDescriptor {
            component,
            icon,
            device_class,
            unit: match unit {
                UnitSource::None => None,
                UnitSource::Fixed(unit) => Some(unit),
                UnitSource::Class(class) => Some(class.label(config.output_unit_system())),
            },
        },
        Rule::Battery => {
            let strategy = config.battery_strategy(key);
            let (component, device_class) = match strategy {
                BatteryStrategy::Boolean => (Component::BinarySensor, "battery"),
                BatteryStrategy::Numeric => (Component::Sensor, "voltage"),
                BatteryStrategy::Percentage => (Component::Sensor, "battery"),
            };
            EntityDescriptor {
                component,
                icon: Some("mdi:battery"),
                device_class: Some(device_class),
                unit: battery_unit(strategy),
            }
        }
    }
}

impl CalculatedReadings {
    /// Pair every reading with its descriptor for `device`, in publishing order
    pub fn describe<'a>(
        &'a self,
        device: &str,
        cache: &DescriptorCache,
        config: &CalculationConfig,
    ) -> Vec<(&'a str, EntityDescriptor, &'a CalculatedDataPoint)> {
        self.iter()
            .map(|(key, point)| (key, cache.describe(device, key, config), point))
            .collect()
    }
}
