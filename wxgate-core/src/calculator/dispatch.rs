//! Dispatch table from payload keys to calculators
//!
//! Family order is significant; the tests below pin every case where a key
//! carries two markers.

use super::{Calculator, Pollutant};
use crate::keys::{KeyTable, MatchKind};
use crate::units::UnitClass;

const DEGREES: Calculator = Calculator::Simple {
    unit: Some("°"),
    places: 0,
};

const SECONDS: Calculator = Calculator::Simple {
    unit: Some("s"),
    places: 0,
};

const PERCENT: Calculator = Calculator::Simple {
    unit: Some("%"),
    places: 0,
};

const VOLTAGE: Calculator = Calculator::Simple {
    unit: Some("V"),
    places: 2,
};

const EXACT: &[(&str, Calculator)] = &[
    ("dateutc", Calculator::Timestamp),
    ("lightning_time", Calculator::Timestamp),
    ("winddir", DEGREES),
    ("winddir_avg10m", DEGREES),
    ("uv", Calculator::Simple { unit: Some("UV index"), places: 0 }),
    ("solarradiation", Calculator::Simple { unit: Some("W/m²"), places: 1 }),
    ("rainratein", Calculator::UnitConverted(UnitClass::PrecipitationRate)),
    ("rrain_piezo", Calculator::UnitConverted(UnitClass::PrecipitationRate)),
    ("srain_piezo", Calculator::BinaryState),
    ("lightning", Calculator::Distance),
    ("lightning_num", Calculator::Simple { unit: None, places: 0 }),
    ("heap", Calculator::Memory),
    ("runtime", SECONDS),
    ("interval", SECONDS),
    ("vpd", Calculator::UnitConverted(UnitClass::Pressure)),
];

const FAMILIES: &[(&str, Calculator)] = &[
    ("leakbatt", Calculator::Battery),
    ("leak", Calculator::BinaryState),
    ("batt", Calculator::Battery),
    ("volt", VOLTAGE),
    ("humi", PERCENT),
    ("temp", Calculator::UnitConverted(UnitClass::Temperature)),
    ("tf_", Calculator::UnitConverted(UnitClass::Temperature)),
    ("pm25", Calculator::Pollutant(Pollutant::Pm25)),
    ("pm10", Calculator::Pollutant(Pollutant::Pm10)),
    ("co2", Calculator::Pollutant(Pollutant::Co2)),
    ("moisture", PERCENT),
    ("leafwetness", PERCENT),
    ("rain", Calculator::UnitConverted(UnitClass::Precipitation)),
    ("wind", Calculator::UnitConverted(UnitClass::Speed)),
    ("gust", Calculator::UnitConverted(UnitClass::Speed)),
    ("barom", Calculator::UnitConverted(UnitClass::Pressure)),
];

/// Calculator table for raw payload keys
pub static DISPATCH: KeyTable<Calculator> = KeyTable::new(EXACT, FAMILIES);

/// Calculator for a raw payload key; unknown keys pass through
pub fn calculator_for(key: &str) -> Calculator {
    match DISPATCH.lookup(key) {
        Some((calculator, MatchKind::Exact)) => calculator,
        Some((calculator, MatchKind::Family(marker))) => {
            log_debug!("{} matched family {}", key, marker);
            calculator
        }
        None => Calculator::PassThrough,
    }
}
