//! Apparent and Saturation Temperatures
//!
//! ## Dew Point
//!
//! Magnus approximation with Sonntag's coefficients, switching to the ice fit at
//! or below 0 °C:
//!
//! ```text
//! γ  = ln(RH/100) + a·T / (b + T)
//! Td = b·γ / (a - γ)
//! ```
//!
//! ## Heat Index
//!
//! The NWS Rothfusz regression, valid from 80 °F up, with its two corrections
//! (very dry air in the 80-112 °F band, very humid air in the 80-87 °F band).
//! Below 80 °F the heat index is simply the air temperature.
//!
//! ## Wind Chill
//!
//! The 2001 NWS formula, defined at or below 50 °F with more than 3 mph of wind:
//!
//! ```text
//! WC = 35.74 + 0.6215·T - 35.75·V^0.16 + 0.4275·T·V^0.16
//! ```
//!
//! ## Frost Point
//!
//! Shifts the dew point onto the saturation curve over ice. Always defined.

use super::{Temperature, WindSpeed};
use crate::constants::physics::{
    FROST_POINT_K1, FROST_POINT_K2, FROST_POINT_K3, FROST_POINT_K4, MAGNUS_A_ICE, MAGNUS_A_WATER,
    MAGNUS_B_ICE_C, MAGNUS_B_WATER_C, MAGNUS_MIN_HUMIDITY_PCT, ROTHFUSZ, WIND_CHILL_C0,
    WIND_CHILL_C1, WIND_CHILL_C2, WIND_CHILL_C3, WIND_CHILL_EXPONENT,
};
use crate::constants::thresholds::{
    HEAT_INDEX_DRY_HUMIDITY_PCT, HEAT_INDEX_HUMID_HUMIDITY_PCT, HEAT_INDEX_MIN_F, WIND_CHILL_MAX_F,
    WIND_CHILL_MIN_WIND_MPH,
};

/// Dew point for `temp` at `humidity` %RH. Humidity outside [1, 100] is clamped.
pub fn dew_point(temp: Temperature, humidity: f64) -> Temperature {
    let t = temp.celsius();
    let rh = humidity.clamp(MAGNUS_MIN_HUMIDITY_PCT, 100.0);

    let (a, b) = if t > 0.0 {
        (MAGNUS_A_WATER, MAGNUS_B_WATER_C)
    } else {
        (MAGNUS_A_ICE, MAGNUS_B_ICE_C)
    };

    let gamma = (rh / 100.0).ln() + a * t / (b + t);
    Temperature::from_celsius(b * gamma / (a - gamma))
}

/// Heat index for `temp` at `humidity` %RH. Below 80 °F this is `temp` itself.
pub fn heat_index(temp: Temperature, humidity: f64) -> Temperature {
    let t = temp.fahrenheit();
    if t < HEAT_INDEX_MIN_F {
        return temp;
    }

    let rh = humidity.clamp(0.0, 100.0);
    let [c1, c2, c3, c4, c5, c6, c7, c8, c9] = ROTHFUSZ;
    let mut index = c1
        + c2 * t
        + c3 * rh
        + c4 * t * rh
        + c5 * t * t
        + c6 * rh * rh
        + c7 * t * t * rh
        + c8 * t * rh * rh
        + c9 * t * t * rh * rh;

    if rh < HEAT_INDEX_DRY_HUMIDITY_PCT && (80.0..=112.0).contains(&t) {
        index -= (HEAT_INDEX_DRY_HUMIDITY_PCT - rh) / 4.0 * ((17.0 - (t - 95.0).abs()) / 17.0).sqrt();
    } else if rh > HEAT_INDEX_HUMID_HUMIDITY_PCT && (80.0..=87.0).contains(&t) {
        index += (rh - HEAT_INDEX_HUMID_HUMIDITY_PCT) / 10.0 * (87.0 - t) / 5.0;
    }

    Temperature::from_fahrenheit(index)
}

/// Wind chill, or `None` when it is too warm or too calm for the formula
pub fn wind_chill(temp: Temperature, wind: WindSpeed) -> Option<Temperature> {
    let t = temp.fahrenheit();
    let v = wind.mph();

    if t > WIND_CHILL_MAX_F || v <= WIND_CHILL_MIN_WIND_MPH {
        return None;
    }

    let v_pow = v.powf(WIND_CHILL_EXPONENT);
    Some(Temperature::from_fahrenheit(
        WIND_CHILL_C0 + WIND_CHILL_C1 * t - WIND_CHILL_C2 * v_pow + WIND_CHILL_C3 * t * v_pow,
    ))
}

/// Apparent temperature: wind chill in the cold, heat index in the heat,
/// air temperature in between
pub fn feels_like(temp: Temperature, humidity: f64, wind: WindSpeed) -> Temperature {
    if let Some(chill) = wind_chill(temp, wind) {
        chill
    } else if temp.fahrenheit() >= HEAT_INDEX_MIN_F {
        heat_index(temp, humidity)
    } else {
        temp
    }
}

/// Frost point from air temperature and dew point
pub fn frost_point(temp: Temperature, dew_point: Temperature) -> Temperature {
    let temp_k = temp.kelvin();
    let dew_point_k = dew_point.kelvin();

    let frost_point_k = dew_point_k - temp_k
        + FROST_POINT_K1
            / ((FROST_POINT_K2 / temp_k) + FROST_POINT_K3 * temp_k.ln() - FROST_POINT_K4);

    Temperature::from_celsius(frost_point_k - crate::constants::conversion::KELVIN_OFFSET)
}
