//! Unit Conversion Factors
//!
//! Linear factors for converting imperial values to metric. Dividing by the same
//! factor goes back. Temperature is not here because it needs an offset, see
//! [`crate::meteo::Temperature`].

/// Hectopascals per inch of mercury (hPa/inHg).
///
/// Source: NIST SP 811, inHg at 32 °F
pub const PRESSURE_HPA_PER_INHG: f64 = 33.8639;

/// Kilometres per hour per mile per hour.
///
/// Source: international mile, 1.609344 km, truncated
pub const SPEED_KMH_PER_MPH: f64 = 1.60934;

/// Kilometres per mile for distances (lightning strikes).
///
/// Coarser than the speed factor; lightning distances are only ever reported
/// in whole kilometres so the extra digits carry nothing.
pub const DISTANCE_KM_PER_MI: f64 = 1.609;

/// Millimetres per inch for rain accumulation and rain rate.
///
/// Source: exact by definition
pub const PRECIPITATION_MM_PER_IN: f64 = 25.4;

/// Lux per W/m² of solar radiation.
///
/// Empirical approximation for daylight (luminous efficacy of sunlight), not a
/// physical law. Kept literal so published values stay stable.
pub const ILLUMINANCE_LUX_PER_WM2: f64 = 126.7;

/// Degrees Fahrenheit per degree Celsius (scale only).
pub const FAHRENHEIT_PER_CELSIUS: f64 = 1.8;

/// Offset between the Fahrenheit and Celsius zero points (°F).
pub const FAHRENHEIT_OFFSET: f64 = 32.0;

/// Offset between Celsius and Kelvin.
pub const KELVIN_OFFSET: f64 = 273.15;
