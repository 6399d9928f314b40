//! Domain Limits and Band Tables
//!
//! Formulas here only hold over part of the weather a station can see. The limits
//! decide when a derivation yields a value and when it yields null.
//!
//! Band tables are `(lower bound, band)` pairs in ascending order; a value belongs
//! to the last band whose lower bound it reaches.

// ===== ROUNDING =====

/// Decimal places used when the configuration does not set a precision.
pub const DEFAULT_DECIMAL_PLACES: u32 = 1;

/// Largest precision a configuration may request.
///
/// Beyond six places f64 rounding noise shows up in converted values.
pub const MAX_DECIMAL_PLACES: u32 = 6;

/// Decimal places for battery voltages.
pub const VOLTAGE_DECIMAL_PLACES: u32 = 2;

/// Decimal places for the relative strain index (values sit around 0.1-0.6).
pub const STRAIN_INDEX_DECIMAL_PLACES: u32 = 2;

// ===== FORMULA DOMAINS =====

/// Heat index applies from this temperature up (°F). Below it the heat index is
/// the air temperature.
///
/// Source: NWS heat index guidance
pub const HEAT_INDEX_MIN_F: f64 = 80.0;

/// Wind chill only defined at or below this temperature (°F).
///
/// Source: NWS wind chill formula (2001)
pub const WIND_CHILL_MAX_F: f64 = 50.0;

/// Wind chill only defined above this wind speed (mph).
pub const WIND_CHILL_MIN_WIND_MPH: f64 = 3.0;

/// Simmer index only defined at or above this temperature (°F).
pub const SIMMER_INDEX_MIN_F: f64 = 70.0;

/// Relative strain index lower temperature limit (°C).
pub const RSI_MIN_C: f64 = 26.0;

/// Relative strain index upper temperature limit (°C).
pub const RSI_MAX_C: f64 = 35.0;

/// Rothfusz low-humidity adjustment applies below this humidity (%).
pub const HEAT_INDEX_DRY_HUMIDITY_PCT: f64 = 13.0;

/// Rothfusz high-humidity adjustment applies above this humidity (%).
pub const HEAT_INDEX_HUMID_HUMIDITY_PCT: f64 = 85.0;

// ===== BRIGHTNESS =====

/// Illuminance (lx) mapped to 100 % perceived brightness is 10^this.
pub const PERCEIVED_BRIGHTNESS_LOG_SPAN: f64 = 5.0;

// ===== BEAUFORT =====

/// Lower bound of each Beaufort force in mph, forces 0 through 12.
///
/// Source: WMO Manual on Codes, Beaufort table
pub const BEAUFORT_LOWER_MPH: [f64; 13] = [
    0.0, 1.0, 4.0, 8.0, 13.0, 19.0, 25.0, 32.0, 39.0, 47.0, 55.0, 64.0, 73.0,
];

/// Lower bound of each Beaufort force in km/h, forces 0 through 12.
pub const BEAUFORT_LOWER_KMH: [f64; 13] = [
    0.0, 2.0, 6.0, 12.0, 20.0, 29.0, 39.0, 50.0, 62.0, 75.0, 89.0, 103.0, 118.0,
];
