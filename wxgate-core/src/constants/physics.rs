//! Formula Coefficients for Meteorological Derivations
//!
//! Coefficients are grouped per formula. Where a formula has a published source
//! it is named; the rest are the values the weather-station community has settled
//! on and that existing dashboards expect.

// ===== DEW POINT (MAGNUS) =====

/// Magnus `a` coefficient above freezing.
///
/// Source: Sonntag (1990) fit over water
pub const MAGNUS_A_WATER: f64 = 17.368;

/// Magnus `b` coefficient above freezing (°C).
pub const MAGNUS_B_WATER_C: f64 = 238.88;

/// Magnus `a` coefficient at or below freezing.
///
/// Source: Sonntag (1990) fit over ice
pub const MAGNUS_A_ICE: f64 = 17.966;

/// Magnus `b` coefficient at or below freezing (°C).
pub const MAGNUS_B_ICE_C: f64 = 247.15;

/// Lowest relative humidity fed to the Magnus logarithm (%).
///
/// ln(0) is undefined; the formula clamps instead of failing.
pub const MAGNUS_MIN_HUMIDITY_PCT: f64 = 1.0;

// ===== HEAT INDEX (ROTHFUSZ) =====

/// Rothfusz regression coefficients c1..c9, in °F and %RH.
///
/// Source: NWS Technical Attachment SR 90-23
pub const ROTHFUSZ: [f64; 9] = [
    -42.379,
    2.04901523,
    10.14333127,
    -0.22475541,
    -0.00683783,
    -0.05481717,
    0.00122874,
    0.00085282,
    -0.00000199,
];

// ===== WIND CHILL =====

/// Wind chill constant term (°F).
///
/// Source: NWS wind chill formula (2001)
pub const WIND_CHILL_C0: f64 = 35.74;

/// Wind chill temperature coefficient.
pub const WIND_CHILL_C1: f64 = 0.6215;

/// Wind chill wind coefficient.
pub const WIND_CHILL_C2: f64 = 35.75;

/// Wind chill cross coefficient.
pub const WIND_CHILL_C3: f64 = 0.4275;

/// Exponent applied to wind speed (mph).
pub const WIND_CHILL_EXPONENT: f64 = 0.16;

// ===== FROST POINT =====

/// Frost point numerator (K).
///
/// Source: Buck-style Clausius–Clapeyron fit over ice
pub const FROST_POINT_K1: f64 = 2671.02;

/// Frost point reciprocal-temperature term (K).
pub const FROST_POINT_K2: f64 = 2954.61;

/// Frost point logarithmic term.
pub const FROST_POINT_K3: f64 = 2.193665;

/// Frost point constant term.
pub const FROST_POINT_K4: f64 = 13.3448;

// ===== HUMIDEX =====

/// Reference vapor pressure for humidex (hPa).
///
/// Source: Environment Canada humidex definition
pub const HUMIDEX_VAPOR_PRESSURE_REF_HPA: f64 = 6.11;

/// Latent heat over gas constant ratio used by humidex (K).
pub const HUMIDEX_LATENT_RATIO_K: f64 = 5417.7530;

/// Triple point of water (K).
pub const HUMIDEX_TRIPLE_POINT_K: f64 = 273.16;

/// Humidex vapor pressure offset (hPa).
pub const HUMIDEX_VAPOR_OFFSET_HPA: f64 = 10.0;

/// Humidex scaling factor.
pub const HUMIDEX_SCALE: f64 = 0.5555;

// ===== SATURATION VAPOR PRESSURE =====

/// Saturation vapor pressure at 0 °C (hPa).
///
/// Source: Bolton (1980)
pub const SATURATION_PRESSURE_0C_HPA: f64 = 6.112;

/// Bolton `a` coefficient.
pub const BOLTON_A: f64 = 17.67;

/// Bolton `b` coefficient (°C).
pub const BOLTON_B_C: f64 = 243.5;

/// Conversion from hPa·%/K to g/m³ of water vapor.
///
/// Derived from the ideal gas law for water vapor (molar mass 18.02 g/mol).
pub const ABSOLUTE_HUMIDITY_FACTOR: f64 = 2.1674;

// ===== SIMMER INDEX =====

/// Simmer index scale.
///
/// Source: Pepi, "The Summer Simmer Index" (1987)
pub const SIMMER_SCALE: f64 = 1.98;

/// Simmer index humidity base.
pub const SIMMER_HUMIDITY_BASE: f64 = 0.55;

/// Simmer index humidity slope (per %RH).
pub const SIMMER_HUMIDITY_SLOPE: f64 = 0.0055;

/// Simmer index reference temperature (°F).
pub const SIMMER_REFERENCE_F: f64 = 58.0;

/// Simmer index offset (°F).
pub const SIMMER_OFFSET_F: f64 = 56.83;

// ===== RELATIVE STRAIN INDEX =====

/// Body-comfort reference temperature (°C).
///
/// Source: Lee & Henschel (1966)
pub const RSI_REFERENCE_C: f64 = 21.0;

/// Skin vapor pressure (hPa).
pub const RSI_SKIN_VAPOR_PRESSURE_HPA: f64 = 58.0;

// ===== UV EXPOSURE =====

/// Erythemally weighted irradiance of one UV index unit (W/m²).
///
/// Source: WHO Global Solar UV Index guide (2002)
pub const UV_INDEX_IRRADIANCE_WM2: f64 = 0.025;

/// Minimal erythemal dose per Fitzpatrick skin type 1 through 6 (J/m²).
pub const MINIMAL_ERYTHEMAL_DOSE_JM2: [f64; 6] = [200.0, 250.0, 300.0, 450.0, 600.0, 1000.0];
