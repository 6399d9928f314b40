//! Constants for wxgate Core
//!
//! Every numeric value the calculators rely on lives here, with its unit in the
//! name and a note on where it comes from.
//!
//! ## Organization
//!
//! - **Conversion**: unit conversion factors between imperial and metric
//! - **Physics**: formula coefficients for the meteorological derivations
//! - **Thresholds**: domain limits and perception band boundaries
//!
//! Several constants are empirical (the illuminance factor in particular). They are
//! kept literally because dashboards downstream key off the exact output values.

/// Unit conversion factors.
pub mod conversion;

/// Formula coefficients for dew point, heat index, wind chill and friends.
pub mod physics;

/// Domain limits and band tables.
pub mod thresholds;

pub use conversion::{
    DISTANCE_KM_PER_MI, ILLUMINANCE_LUX_PER_WM2, PRECIPITATION_MM_PER_IN, PRESSURE_HPA_PER_INHG,
    SPEED_KMH_PER_MPH,
};

pub use thresholds::{
    DEFAULT_DECIMAL_PLACES, HEAT_INDEX_MIN_F, MAX_DECIMAL_PLACES, SIMMER_INDEX_MIN_F,
    WIND_CHILL_MAX_F, WIND_CHILL_MIN_WIND_MPH,
};
