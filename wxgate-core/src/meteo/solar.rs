//! Solar Radiation and UV
//!
//! ## Illuminance
//!
//! Stations measure solar radiation in W/m². Multiplying by 126.7 gives a usable
//! lux estimate for daylight. Perceived brightness maps lux onto a logarithmic
//! 0-100 % scale where 100 000 lx (full sun) is 100 %.
//!
//! ## Safe Exposure Time
//!
//! One UV index unit is 0.025 W/m² of erythemally weighted irradiance. Dividing
//! a skin type's minimal erythemal dose by the dose rate gives the minutes until
//! the skin starts to burn:
//!
//! ```text
//! minutes = MED(skin type) / (UVI × 0.025 W/m² × 60 s)
//! ```

use crate::constants::conversion::ILLUMINANCE_LUX_PER_WM2;
use crate::constants::physics::{MINIMAL_ERYTHEMAL_DOSE_JM2, UV_INDEX_IRRADIANCE_WM2};
use crate::constants::thresholds::PERCEIVED_BRIGHTNESS_LOG_SPAN;

/// Fitzpatrick skin type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkinType {
    /// Always burns, never tans
    I,
    /// Usually burns, tans minimally
    II,
    /// Sometimes burns, tans uniformly
    III,
    /// Burns minimally, always tans
    IV,
    /// Very rarely burns, tans profusely
    V,
    /// Never burns
    VI,
}

impl SkinType {
    /// All types in order, used to synthesize one reading per type
    pub const ALL: [SkinType; 6] = [
        SkinType::I,
        SkinType::II,
        SkinType::III,
        SkinType::IV,
        SkinType::V,
        SkinType::VI,
    ];

    /// Type number 1-6
    pub fn number(self) -> u8 {
        match self {
            Self::I => 1,
            Self::II => 2,
            Self::III => 3,
            Self::IV => 4,
            Self::V => 5,
            Self::VI => 6,
        }
    }

    /// Skin type from its number, `None` outside 1-6
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    fn minimal_erythemal_dose(self) -> f64 {
        MINIMAL_ERYTHEMAL_DOSE_JM2[usize::from(self.number() - 1)]
    }
}

/// Lux estimate for a solar radiation reading in W/m²
pub fn solar_radiation_to_lux(radiation_wm2: f64) -> f64 {
    radiation_wm2 * ILLUMINANCE_LUX_PER_WM2
}

/// Perceived brightness (%) for an illuminance in lux, clamped to 0-100
pub fn perceived_brightness(lux: f64) -> f64 {
    if lux <= 1.0 {
        return 0.0;
    }
    (lux.log10() / PERCEIVED_BRIGHTNESS_LOG_SPAN * 100.0).clamp(0.0, 100.0)
}

/// Minutes until sunburn for `skin_type` at `uv_index`; `None` when there is no UV
pub fn safe_exposure_time(uv_index: f64, skin_type: SkinType) -> Option<f64> {
    if uv_index.is_nan() || uv_index <= 0.0 {
        return None;
    }
    let dose_rate_per_minute = uv_index * UV_INDEX_IRRADIANCE_WM2 * 60.0;
    Some(skin_type.minimal_erythemal_dose() / dose_rate_per_minute)
}
