//! Human Comfort Indices
//!
//! Indices that turn temperature and moisture into "how does it feel", each with
//! a small ordered set of perception bands. Band boundaries are inclusive on the
//! lower bound: a humidex of exactly 40 is already "evident discomfort".

use super::{dew_point, Temperature};
use crate::constants::physics::{
    ABSOLUTE_HUMIDITY_FACTOR, BOLTON_A, BOLTON_B_C, HUMIDEX_LATENT_RATIO_K, HUMIDEX_SCALE,
    HUMIDEX_TRIPLE_POINT_K, HUMIDEX_VAPOR_OFFSET_HPA, HUMIDEX_VAPOR_PRESSURE_REF_HPA,
    RSI_REFERENCE_C, RSI_SKIN_VAPOR_PRESSURE_HPA, SATURATION_PRESSURE_0C_HPA,
    SIMMER_HUMIDITY_BASE, SIMMER_HUMIDITY_SLOPE, SIMMER_OFFSET_F, SIMMER_REFERENCE_F,
    SIMMER_SCALE,
};
use crate::constants::thresholds::{RSI_MAX_C, RSI_MIN_C, SIMMER_INDEX_MIN_F};
use crate::errors::{CalculationError, CalculationResult};
use crate::traits::{band_for, Labelled};

/// Saturation vapor pressure over water (hPa), Bolton (1980)
fn saturation_vapor_pressure(temp: Temperature) -> f64 {
    let t = temp.celsius();
    SATURATION_PRESSURE_0C_HPA * (BOLTON_A * t / (t + BOLTON_B_C)).exp()
}

// ===== SIMMER INDEX =====

/// Summer simmer index, expressed as a temperature.
///
/// Only defined from 70 °F up.
pub fn simmer_index(temp: Temperature, humidity: f64) -> CalculationResult<Temperature> {
    let t = temp.fahrenheit();
    if t < SIMMER_INDEX_MIN_F {
        return Err(CalculationError::OutOfDomain {
            reason: "simmer index needs at least 70 °F",
        });
    }

    let rh = humidity.clamp(0.0, 100.0);
    let index = SIMMER_SCALE
        * (t - (SIMMER_HUMIDITY_BASE - SIMMER_HUMIDITY_SLOPE * rh) * (t - SIMMER_REFERENCE_F))
        - SIMMER_OFFSET_F;

    Ok(Temperature::from_fahrenheit(index))
}

/// Comfort zone for a simmer index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimmerZone {
    /// Below 70 °F
    Cool,
    /// 70 °F
    SlightlyCool,
    /// 77 °F
    Comfortable,
    /// 83 °F
    SlightlyWarm,
    /// 91 °F
    IncreasingDiscomfort,
    /// 100 °F
    ExtremelyWarm,
    /// 112 °F
    DangerOfHeatstroke,
    /// 125 °F
    ExtremeDangerOfHeatstroke,
    /// 150 °F
    CirculatoryCollapseImminent,
}

const SIMMER_ZONES_F: [(f64, SimmerZone); 9] = [
    (f64::NEG_INFINITY, SimmerZone::Cool),
    (70.0, SimmerZone::SlightlyCool),
    (77.0, SimmerZone::Comfortable),
    (83.0, SimmerZone::SlightlyWarm),
    (91.0, SimmerZone::IncreasingDiscomfort),
    (100.0, SimmerZone::ExtremelyWarm),
    (112.0, SimmerZone::DangerOfHeatstroke),
    (125.0, SimmerZone::ExtremeDangerOfHeatstroke),
    (150.0, SimmerZone::CirculatoryCollapseImminent),
];

impl SimmerZone {
    /// Zone for a simmer index
    pub fn from_index(index: Temperature) -> Self {
        band_for(index.fahrenheit(), &SIMMER_ZONES_F).unwrap_or(Self::Cool)
    }
}

impl Labelled for SimmerZone {
    fn label(&self) -> &'static str {
        match self {
            Self::Cool => "Cool",
            Self::SlightlyCool => "Slightly cool",
            Self::Comfortable => "Comfortable",
            Self::SlightlyWarm => "Slightly warm",
            Self::IncreasingDiscomfort => "Increasing discomfort",
            Self::ExtremelyWarm => "Extremely warm",
            Self::DangerOfHeatstroke => "Danger of heatstroke",
            Self::ExtremeDangerOfHeatstroke => "Extreme danger of heatstroke",
            Self::CirculatoryCollapseImminent => "Circulatory collapse imminent",
        }
    }
}

// ===== ABSOLUTE HUMIDITY =====

/// Mass of water vapor per volume of air (g/m³). Never negative.
pub fn absolute_humidity(temp: Temperature, humidity: f64) -> f64 {
    let rh = humidity.clamp(0.0, 100.0);
    saturation_vapor_pressure(temp) * rh * ABSOLUTE_HUMIDITY_FACTOR / temp.kelvin()
}

// ===== HUMIDEX =====

/// Canadian humidex from air temperature and dew point (dimensionless, °C scale)
pub fn humidex(temp: Temperature, dew_point: Temperature) -> f64 {
    let vapor_pressure = HUMIDEX_VAPOR_PRESSURE_REF_HPA
        * (HUMIDEX_LATENT_RATIO_K * (1.0 / HUMIDEX_TRIPLE_POINT_K - 1.0 / dew_point.kelvin())).exp();
    temp.celsius() + HUMIDEX_SCALE * (vapor_pressure - HUMIDEX_VAPOR_OFFSET_HPA)
}

/// How a humidex value feels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumidexPerception {
    /// Below 30
    Comfortable,
    /// 30 to below 40
    NoticeableDiscomfort,
    /// 40 to below 46
    EvidentDiscomfort,
    /// 46 to below 54
    DangerousDiscomfort,
    /// 54 and above
    HeatStroke,
}

const HUMIDEX_BANDS: [(f64, HumidexPerception); 5] = [
    (f64::NEG_INFINITY, HumidexPerception::Comfortable),
    (30.0, HumidexPerception::NoticeableDiscomfort),
    (40.0, HumidexPerception::EvidentDiscomfort),
    (46.0, HumidexPerception::DangerousDiscomfort),
    (54.0, HumidexPerception::HeatStroke),
];

impl HumidexPerception {
    /// Band for a humidex value
    pub fn from_humidex(humidex: f64) -> Self {
        band_for(humidex, &HUMIDEX_BANDS).unwrap_or(Self::Comfortable)
    }
}

impl Labelled for HumidexPerception {
    fn label(&self) -> &'static str {
        match self {
            Self::Comfortable => "Comfortable",
            Self::NoticeableDiscomfort => "Noticeable discomfort",
            Self::EvidentDiscomfort => "Evident discomfort",
            Self::DangerousDiscomfort => "Dangerous discomfort",
            Self::HeatStroke => "Heat stroke",
        }
    }
}

// ===== THERMAL PERCEPTION =====

/// How muggy the air feels, judged from the dew point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermalPerception {
    /// Dew point below 10 °C
    Dry,
    /// 10 °C
    VeryComfortable,
    /// 13 °C
    Comfortable,
    /// 16 °C
    OkButHumid,
    /// 18 °C
    SomewhatUncomfortable,
    /// 21 °C
    QuiteUncomfortable,
    /// 24 °C
    ExtremelyUncomfortable,
    /// 26 °C and above
    SeverelyHigh,
}

const THERMAL_BANDS_C: [(f64, ThermalPerception); 8] = [
    (f64::NEG_INFINITY, ThermalPerception::Dry),
    (10.0, ThermalPerception::VeryComfortable),
    (13.0, ThermalPerception::Comfortable),
    (16.0, ThermalPerception::OkButHumid),
    (18.0, ThermalPerception::SomewhatUncomfortable),
    (21.0, ThermalPerception::QuiteUncomfortable),
    (24.0, ThermalPerception::ExtremelyUncomfortable),
    (26.0, ThermalPerception::SeverelyHigh),
];

impl ThermalPerception {
    /// Band for a dew point
    pub fn from_dew_point(dew_point: Temperature) -> Self {
        band_for(dew_point.celsius(), &THERMAL_BANDS_C).unwrap_or(Self::Dry)
    }

    /// Band for air temperature and humidity
    pub fn from_conditions(temp: Temperature, humidity: f64) -> Self {
        Self::from_dew_point(dew_point(temp, humidity))
    }
}

impl Labelled for ThermalPerception {
    fn label(&self) -> &'static str {
        match self {
            Self::Dry => "Dry",
            Self::VeryComfortable => "Very comfortable",
            Self::Comfortable => "Comfortable",
            Self::OkButHumid => "OK but humid",
            Self::SomewhatUncomfortable => "Somewhat uncomfortable",
            Self::QuiteUncomfortable => "Quite uncomfortable",
            Self::ExtremelyUncomfortable => "Extremely uncomfortable",
            Self::SeverelyHigh => "Severely high",
        }
    }
}

// ===== RELATIVE STRAIN INDEX =====

/// Relative strain index, defined for 26-35 °C
pub fn relative_strain_index(temp: Temperature, humidity: f64) -> CalculationResult<f64> {
    let t = temp.celsius();
    if !(RSI_MIN_C..=RSI_MAX_C).contains(&t) {
        return Err(CalculationError::OutOfDomain {
            reason: "relative strain index needs 26-35 °C",
        });
    }

    let vapor_pressure = humidity.clamp(0.0, 100.0) / 100.0 * saturation_vapor_pressure(temp);
    Ok((t - RSI_REFERENCE_C) / (RSI_SKIN_VAPOR_PRESSURE_HPA - vapor_pressure))
}

/// How a relative strain index feels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeStrainPerception {
    /// Below 0.25
    Comfortable,
    /// 0.25
    SlightDiscomfort,
    /// 0.35
    Discomfort,
    /// 0.45
    SignificantDiscomfort,
    /// 0.55 and above
    ExtremeDiscomfort,
}

const STRAIN_BANDS: [(f64, RelativeStrainPerception); 5] = [
    (f64::NEG_INFINITY, RelativeStrainPerception::Comfortable),
    (0.25, RelativeStrainPerception::SlightDiscomfort),
    (0.35, RelativeStrainPerception::Discomfort),
    (0.45, RelativeStrainPerception::SignificantDiscomfort),
    (0.55, RelativeStrainPerception::ExtremeDiscomfort),
];

impl RelativeStrainPerception {
    /// Band for a strain index
    pub fn from_index(index: f64) -> Self {
        band_for(index, &STRAIN_BANDS).unwrap_or(Self::Comfortable)
    }
}

impl Labelled for RelativeStrainPerception {
    fn label(&self) -> &'static str {
        match self {
            Self::Comfortable => "Comfortable",
            Self::SlightDiscomfort => "Slight discomfort",
            Self::Discomfort => "Discomfort",
            Self::SignificantDiscomfort => "Significant discomfort",
            Self::ExtremeDiscomfort => "Extreme discomfort",
        }
    }
}
