//! Beaufort Wind Force
//!
//! The scale is looked up in the unit the gateway reported the wind in. The mph
//! and km/h tables are each rounded to whole units, so converting first and then
//! looking up can land one force off at the band edges.

use super::WindSpeed;
use crate::config::UnitSystem;
use crate::constants::thresholds::{BEAUFORT_LOWER_KMH, BEAUFORT_LOWER_MPH};
use crate::traits::Labelled;

/// Beaufort force 0-12
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BeaufortScale(u8);

impl BeaufortScale {
    /// Force number 0-12
    pub fn force(self) -> u8 {
        self.0
    }
}

impl Labelled for BeaufortScale {
    fn label(&self) -> &'static str {
        match self.0 {
            0 => "Calm",
            1 => "Light air",
            2 => "Light breeze",
            3 => "Gentle breeze",
            4 => "Moderate breeze",
            5 => "Fresh breeze",
            6 => "Strong breeze",
            7 => "Near gale",
            8 => "Gale",
            9 => "Strong gale",
            10 => "Storm",
            11 => "Violent storm",
            _ => "Hurricane force",
        }
    }
}

/// Beaufort force for `wind`, using the table for `system`
pub fn beaufort_scale(wind: WindSpeed, system: UnitSystem) -> BeaufortScale {
    let (speed, table) = match system {
        UnitSystem::Imperial => (wind.mph(), &BEAUFORT_LOWER_MPH),
        UnitSystem::Metric => (wind.kmh(), &BEAUFORT_LOWER_KMH),
    };

    let force = table.iter().rposition(|lower| speed >= *lower).unwrap_or(0);
    // Tables have 13 entries
    BeaufortScale(force as u8)
}
