//! Core traits shared by calculators
//!
//! Kept small on purpose: the calculators themselves are a closed enum, these
//! only cover the pieces several modules need to agree on.

/// Trait for values that can be used in a calculation
pub trait Validatable {
    /// Check the value is a usable number (not NaN, not infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

/// A perception band or scale level with a human-readable label
pub trait Labelled {
    /// Label published as the reading's value
    fn label(&self) -> &'static str;
}

/// Pick the band for `value` from an ascending `(lower bound, band)` table.
///
/// Lower bounds are inclusive. Values below the first bound get the first band.
pub fn band_for<T: Copy>(value: f64, table: &[(f64, T)]) -> Option<T> {
    let (_, first) = table.first()?;
    Some(
        table
            .iter()
            .rev()
            .find(|(lower, _)| value >= *lower)
            .map_or(*first, |(_, band)| *band),
    )
}
