//! Error Types for Calculation and Configuration
//!
//! ## Two Kinds of Failure
//!
//! The engine separates failures by *when* they can happen:
//!
//! ### Configuration errors (fatal, up front)
//! An unknown unit system or battery strategy name is rejected while the
//! [`CalculationConfig`](crate::CalculationConfig) is being built. No payload is
//! ever calculated with a half-valid configuration.
//!
//! ### Calculation errors (local, recovered)
//! A single field that is not a number, or a formula asked for a value outside
//! its domain (wind chill on a hot day), produces a [`CalculationError`]. The
//! dispatch layer turns every one of these into a null reading for that field
//! only. They never escape [`calculate`](crate::calculate).
//!
//! ```rust
//! use wxgate_core::{CalculationError, UnitSystem};
//!
//! let parsed: Result<UnitSystem, _> = "kelvin".parse();
//! assert!(parsed.is_err());
//!
//! let outcome = wxgate_core::meteo::simmer_index(
//!     wxgate_core::meteo::Temperature::new(50.0, UnitSystem::Imperial),
//!     40.0,
//! );
//! assert!(matches!(outcome, Err(CalculationError::OutOfDomain { .. })));
//! ```

use thiserror_no_std::Error;

/// Result type for calculation operations
pub type CalculationResult<T> = Result<T, CalculationError>;

/// Errors raised while computing a single reading. Kept `Copy` so calculators can
/// return them cheaply from every helper.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CalculationError {
    /// Value could not be read as a finite number
    #[error("Not a number")]
    NotANumber,

    /// Formula is not defined for these inputs
    #[error("Outside formula domain: {reason}")]
    OutOfDomain {
        /// Which constraint was violated
        reason: &'static str,
    },

    /// A companion reading the calculator needs is absent
    #[error("Missing input: {key}")]
    MissingInput {
        /// Key of the absent reading
        key: &'static str,
    },
}

/// Configuration errors, surfaced before any calculation runs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Unit system name is not `imperial` or `metric`
    #[error("Invalid unit system: {0}")]
    InvalidUnitSystem(String),

    /// Battery strategy name is not `boolean`, `numeric` or `percentage`
    #[error("Invalid battery strategy: {0}")]
    InvalidBatteryStrategy(String),

    /// Battery override entry is not of the form `key=strategy`
    #[error("Invalid battery override: {0}")]
    InvalidBatteryOverride(String),

    /// Precision outside the supported range
    #[error("Precision {requested} exceeds maximum {max}")]
    InvalidPrecision {
        /// Requested number of decimal places
        requested: u32,
        /// Largest supported number of decimal places
        max: u32,
    },
}
