//! Error types for rainbow operations.
//!
//! `RainbowError` covers unit parsing/conversion, quantity lookup and shape
//! validation. It uses `thiserror` so downstream crates can wrap it with
//! `#[from]`.

use thiserror::Error;

use crate::units::Dimension;

/// Error type for rainbow operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RainbowError {
    /// A unit string that does not name any supported unit
    #[error("Unrecognized unit '{unit}'")]
    InvalidUnit { unit: String },

    /// Two units measure different physical dimensions
    #[error("Cannot convert from '{from}' ({from_dimension}) to '{to}' ({to_dimension})")]
    UnitConversion {
        from: String,
        to: String,
        from_dimension: Dimension,
        to_dimension: Dimension,
    },

    /// A fluxlike quantity was requested that the rainbow does not hold
    #[error("Unknown quantity '{name}'; available quantities: [{}]", available.join(", "))]
    UnknownQuantity {
        name: String,
        available: Vec<String>,
    },

    /// A fluxlike array does not match the (nwave, ntime) grid
    #[error(
        "Quantity '{name}' has shape {actual:?} but the rainbow expects (nwave, ntime) = {expected:?}"
    )]
    ShapeMismatch {
        name: String,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// An axis has no centers, so neither edges nor an index axis can be built
    #[error("No {axis} centers are defined; cannot derive {axis} edges")]
    MissingCenters { axis: String },
}

impl RainbowError {
    /// Create an InvalidUnit error
    pub fn invalid_unit(unit: impl Into<String>) -> Self {
        Self::InvalidUnit { unit: unit.into() }
    }

    /// Create an UnknownQuantity error listing what is available
    pub fn unknown_quantity<I, S>(name: impl Into<String>, available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut available: Vec<String> = available.into_iter().map(Into::into).collect();
        available.sort();
        Self::UnknownQuantity {
            name: name.into(),
            available,
        }
    }

    /// Create a MissingCenters error for the named axis
    pub fn missing_centers(axis: impl Into<String>) -> Self {
        Self::MissingCenters {
            axis: axis.into().to_lowercase(),
        }
    }
}

// Type alias for Result using RainbowError
pub type Result<T> = std::result::Result<T, RainbowError>;
